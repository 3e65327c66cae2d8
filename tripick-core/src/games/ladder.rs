//! Ladder game: match each input to a uniformly shuffled output.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::{GameError, require_options};

/// A full pairing of inputs to their shuffled matches. Row `i` of the
/// displayed table reads `inputs[i] → matches[i]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LadderResult {
    pub inputs: Vec<String>,
    pub matches: Vec<String>,
}

impl LadderResult {
    /// The match assigned to `input` row `i`, if any.
    #[must_use]
    pub fn match_for(&self, i: usize) -> Option<&str> {
        self.matches.get(i).map(String::as_str)
    }
}

/// Fisher–Yates shuffle into a fresh vector. Iterates from the last
/// index down to 1 and swaps with a uniform draw from `[0, i]`, so all
/// n! orderings are equally likely. A sort-by-random-key shuffle does
/// not have that property and must not be substituted here.
fn shuffled(options: &[String], rng: &mut impl Rng) -> Vec<String> {
    let mut out = options.to_vec();
    for i in (1..out.len()).rev() {
        let j = rng.gen_range(0..=i);
        out.swap(i, j);
    }
    out
}

/// Run the ladder over `options` with the supplied random source. The
/// caller's input is not mutated; re-running produces an independent
/// permutation, and the identity permutation is a legal outcome.
///
/// # Errors
///
/// Returns [`GameError::NotEnoughOptions`] when fewer than two options
/// are supplied.
pub fn run_ladder_with_rng(
    options: &[String],
    rng: &mut impl Rng,
) -> Result<LadderResult, GameError> {
    require_options(options, 2)?;
    Ok(LadderResult {
        inputs: options.to_vec(),
        matches: shuffled(options, rng),
    })
}

/// Run the ladder using the thread-local random source.
///
/// # Errors
///
/// Returns [`GameError::NotEnoughOptions`] when fewer than two options
/// are supplied.
pub fn run_ladder(options: &[String]) -> Result<LadderResult, GameError> {
    run_ladder_with_rng(options, &mut rand::thread_rng())
}
