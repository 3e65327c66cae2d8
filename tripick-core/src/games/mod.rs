//! Region decision mini-games: dice, ladder, and roulette.
//!
//! All three strategies pick over the same input shape, an ordered list
//! of display labels. Draws go through [`rand::Rng::gen_range`], which
//! samples without modulo bias. Each entry point takes `&mut impl Rng`;
//! the plain variants draw from `thread_rng`.

use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod wheel;

mod dice;
mod ladder;
mod roulette;

pub use dice::{DiceRoll, roll_dice, roll_dice_with_rng};
pub use ladder::{LadderResult, run_ladder, run_ladder_with_rng};
pub use roulette::{
    EXTRA_REVOLUTIONS, REVEAL_DELAY_MS, SpinResult, spin_roulette, spin_roulette_with_rng,
};

/// Why a game could not be played with the supplied options. Surfaced
/// to the UI as a guidance state ("select at least 2 regions"), never a
/// panic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum GameError {
    #[error("{needed} or more options are required, got {got}")]
    NotEnoughOptions { needed: usize, got: usize },
}

fn require_options(options: &[String], needed: usize) -> Result<(), GameError> {
    if options.len() < needed {
        return Err(GameError::NotEnoughOptions {
            needed,
            got: options.len(),
        });
    }
    Ok(())
}

fn draw_index(rng: &mut impl Rng, len: usize) -> usize {
    rng.gen_range(0..len)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn draw_index_stays_in_range() {
        let mut rng = SmallRng::seed_from_u64(11);
        for len in 1..=17 {
            for _ in 0..200 {
                assert!(draw_index(&mut rng, len) < len);
            }
        }
    }

    #[test]
    fn require_options_reports_shortfall() {
        let one = vec!["서울특별시".to_string()];
        assert_eq!(
            require_options(&one, 2),
            Err(GameError::NotEnoughOptions { needed: 2, got: 1 })
        );
        assert_eq!(require_options(&one, 1), Ok(()));
    }
}
