//! Uniform single pick: roll an n-faced die over the option list.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::{GameError, draw_index, require_options};

/// Outcome of one dice roll. The index is kept for row highlighting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiceRoll {
    pub index: usize,
    pub label: String,
}

/// Roll once over `options` with the supplied random source.
///
/// # Errors
///
/// Returns [`GameError::NotEnoughOptions`] when fewer than two options
/// are supplied; a one-sided die is not a decision.
pub fn roll_dice_with_rng(options: &[String], rng: &mut impl Rng) -> Result<DiceRoll, GameError> {
    require_options(options, 2)?;
    let index = draw_index(rng, options.len());
    Ok(DiceRoll {
        index,
        label: options[index].clone(),
    })
}

/// Roll once over `options` using the thread-local random source.
///
/// # Errors
///
/// Returns [`GameError::NotEnoughOptions`] when fewer than two options
/// are supplied.
pub fn roll_dice(options: &[String]) -> Result<DiceRoll, GameError> {
    roll_dice_with_rng(options, &mut rand::thread_rng())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn options(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("지역{i}")).collect()
    }

    #[test]
    fn roll_returns_label_at_index() {
        let opts = options(5);
        let mut rng = SmallRng::seed_from_u64(3);
        for _ in 0..100 {
            let roll = roll_dice_with_rng(&opts, &mut rng).unwrap();
            assert!(roll.index < opts.len());
            assert_eq!(roll.label, opts[roll.index]);
        }
    }

    #[test]
    fn single_option_is_not_playable() {
        let opts = options(1);
        assert_eq!(
            roll_dice(&opts),
            Err(GameError::NotEnoughOptions { needed: 2, got: 1 })
        );
    }

    #[test]
    fn repeated_rolls_are_independent_draws() {
        let opts = options(4);
        let mut rng = SmallRng::seed_from_u64(9);
        let mut seen = [false; 4];
        for _ in 0..200 {
            seen[roll_dice_with_rng(&opts, &mut rng).unwrap().index] = true;
        }
        assert!(seen.iter().all(|hit| *hit), "every face should come up");
    }

    #[test]
    fn duplicate_labels_are_positional() {
        let opts = vec!["부산광역시".to_string(), "부산광역시".to_string()];
        let mut rng = SmallRng::seed_from_u64(1);
        let roll = roll_dice_with_rng(&opts, &mut rng).unwrap();
        assert_eq!(roll.label, "부산광역시");
    }
}
