//! Roulette: spin the wheel to a drawn slice, reveal after the
//! animation.
//!
//! The winner index is drawn first and the rotation is computed from
//! it; nothing derives the winner back from the rendered angle, so the
//! pointer and the revealed label can never disagree at a slice
//! boundary.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::wheel::slice_width;
use super::{GameError, draw_index, require_options};

/// Full extra turns applied before the wheel settles on its target.
pub const EXTRA_REVOLUTIONS: f64 = 5.0;

/// How long the spin animation runs before the caller may reveal the
/// winner. The caller owns the timer; the engine only separates
/// "compute" from "reveal".
pub const REVEAL_DELAY_MS: u32 = 4_200;

/// Outcome of one spin: the rotation to animate to (may exceed 360 to
/// force visible revolutions) and the already-resolved winner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpinResult {
    pub index: usize,
    pub label: String,
    pub rotation_deg: f64,
}

impl SpinResult {
    /// Where the pointer rests once the animation ends, in wheel
    /// coordinates, normalized to `[0, 360)`.
    #[must_use]
    pub fn resting_angle(&self) -> f64 {
        (360.0 - self.rotation_deg.rem_euclid(360.0)).rem_euclid(360.0)
    }
}

/// Spin over `options` with the supplied random source. Slices are
/// assigned in input order from the top of the wheel; the rotation
/// brings the drawn slice's midpoint under the pointer after
/// [`EXTRA_REVOLUTIONS`] full turns.
///
/// # Errors
///
/// Returns [`GameError::NotEnoughOptions`] for an empty option list.
/// A single option is legal and settles on that option every time.
pub fn spin_roulette_with_rng(
    options: &[String],
    rng: &mut impl Rng,
) -> Result<SpinResult, GameError> {
    require_options(options, 1)?;
    let index = draw_index(rng, options.len());
    let slice = slice_width(options.len());
    let midpoint = (index as f64).mul_add(slice, slice / 2.0);
    let rotation_deg = EXTRA_REVOLUTIONS.mul_add(360.0, 360.0 - midpoint);
    Ok(SpinResult {
        index,
        label: options[index].clone(),
        rotation_deg,
    })
}

/// Spin using the thread-local random source.
///
/// # Errors
///
/// Returns [`GameError::NotEnoughOptions`] for an empty option list.
pub fn spin_roulette(options: &[String]) -> Result<SpinResult, GameError> {
    spin_roulette_with_rng(options, &mut rand::thread_rng())
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
    fn empty_wheel_is_invalid() {
        assert_eq!(
            spin_roulette(&[]),
            Err(GameError::NotEnoughOptions { needed: 1, got: 0 })
        );
    }

    #[test]
    fn single_slice_always_wins() {
        let opts = options(1);
        let mut rng = SmallRng::seed_from_u64(4);
        for _ in 0..10 {
            let spin = spin_roulette_with_rng(&opts, &mut rng).unwrap();
            assert_eq!(spin.index, 0);
            assert_eq!(spin.label, "지역0");
        }
    }

    #[test]
    fn rotation_includes_extra_revolutions() {
        let opts = options(8);
        let mut rng = SmallRng::seed_from_u64(6);
        let spin = spin_roulette_with_rng(&opts, &mut rng).unwrap();
        assert!(spin.rotation_deg > EXTRA_REVOLUTIONS * 360.0 - 360.0);
        assert!(spin.rotation_deg <= (EXTRA_REVOLUTIONS + 1.0) * 360.0);
    }

    #[test]
    fn resting_angle_is_winning_slice_midpoint() {
        for n in 1..=17 {
            let opts = options(n);
            let slice = slice_width(n);
            let mut rng = SmallRng::seed_from_u64(n as u64);
            for _ in 0..20 {
                let spin = spin_roulette_with_rng(&opts, &mut rng).unwrap();
                let midpoint = (spin.index as f64).mul_add(slice, slice / 2.0);
                let diff = (spin.resting_angle() - midpoint.rem_euclid(360.0)).abs();
                assert!(diff < 1e-9 || (360.0 - diff) < 1e-9, "n={n} diff={diff}");
            }
        }
    }

    #[test]
    fn resting_angle_lands_inside_winning_slice() {
        let opts = options(13);
        let slice = slice_width(13);
        let mut rng = SmallRng::seed_from_u64(99);
        for _ in 0..100 {
            let spin = spin_roulette_with_rng(&opts, &mut rng).unwrap();
            let angle = spin.resting_angle();
            let start = spin.index as f64 * slice;
            assert!(angle >= start && angle < start + slice);
        }
    }
}
