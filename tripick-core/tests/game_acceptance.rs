//! Statistical acceptance checks for the mini-game engines, run on a
//! fixed seed so the tolerances are stable.

use std::collections::HashMap;

use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use tripick_core::games::wheel::slice_width;
use tripick_core::{roll_dice_with_rng, run_ladder_with_rng, spin_roulette_with_rng};

fn regions(n: usize) -> Vec<String> {
    [
        "서울특별시",
        "부산광역시",
        "대구광역시",
        "인천광역시",
        "광주광역시",
        "대전광역시",
    ]
    .iter()
    .take(n)
    .map(ToString::to_string)
    .collect()
}

#[test]
fn dice_faces_come_up_near_uniformly() {
    let opts = regions(6);
    let mut rng = ChaCha20Rng::seed_from_u64(0x7219);
    let samples = 12_000;
    let mut counts = [0u32; 6];
    for _ in 0..samples {
        let roll = roll_dice_with_rng(&opts, &mut rng).unwrap();
        assert_eq!(roll.label, opts[roll.index]);
        counts[roll.index] += 1;
    }
    let expected = samples as f64 / 6.0;
    for (face, count) in counts.iter().enumerate() {
        let deviation = (f64::from(*count) - expected).abs() / expected;
        assert!(deviation < 0.10, "face {face}: {count} of {samples}");
    }
}

#[test]
fn ladder_permutations_appear_near_uniformly() {
    let opts = regions(3);
    let mut rng = ChaCha20Rng::seed_from_u64(0x0414);
    let samples = 12_000;
    let mut counts: HashMap<Vec<String>, u32> = HashMap::new();
    for _ in 0..samples {
        let result = run_ladder_with_rng(&opts, &mut rng).unwrap();
        *counts.entry(result.matches).or_insert(0) += 1;
    }
    assert_eq!(counts.len(), 6, "all 3! orderings should appear");
    let expected = samples as f64 / 6.0;
    for (perm, count) in &counts {
        let deviation = (f64::from(*count) - expected).abs() / expected;
        assert!(deviation < 0.10, "{perm:?}: {count} of {samples}");
    }
}

#[test]
fn ladder_output_is_always_a_permutation() {
    for n in 2..=6 {
        let opts = regions(n);
        let mut rng = ChaCha20Rng::seed_from_u64(n as u64);
        for _ in 0..200 {
            let result = run_ladder_with_rng(&opts, &mut rng).unwrap();
            assert_eq!(result.matches.len(), n);
            let mut sorted = result.matches.clone();
            sorted.sort();
            let mut expected = opts.clone();
            expected.sort();
            assert_eq!(sorted, expected);
        }
    }
}

#[test]
fn roulette_pointer_agrees_with_winner_for_every_index() {
    // Force every index by spinning until all have been drawn, then
    // check the slice-contains-resting-angle invariant per spin.
    for n in 1..=6 {
        let opts = regions(n);
        let slice = slice_width(n);
        let mut rng = ChaCha20Rng::seed_from_u64(0xC0DE + n as u64);
        let mut seen = vec![false; n];
        for _ in 0..500 {
            let spin = spin_roulette_with_rng(&opts, &mut rng).unwrap();
            seen[spin.index] = true;
            let angle = spin.resting_angle();
            let start = spin.index as f64 * slice;
            assert!(
                angle >= start - 1e-9 && angle < start + slice + 1e-9,
                "n={n} index={} angle={angle}",
                spin.index
            );
            assert_eq!(spin.label, opts[spin.index]);
        }
        assert!(seen.iter().all(|hit| *hit), "n={n}: every slice drawn");
    }
}

#[test]
fn roulette_slice_widths_sum_to_full_circle() {
    for n in 1..=17 {
        let total = slice_width(n) * n as f64;
        assert!((total - 360.0).abs() < 1e-9);
    }
}
