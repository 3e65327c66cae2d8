//! Reordering invariants over whole drag sequences, driven by the
//! bundled sample data so the shapes match what the pages feed in.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use tripick_core::itinerary::{ItineraryDay, PlaceKind};
use tripick_core::{centroid, sample_trip};

fn first_sample_day() -> ItineraryDay {
    sample_trip(1).unwrap().days[0].clone()
}

#[test]
fn random_move_sequences_never_touch_the_departure() {
    let day = first_sample_day();
    let place_ids: Vec<u32> = day
        .items
        .iter()
        .filter(|item| item.kind == PlaceKind::Place)
        .map(|item| item.id)
        .collect();
    assert!(place_ids.len() >= 2);

    let departure_id = day.items[0].id;
    let mut rng = ChaCha20Rng::seed_from_u64(0xD1CE);
    let mut working = day.clone();
    for _ in 0..500 {
        let a = place_ids[rng.gen_range(0..place_ids.len())];
        let b = place_ids[rng.gen_range(0..place_ids.len())];
        let _ = working.move_item(a, b);
        assert_eq!(working.items[0].id, departure_id);
        assert_eq!(working.items[0].kind, PlaceKind::Departure);
        assert_eq!(working.items.len(), day.items.len());
    }

    let mut ids: Vec<u32> = working.items.iter().map(|item| item.id).collect();
    ids.sort_unstable();
    let mut original: Vec<u32> = day.items.iter().map(|item| item.id).collect();
    original.sort_unstable();
    assert_eq!(ids, original, "moves permute, never add or drop");
}

#[test]
fn single_move_round_trip_restores_order() {
    let mut day = first_sample_day();
    let before = day.clone();

    // Drag item 2 onto item 4's slot, then back onto item 3's slot,
    // which is where it originally sat.
    day.move_item(2, 4).unwrap();
    assert_ne!(day, before);
    day.move_item(2, 3).unwrap();
    assert_eq!(day, before);
}

#[test]
fn rejected_moves_leave_sample_day_intact() {
    let mut day = first_sample_day();
    let before = day.clone();
    let departure_id = day.items[0].id;

    assert!(day.move_item(departure_id, 2).is_err());
    assert!(day.move_item(2, departure_id).is_err());
    assert!(day.move_item(2, 2).is_err());
    assert!(day.move_item(2, 1000).is_err());
    assert_eq!(day, before);
}

#[test]
fn map_center_follows_the_day_coords() {
    let day = first_sample_day();
    let coords = day.coords();
    assert!(coords.len() >= 2, "sample day should be mappable");
    let center = centroid(&coords);
    let min_lat = coords.iter().map(|c| c.lat).fold(f64::INFINITY, f64::min);
    let max_lat = coords
        .iter()
        .map(|c| c.lat)
        .fold(f64::NEG_INFINITY, f64::max);
    assert!(center.lat >= min_lat && center.lat <= max_lat);
}
