//! Trip data model mirroring the backend JSON, plus the bundled sample
//! set the pages fall back to when a fetch fails.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::itinerary::ItineraryDay;

const SAMPLE_TRIPS_DATA: &str = include_str!("../../tripick-web/static/assets/data/trips.json");

/// One day as delivered by the backend; identical shape to the owned
/// [`ItineraryDay`] state.
pub type TripDay = ItineraryDay;

/// A trip with its full day-by-day itinerary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripDetail {
    pub id: u32,
    pub title: String,
    pub destination: String,
    pub date: String,
    pub days: Vec<TripDay>,
}

impl TripDetail {
    #[must_use]
    pub fn day(&self, day: u32) -> Option<&TripDay> {
        self.days.iter().find(|d| d.day == day)
    }

    #[must_use]
    pub fn day_mut(&mut self, day: u32) -> Option<&mut TripDay> {
        self.days.iter_mut().find(|d| d.day == day)
    }
}

/// List-view projection of a trip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TripSummary {
    pub id: u32,
    pub title: String,
    pub destination: String,
    pub date: String,
}

impl From<&TripDetail> for TripSummary {
    fn from(trip: &TripDetail) -> Self {
        Self {
            id: trip.id,
            title: trip.title.clone(),
            destination: trip.destination.clone(),
            date: trip.date.clone(),
        }
    }
}

static SAMPLE_TRIPS: Lazy<Vec<TripDetail>> =
    Lazy::new(|| serde_json::from_str(SAMPLE_TRIPS_DATA).unwrap_or_default());

/// The bundled sample trips, used when the backend is unreachable.
#[must_use]
pub fn sample_trips() -> &'static [TripDetail] {
    &SAMPLE_TRIPS
}

/// The bundled sample trip with the given id, if any.
#[must_use]
pub fn sample_trip(id: u32) -> Option<&'static TripDetail> {
    SAMPLE_TRIPS.iter().find(|trip| trip.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::itinerary::PlaceKind;

    #[test]
    fn bundled_sample_data_parses() {
        assert!(!sample_trips().is_empty());
        assert!(sample_trip(1).is_some());
        assert!(sample_trip(999).is_none());
    }

    #[test]
    fn every_sample_day_has_one_pinned_departure() {
        for trip in sample_trips() {
            for day in &trip.days {
                assert_eq!(day.items[0].kind, PlaceKind::Departure);
                let departures = day
                    .items
                    .iter()
                    .filter(|item| item.kind == PlaceKind::Departure)
                    .count();
                assert_eq!(departures, 1, "trip {} day {}", trip.id, day.day);
            }
        }
    }

    #[test]
    fn sample_item_ids_are_unique_per_day() {
        for trip in sample_trips() {
            for day in &trip.days {
                let mut ids: Vec<u32> = day.items.iter().map(|item| item.id).collect();
                ids.sort_unstable();
                ids.dedup();
                assert_eq!(ids.len(), day.items.len());
            }
        }
    }

    #[test]
    fn summary_projects_trip_fields() {
        let trip = sample_trip(1).unwrap();
        let summary = TripSummary::from(trip);
        assert_eq!(summary.id, trip.id);
        assert_eq!(summary.title, trip.title);
    }

    #[test]
    fn day_lookup_by_number() {
        let trip = sample_trip(1).unwrap();
        assert!(trip.day(1).is_some());
        assert!(trip.day(99).is_none());
    }
}
