//! Tripick Core Engine
//!
//! Platform-agnostic logic for the Tripick travel planner: region
//! decision mini-games, itinerary reordering, geodistance math, and the
//! trip data model. This crate provides all behavior without UI or
//! platform-specific dependencies.

pub mod areas;
pub mod games;
pub mod geo;
pub mod itinerary;
pub mod query;
pub mod review;
pub mod trip;

// Re-export commonly used types
pub use areas::{AREA_CATALOG, AreaSelection, SELECT_ALL};
pub use games::{
    DiceRoll, GameError, LadderResult, SpinResult, roll_dice, roll_dice_with_rng, run_ladder,
    run_ladder_with_rng, spin_roulette, spin_roulette_with_rng,
};
pub use games::wheel::{SliceGeometry, WheelLayout, sector_path, slice_width};
pub use geo::{
    Coord, MarkerStyle, PolylineStyle, SEOUL_CITY_HALL, centroid, distance_km, first_leg_path,
    format_distance, marker_style, polyline_style, route_path,
};
pub use itinerary::{ItineraryDay, ItineraryItem, MoveError, PlaceKind};
pub use query::{encode_areas, parse_areas};
pub use review::{ReviewDraft, ReviewError};
pub use trip::{TripDay, TripDetail, TripSummary, sample_trip, sample_trips};
