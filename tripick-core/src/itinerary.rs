//! Per-day itinerary state and drag-and-drop reordering.
//!
//! Each day owns one ordered item list whose first entry is the pinned
//! departure point. Moves are splice-out / splice-in: the dragged item
//! takes the target's slot and everything between shifts by one. One
//! state is instantiated per day view and discarded on navigation; the
//! host delivers drag events serially, so no locking is involved.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::geo::Coord;

/// Whether an entry is the pinned departure point or a reorderable
/// place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlaceKind {
    Departure,
    Place,
}

/// One itinerary entry. The metadata fields are display-only and play
/// no part in reordering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItineraryItem {
    pub id: u32,
    #[serde(rename = "type")]
    pub kind: PlaceKind,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lat: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lng: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tel: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reviews: Option<u32>,
}

impl ItineraryItem {
    /// Coordinates when both components are present.
    #[must_use]
    pub fn coord(&self) -> Option<Coord> {
        match (self.lat, self.lng) {
            (Some(lat), Some(lng)) => Some(Coord { lat, lng }),
            _ => None,
        }
    }
}

/// Why a requested move was ignored. State is untouched in every case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum MoveError {
    #[error("no item with id {0} in this day")]
    UnknownItem(u32),
    #[error("the departure point is pinned and cannot be reordered")]
    DeparturePinned,
    #[error("an item cannot be moved onto itself")]
    SameItem,
}

/// One day of an itinerary: an ordered item list with the departure
/// point pinned at index 0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItineraryDay {
    pub day: u32,
    pub items: Vec<ItineraryItem>,
}

impl ItineraryDay {
    #[must_use]
    pub fn item(&self, id: u32) -> Option<&ItineraryItem> {
        self.items.iter().find(|item| item.id == id)
    }

    fn index_of(&self, id: u32) -> Option<usize> {
        self.items.iter().position(|item| item.id == id)
    }

    /// Move the item `id` into the slot currently held by `target_id`.
    /// Items between the two positions shift by one; this is not a
    /// swap. Rejected moves leave the list exactly as it was.
    ///
    /// # Errors
    ///
    /// [`MoveError::UnknownItem`] when either id is absent,
    /// [`MoveError::DeparturePinned`] when either id names the
    /// departure entry, [`MoveError::SameItem`] when the ids match.
    pub fn move_item(&mut self, id: u32, target_id: u32) -> Result<(), MoveError> {
        if id == target_id {
            return Err(MoveError::SameItem);
        }
        let from = self.index_of(id).ok_or(MoveError::UnknownItem(id))?;
        let to = self
            .index_of(target_id)
            .ok_or(MoveError::UnknownItem(target_id))?;
        if self.items[from].kind == PlaceKind::Departure
            || self.items[to].kind == PlaceKind::Departure
        {
            return Err(MoveError::DeparturePinned);
        }
        let moved = self.items.remove(from);
        self.items.insert(to, moved);
        Ok(())
    }

    /// Coordinates of every item that has them, in itinerary order.
    #[must_use]
    pub fn coords(&self) -> Vec<Coord> {
        self.items.iter().filter_map(ItineraryItem::coord).collect()
    }
}
