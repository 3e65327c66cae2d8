use serde::{Deserialize, Serialize};
use yew_router::prelude::*;

#[derive(Clone, Debug, Routable, PartialEq, Eq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/regions")]
    RegionSelect,
    #[at("/mode")]
    GameMode,
    #[at("/dice")]
    Dice,
    #[at("/ladder")]
    Ladder,
    #[at("/roulette")]
    Roulette,
    #[at("/trips/:id")]
    TripDetail { id: u32 },
    #[at("/404")]
    #[not_found]
    NotFound,
}

/// The `areas=` query carried from the region picker into the game
/// pages.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AreasQuery {
    #[serde(default)]
    pub areas: String,
}

impl AreasQuery {
    #[must_use]
    pub fn from_labels(labels: &[String]) -> Self {
        Self {
            areas: labels.join(","),
        }
    }

    /// Region labels from the query value: split on commas, trimmed,
    /// empty segments dropped.
    #[must_use]
    pub fn labels(&self) -> Vec<String> {
        tripick_core::parse_areas(&self.areas)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn areas_query_round_trips_labels() {
        let labels = vec!["서울특별시".to_string(), "부산광역시".to_string()];
        let query = AreasQuery::from_labels(&labels);
        assert_eq!(query.labels(), labels);
    }

    #[test]
    fn blank_query_has_no_labels() {
        assert!(AreasQuery::default().labels().is_empty());
    }
}
