//! The fixed region catalog and the selection set over it.

/// The 17 first-level regions offered by the picker.
pub const AREA_CATALOG: [&str; 17] = [
    "서울특별시",
    "부산광역시",
    "대구광역시",
    "인천광역시",
    "광주광역시",
    "대전광역시",
    "울산광역시",
    "세종특별자치시",
    "경기도",
    "강원특별자치도",
    "충청북도",
    "충청남도",
    "전북특별자치도",
    "전라남도",
    "경상북도",
    "경상남도",
    "제주특별자치도",
];

/// Synthetic catalog entry rendered as one more button. Toggling it
/// selects everything or clears everything; it is never itself a
/// member of the selection.
pub const SELECT_ALL: &str = "전체 선택";

/// Selected region labels in stable insertion order. Consumers only
/// test membership and count, but the order is kept deterministic for
/// direct rendering.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AreaSelection {
    chosen: Vec<String>,
}

impl AreaSelection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn labels(&self) -> &[String] {
        &self.chosen
    }

    #[must_use]
    pub fn contains(&self, label: &str) -> bool {
        self.chosen.iter().any(|chosen| chosen == label)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.chosen.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chosen.is_empty()
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.chosen.len() == AREA_CATALOG.len()
    }

    /// Toggle one catalog button. [`SELECT_ALL`] fills the selection
    /// with the whole catalog unless it is already full, in which case
    /// it clears; any other label flips its own membership, appending
    /// at the end when newly selected.
    pub fn toggle(&mut self, label: &str) {
        if label == SELECT_ALL {
            if self.is_full() {
                self.chosen.clear();
            } else {
                self.chosen = AREA_CATALOG.iter().map(ToString::to_string).collect();
            }
            return;
        }
        if let Some(pos) = self.chosen.iter().position(|chosen| chosen == label) {
            self.chosen.remove(pos);
        } else {
            self.chosen.push(label.to_string());
        }
    }
}
