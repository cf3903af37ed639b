//! Filter sheet state and the option catalogs it offers.

use super::query::{FilterKey, FilterMap};

/// Category chips shown above the grid
pub const CATEGORIES: [&str; 20] = [
    "backgrounds",
    "fashion",
    "nature",
    "science",
    "education",
    "feelings",
    "health",
    "people",
    "religion",
    "places",
    "animals",
    "industry",
    "computer",
    "food",
    "sports",
    "transportation",
    "travel",
    "buildings",
    "business",
    "music",
];

const ORDER_OPTIONS: &[&str] = &["popular", "latest"];
const ORIENTATION_OPTIONS: &[&str] = &["horizontal", "vertical"];
const TYPE_OPTIONS: &[&str] = &["photo", "illustration", "vector"];
const COLOR_OPTIONS: &[&str] = &[
    "red",
    "orange",
    "yellow",
    "green",
    "turquoise",
    "blue",
    "pink",
    "gray",
    "black",
    "brown",
    "white",
];

impl FilterKey {
    /// Values the sheet offers for this key
    pub fn options(self) -> &'static [&'static str] {
        match self {
            FilterKey::Order => ORDER_OPTIONS,
            FilterKey::Orientation => ORIENTATION_OPTIONS,
            FilterKey::Type => TYPE_OPTIONS,
            FilterKey::Colors => COLOR_OPTIONS,
        }
    }

    /// Colors render as swatches instead of text chips
    pub fn is_swatch(self) -> bool {
        self == FilterKey::Colors
    }
}

/// Selections being made in the filter sheet before they are applied
///
/// Selecting a value for a key replaces that key's previous value; there is
/// no toggle-off, the sheet's reset is the way back to nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterPanel {
    draft: FilterMap,
}

impl FilterPanel {
    /// Open the sheet showing the filters currently applied
    pub fn new(applied: &FilterMap) -> Self {
        Self {
            draft: applied.clone(),
        }
    }

    pub fn select(&mut self, key: FilterKey, value: impl Into<String>) {
        self.draft.insert(key, value.into());
    }

    /// Drives the highlighted state of an option
    pub fn is_selected(&self, key: FilterKey, value: &str) -> bool {
        self.draft.get(&key).is_some_and(|v| v == value)
    }

    pub fn draft(&self) -> &FilterMap {
        &self.draft
    }

    /// Hand the selection over for applying
    pub fn take(self) -> FilterMap {
        self.draft
    }
}
