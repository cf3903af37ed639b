//! The composed catalog query and the transitions that move it.
//!
//! Every user action is a pure function from the current [`Query`] to a
//! [`Transition`]: the next query plus an explicit [`MergeMode`] telling the
//! result list whether the fetched page replaces or extends it. [`QueryState`]
//! owns the live query and the epoch counter that tags each request.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Structured filters the search API understands
///
/// Keys are forwarded verbatim as request parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterKey {
    Order,
    Orientation,
    Type,
    Colors,
}

impl FilterKey {
    /// All keys, in chip display order
    pub const ALL: [FilterKey; 4] = [
        FilterKey::Order,
        FilterKey::Orientation,
        FilterKey::Type,
        FilterKey::Colors,
    ];

    /// Request parameter name
    pub fn as_str(self) -> &'static str {
        match self {
            FilterKey::Order => "order",
            FilterKey::Orientation => "orientation",
            FilterKey::Type => "type",
            FilterKey::Colors => "colors",
        }
    }
}

impl fmt::Display for FilterKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Filter name to filter value, one value per key
pub type FilterMap = BTreeMap<FilterKey, String>;

/// How a fetched page is merged into the result list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeMode {
    /// New query: the page becomes the whole result list
    Replace,
    /// Same query, next page: the page goes after the existing items
    Append,
}

/// The current composed query
///
/// `page` starts at 1 and only ever moves by +1 through [`Query::next_page`];
/// every other transition puts it back to 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    page: u32,
    text: String,
    category: Option<String>,
    filters: FilterMap,
}

/// The result of a query transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub query: Query,
    pub mode: MergeMode,
}

impl Default for Query {
    fn default() -> Self {
        Self::new()
    }
}

impl Query {
    /// The query at mount: page 1, nothing else set
    pub fn new() -> Self {
        Self {
            page: 1,
            text: String::new(),
            category: None,
            filters: FilterMap::new(),
        }
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    pub fn filters(&self) -> &FilterMap {
        &self.filters
    }

    /// Re-issue the current query from page 1
    pub fn refresh(&self) -> Transition {
        Transition {
            query: Query {
                page: 1,
                ..self.clone()
            },
            mode: MergeMode::Replace,
        }
    }

    /// A category chip was tapped (`None` deselects)
    ///
    /// The search box is cleared along with it, so the category request goes
    /// out without a `q`. Tapping the active category again still refetches.
    pub fn set_category(&self, category: Option<String>) -> Transition {
        Transition {
            query: Query {
                page: 1,
                text: String::new(),
                category,
                filters: self.filters.clone(),
            },
            mode: MergeMode::Replace,
        }
    }

    /// The search box settled on `text`
    ///
    /// Only an empty box or at least `min_chars` characters commit; anything
    /// shorter is ignored and returns `None`. Committing drops the category.
    pub fn set_text(&self, text: &str, min_chars: usize) -> Option<Transition> {
        if text.is_empty() {
            return Some(self.clear_text());
        }
        if text.chars().count() < min_chars {
            return None;
        }

        Some(Transition {
            query: Query {
                page: 1,
                text: text.to_string(),
                category: None,
                filters: self.filters.clone(),
            },
            mode: MergeMode::Replace,
        })
    }

    /// The search box was emptied; always commits and drops the category
    pub fn clear_text(&self) -> Transition {
        Transition {
            query: Query {
                page: 1,
                text: String::new(),
                category: None,
                filters: self.filters.clone(),
            },
            mode: MergeMode::Replace,
        }
    }

    /// The filter sheet was applied with `filters`
    ///
    /// An empty selection is not an apply and returns `None`.
    pub fn apply_filters(&self, filters: FilterMap) -> Option<Transition> {
        if filters.is_empty() {
            return None;
        }

        Some(Transition {
            query: Query {
                page: 1,
                filters,
                ..self.clone()
            },
            mode: MergeMode::Replace,
        })
    }

    /// The filter sheet was reset
    pub fn reset_filters(&self) -> Transition {
        Transition {
            query: Query {
                page: 1,
                filters: FilterMap::new(),
                ..self.clone()
            },
            mode: MergeMode::Replace,
        }
    }

    /// One filter chip was closed
    pub fn remove_filter(&self, key: FilterKey) -> Transition {
        let mut filters = self.filters.clone();
        filters.remove(&key);

        Transition {
            query: Query {
                page: 1,
                filters,
                ..self.clone()
            },
            mode: MergeMode::Replace,
        }
    }

    /// The grid reached its bottom edge
    pub fn next_page(&self) -> Transition {
        Transition {
            query: Query {
                page: self.page + 1,
                ..self.clone()
            },
            mode: MergeMode::Append,
        }
    }
}

/// Owns the live query and the epoch of the query that issued each request
///
/// The epoch moves on every replace transition and stays put for appends, so
/// a response can be matched against the query that is current when it lands.
#[derive(Debug, Clone, Default)]
pub struct QueryState {
    query: Query,
    epoch: u64,
}

impl QueryState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(&self) -> &Query {
        &self.query
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Make `transition` the live query and return the epoch its request carries
    pub fn commit(&mut self, transition: Transition) -> u64 {
        if transition.mode == MergeMode::Replace {
            self.epoch += 1;
        }
        self.query = transition.query;
        self.epoch
    }
}
