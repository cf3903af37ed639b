use super::data::Item;
use super::query::MergeMode;

/// The ordered list of hits the grid renders
///
/// Items stay in API page order. Nothing is de-duplicated: if the API repeats
/// an image across pages, the grid shows it twice.
#[derive(Debug, Clone, Default)]
pub struct ResultAccumulator {
    items: Vec<Item>,
}

impl ResultAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge one fetched page according to `mode`
    pub fn merge(&mut self, items: Vec<Item>, mode: MergeMode) {
        match mode {
            MergeMode::Replace => self.items = items,
            MergeMode::Append => self.items.extend(items),
        }
    }

    /// Drop everything (a new query is on its way)
    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
