use std::sync::Arc;

use super::api::{FetchRequest, SearchApi};
use crate::error::FetchError;
use crate::state::data::Item;
use crate::state::query::{MergeMode, Query};
use crate::state::results::ResultAccumulator;

/// What became of a fetch once its response landed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The page was merged into the results
    Applied { mode: MergeMode, count: usize },
    /// The API answered with zero hits; results untouched
    Empty,
    /// A newer query was issued while this one was in flight
    Stale,
    /// The controller was dropped before the response arrived
    Detached,
}

/// Runs one query against the search API and classifies the answer
#[derive(Clone)]
pub struct FetchOrchestrator {
    api: Arc<dyn SearchApi>,
}

impl FetchOrchestrator {
    pub fn new(api: Arc<dyn SearchApi>) -> Self {
        Self { api }
    }

    /// Request the page `query` describes
    ///
    /// Transport failures, `success = false` and a payload without hits all
    /// come back as [`FetchError`]; an empty hit list is a valid page.
    pub async fn fetch(&self, query: &Query) -> Result<Vec<Item>, FetchError> {
        let request = FetchRequest::from(query);
        let page = request.page;

        tracing::debug!(?request, "🔍 fetching page {}", page);

        let response = self
            .api
            .search(&request)
            .await
            .map_err(|source| FetchError::Transport { page, source })?;

        if !response.success {
            return Err(FetchError::Rejected { page });
        }

        response.into_hits().ok_or(FetchError::MissingHits { page })
    }

    /// Merge a fetched page into `results`
    ///
    /// An empty page leaves `results` exactly as they were.
    pub fn deliver(results: &mut ResultAccumulator, items: Vec<Item>, mode: MergeMode) -> FetchOutcome {
        if items.is_empty() {
            return FetchOutcome::Empty;
        }

        let count = items.len();
        results.merge(items, mode);
        FetchOutcome::Applied { mode, count }
    }
}

impl std::fmt::Debug for FetchOrchestrator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FetchOrchestrator").finish_non_exhaustive()
    }
}
