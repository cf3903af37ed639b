//! The browse screen controller
//!
//! `Browser` owns one of each component and is the only thing the
//! presentation layer talks to. Every action follows the same path:
//!
//! 1. Build a [`Transition`] from the live query
//! 2. Commit it, clearing the results if it replaces them
//! 3. Spawn the fetch and hand back a [`FetchHandle`]
//! 4. When the response lands, merge it unless the controller is gone or
//!    (with the epoch guard on) a newer query has been issued since
//!
//! Steps 1-2 happen under one lock so two actions can never build on the same
//! stale query. Fetches only hold a weak reference to the state, so dropping
//! the `Browser` turns late responses into no-ops.
//!
//! Loading more is refused while the first page of the current query is still
//! out: the grid is empty then, so the scroll edge is trivially reached, and a
//! page 2 landing first would be wiped when page 1 replaces the list.

use parking_lot::Mutex;
use std::sync::{Arc, Weak};
use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::config::BrowserConfig;
use crate::error::FetchError;
use crate::fetch::{FetchOrchestrator, FetchOutcome, SearchApi};
use crate::input::{DebounceScheduler, ScrollEdgeDetector, ScrollSample};
use crate::state::data::Item;
use crate::state::filters::FilterPanel;
use crate::state::query::{FilterKey, FilterMap, MergeMode, Query, QueryState, Transition};
use crate::state::results::ResultAccumulator;

/// A fetch that has been issued
///
/// Awaiting it is optional; dropping the handle does not cancel the fetch.
#[derive(Debug)]
pub struct FetchHandle {
    join: JoinHandle<Result<FetchOutcome, FetchError>>,
}

impl FetchHandle {
    /// Wait for the response to be merged (or discarded)
    pub async fn outcome(self) -> Result<FetchOutcome, FetchError> {
        match self.join.await {
            Ok(result) => result,
            Err(e) => Err(FetchError::Interrupted(e.to_string())),
        }
    }
}

/// Everything the presentation layer renders
#[derive(Debug, Clone, PartialEq)]
pub struct BrowserSnapshot {
    pub items: Vec<Item>,
    pub text: String,
    pub category: Option<String>,
    pub filters: FilterMap,
    pub page: u32,
    /// Fetches issued but not yet settled (drives the loading indicator)
    pub in_flight: usize,
    /// Only ever set when `report_errors` is on
    pub last_error: Option<FetchError>,
}

struct BrowserState {
    query: QueryState,
    results: ResultAccumulator,
    edge: ScrollEdgeDetector,
    /// Page 1 of the current query has not settled yet
    first_page_pending: bool,
    in_flight: usize,
    last_error: Option<FetchError>,
}

struct Shared {
    config: BrowserConfig,
    orchestrator: FetchOrchestrator,
    state: Mutex<BrowserState>,
    revision: watch::Sender<u64>,
}

pub struct Browser {
    shared: Arc<Shared>,
    debounce: DebounceScheduler<String>,
}

impl Browser {
    /// Create the controller; must be called inside a tokio runtime
    ///
    /// Nothing is fetched until [`Browser::start`].
    pub fn new(api: Arc<dyn SearchApi>, config: BrowserConfig) -> Self {
        let (revision, _) = watch::channel(0);
        let shared = Arc::new(Shared {
            orchestrator: FetchOrchestrator::new(api),
            state: Mutex::new(BrowserState {
                query: QueryState::new(),
                results: ResultAccumulator::new(),
                edge: ScrollEdgeDetector::new(config.edge_tolerance),
                first_page_pending: false,
                in_flight: 0,
                last_error: None,
            }),
            revision,
            config,
        });

        let weak = Arc::downgrade(&shared);
        let debounce = DebounceScheduler::new(shared.config.quiet_period(), move |text: String| {
            if let Some(shared) = weak.upgrade() {
                // nobody awaits a debounced fetch
                let _ = shared.dispatch(|query, config| query.set_text(&text, config.min_query_chars));
            }
        });

        tracing::info!("🖼️  Browser ready (quiet period {:?})", debounce.quiet_period());

        Self { shared, debounce }
    }

    pub fn config(&self) -> &BrowserConfig {
        &self.shared.config
    }

    /// Initial load at mount: page 1 of the unfiltered catalog
    pub fn start(&self) -> FetchHandle {
        self.shared.dispatch_always(|query, _| query.refresh())
    }

    /// A keystroke in the search box; committed after the quiet period
    pub fn input_text(&self, text: impl Into<String>) {
        self.debounce.schedule(text.into());
    }

    /// Commit search text right away
    ///
    /// Returns `None` when the text is too short to search for.
    pub fn set_text(&self, text: &str) -> Option<FetchHandle> {
        self.shared
            .dispatch(|query, config| query.set_text(text, config.min_query_chars))
    }

    /// The search box's clear button: commits `""` without waiting
    pub fn clear_search(&self) -> FetchHandle {
        self.debounce.cancel();
        self.shared.dispatch_always(|query, _| query.clear_text())
    }

    /// Tap on a category chip; `None` deselects
    pub fn set_category(&self, category: Option<String>) -> FetchHandle {
        self.shared.dispatch_always(|query, _| query.set_category(category))
    }

    /// Apply the filter sheet; `None` when nothing was selected
    pub fn apply_filters(&self, filters: FilterMap) -> Option<FetchHandle> {
        self.shared.dispatch(|query, _| query.apply_filters(filters))
    }

    pub fn reset_filters(&self) -> FetchHandle {
        self.shared.dispatch_always(|query, _| query.reset_filters())
    }

    /// Close button on one filter chip
    pub fn remove_filter(&self, key: FilterKey) -> FetchHandle {
        self.shared.dispatch_always(|query, _| query.remove_filter(key))
    }

    /// Request the page after the current one
    ///
    /// Returns `None` while page 1 of the current query is still in flight.
    pub fn load_next_page(&self) -> Option<FetchHandle> {
        self.shared.dispatch(|query, _| Some(query.next_page()))
    }

    /// Feed a scroll sample; loads the next page when the bottom is reached
    ///
    /// Samples taken while page 1 is in flight are dropped without arming the
    /// edge, so the first scroll to the bottom after it lands still counts.
    pub fn on_scroll(&self, sample: ScrollSample) -> Option<FetchHandle> {
        let reached = {
            let mut state = self.shared.state.lock();
            !state.first_page_pending && state.edge.observe(sample)
        };
        if !reached {
            return None;
        }
        tracing::debug!("⬇️  reached bottom of grid");
        self.load_next_page()
    }

    /// A filter sheet pre-filled with the applied filters
    pub fn filter_panel(&self) -> FilterPanel {
        FilterPanel::new(self.shared.state.lock().query.query().filters())
    }

    pub fn query(&self) -> Query {
        self.shared.state.lock().query.query().clone()
    }

    pub fn snapshot(&self) -> BrowserSnapshot {
        let state = self.shared.state.lock();
        let query = state.query.query();
        BrowserSnapshot {
            items: state.results.items().to_vec(),
            text: query.text().to_string(),
            category: query.category().map(str::to_string),
            filters: query.filters().clone(),
            page: query.page(),
            in_flight: state.in_flight,
            last_error: state.last_error.clone(),
        }
    }

    /// Ticks every time the snapshot may have changed
    pub fn changes(&self) -> watch::Receiver<u64> {
        self.shared.revision.subscribe()
    }
}

/// A committed query whose fetch is about to be spawned
struct Issued {
    query: Query,
    mode: MergeMode,
    epoch: u64,
}

impl Shared {
    fn dispatch<F>(self: &Arc<Self>, make: F) -> Option<FetchHandle>
    where
        F: FnOnce(&Query, &BrowserConfig) -> Option<Transition>,
    {
        let issued = {
            let mut state = self.state.lock();
            let transition = make(state.query.query(), &self.config)?;
            if transition.mode == MergeMode::Append && state.first_page_pending {
                tracing::debug!("first page still loading, not loading more");
                return None;
            }
            commit(&mut state, transition)
        };
        Some(self.launch(issued))
    }

    fn dispatch_always<F>(self: &Arc<Self>, make: F) -> FetchHandle
    where
        F: FnOnce(&Query, &BrowserConfig) -> Transition,
    {
        let issued = {
            let mut state = self.state.lock();
            let transition = make(state.query.query(), &self.config);
            commit(&mut state, transition)
        };
        self.launch(issued)
    }

    fn launch(self: &Arc<Self>, issued: Issued) -> FetchHandle {
        self.notify();

        let Issued { query, mode, epoch } = issued;
        tracing::debug!(
            page = query.page(),
            text = query.text(),
            category = ?query.category(),
            ?mode,
            epoch,
            "query committed"
        );

        let orchestrator = self.orchestrator.clone();
        let weak = Arc::downgrade(self);
        let join = tokio::spawn(async move {
            let fetched = orchestrator.fetch(&query).await;
            settle(weak, epoch, mode, fetched)
        });

        FetchHandle { join }
    }

    fn notify(&self) {
        self.revision.send_modify(|rev| *rev += 1);
    }
}

fn commit(state: &mut BrowserState, transition: Transition) -> Issued {
    let mode = transition.mode;
    let epoch = state.query.commit(transition);
    if mode == MergeMode::Replace {
        state.results.clear();
        state.first_page_pending = true;
    }
    state.in_flight += 1;

    Issued {
        query: state.query.query().clone(),
        mode,
        epoch,
    }
}

fn settle(
    weak: Weak<Shared>,
    epoch: u64,
    mode: MergeMode,
    fetched: Result<Vec<Item>, FetchError>,
) -> Result<FetchOutcome, FetchError> {
    let Some(shared) = weak.upgrade() else {
        tracing::debug!("browser dropped, ignoring response");
        return Ok(FetchOutcome::Detached);
    };

    let result = {
        let mut state = shared.state.lock();
        state.in_flight = state.in_flight.saturating_sub(1);
        if mode == MergeMode::Replace && epoch == state.query.epoch() {
            state.first_page_pending = false;
        }

        if shared.config.discard_stale_responses && epoch != state.query.epoch() {
            tracing::debug!(epoch, current = state.query.epoch(), "discarding stale response");
            Ok(FetchOutcome::Stale)
        } else {
            match fetched {
                Ok(items) => {
                    let outcome = FetchOrchestrator::deliver(&mut state.results, items, mode);
                    if let FetchOutcome::Applied { count, .. } = outcome {
                        state.last_error = None;
                        tracing::debug!("📥 merged {} hits ({:?}), {} total", count, mode, state.results.len());
                    }
                    Ok(outcome)
                }
                Err(err) => {
                    tracing::warn!("⚠️  fetch failed: {}", err);
                    if shared.config.report_errors {
                        state.last_error = Some(err.clone());
                    }
                    Err(err)
                }
            }
        }
    };

    shared.notify();
    result
}
