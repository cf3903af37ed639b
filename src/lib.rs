//! Query and fetch orchestration for browsing a remote image catalog.
//!
//! Three independent ways of narrowing the catalog (free-text search, a single
//! category and a set of structured filters) plus infinite scroll all feed one
//! paginated result list. [`Browser`] is the controller a presentation layer
//! drives: it debounces typing, edge-triggers "load more" from scroll samples,
//! and merges each fetched page by replacing or appending.
//!
//! The search API itself is a collaborator behind the [`SearchApi`] trait.

pub mod browser;
pub mod config;
pub mod error;
pub mod fetch;
pub mod input;
pub mod logging;
pub mod state;

pub use browser::{Browser, BrowserSnapshot, FetchHandle};
pub use config::BrowserConfig;
pub use error::{ApiError, ConfigError, FetchError};
pub use fetch::{FetchOutcome, FetchRequest, SearchApi};
pub use input::ScrollSample;
pub use state::data::{FetchResponse, Item};
pub use state::query::{FilterKey, FilterMap, MergeMode, Query};
