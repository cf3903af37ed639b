//! Talking to the remote catalog
//!
//! - `api.rs` - the `SearchApi` collaborator and the request it receives
//! - `orchestrator.rs` - issues a query and classifies the answer

pub mod api;
pub mod orchestrator;

pub use api::{FetchRequest, SearchApi};
pub use orchestrator::{FetchOrchestrator, FetchOutcome};
