//! Raw user input shaping
//!
//! Typing and scrolling both arrive far more often than the catalog should be
//! queried. This module turns them into discrete triggers:
//! - `debounce.rs` - settles keystrokes into one committed value
//! - `scroll.rs` - edge-triggers "load more" from scroll samples

pub mod debounce;
pub mod scroll;

pub use debounce::DebounceScheduler;
pub use scroll::{ScrollEdgeDetector, ScrollSample};
