//! State management module
//!
//! This module holds everything the controller keeps between user actions:
//! - Records returned by the search API (data.rs)
//! - The composed query and its transitions (query.rs)
//! - The ordered result list (results.rs)
//! - The filter sheet draft and option catalogs (filters.rs)

pub mod data;
pub mod filters;
pub mod query;
pub mod results;
