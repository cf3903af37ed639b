//! Error types for the browse controller
//!
//! Fetch failures are split the way they can happen: the transport failed,
//! the API said no, or the payload had no hits in it.

use std::path::PathBuf;
use thiserror::Error;

/// Error a [`SearchApi`](crate::fetch::SearchApi) implementation reports
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("transport error: {0}")]
    Transport(String),

    #[error("unexpected HTTP status {0}")]
    Status(u16),

    #[error("could not decode response: {0}")]
    Decode(String),
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Decode(err.to_string())
    }
}

/// Why a fetch produced no page
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("request for page {page} failed: {source}")]
    Transport {
        page: u32,
        #[source]
        source: ApiError,
    },

    #[error("search API rejected the request for page {page}")]
    Rejected { page: u32 },

    #[error("search API returned no hits for page {page}")]
    MissingHits { page: u32 },

    #[error("fetch task stopped before completing: {0}")]
    Interrupted(String),
}

impl FetchError {
    /// Page the failed request asked for, when there was one
    pub fn page(&self) -> Option<u32> {
        match self {
            FetchError::Transport { page, .. }
            | FetchError::Rejected { page }
            | FetchError::MissingHits { page } => Some(*page),
            FetchError::Interrupted(_) => None,
        }
    }
}

/// Error loading or saving [`BrowserConfig`](crate::config::BrowserConfig)
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("could not determine the user config directory")]
    NoConfigDir,
}

/// The global tracing subscriber could not be installed
#[derive(Error, Debug)]
#[error("failed to install tracing subscriber: {0}")]
pub struct LogInitError(pub String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_error_page() {
        let err = FetchError::Transport {
            page: 3,
            source: ApiError::Status(503),
        };
        assert_eq!(err.page(), Some(3));
        assert_eq!(err.to_string(), "request for page 3 failed: unexpected HTTP status 503");
        assert_eq!(FetchError::Interrupted("cancelled".into()).page(), None);
    }

    #[test]
    fn test_decode_error_from_serde() {
        let err: ApiError = serde_json::from_str::<u32>("nope").unwrap_err().into();
        assert!(matches!(err, ApiError::Decode(_)));
    }
}
