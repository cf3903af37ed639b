//! Tunables for the browse controller
//!
//! Stored as JSON in the user's config directory:
//! - Linux: ~/.config/pixar-browse/browser.json
//! - macOS: ~/Library/Application Support/pixar-browse/browser.json
//! - Windows: %APPDATA%\pixar-browse\browser.json
//!
//! A missing file means defaults; a file with only some fields set takes
//! defaults for the rest.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::ConfigError;

const APP_DIR: &str = "pixar-browse";
const CONFIG_FILE: &str = "browser.json";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct BrowserConfig {
    /// Quiet period before typed text is committed (milliseconds)
    pub quiet_period_ms: u64,

    /// Shortest non-empty search text that triggers a fetch (characters)
    pub min_query_chars: usize,

    /// How close to the bottom edge counts as "at the bottom" (layout units)
    pub edge_tolerance: f64,

    /// Drop responses whose query was superseded while they were in flight
    pub discard_stale_responses: bool,

    /// Keep the last fetch error in the snapshot instead of swallowing it
    pub report_errors: bool,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            quiet_period_ms: 400,
            min_query_chars: 3,
            edge_tolerance: 1.0,
            discard_stale_responses: true,
            report_errors: false,
        }
    }
}

impl BrowserConfig {
    pub fn quiet_period(&self) -> Duration {
        Duration::from_millis(self.quiet_period_ms)
    }

    /// Load from the default location, falling back to defaults if absent
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::config_path().ok_or(ConfigError::NoConfigDir)?;
        if !path.exists() {
            tracing::debug!("no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        Self::load_from(&path)
    }

    /// Load from an explicit file
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json(&json)?;
        tracing::info!("⚙️  Loaded browser config from {}", path.display());
        Ok(config)
    }

    /// Where [`BrowserConfig::load`] looks
    pub fn config_path() -> Option<PathBuf> {
        let mut path = dirs::config_dir().or_else(dirs::home_dir)?;
        path.push(APP_DIR);
        path.push(CONFIG_FILE);
        Some(path)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
