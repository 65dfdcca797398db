//! Pager defaults read from a settings file.
//!
//! [`PagerSettings`] holds the visibility defaults a pager starts from. It is
//! read once at startup and never written back.
//!
//! # Settings File Location
//!
//! When no explicit path is given the file is looked up at:
//! - Linux: `~/.config/pagerange/settings.json`
//! - macOS: `~/Library/Application Support/pagerange/settings.json`
//! - Windows: `%APPDATA%/pagerange/settings.json`
//!
//! # Example
//!
//! ```json
//! { "boundaryCount": 2, "siblingCount": 1, "hideFirst": true }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::PagerError;
use crate::pagination::{DEFAULT_BOUNDARY_COUNT, DEFAULT_SIBLING_COUNT, PaginationConfig};

// ============================================================================
// Constants
// ============================================================================

/// Application name used for the configuration directory.
const APP_NAME: &str = "pagerange";

/// Settings file name.
const SETTINGS_FILE: &str = "settings.json";

// ============================================================================
// PagerSettings
// ============================================================================

/// Default visibility parameters for a pager.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PagerSettings {
    pub boundary_count: i64,
    pub sibling_count: i64,
    pub hide_first: bool,
    pub hide_prev: bool,
    pub hide_next: bool,
    pub hide_last: bool,
}

impl Default for PagerSettings {
    fn default() -> Self {
        Self {
            boundary_count: DEFAULT_BOUNDARY_COUNT,
            sibling_count: DEFAULT_SIBLING_COUNT,
            hide_first: false,
            hide_prev: false,
            hide_next: false,
            hide_last: false,
        }
    }
}

impl PagerSettings {
    /// Returns the default settings file path, if a config directory exists.
    #[must_use]
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_NAME).join(SETTINGS_FILE))
    }

    /// Loads settings.
    ///
    /// An explicit `path` must exist and parse. Without one, the default
    /// location is tried and a missing file silently yields defaults.
    ///
    /// # Errors
    ///
    /// Returns [`PagerError::Settings`] if a file that should be read cannot
    /// be read or does not contain valid settings JSON.
    pub fn load(path: Option<&Path>) -> Result<Self, PagerError> {
        if let Some(path) = path {
            return Self::load_from(path);
        }

        match Self::default_path() {
            Some(path) if path.is_file() => Self::load_from(&path),
            Some(path) => {
                tracing::debug!("No settings file at {}, using defaults", path.display());
                Ok(Self::default())
            }
            None => {
                tracing::debug!("No config directory, using default settings");
                Ok(Self::default())
            }
        }
    }

    /// Reads and parses the settings file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`PagerError::Settings`] on read or parse failure.
    pub fn load_from(path: &Path) -> Result<Self, PagerError> {
        let content = fs::read_to_string(path).map_err(|e| PagerError::settings(path, e))?;
        let settings = Self::from_json(&content).map_err(|e| PagerError::settings(path, e))?;
        tracing::debug!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Parses settings from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns the parse error for malformed JSON.
    pub fn from_json(content: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(content)
    }

    /// Builds a configuration for `count` pages on `page` using these defaults.
    #[must_use]
    pub const fn config(&self, count: i64, page: i64) -> PaginationConfig {
        PaginationConfig::new(count)
            .page(page)
            .boundary_count(self.boundary_count)
            .sibling_count(self.sibling_count)
            .hide_first(self.hide_first)
            .hide_prev(self.hide_prev)
            .hide_next(self.hide_next)
            .hide_last(self.hide_last)
    }
}

// ============================================================================
// Tests
// ============================================================================
