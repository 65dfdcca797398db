//! Error types for pagination configuration and settings.
//!
//! The range computer itself never fails. These errors come from the
//! opt-in strict validation and from reading a settings file.

use std::path::PathBuf;

use thiserror::Error;

// ============================================================================
// Error Types
// ============================================================================

/// Errors surfaced by configuration handling.
#[derive(Debug, Error)]
pub enum PagerError {
    /// A configuration value outside the accepted domain.
    #[error("Invalid {field} {value}: {reason}")]
    InvalidConfig {
        /// Name of the offending field, as it appears in JSON.
        field: &'static str,
        /// The value that was supplied.
        value: i64,
        /// What the value should have been.
        reason: String,
    },

    /// A settings file that could not be read or parsed.
    #[error("Failed to load settings from {}: {source}", path.display())]
    Settings {
        path: PathBuf,
        #[source]
        source: SettingsSource,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Underlying cause of a [`PagerError::Settings`] failure.
#[derive(Debug, Error)]
pub enum SettingsSource {
    #[error("{0}")]
    Read(#[from] std::io::Error),
    #[error("{0}")]
    Parse(#[from] serde_json::Error),
}

impl PagerError {
    /// Create an invalid configuration error.
    #[must_use]
    pub fn invalid_config(field: &'static str, value: i64, reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            field,
            value,
            reason: reason.into(),
        }
    }

    /// Create a settings error for `path`.
    #[must_use]
    pub fn settings(path: impl Into<PathBuf>, source: impl Into<SettingsSource>) -> Self {
        Self::Settings {
            path: path.into(),
            source: source.into(),
        }
    }

    /// Convert to a `color_eyre::Report` for the binary's error handling.
    #[must_use = "this converts the error into a Report for display"]
    pub fn into_report(self) -> color_eyre::Report {
        color_eyre::eyre::eyre!("{}", self)
    }
}

// ============================================================================
// Tests
// ============================================================================
