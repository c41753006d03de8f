//! Error types for ghpx
//!
//! All modules use `GhpxResult<T>` as their return type. Classification
//! outcomes (no candidate, unscoped package) are never errors; they route
//! to the npx passthrough instead.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for ghpx operations
pub type GhpxResult<T> = Result<T, GhpxError>;

/// All errors that can occur in ghpx
#[derive(Error, Debug)]
pub enum GhpxError {
    // Install errors
    #[error("Failed to install {spec} (npm exited with code {code})")]
    InstallFailed { spec: String, code: i32 },

    #[error("Installing {spec} was interrupted before npm reported an exit code")]
    InstallInterrupted { spec: String },

    // Resolution errors
    #[error("No executable named '{name}' found in {}", .searched.display())]
    BinaryNotFound { name: String, searched: PathBuf },

    // Process errors
    #[error("Failed to start {command}: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    // Configuration errors
    #[error("Invalid configuration at {}: {reason}", .path.display())]
    ConfigInvalid { path: PathBuf, reason: String },

    // IO errors
    #[error("IO error: {context}: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    // Serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // Self-flag usage errors and help output, printed by clap
    #[error("{0}")]
    Usage(#[from] clap::Error),
}

impl GhpxError {
    /// Create an IO error with context
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }

    /// Create a spawn failure error
    pub fn spawn(command: impl Into<String>, source: std::io::Error) -> Self {
        Self::Spawn {
            command: command.into(),
            source,
        }
    }

    /// Get actionable hint for the error
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Self::InstallFailed { .. } => Some(
                "Check the registry auth in your .npmrc, or run: ghpx --ghpx-clear-cache",
            ),
            Self::InstallInterrupted { .. } | Self::BinaryNotFound { .. } => {
                Some("Run: ghpx --ghpx-clear-cache, then try again")
            }
            Self::Spawn { .. } => Some("Make sure npm and npx are installed and on your PATH"),
            _ => None,
        }
    }
}
