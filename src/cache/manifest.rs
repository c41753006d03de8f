//! Throwaway `package.json` that gives npm an install root

use crate::error::{GhpxError, GhpxResult};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::fs;
use tracing::debug;

/// Minimal private package manifest
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheManifest {
    pub name: String,
    pub version: String,
    pub private: bool,
    pub description: String,
}

impl Default for CacheManifest {
    fn default() -> Self {
        Self {
            name: "ghpx-cache".to_string(),
            version: "0.0.0".to_string(),
            private: true,
            description: "Install root managed by ghpx. Safe to delete.".to_string(),
        }
    }
}

impl CacheManifest {
    /// Write the manifest to `path`, replacing any existing file
    pub async fn write(&self, path: &Path) -> GhpxResult<()> {
        let mut content = serde_json::to_string_pretty(self)?;
        content.push('\n');

        fs::write(path, content)
            .await
            .map_err(|e| GhpxError::io(format!("writing manifest {}", path.display()), e))?;

        debug!("Wrote manifest {}", path.display());
        Ok(())
    }
}
