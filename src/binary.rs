//! Locates the executable a cached package installed

use crate::cache::CacheEntry;
use crate::error::{GhpxError, GhpxResult};
use std::path::PathBuf;
use tracing::debug;

/// Executable naming convention of the host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    /// npm writes `.cmd` shims next to extensionless scripts
    Windows,
    /// Plain executable names
    Unix,
}

impl Platform {
    /// Detect the current platform
    pub fn detect() -> Self {
        if cfg!(windows) {
            Platform::Windows
        } else {
            Platform::Unix
        }
    }

    /// File names to try for a binary, most preferred first
    pub fn candidates(&self, name: &str) -> Vec<String> {
        match self {
            Platform::Windows => vec![
                format!("{name}.cmd"),
                format!("{name}.exe"),
                name.to_string(),
            ],
            Platform::Unix => vec![name.to_string()],
        }
    }
}

/// Find `base_name` in the entry's `node_modules/.bin`
pub fn locate_binary(
    entry: &CacheEntry,
    base_name: &str,
    platform: Platform,
) -> GhpxResult<PathBuf> {
    let bin_dir = entry.bin_dir();

    for candidate in platform.candidates(base_name) {
        let path = bin_dir.join(&candidate);
        if path.is_file() {
            let path = std::path::absolute(&path)
                .map_err(|e| GhpxError::io(format!("resolving {}", path.display()), e))?;
            debug!("Resolved binary {}", path.display());
            return Ok(path);
        }
    }

    Err(GhpxError::BinaryNotFound {
        name: base_name.to_string(),
        searched: bin_dir,
    })
}
