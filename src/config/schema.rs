//! Configuration schema for ghpx
//!
//! Configuration is stored at `~/.config/ghpx/config.toml`

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Package cache settings
    pub cache: CacheConfig,

    /// External tool commands
    pub tools: ToolsConfig,
}

impl Config {
    /// Resolve the cache root, falling back to `~/.ghpx/cache`
    pub fn cache_root(&self) -> PathBuf {
        self.cache
            .root
            .clone()
            .unwrap_or_else(CacheConfig::default_root)
    }
}

/// Package cache configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Directory holding one subdirectory per scope
    pub root: Option<PathBuf>,
}

impl CacheConfig {
    /// Default cache root under the user's home directory
    pub fn default_root() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".ghpx")
            .join("cache")
    }
}

/// External tool configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolsConfig {
    /// Package manager used to install scoped packages
    pub npm: String,

    /// Runner that receives every passthrough invocation
    pub npx: String,
}

impl Default for ToolsConfig {
    fn default() -> Self {
        if cfg!(windows) {
            Self {
                npm: "npm.cmd".to_string(),
                npx: "npx.cmd".to_string(),
            }
        } else {
            Self {
                npm: "npm".to_string(),
                npx: "npx".to_string(),
            }
        }
    }
}
