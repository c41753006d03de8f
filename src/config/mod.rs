//! Configuration management for ghpx
//!
//! Values are layered: built-in defaults, then the TOML file, then
//! `GHPX_*` environment overrides.

pub mod schema;

pub use schema::Config;

use crate::error::{GhpxError, GhpxResult};
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

/// Environment variable naming an alternate config file
pub const CONFIG_ENV: &str = "GHPX_CONFIG";
/// Environment variable overriding the cache root
pub const CACHE_DIR_ENV: &str = "GHPX_CACHE_DIR";
/// Environment variable overriding the npm command
pub const NPM_ENV: &str = "GHPX_NPM";
/// Environment variable overriding the npx command
pub const NPX_ENV: &str = "GHPX_NPX";

/// Configuration manager
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    /// Create a config manager honoring `GHPX_CONFIG`, else the default path
    pub fn new() -> Self {
        match std::env::var_os(CONFIG_ENV) {
            Some(path) if !path.is_empty() => Self::with_path(PathBuf::from(path)),
            _ => Self {
                config_path: Self::default_config_path(),
            },
        }
    }

    /// Create a config manager with a custom path
    pub fn with_path(path: PathBuf) -> Self {
        Self { config_path: path }
    }

    /// Get the default config file path
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("ghpx")
            .join("config.toml")
    }

    /// Load configuration from file (defaults if missing) and apply env overrides
    pub async fn load(&self) -> GhpxResult<Config> {
        let mut config = if fs::try_exists(&self.config_path).await.unwrap_or(false) {
            self.load_from_file(&self.config_path).await?
        } else {
            debug!("Config file not found, using defaults");
            Config::default()
        };

        apply_env_overrides(&mut config, |key| std::env::var(key).ok());
        Ok(config)
    }

    /// Load configuration from a specific file
    pub async fn load_from_file(&self, path: &Path) -> GhpxResult<Config> {
        let content = fs::read_to_string(path)
            .await
            .map_err(|e| GhpxError::io(format!("reading config from {}", path.display()), e))?;

        toml::from_str(&content).map_err(|e| GhpxError::ConfigInvalid {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }

    /// Get the config file path
    pub fn path(&self) -> &Path {
        &self.config_path
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Apply `GHPX_*` overrides; empty values are ignored
fn apply_env_overrides(config: &mut Config, lookup: impl Fn(&str) -> Option<String>) {
    let lookup = |key: &str| lookup(key).filter(|v| !v.is_empty());

    if let Some(root) = lookup(CACHE_DIR_ENV) {
        debug!("Cache root overridden by {}: {}", CACHE_DIR_ENV, root);
        config.cache.root = Some(PathBuf::from(root));
    }
    if let Some(npm) = lookup(NPM_ENV) {
        config.tools.npm = npm;
    }
    if let Some(npx) = lookup(NPX_ENV) {
        config.tools.npx = npx;
    }
}
