//! Cache entries keyed by scope and package name
//!
//! Layout under the cache root:
//!
//! ```text
//! <root>/<scope>/<name>/package.json
//! <root>/<scope>/<name>/node_modules/.bin/<name>
//! ```

use crate::error::{GhpxError, GhpxResult};
use chrono::{DateTime, Local};
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, info};

/// Directory holding the installed dependency tree
pub const DEPENDENCY_DIR: &str = "node_modules";
/// Executables directory inside the dependency tree
pub const BIN_DIR: &str = ".bin";
/// Generated manifest file name
pub const MANIFEST_FILE: &str = "package.json";

/// Substring that forces a reinstall on every run
const LATEST_TAG: &str = "@latest";

/// On-disk install state for one `(scope, name)` pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheEntry {
    scope: String,
    base_name: String,
    dir: PathBuf,
}

impl CacheEntry {
    /// Map `(root, scope, name)` to `<root>/<scope>/<name>`.
    ///
    /// Pure path construction; any trailing `@qualifier` on the name is
    /// dropped first.
    pub fn locate(root: &Path, scope: &str, base_name: &str) -> Self {
        let base_name = base_name.split('@').next().unwrap_or(base_name);
        Self {
            scope: scope.to_string(),
            base_name: base_name.to_string(),
            dir: root.join(scope).join(base_name),
        }
    }

    /// Entry directory (install root for npm)
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Scope without the leading `@`
    pub fn scope(&self) -> &str {
        &self.scope
    }

    /// Package name within the scope
    pub fn base_name(&self) -> &str {
        &self.base_name
    }

    /// `node_modules` inside the entry
    pub fn dependency_dir(&self) -> PathBuf {
        self.dir.join(DEPENDENCY_DIR)
    }

    /// `node_modules/.bin` inside the entry
    pub fn bin_dir(&self) -> PathBuf {
        self.dependency_dir().join(BIN_DIR)
    }

    /// Generated `package.json`
    pub fn manifest_path(&self) -> PathBuf {
        self.dir.join(MANIFEST_FILE)
    }

    /// Whether `npm install` must run before the entry can be used.
    ///
    /// Missing dependency tree always installs. Otherwise any token
    /// containing `@latest` reinstalls, and everything else is reused.
    pub async fn must_install(&self, token: &str) -> bool {
        if !is_dir(&self.dependency_dir()).await {
            debug!("{} not populated", self.dir.display());
            return true;
        }
        if token.contains(LATEST_TAG) {
            debug!("{} requests latest, refreshing", token);
            return true;
        }
        debug!("{} cached at {}", token, self.dir.display());
        false
    }
}

/// A populated entry found while listing the cache
#[derive(Debug, Clone)]
pub struct CachedPackage {
    /// The entry itself
    pub entry: CacheEntry,
    /// Time of the most recent install (manifest mtime)
    pub installed_at: Option<DateTime<Local>>,
}

impl CachedPackage {
    /// `@scope/name`
    pub fn package_name(&self) -> String {
        format!("@{}/{}", self.entry.scope(), self.entry.base_name())
    }
}

/// Remove the whole cache root. Returns `false` if it did not exist.
pub async fn clear_cache(root: &Path) -> GhpxResult<bool> {
    if !fs::try_exists(root).await.unwrap_or(false) {
        debug!("Cache root {} absent, nothing to clear", root.display());
        return Ok(false);
    }

    fs::remove_dir_all(root)
        .await
        .map_err(|e| GhpxError::io(format!("removing cache {}", root.display()), e))?;

    info!("Cleared cache at {}", root.display());
    Ok(true)
}

/// List every `<scope>/<name>` entry that has a manifest, sorted by name
pub async fn list_cached(root: &Path) -> GhpxResult<Vec<CachedPackage>> {
    let mut packages = Vec::new();
    if !is_dir(root).await {
        return Ok(packages);
    }

    for scope_dir in read_subdirs(root).await? {
        let Some(scope) = file_name(&scope_dir) else {
            continue;
        };
        for package_dir in read_subdirs(&scope_dir).await? {
            let Some(name) = file_name(&package_dir) else {
                continue;
            };
            let entry = CacheEntry::locate(root, &scope, &name);
            let installed_at = match fs::metadata(entry.manifest_path()).await {
                Ok(meta) => meta.modified().ok().map(DateTime::<Local>::from),
                Err(_) => {
                    debug!("Skipping {}: no manifest", package_dir.display());
                    continue;
                }
            };
            packages.push(CachedPackage {
                entry,
                installed_at,
            });
        }
    }

    packages.sort_by_key(CachedPackage::package_name);
    Ok(packages)
}

async fn read_subdirs(dir: &Path) -> GhpxResult<Vec<PathBuf>> {
    let mut entries = fs::read_dir(dir)
        .await
        .map_err(|e| GhpxError::io(format!("reading {}", dir.display()), e))?;

    let mut dirs = Vec::new();
    while let Some(entry) = entries
        .next_entry()
        .await
        .map_err(|e| GhpxError::io(format!("reading {}", dir.display()), e))?
    {
        let path = entry.path();
        if is_dir(&path).await {
            dirs.push(path);
        }
    }
    Ok(dirs)
}

/// Follows symlinks; anything unreadable counts as absent
async fn is_dir(path: &Path) -> bool {
    fs::metadata(path).await.is_ok_and(|meta| meta.is_dir())
}

fn file_name(path: &Path) -> Option<String> {
    path.file_name().map(|n| n.to_string_lossy().into_owned())
}
