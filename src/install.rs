//! Installs scoped packages into their cache entry with npm

use crate::cache::{CacheEntry, CacheManifest};
use crate::error::{GhpxError, GhpxResult};
use crate::process::{Invocation, ProcessRunner};
use crate::specifier::PackageSpecifier;
use std::ffi::OsString;
use tokio::fs;
use tracing::{debug, info};

/// Runs `npm install` inside a cache entry
pub struct Installer<'a> {
    npm: &'a str,
    runner: &'a dyn ProcessRunner,
}

impl<'a> Installer<'a> {
    /// Create an installer using the given npm command
    pub fn new(npm: &'a str, runner: &'a dyn ProcessRunner) -> Self {
        Self { npm, runner }
    }

    /// Build the npm invocation for a specifier
    pub fn invocation(
        &self,
        entry: &CacheEntry,
        spec: &PackageSpecifier,
        install_flags: &[OsString],
    ) -> Invocation {
        let mut args = vec![OsString::from("install"), OsString::from(&spec.raw_token)];
        args.extend(install_flags.iter().cloned());
        Invocation::new(self.npm, args).current_dir(entry.dir())
    }

    /// Prepare the entry and install the specifier into it.
    ///
    /// npm shares the caller's streams so auth prompts and progress stay
    /// visible. A failed install leaves the entry as npm left it.
    pub async fn install(
        &self,
        entry: &CacheEntry,
        spec: &PackageSpecifier,
        install_flags: &[OsString],
    ) -> GhpxResult<()> {
        fs::create_dir_all(entry.dir())
            .await
            .map_err(|e| GhpxError::io(format!("creating {}", entry.dir().display()), e))?;

        CacheManifest::default()
            .write(&entry.manifest_path())
            .await?;

        let invocation = self.invocation(entry, spec, install_flags);
        info!("Installing {} into {}", spec, entry.dir().display());

        match self.runner.run(&invocation).await? {
            Some(0) => {
                debug!("Installed {}", spec);
                Ok(())
            }
            Some(code) => Err(GhpxError::InstallFailed {
                spec: spec.raw_token.clone(),
                code,
            }),
            None => Err(GhpxError::InstallInterrupted {
                spec: spec.raw_token.clone(),
            }),
        }
    }
}
