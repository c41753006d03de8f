//! Dispatch decision engine
//!
//! Decides per invocation whether to hand everything to npx or to run a
//! scoped package from the cache:
//!
//! ```text
//! raw args ─┬─ empty ────────────────────────────────► passthrough
//!           ├─ self-flag ────────────────────────────► handle, exit 0
//!           └─ classify ─┬─ no candidate ────────────► passthrough
//!                        └─ candidate ─┬─ unscoped ──► passthrough
//!                                      └─ scoped ──► [install] → locate → run
//! ```
//!
//! Passthrough always receives the raw arguments unmodified, byte for
//! byte. A token that is not valid UTF-8 can never be a scoped package, so
//! it only ever reaches npx or the cached binary as given. The exit status
//! of whichever child ran is returned verbatim.

use crate::binary::{locate_binary, Platform};
use crate::cache::CacheEntry;
use crate::classify::{classify, ClassifiedArguments, FlagTable, NPX_FLAGS};
use crate::cli::{commands, SelfCommand};
use crate::config::Config;
use crate::error::GhpxResult;
use crate::install::Installer;
use crate::process::{Invocation, ProcessRunner};
use crate::specifier::PackageSpecifier;
use crate::ui;
use std::ffi::OsString;
use std::process::ExitCode;
use tracing::{debug, info};

/// Where an invocation is headed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// Forward the raw arguments to npx
    Passthrough,
    /// Handle a ghpx self-flag
    SelfCommand(SelfCommand),
    /// Run a scoped package from the cache
    Scoped {
        /// Parsed candidate token
        spec: PackageSpecifier,
        /// Classification of the raw arguments
        classified: ClassifiedArguments,
        /// Position of the candidate within `classified.remaining`
        index: usize,
    },
}

/// Routes invocations and runs the resulting child processes
pub struct Dispatcher<'a> {
    config: &'a Config,
    runner: &'a dyn ProcessRunner,
    flags: &'a FlagTable,
    platform: Platform,
}

impl<'a> Dispatcher<'a> {
    /// Create a dispatcher using npx's flag table and the host platform
    pub fn new(config: &'a Config, runner: &'a dyn ProcessRunner) -> Self {
        Self {
            config,
            runner,
            flags: &NPX_FLAGS,
            platform: Platform::detect(),
        }
    }

    /// Override the binary naming convention
    pub fn with_platform(mut self, platform: Platform) -> Self {
        self.platform = platform;
        self
    }

    /// Decide the route without touching the filesystem or spawning.
    ///
    /// Only a malformed self-flag invocation (or `--ghpx-help`) is an
    /// error; it carries clap's message for the caller to print.
    pub fn route(&self, raw: &[OsString]) -> GhpxResult<Route> {
        if raw.is_empty() {
            debug!("No arguments, passing through");
            return Ok(Route::Passthrough);
        }

        if let Some(command) = SelfCommand::detect(raw)? {
            return Ok(Route::SelfCommand(command));
        }

        let classified = classify(raw, self.flags);
        let Some(candidate) = classified.candidate() else {
            debug!("No package candidate, passing through");
            return Ok(Route::Passthrough);
        };

        let Some(spec) = candidate.token.to_str().and_then(PackageSpecifier::parse) else {
            debug!(
                "{} is not a scoped package, passing through",
                candidate.token.to_string_lossy()
            );
            return Ok(Route::Passthrough);
        };

        let index = candidate.index;
        Ok(Route::Scoped {
            spec,
            classified,
            index,
        })
    }

    /// Handle one invocation and return the exit status to propagate
    pub async fn dispatch(&self, raw: &[OsString]) -> GhpxResult<i32> {
        match self.route(raw)? {
            Route::Passthrough => self.passthrough(raw).await,
            Route::SelfCommand(command) => {
                self.run_self_command(command).await?;
                Ok(0)
            }
            Route::Scoped {
                spec,
                classified,
                index,
            } => self.run_scoped(&spec, &classified, index).await,
        }
    }

    /// Forward `raw` to npx unchanged
    pub async fn passthrough(&self, raw: &[OsString]) -> GhpxResult<i32> {
        let invocation = Invocation::new(&self.config.tools.npx, raw);
        self.run_child(&invocation).await
    }

    async fn run_self_command(&self, command: SelfCommand) -> GhpxResult<()> {
        match command {
            SelfCommand::Version => {
                commands::version();
                Ok(())
            }
            SelfCommand::ClearCache => commands::cache::clear(self.config).await,
            SelfCommand::ListCache => commands::cache::list(self.config).await,
        }
    }

    async fn run_scoped(
        &self,
        spec: &PackageSpecifier,
        classified: &ClassifiedArguments,
        index: usize,
    ) -> GhpxResult<i32> {
        let root = self.config.cache_root();
        let entry = CacheEntry::locate(&root, &spec.scope, &spec.base_name);

        if entry.must_install(&spec.raw_token).await {
            ui::notice(&format!("Installing {}...", spec));
            Installer::new(&self.config.tools.npm, self.runner)
                .install(&entry, spec, &classified.install_flags(self.flags))
                .await?;
        }

        let binary = locate_binary(&entry, &spec.base_name, self.platform)?;
        info!("Running {}", binary.display());

        let invocation = Invocation::new(binary, classified.args_after(index));
        self.run_child(&invocation).await
    }

    async fn run_child(&self, invocation: &Invocation) -> GhpxResult<i32> {
        let code = self.runner.run(invocation).await?;
        if code.is_none() {
            debug!("{} reported no exit code", invocation.program.to_string_lossy());
        }
        Ok(code.unwrap_or(0))
    }
}

/// Convert a child's status into this process's exit code.
///
/// Codes outside `0..=255` cannot be represented and become 1.
pub fn exit_code(code: i32) -> ExitCode {
    ExitCode::from(exit_status(code))
}

fn exit_status(code: i32) -> u8 {
    u8::try_from(code).unwrap_or(1)
}
