//! ghpx's own flags, parsed with clap
//!
//! Everything else on the command line belongs to npx or to the package
//! being run, so clap only sees the invocation when its first argument is
//! one of [`SELF_FLAGS`].

use clap::{ArgAction, ArgGroup, Parser};
use std::ffi::OsString;

/// Flags ghpx handles itself instead of forwarding
pub const SELF_FLAGS: &[&str] = &[
    "--ghpx-version",
    "--ghpx-clear-cache",
    "--ghpx-list-cache",
    "--ghpx-help",
];

/// ghpx - npx for scoped packages from alternative registries
///
/// Scoped packages (@scope/name[@version]) are installed into a private
/// cache with npm and run from there. Everything else goes to npx unchanged.
#[derive(Parser, Debug)]
#[command(name = "ghpx")]
#[command(version, about, long_about = None)]
#[command(disable_help_flag = true, disable_version_flag = true)]
#[command(group(ArgGroup::new("action").required(true).multiple(false)))]
pub struct SelfArgs {
    /// Print the ghpx version
    #[arg(long = "ghpx-version", group = "action")]
    pub version: bool,

    /// Remove every cached package
    #[arg(long = "ghpx-clear-cache", group = "action")]
    pub clear_cache: bool,

    /// List cached packages and when they were installed
    #[arg(long = "ghpx-list-cache", group = "action")]
    pub list_cache: bool,

    /// Print this help
    #[arg(long = "ghpx-help", action = ArgAction::Help)]
    pub help: Option<bool>,
}

/// A self-flag request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelfCommand {
    /// `--ghpx-version`
    Version,
    /// `--ghpx-clear-cache`
    ClearCache,
    /// `--ghpx-list-cache`
    ListCache,
}

impl SelfArgs {
    /// The single action selected on the command line
    pub fn command(&self) -> SelfCommand {
        if self.clear_cache {
            SelfCommand::ClearCache
        } else if self.list_cache {
            SelfCommand::ListCache
        } else {
            SelfCommand::Version
        }
    }
}

impl SelfCommand {
    /// Detect a self-flag in first position.
    ///
    /// Usage errors and `--ghpx-help` come back as a `clap::Error` for the
    /// caller to print.
    pub fn detect(raw: &[OsString]) -> Result<Option<Self>, clap::Error> {
        let Some(first) = raw.first().and_then(|arg| arg.to_str()) else {
            return Ok(None);
        };
        if !SELF_FLAGS.contains(&first) {
            return Ok(None);
        }

        let argv = std::iter::once(OsString::from("ghpx")).chain(raw.iter().cloned());
        let args = SelfArgs::try_parse_from(argv)?;
        Ok(Some(args.command()))
    }
}
