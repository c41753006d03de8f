//! External process execution
//!
//! Every child ghpx starts (npm for installs, npx for passthrough, the
//! cached binary itself) goes through [`ProcessRunner`], so the dispatcher
//! can be driven by a fake in tests. Arguments are carried as `OsString`
//! so they reach the child exactly as ghpx received them.

#[cfg(test)]
pub(crate) mod fake;
mod system;

pub use system::SystemRunner;

use crate::error::GhpxResult;
use async_trait::async_trait;
use std::ffi::OsString;
use std::fmt;
use std::path::PathBuf;

/// Standard stream handling for a child
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StdioPolicy {
    /// Share the caller's stdin, stdout and stderr
    Inherit,
    /// Detach all three streams
    #[cfg(test)]
    Null,
}

/// A single child process to run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// Program name or path
    pub program: OsString,
    /// Arguments, excluding the program
    pub args: Vec<OsString>,
    /// Working directory (inherits the caller's when `None`)
    pub cwd: Option<PathBuf>,
    /// Stream handling
    pub stdio: StdioPolicy,
}

impl Invocation {
    /// Invocation inheriting the caller's streams and working directory
    pub fn new<I, S>(program: impl Into<OsString>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
            cwd: None,
            stdio: StdioPolicy::Inherit,
        }
    }

    /// Set the working directory
    pub fn current_dir(mut self, cwd: impl Into<PathBuf>) -> Self {
        self.cwd = Some(cwd.into());
        self
    }

    /// Set the stream policy
    #[cfg(test)]
    pub fn stdio(mut self, stdio: StdioPolicy) -> Self {
        self.stdio = stdio;
        self
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program.to_string_lossy())?;
        for arg in &self.args {
            write!(f, " {}", arg.to_string_lossy())?;
        }
        Ok(())
    }
}

/// Runs external processes to completion
#[async_trait]
pub trait ProcessRunner: Send + Sync {
    /// Run the invocation and wait for it.
    ///
    /// Returns the exit code, or `None` if the child reported none
    /// (e.g. it was terminated by a signal). A child that cannot be
    /// started is an error.
    async fn run(&self, invocation: &Invocation) -> GhpxResult<Option<i32>>;
}
