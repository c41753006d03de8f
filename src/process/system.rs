//! Process runner backed by real child processes

use crate::error::{GhpxError, GhpxResult};
use crate::process::{Invocation, ProcessRunner, StdioPolicy};
use async_trait::async_trait;
use std::process::Stdio;
use tokio::process::Command;
use tracing::debug;

/// Spawns children with `tokio::process`
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl SystemRunner {
    /// Create a new system runner
    pub fn new() -> Self {
        Self
    }

    fn stdio(policy: StdioPolicy) -> Stdio {
        match policy {
            StdioPolicy::Inherit => Stdio::inherit(),
            #[cfg(test)]
            StdioPolicy::Null => Stdio::null(),
        }
    }
}

#[async_trait]
impl ProcessRunner for SystemRunner {
    async fn run(&self, invocation: &Invocation) -> GhpxResult<Option<i32>> {
        debug!("Executing: {}", invocation);

        let mut command = Command::new(&invocation.program);
        command
            .args(&invocation.args)
            .stdin(Self::stdio(invocation.stdio))
            .stdout(Self::stdio(invocation.stdio))
            .stderr(Self::stdio(invocation.stdio));
        if let Some(ref cwd) = invocation.cwd {
            command.current_dir(cwd);
        }

        let status = command
            .status()
            .await
            .map_err(|e| GhpxError::spawn(invocation.program.to_string_lossy(), e))?;

        debug!("{} exited with {}", invocation.program.to_string_lossy(), status);
        Ok(status.code())
    }
}
