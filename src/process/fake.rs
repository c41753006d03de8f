//! Recording process runner for tests

use crate::error::GhpxResult;
use crate::process::{Invocation, ProcessRunner};
use async_trait::async_trait;
use std::path::Path;
use std::sync::Mutex;

type Handler = Box<dyn Fn(&Invocation) -> GhpxResult<Option<i32>> + Send + Sync>;

/// Records every invocation and answers with a scripted handler
pub(crate) struct FakeRunner {
    calls: Mutex<Vec<Invocation>>,
    handler: Handler,
}

impl FakeRunner {
    pub(crate) fn new(
        handler: impl Fn(&Invocation) -> GhpxResult<Option<i32>> + Send + Sync + 'static,
    ) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            handler: Box::new(handler),
        }
    }

    /// Every child exits with `code`
    pub(crate) fn exiting(code: i32) -> Self {
        Self::new(move |_| Ok(Some(code)))
    }

    /// Behaves like npm: `install` drops `bin_name` into the cwd's `.bin`
    pub(crate) fn npm_providing(npm: &'static str, bin_name: &'static str) -> Self {
        Self::new(move |inv| {
            if inv.program == npm && inv.args.first().is_some_and(|arg| arg == "install") {
                if let Some(ref cwd) = inv.cwd {
                    write_bin(cwd, bin_name);
                }
            }
            Ok(Some(0))
        })
    }

    pub(crate) fn calls(&self) -> Vec<Invocation> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ProcessRunner for FakeRunner {
    async fn run(&self, invocation: &Invocation) -> GhpxResult<Option<i32>> {
        self.calls.lock().unwrap().push(invocation.clone());
        (self.handler)(invocation)
    }
}

/// Create `node_modules/.bin/<name>` under `dir`
pub(crate) fn write_bin(dir: &Path, name: &str) {
    let bin_dir = dir.join("node_modules").join(".bin");
    std::fs::create_dir_all(&bin_dir).unwrap();
    std::fs::write(bin_dir.join(name), "#!/bin/sh\n").unwrap();
}
