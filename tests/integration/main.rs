//! Integration tests for ghpx
//!
//! Runs the real binary against stub `npm`/`npx` shell scripts.

mod cli_tests {
    use assert_cmd::{cargo::cargo_bin_cmd, Command};
    use predicates::prelude::*;

    fn ghpx() -> Command {
        cargo_bin_cmd!("ghpx")
    }

    #[test]
    fn version_displays() {
        ghpx()
            .arg("--ghpx-version")
            .assert()
            .success()
            .stdout(predicate::str::contains(format!(
                "ghpx {}",
                env!("CARGO_PKG_VERSION")
            )));
    }

    #[test]
    fn help_displays() {
        ghpx()
            .arg("--ghpx-help")
            .assert()
            .success()
            .stdout(predicate::str::contains("--ghpx-clear-cache"));
    }

    #[test]
    fn self_flag_with_extra_args_is_usage_error() {
        ghpx()
            .args(["--ghpx-version", "cowsay"])
            .assert()
            .code(2)
            .stderr(predicate::str::contains("cowsay"));
    }
}

#[cfg(unix)]
mod dispatch_tests {
    use assert_cmd::{cargo::cargo_bin_cmd, Command};
    use predicates::prelude::*;
    use std::fs;
    use std::os::unix::fs::PermissionsExt;
    use std::path::PathBuf;
    use tempfile::TempDir;

    const NPX_STUB: &str = "#!/bin/sh\nprintf 'npx:%s\\n' \"$@\"\n";

    const NPM_STUB: &str = r#"#!/bin/sh
[ "$1" = "install" ] || exit 2
spec="$2"
name="${spec#@*/}"
name="${name%%@*}"
echo "$spec" >> "$GHPX_STUB_LOG"
mkdir -p node_modules/.bin
printf '#!/bin/sh\nprintf "bin:%%s\\n" "$@"\n' > "node_modules/.bin/$name"
chmod +x "node_modules/.bin/$name"
"#;

    const FAILING_NPM_STUB: &str = "#!/bin/sh\nexit 3\n";

    /// Prints each argument as hex, one per line
    const HEX_NPX_STUB: &str = r#"#!/bin/sh
for arg in "$@"; do
    printf '%s' "$arg" | od -An -tx1 | tr -d ' \n'
    echo
done
"#;

    /// Temp dir with stub tools, a cache root and an install log
    struct Sandbox {
        temp: TempDir,
    }

    impl Sandbox {
        fn new() -> Self {
            let sandbox = Self {
                temp: TempDir::new().unwrap(),
            };
            sandbox.stub("npx", NPX_STUB);
            sandbox.stub("npm", NPM_STUB);
            sandbox
        }

        fn stub(&self, name: &str, body: &str) -> PathBuf {
            let path = self.temp.path().join(name);
            fs::write(&path, body).unwrap();
            fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
            path
        }

        fn cache(&self) -> PathBuf {
            self.temp.path().join("cache")
        }

        fn log(&self) -> PathBuf {
            self.temp.path().join("installs.log")
        }

        fn installs(&self) -> Vec<String> {
            fs::read_to_string(self.log())
                .unwrap_or_default()
                .lines()
                .map(str::to_string)
                .collect()
        }

        fn cmd(&self) -> Command {
            let mut cmd = cargo_bin_cmd!("ghpx");
            cmd.env("GHPX_CONFIG", self.temp.path().join("no-config.toml"))
                .env("GHPX_CACHE_DIR", self.cache())
                .env("GHPX_NPM", self.temp.path().join("npm"))
                .env("GHPX_NPX", self.temp.path().join("npx"))
                .env("GHPX_STUB_LOG", self.log())
                .env_remove("GHPX_LOG");
            cmd
        }
    }

    #[test]
    fn unscoped_passes_through_unchanged() {
        let sandbox = Sandbox::new();
        sandbox
            .cmd()
            .args(["cowsay", "hello"])
            .assert()
            .success()
            .stdout("npx:cowsay\nnpx:hello\n");
        assert!(!sandbox.cache().exists());
    }

    #[test]
    fn empty_invocation_passes_through() {
        let sandbox = Sandbox::new();
        sandbox.cmd().assert().success().stdout("npx:\n");
    }

    #[test]
    fn flags_only_pass_through() {
        let sandbox = Sandbox::new();
        sandbox
            .cmd()
            .args(["--yes", "--help"])
            .assert()
            .success()
            .stdout("npx:--yes\nnpx:--help\n");
    }

    #[test]
    fn scoped_installs_then_runs_with_trailing_args() {
        let sandbox = Sandbox::new();
        sandbox
            .cmd()
            .args(["@acme/tool", "--flag", "x"])
            .assert()
            .success()
            .stdout("bin:--flag\nbin:x\n")
            .stderr(predicate::str::contains("Installing @acme/tool"));

        assert_eq!(sandbox.installs(), vec!["@acme/tool"]);
        assert!(sandbox.cache().join("acme/tool/package.json").is_file());
    }

    #[test]
    fn fixed_version_reuses_cache() {
        let sandbox = Sandbox::new();
        for _ in 0..2 {
            sandbox
                .cmd()
                .args(["@acme/tool@1.0.0", "run"])
                .assert()
                .success()
                .stdout("bin:run\n");
        }
        assert_eq!(sandbox.installs(), vec!["@acme/tool@1.0.0"]);
    }

    #[test]
    fn latest_reinstalls_every_run() {
        let sandbox = Sandbox::new();
        for _ in 0..2 {
            sandbox
                .cmd()
                .arg("@acme/tool@latest")
                .assert()
                .success();
        }
        assert_eq!(sandbox.installs().len(), 2);
    }

    #[test]
    fn non_utf8_argument_passes_through_byte_for_byte() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let sandbox = Sandbox::new();
        sandbox.stub("npx", HEX_NPX_STUB);
        sandbox
            .cmd()
            .arg("cowsay")
            .arg(OsStr::from_bytes(b"caf\xe9"))
            .assert()
            .success()
            .stdout("636f77736179\n636166e9\n");
        assert!(!sandbox.cache().exists());
    }

    #[test]
    fn non_utf8_argument_reaches_cached_binary() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let sandbox = Sandbox::new();
        sandbox
            .cmd()
            .arg("@acme/tool")
            .arg(OsStr::from_bytes(b"caf\xe9"))
            .assert()
            .success()
            .stdout(&b"bin:caf\xe9\n"[..]);
    }

    #[test]
    fn child_exit_code_propagates() {
        let sandbox = Sandbox::new();
        sandbox.stub("npx", "#!/bin/sh\nexit 7\n");
        sandbox.cmd().arg("cowsay").assert().code(7);
    }

    #[test]
    fn install_failure_exits_one() {
        let sandbox = Sandbox::new();
        sandbox.stub("npm", FAILING_NPM_STUB);
        sandbox
            .cmd()
            .arg("@acme/tool@2.0.0")
            .assert()
            .code(1)
            .stderr(predicate::str::contains("Failed to install @acme/tool@2.0.0"));
    }

    #[test]
    fn missing_binary_exits_one() {
        let sandbox = Sandbox::new();
        sandbox.stub("npm", "#!/bin/sh\nmkdir -p node_modules/.bin\n");
        sandbox
            .cmd()
            .arg("@acme/tool")
            .assert()
            .code(1)
            .stderr(predicate::str::contains("No executable named 'tool'"))
            .stderr(predicate::str::contains("node_modules/.bin"));
    }

    #[test]
    fn spawn_failure_exits_one() {
        let sandbox = Sandbox::new();
        sandbox
            .cmd()
            .env("GHPX_NPX", sandbox.temp.path().join("missing-npx"))
            .arg("cowsay")
            .assert()
            .code(1)
            .stderr(predicate::str::contains("Failed to start"));
    }

    #[test]
    fn clear_cache_removes_root() {
        let sandbox = Sandbox::new();
        sandbox.cmd().arg("@acme/tool").assert().success();
        assert!(sandbox.cache().exists());

        sandbox
            .cmd()
            .arg("--ghpx-clear-cache")
            .assert()
            .success()
            .stdout(predicate::str::contains("Cache cleared"));
        assert!(!sandbox.cache().exists());

        sandbox
            .cmd()
            .arg("--ghpx-clear-cache")
            .assert()
            .success()
            .stdout(predicate::str::contains("Cache already empty"));

        // Next run installs again
        sandbox.cmd().arg("@acme/tool").assert().success();
        assert_eq!(sandbox.installs().len(), 2);
    }

    #[test]
    fn list_cache_shows_installed_packages() {
        let sandbox = Sandbox::new();
        sandbox
            .cmd()
            .arg("--ghpx-list-cache")
            .assert()
            .success()
            .stdout(predicate::str::contains("No cached packages."));

        sandbox.cmd().arg("@acme/tool@1.0.0").assert().success();

        sandbox
            .cmd()
            .arg("--ghpx-list-cache")
            .assert()
            .success()
            .stdout(predicate::str::contains("@acme/tool"));
    }
}
