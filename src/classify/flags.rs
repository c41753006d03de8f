//! npx flag vocabulary
//!
//! Kept as data so the recognized set can be tested and extended without
//! touching the classifier.

/// Closed set of flags understood by the passthrough tool
#[derive(Debug, Clone, Copy)]
pub struct FlagTable {
    /// Flags whose value is the following token
    pub takes_value: &'static [&'static str],
    /// Flags that stand alone
    pub standalone: &'static [&'static str],
    /// Prefixes of flags carrying an inline `=value`
    pub inline_prefixes: &'static [&'static str],
    /// Flags (bare names) that also apply to the install step
    pub install_relevant: &'static [&'static str],
}

/// How a single token relates to the table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlagKind {
    /// Consumes the next token as its value
    TakesValue,
    /// No value
    Standalone,
    /// Value is joined with `=`
    Inline,
}

impl FlagTable {
    /// Classify a token against the table
    pub fn kind(&self, token: &str) -> Option<FlagKind> {
        if self.takes_value.contains(&token) {
            Some(FlagKind::TakesValue)
        } else if self.standalone.contains(&token) {
            Some(FlagKind::Standalone)
        } else if self.inline_prefixes.iter().any(|p| token.starts_with(p)) {
            Some(FlagKind::Inline)
        } else {
            None
        }
    }

    /// Whether a recognized flag token should be forwarded to the installer
    pub fn is_install_relevant(&self, token: &str) -> bool {
        let name = token.split_once('=').map_or(token, |(name, _)| name);
        self.install_relevant.contains(&name)
    }
}

/// npx's own flags
pub const NPX_FLAGS: FlagTable = FlagTable {
    takes_value: &[
        "--package",
        "-p",
        "--call",
        "-c",
        "--cache",
        "--userconfig",
        "--registry",
        "--loglevel",
        "--workspace",
        "-w",
    ],
    standalone: &[
        "--yes",
        "-y",
        "--no",
        "--no-install",
        "--ignore-existing",
        "--quiet",
        "-q",
        "--silent",
        "--verbose",
        "-d",
        "--workspaces",
        "--include-workspace-root",
    ],
    inline_prefixes: &[
        "--package=",
        "--call=",
        "--cache=",
        "--userconfig=",
        "--registry=",
        "--loglevel=",
        "--workspace=",
    ],
    install_relevant: &[
        "--registry",
        "--userconfig",
        "--cache",
        "--loglevel",
        "--quiet",
        "-q",
        "--silent",
        "--verbose",
        "-d",
    ],
};
