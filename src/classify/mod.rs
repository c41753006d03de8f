//! Argument classification
//!
//! Splits the raw invocation into npx's own flags and everything else,
//! then picks the first positional token as the candidate package.
//!
//! Tokens stay `OsString` throughout. Lookups against the flag table use a
//! lossy view, but what gets forwarded is always the original token.

pub mod flags;

pub use flags::{FlagKind, FlagTable, NPX_FLAGS};

use std::ffi::{OsStr, OsString};
use tracing::debug;

/// Raw arguments split into tool flags and remaining arguments.
///
/// Every raw token lands in exactly one of the two lists, and relative
/// order within each list is preserved.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassifiedArguments {
    /// Flags (and their values) belonging to the passthrough tool
    pub tool_flags: Vec<OsString>,
    /// Everything else, in original order
    pub remaining: Vec<OsString>,
}

/// First non-flag token in `remaining`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate<'a> {
    /// Position within `remaining`
    pub index: usize,
    /// The token itself
    pub token: &'a OsStr,
}

/// Classify raw arguments against a flag table
pub fn classify(raw: &[OsString], table: &FlagTable) -> ClassifiedArguments {
    let mut classified = ClassifiedArguments::default();
    let mut tokens = raw.iter();

    while let Some(token) = tokens.next() {
        match table.kind(&token.to_string_lossy()) {
            Some(FlagKind::TakesValue) => {
                classified.tool_flags.push(token.clone());
                // A trailing value flag is recorded alone
                if let Some(value) = tokens.next() {
                    classified.tool_flags.push(value.clone());
                }
            }
            Some(FlagKind::Standalone) | Some(FlagKind::Inline) => {
                classified.tool_flags.push(token.clone());
            }
            None => classified.remaining.push(token.clone()),
        }
    }

    debug!(
        "Classified {} args: tool flags {:?}, remaining {:?}",
        raw.len(),
        classified.tool_flags,
        classified.remaining
    );
    classified
}

impl ClassifiedArguments {
    /// First token in `remaining` that does not start with `-`
    pub fn candidate(&self) -> Option<Candidate<'_>> {
        self.remaining
            .iter()
            .enumerate()
            .find(|(_, token)| !token.as_encoded_bytes().starts_with(b"-"))
            .map(|(index, token)| Candidate {
                index,
                token: token.as_os_str(),
            })
    }

    /// Arguments after the candidate at `index`, forwarded to the binary
    pub fn args_after(&self, index: usize) -> &[OsString] {
        self.remaining.get(index + 1..).unwrap_or(&[])
    }

    /// Tool flags that also apply to `npm install`, values included
    pub fn install_flags(&self, table: &FlagTable) -> Vec<OsString> {
        let mut forwarded = Vec::new();
        let mut flags = self.tool_flags.iter();

        while let Some(flag) = flags.next() {
            let name = flag.to_string_lossy();
            let relevant = table.is_install_relevant(&name);
            if relevant {
                forwarded.push(flag.clone());
            }
            if table.kind(&name) == Some(FlagKind::TakesValue) {
                if let Some(value) = flags.next() {
                    if relevant {
                        forwarded.push(value.clone());
                    }
                }
            }
        }

        forwarded
    }
}
