//! Scoped package specifiers
//!
//! Recognizes `@<scope>/<name>[@<version-or-tag>]`. Anything else is left
//! to npx, so a failed parse is `None` rather than an error.

use std::fmt;

/// A parsed scoped-package specifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageSpecifier {
    /// Scope without the leading `@`
    pub scope: String,
    /// Package name within the scope
    pub base_name: String,
    /// Version or tag including its leading `@`, e.g. `@latest`
    pub version_qualifier: Option<String>,
    /// The token exactly as given, passed verbatim to `npm install`
    pub raw_token: String,
}

impl PackageSpecifier {
    /// Parse a token, returning `None` for unscoped or malformed input
    pub fn parse(token: &str) -> Option<Self> {
        let rest = token.strip_prefix('@')?;
        let (scope, tail) = rest.split_once('/')?;

        let (base_name, version_qualifier) = match tail.find('@') {
            Some(at) => (&tail[..at], Some(&tail[at..])),
            None => (tail, None),
        };

        if !is_path_segment(scope) || !is_path_segment(base_name) {
            return None;
        }
        if version_qualifier == Some("@") {
            return None;
        }

        Some(Self {
            scope: scope.to_string(),
            base_name: base_name.to_string(),
            version_qualifier: version_qualifier.map(str::to_string),
            raw_token: token.to_string(),
        })
    }

    /// `scope/baseName[qualifier]`, equivalent to the raw token minus its leading `@`
    pub fn reconstruct(&self) -> String {
        format!(
            "{}/{}{}",
            self.scope,
            self.base_name,
            self.version_qualifier.as_deref().unwrap_or("")
        )
    }

    /// `@scope/name` without any qualifier
    pub fn package_name(&self) -> String {
        format!("@{}/{}", self.scope, self.base_name)
    }
}

impl fmt::Display for PackageSpecifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw_token)
    }
}

/// Non-empty, free of separators, and not a relative path component
fn is_path_segment(s: &str) -> bool {
    !s.is_empty() && !s.contains(['/', '\\']) && s != "." && s != ".."
}
