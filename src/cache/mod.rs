//! Install cache for scoped packages
//!
//! One directory per `(scope, name)` pair under a single cache root. Each
//! entry is a throwaway npm project whose `node_modules/.bin` provides the
//! executable.
//!
//! # Freshness
//!
//! | Dependency tree | Token | Action |
//! |-----------------|-------|--------|
//! | missing | any | install |
//! | present | contains `@latest` | reinstall |
//! | present | other | reuse |
//!
//! Entries are never locked. Two concurrent installs of the same pair
//! write into the same directory.

pub mod entry;
pub mod manifest;

pub use entry::{clear_cache, list_cached, CacheEntry, CachedPackage};
pub use manifest::CacheManifest;
