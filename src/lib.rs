//! ghpx - npx for scoped packages from alternative registries
//!
//! Scoped packages (`@scope/name[@version]`) are installed with npm into a
//! per-package cache and run from there. Everything else is forwarded to
//! npx untouched.

pub mod binary;
pub mod cache;
pub mod classify;
pub mod cli;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod install;
pub mod process;
pub mod specifier;
pub mod ui;

pub use dispatch::Dispatcher;
pub use error::{GhpxError, GhpxResult};
