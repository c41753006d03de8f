//! Command-line surface owned by ghpx itself

pub mod args;
pub mod commands;

pub use args::{SelfArgs, SelfCommand, SELF_FLAGS};
