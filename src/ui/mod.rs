//! Terminal output helpers
//!
//! Progress notices go to stderr so they never mix with a child's stdout.
//! Results of ghpx's own commands go to stdout.

mod output;

pub use output::{error, hint, notice, step_ok, step_warn};
