//! Self-flag command implementations

pub mod cache;

/// Print the ghpx version
pub fn version() {
    println!("ghpx {}", env!("CARGO_PKG_VERSION"));
}
