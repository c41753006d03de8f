//! Output functions for consistent CLI formatting

use console::style;

/// Progress notice on stderr, e.g. before an install
pub fn notice(message: &str) {
    eprintln!("{} {}", style("ghpx").cyan().bold(), message);
}

/// Success line on stdout
pub fn step_ok(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

/// Warning line on stdout
pub fn step_warn(message: &str) {
    println!("{} {}", style("!").yellow(), message);
}

/// Fatal error on stderr
pub fn error(message: &str) {
    eprintln!("{} {}", style("Error:").red().bold(), message);
}

/// Follow-up hint on stderr
pub fn hint(message: &str) {
    eprintln!("{} {}", style("Hint:").yellow(), message);
}
