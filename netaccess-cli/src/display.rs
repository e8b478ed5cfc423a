//! Terminal output helpers.

use console::style;

/// Print a success message.
pub fn success(message: &str) {
    println!("{} {}", style("✓").green().bold(), message);
}

/// Print an informational message.
pub fn info(message: &str) {
    println!("{} {}", style("→").cyan(), message);
}

/// Print a warning.
pub fn warning(message: &str) {
    eprintln!("{} {}", style("!").yellow().bold(), message);
}
