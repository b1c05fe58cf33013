//! Output formatting utilities

use console::style;

/// Print a success message
pub fn success(message: &str) {
    eprintln!("{} {}", style("✓").green().bold(), message);
}

/// Print an error message
pub fn error(message: &str) {
    eprintln!("{} {}", style("✗").red().bold(), message);
}

/// Print an info message
pub fn info(message: &str) {
    eprintln!("{} {}", style("→").blue(), message);
}

/// Style a tag name
pub fn tag(text: &str) -> String {
    style(text).yellow().to_string()
}

/// Style a path
pub fn path(path: &std::path::Path) -> String {
    style(path.display()).cyan().to_string()
}
