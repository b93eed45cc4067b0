//! Shared CLI output helpers for consistent operator-facing text.
//!
//! Status lines go to stdout with colored symbols; errors go to stderr.

use std::fmt::Display;

use owo_colors::OwoColorize;

/// Print a section header.
pub fn section(title: &str) {
    println!();
    println!("{}", title.bold());
}

/// Print a labeled value.
pub fn field(label: &str, value: impl Display) {
    println!("  {:<12} {}", label.dimmed(), value);
}

/// Print a success line.
pub fn success(message: &str) {
    println!("  {} {}", "✓".green(), message);
}

/// Print a warning line.
pub fn warning(message: &str) {
    println!("  {} {}", "⚠".yellow(), message);
}

/// Print an error line.
pub fn error(message: &str) {
    eprintln!("  {} {}", "×".red(), message);
}

/// Print a note/hint.
pub fn note(message: &str) {
    println!("  {}", message.dimmed());
}

/// Format a highlighted value in cyan.
pub fn highlight(value: impl Display) -> String {
    format!("{}", value.to_string().cyan())
}

/// Render an optional setting, showing unset values as `-`.
pub fn or_unset(value: Option<impl Display>) -> String {
    value.map_or_else(|| "-".to_string(), |v| v.to_string())
}
