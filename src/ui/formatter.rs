//! Pure formatting functions for UI output.

use console::style;

/// Prefix of the version line written to stdout
pub const VERSION_LINE_PREFIX: &str = "lib-version = ";

/// Formats the version line, without line terminator.
pub fn format_version_line(version: &str) -> String {
    format!("{}{}", VERSION_LINE_PREFIX, version)
}

/// Format and print a warning message in yellow on stderr.
pub fn display_warning(message: &str) {
    eprintln!("{} {}", style("WARNING:").yellow(), message);
}
