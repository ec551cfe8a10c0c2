//! User interface module - output formatting.
//!
//! Stdout carries only the version line; diagnostics go to stderr.

pub mod formatter;

pub use formatter::{display_warning, format_version_line, VERSION_LINE_PREFIX};
