//! Common utilities for output formats
//!
//! Option parsing shared by formats that take `--extra-*` parameters, and label
//! helpers for the diagnostic formats.

use crate::error::FormatError;
use std::collections::HashMap;

/// Maximum label width for tree output, in characters.
pub const LABEL_WIDTH: usize = 30;

/// Fail when `options` holds a key outside `known`.
pub fn reject_unknown_options(
    format: &str,
    options: &HashMap<String, String>,
    known: &[&str],
) -> Result<(), FormatError> {
    let mut unknown: Vec<&str> = options
        .keys()
        .map(String::as_str)
        .filter(|key| !known.contains(key))
        .collect();
    if unknown.is_empty() {
        return Ok(());
    }
    unknown.sort_unstable();
    Err(FormatError::NotSupported(format!(
        "Format '{format}' does not support parameter(s): {}",
        unknown.join(", ")
    )))
}

/// Read a boolean option, falling back to `default` when absent.
pub fn bool_option(
    options: &HashMap<String, String>,
    key: &str,
    default: bool,
) -> Result<bool, FormatError> {
    match options.get(key) {
        None => Ok(default),
        Some(raw) => match raw.to_lowercase().as_str() {
            "true" | "1" | "yes" | "y" => Ok(true),
            "false" | "0" | "no" | "n" => Ok(false),
            other => Err(FormatError::NotSupported(format!(
                "Invalid boolean value '{other}' for parameter '{key}'"
            ))),
        },
    }
}

/// Shorten `text` to `max` characters, marking the cut with `…`.
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let mut out: String = text.chars().take(max).collect();
    out.push('…');
    out
}

/// Make line breaks visible on a single line.
pub fn one_line(text: &str) -> String {
    text.replace('\n', "↵")
}
