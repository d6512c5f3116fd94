//! Terminal output utilities.
//!
//! Provides formatting helpers for terminal output.

/// Width of the separator lines around each report.
pub const RULE_WIDTH: usize = 60;

/// Format a label as a left-aligned `Label:` column.
///
/// # Arguments
/// * `label` - The label text, without the trailing colon
/// * `width` - The minimum width of the column
///
/// # Returns
/// The label with a colon, padded with spaces to `width`
pub fn format_label(label: &str, width: usize) -> String {
    let with_colon = format!("{label}:");
    format!("{with_colon:<width$}")
}

/// A separator line of `width` copies of `ch`.
pub fn rule(ch: char, width: usize) -> String {
    std::iter::repeat(ch).take(width).collect()
}
