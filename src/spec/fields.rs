//! Parsing of free-text form fields into list fields.

/// Splits `text` on `separator`, trims each item and drops empty ones.
///
/// Style is entered comma-separated, constraints semicolon-separated and
/// acceptance criteria one per line.
#[must_use]
pub fn parse_list(text: &str, separator: char) -> Vec<String> {
    text.split(separator)
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(String::from)
        .collect()
}
