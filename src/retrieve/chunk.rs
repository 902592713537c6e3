//! Splitting document text into passages.

/// Splits `text` into passages at blank lines.
///
/// Passages are trimmed and empty ones dropped, so runs of several blank
/// lines and leading or trailing whitespace never produce empty passages.
#[must_use]
pub fn chunk(text: &str) -> Vec<String> {
    text.split("\n\n")
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::chunk;

    #[test]
    fn splits_on_blank_line() {
        assert_eq!(
            chunk("river levels rose\n\ntemperature dropped"),
            ["river levels rose", "temperature dropped"]
        );
    }

    #[test]
    fn collapses_runs_of_blank_lines() {
        assert_eq!(chunk("a\n\n\n\nb\n\n\nc"), ["a", "b", "c"]);
    }

    #[test]
    fn single_newline_stays_in_passage() {
        assert_eq!(chunk("line one\nline two"), ["line one\nline two"]);
    }

    #[test]
    fn trims_and_drops_empty_passages() {
        assert_eq!(chunk("\n\n  first  \n\n   \n\nsecond\n"), ["first", "second"]);
    }

    #[test]
    fn empty_text_has_no_passages() {
        assert!(chunk("").is_empty());
        assert!(chunk("\n\n\n").is_empty());
    }
}
