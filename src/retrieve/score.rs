//! Token-set similarity.

use std::collections::BTreeSet;

/// Lowercases `text` and splits it into a set of word tokens.
///
/// Word characters are ASCII letters, ASCII digits and `_`; every other
/// character separates tokens, including accented and non-Latin letters.
#[must_use]
pub fn tokenize(text: &str) -> BTreeSet<String> {
    text.to_lowercase()
        .split(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
        .filter(|token| !token.is_empty())
        .map(String::from)
        .collect()
}

/// Jaccard coefficient `|a ∩ b| / max(1, |a ∪ b|)`.
///
/// Two empty sets score `0.0`, not `1.0`.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn jaccard(a: &BTreeSet<String>, b: &BTreeSet<String>) -> f64 {
    let intersection = a.intersection(b).count();
    let union = a.len() + b.len() - intersection;
    intersection as f64 / union.max(1) as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(tokens: &[&str]) -> BTreeSet<String> {
        tokens.iter().map(|t| (*t).to_string()).collect()
    }

    #[test]
    fn tokenize_lowercases_and_splits_on_punctuation() {
        assert_eq!(tokenize("River-levels, ROSE!"), set(&["river", "levels", "rose"]));
    }

    #[test]
    fn tokenize_keeps_underscores_and_digits() {
        assert_eq!(tokenize("ph_7 at 16C"), set(&["ph_7", "at", "16c"]));
    }

    #[test]
    fn tokenize_splits_on_non_ascii_letters() {
        assert_eq!(tokenize("Café: avg +1.2°C"), set(&["caf", "avg", "1", "2", "c"]));
        assert!((jaccard(&tokenize("caf"), &tokenize("café")) - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn tokenize_dedups() {
        assert_eq!(tokenize("the the THE"), set(&["the"]));
    }

    #[test]
    fn tokenize_empty_and_punctuation_only() {
        assert!(tokenize("").is_empty());
        assert!(tokenize(" ... --- ").is_empty());
    }

    #[test]
    fn jaccard_of_identical_sets_is_one() {
        let a = set(&["river", "levels"]);
        assert!((jaccard(&a, &a) - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn jaccard_partial_overlap() {
        let q = set(&["river", "levels"]);
        let p = set(&["river", "levels", "rose"]);
        assert!((jaccard(&q, &p) - 2.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn jaccard_disjoint_is_zero() {
        assert!(jaccard(&set(&["a"]), &set(&["b"])).abs() < f64::EPSILON);
    }

    #[test]
    fn jaccard_of_two_empty_sets_is_zero() {
        let empty = BTreeSet::new();
        assert!(jaccard(&empty, &empty).abs() < f64::EPSILON);
    }

    #[test]
    fn jaccard_stays_in_unit_interval() {
        let samples = [set(&[]), set(&["a"]), set(&["a", "b"]), set(&["b", "c", "d"])];
        for a in &samples {
            for b in &samples {
                let score = jaccard(a, b);
                assert!((0.0..=1.0).contains(&score), "{score} out of range");
            }
        }
    }
}
