//! Text utilities shared across the linker.
//!
//! Name and reference-token handling in the corpus is deliberately shallow:
//! case-insensitive comparison and whitespace trimming only. Anything richer
//! (alias spellings) goes through the optional [`crate::parser::NameEquivalence`]
//! collaborator.

/// Normalize a cross-reference token for lookup: trim and uppercase.
#[must_use]
pub fn normalize_ref(token: &str) -> String {
    token.trim().to_uppercase()
}

/// Case-insensitive, whitespace-trimmed equality of two names.
#[must_use]
pub fn names_equal(a: &str, b: &str) -> bool {
    // to_lowercase rather than eq_ignore_ascii_case: names carry ä/ö/å
    a.trim().to_lowercase() == b.trim().to_lowercase()
}

/// Count the decimal digits in a string.
///
/// Used to distinguish a full `d.m.yyyy` marriage date (8 digits) from a
/// partial one (2-digit year).
#[must_use]
pub fn digit_count(s: &str) -> usize {
    s.chars().filter(char::is_ascii_digit).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_ref() {
        assert_eq!(normalize_ref("  sipilä 4b "), "SIPILÄ 4B");
        assert_eq!(normalize_ref("KOSKI II 12"), "KOSKI II 12");
    }

    #[test]
    fn test_names_equal() {
        assert!(names_equal("Matti", "MATTI"));
        assert!(names_equal(" Äiti ", "äiti"));
        assert!(!names_equal("Matti", "Maija"));
    }

    #[test]
    fn test_digit_count() {
        assert_eq!(digit_count("04.03.1867"), 8);
        assert_eq!(digit_count("67"), 2);
        assert_eq!(digit_count("n 1850"), 4);
    }
}
