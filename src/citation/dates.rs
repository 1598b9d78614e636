//! Date text handling
//!
//! Dates in the corpus are transcribed strings, not calendar values: a full
//! `d.m.yyyy`, a bare year, a 2-digit marriage year, or an approximation
//! marked with a leading `n` ("noin", about). Rendering normalizes the text;
//! it never invents precision the source does not have.

use crate::utils::digit_count;
use chrono::NaiveDate;
use regex::Regex;
use std::sync::LazyLock;

static YEAR4_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b(\d{4})\b").unwrap());
static YEAR2_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b(\d{2})\b").unwrap());

/// Normalize a transcribed date for rendering.
///
/// A leading `n ` token (the transcriber's "about") becomes the word
/// `about`; everything else passes through unchanged.
#[must_use]
pub fn normalize_date(raw: &str) -> String {
    let trimmed = raw.trim();
    trimmed
        .strip_prefix("n ")
        .map_or_else(|| trimmed.to_string(), |rest| format!("about {}", rest.trim()))
}

/// Extract the marriage year to show on a child's line.
///
/// A 4-digit year token wins; failing that, a 2-digit token is read as
/// `1800 + value` — every marriage in this corpus falls in the 1800s; with
/// neither pattern the raw string is returned unchanged.
#[must_use]
pub fn marriage_year(raw: &str) -> String {
    if let Some(caps) = YEAR4_RE.captures(raw) {
        return caps[1].to_string();
    }
    if let Some(caps) = YEAR2_RE.captures(raw) {
        let value: u32 = caps[1].parse().unwrap_or(0);
        return format!("{}", 1800 + value);
    }
    raw.trim().to_string()
}

/// Whether `raw` is a complete 8-digit `dd.mm.yyyy` date
#[must_use]
pub fn is_full_date(raw: &str) -> bool {
    digit_count(raw) == 8 && NaiveDate::parse_from_str(raw.trim(), "%d.%m.%Y").is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_date() {
        assert_eq!(normalize_date("n 1850"), "about 1850");
        assert_eq!(normalize_date("1850"), "1850");
        assert_eq!(normalize_date("3.4.1850"), "3.4.1850");
    }

    #[test]
    fn test_marriage_year() {
        assert_eq!(marriage_year("04.03.1867"), "1867");
        assert_eq!(marriage_year("14"), "1814");
        assert_eq!(marriage_year("unknown"), "unknown");
    }

    #[test]
    fn test_is_full_date() {
        assert!(is_full_date("04.03.1867"));
        assert!(!is_full_date("4.3.1867"));
        assert!(!is_full_date("1867"));
    }
}
