//! Enrichment supplements
//!
//! A person's as-parent record often carries dates their as-child record
//! lacks. The supplement names which date categories were found there and
//! where, in a fixed grammar: "death date is", "marriage and death dates
//! are", or a comma-joined list with "and" for three or more. The phrasing
//! is a table, not a general pluralization algorithm; golden-output tests pin
//! every variant.

use crate::models::{Family, Person};
use itertools::Itertools;

/// Which date categories `linked` adds over `record`.
///
/// A death date counts when `linked` has one and `record` does not; a
/// marriage date counts when `linked` carries a complete 8-digit date while
/// `record` has at most a partial one.
#[must_use]
pub fn supplement_categories(record: &Person, linked: &Person) -> Vec<&'static str> {
    let mut categories = Vec::new();
    if linked.has_full_marriage_date() && !record.has_full_marriage_date() {
        categories.push("marriage");
    }
    if linked.death_date.is_some() && record.death_date.is_none() {
        categories.push("death");
    }
    categories
}

/// Render the category list through the fixed grammar table.
///
/// One category: `<x> date is`. Exactly two: `<a> and <b> dates are`. Three
/// or more: comma-joined with a final `and`, then `dates are`. Empty: none.
#[must_use]
pub fn phrase_categories(categories: &[&str]) -> Option<String> {
    match categories {
        [] => None,
        [one] => Some(format!("{one} date is")),
        [a, b] => Some(format!("{a} and {b} dates are")),
        [head @ .., last] => Some(format!("{}, and {last} dates are", head.iter().join(", "))),
    }
}

/// The full supplement sentence for `record` against its entry in `linked`,
/// or `None` when the linked family adds nothing.
///
/// The person's entry in `linked` is their parent record there, matched by
/// name.
#[must_use]
pub fn supplement_sentence(record: &Person, linked: &Family) -> Option<String> {
    let entry = linked
        .all_parents()
        .find(|p| p.matches_name(&record.name, None))?;
    let categories = supplement_categories(record, entry);
    let phrase = phrase_categories(&categories)?;
    let place = if linked.page_refs.is_empty() {
        format!("found in {}", linked.id)
    } else {
        format!("found in {} on page {}", linked.id, linked.pages_display())
    };
    Some(format!("{phrase} {place}."))
}
