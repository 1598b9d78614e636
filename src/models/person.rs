//! Person entity model
//!
//! A Person is an individual as described in one family record. The same
//! individual appears in several records over a lifetime (as a child, as a
//! parent, as a spouse married in from a third household), and nothing in the
//! archive makes those appearances share an identifier. Linkage therefore
//! works on names and dates, and must tolerate same-name collisions.

use crate::parser::NameEquivalence;
use crate::utils::{digit_count, names_equal};
use serde::{Deserialize, Serialize};

/// An individual as recorded in one family's register entry
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    /// Canonical name, secondary/legacy lookup key
    pub name: String,
    /// Name plus disambiguating patronymic/suffix, primary lookup key when present
    pub display_name: Option<String>,
    /// Birth date as transcribed (may be partial, e.g. "n 1850")
    pub birth_date: Option<String>,
    /// Death date as transcribed
    pub death_date: Option<String>,
    /// Partial marriage date, typically a 2-digit year
    pub marriage_date: Option<String>,
    /// Complete day.month.year marriage date
    pub full_marriage_date: Option<String>,
    /// Free-text spouse name
    pub spouse_name: Option<String>,
    /// Token pointing to the family where this person appears as a child
    pub as_child_ref: Option<String>,
    /// Token pointing to the family this person founded as a parent
    pub as_parent_ref: Option<String>,
}

impl Person {
    /// Create a person with only a name
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Primary lookup key: display name when available, bare name otherwise
    #[must_use]
    pub fn key(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.name)
    }

    /// Whether this person has a recorded spouse
    #[must_use]
    pub fn is_married(&self) -> bool {
        self.spouse_name.as_deref().is_some_and(|s| !s.trim().is_empty())
    }

    /// Whether the marriage date on record is a complete day.month.year date
    #[must_use]
    pub fn has_full_marriage_date(&self) -> bool {
        self.full_marriage_date
            .as_deref()
            .is_some_and(|d| digit_count(d) == 8)
    }

    /// Case-insensitive name match against `other`, consulting the alias
    /// lookup when one is available
    #[must_use]
    pub fn matches_name(&self, other: &str, aliases: Option<&dyn NameEquivalence>) -> bool {
        if names_equal(&self.name, other) {
            return true;
        }
        if let Some(display) = self.display_name.as_deref() {
            if names_equal(display, other) {
                return true;
            }
        }
        aliases.is_some_and(|a| a.are_equivalent(&self.name, other))
    }

    /// Lenient same-person test used when marking a child line in a citation:
    /// names must match and birth dates must agree, where a missing birth date
    /// on either side counts as agreement. Birth dates are frequently absent
    /// in one of the two sources.
    #[must_use]
    pub fn is_same_person(&self, other: &Self) -> bool {
        if !names_equal(&self.name, &other.name) {
            return false;
        }
        match (self.birth_date.as_deref(), other.birth_date.as_deref()) {
            (Some(a), Some(b)) => a.trim() == b.trim(),
            _ => true,
        }
    }

    /// Merge linked-record data into this record.
    ///
    /// Rules: a death date is filled only if absent here; a full marriage
    /// date on `other` always overrides and clears the partial
    /// `marriage_date` so both are never rendered; a spouse name is filled
    /// only if absent. Applying the merge twice with the same source is a
    /// no-op the second time.
    pub fn enrich_from(&mut self, other: &Self) {
        if self.death_date.is_none() {
            self.death_date = other.death_date.clone();
        }
        if other.has_full_marriage_date() {
            self.full_marriage_date = other.full_marriage_date.clone();
            self.marriage_date = None;
        }
        if self.spouse_name.is_none() {
            self.spouse_name = other.spouse_name.clone();
        }
    }
}
