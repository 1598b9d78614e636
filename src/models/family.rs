//! Family record model
//!
//! A family record is one block of the register: an archive identifier (place
//! name, optional Roman-numeral qualifier, sequence number, optional letter
//! suffix), page references into the source volume, and one or more couples.
//! The first couple is the primary couple; later couples represent the same
//! husband remarried, so husband identity is shared while the wife differs.

use super::couple::Couple;
use super::person::Person;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// One family's register entry
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Family {
    /// Archive-specific family identifier, e.g. `SIPILÄ 4` or `KOSKI II 12b`
    pub id: String,
    /// Page references into the source archive
    pub page_refs: SmallVec<[String; 2]>,
    /// Couples in record order; the first is the primary couple
    pub couples: SmallVec<[Couple; 2]>,
    /// Free-text notes scoped to the whole family
    pub notes: Vec<String>,
    /// Inline note markers mapped to their definitions
    pub note_markers: FxHashMap<String, String>,
}

impl Family {
    /// Create a family with its identifier and primary couple
    #[must_use]
    pub fn new(id: impl Into<String>, primary: Couple) -> Self {
        let mut couples = SmallVec::new();
        couples.push(primary);
        Self {
            id: id.into(),
            couples,
            ..Self::default()
        }
    }

    /// Add a page reference
    #[must_use]
    pub fn with_page_ref(mut self, page: impl Into<String>) -> Self {
        self.page_refs.push(page.into());
        self
    }

    /// Add a later marriage of the same husband
    pub fn add_couple(&mut self, couple: Couple) {
        self.couples.push(couple);
    }

    /// The primary couple, when the record has any couple at all
    #[must_use]
    pub fn primary_couple(&self) -> Option<&Couple> {
        self.couples.first()
    }

    /// Husband and every wife across all couples.
    ///
    /// The husband is shared between couples and is yielded once.
    pub fn all_parents(&self) -> impl Iterator<Item = &Person> {
        self.couples
            .first()
            .map(|c| &c.husband)
            .into_iter()
            .chain(self.couples.iter().filter_map(|c| c.wife.as_ref()))
    }

    /// The primary couple's children in register order
    #[must_use]
    pub fn children(&self) -> &[Person] {
        self.primary_couple().map_or(&[], |c| c.children.as_slice())
    }

    /// Primary-couple children with a recorded spouse
    pub fn married_children(&self) -> impl Iterator<Item = &Person> {
        self.children().iter().filter(|c| c.is_married())
    }

    /// Every person in the record: parents, then children of every couple
    pub fn all_persons(&self) -> impl Iterator<Item = &Person> {
        self.all_parents()
            .chain(self.couples.iter().flat_map(|c| c.children.iter()))
    }

    /// Page references joined for display, e.g. `112, 113`
    #[must_use]
    pub fn pages_display(&self) -> String {
        self.page_refs.join(", ")
    }
}
