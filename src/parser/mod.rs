//! External collaborator interfaces
//!
//! Turning a located text block into a structured [`Family`] is not this
//! crate's job: the parser may be remote, slow, and fallible, and is supplied
//! by the caller. The same goes for learned name equivalences, which are
//! consulted as a lookup and never altered here.

use crate::error::Result;
use crate::models::Family;
use rustc_hash::FxHashMap;

/// External parsing capability: raw register text to a structured record.
///
/// This is the sole way the resolution engine materializes a referenced
/// family. Implementations fail with [`crate::error::LinkerError::Parse`] on
/// malformed or unexpected text.
pub trait FamilyParser {
    /// Parse `raw_text` as the register entry for `family_id`
    fn parse(
        &self,
        family_id: &str,
        raw_text: &str,
    ) -> impl Future<Output = Result<Family>> + Send;
}

/// Lookup of learned alias spellings for name matching.
///
/// Absence of this collaborator degrades matching to exact case-insensitive
/// comparison; it is never a hard failure.
pub trait NameEquivalence: Send + Sync {
    /// Whether `a` and `b` are known spellings of the same name
    fn are_equivalent(&self, a: &str, b: &str) -> bool;
}

/// In-memory alias table, symmetric over its entries
#[derive(Debug, Default)]
pub struct AliasTable {
    aliases: FxHashMap<String, String>,
}

impl AliasTable {
    /// Create an empty table
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `a` and `b` as spellings of the same name
    pub fn add(&mut self, a: &str, b: &str) {
        self.aliases
            .insert(a.trim().to_lowercase(), b.trim().to_lowercase());
    }
}

impl NameEquivalence for AliasTable {
    fn are_equivalent(&self, a: &str, b: &str) -> bool {
        let (a, b) = (a.trim().to_lowercase(), b.trim().to_lowercase());
        self.aliases.get(&a) == Some(&b) || self.aliases.get(&b) == Some(&a)
    }
}
