//! Resolution diagnostics
//!
//! An unresolved cross-reference is a normal outcome of working with this
//! archive, not an error. The report records every miss with enough context
//! for a researcher to chase it by hand, plus per-pass counters.

use crate::models::LinkKind;
use serde::{Deserialize, Serialize};

/// Why a cross-reference stayed unresolved
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnresolvedReason {
    /// The record carries no reference token and no usable search key
    NoReference,
    /// A reference token was present but no corpus block matched it
    BlockNotFound,
    /// Birth-date search produced no candidate with a matching name
    NoCandidates,
    /// Birth-date search produced several plausible candidates; ties are
    /// never broken by scoring, a wrong match being worse than a missing one
    Ambiguous {
        /// Identifiers of the competing candidate families
        candidates: Vec<String>,
    },
    /// The search strategy for this reference class is a documented gap
    NotImplemented,
}

/// One cross-reference that could not be resolved
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnresolvedReference {
    /// Primary key of the person the reference belongs to
    pub person: String,
    /// Which relation class the reference was for
    pub kind: LinkKind,
    /// Why it stayed unresolved
    pub reason: UnresolvedReason,
}

/// Counters and misses accumulated over one `resolve` call
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResolutionReport {
    /// References attempted across all passes
    pub attempted: usize,
    /// References resolved into the network
    pub resolved: usize,
    /// Every reference that stayed unresolved
    pub unresolved: Vec<UnresolvedReference>,
}

impl ResolutionReport {
    /// Record a successful resolution
    pub fn resolved(&mut self) {
        self.attempted += 1;
        self.resolved += 1;
    }

    /// Record a miss
    pub fn miss(&mut self, person: &str, kind: LinkKind, reason: UnresolvedReason) {
        self.attempted += 1;
        self.unresolved.push(UnresolvedReference {
            person: person.to_string(),
            kind,
            reason,
        });
    }

    /// Number of unresolved references of `kind`
    #[must_use]
    pub fn unresolved_count(&self, kind: LinkKind) -> usize {
        self.unresolved.iter().filter(|u| u.kind == kind).count()
    }
}
