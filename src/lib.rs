//! A Rust library for linking family records across a transcribed
//! family-register archive: cross-reference resolution, the family-network
//! data model, and citation-text synthesis.

pub mod citation;
pub mod corpus;
pub mod error;
pub mod models;
pub mod parser;
pub mod resolve;
pub mod utils;

// Re-export the most common types for easier use
// Core types
pub use error::{LinkerError, Result};
pub use models::{Couple, Family, FamilyNetwork, LinkKind, Person};

// Corpus access
pub use corpus::{Corpus, FamilyBlock};

// Resolution
pub use resolve::{Resolution, ResolutionEngine, ResolutionReport, UnresolvedReason};

// External collaborator interfaces
pub use parser::{AliasTable, FamilyParser, NameEquivalence};

// Citation synthesis
pub use citation::{
    FamilyCitations, build_citations, render_as_child, render_family,
    render_nuclear_with_supplement,
};
