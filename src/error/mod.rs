//! Error handling for the register linker.
//!
//! Fatal conditions are the exception here: a cross-reference that cannot be
//! located or uniquely matched is a normal outcome and is reported through
//! [`crate::resolve::ResolutionReport`], not through this type.

use thiserror::Error;

/// Specialized error type for register-linker operations
#[derive(Debug, Error)]
pub enum LinkerError {
    /// No corpus has been loaded into the engine
    #[error("no corpus loaded")]
    NoCorpus,

    /// Located text for a referenced family failed to parse
    #[error("cross-reference parse failure for {family_id}: {message}")]
    CrossReference {
        /// Identifier of the family whose text block failed to parse
        family_id: String,
        /// Parser-reported failure detail
        message: String,
    },

    /// Failure reported by the external parsing collaborator
    #[error("parse error: {0}")]
    Parse(String),

    /// Error opening or reading a corpus file
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl LinkerError {
    /// Wrap a parser failure as a fatal cross-reference error for `family_id`
    #[must_use]
    pub fn cross_reference(family_id: &str, source: &Self) -> Self {
        Self::CrossReference {
            family_id: family_id.to_string(),
            message: source.to_string(),
        }
    }
}

/// Result type for register-linker operations
pub type Result<T> = std::result::Result<T, LinkerError>;
