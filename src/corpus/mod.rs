//! Corpus index and text locator
//!
//! The corpus is one immutable string: a writer's transcription of register
//! pages, family by family. Each family starts at a header line carrying its
//! archive identifier and runs until the next header. Blocks are assumed not
//! to interleave; the locator is a conservative single-block heuristic.

use crate::utils::normalize_ref;
use log::debug;
use regex::Regex;
use std::sync::LazyLock;

/// Header line: uppercase place name (Nordic letters allowed), optional
/// Roman-numeral qualifier, sequence number, optional letter suffix.
/// Examples: `SIPILÄ 4`, `KOSKI II 12b`, `YLI-HUHTALA 3`.
static HEADER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*([A-ZÄÖÅ][A-ZÄÖÅ-]+(?:\s+[IVXL]+)?\s+\d+[a-zA-Z]?)\b").unwrap()
});

/// One family's segment of the raw corpus
#[derive(Debug, Clone)]
pub struct FamilyBlock {
    /// Identifier from the header line, normalized (trimmed, uppercased)
    pub id: String,
    /// The block's raw text, header line included
    pub text: String,
}

/// The loaded archive text with block-level lookup operations
#[derive(Debug, Clone)]
pub struct Corpus {
    text: String,
}

impl Corpus {
    /// Wrap the full archive text
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// The raw archive text
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Locate the contiguous text block describing `family_id`.
    ///
    /// A line is the family's header if it contains the identifier,
    /// case-insensitively and whitespace-trimmed. Collection stops at the
    /// first blank line after at least one collected line.
    #[must_use]
    pub fn find_family_text(&self, family_id: &str) -> Option<String> {
        let needle = normalize_ref(family_id);
        if needle.is_empty() {
            return None;
        }
        let mut collected: Vec<&str> = Vec::new();
        let mut in_block = false;
        for line in self.text.lines() {
            if in_block {
                if line.trim().is_empty() {
                    break;
                }
                collected.push(line);
            } else if line.to_uppercase().contains(&needle) {
                in_block = true;
                collected.push(line);
            }
        }
        if collected.is_empty() {
            debug!("no block found for {needle}");
            return None;
        }
        Some(collected.join("\n"))
    }

    /// Segment the corpus at header lines into family blocks
    #[must_use]
    pub fn blocks(&self) -> Vec<FamilyBlock> {
        let mut blocks: Vec<FamilyBlock> = Vec::new();
        let mut current: Option<(String, Vec<&str>)> = None;
        for line in self.text.lines() {
            if let Some(caps) = HEADER_RE.captures(line) {
                if let Some((id, lines)) = current.take() {
                    blocks.push(FamilyBlock {
                        id,
                        text: lines.join("\n"),
                    });
                }
                current = Some((normalize_ref(&caps[1]), vec![line]));
            } else if let Some((_, lines)) = current.as_mut() {
                lines.push(line);
            }
        }
        if let Some((id, lines)) = current {
            blocks.push(FamilyBlock {
                id,
                text: lines.join("\n"),
            });
        }
        blocks
    }

    /// Every family block whose raw text contains `token` verbatim.
    ///
    /// A token appearing in an unrelated field (a page number, say) produces
    /// a false-positive candidate; disambiguating those is the resolution
    /// engine's job, not the locator's.
    #[must_use]
    pub fn find_blocks_containing(&self, token: &str) -> Vec<FamilyBlock> {
        if token.trim().is_empty() {
            return Vec::new();
        }
        self.blocks()
            .into_iter()
            .filter(|b| b.text.contains(token))
            .collect()
    }
}
