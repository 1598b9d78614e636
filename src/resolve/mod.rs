//! Cross-reference resolution engine
//!
//! For one main family, discovers and resolves the three classes of
//! cross-reference — each parent's family of origin, each married child's
//! own household, and each spouse's family of origin — into a
//! [`FamilyNetwork`]. Resolution is best-effort: individual misses are
//! reported, never thrown. The engine only fails outright when no corpus is
//! loaded or when text it has already located refuses to parse.

pub mod report;

pub use report::{ResolutionReport, UnresolvedReason, UnresolvedReference};

use crate::corpus::Corpus;
use crate::error::{LinkerError, Result};
use crate::models::{Family, FamilyNetwork, LinkKind, Person};
use crate::parser::{FamilyParser, NameEquivalence};
use crate::utils::normalize_ref;
use futures::future::join_all;
use log::{info, warn};
use std::sync::Arc;

/// Outcome of one `resolve` call: the network plus its diagnostics
#[derive(Debug)]
pub struct Resolution {
    /// The resolved family network
    pub network: FamilyNetwork,
    /// Misses and counters accumulated while resolving
    pub report: ResolutionReport,
}

/// Result of one per-person resolution unit
enum Outcome {
    Found(Arc<Family>),
    Miss(UnresolvedReason),
}

/// Resolves a family's cross-references against the loaded corpus
pub struct ResolutionEngine<P> {
    parser: P,
    corpus: Option<Corpus>,
    aliases: Option<Arc<dyn NameEquivalence>>,
}

impl<P: FamilyParser> ResolutionEngine<P> {
    /// Create an engine around the external parsing collaborator
    #[must_use]
    pub fn new(parser: P) -> Self {
        Self {
            parser,
            corpus: None,
            aliases: None,
        }
    }

    /// Attach a learned name-equivalence lookup
    #[must_use]
    pub fn with_aliases(mut self, aliases: Arc<dyn NameEquivalence>) -> Self {
        self.aliases = Some(aliases);
        self
    }

    /// Load the archive text. Set once per session; read-only afterwards.
    pub fn load_corpus(&mut self, text: impl Into<String>) {
        self.corpus = Some(Corpus::new(text));
    }

    /// The loaded corpus, or the precondition error
    pub fn corpus(&self) -> Result<&Corpus> {
        self.corpus.as_ref().ok_or(LinkerError::NoCorpus)
    }

    /// Resolve every cross-reference of `family` into a network.
    ///
    /// Runs three passes in order: as-child for every parent, as-parent for
    /// every married child, spouse-as-child for every married child's spouse.
    /// The network accumulates monotonically; a later pass's misses never
    /// roll back an earlier pass's links.
    pub async fn resolve(&self, family: &Family) -> Result<Resolution> {
        let corpus = self.corpus()?;
        let mut network = FamilyNetwork::new(Arc::new(family.clone()));
        let mut report = ResolutionReport::default();

        // Pass 1: family of origin for every parent across all couples.
        let parents: Vec<&Person> = family.all_parents().collect();
        info!("resolving as-child references for {} parents of {}", parents.len(), family.id);
        let outcomes = join_all(
            parents
                .iter()
                .map(|&p| self.resolve_origin(corpus, family, p, LinkKind::AsChild)),
        )
        .await;
        for (person, outcome) in parents.iter().copied().zip(outcomes) {
            Self::record(&mut network, &mut report, LinkKind::AsChild, person, outcome?);
        }

        // Pass 2: own household for every married child.
        let married: Vec<&Person> = family.married_children().collect();
        info!("resolving as-parent references for {} married children of {}", married.len(), family.id);
        let outcomes = join_all(
            married
                .iter()
                .map(|&c| self.resolve_origin(corpus, family, c, LinkKind::AsParent)),
        )
        .await;
        for (person, outcome) in married.iter().copied().zip(outcomes) {
            Self::record(&mut network, &mut report, LinkKind::AsParent, person, outcome?);
        }

        // Pass 3: spouse's family of origin. No search strategy exists for
        // this class yet; every spouse is reported unresolved rather than
        // linked on a guess.
        for child in &married {
            if let Some(spouse) = child.spouse_name.as_deref() {
                report.miss(spouse, LinkKind::SpouseAsChild, UnresolvedReason::NotImplemented);
            }
        }

        info!(
            "resolved {}/{} references for {} ({} unresolved)",
            report.resolved,
            report.attempted,
            family.id,
            report.unresolved.len()
        );
        Ok(Resolution { network, report })
    }

    /// Resolve one person's reference of `kind`: by token when the record
    /// carries one, by birth-date search otherwise (as-child only).
    async fn resolve_origin(
        &self,
        corpus: &Corpus,
        main: &Family,
        person: &Person,
        kind: LinkKind,
    ) -> Result<Outcome> {
        let token = match kind {
            LinkKind::AsChild => person.as_child_ref.as_deref(),
            LinkKind::AsParent => person.as_parent_ref.as_deref(),
            LinkKind::SpouseAsChild => None,
        };
        if let Some(token) = token {
            return self.resolve_by_token(corpus, token).await;
        }
        match kind {
            LinkKind::AsChild => self.resolve_by_birth_date(corpus, main, person).await,
            // Searching by the recorded spouse name is a documented
            // extension point, not implemented.
            _ => Ok(Outcome::Miss(UnresolvedReason::NotImplemented)),
        }
    }

    /// Look a normalized reference token up in the corpus and parse its block.
    ///
    /// A missing block is a miss; a block that fails to parse is fatal and
    /// names the offending identifier.
    async fn resolve_by_token(&self, corpus: &Corpus, token: &str) -> Result<Outcome> {
        let id = normalize_ref(token);
        let Some(text) = corpus.find_family_text(&id) else {
            warn!("no corpus block found for reference {id}");
            return Ok(Outcome::Miss(UnresolvedReason::BlockNotFound));
        };
        let parsed = self
            .parser
            .parse(&id, &text)
            .await
            .map_err(|e| LinkerError::cross_reference(&id, &e))?;
        Ok(Outcome::Found(Arc::new(parsed)))
    }

    /// Fallback for a parent without a reference token: find every family
    /// block containing the parent's birth date, keep the ones naming the
    /// parent, and accept only a unique survivor. Zero or several candidates
    /// stay unresolved; ties are never broken by scoring.
    async fn resolve_by_birth_date(
        &self,
        corpus: &Corpus,
        main: &Family,
        person: &Person,
    ) -> Result<Outcome> {
        let Some(birth_date) = person.birth_date.as_deref() else {
            return Ok(Outcome::Miss(UnresolvedReason::NoReference));
        };
        let main_id = normalize_ref(&main.id);
        let aliases = self.aliases.as_deref();
        let mut candidates: Vec<Arc<Family>> = Vec::new();
        for block in corpus.find_blocks_containing(birth_date) {
            // The main family's own block always contains the date.
            if block.id == main_id {
                continue;
            }
            let parsed = self
                .parser
                .parse(&block.id, &block.text)
                .await
                .map_err(|e| LinkerError::cross_reference(&block.id, &e))?;
            if parsed.all_persons().any(|q| q.matches_name(&person.name, aliases)) {
                candidates.push(Arc::new(parsed));
            }
        }
        match candidates.len() {
            0 => Ok(Outcome::Miss(UnresolvedReason::NoCandidates)),
            1 => Ok(Outcome::Found(candidates.remove(0))),
            n => {
                warn!(
                    "birth-date search for {} ({birth_date}) matched {n} families",
                    person.key()
                );
                Ok(Outcome::Miss(UnresolvedReason::Ambiguous {
                    candidates: candidates.iter().map(|f| f.id.clone()).collect(),
                }))
            }
        }
    }

    fn record(
        network: &mut FamilyNetwork,
        report: &mut ResolutionReport,
        kind: LinkKind,
        person: &Person,
        outcome: Outcome,
    ) {
        match outcome {
            Outcome::Found(found) => {
                network.insert(kind, person, found);
                report.resolved();
            }
            Outcome::Miss(reason) => report.miss(person.key(), kind, reason),
        }
    }
}
