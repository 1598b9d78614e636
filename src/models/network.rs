//! Family network model
//!
//! The resolved graph rooted at one main family: for each person who is a
//! parent or child there, the other register entries that describe the same
//! individual at a different life stage. Built incrementally by the
//! resolution engine, then treated as an immutable value; the self-citation
//! overlay returns a copy rather than mutating a network other callers may
//! still hold.

use super::family::Family;
use super::person::Person;
use rustc_hash::FxHashMap;
use std::sync::Arc;

/// Which life-stage relation a linked family describes
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum LinkKind {
    /// The family where the person appears as a child
    AsChild,
    /// The family the person heads as a parent
    AsParent,
    /// The family of origin of a person's spouse
    SpouseAsChild,
}

/// Resolved links from one main family to the records of its members
#[derive(Debug, Clone)]
pub struct FamilyNetwork {
    /// The family this network is rooted at
    main_family: Arc<Family>,
    /// Person key -> family where that person was a child
    as_child: FxHashMap<String, Arc<Family>>,
    /// Person key -> family that person heads as a parent
    as_parent: FxHashMap<String, Arc<Family>>,
    /// Spouse name -> that spouse's family of origin
    spouse_as_child: FxHashMap<String, Arc<Family>>,
}

impl FamilyNetwork {
    /// Create an empty network rooted at `main_family`
    #[must_use]
    pub fn new(main_family: Arc<Family>) -> Self {
        Self {
            main_family,
            as_child: FxHashMap::default(),
            as_parent: FxHashMap::default(),
            spouse_as_child: FxHashMap::default(),
        }
    }

    /// The main family this network was resolved for
    #[must_use]
    pub fn main_family(&self) -> &Arc<Family> {
        &self.main_family
    }

    /// Record a resolved link under `person`'s primary key
    pub fn insert(&mut self, kind: LinkKind, person: &Person, family: Arc<Family>) {
        self.map_mut(kind).insert(person.key().to_string(), family);
    }

    /// Record a spouse-of-origin link under the spouse's free-text name
    pub fn insert_spouse(&mut self, spouse_name: &str, family: Arc<Family>) {
        self.spouse_as_child
            .insert(spouse_name.trim().to_string(), family);
    }

    /// Look up a person's linked family, trying the display-name key first
    /// and falling back to the bare name. Callers holding enriched and
    /// unenriched copies of the same person reach the same entry either way.
    #[must_use]
    pub fn lookup(&self, kind: LinkKind, person: &Person) -> Option<&Arc<Family>> {
        let map = self.map(kind);
        if let Some(display) = person.display_name.as_deref() {
            if let Some(found) = map.get(display) {
                return Some(found);
            }
        }
        map.get(&person.name)
    }

    /// The family where `person` was a child
    #[must_use]
    pub fn as_child_of(&self, person: &Person) -> Option<&Arc<Family>> {
        self.lookup(LinkKind::AsChild, person)
    }

    /// The family `person` heads as a parent
    #[must_use]
    pub fn as_parent_of(&self, person: &Person) -> Option<&Arc<Family>> {
        self.lookup(LinkKind::AsParent, person)
    }

    /// The family of origin of the named spouse
    #[must_use]
    pub fn spouse_family(&self, spouse_name: &str) -> Option<&Arc<Family>> {
        self.spouse_as_child.get(spouse_name.trim())
    }

    /// Number of resolved links of `kind`
    #[must_use]
    pub fn link_count(&self, kind: LinkKind) -> usize {
        self.map(kind).len()
    }

    /// Copy of this network with the main family injected as `person`'s
    /// as-parent entry, for citing a parent inside their own household.
    /// The receiver is left untouched.
    #[must_use]
    pub fn with_self_as_parent(&self, person: &Person) -> Self {
        let mut overlay = self.clone();
        overlay
            .as_parent
            .insert(person.key().to_string(), Arc::clone(&self.main_family));
        overlay
    }

    fn map(&self, kind: LinkKind) -> &FxHashMap<String, Arc<Family>> {
        match kind {
            LinkKind::AsChild => &self.as_child,
            LinkKind::AsParent => &self.as_parent,
            LinkKind::SpouseAsChild => &self.spouse_as_child,
        }
    }

    fn map_mut(&mut self, kind: LinkKind) -> &mut FxHashMap<String, Arc<Family>> {
        match kind {
            LinkKind::AsChild => &mut self.as_child,
            LinkKind::AsParent => &mut self.as_parent,
            LinkKind::SpouseAsChild => &mut self.spouse_as_child,
        }
    }
}
