//! Shared test fixtures
//!
//! The external parsing collaborator is stubbed with an in-memory map from
//! family id to a pre-built record; the resolution engine only ever sees
//! located corpus text through it.
#![allow(dead_code)]

use register_linker::{Couple, Family, FamilyParser, LinkerError, Person, Result};
use rustc_hash::FxHashMap;

/// Parser stub backed by pre-built records keyed by family id
#[derive(Debug, Default)]
pub struct StubParser {
    families: FxHashMap<String, Family>,
}

impl StubParser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_family(mut self, family: Family) -> Self {
        self.families.insert(family.id.clone(), family);
        self
    }
}

impl FamilyParser for StubParser {
    fn parse(
        &self,
        family_id: &str,
        _raw_text: &str,
    ) -> impl Future<Output = Result<Family>> + Send {
        let result = self
            .families
            .get(family_id)
            .cloned()
            .ok_or_else(|| LinkerError::Parse(format!("unknown family {family_id}")));
        async move { result }
    }
}

/// Parser stub that rejects every block
#[derive(Debug, Default)]
pub struct FailingParser;

impl FamilyParser for FailingParser {
    fn parse(
        &self,
        _family_id: &str,
        _raw_text: &str,
    ) -> impl Future<Output = Result<Family>> + Send {
        async { Err(LinkerError::Parse("malformed block".to_string())) }
    }
}

/// Person with just a name and an optional birth date
pub fn person(name: &str, birth: Option<&str>) -> Person {
    Person {
        birth_date: birth.map(str::to_string),
        ..Person::new(name)
    }
}

/// Family with one couple and the given children
pub fn family(id: &str, husband: Person, wife: Option<Person>, children: Vec<Person>) -> Family {
    let mut couple = Couple::new(husband);
    couple.wife = wife;
    couple.children = children;
    Family::new(id, couple)
}
