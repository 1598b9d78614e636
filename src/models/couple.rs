//! Couple model
//!
//! A couple is one husband and one wife (the wife may be unknown), their
//! marriage date, and their children in the order the register lists them —
//! birth order by convention, not necessarily chronological.

use super::person::Person;
use serde::{Deserialize, Serialize};

/// One marriage within a family record
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Couple {
    /// Husband; shared across all couples of the same family
    pub husband: Person,
    /// Wife, absent when the register does not name her
    pub wife: Option<Person>,
    /// Marriage date as transcribed
    pub marriage_date: Option<String>,
    /// Children in register order
    pub children: Vec<Person>,
    /// Count of children who died in infancy
    pub infant_deaths: usize,
    /// Free-text notes scoped to this couple
    pub notes: Vec<String>,
}

impl Couple {
    /// Create a couple from its husband
    #[must_use]
    pub fn new(husband: Person) -> Self {
        Self {
            husband,
            ..Self::default()
        }
    }

    /// Set the wife for this couple
    #[must_use]
    pub fn with_wife(mut self, wife: Person) -> Self {
        self.wife = Some(wife);
        self
    }

    /// Set the marriage date for this couple
    #[must_use]
    pub fn with_marriage_date(mut self, date: impl Into<String>) -> Self {
        self.marriage_date = Some(date.into());
        self
    }

    /// Both parents of this couple, husband first
    pub fn parents(&self) -> impl Iterator<Item = &Person> {
        std::iter::once(&self.husband).chain(self.wife.as_ref())
    }

    /// Children of this couple with a recorded spouse
    pub fn married_children(&self) -> impl Iterator<Item = &Person> {
        self.children.iter().filter(|c| c.is_married())
    }
}
