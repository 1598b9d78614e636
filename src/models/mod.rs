//! Entity models for the family-register domain
//!
//! This module contains the structures the rest of the system works on: a
//! [`Person`] as described in one record, a [`Couple`], a [`Family`] record,
//! and the [`FamilyNetwork`] of resolved cross-references rooted at one
//! family.

pub mod couple;
pub mod family;
pub mod network;
pub mod person;

pub use couple::Couple;
pub use family::Family;
pub use network::{FamilyNetwork, LinkKind};
pub use person::Person;
