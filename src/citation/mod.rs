//! Citation synthesis
//!
//! Pure functions from a family record (and optionally its resolved network)
//! to human-readable citation text. No hidden state: the same inputs always
//! produce the same prose.

pub mod dates;
pub mod render;
pub mod supplement;

pub use dates::{is_full_date, marriage_year, normalize_date};
pub use render::{
    FamilyCitations, build_citations, render_as_child, render_family,
    render_nuclear_with_supplement,
};
pub use supplement::{phrase_categories, supplement_categories, supplement_sentence};
