//! Citation rendering
//!
//! Renders a family record, or a person's role within one, into the prose
//! format consumed downstream. The exact output — section order, prefixes,
//! date phrasing — is part of the external contract and is pinned by
//! golden-output tests; change it only together with them.

use super::dates::{marriage_year, normalize_date};
use super::supplement::supplement_sentence;
use crate::models::{Family, FamilyNetwork, Person};
use itertools::Itertools;
use rustc_hash::FxHashMap;

/// Rendered citations for one resolved family
#[derive(Debug, Clone)]
pub struct FamilyCitations {
    /// Identifier of the family these citations belong to
    pub family_id: String,
    /// The family-level citation
    pub family_citation: String,
    /// Person key -> that person's citation. Display-name entries carry
    /// bare-name duplicates so both lookup conventions find them.
    pub by_person: FxHashMap<String, String>,
}

/// Render a family record as citation prose
#[must_use]
pub fn render_family(family: &Family) -> String {
    body_lines(family, None).join("\n")
}

/// Render `family` with `person`'s child line marked with `=> `.
///
/// The matching line is found by case-insensitive name equality with the
/// birth dates agreeing or absent. With a network, the person's as-parent
/// family is consulted for an additional-information sentence.
#[must_use]
pub fn render_as_child(
    person: &Person,
    family: &Family,
    network: Option<&FamilyNetwork>,
) -> String {
    let mut lines = body_lines(family, Some(person));
    if let Some(network) = network {
        if let Some(linked) = network.as_parent_of(person) {
            let record = family
                .all_persons()
                .find(|c| c.is_same_person(person))
                .unwrap_or(person);
            if let Some(sentence) = supplement_sentence(record, linked) {
                lines.push(format!("Additional information: {sentence}"));
            }
        }
    }
    lines.join("\n")
}

/// Render `family` and append, per married child with extra data in their
/// as-parent family, one supplement line under a single heading
#[must_use]
pub fn render_nuclear_with_supplement(family: &Family, network: &FamilyNetwork) -> String {
    let mut lines = body_lines(family, None);
    let supplements: Vec<String> = family
        .married_children()
        .filter_map(|child| {
            let linked = network.as_parent_of(child)?;
            let sentence = supplement_sentence(child, linked)?;
            Some(format!("  {}: {sentence}", child.key()))
        })
        .collect();
    if !supplements.is_empty() {
        lines.push("Additional information:".to_string());
        lines.extend(supplements);
    }
    lines.join("\n")
}

/// Build the externally consumed output artifact: one citation per person in
/// `family` plus the family-level citation.
///
/// Parents are cited in their family of origin, with their own family
/// overlaid as their as-parent entry; children are cited in `family` itself.
#[must_use]
pub fn build_citations(family: &Family, network: &FamilyNetwork) -> FamilyCitations {
    let mut by_person: FxHashMap<String, String> = FxHashMap::default();
    for parent in family.all_parents() {
        if let Some(origin) = network.as_child_of(parent) {
            let overlay = network.with_self_as_parent(parent);
            let text = render_as_child(parent, origin, Some(&overlay));
            insert_dual(&mut by_person, parent, text);
        }
    }
    for child in family.children() {
        let text = render_as_child(child, family, Some(network));
        insert_dual(&mut by_person, child, text);
    }
    FamilyCitations {
        family_id: family.id.clone(),
        family_citation: render_nuclear_with_supplement(family, network),
        by_person,
    }
}

/// Insert under the primary key, duplicating under the bare name when the
/// two differ
fn insert_dual(map: &mut FxHashMap<String, String>, person: &Person, text: String) {
    if person.key() != person.name {
        map.insert(person.name.clone(), text.clone());
    }
    map.insert(person.key().to_string(), text);
}

fn body_lines(family: &Family, marked: Option<&Person>) -> Vec<String> {
    let mut lines = Vec::new();
    lines.push(if family.page_refs.is_empty() {
        family.id.clone()
    } else {
        format!("{}, page {}", family.id, family.pages_display())
    });

    if let Some(primary) = family.primary_couple() {
        lines.push(person_line(&primary.husband));
        if let Some(wife) = &primary.wife {
            lines.push(format!("and {}", person_line(wife)));
        }
        if let Some(date) = &primary.marriage_date {
            lines.push(format!("Married {}.", normalize_date(date)));
        }
        if !primary.children.is_empty() {
            lines.push("Children:".to_string());
            for child in &primary.children {
                lines.push(format!("{}{}", mark_prefix(marked, child), child_line(child)));
            }
        }
    }

    for (index, couple) in family.couples.iter().enumerate().skip(1) {
        let spouse = couple
            .wife
            .as_ref()
            .map_or_else(|| "N.N.".to_string(), person_line);
        let mut line = format!("{} spouse {spouse}", ordinal(index + 1));
        if let Some(date) = &couple.marriage_date {
            line.push_str(&format!(", married {}", normalize_date(date)));
        }
        line.push('.');
        lines.push(line);
    }

    let later_children: Vec<&Person> = family
        .couples
        .iter()
        .skip(1)
        .flat_map(|c| c.children.iter())
        .collect();
    if !later_children.is_empty() {
        lines.push("Children of later marriages:".to_string());
        for child in later_children {
            lines.push(format!("{}{}", mark_prefix(marked, child), child_line(child)));
        }
    }

    let notes: Vec<&String> = family
        .notes
        .iter()
        .chain(family.couples.iter().flat_map(|c| c.notes.iter()))
        .collect();
    if !notes.is_empty() || !family.note_markers.is_empty() {
        lines.push("Notes:".to_string());
        for note in notes {
            lines.push(format!("  {note}"));
        }
        for marker in family.note_markers.keys().sorted() {
            lines.push(format!("  {marker}) {}", family.note_markers[marker]));
        }
    }

    let infant_deaths: usize = family.couples.iter().map(|c| c.infant_deaths).sum();
    match infant_deaths {
        0 => {}
        1 => lines.push("1 child died in infancy.".to_string()),
        n => lines.push(format!("{n} children died in infancy.")),
    }

    lines
}

fn mark_prefix(marked: Option<&Person>, child: &Person) -> &'static str {
    if marked.is_some_and(|p| p.is_same_person(child)) {
        "=> "
    } else {
        "  "
    }
}

fn person_line(person: &Person) -> String {
    let mut line = person.key().to_string();
    if let Some(birth) = &person.birth_date {
        line.push_str(&format!(", b. {}", normalize_date(birth)));
    }
    if let Some(death) = &person.death_date {
        line.push_str(&format!(", d. {}", normalize_date(death)));
    }
    line
}

/// One child's line: name, birth, marriage partner and year, death — the
/// marriage year is preferred over a full date
fn child_line(child: &Person) -> String {
    let mut line = child.key().to_string();
    if let Some(birth) = &child.birth_date {
        line.push_str(&format!(", b. {}", normalize_date(birth)));
    }
    if let Some(spouse) = child.spouse_name.as_deref().filter(|s| !s.trim().is_empty()) {
        line.push_str(&format!(", m. {}", spouse.trim()));
        let date = child
            .full_marriage_date
            .as_deref()
            .or(child.marriage_date.as_deref());
        if let Some(date) = date {
            line.push_str(&format!(" {}", marriage_year(date)));
        }
    }
    if let Some(death) = &child.death_date {
        line.push_str(&format!(", d. {}", normalize_date(death)));
    }
    line
}

/// Roman ordinal for a couple's position in the record
fn ordinal(n: usize) -> String {
    match n {
        2 => "II".to_string(),
        3 => "III".to_string(),
        4 => "IV".to_string(),
        5 => "V".to_string(),
        n => format!("{n}."),
    }
}
