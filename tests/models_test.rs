mod common;

use common::{family, person};
use register_linker::{Couple, FamilyNetwork, LinkKind, Person};
use std::sync::Arc;

#[test]
fn test_person_key_prefers_display_name() {
    let mut juho = person("Juho", Some("1846"));
    assert_eq!(juho.key(), "Juho");
    juho.display_name = Some("Juho Matinpoika".to_string());
    assert_eq!(juho.key(), "Juho Matinpoika");
}

#[test]
fn test_person_same_person_lenient_on_birth() {
    let a = person("Juho", Some("1846"));
    let b = person("juho", None);
    let c = person("Juho", Some("1847"));
    assert!(a.is_same_person(&b));
    assert!(b.is_same_person(&c));
    assert!(!a.is_same_person(&c));
    assert!(!a.is_same_person(&person("Liisa", Some("1846"))));
}

#[test]
fn test_enrichment_merge_rules() {
    let mut record = person("Juho", Some("1846"));
    record.marriage_date = Some("67".to_string());

    let mut linked = person("Juho", Some("1846"));
    linked.death_date = Some("1.2.1901".to_string());
    linked.full_marriage_date = Some("04.03.1867".to_string());
    linked.spouse_name = Some("Eeva Koski".to_string());

    record.enrich_from(&linked);
    assert_eq!(record.death_date.as_deref(), Some("1.2.1901"));
    assert_eq!(record.full_marriage_date.as_deref(), Some("04.03.1867"));
    // The partial date is cleared so both are never rendered
    assert!(record.marriage_date.is_none());
    assert_eq!(record.spouse_name.as_deref(), Some("Eeva Koski"));
}

#[test]
fn test_enrichment_is_idempotent() {
    let mut once = person("Juho", Some("1846"));
    once.marriage_date = Some("67".to_string());
    once.death_date = Some("1900".to_string());

    let mut linked = person("Juho", Some("1846"));
    linked.death_date = Some("1.2.1901".to_string());
    linked.full_marriage_date = Some("04.03.1867".to_string());

    once.enrich_from(&linked);
    let mut twice = once.clone();
    twice.enrich_from(&linked);
    assert_eq!(once, twice);
    // A pre-existing death date is never overwritten
    assert_eq!(once.death_date.as_deref(), Some("1900"));
}

#[test]
fn test_family_derived_views() {
    let mut anna = person("Anna", Some("n 1825"));
    anna.spouse_name = Some("".to_string());
    let mut juho = person("Juho", Some("1846"));
    juho.spouse_name = Some("Eeva Koski".to_string());
    let liisa = person("Liisa", Some("1849"));

    let mut fam = family(
        "HUHTALA 2",
        person("Matti", Some("12.3.1820")),
        Some(anna),
        vec![juho, liisa],
    );
    let mut second = Couple::new(person("Matti", Some("12.3.1820")))
        .with_wife(person("Maria", Some("1830")));
    second.children = vec![person("Antti", Some("1862"))];
    fam.add_couple(second);

    // Husband once, every wife across couples
    let parents: Vec<&str> = fam.all_parents().map(|p| p.name.as_str()).collect();
    assert_eq!(parents, vec!["Matti", "Anna", "Maria"]);

    // Children view covers the primary couple only
    let children: Vec<&str> = fam.children().iter().map(|p| p.name.as_str()).collect();
    assert_eq!(children, vec!["Juho", "Liisa"]);

    // A blank spouse name does not count as married
    let married: Vec<&str> = fam.married_children().map(|p| p.name.as_str()).collect();
    assert_eq!(married, vec!["Juho"]);

    let all: Vec<&str> = fam.all_persons().map(|p| p.name.as_str()).collect();
    assert_eq!(all, vec!["Matti", "Anna", "Maria", "Juho", "Liisa", "Antti"]);
}

#[test]
fn test_network_lookup_display_then_bare_name() {
    let main = Arc::new(family("HUHTALA 2", person("Matti", None), None, vec![]));
    let origin = Arc::new(family("SIPILÄ 4", person("Juho Sipilä", None), None, vec![]));

    let mut keyed = person("Matti", Some("12.3.1820"));
    keyed.display_name = Some("Matti Matinpoika".to_string());

    let mut network = FamilyNetwork::new(main);
    network.insert(LinkKind::AsChild, &keyed, Arc::clone(&origin));

    // Enriched caller: display-name key hits directly
    assert_eq!(network.as_child_of(&keyed).unwrap().id, "SIPILÄ 4");

    // Unenriched caller falls back to the bare name only when an entry
    // exists under it
    let bare = person("Matti", None);
    assert!(network.as_child_of(&bare).is_none());
    network.insert(LinkKind::AsChild, &bare, origin);
    assert_eq!(network.as_child_of(&bare).unwrap().id, "SIPILÄ 4");
}

#[test]
fn test_network_overlay_is_a_copy() {
    let matti = person("Matti", Some("12.3.1820"));
    let main = Arc::new(family("HUHTALA 2", matti.clone(), None, vec![]));
    let network = FamilyNetwork::new(main);

    let overlay = network.with_self_as_parent(&matti);
    assert_eq!(overlay.as_parent_of(&matti).unwrap().id, "HUHTALA 2");
    // The original network is untouched
    assert!(network.as_parent_of(&matti).is_none());
    assert_eq!(network.link_count(LinkKind::AsParent), 0);
}

#[test]
fn test_full_marriage_date_detection() {
    let mut p = Person::new("Juho");
    assert!(!p.has_full_marriage_date());
    p.full_marriage_date = Some("04.03.1867".to_string());
    assert!(p.has_full_marriage_date());
    p.full_marriage_date = Some("67".to_string());
    assert!(!p.has_full_marriage_date());
}
