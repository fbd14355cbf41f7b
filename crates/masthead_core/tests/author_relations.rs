use masthead_core::{FieldName, Registry, ValidationError};

#[test]
fn valid_name_is_kept() {
    let mut registry = Registry::new();
    let jane = registry.add_author("Jane");

    assert_eq!(registry.author(jane).unwrap().name(), Some("Jane"));
}

#[test]
fn empty_name_leaves_author_nameless_but_registered() {
    let mut registry = Registry::new();
    let nobody = registry.add_author("");

    assert_eq!(registry.author(nobody).unwrap().name(), None);
    assert_eq!(registry.authors().len(), 1);
}

#[test]
fn name_is_write_once() {
    let mut registry = Registry::new();
    let jane = registry.add_author("Jane");
    let author = registry.author_mut(jane).unwrap();

    let err = author.set_name("John").unwrap_err();
    assert_eq!(
        err,
        ValidationError::Locked {
            field: FieldName::AuthorName
        }
    );
    assert!(author.set_name("").is_err());
    assert_eq!(author.name(), Some("Jane"));
}

#[test]
fn nameless_author_accepts_a_later_valid_name() {
    let mut registry = Registry::new();
    let author_id = registry.add_author("");
    let author = registry.author_mut(author_id).unwrap();

    author.set_name("Carry Bradshaw").unwrap();
    assert!(author.set_name("Someone Else").is_err());
    assert_eq!(author.name(), Some("Carry Bradshaw"));
}

#[test]
fn articles_are_exactly_this_authors_in_creation_order() {
    let mut registry = Registry::new();
    let jane = registry.add_author("Jane");
    let john = registry.add_author("John");
    let vogue = registry.add_magazine("Vogue", "Fashion");
    let wired = registry.add_magazine("Wired", "Technology");

    let first = jane.add_article(&mut registry, vogue, "How to Dress Well");
    john.add_article(&mut registry, wired, "Robots Are Coming");
    let second = jane.add_article(&mut registry, wired, "Gadgets for Stylists");

    assert_eq!(jane.articles(&registry), vec![first, second]);
    assert_eq!(john.articles(&registry).len(), 1);
}

#[test]
fn magazines_are_distinct_in_first_seen_order() {
    let mut registry = Registry::new();
    let jane = registry.add_author("Jane");
    let vogue = registry.add_magazine("Vogue", "Fashion");
    let wired = registry.add_magazine("Wired", "Technology");

    jane.add_article(&mut registry, wired, "Gadgets for Stylists");
    jane.add_article(&mut registry, vogue, "How to Dress Well");
    jane.add_article(&mut registry, wired, "Smart Fabrics Today");

    assert_eq!(jane.magazines(&registry), vec![wired, vogue]);
}

#[test]
fn topic_areas_for_single_magazine() {
    let mut registry = Registry::new();
    let jane = registry.add_author("Jane");
    let vogue = registry.add_magazine("Vogue", "Fashion");

    let article = jane.add_article(&mut registry, vogue, "How to Dress Well");

    assert_eq!(
        registry.article(article).unwrap().title(),
        Some("How to Dress Well")
    );
    assert_eq!(jane.topic_areas(&registry), Some(vec!["Fashion"]));
}

#[test]
fn topic_areas_deduplicates_categories() {
    let mut registry = Registry::new();
    let jane = registry.add_author("Jane");
    let vogue = registry.add_magazine("Vogue", "Fashion");
    let elle = registry.add_magazine("Elle", "Fashion");
    let wired = registry.add_magazine("Wired", "Technology");

    jane.add_article(&mut registry, vogue, "How to Dress Well");
    jane.add_article(&mut registry, wired, "Gadgets for Stylists");
    jane.add_article(&mut registry, elle, "Spring Trends Ahead");

    assert_eq!(
        jane.topic_areas(&registry),
        Some(vec!["Fashion", "Technology"])
    );
}

#[test]
fn topic_areas_is_none_without_articles() {
    let mut registry = Registry::new();
    let jane = registry.add_author("Jane");
    registry.add_magazine("Vogue", "Fashion");

    assert_eq!(jane.topic_areas(&registry), None);
    assert!(jane.magazines(&registry).is_empty());
}

#[test]
fn foreign_handle_matches_nothing() {
    let mut registry = Registry::new();
    let mut other = Registry::new();
    let jane = registry.add_author("Jane");
    let vogue = registry.add_magazine("Vogue", "Fashion");
    jane.add_article(&mut registry, vogue, "How to Dress Well");

    let stranger = other.add_author("Jane");

    assert_eq!(stranger.index(), jane.index());
    assert_ne!(stranger, jane);
    assert!(registry.author(stranger).is_none());
    assert!(stranger.articles(&registry).is_empty());
}
