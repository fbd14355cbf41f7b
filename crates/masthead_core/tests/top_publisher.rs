use masthead_core::Registry;

#[test]
fn none_without_articles() {
    let mut registry = Registry::new();
    registry.add_magazine("Vogue", "Fashion");

    assert_eq!(registry.top_publisher(), None);
}

#[test]
fn none_on_empty_registry() {
    assert_eq!(Registry::new().top_publisher(), None);
}

#[test]
fn picks_the_magazine_with_most_articles() {
    let mut registry = Registry::new();
    let jane = registry.add_author("Jane");
    let m1 = registry.add_magazine("Vogue", "Fashion");
    let m2 = registry.add_magazine("Wired", "Technology");

    jane.add_article(&mut registry, m1, "How to Dress Well");
    jane.add_article(&mut registry, m1, "Spring Trends Ahead");
    jane.add_article(&mut registry, m2, "Gadgets for Stylists");
    jane.add_article(&mut registry, m2, "Smart Fabrics Today");
    jane.add_article(&mut registry, m2, "Wearables Reviewed");

    assert_eq!(registry.top_publisher(), Some(m2));
}

#[test]
fn tie_keeps_the_earlier_magazine() {
    let mut registry = Registry::new();
    let jane = registry.add_author("Jane");
    let m1 = registry.add_magazine("Vogue", "Fashion");
    let m2 = registry.add_magazine("Wired", "Technology");

    jane.add_article(&mut registry, m2, "Gadgets for Stylists");
    jane.add_article(&mut registry, m1, "How to Dress Well");
    jane.add_article(&mut registry, m2, "Smart Fabrics Today");
    jane.add_article(&mut registry, m1, "Spring Trends Ahead");

    assert_eq!(registry.top_publisher(), Some(m1));
}

#[test]
fn articles_without_magazine_do_not_count() {
    let mut registry = Registry::new();
    let mut other = Registry::new();
    let jane = registry.add_author("Jane");
    registry.add_magazine("Vogue", "Fashion");
    let elsewhere = other.add_magazine("Wired", "Technology");

    jane.add_article(&mut registry, elsewhere, "Gadgets for Stylists");

    assert_eq!(registry.articles().len(), 1);
    assert_eq!(registry.top_publisher(), None);
}
