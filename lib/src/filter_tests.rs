use std::str::FromStr;

use chrono::NaiveDate;

use super::*;

fn item(id: &str, kind: ContentKind) -> ContentItem {
    ContentItem {
        id: id.to_string(),
        title: format!("title {id}"),
        content: format!("content {id}"),
        date: NaiveDate::from_ymd_opt(2024, 11, 24).unwrap(),
        kind,
    }
}

fn items() -> Vec<ContentItem> {
    vec![
        item("4", ContentKind::custom("Турниры")),
        item("3", ContentKind::Update),
        item("2", ContentKind::News),
        item("1", ContentKind::News),
    ]
}

fn ids(items: Vec<&ContentItem>) -> Vec<&str> {
    items.iter().map(|i| i.id.as_str()).collect()
}

#[test]
fn test_home_returns_everything_in_order() {
    let items = items();
    let result = Filter::Home.apply(&items);
    assert_eq!(result.len(), items.len());
    assert_eq!(ids(result), vec!["4", "3", "2", "1"]);
}

#[test]
fn test_news_returns_only_news() {
    let items = items();
    let result = Filter::News.apply(&items);
    assert!(result.iter().all(|i| i.kind == ContentKind::News));
    assert_eq!(ids(result), vec!["2", "1"]);
}

#[test]
fn test_updates_returns_only_updates() {
    let items = items();
    let result = Filter::Updates.apply(&items);
    assert_eq!(ids(result), vec!["3"]);
}

#[test]
fn test_custom_items_only_visible_on_home() {
    let items = vec![item("1", ContentKind::custom("Турниры"))];
    assert_eq!(Filter::Home.apply(&items).len(), 1);
    assert!(Filter::News.apply(&items).is_empty());
    assert!(Filter::Updates.apply(&items).is_empty());
}

#[test]
fn test_rules_returns_nothing() {
    let items = items();
    assert!(Filter::Rules.apply(&items).is_empty());
    assert!(!Filter::Rules.shows_items());
    assert!(Filter::Home.shows_items());
}

#[test]
fn test_navigation_wraps() {
    assert_eq!(Filter::Home.next(), Filter::News);
    assert_eq!(Filter::News.next(), Filter::Updates);
    assert_eq!(Filter::Updates.next(), Filter::Rules);
    assert_eq!(Filter::Rules.next(), Filter::Home);
    assert_eq!(Filter::Home.previous(), Filter::Rules);
    assert_eq!(Filter::Rules.previous(), Filter::Updates);
}

#[test]
fn test_parse_and_display() {
    assert_eq!(Filter::from_str("updates").unwrap(), Filter::Updates);
    assert_eq!(Filter::from_str("NEWS").unwrap(), Filter::News);
    assert!(Filter::from_str("archive").is_err());
    assert_eq!(Filter::Rules.to_string(), "rules");
}
