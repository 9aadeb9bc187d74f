use chrono::NaiveDate;

use super::*;

fn item(kind: ContentKind) -> ContentItem {
    ContentItem {
        id: "1".to_string(),
        title: "title".to_string(),
        content: "content".to_string(),
        date: NaiveDate::from_ymd_opt(2024, 11, 24).unwrap(),
        kind,
    }
}

#[test]
fn test_custom_label_only_for_custom_kind() {
    assert_eq!(ContentKind::News.custom_label(), None);
    assert_eq!(ContentKind::Update.custom_label(), None);
    assert_eq!(ContentKind::custom("Турниры").custom_label(), Some("Турниры"));
}

#[test]
fn test_badge_labels() {
    assert_eq!(ContentKind::News.label(), NEWS_LABEL);
    assert_eq!(ContentKind::Update.label(), UPDATE_LABEL);
    assert_eq!(ContentKind::custom("Турниры").label(), "Турниры");
}

#[test]
fn test_serializes_custom_item_flat() {
    let yaml = serde_yaml::to_string(&item(ContentKind::custom("Турниры")))
        .unwrap();

    assert!(yaml.contains("type: custom"));
    assert!(yaml.contains("customLabel: Турниры"));
    assert!(yaml.contains("date: 2024-11-24"));
}

#[test]
fn test_serializes_news_item_without_custom_label() {
    let yaml = serde_yaml::to_string(&item(ContentKind::News)).unwrap();

    assert!(yaml.contains("type: news"));
    assert!(!yaml.contains("customLabel"));
}

#[test]
fn test_deserializes_flat_item() {
    let yaml = r#"
id: "2"
title: Обновление игрового баланса
content: Произведена балансировка игровых механик.
date: 2024-11-23
type: update
"#;

    let parsed: ContentItem = serde_yaml::from_str(yaml).unwrap();

    assert_eq!(parsed.id, "2");
    assert_eq!(parsed.kind, ContentKind::Update);
    assert_eq!(parsed.date, NaiveDate::from_ymd_opt(2024, 11, 23).unwrap());
}

#[test]
fn test_rejects_unknown_type() {
    let yaml = r#"
id: "3"
title: t
content: c
date: 2024-11-23
type: rumor
"#;

    let parsed: Result<ContentItem, _> = serde_yaml::from_str(yaml);

    assert!(parsed.is_err());
}

#[test]
fn test_draft_validation() {
    let ok = Draft::new("T", "C", ContentKind::News);
    assert!(ok.validate(LabelPolicy::Permissive).is_ok());

    let no_title = Draft::new("", "C", ContentKind::News);
    assert_eq!(
        no_title.validate(LabelPolicy::Permissive),
        Err(ValidationError::MissingField(Field::Title))
    );

    let no_content = Draft::new("T", "", ContentKind::Update);
    assert_eq!(
        no_content.validate(LabelPolicy::Strict),
        Err(ValidationError::MissingField(Field::Content))
    );
}

#[test]
fn test_draft_custom_label_policy() {
    let unlabeled = Draft::new("T", "C", ContentKind::custom(""));
    assert!(unlabeled.validate(LabelPolicy::Permissive).is_ok());
    assert_eq!(
        unlabeled.validate(LabelPolicy::Strict),
        Err(ValidationError::MissingField(Field::CustomLabel))
    );

    let labeled = Draft::new("T", "C", ContentKind::custom("Турниры"));
    assert!(labeled.validate(LabelPolicy::Strict).is_ok());
}
