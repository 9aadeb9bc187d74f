use std::fs;

use tempfile::{TempDir, tempdir};

use crate::{filter::Filter, item::Draft, notify::MockNotifier};

use super::*;

fn setup() -> (TempDir, PathBuf) {
    let dir = tempdir().unwrap();
    let path = dir.path().join(CONFIG_FILE_NAME);
    (dir, path)
}

#[test]
fn test_writes_defaults_when_missing() {
    let (_dir, path) = setup();

    let manager = ConfigManager::builder().path(path.clone()).build().unwrap();

    assert_eq!(manager.get(), &Config::default());
    assert!(path.exists());

    let written: Config =
        serde_yaml::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(written, Config::default());
}

#[test]
fn test_loads_existing_config() {
    let (_dir, path) = setup();
    fs::write(
        &path,
        r#"
theme: Emerald
admin: false
rules_link: https://rules.example
strict_custom_label: true
items:
  - id: "7"
    title: Турнир выходного дня
    content: Регистрация открыта
    date: 2024-12-01
    type: custom
    customLabel: Турниры
"#,
    )
    .unwrap();

    let manager = ConfigManager::builder().path(path).build().unwrap();
    let config = manager.get();

    assert_eq!(config.theme, "Emerald");
    assert!(!config.admin);
    assert!(config.admin_capability().is_none());
    assert_eq!(config.rules_link, "https://rules.example");
    assert_eq!(config.label_policy(), LabelPolicy::Strict);
    assert_eq!(config.items.len(), 1);
    assert_eq!(config.items[0].kind, ContentKind::custom("Турниры"));
}

#[test]
fn test_missing_fields_fall_back() {
    let (_dir, path) = setup();
    fs::write(&path, "items: []\n").unwrap();

    let manager = ConfigManager::builder().path(path).build().unwrap();
    let config = manager.get();

    assert_eq!(config.theme, DEFAULT_THEME);
    assert_eq!(config.rules_link, DEFAULT_RULES_LINK);
    assert!(!config.admin);
    assert!(config.items.is_empty());
}

#[test]
fn test_unparsable_config_uses_defaults_without_overwriting() {
    let (_dir, path) = setup();
    fs::write(&path, "items: [not, valid: {").unwrap();

    let manager = ConfigManager::builder().path(path.clone()).build().unwrap();

    assert_eq!(
        manager.get(),
        &Config {
            admin: false,
            ..Config::default()
        }
    );
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "items: [not, valid: {"
    );
}

#[test]
fn test_unparsable_config_never_grants_admin() {
    let (_dir, path) = setup();
    fs::write(
        &path,
        r#"
admin: false
items:
  - id: "1"
    title: Ивент
    content: Скоро
    date: 2024-12-01
    type: event
"#,
    )
    .unwrap();

    let manager = ConfigManager::builder().path(path).build().unwrap();

    assert!(!manager.get().admin);
    assert!(manager.get().admin_capability().is_none());
    assert_eq!(manager.get().items, get_default_items());
}

#[test]
fn test_store_builder_ids_start_past_numeric_seed_ids() {
    let seed_id = 9_000_000_000_000_000_000_u64;
    let config = Config {
        items: vec![ContentItem {
            id: seed_id.to_string(),
            title: "Старая запись".to_string(),
            content: "Текст".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 11, 20).unwrap(),
            kind: ContentKind::News,
        }],
        ..Config::default()
    };

    let mut notifier = MockNotifier::new();
    notifier.expect_notify_success().times(1).return_const(());

    let mut store = config
        .store_builder()
        .notifier(Box::new(notifier))
        .build()
        .unwrap();

    let admin = config.admin_capability().unwrap();
    let created = store
        .create(&admin, Draft::new("T", "C", ContentKind::News))
        .unwrap();

    assert_eq!(created.id, (seed_id + 1).to_string());
}

#[test]
fn test_builder_requires_path() {
    let result = ConfigManager::builder().build();
    assert!(matches!(result, Err(FeedError::ConfigBuild(_))));
}

#[test]
fn test_store_builder_seeds_store() {
    let config = Config {
        strict_custom_label: true,
        ..Config::default()
    };

    let mut notifier = MockNotifier::new();
    notifier.expect_notify_error().times(1).return_const(());

    let mut store = config
        .store_builder()
        .notifier(Box::new(notifier))
        .build()
        .unwrap();

    assert_eq!(store.len(), 2);
    assert_eq!(store.rules_link(), DEFAULT_RULES_LINK);
    assert_eq!(store.filter(Filter::News).len(), 1);

    let admin = config.admin_capability().unwrap();
    assert!(
        store
            .create(&admin, Draft::new("T", "C", ContentKind::custom("")))
            .is_err()
    );
}
