//! Configuration for the feed: seed items, rules link, admin flag, theme

use std::{fs, path::PathBuf};

use chrono::NaiveDate;
use derive_builder::Builder;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::{
    error::{FeedError, Result},
    id::CounterIdGenerator,
    item::{ContentItem, ContentKind},
    store::{AdminCapability, FeedStoreBuilder, LabelPolicy},
};

/// Rules page linked from the rules screen unless configured otherwise
pub const DEFAULT_RULES_LINK: &str =
    "https://ct-game-rules-site--preview.poehali.dev/";
/// Theme name used unless configured otherwise
pub const DEFAULT_THEME: &str = "Blue";
/// File name of the config inside the project config directory
pub const CONFIG_FILE_NAME: &str = "config.yml";

/// Feed configuration persisted as YAML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Color theme name
    #[serde(default = "default_theme")]
    pub theme: String,
    /// Grants the admin capability to the session
    #[serde(default)]
    pub admin: bool,
    /// Link shown on the rules screen
    #[serde(default = "default_rules_link")]
    pub rules_link: String,
    /// Rejects custom items without a section label
    #[serde(default)]
    pub strict_custom_label: bool,
    /// Items the feed starts with, newest first
    #[serde(default)]
    pub items: Vec<ContentItem>,
}

fn default_theme() -> String {
    DEFAULT_THEME.to_string()
}

fn default_rules_link() -> String {
    DEFAULT_RULES_LINK.to_string()
}

fn seed_date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

/// Returns the announcements a fresh install starts with
pub fn get_default_items() -> Vec<ContentItem> {
    vec![
        ContentItem {
            id: "1".to_string(),
            title: "Открытие сервера [JAIL] Тюрьма".to_string(),
            content: "Сервер [JAIL] Тюрьма заточение открыт! Приглашаем всех \
                      игроков присоединиться к нашему сообществу."
                .to_string(),
            date: seed_date(2024, 11, 24),
            kind: ContentKind::News,
        },
        ContentItem {
            id: "2".to_string(),
            title: "Обновление игрового баланса".to_string(),
            content: "Произведена балансировка игровых механик, исправлены \
                      ошибки, добавлены новые функции."
                .to_string(),
            date: seed_date(2024, 11, 23),
            kind: ContentKind::Update,
        },
    ]
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            admin: true,
            rules_link: default_rules_link(),
            strict_custom_label: false,
            items: get_default_items(),
        }
    }
}

impl Config {
    /// Returns the admin capability when the config grants it
    pub fn admin_capability(&self) -> Option<AdminCapability> {
        AdminCapability::from_flag(self.admin)
    }

    /// Returns the custom label policy selected by this config
    pub fn label_policy(&self) -> LabelPolicy {
        if self.strict_custom_label {
            LabelPolicy::Strict
        } else {
            LabelPolicy::Permissive
        }
    }

    /// Returns a store builder seeded with this config's items, rules link,
    /// and label policy. Generated ids start past the largest numeric seed id.
    pub fn store_builder(&self) -> FeedStoreBuilder {
        let last_id = self
            .items
            .iter()
            .filter_map(|i| i.id.parse::<u64>().ok())
            .max()
            .unwrap_or_default();

        FeedStoreBuilder::default()
            .ids(Box::new(CounterIdGenerator::starting_after(last_id)))
            .items(self.items.clone())
            .rules_link(self.rules_link.clone())
            .label_policy(self.label_policy())
    }
}

/// Returns `<config dir>/config.yml` for the given application name,
/// creating the directory if necessary
pub fn get_default_config_path(app_name: &str) -> Result<PathBuf> {
    let project_dir = ProjectDirs::from("", "", app_name)
        .ok_or(FeedError::ProjectDirectory)?;
    let config_dir = project_dir.config_dir();
    fs::create_dir_all(config_dir)?;
    Ok(config_dir.join(CONFIG_FILE_NAME))
}

/// Loads the config from a YAML file, writing defaults on first run
#[derive(Builder)]
#[builder(setter(into), build_fn(private, name = "_build"))]
pub struct ConfigManager {
    /// Path to the config file
    path: PathBuf,
    #[builder(setter(skip))]
    config: Config,
}

impl ConfigManagerBuilder {
    /// Builds the manager and loads the config file. A missing file is
    /// created with defaults; an unparsable one is left alone and defaults
    /// are used instead, minus the admin flag.
    pub fn build(&self) -> Result<ConfigManager> {
        let mut manager = self._build()?;

        match fs::File::open(&manager.path) {
            Ok(file) => {
                manager.config = match serde_yaml::from_reader(file) {
                    Ok(c) => c,
                    Err(e) => {
                        log::warn!(
                            "Failed to parse config file, using defaults \
                             without admin: {}",
                            e
                        );
                        Config {
                            admin: false,
                            ..Config::default()
                        }
                    }
                };
            }
            Err(_) => {
                log::info!(
                    "writing default config to {}",
                    manager.path.display()
                );
                manager.config = Config::default();
                manager.write()?;
            }
        }

        Ok(manager)
    }
}

impl ConfigManager {
    /// Returns a new instance of ConfigManagerBuilder.
    pub fn builder() -> ConfigManagerBuilder {
        ConfigManagerBuilder::default()
    }

    /// Returns the loaded config
    pub fn get(&self) -> &Config {
        &self.config
    }

    /// Returns the config file path
    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    fn write(&self) -> Result<()> {
        let serialized = serde_yaml::to_string(&self.config)?;
        fs::write(&self.path, serialized)?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "./config_tests.rs"]
mod tests;
