//! View filters selecting which feed items are visible

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

use crate::item::{ContentItem, ContentKind};

/// The currently selected view mode. `Rules` is not an item filter but a
/// separate screen, so it never yields items.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Filter {
    /// Every item
    #[default]
    Home,
    /// News items only
    News,
    /// Update items only
    Updates,
    /// The rules screen
    Rules,
}

impl Filter {
    /// Returns whether the item is visible under this filter
    pub fn matches(&self, item: &ContentItem) -> bool {
        match self {
            Filter::Home => true,
            Filter::News => item.kind == ContentKind::News,
            Filter::Updates => item.kind == ContentKind::Update,
            Filter::Rules => false,
        }
    }

    /// Projects the items visible under this filter, preserving order
    pub fn apply<'a>(&self, items: &'a [ContentItem]) -> Vec<&'a ContentItem> {
        items.iter().filter(|i| self.matches(i)).collect()
    }

    /// Returns whether this filter displays feed items at all
    pub fn shows_items(&self) -> bool {
        *self != Filter::Rules
    }

    /// Navigation title for this filter
    pub fn title(&self) -> &'static str {
        match self {
            Filter::Home => "Главная",
            Filter::News => "Новости",
            Filter::Updates => "Обновления",
            Filter::Rules => "Правила",
        }
    }

    /// Returns the next filter in navigation order, wrapping around
    pub fn next(&self) -> Filter {
        let all = Filter::iter().collect::<Vec<_>>();
        let idx = all.iter().position(|f| f == self).unwrap_or(0);
        all[(idx + 1) % all.len()]
    }

    /// Returns the previous filter in navigation order, wrapping around
    pub fn previous(&self) -> Filter {
        let all = Filter::iter().collect::<Vec<_>>();
        let idx = all.iter().position(|f| f == self).unwrap_or(0);
        all[(idx + all.len() - 1) % all.len()]
    }
}

#[cfg(test)]
#[path = "./filter_tests.rs"]
mod tests;
