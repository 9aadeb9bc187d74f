//! Content item data model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{
    error::{Field, ValidationError},
    store::LabelPolicy,
};

/// Badge label shown for news items
pub const NEWS_LABEL: &str = "Новость";
/// Badge label shown for update items
pub const UPDATE_LABEL: &str = "Обновление";

/// The kind of a content item. Only custom items carry a label, so an item
/// has a custom label if and only if it is custom.
///
/// Serialized flat alongside the item fields, e.g.
/// `type: custom` and `customLabel: Турниры`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ContentKind {
    /// A news announcement
    News,
    /// A changelog / balance update
    Update,
    /// An item filed under an admin-chosen section
    Custom {
        /// Name of the section, e.g. "Турниры"
        #[serde(rename = "customLabel")]
        custom_label: String,
    },
}

impl ContentKind {
    /// Returns a custom kind with the given section label
    pub fn custom<S: Into<String>>(label: S) -> Self {
        Self::Custom {
            custom_label: label.into(),
        }
    }

    /// Returns the custom label, present only for custom items
    pub fn custom_label(&self) -> Option<&str> {
        match self {
            Self::Custom { custom_label } => Some(custom_label),
            _ => None,
        }
    }

    /// Returns the label shown on the item's badge
    pub fn label(&self) -> &str {
        match self {
            Self::News => NEWS_LABEL,
            Self::Update => UPDATE_LABEL,
            Self::Custom { custom_label } => custom_label,
        }
    }

    /// Returns the serialized type tag
    pub fn tag(&self) -> &'static str {
        match self {
            Self::News => "news",
            Self::Update => "update",
            Self::Custom { .. } => "custom",
        }
    }
}

/// One announcement / news / update record shown in the feed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentItem {
    /// Unique identifier assigned at creation
    pub id: String,
    /// Display title
    pub title: String,
    /// Body text
    pub content: String,
    /// Creation date, serialized as `YYYY-MM-DD`
    pub date: NaiveDate,
    /// Item kind (and custom label when custom)
    #[serde(flatten)]
    pub kind: ContentKind,
}

/// User supplied fields for a new item. The store fills in the id and date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Draft {
    /// Title for the new item
    pub title: String,
    /// Body text for the new item
    pub content: String,
    /// Kind of the new item
    pub kind: ContentKind,
}

impl Draft {
    /// Returns a new draft
    pub fn new<T: Into<String>, C: Into<String>>(
        title: T,
        content: C,
        kind: ContentKind,
    ) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            kind,
        }
    }

    /// Checks the draft against the store's creation rules. Title and content
    /// must be non-empty; a custom label must be non-empty only under
    /// [`LabelPolicy::Strict`].
    pub fn validate(&self, policy: LabelPolicy) -> Result<(), ValidationError> {
        if self.title.is_empty() {
            return Err(ValidationError::MissingField(Field::Title));
        }

        if self.content.is_empty() {
            return Err(ValidationError::MissingField(Field::Content));
        }

        if policy == LabelPolicy::Strict
            && let ContentKind::Custom { custom_label } = &self.kind
            && custom_label.is_empty()
        {
            return Err(ValidationError::MissingField(Field::CustomLabel));
        }

        Ok(())
    }
}

#[cfg(test)]
#[path = "./item_tests.rs"]
mod tests;
