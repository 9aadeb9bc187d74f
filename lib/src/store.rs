//! The content feed store: items, active filter, and rules link
//!
//! Every mutation takes an [`AdminCapability`] and reports its outcome to the
//! injected [`Notifier`]. Rejected drafts leave the store untouched.

use derive_builder::Builder;
use serde::{Deserialize, Serialize};

use crate::{
    clock::{Clock, LocalClock},
    error::{Field, ValidationError},
    filter::Filter,
    id::{CounterIdGenerator, IdGenerator},
    item::{ContentItem, Draft},
    notify::{self, LogNotifier, Notifier},
};

/// Proof that the holder may create and delete items and save the rules
/// link. Only obtainable from an explicit admin flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminCapability(());

impl AdminCapability {
    /// Returns a capability when `is_admin` is set
    pub fn from_flag(is_admin: bool) -> Option<Self> {
        is_admin.then_some(Self(()))
    }
}

/// Whether custom items must carry a non-empty label
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LabelPolicy {
    /// Custom items may have an empty label
    #[default]
    Permissive,
    /// Custom items without a label are rejected
    Strict,
}

/// Snapshot consumed by renderers
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedView {
    /// Items visible under the active filter, newest first
    pub items: Vec<ContentItem>,
    /// The selected view mode
    pub active_filter: Filter,
    /// Link to the server rules
    pub rules_link: String,
    /// Whether mutation controls should be offered
    pub is_admin: bool,
}

/// In-memory feed of content items, newest first
#[derive(Builder)]
#[builder(pattern = "owned")]
pub struct FeedStore {
    /// Initial items, newest first
    #[builder(default, setter(into))]
    items: Vec<ContentItem>,
    /// Initially selected view mode
    #[builder(default)]
    active_filter: Filter,
    /// Initial rules link
    #[builder(default, setter(into))]
    rules_link: String,
    /// Validation applied to custom labels
    #[builder(default)]
    label_policy: LabelPolicy,
    /// Receives success / error notifications
    #[builder(default = "Box::new(LogNotifier)")]
    notifier: Box<dyn Notifier>,
    /// Assigns ids to new items
    #[builder(default = "Box::new(CounterIdGenerator::default())")]
    ids: Box<dyn IdGenerator>,
    /// Dates new items
    #[builder(default = "Box::new(LocalClock)")]
    clock: Box<dyn Clock>,
}

impl FeedStore {
    /// Returns builder for FeedStore
    pub fn builder() -> FeedStoreBuilder {
        FeedStoreBuilder::default()
    }

    /// All items in store order
    pub fn items(&self) -> &[ContentItem] {
        &self.items
    }

    /// Number of items in the store
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the store holds no items
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Looks up an item by id
    pub fn get(&self, id: &str) -> Option<&ContentItem> {
        self.items.iter().find(|i| i.id == id)
    }

    /// The current rules link
    pub fn rules_link(&self) -> &str {
        &self.rules_link
    }

    /// The selected view mode
    pub fn active_filter(&self) -> Filter {
        self.active_filter
    }

    /// Validation applied to custom labels
    pub fn label_policy(&self) -> LabelPolicy {
        self.label_policy
    }

    /// Selects a view mode. Any mode is reachable from any other.
    pub fn set_active_filter(&mut self, filter: Filter) {
        log::debug!("active filter: {} -> {}", self.active_filter, filter);
        self.active_filter = filter;
    }

    /// Items visible under `filter`, in store order
    pub fn filter(&self, filter: Filter) -> Vec<&ContentItem> {
        filter.apply(&self.items)
    }

    /// Items visible under the active filter
    pub fn visible(&self) -> Vec<&ContentItem> {
        self.filter(self.active_filter)
    }

    /// Returns the snapshot a renderer needs to draw the feed
    pub fn view(&self, admin: Option<&AdminCapability>) -> FeedView {
        FeedView {
            items: self.visible().into_iter().cloned().collect(),
            active_filter: self.active_filter,
            rules_link: self.rules_link.clone(),
            is_admin: admin.is_some(),
        }
    }

    /// Validates the draft and prepends a new item dated today.
    pub fn create(
        &mut self,
        _admin: &AdminCapability,
        draft: Draft,
    ) -> Result<&ContentItem, ValidationError> {
        if let Err(e) = draft.validate(self.label_policy) {
            log::debug!("rejected draft: {e}");
            let message = match e {
                ValidationError::MissingField(Field::CustomLabel) => {
                    notify::CUSTOM_LABEL_REQUIRED
                }
                ValidationError::MissingField(_) => notify::FIELDS_REQUIRED,
            };
            self.notifier.notify_error(message);
            return Err(e);
        }

        let item = ContentItem {
            id: self.unique_id(),
            title: draft.title,
            content: draft.content,
            date: self.clock.today(),
            kind: draft.kind,
        };

        log::debug!("created item: {} ({})", item.id, item.kind.tag());

        self.items.insert(0, item);
        self.notifier.notify_success(notify::ITEM_CREATED);

        Ok(&self.items[0])
    }

    /// Removes the item with `id`. Unknown ids are ignored, and the success
    /// notification is emitted either way.
    pub fn delete(
        &mut self,
        _admin: &AdminCapability,
        id: &str,
    ) -> Option<ContentItem> {
        let removed = self
            .items
            .iter()
            .position(|i| i.id == id)
            .map(|idx| self.items.remove(idx));

        if removed.is_none() {
            log::debug!("delete requested for unknown item: {id}");
        }

        self.notifier.notify_success(notify::ITEM_DELETED);

        removed
    }

    /// Replaces the rules link as-is, without any URL validation.
    pub fn set_rules_link<S: Into<String>>(
        &mut self,
        _admin: &AdminCapability,
        url: S,
    ) {
        self.rules_link = url.into();
        log::debug!("rules link saved: {}", self.rules_link);
        self.notifier.notify_success(notify::RULES_LINK_SAVED);
    }

    // seed items may already use ids the generator would produce
    fn unique_id(&mut self) -> String {
        let mut id = self.ids.next_id();
        while self.get(&id).is_some() {
            id = self.ids.next_id();
        }
        id
    }
}

#[cfg(test)]
#[path = "./store_tests.rs"]
mod tests;
