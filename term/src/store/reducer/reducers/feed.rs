//! Feed reducers forwarding user intent to the content feed store.

use jailfeed_lib::{
    filter::Filter,
    item::Draft,
    store::{AdminCapability, FeedStore},
};

/// Switches the active tab.
pub fn select_filter(feed: &mut FeedStore, filter: Filter) {
    feed.set_active_filter(filter);
}

/// Creates an item. Rejections are reported by the store's notifier.
pub fn create_item(
    feed: &mut FeedStore,
    admin: Option<&AdminCapability>,
    draft: Draft,
) {
    let Some(admin) = admin else {
        log::warn!("ignoring create without admin capability");
        return;
    };

    if let Err(e) = feed.create(admin, draft) {
        log::debug!("create rejected: {e}");
    }
}

/// Deletes an item by id; unknown ids are a no-op.
pub fn delete_item(
    feed: &mut FeedStore,
    admin: Option<&AdminCapability>,
    id: &str,
) {
    let Some(admin) = admin else {
        log::warn!("ignoring delete without admin capability");
        return;
    };

    feed.delete(admin, id);
}

/// Saves the rules link verbatim.
pub fn save_rules_link(
    feed: &mut FeedStore,
    admin: Option<&AdminCapability>,
    url: String,
) {
    let Some(admin) = admin else {
        log::warn!("ignoring rules link save without admin capability");
        return;
    };

    feed.set_rules_link(admin, url);
}
