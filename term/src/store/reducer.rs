//! Applies actions to the feed store and mirrors the result into state.

use std::{cell::RefCell, fmt::Debug};

use jailfeed_lib::{
    config::Config,
    error::Result,
    store::{AdminCapability, FeedStore, FeedView, LabelPolicy},
};

use crate::store::{Reducer, action::Action, state::State, toast::ToastSink};

mod reducers;

/// Owns the feed store and the session's admin capability. After every
/// action the visible feed and any new notification are copied into state.
pub struct StoreReducer {
    feed: RefCell<FeedStore>,
    admin: Option<AdminCapability>,
    toasts: ToastSink,
}

impl StoreReducer {
    /// Builds a feed store seeded from the config, reporting to a toast sink.
    pub fn from_config(config: &Config) -> Result<Self> {
        let toasts = ToastSink::default();
        let feed = config
            .store_builder()
            .notifier(Box::new(toasts.clone()))
            .build()?;
        Ok(Self::new(feed, config.admin_capability(), toasts))
    }

    /// `toasts` must be the notifier the feed store was built with.
    pub fn new(
        feed: FeedStore,
        admin: Option<AdminCapability>,
        toasts: ToastSink,
    ) -> Self {
        Self {
            feed: RefCell::new(feed),
            admin,
            toasts,
        }
    }

    pub fn boxed(self) -> Box<Self> {
        Box::new(self)
    }

    /// Custom label policy the feed store validates drafts with
    pub fn label_policy(&self) -> LabelPolicy {
        self.feed.borrow().label_policy()
    }

    /// Current rendering snapshot of the feed
    pub fn view(&self) -> FeedView {
        self.feed.borrow().view(self.admin.as_ref())
    }

    fn log_action<D: Debug>(&self, name: &str, data: &D) {
        log::debug!("processing action: {name}({:?})", data);
    }
}

impl Reducer for StoreReducer {
    fn reduce(&self, state: &mut State, action: Action) {
        {
            let mut feed = self.feed.borrow_mut();
            let admin = self.admin.as_ref();

            match action {
                // Navigation actions
                Action::SelectFilter(filter) => {
                    self.log_action("SelectFilter", &filter);
                    reducers::feed::select_filter(&mut feed, filter);
                }
                Action::NextFilter => {
                    self.log_action("NextFilter", &feed.active_filter());
                    let next = feed.active_filter().next();
                    reducers::feed::select_filter(&mut feed, next);
                }
                Action::PreviousFilter => {
                    self.log_action("PreviousFilter", &feed.active_filter());
                    let previous = feed.active_filter().previous();
                    reducers::feed::select_filter(&mut feed, previous);
                }

                // Feed mutations
                Action::CreateItem(draft) => {
                    self.log_action("CreateItem", &draft);
                    reducers::feed::create_item(&mut feed, admin, draft);
                }
                Action::DeleteItem(id) => {
                    self.log_action("DeleteItem", &id);
                    reducers::feed::delete_item(&mut feed, admin, &id);
                }
                Action::SaveRulesLink(url) => {
                    self.log_action("SaveRulesLink", &url);
                    reducers::feed::save_rules_link(&mut feed, admin, url);
                }

                // UI actions
                Action::ClearToast => {
                    self.log_action("ClearToast", &"");
                    reducers::ui::clear_toast(state);
                }
                Action::NextTheme => {
                    self.log_action("NextTheme", &state.theme);
                    reducers::ui::next_theme(state);
                }
            }

            state.feed = feed.view(admin);
        }

        if let Some(toast) = self.toasts.take() {
            state.toast = Some(toast);
        }
    }
}

#[cfg(test)]
#[path = "./reducer_tests.rs"]
mod tests;
