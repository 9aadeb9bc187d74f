//! Application state definitions.

use jailfeed_lib::store::{FeedView, LabelPolicy};

use crate::{
    store::toast::Toast,
    ui::colors::{Colors, Theme},
};

/// Complete application state for the terminal UI.
#[derive(Debug, Clone)]
pub struct State {
    pub true_color_enabled: bool,
    pub theme: Theme,
    pub colors: Colors,
    pub label_policy: LabelPolicy,
    pub feed: FeedView,
    pub toast: Option<Toast>,
}

impl State {
    pub fn new(
        theme: Theme,
        true_color_enabled: bool,
        label_policy: LabelPolicy,
        feed: FeedView,
    ) -> Self {
        Self {
            true_color_enabled,
            theme,
            colors: Colors::new(
                theme.to_palette(true_color_enabled),
                true_color_enabled,
            ),
            label_policy,
            feed,
            toast: None,
        }
    }
}

impl Default for State {
    fn default() -> Self {
        Self::new(
            Theme::default(),
            true,
            LabelPolicy::default(),
            FeedView::default(),
        )
    }
}
