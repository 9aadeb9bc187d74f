//! Filter tabs rendered in the header.

use jailfeed_lib::filter::Filter;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::{Tabs, Widget},
};
use strum::IntoEnumIterator;

use crate::ui::views::traits::{CustomWidget, CustomWidgetContext};

/// Numbered tab strip highlighting the active filter.
pub struct FilterTabs {
    active: Filter,
}

impl FilterTabs {
    pub fn new(active: Filter) -> Self {
        Self { active }
    }
}

impl CustomWidget for FilterTabs {
    fn render(
        self,
        area: Rect,
        buf: &mut ratatui::prelude::Buffer,
        ctx: &CustomWidgetContext,
    ) where
        Self: Sized,
    {
        let titles = Filter::iter()
            .enumerate()
            .map(|(i, f)| Line::from(format!(" {} {} ", i + 1, f.title())));

        let selected = Filter::iter().position(|f| f == self.active);

        Tabs::new(titles)
            .select(selected)
            .style(Style::new().fg(ctx.state.colors.muted))
            .highlight_style(
                Style::new()
                    .fg(ctx.state.colors.text)
                    .bg(ctx.state.colors.tab_bg)
                    .add_modifier(Modifier::BOLD),
            )
            .divider("|")
            .render(area, buf);
    }
}

#[cfg(test)]
#[path = "./tabs_tests.rs"]
mod tests;
