//! Card rendering a single feed item.

use jailfeed_lib::item::{ContentItem, ContentKind};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Paragraph, Widget, Wrap},
};

use crate::ui::views::traits::{CustomWidget, CustomWidgetContext};

/// Rows a card occupies: borders, badge line, title, two content lines.
pub const CARD_HEIGHT: u16 = 6;

/// Bordered card showing badge, date, title and body of an item.
pub struct ItemCard<'a> {
    item: &'a ContentItem,
    selected: bool,
}

impl<'a> ItemCard<'a> {
    pub fn new(item: &'a ContentItem, selected: bool) -> Self {
        Self { item, selected }
    }

    fn badge_color(&self, ctx: &CustomWidgetContext) -> Color {
        match self.item.kind {
            ContentKind::News => ctx.state.colors.news_badge,
            ContentKind::Update => ctx.state.colors.update_badge,
            ContentKind::Custom { .. } => ctx.state.colors.custom_badge,
        }
    }
}

impl CustomWidget for ItemCard<'_> {
    fn render(
        self,
        area: Rect,
        buf: &mut ratatui::prelude::Buffer,
        ctx: &CustomWidgetContext,
    ) where
        Self: Sized,
    {
        let colors = &ctx.state.colors;

        let (border_type, border_color) = if self.selected {
            (BorderType::Thick, colors.selected_fg)
        } else {
            (BorderType::Rounded, colors.gray)
        };

        let block = Block::bordered()
            .border_type(border_type)
            .border_style(Style::new().fg(border_color));
        let inner = block.inner(area);
        block.render(area, buf);

        let [badge_area, title_area, content_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(1),
        ])
        .areas(inner);

        let badge = Line::from(vec![
            Span::from(format!(" {} ", self.item.kind.label())).style(
                Style::new()
                    .fg(colors.buffer_bg)
                    .bg(self.badge_color(ctx))
                    .add_modifier(Modifier::BOLD),
            ),
            Span::from(format!(" {}", self.item.date))
                .style(Style::new().fg(colors.muted)),
        ]);
        badge.render(badge_area, buf);

        Paragraph::new(self.item.title.as_str())
            .style(Style::new().fg(colors.text).add_modifier(Modifier::BOLD))
            .render(title_area, buf);

        Paragraph::new(self.item.content.as_str())
            .style(Style::new().fg(colors.muted))
            .wrap(Wrap { trim: true })
            .render(content_area, buf);
    }
}

#[cfg(test)]
#[path = "./card_tests.rs"]
mod tests;
