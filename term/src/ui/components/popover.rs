//! Centered popover dialogs.

use ratatui::{
    layout::{Constraint, Flex, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, BorderType, Clear, Padding, Widget},
};

use crate::ui::views::traits::{CustomWidgetContext, CustomWidgetRef};

/// Calculates a centered popover area within the given parent area.
pub fn get_popover_area(area: Rect, percent_x: u16, percent_y: u16) -> Rect {
    let vertical = Layout::vertical([Constraint::Percentage(percent_y)])
        .flex(Flex::Center);
    let horizontal = Layout::horizontal([Constraint::Percentage(percent_x)])
        .flex(Flex::Center);
    let [area] = vertical.areas(area);
    let [area] = horizontal.areas(area);
    area
}

/// Clears a centered area and draws the wrapped content inside a titled
/// double border.
pub struct Popover<'a> {
    content: &'a dyn CustomWidgetRef,
    title: String,
    width: u16,
    height: u16,
}

impl<'a> Popover<'a> {
    pub fn new<S: Into<String>>(
        content: &'a dyn CustomWidgetRef,
        title: S,
    ) -> Self {
        Self {
            content,
            title: title.into(),
            width: 60,
            height: 60,
        }
    }

    pub fn size(mut self, percent_x: u16, percent_y: u16) -> Self {
        self.width = percent_x;
        self.height = percent_y;
        self
    }
}

impl CustomWidgetRef for Popover<'_> {
    fn render_ref(
        &self,
        area: Rect,
        buf: &mut ratatui::prelude::Buffer,
        ctx: &CustomWidgetContext,
    ) {
        let pop_area = get_popover_area(area, self.width, self.height);

        let block = Block::bordered()
            .title(format!(" {} ", self.title))
            .title_style(
                Style::new()
                    .fg(ctx.state.colors.header_text)
                    .add_modifier(Modifier::BOLD),
            )
            .border_type(BorderType::Double)
            .border_style(
                Style::new()
                    .fg(ctx.state.colors.border_color)
                    .bg(ctx.state.colors.buffer_bg),
            )
            .padding(Padding::horizontal(2))
            .style(Style::default().bg(ctx.state.colors.buffer_bg));

        let inner_area = block.inner(pop_area);

        Clear.render(pop_area, buf);
        block.render(pop_area, buf);
        self.content.render_ref(inner_area, buf, ctx);
    }
}

#[cfg(test)]
#[path = "./popover_tests.rs"]
mod tests;
