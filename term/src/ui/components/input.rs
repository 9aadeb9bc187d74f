//! Editable text input component.

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};

use crate::ui::views::traits::{CustomStatefulWidget, CustomWidgetContext};

/// State for an input field (editing mode and current value).
#[derive(Debug, Clone, Default)]
pub struct InputState {
    pub editing: bool,
    pub value: String,
}

impl InputState {
    pub fn push(&mut self, c: char) {
        self.value.push(c);
    }

    pub fn pop(&mut self) {
        self.value.pop();
    }

    pub fn clear(&mut self) {
        self.editing = false;
        self.value.clear();
    }
}

/// Labeled text input that highlights when in edit mode.
pub struct Input {
    label: String,
}

impl Input {
    /// Creates a new input with the given label.
    pub fn new(label: &str) -> Self {
        Self {
            label: String::from(label),
        }
    }
}

impl CustomStatefulWidget for Input {
    type State = InputState;

    fn render(
        self,
        area: Rect,
        buf: &mut ratatui::prelude::Buffer,
        state: &mut Self::State,
        ctx: &CustomWidgetContext,
    ) where
        Self: Sized,
    {
        let label = Span::from(format!("{0}: ", self.label))
            .style(Style::default().fg(ctx.state.colors.muted));
        let mut style = Style::default().fg(ctx.state.colors.text);
        if state.editing {
            style = style.fg(ctx.state.colors.input_editing);
        }
        let mut spans = vec![label, Span::from(state.value.as_str()).style(style)];
        if state.editing {
            spans.push(Span::from("_").style(style));
        }
        Line::from(spans).render(area, buf);
    }
}

#[cfg(test)]
#[path = "./input_tests.rs"]
mod tests;
