//! Rules tab: shows the rules link and lets admins edit it.

use std::{cell::RefCell, rc::Rc};

use ratatui::{
    crossterm::event::{Event, KeyCode, KeyEventKind},
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

use crate::{
    store::{Dispatcher, action::Action, state::State},
    ui::components::{
        header::Header,
        input::{Input, InputState},
    },
};

use super::traits::{
    CustomStatefulWidget, CustomWidget, CustomWidgetContext, CustomWidgetRef,
    EventHandler, View, ViewID,
};

const RULES_HEADER: &str = "Правила сервера";
const LINK_INPUT: &str = "Ссылка на правила";
const OPEN_RULES: &str = "Открыть правила";

pub struct RulesView {
    dispatcher: Rc<dyn Dispatcher>,
    editing: RefCell<bool>,
    link_state: RefCell<InputState>,
}

impl RulesView {
    pub fn new(dispatcher: Rc<dyn Dispatcher>) -> Self {
        Self {
            dispatcher,
            editing: RefCell::new(false),
            link_state: RefCell::new(InputState::default()),
        }
    }

    fn is_editing(&self) -> bool {
        *self.editing.borrow()
    }

    fn start_editing(&self, current: &str) {
        let mut link = self.link_state.borrow_mut();
        link.value = current.to_string();
        link.editing = true;
        *self.editing.borrow_mut() = true;
    }

    fn stop_editing(&self) {
        self.link_state.borrow_mut().editing = false;
        *self.editing.borrow_mut() = false;
    }
}

impl View for RulesView {
    fn id(&self) -> ViewID {
        ViewID::Rules
    }

    fn legend(&self, state: &State) -> String {
        if self.is_editing() {
            "(enter) сохранить | (esc) отмена".to_string()
        } else if state.feed.is_admin {
            "(e) изменить ссылку".to_string()
        } else {
            String::new()
        }
    }

    fn override_main_legend(&self, _state: &State) -> bool {
        self.is_editing()
    }
}

impl CustomWidgetRef for RulesView {
    fn render_ref(
        &self,
        area: Rect,
        buf: &mut ratatui::prelude::Buffer,
        ctx: &CustomWidgetContext,
    ) {
        let [header_area, _, input_area, _, link_area] = Layout::vertical([
            Constraint::Length(1), // header
            Constraint::Length(1), // spacer
            Constraint::Length(1), // editor
            Constraint::Length(1), // spacer
            Constraint::Length(1), // link
        ])
        .areas(area);

        Header::new(RULES_HEADER).render(header_area, buf, ctx);

        let link = &ctx.state.feed.rules_link;

        // editor only mirrors the store while not editing
        if !self.is_editing() {
            self.link_state.borrow_mut().value = link.clone();
        }

        if ctx.state.feed.is_admin {
            Input::new(LINK_INPUT).render(
                input_area,
                buf,
                &mut self.link_state.borrow_mut(),
                ctx,
            );
        }

        Line::from(vec![
            Span::from(format!("{OPEN_RULES}: "))
                .style(Style::new().fg(ctx.state.colors.text)),
            Span::from(link.as_str()).style(
                Style::new()
                    .fg(ctx.state.colors.selected_fg)
                    .add_modifier(Modifier::UNDERLINED),
            ),
        ])
        .render(link_area, buf);
    }
}

impl EventHandler for RulesView {
    fn process_event(&self, evt: &Event, ctx: &CustomWidgetContext) -> bool {
        let Event::Key(key) = evt else {
            return false;
        };

        if key.kind != KeyEventKind::Press {
            return false;
        }

        if !self.is_editing() {
            if key.code == KeyCode::Char('e') && ctx.state.feed.is_admin {
                self.start_editing(&ctx.state.feed.rules_link);
                return true;
            }
            return false;
        }

        match key.code {
            KeyCode::Esc => self.stop_editing(),
            KeyCode::Enter => {
                let url = self.link_state.borrow().value.clone();
                self.dispatcher.dispatch(Action::SaveRulesLink(url));
                self.stop_editing();
            }
            KeyCode::Backspace => self.link_state.borrow_mut().pop(),
            KeyCode::Char(c) => self.link_state.borrow_mut().push(c),
            _ => {}
        }

        true
    }
}

#[cfg(test)]
#[path = "./rules_tests.rs"]
mod tests;
