//! Popover form for composing a new feed item.

use std::{cell::RefCell, rc::Rc};

use jailfeed_lib::item::{ContentKind, Draft, NEWS_LABEL, UPDATE_LABEL};
use ratatui::{
    crossterm::event::{Event, KeyCode, KeyEventKind},
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};
use strum::{EnumIter, IntoEnumIterator};

use crate::{
    store::{Dispatcher, action::Action, state::State},
    ui::components::{
        input::{Input, InputState},
        popover::Popover,
    },
};

use super::traits::{
    CustomStatefulWidget, CustomWidgetContext, CustomWidgetRef, EventHandler,
    View, ViewID,
};

pub const COMPOSE_TITLE: &str = "Добавить запись";
const KIND_LABEL: &str = "Тип записи";
const CUSTOM_KIND_LABEL: &str = "Свой раздел";
const CUSTOM_LABEL_INPUT: &str = "Название раздела";
const TITLE_INPUT: &str = "Заголовок";
const CONTENT_INPUT: &str = "Содержание";

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter)]
enum KindChoice {
    News,
    Update,
    Custom,
}

impl KindChoice {
    fn label(self) -> &'static str {
        match self {
            KindChoice::News => NEWS_LABEL,
            KindChoice::Update => UPDATE_LABEL,
            KindChoice::Custom => CUSTOM_KIND_LABEL,
        }
    }

    fn step(self, forward: bool) -> Self {
        let all: Vec<KindChoice> = KindChoice::iter().collect();
        let idx = all.iter().position(|k| *k == self).unwrap_or_default();
        let next = if forward {
            (idx + 1) % all.len()
        } else {
            (idx + all.len() - 1) % all.len()
        };
        all[next]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Focus {
    Kind,
    Label,
    Title,
    Content,
}

/// Modal form collecting a draft. Enter dispatches the draft; the form only
/// closes when the draft would be accepted, so rejected input stays editable.
pub struct ComposeView {
    dispatcher: Rc<dyn Dispatcher>,
    open: RefCell<bool>,
    kind: RefCell<KindChoice>,
    focus: RefCell<Focus>,
    label_state: RefCell<InputState>,
    title_state: RefCell<InputState>,
    content_state: RefCell<InputState>,
}

impl ComposeView {
    pub fn new(dispatcher: Rc<dyn Dispatcher>) -> Self {
        Self {
            dispatcher,
            open: RefCell::new(false),
            kind: RefCell::new(KindChoice::News),
            focus: RefCell::new(Focus::Kind),
            label_state: RefCell::new(InputState::default()),
            title_state: RefCell::new(InputState::default()),
            content_state: RefCell::new(InputState::default()),
        }
    }

    pub fn is_open(&self) -> bool {
        *self.open.borrow()
    }

    pub fn open(&self) {
        *self.open.borrow_mut() = true;
    }

    fn close(&self) {
        *self.open.borrow_mut() = false;
        *self.kind.borrow_mut() = KindChoice::News;
        self.set_focus(Focus::Kind);
        self.label_state.borrow_mut().clear();
        self.title_state.borrow_mut().clear();
        self.content_state.borrow_mut().clear();
    }

    fn focus_order(&self) -> Vec<Focus> {
        if *self.kind.borrow() == KindChoice::Custom {
            vec![Focus::Kind, Focus::Label, Focus::Title, Focus::Content]
        } else {
            vec![Focus::Kind, Focus::Title, Focus::Content]
        }
    }

    fn set_focus(&self, focus: Focus) {
        self.label_state.borrow_mut().editing = focus == Focus::Label;
        self.title_state.borrow_mut().editing = focus == Focus::Title;
        self.content_state.borrow_mut().editing = focus == Focus::Content;
        *self.focus.borrow_mut() = focus;
    }

    fn move_focus(&self, forward: bool) {
        let order = self.focus_order();
        let current = *self.focus.borrow();
        let idx = order.iter().position(|f| *f == current).unwrap_or_default();
        let next = if forward {
            (idx + 1) % order.len()
        } else {
            (idx + order.len() - 1) % order.len()
        };
        self.set_focus(order[next]);
    }

    fn focused_input(&self) -> Option<&RefCell<InputState>> {
        match *self.focus.borrow() {
            Focus::Kind => None,
            Focus::Label => Some(&self.label_state),
            Focus::Title => Some(&self.title_state),
            Focus::Content => Some(&self.content_state),
        }
    }

    fn draft(&self) -> Draft {
        let kind = match *self.kind.borrow() {
            KindChoice::News => ContentKind::News,
            KindChoice::Update => ContentKind::Update,
            KindChoice::Custom => {
                ContentKind::custom(self.label_state.borrow().value.clone())
            }
        };

        Draft::new(
            self.title_state.borrow().value.clone(),
            self.content_state.borrow().value.clone(),
            kind,
        )
    }

    fn submit(&self, state: &State) {
        let draft = self.draft();
        let accepted = draft.validate(state.label_policy).is_ok();
        self.dispatcher.dispatch(Action::CreateItem(draft));
        if accepted {
            self.close();
        }
    }

    fn render_kind(
        &self,
        area: Rect,
        buf: &mut ratatui::prelude::Buffer,
        ctx: &CustomWidgetContext,
    ) {
        let focused = *self.focus.borrow() == Focus::Kind;
        let mut style = Style::default().fg(ctx.state.colors.text);
        if focused {
            style = style
                .fg(ctx.state.colors.input_editing)
                .add_modifier(Modifier::BOLD);
        }

        Line::from(vec![
            Span::from(format!("{KIND_LABEL}: "))
                .style(Style::default().fg(ctx.state.colors.muted)),
            Span::from(format!("< {} >", self.kind.borrow().label()))
                .style(style),
        ])
        .render(area, buf);
    }
}

struct ComposeForm<'a>(&'a ComposeView);

impl CustomWidgetRef for ComposeForm<'_> {
    fn render_ref(
        &self,
        area: Rect,
        buf: &mut ratatui::prelude::Buffer,
        ctx: &CustomWidgetContext,
    ) {
        let view = self.0;
        let [kind_area, _, label_area, title_area, content_area, _, hint_area] =
            Layout::vertical([
                Constraint::Length(1), // kind
                Constraint::Length(1), // spacer
                Constraint::Length(1), // custom label
                Constraint::Length(1), // title
                Constraint::Length(1), // content
                Constraint::Min(0),    // spacer
                Constraint::Length(1), // hint
            ])
            .areas(area);

        view.render_kind(kind_area, buf, ctx);

        if *view.kind.borrow() == KindChoice::Custom {
            Input::new(CUSTOM_LABEL_INPUT).render(
                label_area,
                buf,
                &mut view.label_state.borrow_mut(),
                ctx,
            );
        }

        Input::new(TITLE_INPUT).render(
            title_area,
            buf,
            &mut view.title_state.borrow_mut(),
            ctx,
        );
        Input::new(CONTENT_INPUT).render(
            content_area,
            buf,
            &mut view.content_state.borrow_mut(),
            ctx,
        );

        Line::from("(tab) следующее поле | (←→) тип | (enter) добавить")
            .style(Style::default().fg(ctx.state.colors.muted))
            .centered()
            .render(hint_area, buf);
    }
}

impl View for ComposeView {
    fn id(&self) -> ViewID {
        ViewID::Compose
    }

    fn legend(&self, _state: &State) -> String {
        "(esc) закрыть | (tab) следующее поле | (enter) добавить".to_string()
    }

    fn override_main_legend(&self, _state: &State) -> bool {
        true
    }
}

impl CustomWidgetRef for ComposeView {
    fn render_ref(
        &self,
        _area: Rect,
        buf: &mut ratatui::prelude::Buffer,
        ctx: &CustomWidgetContext,
    ) {
        if !self.is_open() {
            return;
        }

        let form = ComposeForm(self);
        Popover::new(&form, COMPOSE_TITLE)
            .size(70, 50)
            .render_ref(ctx.app_area, buf, ctx);
    }
}

impl EventHandler for ComposeView {
    fn process_event(&self, evt: &Event, ctx: &CustomWidgetContext) -> bool {
        if !self.is_open() {
            return false;
        }

        if let Event::Key(key) = evt
            && key.kind == KeyEventKind::Press
        {
            let on_kind = *self.focus.borrow() == Focus::Kind;

            match key.code {
                KeyCode::Esc => self.close(),
                KeyCode::Tab | KeyCode::Down => self.move_focus(true),
                KeyCode::BackTab | KeyCode::Up => self.move_focus(false),
                KeyCode::Left | KeyCode::Right if on_kind => {
                    let next =
                        self.kind.borrow().step(key.code == KeyCode::Right);
                    *self.kind.borrow_mut() = next;
                }
                KeyCode::Enter => self.submit(ctx.state),
                KeyCode::Backspace => {
                    if let Some(input) = self.focused_input() {
                        input.borrow_mut().pop();
                    }
                }
                KeyCode::Char(c) => {
                    if let Some(input) = self.focused_input() {
                        input.borrow_mut().push(c);
                    }
                }
                _ => {}
            }
        }

        // modal: swallow everything while open
        true
    }
}

#[cfg(test)]
#[path = "./compose_tests.rs"]
mod tests;
