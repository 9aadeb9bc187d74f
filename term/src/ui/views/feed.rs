//! Scrollable list of feed item cards.

use std::{cell::RefCell, rc::Rc};

use indoc::indoc;
use jailfeed_lib::filter::Filter;
use ratatui::{
    crossterm::event::{Event, KeyCode, KeyEventKind},
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Padding, Paragraph, Widget, Wrap},
};

use crate::{
    store::{Dispatcher, action::Action, state::State},
    ui::components::card::{CARD_HEIGHT, ItemCard},
};

use super::{
    compose::ComposeView,
    traits::{
        CustomWidget, CustomWidgetContext, CustomWidgetRef, EventHandler, View,
        ViewID,
    },
};

pub const EMPTY_FEED: &str = "Записей пока нет";

const BANNER_BADGE: &str = "В34 Онлайн";
const BANNER_HEIGHT: u16 = 6;
const BANNER: &str = indoc! {"
    Добро пожаловать на [JAIL] Тюрьма заточение
    Следи за последними новостями, обновлениями и событиями на нашем сервере.
    Присоединяйся к игровому сообществу!"};

/// Lists the items visible under the active filter. Owns the compose form
/// so that opening it is local to the list.
pub struct FeedListView {
    dispatcher: Rc<dyn Dispatcher>,
    selected: RefCell<usize>,
    compose: ComposeView,
}

impl FeedListView {
    pub fn new(dispatcher: Rc<dyn Dispatcher>) -> Self {
        Self {
            compose: ComposeView::new(Rc::clone(&dispatcher)),
            dispatcher,
            selected: RefCell::new(0),
        }
    }

    // item count can shrink between frames
    fn clamped_selection(&self, state: &State) -> usize {
        let len = state.feed.items.len();
        let selected = *self.selected.borrow();
        if len == 0 { 0 } else { selected.min(len - 1) }
    }

    fn select_next(&self, state: &State) {
        let len = state.feed.items.len();
        if len == 0 {
            return;
        }
        let next = (self.clamped_selection(state) + 1).min(len - 1);
        *self.selected.borrow_mut() = next;
    }

    fn select_previous(&self, state: &State) {
        let prev = self.clamped_selection(state).saturating_sub(1);
        *self.selected.borrow_mut() = prev;
    }

    fn delete_selected(&self, state: &State) {
        let idx = self.clamped_selection(state);
        if let Some(item) = state.feed.items.get(idx) {
            self.dispatcher.dispatch(Action::DeleteItem(item.id.clone()));
        }
    }

    fn render_banner(
        &self,
        area: Rect,
        buf: &mut ratatui::prelude::Buffer,
        ctx: &CustomWidgetContext,
    ) {
        let colors = &ctx.state.colors;
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::new().fg(colors.border_color))
            .padding(Padding::horizontal(1));
        let inner = block.inner(area);
        block.render(area, buf);

        let [badge_area, text_area] =
            Layout::vertical([Constraint::Length(1), Constraint::Min(1)])
                .areas(inner);

        Line::from(Span::from(format!(" {BANNER_BADGE} ")).style(
            Style::new()
                .fg(colors.buffer_bg)
                .bg(colors.border_color)
                .add_modifier(Modifier::BOLD),
        ))
        .render(badge_area, buf);

        let mut lines = BANNER.lines();
        let mut text = Vec::new();
        if let Some(heading) = lines.next() {
            text.push(Line::from(heading).style(
                Style::new()
                    .fg(colors.header_text)
                    .add_modifier(Modifier::BOLD),
            ));
        }
        text.extend(
            lines.map(|l| Line::from(l).style(Style::new().fg(colors.muted))),
        );

        Paragraph::new(text)
            .wrap(Wrap { trim: true })
            .render(text_area, buf);
    }

    fn render_empty(
        &self,
        area: Rect,
        buf: &mut ratatui::prelude::Buffer,
        ctx: &CustomWidgetContext,
    ) {
        let [_, msg_area] =
            Layout::vertical([Constraint::Length(1), Constraint::Length(1)])
                .areas(area);
        Paragraph::new(EMPTY_FEED)
            .style(Style::new().fg(ctx.state.colors.muted))
            .centered()
            .render(msg_area, buf);
    }

    fn render_cards(
        &self,
        area: Rect,
        buf: &mut ratatui::prelude::Buffer,
        ctx: &CustomWidgetContext,
    ) {
        let items = &ctx.state.feed.items;
        let selected = self.clamped_selection(ctx.state);
        let fits = usize::from((area.height / CARD_HEIGHT).max(1));
        let offset = (selected + 1).saturating_sub(fits);

        let mut y = area.y;
        for (idx, item) in items.iter().enumerate().skip(offset).take(fits) {
            let card_area = Rect {
                x: area.x,
                y,
                width: area.width,
                height: CARD_HEIGHT.min(area.bottom().saturating_sub(y)),
            };
            ItemCard::new(item, idx == selected).render(card_area, buf, ctx);
            y = y.saturating_add(CARD_HEIGHT);
        }
    }
}

impl View for FeedListView {
    fn id(&self) -> ViewID {
        ViewID::Feed
    }

    fn legend(&self, state: &State) -> String {
        if self.compose.is_open() {
            return self.compose.legend(state);
        }

        if state.feed.is_admin {
            "(↑↓) выбор | (a) добавить | (d) удалить".to_string()
        } else {
            "(↑↓) выбор".to_string()
        }
    }

    fn override_main_legend(&self, state: &State) -> bool {
        self.compose.is_open() && self.compose.override_main_legend(state)
    }
}

impl CustomWidgetRef for FeedListView {
    fn render_ref(
        &self,
        area: Rect,
        buf: &mut ratatui::prelude::Buffer,
        ctx: &CustomWidgetContext,
    ) {
        let banner_height = if ctx.state.feed.active_filter == Filter::Home {
            BANNER_HEIGHT
        } else {
            0
        };

        let [banner_area, list_area] = Layout::vertical([
            Constraint::Length(banner_height),
            Constraint::Min(0),
        ])
        .areas(area);

        if banner_height > 0 {
            self.render_banner(banner_area, buf, ctx);
        }

        if ctx.state.feed.items.is_empty() {
            self.render_empty(list_area, buf, ctx);
        } else {
            self.render_cards(list_area, buf, ctx);
        }

        // popover draws over the whole app area
        self.compose.render_ref(area, buf, ctx);
    }
}

impl EventHandler for FeedListView {
    fn process_event(&self, evt: &Event, ctx: &CustomWidgetContext) -> bool {
        if self.compose.process_event(evt, ctx) {
            return true;
        }

        let mut handled = false;

        if let Event::Key(key) = evt
            && key.kind == KeyEventKind::Press
        {
            let is_admin = ctx.state.feed.is_admin;

            match key.code {
                KeyCode::Down | KeyCode::Char('j') => {
                    self.select_next(ctx.state);
                    handled = true;
                }
                KeyCode::Up | KeyCode::Char('k') => {
                    self.select_previous(ctx.state);
                    handled = true;
                }
                KeyCode::Char('a') if is_admin => {
                    self.compose.open();
                    handled = true;
                }
                KeyCode::Char('d') if is_admin => {
                    self.delete_selected(ctx.state);
                    handled = true;
                }
                _ => {}
            }
        }

        handled
    }
}

#[cfg(test)]
#[path = "./feed_tests.rs"]
mod tests;
