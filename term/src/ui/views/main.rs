use std::{collections::HashMap, rc::Rc};

use itertools::Itertools;
use jailfeed_lib::filter::Filter;
use ratatui::{
    crossterm::event::{Event as CrossTermEvent, KeyCode, KeyEventKind},
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, BorderType, Padding, Paragraph, Widget},
};
use strum::IntoEnumIterator;

use crate::{
    store::{
        Dispatcher,
        action::Action,
        state::State,
        toast::{Toast, ToastKind},
    },
    ui::components::{footer::InfoFooter, tabs::FilterTabs},
};

use super::{
    feed::FeedListView,
    rules::RulesView,
    traits::{
        CustomWidget, CustomWidgetContext, CustomWidgetRef, EventHandler, View,
        ViewID,
    },
};

const DEFAULT_PADDING: Padding = Padding::horizontal(2);
const LOGO: &str = "[JAIL] Тюрьма";
const LOGO_SUBTITLE: &str = "Заточение";
const ADMIN_ROLE: &str = "Админ";
const VIEWER_ROLE: &str = "Гость";
const MAIN_LEGEND: &str = "(q) выход | (1-4 ←→) вкладки | (t) тема";

pub struct MainView {
    dispatcher: Rc<dyn Dispatcher>,
    sub_views: HashMap<ViewID, Box<dyn View>>,
}

impl MainView {
    pub fn new(dispatcher: Rc<dyn Dispatcher>) -> Self {
        let mut sub_views: HashMap<ViewID, Box<dyn View>> = HashMap::new();

        let feed = Box::new(FeedListView::new(Rc::clone(&dispatcher)));
        let rules = Box::new(RulesView::new(Rc::clone(&dispatcher)));

        sub_views.insert(feed.id(), feed);
        sub_views.insert(rules.id(), rules);

        Self {
            dispatcher,
            sub_views,
        }
    }

    fn active_view_id(state: &State) -> ViewID {
        if state.feed.active_filter.shows_items() {
            ViewID::Feed
        } else {
            ViewID::Rules
        }
    }

    fn active_view(&self, state: &State) -> Option<&dyn View> {
        self.sub_views
            .get(&Self::active_view_id(state))
            .map(|v| v.as_ref())
    }

    fn render_buffer_bg(
        &self,
        area: Rect,
        buf: &mut ratatui::prelude::Buffer,
        state: &State,
    ) {
        Block::new()
            .style(Style::new().bg(state.colors.buffer_bg))
            .render(area, buf);
    }

    fn render_top(
        &self,
        area: Rect,
        buf: &mut ratatui::prelude::Buffer,
        ctx: &CustomWidgetContext,
    ) {
        let colors = &ctx.state.colors;
        let [logo_area, nav_area, role_area] = Layout::horizontal([
            Constraint::Length(21),
            Constraint::Min(0),
            Constraint::Length(11),
        ])
        .areas(area);

        let boxed = |title_area: Rect, buf: &mut ratatui::prelude::Buffer| {
            let block = Block::bordered()
                .border_style(Style::new().fg(colors.border_color))
                .border_type(BorderType::Double)
                .padding(DEFAULT_PADDING);
            let inner = block.inner(title_area);
            block.render(title_area, buf);
            inner
        };

        let logo_inner = boxed(logo_area, buf);
        Paragraph::new(vec![
            Line::from(LOGO).style(
                Style::new()
                    .fg(colors.header_text)
                    .add_modifier(Modifier::BOLD),
            ),
            Line::from(LOGO_SUBTITLE).style(Style::new().fg(colors.muted)),
        ])
        .render(logo_inner, buf);

        let nav_block = Block::default().padding(Padding::horizontal(1));
        let nav_inner = nav_block.inner(nav_area);
        let [tabs_area, _, toast_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(nav_inner);

        FilterTabs::new(ctx.state.feed.active_filter)
            .render(tabs_area, buf, ctx);

        if let Some(toast) = ctx.state.toast.as_ref() {
            self.render_toast(toast, toast_area, buf, ctx);
        }

        let role_inner = boxed(role_area, buf);
        let role = if ctx.state.feed.is_admin {
            ADMIN_ROLE
        } else {
            VIEWER_ROLE
        };
        Paragraph::new(role)
            .style(Style::new().fg(colors.text))
            .render(role_inner, buf);
    }

    fn render_toast(
        &self,
        toast: &Toast,
        area: Rect,
        buf: &mut ratatui::prelude::Buffer,
        ctx: &CustomWidgetContext,
    ) {
        let color = match toast.kind {
            ToastKind::Success => ctx.state.colors.success,
            ToastKind::Error => ctx.state.colors.error,
        };

        Paragraph::new(toast.message.as_str())
            .style(Style::new().fg(color).add_modifier(Modifier::BOLD))
            .render(area, buf);
    }

    fn render_middle_view(
        &self,
        view: &dyn View,
        area: Rect,
        buf: &mut ratatui::prelude::Buffer,
        ctx: &CustomWidgetContext,
    ) {
        let block: Block<'_> = Block::bordered()
            .title(format!(" {} ", ctx.state.feed.active_filter.title()))
            .border_style(Style::new().fg(ctx.state.colors.border_color))
            .border_type(BorderType::Plain)
            .padding(DEFAULT_PADDING);
        let inner_area = block.inner(area);
        block.render(area, buf);
        view.render_ref(inner_area, buf, ctx);
    }

    fn render_footer(
        &self,
        legend: String,
        override_legend: bool,
        area: Rect,
        buf: &mut ratatui::prelude::Buffer,
        ctx: &CustomWidgetContext,
    ) {
        let info = if override_legend {
            legend
        } else {
            [MAIN_LEGEND.to_string(), legend]
                .into_iter()
                .filter(|s| !s.is_empty())
                .join(" | ")
        };

        InfoFooter::new(info).render(area, buf, ctx);
    }
}

impl View for MainView {
    fn id(&self) -> ViewID {
        ViewID::Main
    }
}

impl CustomWidgetRef for MainView {
    fn render_ref(
        &self,
        area: Rect,
        buf: &mut ratatui::prelude::Buffer,
        ctx: &CustomWidgetContext,
    ) {
        // consists of 3 vertical rectangles (top, middle, bottom)
        let [top_area, middle_area, footer_area] = Layout::vertical([
            Constraint::Length(4),
            Constraint::Min(8),
            Constraint::Length(3),
        ])
        .areas(area);

        self.render_buffer_bg(area, buf, ctx.state);
        self.render_top(top_area, buf, ctx);

        if let Some(view) = self.active_view(ctx.state) {
            let legend = view.legend(ctx.state);
            let override_legend = view.override_main_legend(ctx.state);
            self.render_footer(legend, override_legend, footer_area, buf, ctx);
            // last so popovers layer on top of the footer
            self.render_middle_view(view, middle_area, buf, ctx);
        }
    }
}

impl EventHandler for MainView {
    fn process_event(
        &self,
        evt: &CrossTermEvent,
        ctx: &CustomWidgetContext,
    ) -> bool {
        let mut handled = self
            .active_view(ctx.state)
            .is_some_and(|view| view.process_event(evt, ctx));

        if !handled
            && let CrossTermEvent::Key(key) = evt
            && key.kind == KeyEventKind::Press
        {
            match key.code {
                KeyCode::Char(c @ '1'..='4') => {
                    let idx = c as usize - '1' as usize;
                    if let Some(filter) = Filter::iter().nth(idx) {
                        self.dispatcher.dispatch(Action::SelectFilter(filter));
                        handled = true;
                    }
                }
                KeyCode::Left => {
                    self.dispatcher.dispatch(Action::PreviousFilter);
                    handled = true;
                }
                KeyCode::Right => {
                    self.dispatcher.dispatch(Action::NextFilter);
                    handled = true;
                }
                KeyCode::Char('t') => {
                    self.dispatcher.dispatch(Action::NextTheme);
                    handled = true;
                }
                _ => {}
            }
        }

        handled
    }
}

#[cfg(test)]
#[path = "./main_tests.rs"]
mod tests;
