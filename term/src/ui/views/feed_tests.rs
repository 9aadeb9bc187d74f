use chrono::NaiveDate;
use insta::assert_snapshot;
use jailfeed_lib::{
    filter::Filter,
    item::{ContentItem, ContentKind},
};
use mockall::predicate::eq;
use ratatui::{
    Terminal,
    backend::TestBackend,
    crossterm::event::{KeyEvent, KeyModifiers},
};

use crate::{store::MockDispatcher, ui::views::compose::COMPOSE_TITLE};

use super::*;

fn item(id: &str, kind: ContentKind) -> ContentItem {
    ContentItem {
        id: id.to_string(),
        title: format!("Заголовок {id}"),
        content: format!("Текст {id}"),
        date: NaiveDate::from_ymd_opt(2024, 11, 24).unwrap(),
        kind,
    }
}

fn state(filter: Filter, is_admin: bool) -> State {
    let mut state = State::default();
    state.feed.active_filter = filter;
    state.feed.is_admin = is_admin;
    state.feed.items = vec![
        item("1", ContentKind::News),
        item("2", ContentKind::Update),
    ];
    state
}

fn key(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn ctx(state: &State) -> CustomWidgetContext<'_> {
    CustomWidgetContext {
        state,
        app_area: Rect::new(0, 0, 80, 40),
    }
}

fn render(view: &FeedListView, state: &State) -> Terminal<TestBackend> {
    let mut terminal = Terminal::new(TestBackend::new(80, 40)).unwrap();
    terminal
        .draw(|frame| {
            let ctx = CustomWidgetContext {
                state,
                app_area: frame.area(),
            };
            view.render_ref(frame.area(), frame.buffer_mut(), &ctx);
        })
        .unwrap();
    terminal
}

#[test]
fn renders_banner_and_cards_on_home() {
    let view = FeedListView::new(Rc::new(MockDispatcher::new()));
    let terminal = render(&view, &state(Filter::Home, true));
    assert_snapshot!(terminal.backend());
}

#[test]
fn hides_banner_on_other_tabs() {
    let view = FeedListView::new(Rc::new(MockDispatcher::new()));
    let terminal = render(&view, &state(Filter::News, true));
    assert_snapshot!(terminal.backend());
}

#[test]
fn renders_empty_state() {
    let view = FeedListView::new(Rc::new(MockDispatcher::new()));
    let mut state = state(Filter::Updates, true);
    state.feed.items.clear();

    let terminal = render(&view, &state);
    assert_snapshot!(terminal.backend());
}

#[test]
fn deletes_selected_item() {
    let mut dispatcher = MockDispatcher::new();
    dispatcher
        .expect_dispatch()
        .with(eq(Action::DeleteItem("2".to_string())))
        .times(1)
        .return_const(());

    let view = FeedListView::new(Rc::new(dispatcher));
    let state = state(Filter::Home, true);
    let ctx = ctx(&state);

    assert!(view.process_event(&key(KeyCode::Char('j')), &ctx));
    // selection stops at the last item
    assert!(view.process_event(&key(KeyCode::Down), &ctx));
    assert!(view.process_event(&key(KeyCode::Char('d')), &ctx));
}

#[test]
fn selection_moves_back_up() {
    let mut dispatcher = MockDispatcher::new();
    dispatcher
        .expect_dispatch()
        .with(eq(Action::DeleteItem("1".to_string())))
        .times(1)
        .return_const(());

    let view = FeedListView::new(Rc::new(dispatcher));
    let state = state(Filter::Home, true);
    let ctx = ctx(&state);

    view.process_event(&key(KeyCode::Down), &ctx);
    view.process_event(&key(KeyCode::Char('k')), &ctx);
    view.process_event(&key(KeyCode::Up), &ctx);
    view.process_event(&key(KeyCode::Char('d')), &ctx);
}

#[test]
fn viewer_cannot_compose_or_delete() {
    let view = FeedListView::new(Rc::new(MockDispatcher::new()));
    let state = state(Filter::Home, false);
    let ctx = ctx(&state);

    assert!(!view.process_event(&key(KeyCode::Char('a')), &ctx));
    assert!(!view.process_event(&key(KeyCode::Char('d')), &ctx));
    assert_eq!(view.legend(&state), "(↑↓) выбор");
}

#[test]
fn compose_form_captures_input_until_closed() {
    let view = FeedListView::new(Rc::new(MockDispatcher::new()));
    let state = state(Filter::Home, true);
    let ctx = ctx(&state);

    assert!(view.process_event(&key(KeyCode::Char('a')), &ctx));
    assert!(view.override_main_legend(&state));
    assert!(
        render(&view, &state)
            .backend()
            .to_string()
            .contains(COMPOSE_TITLE)
    );

    // 'd' is typed into the form, not treated as delete
    assert!(view.process_event(&key(KeyCode::Char('d')), &ctx));

    assert!(view.process_event(&key(KeyCode::Esc), &ctx));
    assert!(!view.override_main_legend(&state));
    assert!(
        !render(&view, &state)
            .backend()
            .to_string()
            .contains(COMPOSE_TITLE)
    );
}
