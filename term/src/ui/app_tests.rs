use std::{collections::VecDeque, time::Instant};

use jailfeed_lib::{config::Config, filter::Filter};
use ratatui::{
    backend::TestBackend,
    crossterm::event::{KeyEvent, KeyModifiers},
};

use crate::{
    store::{
        reducer::StoreReducer,
        toast::{Toast, ToastKind},
    },
    ui::colors::Theme,
};

use super::*;

fn key(code: KeyCode) -> CrossTermEvent {
    CrossTermEvent::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn scripted(events: Vec<Option<CrossTermEvent>>) -> Box<MockEventSource> {
    let mut queue: VecDeque<Option<CrossTermEvent>> = events.into();
    let mut source = MockEventSource::new();
    source
        .expect_next_event()
        .returning(move |_| Ok(queue.pop_front().flatten()));
    Box::new(source)
}

fn setup_with(
    events: Vec<Option<CrossTermEvent>>,
    toast: Option<Toast>,
) -> (Rc<Store>, App<TestBackend>) {
    let config = Config::default();
    let reducer = StoreReducer::from_config(&config).unwrap();
    let mut state = State::new(
        Theme::default(),
        true,
        config.label_policy(),
        reducer.view(),
    );
    state.toast = toast;
    let store = Rc::new(Store::new(state, reducer.boxed()));
    let terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
    let app = App::new(terminal, Rc::clone(&store), scripted(events));
    (store, app)
}

fn setup(events: Vec<Option<CrossTermEvent>>) -> (Rc<Store>, App<TestBackend>) {
    setup_with(events, None)
}

#[test]
fn draws_feed_and_quits_on_q() {
    let (_store, app) = setup(vec![None, Some(key(KeyCode::Char('q')))]);

    app.launch().unwrap();

    let rendered = app.terminal.borrow().backend().to_string();
    assert!(rendered.contains("[JAIL] Тюрьма"));
    assert!(rendered.contains("Открытие сервера [JAIL] Тюрьма"));
}

#[test]
fn keys_dispatch_through_store() {
    let (store, app) = setup(vec![
        Some(key(KeyCode::Char('d'))),
        Some(key(KeyCode::Char('3'))),
        Some(key(KeyCode::Char('q'))),
    ]);

    app.launch().unwrap();

    let state = store.get_state();
    assert_eq!(state.feed.active_filter, Filter::Updates);
    assert_eq!(state.feed.items.len(), 1);
    assert_eq!(
        state.toast,
        Some(Toast::new(ToastKind::Success, "Запись удалена"))
    );
}

#[test]
fn q_is_typed_into_compose_form() {
    let (store, app) = setup(vec![
        Some(key(KeyCode::Char('a'))),
        Some(key(KeyCode::Tab)),
        Some(key(KeyCode::Char('q'))),
        Some(key(KeyCode::Esc)),
        Some(key(KeyCode::Char('q'))),
    ]);

    app.launch().unwrap();

    assert_eq!(store.get_state().feed.items.len(), 2);
}

#[test]
fn ctrl_c_always_quits() {
    let (_store, app) = setup(vec![
        Some(key(KeyCode::Char('a'))),
        Some(CrossTermEvent::Key(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL,
        ))),
    ]);

    app.launch().unwrap();
}

#[test]
fn expired_toast_is_cleared() {
    let mut expired = Toast::new(ToastKind::Success, "Запись удалена");
    expired.shown_at = Instant::now()
        .checked_sub(TOAST_TTL + Duration::from_secs(1))
        .unwrap();

    let (store, app) =
        setup_with(vec![Some(key(KeyCode::Char('q')))], Some(expired));

    app.launch().unwrap();

    assert!(store.get_state().toast.is_none());
    assert!(
        !app.terminal
            .borrow()
            .backend()
            .to_string()
            .contains("Запись удалена")
    );
}
