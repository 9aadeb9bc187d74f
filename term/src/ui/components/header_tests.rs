use insta::assert_snapshot;
use ratatui::{Terminal, backend::TestBackend};

use crate::store::state::State;

use super::*;

#[test]
fn renders_header_component() {
    let header = Header::new("Правила сервера");
    let mut terminal = Terminal::new(TestBackend::new(40, 1)).unwrap();
    let state = State::default();

    terminal
        .draw(|frame| {
            let ctx = CustomWidgetContext {
                state: &state,
                app_area: frame.area(),
            };

            header.render(frame.area(), frame.buffer_mut(), &ctx);
        })
        .unwrap();

    let buffer = terminal.backend().buffer();
    assert_eq!(buffer[(0, 0)].fg, state.colors.header_text);
    assert!(buffer[(0, 0)].modifier.contains(Modifier::BOLD));
    assert_snapshot!(terminal.backend());
}
