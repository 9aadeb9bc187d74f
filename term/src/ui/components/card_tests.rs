use chrono::NaiveDate;
use insta::assert_snapshot;
use ratatui::{Terminal, backend::TestBackend};

use crate::store::state::State;

use super::*;

fn item(kind: ContentKind) -> ContentItem {
    ContentItem {
        id: "1".to_string(),
        title: "Открытие сервера".to_string(),
        content: "Сервер открыт".to_string(),
        date: NaiveDate::from_ymd_opt(2024, 11, 24).unwrap(),
        kind,
    }
}

fn render(item: &ContentItem, selected: bool) -> Terminal<TestBackend> {
    let mut terminal =
        Terminal::new(TestBackend::new(50, CARD_HEIGHT)).unwrap();
    let state = State::default();

    terminal
        .draw(|frame| {
            let ctx = CustomWidgetContext {
                state: &state,
                app_area: frame.area(),
            };

            ItemCard::new(item, selected).render(
                frame.area(),
                frame.buffer_mut(),
                &ctx,
            );
        })
        .unwrap();

    terminal
}

#[test]
fn renders_news_card() {
    let item = item(ContentKind::News);
    let terminal = render(&item, false);
    assert_snapshot!(terminal.backend());
}

#[test]
fn renders_custom_label_badge() {
    let item = item(ContentKind::custom("Турниры"));
    let terminal = render(&item, false);
    assert_snapshot!(terminal.backend());
}

#[test]
fn selected_card_uses_thick_border() {
    let item = item(ContentKind::Update);
    let terminal = render(&item, true);

    assert_eq!(
        terminal.backend().buffer()[(0, 0)].fg,
        State::default().colors.selected_fg
    );
    assert_snapshot!(terminal.backend());
}
