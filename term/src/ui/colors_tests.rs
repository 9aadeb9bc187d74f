use super::*;

#[test]
fn from_string_parses_known_themes() {
    assert_eq!(Theme::from_string("Blue"), Theme::Blue);
    assert_eq!(Theme::from_string("Emerald"), Theme::Emerald);
    assert_eq!(Theme::from_string("Indigo"), Theme::Indigo);
    assert_eq!(Theme::from_string("Red"), Theme::Red);
}

#[test]
fn from_string_falls_back_to_blue() {
    assert_eq!(Theme::from_string("Purple"), Theme::Blue);
    assert_eq!(Theme::from_string(""), Theme::Blue);
}

#[test]
fn next_cycles_through_all_themes() {
    assert_eq!(Theme::Blue.next(), Theme::Emerald);
    assert_eq!(Theme::Emerald.next(), Theme::Indigo);
    assert_eq!(Theme::Indigo.next(), Theme::Red);
    assert_eq!(Theme::Red.next(), Theme::Blue);
}

#[test]
fn display_matches_config_names() {
    assert_eq!(Theme::Emerald.to_string(), "Emerald");
}

#[test]
fn colors_use_basic_fallbacks_without_true_color() {
    let colors = Colors::new(Theme::Red.to_palette(false), false);
    assert_eq!(colors.buffer_bg, Color::Black);
    assert_eq!(colors.border_color, Color::LightRed);
    assert_eq!(colors.success, Color::Green);
}

#[test]
fn colors_use_tailwind_with_true_color() {
    let colors = Colors::new(Theme::Emerald.to_palette(true), true);
    assert_eq!(colors.border_color, tailwind::EMERALD.c400);
    assert_eq!(colors.buffer_bg, tailwind::SLATE.c950);
}
