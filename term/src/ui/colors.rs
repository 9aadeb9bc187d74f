//! Theme and color palette definitions for the terminal UI.

use ratatui::style::{Color, palette::tailwind};
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

/// Color palette derived from the current theme.
#[derive(Clone, Debug, PartialEq)]
pub struct Colors {
    pub buffer_bg: Color,
    pub tab_bg: Color,
    pub selected_fg: Color,
    pub error: Color,
    pub success: Color,
    pub header_text: Color,
    pub text: Color,
    pub border_color: Color,
    pub muted: Color,
    pub gray: Color,
    pub input_editing: Color,
    pub news_badge: Color,
    pub update_badge: Color,
    pub custom_badge: Color,
}

impl Colors {
    /// Creates a color palette from the given tailwind palette, falling back
    /// to basic colors if true color is not supported.
    pub fn new(color: &tailwind::Palette, true_color_enabled: bool) -> Self {
        if true_color_enabled {
            Self {
                buffer_bg: tailwind::SLATE.c950,
                tab_bg: color.c900,
                selected_fg: color.c400,
                error: tailwind::RED.c600,
                success: tailwind::GREEN.c500,
                header_text: color.c600,
                text: tailwind::SLATE.c200,
                border_color: color.c400,
                muted: tailwind::SLATE.c500,
                gray: tailwind::SLATE.c800,
                input_editing: tailwind::AMBER.c600,
                news_badge: tailwind::SKY.c500,
                update_badge: tailwind::ORANGE.c500,
                custom_badge: tailwind::VIOLET.c400,
            }
        } else {
            Self {
                buffer_bg: Color::Black,
                tab_bg: color.c900,
                selected_fg: color.c400,
                error: Color::Red,
                success: Color::Green,
                header_text: color.c400,
                text: Color::White,
                border_color: color.c400,
                muted: Color::Gray,
                gray: Color::DarkGray,
                input_editing: Color::LightYellow,
                news_badge: Color::LightBlue,
                update_badge: Color::Yellow,
                custom_badge: Color::LightMagenta,
            }
        }
    }
}

/// Available color themes for the application.
#[derive(
    Debug, Default, Eq, PartialEq, Copy, Clone, Display, EnumIter, EnumString,
)]
pub enum Theme {
    #[default]
    Blue,
    Emerald,
    Indigo,
    Red,
}

const fn basic_palette(light: Color, dark: Color) -> tailwind::Palette {
    tailwind::Palette {
        c50: light,
        c100: light,
        c200: light,
        c300: light,
        c400: light,
        c500: dark,
        c600: dark,
        c700: dark,
        c800: dark,
        c900: dark,
        c950: dark,
    }
}

// Fallback palettes for terminals without true color support.
const BASIC_BLUE_PALETTE: tailwind::Palette =
    basic_palette(Color::LightCyan, Color::Cyan);
const BASIC_RED_PALETTE: tailwind::Palette =
    basic_palette(Color::LightRed, Color::Red);
const BASIC_GREEN_PALETTE: tailwind::Palette =
    basic_palette(Color::LightGreen, Color::Green);
const BASIC_MAGENTA_PALETTE: tailwind::Palette =
    basic_palette(Color::LightMagenta, Color::Magenta);

impl Theme {
    /// Parses a theme from its name, defaulting to Blue.
    pub fn from_string(value: &str) -> Theme {
        value.parse().unwrap_or_default()
    }

    /// Next theme in declaration order, wrapping at the end.
    pub fn next(self) -> Theme {
        Theme::iter()
            .cycle()
            .skip_while(|t| *t != self)
            .nth(1)
            .unwrap_or_default()
    }

    /// Returns the tailwind palette for this theme, using basic colors if
    /// true color is not supported.
    pub fn to_palette(
        self,
        true_color_enabled: bool,
    ) -> &'static tailwind::Palette {
        if true_color_enabled {
            match self {
                Theme::Blue => &tailwind::BLUE,
                Theme::Emerald => &tailwind::EMERALD,
                Theme::Indigo => &tailwind::INDIGO,
                Theme::Red => &tailwind::RED,
            }
        } else {
            match self {
                Theme::Blue => &BASIC_BLUE_PALETTE,
                Theme::Red => &BASIC_RED_PALETTE,
                Theme::Indigo => &BASIC_MAGENTA_PALETTE,
                Theme::Emerald => &BASIC_GREEN_PALETTE,
            }
        }
    }
}

#[cfg(test)]
#[path = "./colors_tests.rs"]
mod tests;
