//! UI state reducers for toasts and themes.

use crate::{store::state::State, ui::colors::Colors};

/// Removes the current toast.
pub fn clear_toast(state: &mut State) {
    state.toast = None;
}

/// Cycles to the next theme without persisting it to config.
pub fn next_theme(state: &mut State) {
    state.theme = state.theme.next();
    state.colors = Colors::new(
        state.theme.to_palette(state.true_color_enabled),
        state.true_color_enabled,
    );
}
