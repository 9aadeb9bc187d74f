use ratatui::{crossterm::event::Event as CrossTermEvent, layout::Rect};
use strum::Display;

use crate::store::state::State;

/// Identifies each view in the UI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum ViewID {
    Main,
    Feed,
    Compose,
    Rules,
}

pub trait EventHandler {
    fn process_event(
        &self,
        evt: &CrossTermEvent,
        ctx: &CustomWidgetContext,
    ) -> bool;
}

pub struct CustomWidgetContext<'a> {
    // app state
    pub state: &'a State,
    // total area for the entire application, used for popover placement
    pub app_area: Rect,
}

pub trait CustomWidget {
    fn render(
        self,
        area: Rect,
        buf: &mut ratatui::prelude::Buffer,
        ctx: &CustomWidgetContext,
    );
}

pub trait CustomWidgetRef {
    fn render_ref(
        &self,
        area: Rect,
        buf: &mut ratatui::prelude::Buffer,
        ctx: &CustomWidgetContext,
    );
}

pub trait CustomStatefulWidget {
    type State;

    fn render(
        self,
        area: Rect,
        buf: &mut ratatui::prelude::Buffer,
        state: &mut Self::State,
        ctx: &CustomWidgetContext,
    );
}

pub trait View: EventHandler + CustomWidgetRef {
    fn id(&self) -> ViewID;
    fn legend(&self, _state: &State) -> String {
        String::new()
    }
    fn override_main_legend(&self, _state: &State) -> bool {
        false
    }
}
