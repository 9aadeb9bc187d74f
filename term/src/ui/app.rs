use color_eyre::eyre::{Context, Result, eyre};
use log::*;
#[cfg(test)]
use mockall::automock;
use ratatui::{
    Terminal,
    backend::Backend,
    crossterm::{
        event::{
            self, DisableMouseCapture, EnableMouseCapture,
            Event as CrossTermEvent, KeyCode, KeyEventKind, KeyModifiers,
        },
        execute,
        terminal::{
            EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode,
            enable_raw_mode,
        },
    },
    layout::Rect,
    prelude::CrosstermBackend,
};
use std::{
    cell::RefCell,
    io::{self, Stdout},
    rc::Rc,
    time::Duration,
};

use crate::store::{
    Dispatcher, StateGetter, Store, action::Action, state::State,
    toast::TOAST_TTL,
};

use super::views::{
    main::MainView,
    traits::{CustomWidgetContext, View},
};

/// How long to wait for input before redrawing
const POLL_INTERVAL: Duration = Duration::from_millis(60);

/// Source of terminal input events
#[cfg_attr(test, automock)]
pub trait EventSource {
    /// Returns the next event, or None if nothing arrived within `timeout`.
    fn next_event(&self, timeout: Duration) -> Result<Option<CrossTermEvent>>;
}

/// Reads events from the real terminal
pub struct CrosstermEvents;

impl EventSource for CrosstermEvents {
    fn next_event(&self, timeout: Duration) -> Result<Option<CrossTermEvent>> {
        if event::poll(timeout)? {
            Ok(Some(event::read()?))
        } else {
            Ok(None)
        }
    }
}

pub struct App<B: Backend> {
    terminal: RefCell<Terminal<B>>,
    store: Rc<Store>,
    events: Box<dyn EventSource>,
    main_view: Box<dyn View>,
}

/// Puts the terminal in raw mode on the alternate screen.
pub fn create_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode().wrap_err("failed to enter raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .wrap_err("failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend).wrap_err("failed to create terminal")
}

/// Undoes everything `create_terminal` set up.
pub fn restore_terminal() -> Result<()> {
    disable_raw_mode().wrap_err("failed to leave raw mode")?;
    execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture)
        .wrap_err("failed to leave alternate screen")?;
    execute!(io::stdout(), ratatui::crossterm::cursor::Show)
        .wrap_err("failed to show cursor")
}

impl<B: Backend> App<B> {
    pub fn new(
        terminal: Terminal<B>,
        store: Rc<Store>,
        events: Box<dyn EventSource>,
    ) -> Self {
        Self {
            terminal: RefCell::new(terminal),
            main_view: Box::new(MainView::new(
                Rc::clone(&store) as Rc<dyn Dispatcher>
            )),
            store,
            events,
        }
    }

    /// Runs until the user quits.
    pub fn launch(&self) -> Result<()> {
        loop {
            let state = self.store.get_state();

            if let Some(toast) = state.toast.as_ref()
                && toast.is_expired(TOAST_TTL)
            {
                self.store.dispatch(Action::ClearToast);
                continue;
            }

            let area = self.draw(&state)?;

            let ctx = CustomWidgetContext {
                state: &state,
                app_area: area,
            };

            let Some(evt) = self.events.next_event(POLL_INTERVAL)? else {
                continue;
            };

            let handled = self.main_view.process_event(&evt, &ctx);

            if let CrossTermEvent::Key(key) = evt
                && key.kind == KeyEventKind::Press
            {
                match key.code {
                    // views may claim q, e.g. while typing
                    KeyCode::Char('q') if !handled => {
                        info!("quit requested");
                        return Ok(());
                    }
                    // ctrl-c always quits
                    KeyCode::Char('c')
                        if key.modifiers.contains(KeyModifiers::CONTROL) =>
                    {
                        info!("received control-c sequence");
                        return Ok(());
                    }
                    _ => {}
                }
            }
        }
    }

    fn draw(&self, state: &State) -> Result<Rect> {
        let mut terminal = self.terminal.borrow_mut();
        let frame = terminal
            .draw(|f| {
                let ctx = CustomWidgetContext {
                    state,
                    app_area: f.area(),
                };
                self.main_view.render_ref(f.area(), f.buffer_mut(), &ctx)
            })
            .map_err(|e| eyre!("failed to draw frame: {e}"))?;
        Ok(frame.area)
    }
}

#[cfg(test)]
#[path = "./app_tests.rs"]
mod tests;
