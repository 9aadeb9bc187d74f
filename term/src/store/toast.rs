//! Transient notifications shown in the header.

use std::{
    cell::RefCell,
    rc::Rc,
    time::{Duration, Instant},
};

use jailfeed_lib::notify::Notifier;

/// How long a toast stays on screen
pub const TOAST_TTL: Duration = Duration::from_secs(4);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

/// A notification emitted by the feed store.
#[derive(Debug, Clone)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
    pub shown_at: Instant,
}

impl Toast {
    pub fn new<S: Into<String>>(kind: ToastKind, message: S) -> Self {
        Self {
            kind,
            message: message.into(),
            shown_at: Instant::now(),
        }
    }

    /// Returns true once the toast has been visible for longer than `ttl`.
    pub fn is_expired(&self, ttl: Duration) -> bool {
        self.shown_at.elapsed() >= ttl
    }
}

impl PartialEq for Toast {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.message == other.message
    }
}

/// Notifier handed to the feed store. Holds the most recent notification
/// until the reducer moves it into state.
#[derive(Debug, Clone, Default)]
pub struct ToastSink {
    latest: Rc<RefCell<Option<Toast>>>,
}

impl ToastSink {
    pub fn take(&self) -> Option<Toast> {
        self.latest.borrow_mut().take()
    }

    fn push(&self, kind: ToastKind, message: &str) {
        *self.latest.borrow_mut() = Some(Toast::new(kind, message));
    }
}

impl Notifier for ToastSink {
    fn notify_success(&self, message: &str) {
        self.push(ToastKind::Success, message);
    }

    fn notify_error(&self, message: &str) {
        self.push(ToastKind::Error, message);
    }
}
