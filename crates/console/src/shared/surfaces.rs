//! Collaborator boundaries consumed by the pages: the toast surface and
//! the navigation surface. Both are fire-and-forget from the core's side.

use std::cell::RefCell;

/// Toast flavor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotifyKind {
    Success,
    Error,
    Info,
}

/// User-facing confirmation surface
pub trait Notifier {
    fn notify(&self, kind: NotifyKind, message: &str);
}

/// Navigation surface; used by flows that redirect after a commit
pub trait Navigator {
    fn navigate_to(&self, path: &str);
}

/// Notifier that forwards toasts to the tracing log
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, kind: NotifyKind, message: &str) {
        match kind {
            NotifyKind::Success | NotifyKind::Info => tracing::info!(?kind, "{}", message),
            NotifyKind::Error => tracing::warn!(?kind, "{}", message),
        }
    }
}

/// Navigator that only logs the target path
pub struct TracingNavigator;

impl Navigator for TracingNavigator {
    fn navigate_to(&self, path: &str) {
        tracing::info!(path, "navigate");
    }
}

/// Notifier capturing every toast; for embedding hosts and tests
#[derive(Default)]
pub struct RecordingNotifier {
    messages: RefCell<Vec<(NotifyKind, String)>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<(NotifyKind, String)> {
        self.messages.borrow().clone()
    }

    pub fn last(&self) -> Option<(NotifyKind, String)> {
        self.messages.borrow().last().cloned()
    }

    pub fn clear(&self) {
        self.messages.borrow_mut().clear();
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, kind: NotifyKind, message: &str) {
        self.messages.borrow_mut().push((kind, message.to_string()));
    }
}

/// Navigator capturing every requested path
#[derive(Default)]
pub struct RecordingNavigator {
    paths: RefCell<Vec<String>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn paths(&self) -> Vec<String> {
        self.paths.borrow().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate_to(&self, path: &str) {
        self.paths.borrow_mut().push(path.to_string());
    }
}
