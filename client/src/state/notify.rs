//! User-visible notices and the capability that delivers them.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every failure in the site is a notice, never a fatal error. State models
//! take a `&dyn Notifier` so they can report outcomes without knowing whether
//! the receiver is the toast region or a test log.

#[cfg(test)]
#[path = "notify_test.rs"]
mod notify_test;

use std::cell::RefCell;

use serde::{Deserialize, Serialize};

/// Maximum number of toasts kept on screen at once.
pub const TOAST_LIMIT: usize = 3;

/// Visual weight of a notice.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    #[default]
    Info,
    Success,
    Error,
}

/// A single fire-and-forget message for the user.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub title: String,
    pub description: String,
    pub severity: Severity,
}

impl Notice {
    pub fn info(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::with_severity(title, description, Severity::Info)
    }

    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::with_severity(title, description, Severity::Success)
    }

    pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::with_severity(title, description, Severity::Error)
    }

    fn with_severity(title: impl Into<String>, description: impl Into<String>, severity: Severity) -> Self {
        Self { title: title.into(), description: description.into(), severity }
    }
}

/// Sink for user-visible notices.
pub trait Notifier {
    fn notify(&self, notice: Notice);
}

/// Notifier that keeps every notice in memory, in delivery order.
#[derive(Debug, Default)]
pub struct NoticeLog {
    notices: RefCell<Vec<Notice>>,
}

impl NoticeLog {
    pub fn notices(&self) -> Vec<Notice> {
        self.notices.borrow().clone()
    }

    pub fn titles(&self) -> Vec<String> {
        self.notices.borrow().iter().map(|n| n.title.clone()).collect()
    }

    pub fn count(&self, severity: Severity) -> usize {
        self.notices.borrow().iter().filter(|n| n.severity == severity).count()
    }
}

impl Notifier for NoticeLog {
    fn notify(&self, notice: Notice) {
        self.notices.borrow_mut().push(notice);
    }
}

/// A notice as shown in the toast region.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub notice: Notice,
}

/// Toasts currently on screen, newest first.
#[derive(Clone, Debug, Default)]
pub struct ToastState {
    pub toasts: Vec<Toast>,
    next_id: u64,
}

impl ToastState {
    /// Show a notice and return its toast id. The oldest toast is dropped
    /// once more than [`TOAST_LIMIT`] are visible.
    pub fn push(&mut self, notice: Notice) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.toasts.insert(0, Toast { id, notice });
        self.toasts.truncate(TOAST_LIMIT);
        id
    }

    /// Remove a toast. Returns `false` when it was already gone.
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|t| t.id != id);
        self.toasts.len() != before
    }
}
