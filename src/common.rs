use std::time::Duration;

use dioxus::prelude::*;
use serde::{Deserialize, Serialize};

/// How long a toast stays on screen before it is dismissed.
pub const TOAST_DURATION: Duration = Duration::from_millis(4000);

/// Delay between a successful submission and the follow-up redirect.
pub const REDIRECT_DELAY: Duration = Duration::from_millis(1500);

/// Severity of a toast notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToastLevel {
    #[default]
    Success,
    Error,
    Warning,
    Info,
}

impl ToastLevel {
    pub fn background_class(self) -> &'static str {
        match self {
            ToastLevel::Success => "bg-success-500",
            ToastLevel::Error => "bg-danger-500",
            ToastLevel::Warning => "bg-warning-500",
            ToastLevel::Info => "bg-accent-teal",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            ToastLevel::Success => "✓",
            ToastLevel::Error => "✗",
            ToastLevel::Warning => "⚠",
            ToastLevel::Info => "ℹ",
        }
    }
}

/// A single on-screen notification.
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub message: String,
    pub level: ToastLevel,
}

/// All live toasts, newest last. Provided as a root context so any view can
/// push into it; each entry is removed exactly once when its display window
/// elapses.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToastStack {
    next_id: u64,
    entries: Vec<Toast>,
}

impl ToastStack {
    /// Add a toast and return its id.
    pub fn push(&mut self, message: impl Into<String>, level: ToastLevel) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.push(Toast {
            id,
            message: message.into(),
            level,
        });
        id
    }

    /// Remove a toast by id. Removing an already-dismissed id is a no-op.
    pub fn dismiss(&mut self, id: u64) {
        self.entries.retain(|t| t.id != id);
    }

    pub fn entries(&self) -> &[Toast] {
        &self.entries
    }
}

/// Push a toast onto the app-wide stack. When no stack has been provided
/// (e.g. a view rendered outside the app shell) this is a silent no-op.
pub fn push_toast(message: impl Into<String>, level: ToastLevel) {
    match try_consume_context::<Signal<ToastStack>>() {
        Some(mut stack) => {
            stack.write().push(message, level);
        }
        None => {
            tracing::debug!("toast dropped: no ToastStack in scope");
        }
    }
}

/// Outcome of a form submission as reported by the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmitOutcome {
    pub success: bool,
    pub message: Option<String>,
}

impl SubmitOutcome {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
        }
    }

    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
        }
    }

    /// Resolve the message to show the user: the caller-supplied override
    /// wins, then the server message, then the given default.
    pub fn display_message<'a>(&'a self, caller: Option<&'a str>, default: &'a str) -> &'a str {
        caller
            .filter(|m| !m.is_empty())
            .or_else(|| self.message.as_deref().filter(|m| !m.is_empty()))
            .unwrap_or(default)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toast_ids_are_unique_and_dismiss_is_idempotent() {
        let mut stack = ToastStack::default();
        let a = stack.push("saved", ToastLevel::Success);
        let b = stack.push("saved", ToastLevel::Success);
        assert_ne!(a, b);
        assert_eq!(stack.entries().len(), 2);

        stack.dismiss(a);
        assert_eq!(stack.entries().len(), 1);
        stack.dismiss(a);
        assert_eq!(stack.entries().len(), 1);
        assert_eq!(stack.entries()[0].id, b);
    }

    #[test]
    fn push_toast_without_a_stack_is_a_no_op() {
        // No app shell, no provided ToastStack: the call must simply drop
        // the message without panicking.
        push_toast("orphan", ToastLevel::Error);
        push_toast("orphan", ToastLevel::Warning);
    }

    #[test]
    fn each_level_has_its_own_styling() {
        let classes = [
            ToastLevel::Success.background_class(),
            ToastLevel::Error.background_class(),
            ToastLevel::Warning.background_class(),
            ToastLevel::Info.background_class(),
        ];
        for (i, class) in classes.iter().enumerate() {
            assert!(classes.iter().skip(i + 1).all(|c| c != class));
        }
    }

    #[test]
    fn display_message_prefers_caller_then_server_then_default() {
        let outcome = SubmitOutcome::ok("from server");
        assert_eq!(
            outcome.display_message(Some("from caller"), "fallback"),
            "from caller"
        );
        assert_eq!(outcome.display_message(None, "fallback"), "from server");

        let bare = SubmitOutcome {
            success: true,
            message: None,
        };
        assert_eq!(bare.display_message(None, "fallback"), "fallback");
    }

    #[test]
    fn empty_server_message_falls_through_to_default() {
        let outcome = SubmitOutcome {
            success: false,
            message: Some(String::new()),
        };
        assert_eq!(
            outcome.display_message(None, "An error occurred"),
            "An error occurred"
        );
    }
}
