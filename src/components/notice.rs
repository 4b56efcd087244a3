//! User Feedback
//!
//! A `Notice` is what the user should be told after an action; `Feedback`
//! decides whether it appears in the page's modal or as a toast.

use super::{MessageModal, Notifier};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

impl NoticeKind {
    pub fn css(&self) -> &'static str {
        match self {
            NoticeKind::Success => "success",
            NoticeKind::Error => "error",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub title: String,
    pub message: String,
    pub kind: NoticeKind,
}

impl Notice {
    pub fn success(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self { title: title.into(), message: message.into(), kind: NoticeKind::Success }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { title: "Error".to_string(), message: message.into(), kind: NoticeKind::Error }
    }
}

#[derive(Clone)]
pub enum Feedback {
    Modal(MessageModal),
    Toast(Notifier),
}

impl Feedback {
    /// Prefer the page's modal when it has one
    pub fn pick(modal: Option<MessageModal>, toasts: Notifier) -> Self {
        match modal {
            Some(m) => Feedback::Modal(m),
            None => Feedback::Toast(toasts),
        }
    }

    pub fn show(&self, notice: &Notice) {
        match self {
            Feedback::Modal(modal) => modal.show(notice),
            Feedback::Toast(toasts) => toasts.push(notice.kind, notice.message.clone()),
        }
    }
}
