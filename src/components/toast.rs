//! Toast Notifications
//!
//! Fixed-position stack of transient messages, mounted once into `<body>`.

use std::time::Duration;

use leptos::prelude::*;

use super::NoticeKind;
use crate::dom;

#[derive(Debug, Clone, PartialEq)]
struct Toast {
    id: u32,
    message: String,
    kind: NoticeKind,
}

/// Handle for pushing toasts; cheap to copy into event handlers
#[derive(Clone, Copy)]
pub struct Notifier {
    toasts: RwSignal<Vec<Toast>>,
    next_id: StoredValue<u32>,
    ttl_ms: u64,
}

impl Notifier {
    /// Mount the toast stack; None when the page has no body
    pub fn mount(ttl_ms: u32) -> Option<Self> {
        let body = dom::document()?.body()?;
        let toasts = RwSignal::new(Vec::<Toast>::new());
        leptos::mount::mount_to(body, move || view! { <ToastStack toasts=toasts /> }).forget();
        Some(Self {
            toasts,
            next_id: StoredValue::new(0),
            ttl_ms: ttl_ms as u64,
        })
    }

    pub fn push(&self, kind: NoticeKind, message: impl Into<String>) {
        let id = self.next_id.get_value();
        self.next_id.set_value(id.wrapping_add(1));
        self.toasts.update(|list| {
            list.push(Toast {
                id,
                message: message.into(),
                kind,
            })
        });

        let toasts = self.toasts;
        set_timeout(
            move || toasts.update(|list| list.retain(|t| t.id != id)),
            Duration::from_millis(self.ttl_ms),
        );
    }

    pub fn success(&self, message: impl Into<String>) {
        self.push(NoticeKind::Success, message);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(NoticeKind::Error, message);
    }
}

#[component]
fn ToastStack(toasts: RwSignal<Vec<Toast>>) -> impl IntoView {
    view! {
        <div class="notification-stack" style="position: fixed; top: 20px; right: 20px; z-index: 3000;">
            <For
                each=move || toasts.get()
                key=|toast| toast.id
                children=move |toast| {
                    let background = match toast.kind {
                        NoticeKind::Success => "#28a745",
                        NoticeKind::Error => "#dc3545",
                    };
                    view! {
                        <div
                            class=format!("notification notification-{}", toast.kind.css())
                            style=format!(
                                "background: {}; color: white; padding: 15px 20px; margin-bottom: 8px; border-radius: 6px; box-shadow: 0 2px 10px rgba(0,0,0,0.2);",
                                background
                            )
                        >
                            {toast.message}
                        </div>
                    }
                }
            />
        </div>
    }
}
