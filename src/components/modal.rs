//! Message Modal
//!
//! Drives the server-rendered `#saveModal` dialog.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

use super::Notice;
use crate::dom;

#[derive(Clone)]
pub struct MessageModal {
    modal: HtmlElement,
    title: Element,
    message: Element,
    autohide_ms: i32,
}

/// Success titles close themselves after a while
fn auto_hides(title: &str) -> bool {
    title.contains("Saved") || title.contains("Removed")
}

impl MessageModal {
    pub fn attach(doc: &Document, autohide_ms: u32) -> Option<Self> {
        let modal = Self {
            modal: dom::by_id(doc, "saveModal")?,
            title: doc.get_element_by_id("modalTitle")?,
            message: doc.get_element_by_id("modalMessage")?,
            autohide_ms: autohide_ms as i32,
        };

        if let Some(close) = doc.get_element_by_id("closeModal") {
            let m = modal.clone();
            dom_events::listen(&close, "click", move |_| m.hide());
        }

        let m = modal.clone();
        dom_events::listen(&modal.modal, "click", move |ev| {
            let on_backdrop = ev
                .target()
                .and_then(|t| t.dyn_into::<Element>().ok())
                .map(|t| t == *m.modal)
                .unwrap_or(false);
            if on_backdrop {
                m.hide();
            }
        });

        let m = modal.clone();
        dom_events::listen_document("keydown", move |ev| {
            if dom_events::is_escape(&ev) && m.is_open() {
                m.hide();
            }
        });

        Some(modal)
    }

    pub fn show(&self, notice: &Notice) {
        self.title.set_text_content(Some(&notice.title));
        self.message.set_text_content(Some(&notice.message));
        dom::set_class(&self.modal, "show", true);

        if auto_hides(&notice.title) {
            let m = self.clone();
            dom_events::delay(self.autohide_ms, move || m.hide());
        }
    }

    pub fn hide(&self) {
        dom::set_class(&self.modal, "show", false);
    }

    pub fn is_open(&self) -> bool {
        dom::has_class(&self.modal, "show")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_success_titles_auto_hide() {
        assert!(auto_hides("Recipe Saved!"));
        assert!(auto_hides("Recipe Removed"));
        assert!(!auto_hides("Error"));
    }
}
