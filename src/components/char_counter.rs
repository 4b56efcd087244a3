//! Character Counter

use web_sys::{Document, HtmlElement, HtmlTextAreaElement};

use crate::dom;
use crate::validation::counter_level;

#[derive(Clone)]
pub struct CharCounter {
    pub field: HtmlTextAreaElement,
    counter: HtmlElement,
}

impl CharCounter {
    pub fn attach(doc: &Document, field_id: &str, counter_id: &str) -> Option<Self> {
        let counter = Self {
            field: dom::by_id(doc, field_id)?,
            counter: dom::by_id(doc, counter_id)?,
        };
        counter.update();
        let c = counter.clone();
        dom_events::listen(&counter.field, "input", move |_| {
            c.update();
        });
        Some(counter)
    }

    pub fn update(&self) -> usize {
        let count = self.field.value().chars().count();
        self.counter.set_text_content(Some(&count.to_string()));
        dom::set_style(&self.counter, "color", counter_level(count).color());
        count
    }
}

/// Grow a textarea to fit its content
pub fn auto_resize(textarea: &HtmlTextAreaElement) {
    dom::set_style(textarea, "height", "auto");
    dom::set_style(textarea, "height", &format!("{}px", textarea.scroll_height()));
}
