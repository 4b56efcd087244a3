//! Scroll-to-Top Button

use web_sys::{Document, Element, ScrollBehavior, ScrollToOptions};

use crate::dom;

/// Shows `#scrollToTop` (with `visible_class`) once the page is scrolled past `threshold` px
pub fn attach(doc: &Document, visible_class: &'static str, threshold: f64) -> bool {
    let Some(button) = doc.get_element_by_id("scrollToTop") else {
        return false;
    };

    let b: Element = button.clone();
    dom_events::listen_window("scroll", move |_| {
        let offset = web_sys::window().and_then(|w| w.page_y_offset().ok()).unwrap_or(0.0);
        dom::set_class(&b, visible_class, offset > threshold);
    });

    dom_events::listen(&button, "click", |_| {
        if let Some(win) = web_sys::window() {
            let options = ScrollToOptions::new();
            options.set_top(0.0);
            options.set_behavior(ScrollBehavior::Smooth);
            win.scroll_to_with_scroll_to_options(&options);
        }
    });
    true
}
