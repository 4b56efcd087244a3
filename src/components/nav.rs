//! Site Navigation
//!
//! Profile dropdown and mobile menu from the shared page header.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Node};

use crate::dom;

/// Returns how many of the two widgets were found
pub fn attach(doc: &Document) -> usize {
    attach_dropdown(doc) as usize + attach_mobile_menu(doc) as usize
}

fn attach_dropdown(doc: &Document) -> bool {
    let (Some(dropdown), Some(button), Some(_menu)) = (
        doc.get_element_by_id("profileDropdown"),
        doc.get_element_by_id("profileBtn"),
        doc.get_element_by_id("dropdownMenu"),
    ) else {
        return false;
    };

    let d = dropdown.clone();
    dom_events::listen(&button, "click", move |ev| {
        ev.stop_propagation();
        let open = !dom::has_class(&d, "active");
        dom::set_class(&d, "active", open);
    });

    let d = dropdown.clone();
    dom_events::listen_document("click", move |ev| {
        let target = ev.target().and_then(|t| t.dyn_into::<Node>().ok());
        if !d.contains(target.as_ref()) {
            dom::set_class(&d, "active", false);
        }
    });

    let d: Element = dropdown;
    dom_events::listen_document("keydown", move |ev| {
        if dom_events::is_escape(&ev) {
            dom::set_class(&d, "active", false);
        }
    });
    true
}

fn attach_mobile_menu(doc: &Document) -> bool {
    let (Some(button), Some(links)) = (
        doc.get_element_by_id("mobileMenuBtn"),
        dom::query_doc::<Element>(doc, ".nav-links"),
    ) else {
        return false;
    };
    dom_events::listen(&button, "click", move |_| {
        let open = !dom::has_class(&links, "active");
        dom::set_class(&links, "active", open);
    });
    true
}
