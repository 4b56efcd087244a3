//! DOM Helpers
//!
//! Typed lookups over the server-rendered page. Lookups return `Option` so
//! controllers can treat a missing element as "feature not on this page".

use percent_encoding::percent_decode_str;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

use crate::config::ApiConfig;

pub fn document() -> Option<Document> {
    web_sys::window()?.document()
}

/// Element by id, cast to the expected type
pub fn by_id<T: JsCast>(doc: &Document, id: &str) -> Option<T> {
    doc.get_element_by_id(id)?.dyn_into::<T>().ok()
}

pub fn query<T: JsCast>(root: &Element, selector: &str) -> Option<T> {
    root.query_selector(selector).ok()??.dyn_into::<T>().ok()
}

pub fn query_doc<T: JsCast>(doc: &Document, selector: &str) -> Option<T> {
    doc.query_selector(selector).ok()??.dyn_into::<T>().ok()
}

/// All matches of `selector` that cast to `T`
pub fn query_all<T: JsCast>(doc: &Document, selector: &str) -> Vec<T> {
    let Ok(list) = doc.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<T>().ok())
        .collect()
}

pub fn query_all_in<T: JsCast>(root: &Element, selector: &str) -> Vec<T> {
    let Ok(list) = root.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<T>().ok())
        .collect()
}

pub fn set_class(el: &Element, class: &str, on: bool) {
    let _ = el.class_list().toggle_with_force(class, on);
}

pub fn has_class(el: &Element, class: &str) -> bool {
    el.class_list().contains(class)
}

pub fn set_style(el: &HtmlElement, property: &str, value: &str) {
    let _ = el.style().set_property(property, value);
}

pub fn show(el: &HtmlElement, display: &str) {
    set_style(el, "display", display);
}

pub fn hide(el: &HtmlElement) {
    set_style(el, "display", "none");
}

pub fn alert(message: &str) {
    if let Some(win) = web_sys::window() {
        let _ = win.alert_with_message(message);
    }
}

pub fn location_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_default()
}

pub fn reload_page() {
    if let Some(win) = web_sys::window() {
        let _ = win.location().reload();
    }
}

/// Value of cookie `name` from a `document.cookie` string
pub fn cookie_value(cookies: &str, name: &str) -> Option<String> {
    cookies.split(';').find_map(|pair| {
        let (key, value) = pair.trim().split_once('=')?;
        (key == name).then(|| percent_decode_str(value).decode_utf8_lossy().into_owned())
    })
}

/// CSRF token from the cookie, else from the hidden form field
pub fn csrf_token(doc: &Document, api: &ApiConfig) -> String {
    let from_cookie = doc
        .dyn_ref::<web_sys::HtmlDocument>()
        .and_then(|d| d.cookie().ok())
        .and_then(|c| cookie_value(&c, &api.csrf_cookie));
    from_cookie
        .or_else(|| {
            query_doc::<web_sys::HtmlInputElement>(doc, &format!("[name={}]", api.csrf_field)).map(|i| i.value())
        })
        .unwrap_or_default()
}

/// Swap the loading look onto a submit button
pub fn set_loading(button: &web_sys::HtmlButtonElement, label: &str) {
    button.set_disabled(true);
    button.set_inner_html(&format!(r#"<i class="fas fa-spinner fa-spin"></i> {}"#, label));
    set_class(button, "loading", true);
}

/// Mark an input as valid or invalid
pub fn mark_field(input: &Element, valid: bool) {
    set_class(input, "error", !valid);
    set_class(input, "success", valid);
}

/// Flip a password input between hidden and visible, updating the eye icon
pub fn toggle_password_visibility(input: &web_sys::HtmlInputElement, toggle: &Element) {
    let reveal = input.type_() == "password";
    input.set_type(if reveal { "text" } else { "password" });
    if let Some(icon) = query::<Element>(toggle, "i") {
        set_class(&icon, "fa-eye", !reveal);
        set_class(&icon, "fa-eye-slash", reveal);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cookie_value_finds_and_decodes() {
        let cookies = "sessionid=abc; csrftoken=tok%3D1; theme=dark";
        assert_eq!(cookie_value(cookies, "csrftoken").as_deref(), Some("tok=1"));
        assert_eq!(cookie_value(cookies, "theme").as_deref(), Some("dark"));
    }

    #[test]
    fn test_cookie_value_requires_exact_name() {
        assert_eq!(cookie_value("xcsrftoken=1", "csrftoken"), None);
        assert_eq!(cookie_value("", "csrftoken"), None);
    }
}
