//! DOM Event Tables
//!
//! Declarative event wiring for server-rendered pages.
//! A page declares `(element id, event, action)` rows; `bind_table` looks up
//! each element once and dispatches the row's action to a single handler.
//! Rows whose element is absent are skipped.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// One row of an event table
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Binding<A> {
    pub element_id: &'static str,
    pub event: &'static str,
    pub action: A,
}

/// Shorthand for building table rows in `const` context
pub const fn on<A>(element_id: &'static str, event: &'static str, action: A) -> Binding<A> {
    Binding { element_id, event, action }
}

/// Element ids referenced by a table, in declaration order, without repeats
pub fn element_ids<A>(table: &[Binding<A>]) -> Vec<&'static str> {
    let mut ids: Vec<&'static str> = Vec::new();
    for row in table {
        if !ids.contains(&row.element_id) {
            ids.push(row.element_id);
        }
    }
    ids
}

/// Returns the first id in `ids` that is not present in the document
pub fn first_missing<'a>(doc: &web_sys::Document, ids: &[&'a str]) -> Option<&'a str> {
    first_missing_by(ids, |id| doc.get_element_by_id(id).is_some())
}

/// Like `first_missing`, with presence decided by `present`
pub fn first_missing_by<'a>(ids: &[&'a str], present: impl Fn(&str) -> bool) -> Option<&'a str> {
    ids.iter().copied().find(|id| !present(id))
}

/// Bind every row of `table` whose element exists.
/// Returns how many rows were bound.
pub fn bind_table<A, F>(doc: &web_sys::Document, table: &[Binding<A>], dispatch: F) -> usize
where
    A: Copy + 'static,
    F: Fn(A, web_sys::Event) + Clone + 'static,
{
    let mut bound = 0;
    for row in table {
        let Some(element) = doc.get_element_by_id(row.element_id) else {
            log::debug!("[dom-events] #{} not on page, skipping {}", row.element_id, row.event);
            continue;
        };
        let action = row.action;
        let dispatch = dispatch.clone();
        listen(&element, row.event, move |ev| dispatch(action, ev));
        bound += 1;
    }
    bound
}

/// Attach a listener that lives as long as the page
pub fn listen<F>(target: &web_sys::EventTarget, event: &str, handler: F)
where
    F: FnMut(web_sys::Event) + 'static,
{
    let cb = Closure::<dyn FnMut(web_sys::Event)>::new(handler);
    if target
        .add_event_listener_with_callback(event, cb.as_ref().unchecked_ref())
        .is_err()
    {
        log::warn!("[dom-events] failed to add {} listener", event);
    }
    cb.forget();
}

/// Attach a listener to the document
pub fn listen_document<F>(event: &str, handler: F)
where
    F: FnMut(web_sys::Event) + 'static,
{
    if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
        listen(&doc, event, handler);
    }
}

/// Attach a listener to the window
pub fn listen_window<F>(event: &str, handler: F)
where
    F: FnMut(web_sys::Event) + 'static,
{
    if let Some(win) = web_sys::window() {
        listen(&win, event, handler);
    }
}

/// Run `f` once after `ms` milliseconds
pub fn delay<F>(ms: i32, f: F)
where
    F: FnOnce() + 'static,
{
    if let Some(win) = web_sys::window() {
        let cb = Closure::once(f);
        if win
            .set_timeout_with_callback_and_timeout_and_arguments_0(cb.as_ref().unchecked_ref(), ms)
            .is_err()
        {
            log::warn!("[dom-events] failed to schedule {} ms timeout", ms);
        }
        cb.forget();
    }
}

/// True when the keyboard event is the Escape key
pub fn is_escape(ev: &web_sys::Event) -> bool {
    ev.dyn_ref::<web_sys::KeyboardEvent>()
        .map(|k| k.key() == "Escape")
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Copy, Debug, PartialEq)]
    enum Action {
        Start,
        Pause,
        Reset,
    }

    const TABLE: &[Binding<Action>] = &[
        on("startTimer", "click", Action::Start),
        on("pauseTimer", "click", Action::Pause),
        on("resetTimer", "click", Action::Reset),
        on("startTimer", "keydown", Action::Start),
    ];

    #[test]
    fn test_element_ids_dedup_in_order() {
        assert_eq!(element_ids(TABLE), vec!["startTimer", "pauseTimer", "resetTimer"]);
    }

    #[test]
    fn test_first_missing_by_reports_first_absent() {
        let ids = element_ids(TABLE);
        assert_eq!(first_missing_by(&ids, |_| true), None);
        assert_eq!(first_missing_by(&ids, |id| id != "pauseTimer"), Some("pauseTimer"));
        assert_eq!(first_missing_by(&ids, |_| false), Some("startTimer"));
    }

    #[test]
    fn test_on_builds_row() {
        let row = on("saveBtn", "click", 7u8);
        assert_eq!(row.element_id, "saveBtn");
        assert_eq!(row.event, "click");
        assert_eq!(row.action, 7);
    }
}
