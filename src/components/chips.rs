//! Selected Tag / Cuisine Chips
//!
//! Mirrors a group of checkboxes as a row of chips. The wrapper is hidden
//! while nothing is selected.

use leptos::prelude::*;
use web_sys::{Document, HtmlElement, HtmlInputElement};

use crate::dom;

/// Labels of the checked boxes, in page order
pub fn selected_labels(boxes: &[(bool, String)]) -> Vec<String> {
    boxes
        .iter()
        .filter(|(checked, _)| *checked)
        .map(|(_, label)| label.clone())
        .collect()
}

#[derive(Clone)]
pub struct ChipGroup {
    boxes: Vec<HtmlInputElement>,
    wrapper: HtmlElement,
    selected: RwSignal<Vec<String>>,
}

impl ChipGroup {
    /// `input_name` selects the checkboxes, `list_id` receives the chips,
    /// `wrapper_id` is shown or hidden with the selection
    pub fn attach(
        doc: &Document,
        input_name: &str,
        wrapper_id: &str,
        list_id: &str,
        chip_class: &'static str,
    ) -> Option<Self> {
        let boxes = dom::query_all::<HtmlInputElement>(doc, &format!(r#"input[name="{}"]"#, input_name));
        let wrapper: HtmlElement = dom::by_id(doc, wrapper_id)?;
        let list: HtmlElement = dom::by_id(doc, list_id)?;
        let selected = RwSignal::new(Vec::<String>::new());

        list.set_inner_html("");
        leptos::mount::mount_to(list, move || view! { <Chips selected=selected chip_class=chip_class /> }).forget();

        let group = Self { boxes, wrapper, selected };
        for input in &group.boxes {
            let g = group.clone();
            dom_events::listen(input, "change", move |_| g.update());
        }
        group.update();
        Some(group)
    }

    /// Mirror the chips into a second container, e.g. a live preview card
    pub fn mirror_into(&self, doc: &Document, list_id: &str, chip_class: &'static str) {
        if let Some(list) = dom::by_id::<HtmlElement>(doc, list_id) {
            let selected = self.selected;
            list.set_inner_html("");
            leptos::mount::mount_to(list, move || view! { <Chips selected=selected chip_class=chip_class /> })
                .forget();
        }
    }

    pub fn update(&self) {
        let boxes: Vec<(bool, String)> = self.boxes.iter().map(|b| (b.checked(), chip_label(b))).collect();
        let labels = selected_labels(&boxes);
        if labels.is_empty() {
            dom::hide(&self.wrapper);
        } else {
            dom::show(&self.wrapper, "block");
        }
        self.selected.set(labels);
    }
}

/// Text of the box's `<label for>`, else its value
fn chip_label(input: &HtmlInputElement) -> String {
    let id = input.id();
    dom::document()
        .filter(|_| !id.is_empty())
        .and_then(|doc| dom::query_doc::<web_sys::Element>(&doc, &format!(r#"label[for="{}"]"#, id)))
        .and_then(|label| label.text_content())
        .map(|text| text.trim().to_string())
        .filter(|text| !text.is_empty())
        .unwrap_or_else(|| input.value())
}

#[component]
fn Chips(selected: RwSignal<Vec<String>>, chip_class: &'static str) -> impl IntoView {
    view! {
        <For
            each=move || selected.get()
            key=|label| label.clone()
            children=move |label| view! { <span class=chip_class>{label}</span> }
        />
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selected_labels_keep_page_order() {
        let boxes = vec![
            (true, "Italian".to_string()),
            (false, "Thai".to_string()),
            (true, "Mexican".to_string()),
        ];
        assert_eq!(selected_labels(&boxes), vec!["Italian", "Mexican"]);
        assert!(selected_labels(&[(false, "Thai".to_string())]).is_empty());
    }
}
