//! Recipe Checklists
//!
//! Renders parsed ingredient/instruction lines as checkboxes inside the
//! server's placeholder container and reports every toggle.

use leptos::prelude::*;
use web_sys::HtmlElement;

use crate::checklist::{ChecklistItem, ChecklistKind};

/// Replace `container`'s content with a live checklist
pub fn mount_checklist(
    container: HtmlElement,
    kind: ChecklistKind,
    items: Vec<ChecklistItem>,
    checked: Vec<String>,
    on_toggle: Callback<(String, bool)>,
) {
    container.set_inner_html("");
    leptos::mount::mount_to(container, move || {
        view! { <Checklist kind=kind items=items checked=checked on_toggle=on_toggle /> }
    })
    .forget();
}

#[component]
fn Checklist(
    kind: ChecklistKind,
    items: Vec<ChecklistItem>,
    /// Item ids restored from storage; unknown ids are ignored
    checked: Vec<String>,
    on_toggle: Callback<(String, bool)>,
) -> impl IntoView {
    items
        .into_iter()
        .map(|item| {
            let initially = checked.contains(&item.id);
            match kind {
                ChecklistKind::Ingredient => {
                    view! { <IngredientRow item=item initially=initially on_toggle=on_toggle /> }.into_any()
                }
                ChecklistKind::Instruction => {
                    view! { <InstructionRow item=item initially=initially on_toggle=on_toggle /> }.into_any()
                }
            }
        })
        .collect_view()
}

#[component]
fn IngredientRow(item: ChecklistItem, initially: bool, on_toggle: Callback<(String, bool)>) -> impl IntoView {
    let (checked, set_checked) = signal(initially);
    let id = item.id.clone();

    view! {
        <div class="ingredient-item" class:checked=move || checked.get()>
            <input
                type="checkbox"
                class="ingredient-checkbox"
                id=item.id.clone()
                prop:checked=move || checked.get()
                on:change=move |ev| {
                    let now = event_target_checked(&ev);
                    set_checked.set(now);
                    on_toggle.run((id.clone(), now));
                }
            />
            <label for=item.id class="ingredient-text">{item.text}</label>
        </div>
    }
}

#[component]
fn InstructionRow(item: ChecklistItem, initially: bool, on_toggle: Callback<(String, bool)>) -> impl IntoView {
    let (completed, set_completed) = signal(initially);
    let id = item.id.clone();

    view! {
        <div class="instruction-item" class:completed=move || completed.get() data-step=item.number.to_string()>
            <div class="instruction-number">{item.number}</div>
            <div class="instruction-content">
                <input
                    type="checkbox"
                    class="instruction-checkbox"
                    id=item.id.clone()
                    prop:checked=move || completed.get()
                    on:change=move |ev| {
                        let now = event_target_checked(&ev);
                        set_completed.set(now);
                        on_toggle.run((id.clone(), now));
                    }
                />
                <label for=item.id class="instruction-text">{item.text}</label>
            </div>
        </div>
    }
}
