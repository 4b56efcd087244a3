//! Recipe Detail Page
//!
//! Two detail layouts are served. Both get checklists with persisted
//! progress; the remaining widgets attach to whichever layout has them.

use std::rc::Rc;

use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::{Document, Element, HtmlButtonElement, HtmlElement, HtmlFormElement};

use crate::api::Api;
use crate::checklist::{parse_checklist, ChecklistKind};
use crate::components::{
    mount_checklist, paint_static_ratings, scroll_top, Feedback, MessageModal, Notifier, SaveButton, SharePanel,
    StarPicker, TimerPanel, ToggleSaveButton,
};
use crate::config::AppConfig;
use crate::dom;
use crate::error::js_error;
use crate::progress::{recipe_id_from_path, ProgressTracker};
use crate::storage::LocalStorage;

/// Where each checklist's text comes from and where it is rendered
struct ChecklistSlot {
    kind: ChecklistKind,
    source: &'static str,
    /// First present container wins
    targets: &'static [&'static str],
}

const CHECKLIST_SLOTS: &[ChecklistSlot] = &[
    ChecklistSlot {
        kind: ChecklistKind::Ingredient,
        source: ".ingredients-content",
        targets: &["ingredientsList", "ingredientsChecklist"],
    },
    ChecklistSlot {
        kind: ChecklistKind::Instruction,
        source: ".instructions-content",
        targets: &["instructionsList"],
    },
];

/// Non-blank trimmed lines of a directions block
pub fn direction_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// The compact layout (with `#saveRecipeBtn`) styles its scroll button with `show`
fn scroll_class(compact_layout: bool) -> &'static str {
    if compact_layout {
        "show"
    } else {
        "visible"
    }
}

type Tracker = ProgressTracker<LocalStorage>;

pub struct RecipeDetailPage {
    api: Rc<Api>,
    toasts: Notifier,
    progress: Option<Rc<Tracker>>,
    checklists: usize,
    timer: Option<Rc<TimerPanel>>,
    save: Option<Rc<SaveButton>>,
    toggle_save: Option<Rc<ToggleSaveButton>>,
    share: Option<Rc<SharePanel>>,
    stars: Option<Rc<StarPicker>>,
    review_form: Option<HtmlFormElement>,
    reload_ms: u32,
}

impl RecipeDetailPage {
    pub fn attach(doc: &Document, config: &AppConfig, toasts: Notifier) -> Option<Rc<Self>> {
        let recipe_id = recipe_id_from_path(&dom::location_path());
        let progress = recipe_id.clone().and_then(|id| {
            let Some(store) = LocalStorage::open() else {
                log::warn!("[progress] local storage unavailable, progress will not persist");
                return None;
            };
            Some(Rc::new(ProgressTracker::new(store, config.storage.clone(), id)))
        });

        let api = Rc::new(Api::new(config.api.clone(), dom::csrf_token(doc, &config.api)));
        let modal = MessageModal::attach(doc, config.ui.modal_autohide_ms);
        let save = SaveButton::attach(doc, Rc::clone(&api), Feedback::pick(modal, toasts));
        let toggle_save = recipe_id.and_then(|id| ToggleSaveButton::attach(doc, id, Rc::clone(&api), toasts));

        let page = Rc::new(Self {
            checklists: mount_checklists(doc, progress.clone()),
            progress,
            timer: TimerPanel::attach(doc),
            share: SharePanel::attach(doc, config.ui.copied_feedback_ms),
            stars: StarPicker::attach(doc),
            review_form: dom::by_id(doc, "reviewForm"),
            save,
            toggle_save,
            api,
            toasts,
            reload_ms: config.ui.review_reload_ms,
        });

        if !page.is_detail_page() {
            return None;
        }

        paint_static_ratings(doc);
        number_directions(doc);
        scroll_top::attach(doc, scroll_class(page.save.is_some()), config.ui.scroll_threshold_px);
        attach_fullscreen(doc);

        if let Some(form) = &page.review_form {
            let p = Rc::clone(&page);
            dom_events::listen(form, "submit", move |ev| {
                ev.prevent_default();
                Rc::clone(&p).submit_review();
            });
        }

        log::debug!(
            "[detail] recipe {:?}: {} checklists, timer {}, save {}",
            page.progress.as_ref().map(|p| p.recipe_id().to_string()),
            page.checklists,
            page.timer.is_some(),
            page.save.is_some() || page.toggle_save.is_some(),
        );
        Some(page)
    }

    fn is_detail_page(&self) -> bool {
        self.checklists > 0
            || self.timer.is_some()
            || self.save.is_some()
            || self.toggle_save.is_some()
            || self.share.is_some()
            || self.review_form.is_some()
    }

    fn submit_review(self: Rc<Self>) {
        let Some(form) = self.review_form.clone() else { return };
        let button = dom::query::<HtmlButtonElement>(&form, r#"button[type="submit"]"#);
        if let Some(b) = &button {
            b.set_disabled(true);
        }

        spawn_local(async move {
            match self.api.submit_review(&form).await {
                Ok(()) => {
                    self.toasts.success("Review submitted successfully!");
                    form.reset();
                    if let Some(stars) = &self.stars {
                        stars.clear();
                    }
                    dom_events::delay(self.reload_ms as i32, dom::reload_page);
                }
                Err(e) => {
                    log::error!("[review] submit failed: {}", e);
                    self.toasts.error("Error submitting review");
                }
            }
            if let Some(b) = button {
                b.set_disabled(false);
            }
        });
    }
}

/// Render every checklist whose source and container are on the page.
/// Returns how many were mounted.
fn mount_checklists(doc: &Document, progress: Option<Rc<Tracker>>) -> usize {
    let tracker = StoredValue::new_local(progress);
    let mut mounted = 0;

    for slot in CHECKLIST_SLOTS {
        let Some(source) = dom::query_doc::<Element>(doc, slot.source) else {
            continue;
        };
        let Some(container) = slot.targets.iter().find_map(|id| dom::by_id::<HtmlElement>(doc, id)) else {
            continue;
        };

        let items = parse_checklist(slot.kind, &source.text_content().unwrap_or_default());
        let checked = tracker.with_value(|t| t.as_ref().map(|t| t.load(slot.kind)).unwrap_or_default());
        let kind = slot.kind;
        let on_toggle = Callback::new(move |(id, checked): (String, bool)| {
            tracker.with_value(|t| {
                let Some(t) = t else { return };
                if let Err(e) = t.toggle(kind, &id, checked) {
                    log::warn!("[progress] could not save {}: {}", id, e);
                }
            });
        });
        mount_checklist(container, kind, items, checked, on_toggle);
        mounted += 1;
    }
    mounted
}

/// Split a plain-text `#directionsContent` into paragraphs
fn number_directions(doc: &Document) {
    let Some(content) = dom::by_id::<HtmlElement>(doc, "directionsContent") else {
        return;
    };
    if dom::query::<Element>(&content, "p").is_some() {
        return;
    }
    let lines = direction_lines(&content.text_content().unwrap_or_default());
    content.set_inner_html("");
    leptos::mount::mount_to(content, move || {
        lines.into_iter().map(|line| view! { <p>{line}</p> }).collect_view()
    })
    .forget();
}

fn attach_fullscreen(doc: &Document) {
    let (Some(button), Some(image)) = (doc.get_element_by_id("fullscreenBtn"), doc.get_element_by_id("recipeImage"))
    else {
        return;
    };
    dom_events::listen(&button, "click", move |_| {
        let Some(doc) = dom::document() else { return };
        if doc.fullscreen_element().is_some() {
            doc.exit_fullscreen();
        } else if let Err(e) = image.request_fullscreen() {
            log::warn!("[detail] fullscreen refused: {}", js_error(e));
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_lines_drop_blanks() {
        let text = "\n  Preheat oven.\n\n   Mix flour and water.  \n";
        assert_eq!(direction_lines(text), vec!["Preheat oven.", "Mix flour and water."]);
        assert!(direction_lines("  \n ").is_empty());
    }

    #[test]
    fn test_scroll_class_per_layout() {
        assert_eq!(scroll_class(true), "show");
        assert_eq!(scroll_class(false), "visible");
    }

    #[test]
    fn test_every_checklist_kind_has_a_slot() {
        for kind in [ChecklistKind::Ingredient, ChecklistKind::Instruction] {
            let slot = CHECKLIST_SLOTS.iter().find(|s| s.kind == kind).unwrap();
            assert!(!slot.targets.is_empty());
        }
    }
}
