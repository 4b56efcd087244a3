//! Save Recipe Buttons
//!
//! Two layouts exist: `#saveRecipeBtn` calls separate save/unsave endpoints,
//! `#saveBtn` calls a single toggle endpoint. Both disable the button while
//! the request is in flight and only change the visual state on success.

use std::rc::Rc;

use leptos::task::spawn_local;
use web_sys::{Document, Element, HtmlButtonElement};

use super::{Feedback, Notice, Notifier};
use crate::api::Api;
use crate::dom;
use crate::error::UiError;
use crate::models::SaveResponse;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveAction {
    Save,
    Unsave,
}

impl SaveAction {
    /// Next action for a button currently showing `saved`
    pub fn for_state(saved: bool) -> Self {
        if saved {
            SaveAction::Unsave
        } else {
            SaveAction::Save
        }
    }

    fn fallback_error(&self) -> &'static str {
        match self {
            SaveAction::Save => "Failed to save recipe. Please try again.",
            SaveAction::Unsave => "Failed to remove recipe. Please try again.",
        }
    }
}

/// What the button should show and what to tell the user
#[derive(Debug, Clone, PartialEq)]
pub struct SaveOutcome {
    /// New saved state, None when unchanged
    pub saved: Option<bool>,
    pub notice: Notice,
}

pub fn save_outcome(action: SaveAction, result: Result<SaveResponse, UiError>) -> SaveOutcome {
    match result {
        Ok(body) if body.success => {
            let saved = body.saved.unwrap_or(action == SaveAction::Save);
            let notice = if saved {
                Notice::success("Recipe Saved!", "This recipe has been saved to your profile.")
            } else {
                Notice::success("Recipe Removed", "This recipe has been removed from your saved recipes.")
            };
            SaveOutcome { saved: Some(saved), notice }
        }
        Ok(body) => {
            let message = body
                .message
                .filter(|m| !m.is_empty())
                .unwrap_or_else(|| action.fallback_error().to_string());
            SaveOutcome { saved: None, notice: Notice::error(message) }
        }
        Err(e) => {
            log::error!("[save] {:?} failed: {}", action, e);
            SaveOutcome {
                saved: None,
                notice: Notice::error(e.user_message(action.fallback_error())),
            }
        }
    }
}

/// Outcome of the single-endpoint toggle
pub fn toggle_outcome(result: Result<bool, UiError>) -> SaveOutcome {
    match result {
        Ok(true) => SaveOutcome { saved: Some(true), notice: Notice::success("Saved", "Recipe saved!") },
        Ok(false) => SaveOutcome {
            saved: Some(false),
            notice: Notice::success("Removed", "Recipe removed from saved"),
        },
        Err(e) => {
            log::error!("[save] toggle failed: {}", e);
            SaveOutcome { saved: None, notice: Notice::error("Error saving recipe") }
        }
    }
}

// ========================
// #saveRecipeBtn
// ========================

pub struct SaveButton {
    button: HtmlButtonElement,
    recipe_id: String,
    api: Rc<Api>,
    feedback: Feedback,
}

impl SaveButton {
    pub fn attach(doc: &Document, api: Rc<Api>, feedback: Feedback) -> Option<Rc<Self>> {
        let button: HtmlButtonElement = dom::by_id(doc, "saveRecipeBtn")?;
        let recipe_id = button.dataset().get("recipeId")?;
        let this = Rc::new(Self { button, recipe_id, api, feedback });

        let on_click = Rc::clone(&this);
        dom_events::listen(&this.button, "click", move |_| on_click.clone().toggle());
        Rc::clone(&this).refresh();
        Some(this)
    }

    fn is_saved(&self) -> bool {
        dom::has_class(&self.button, "saved")
    }

    fn render(&self, saved: bool) {
        dom::set_class(&self.button, "saved", saved);
        if let Some(text) = dom::query::<Element>(&self.button, ".save-text") {
            text.set_text_content(Some(if saved { "Saved" } else { "Save Recipe" }));
        }
        if let Some(icon) = dom::query::<Element>(&self.button, "i") {
            icon.set_class_name("fas fa-bookmark");
        }
    }

    /// Ask the server whether this recipe is already saved
    fn refresh(self: Rc<Self>) {
        spawn_local(async move {
            match self.api.check_saved(&self.recipe_id).await {
                Ok(true) => self.render(true),
                Ok(false) => {}
                Err(e) => log::warn!("[save] status check failed: {}", e),
            }
        });
    }

    fn toggle(self: Rc<Self>) {
        let action = SaveAction::for_state(self.is_saved());
        self.button.set_disabled(true);
        spawn_local(async move {
            let result = match action {
                SaveAction::Save => self.api.save_recipe(&self.recipe_id).await,
                SaveAction::Unsave => self.api.unsave_recipe(&self.recipe_id).await,
            };
            let outcome = save_outcome(action, result);
            if let Some(saved) = outcome.saved {
                self.render(saved);
            }
            self.feedback.show(&outcome.notice);
            self.button.set_disabled(false);
        });
    }
}

// ========================
// #saveBtn
// ========================

pub struct ToggleSaveButton {
    button: HtmlButtonElement,
    recipe_id: String,
    api: Rc<Api>,
    toasts: Notifier,
}

impl ToggleSaveButton {
    pub fn attach(doc: &Document, recipe_id: String, api: Rc<Api>, toasts: Notifier) -> Option<Rc<Self>> {
        let button: HtmlButtonElement = dom::by_id(doc, "saveBtn")?;
        let this = Rc::new(Self { button, recipe_id, api, toasts });
        let on_click = Rc::clone(&this);
        dom_events::listen(&this.button, "click", move |_| on_click.clone().toggle());
        Some(this)
    }

    fn toggle(self: Rc<Self>) {
        self.button.set_disabled(true);
        spawn_local(async move {
            let outcome = toggle_outcome(self.api.toggle_saved(&self.recipe_id).await);
            if let Some(saved) = outcome.saved {
                let label = if saved { "Saved" } else { "Save" };
                self.button
                    .set_inner_html(&format!(r#"<i class="fas fa-bookmark"></i> {}"#, label));
            }
            self.toasts.push(outcome.notice.kind, outcome.notice.message);
            self.button.set_disabled(false);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::NoticeKind;

    fn response(json: &str) -> Result<SaveResponse, UiError> {
        Ok(serde_json::from_str(json).unwrap())
    }

    #[test]
    fn test_successful_save_flips_to_saved() {
        let outcome = save_outcome(SaveAction::Save, response(r#"{"success":true,"saved":true}"#));
        assert_eq!(outcome.saved, Some(true));
        assert_eq!(outcome.notice.kind, NoticeKind::Success);
        assert_eq!(outcome.notice.title, "Recipe Saved!");
    }

    #[test]
    fn test_failed_save_keeps_state_and_shows_message() {
        let outcome = save_outcome(SaveAction::Save, response(r#"{"success":false,"message":"x"}"#));
        assert_eq!(outcome.saved, None);
        assert_eq!(outcome.notice.kind, NoticeKind::Error);
        assert!(outcome.notice.message.contains('x'));
    }

    #[test]
    fn test_unsave_without_saved_field_assumes_removed() {
        let outcome = save_outcome(SaveAction::Unsave, response(r#"{"success":true}"#));
        assert_eq!(outcome.saved, Some(false));
        assert_eq!(outcome.notice.title, "Recipe Removed");
    }

    #[test]
    fn test_transport_error_uses_fallback_message() {
        let outcome = save_outcome(SaveAction::Unsave, Err(UiError::Network("offline".into())));
        assert_eq!(outcome.saved, None);
        assert_eq!(outcome.notice.message, "Failed to remove recipe. Please try again.");
    }

    #[test]
    fn test_action_follows_button_state() {
        assert_eq!(SaveAction::for_state(false), SaveAction::Save);
        assert_eq!(SaveAction::for_state(true), SaveAction::Unsave);
    }

    #[test]
    fn test_toggle_outcome() {
        assert_eq!(toggle_outcome(Ok(true)).saved, Some(true));
        assert_eq!(toggle_outcome(Ok(false)).notice.message, "Recipe removed from saved");
        let failed = toggle_outcome(Err(UiError::Decode("bad".into())));
        assert_eq!(failed.saved, None);
        assert_eq!(failed.notice.kind, NoticeKind::Error);
    }
}
