//! Recipe Create / Edit Form

use std::rc::Rc;

use web_sys::{Document, HtmlButtonElement, HtmlFormElement, HtmlInputElement, HtmlTextAreaElement};

use super::submit_after;
use crate::components::{auto_resize, CharCounter, ChipGroup, ImagePreview, RECIPE_LAYOUT};
use crate::config::AppConfig;
use crate::dom;
use crate::validation::{check_recipe, RecipeDraft};

const DEFAULT_LOADING_LABEL: &str = "Sharing Recipe...";

pub struct RecipeFormPage {
    form: HtmlFormElement,
    submit: Option<HtmlButtonElement>,
    _preview: Option<Rc<ImagePreview>>,
    _counter: Option<CharCounter>,
    _tags: Option<ChipGroup>,
    submit_delay_ms: u32,
}

impl RecipeFormPage {
    pub fn attach(doc: &Document, config: &AppConfig) -> Option<Rc<Self>> {
        let form: HtmlFormElement = dom::by_id(doc, "recipeForm")?;
        let page = Rc::new(Self {
            form,
            submit: dom::by_id(doc, "submitBtn"),
            _preview: ImagePreview::attach(doc, &RECIPE_LAYOUT, |_| {}),
            _counter: CharCounter::attach(doc, "description", "descCharCount"),
            _tags: ChipGroup::attach(doc, "tags", "selectedTags", "tagsList", "selected-tag"),
            submit_delay_ms: config.ui.submit_delay_ms,
        });

        for textarea in dom::query_all::<HtmlTextAreaElement>(doc, "textarea") {
            auto_resize(&textarea);
            let t = textarea.clone();
            dom_events::listen(&textarea, "input", move |_| auto_resize(&t));
        }

        let p = Rc::clone(&page);
        dom_events::listen(&page.form, "submit", move |ev| {
            ev.prevent_default();
            p.submit();
        });
        Some(page)
    }

    fn field(&self, id: &str) -> String {
        let Some(doc) = dom::document() else {
            return String::new();
        };
        dom::by_id::<HtmlInputElement>(&doc, id)
            .map(|i| i.value())
            .or_else(|| dom::by_id::<HtmlTextAreaElement>(&doc, id).map(|t| t.value()))
            .unwrap_or_default()
    }

    fn submit(&self) {
        let (title, description, ingredients, instructions) = (
            self.field("title"),
            self.field("description"),
            self.field("ingredients"),
            self.field("instructions"),
        );
        let draft = RecipeDraft {
            title: &title,
            description: &description,
            ingredients: &ingredients,
            instructions: &instructions,
        };
        if let Err(problem) = check_recipe(&draft) {
            dom::alert(problem);
            return;
        }

        // The edit page labels its button through data-loading-label
        let label = self
            .submit
            .as_ref()
            .and_then(|b| b.get_attribute("data-loading-label"))
            .unwrap_or_else(|| DEFAULT_LOADING_LABEL.to_string());
        submit_after(&self.form, self.submit.as_ref(), &label, self.submit_delay_ms);
    }
}
