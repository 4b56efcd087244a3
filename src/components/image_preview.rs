//! Image Upload Preview
//!
//! Shows a picked image file locally (as a data URL) before the form is
//! submitted. The recipe form and the profile form use different element ids,
//! so each passes its own `PreviewLayout`.

use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, FileReader, HtmlElement, HtmlImageElement, HtmlInputElement};

use crate::dom;
use crate::error::{js_error, UiError};
use crate::validation::check_image;

pub struct PreviewLayout {
    pub input: &'static str,
    pub image: &'static str,
    /// Frame that gets `has-image` and opens the picker while empty
    pub frame: Option<&'static str>,
    pub pickers: &'static [&'static str],
    pub change_button: &'static str,
    pub remove_button: &'static str,
    /// Shown only while there is no image
    pub placeholders: &'static [&'static str],
    pub remove_checkbox: Option<&'static str>,
    pub validate: bool,
}

pub const RECIPE_LAYOUT: PreviewLayout = PreviewLayout {
    input: "recipeImage",
    image: "recipeImagePreview",
    frame: Some("imagePreview"),
    pickers: &["uploadOverlayBtn", "changeImageBtn"],
    change_button: "changeImageBtn",
    remove_button: "removeImageBtn",
    placeholders: &[".preview-icon", ".preview-text"],
    remove_checkbox: None,
    validate: false,
};

pub const PROFILE_LAYOUT: PreviewLayout = PreviewLayout {
    input: "profileImage",
    image: "profileImagePreview",
    frame: None,
    pickers: &["uploadBtn", "changePhotoBtn"],
    change_button: "changePhotoBtn",
    remove_button: "removePhotoBtn",
    placeholders: &["#avatarInitial", "#avatarIcon"],
    remove_checkbox: Some("removeImageCheckbox"),
    validate: true,
};

/// Create-profile page: a single camera badge stands in for the photo
pub const NEW_PROFILE_LAYOUT: PreviewLayout = PreviewLayout {
    input: "profileImage",
    image: "profileImagePreview",
    frame: None,
    pickers: &["uploadBtn", "changePhotoBtn"],
    change_button: "changePhotoBtn",
    remove_button: "removePhotoBtn",
    placeholders: &[".avatar-icon"],
    remove_checkbox: None,
    validate: false,
};

pub struct ImagePreview {
    input: HtmlInputElement,
    image: HtmlImageElement,
    frame: Option<Element>,
    change_button: Option<Element>,
    remove_button: Option<HtmlElement>,
    placeholders: Vec<HtmlElement>,
    remove_checkbox: Option<HtmlInputElement>,
    validate: bool,
    /// Called with the new data URL, or None after removal
    on_change: Box<dyn Fn(Option<&str>)>,
}

impl ImagePreview {
    pub fn attach(
        doc: &Document,
        layout: &PreviewLayout,
        on_change: impl Fn(Option<&str>) + 'static,
    ) -> Option<Rc<Self>> {
        let preview = Rc::new(Self {
            input: dom::by_id(doc, layout.input)?,
            image: dom::by_id(doc, layout.image)?,
            frame: layout.frame.and_then(|id| doc.get_element_by_id(id)),
            change_button: doc.get_element_by_id(layout.change_button),
            remove_button: dom::by_id(doc, layout.remove_button),
            placeholders: layout
                .placeholders
                .iter()
                .filter_map(|sel| dom::query_doc::<HtmlElement>(doc, sel))
                .collect(),
            remove_checkbox: layout.remove_checkbox.and_then(|id| dom::by_id(doc, id)),
            validate: layout.validate,
            on_change: Box::new(on_change),
        });

        for id in layout.pickers {
            if let Some(el) = doc.get_element_by_id(id) {
                let p = Rc::clone(&preview);
                dom_events::listen(&el, "click", move |ev| {
                    ev.stop_propagation();
                    p.input.click();
                });
            }
        }
        if let Some(frame) = &preview.frame {
            let p = Rc::clone(&preview);
            dom_events::listen(frame, "click", move |_| {
                if !p.has_image() {
                    p.input.click();
                }
            });
        }
        if let Some(remove) = &preview.remove_button {
            let p = Rc::clone(&preview);
            dom_events::listen(remove, "click", move |ev| {
                ev.stop_propagation();
                p.remove();
            });
        }
        let p = Rc::clone(&preview);
        dom_events::listen(&preview.input, "change", move |_| {
            if let Err(e) = Rc::clone(&p).load_selected() {
                log::warn!("[image] preview failed: {}", e);
            }
        });

        let existing = !preview.image.src().is_empty() && preview.image.style().get_property_value("display").ok().as_deref() != Some("none");
        preview.render(existing);
        Some(preview)
    }

    fn has_image(&self) -> bool {
        self.frame.as_ref().map(|f| dom::has_class(f, "has-image")).unwrap_or(false)
    }

    fn load_selected(self: Rc<Self>) -> Result<(), UiError> {
        let Some(file) = self.input.files().and_then(|files| files.get(0)) else {
            return Ok(());
        };
        if self.validate {
            if let Err(message) = check_image(file.size(), &file.type_()) {
                dom::alert(message);
                return Ok(());
            }
        }

        let reader = FileReader::new().map_err(|e| UiError::Dom(js_error(e)))?;
        let r = reader.clone();
        let this = Rc::clone(&self);
        let onload = Closure::once(move |_: web_sys::Event| {
            match r.result().ok().and_then(|v| v.as_string()) {
                Some(url) => this.show(&url),
                None => log::warn!("[image] reader returned no data URL"),
            }
        });
        reader.set_onload(Some(onload.as_ref().unchecked_ref()));
        onload.forget();
        reader.read_as_data_url(&file).map_err(|e| UiError::Dom(js_error(e)))
    }

    fn show(&self, data_url: &str) {
        self.image.set_src(data_url);
        self.render(true);
        if let Some(checkbox) = &self.remove_checkbox {
            checkbox.set_checked(false);
        }
        (self.on_change)(Some(data_url));
    }

    fn remove(&self) {
        self.input.set_value("");
        self.image.set_src("");
        self.render(false);
        if let Some(checkbox) = &self.remove_checkbox {
            checkbox.set_checked(true);
        }
        (self.on_change)(None);
    }

    fn render(&self, has_image: bool) {
        if has_image {
            dom::show(&self.image, "block");
        } else {
            dom::hide(&self.image);
        }
        if let Some(frame) = &self.frame {
            dom::set_class(frame, "has-image", has_image);
        }
        for placeholder in &self.placeholders {
            if has_image {
                dom::hide(placeholder);
            } else {
                dom::show(placeholder, "block");
            }
        }
        if let Some(button) = &self.change_button {
            button.set_text_content(Some(if has_image { "Change Photo" } else { "Upload Photo" }));
        }
        if let Some(remove) = &self.remove_button {
            if has_image {
                dom::show(remove, "inline-flex");
            } else {
                dom::hide(remove);
            }
        }
    }
}
