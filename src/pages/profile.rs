//! Edit Profile Page
//!
//! Keeps the live preview card in sync with the form, flashes an
//! "auto-saved" indicator after typing pauses, and warns before leaving with
//! unsaved edits. Submission is validated and then posted natively.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use dom_events::{on, Binding};
use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{
    BeforeUnloadEvent, Document, Element, Event, HtmlAnchorElement, HtmlButtonElement, HtmlElement,
    HtmlFormElement, HtmlImageElement, HtmlInputElement, HtmlTextAreaElement, KeyboardEvent,
};

use super::submit_after;
use crate::components::{CharCounter, ChipGroup, ImagePreview, PROFILE_LAYOUT};
use crate::config::AppConfig;
use crate::dom;
use crate::validation::{check_profile, ProfileDraft};

const AUTOSAVE_DEBOUNCE_MS: u32 = 2000;
const AUTOSAVE_VISIBLE_MS: u32 = 3000;
const LEAVE_WARNING: &str = "You have unsaved changes. Are you sure you want to leave?";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ProfileEvent {
    FirstNameTyped,
    LastNameTyped,
    UsernameTyped,
    EmailTyped,
    BioTyped,
    Submit,
}

const PROFILE_EVENTS: &[Binding<ProfileEvent>] = &[
    on("first_name", "input", ProfileEvent::FirstNameTyped),
    on("last_name", "input", ProfileEvent::LastNameTyped),
    on("username", "input", ProfileEvent::UsernameTyped),
    on("email", "input", ProfileEvent::EmailTyped),
    on("bio", "input", ProfileEvent::BioTyped),
    on("editProfileForm", "submit", ProfileEvent::Submit),
];

// ========================
// Preview Text
// ========================

/// "First Last", else the username, else a placeholder
pub fn preview_name(first: &str, last: &str, username: &str) -> String {
    let full = [first.trim(), last.trim()]
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ");
    if !full.is_empty() {
        full
    } else if !username.is_empty() {
        username.to_string()
    } else {
        "Your Name".to_string()
    }
}

pub fn preview_username(username: &str) -> String {
    format!("@{}", if username.is_empty() { "username" } else { username })
}

/// Uppercased first letter of the first name
pub fn avatar_initial(first: &str) -> Option<String> {
    first.trim().chars().next().map(|c| c.to_uppercase().collect())
}

pub fn preview_bio(bio: &str) -> &str {
    if bio.is_empty() {
        "No bio provided"
    } else {
        bio
    }
}

/// Alert text listing every problem, None when the profile is valid
pub fn profile_alert(errors: &[&str]) -> Option<String> {
    if errors.is_empty() {
        None
    } else {
        Some(format!("Please fix the following errors:\n{}", errors.join("\n")))
    }
}

// ========================
// Auto-save Indicator
// ========================

/// Shows `#saveIndicator` once typing has paused
struct AutoSaveIndicator {
    indicator: Element,
    pending: RefCell<Option<Timeout>>,
}

impl AutoSaveIndicator {
    /// Restart the debounce; dropping the previous `Timeout` cancels it
    fn poke(&self) {
        let indicator = self.indicator.clone();
        let timeout = Timeout::new(AUTOSAVE_DEBOUNCE_MS, move || {
            dom::set_class(&indicator, "show", true);
            Timeout::new(AUTOSAVE_VISIBLE_MS, move || dom::set_class(&indicator, "show", false)).forget();
        });
        self.pending.replace(Some(timeout));
    }
}

// ========================
// Page
// ========================

struct PreviewCard {
    name: Option<Element>,
    username: Option<Element>,
    bio: Option<HtmlElement>,
    initial: Option<Element>,
}

pub struct ProfilePage {
    form: HtmlFormElement,
    submit: Option<HtmlButtonElement>,
    first_name: HtmlInputElement,
    last_name: HtmlInputElement,
    username: HtmlInputElement,
    email: HtmlInputElement,
    bio: Option<HtmlTextAreaElement>,
    avatar_initial: Option<Element>,
    card: PreviewCard,
    counter: Option<CharCounter>,
    _cuisines: Option<ChipGroup>,
    _photo: Option<Rc<ImagePreview>>,
    autosave: Option<AutoSaveIndicator>,
    unsaved: Cell<bool>,
    submit_delay_ms: u32,
}

impl ProfilePage {
    pub fn attach(doc: &Document, config: &AppConfig) -> Option<Rc<Self>> {
        let form: HtmlFormElement = dom::by_id(doc, "editProfileForm")?;

        let cuisines = ChipGroup::attach(doc, "favorite_cuisines", "selectedCuisines", "cuisineTags", "cuisine-tag");
        if let Some(group) = &cuisines {
            group.mirror_into(doc, "previewCuisines", "preview-cuisine-tag");
        }

        let page = Rc::new(Self {
            form,
            submit: dom::by_id(doc, "submitBtn"),
            first_name: dom::by_id(doc, "first_name")?,
            last_name: dom::by_id(doc, "last_name")?,
            username: dom::by_id(doc, "username")?,
            email: dom::by_id(doc, "email")?,
            bio: dom::by_id(doc, "bio"),
            avatar_initial: doc.get_element_by_id("avatarInitial"),
            card: PreviewCard {
                name: doc.get_element_by_id("previewName"),
                username: doc.get_element_by_id("previewUsername"),
                bio: dom::by_id(doc, "previewBio"),
                initial: doc.get_element_by_id("previewInitial"),
            },
            counter: CharCounter::attach(doc, "bio", "charCount"),
            _cuisines: cuisines,
            _photo: ImagePreview::attach(doc, &PROFILE_LAYOUT, preview_photo_updater(doc)),
            autosave: doc.get_element_by_id("saveIndicator").map(|indicator| AutoSaveIndicator {
                indicator,
                pending: RefCell::new(None),
            }),
            unsaved: Cell::new(false),
            submit_delay_ms: config.ui.submit_delay_ms,
        });

        let p = Rc::clone(&page);
        dom_events::bind_table(doc, PROFILE_EVENTS, move |event, ev| p.handle(event, ev));

        for checkbox in dom::query_all::<HtmlInputElement>(doc, r#"input[name="favorite_cuisines"]"#) {
            let p = Rc::clone(&page);
            dom_events::listen(&checkbox, "change", move |_| p.touch());
        }
        for field in dom::query_all::<Element>(doc, "input, textarea") {
            let p = Rc::clone(&page);
            dom_events::listen(&field, "input", move |_| p.unsaved.set(true));
            focus_highlight(&field);
        }

        let p = Rc::clone(&page);
        dom_events::listen_window("beforeunload", move |ev| {
            if p.unsaved.get() {
                ev.prevent_default();
                if let Some(ev) = ev.dyn_ref::<BeforeUnloadEvent>() {
                    ev.set_return_value(LEAVE_WARNING);
                }
            }
        });

        let p = Rc::clone(&page);
        dom_events::listen_document("keydown", move |ev| p.shortcut(&ev));

        page.refresh_name();
        page.refresh_username();
        page.init_bio_preview();
        page.unsaved.set(false);
        Some(page)
    }

    fn handle(&self, event: ProfileEvent, ev: Event) {
        match event {
            ProfileEvent::FirstNameTyped => {
                self.refresh_name();
                self.touch();
            }
            ProfileEvent::LastNameTyped => {
                self.refresh_name();
                self.touch();
            }
            ProfileEvent::UsernameTyped => {
                self.refresh_username();
                self.touch();
            }
            ProfileEvent::EmailTyped => self.touch(),
            ProfileEvent::BioTyped => {
                self.refresh_bio();
                self.touch();
            }
            ProfileEvent::Submit => {
                ev.prevent_default();
                self.submit();
            }
        }
    }

    fn touch(&self) {
        if let Some(autosave) = &self.autosave {
            autosave.poke();
        }
    }

    fn refresh_name(&self) {
        if let Some(initial) = avatar_initial(&self.first_name.value()) {
            for el in [&self.avatar_initial, &self.card.initial].into_iter().flatten() {
                el.set_text_content(Some(&initial));
            }
        }
        if let Some(name) = &self.card.name {
            let text = preview_name(&self.first_name.value(), &self.last_name.value(), &self.username.value());
            name.set_text_content(Some(&text));
        }
    }

    fn refresh_username(&self) {
        if let Some(el) = &self.card.username {
            el.set_text_content(Some(&preview_username(&self.username.value())));
        }
    }

    fn refresh_bio(&self) {
        if let Some(counter) = &self.counter {
            counter.update();
        }
        if let (Some(bio), Some(preview)) = (&self.bio, &self.card.bio) {
            preview.set_text_content(Some(preview_bio(&bio.value())));
        }
    }

    /// Hide the bio block on the card when the profile has none yet
    fn init_bio_preview(&self) {
        let (Some(bio), Some(preview)) = (&self.bio, &self.card.bio) else {
            return;
        };
        let text = bio.value();
        let text = text.trim();
        preview.set_text_content(Some(preview_bio(text)));
        if let Some(parent) = preview.parent_element().and_then(|p| p.dyn_into::<HtmlElement>().ok()) {
            if text.is_empty() {
                dom::hide(&parent);
            } else {
                dom::show(&parent, "block");
            }
        }
    }

    fn shortcut(&self, ev: &Event) {
        let Some(key) = ev.dyn_ref::<KeyboardEvent>() else { return };
        if (key.ctrl_key() || key.meta_key()) && key.key() == "s" {
            ev.prevent_default();
            self.submit();
        } else if dom_events::is_escape(ev) {
            let cancel = dom::document()
                .and_then(|d| dom::query_doc::<HtmlAnchorElement>(&d, r#"a[href*="my_profile"]"#));
            if let (Some(link), Some(win)) = (cancel, web_sys::window()) {
                let _ = win.location().set_href(&link.href());
            }
        }
    }

    fn submit(&self) {
        let (first, last, username, email) = (
            self.first_name.value(),
            self.last_name.value(),
            self.username.value(),
            self.email.value(),
        );
        let errors = check_profile(&ProfileDraft {
            first_name: &first,
            last_name: &last,
            username: &username,
            email: &email,
        });
        if let Some(message) = profile_alert(&errors) {
            dom::alert(&message);
            return;
        }
        self.unsaved.set(false);
        submit_after(&self.form, self.submit.as_ref(), "Saving Changes...", self.submit_delay_ms);
    }
}

/// Mirror the picked photo onto the preview card
fn preview_photo_updater(doc: &Document) -> impl Fn(Option<&str>) + 'static {
    let image: Option<HtmlImageElement> = dom::by_id(doc, "previewImage");
    let avatar: Option<HtmlElement> = dom::by_id(doc, "previewAvatar");
    move |data_url: Option<&str>| {
        match (data_url, &image) {
            (Some(url), Some(img)) => {
                img.set_src(url);
                dom::show(img, "block");
            }
            (None, Some(img)) => dom::hide(img),
            _ => {}
        }
        if let Some(avatar) = &avatar {
            if data_url.is_some() {
                dom::hide(avatar);
            } else {
                dom::show(avatar, "flex");
            }
        }
    }
}

fn focus_highlight(field: &Element) {
    let Some(parent) = field.parent_element() else { return };
    let p = parent.clone();
    dom_events::listen(field, "focus", move |_| dom::set_class(&p, "focused", true));
    dom_events::listen(field, "blur", move |_| dom::set_class(&parent, "focused", false));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_name_fallbacks() {
        assert_eq!(preview_name(" Ada ", "Lovelace", "ada"), "Ada Lovelace");
        assert_eq!(preview_name("", "Lovelace", "ada"), "Lovelace");
        assert_eq!(preview_name("", " ", "ada"), "ada");
        assert_eq!(preview_name("", "", ""), "Your Name");
    }

    #[test]
    fn test_preview_username_and_bio() {
        assert_eq!(preview_username("chef_1"), "@chef_1");
        assert_eq!(preview_username(""), "@username");
        assert_eq!(preview_bio(""), "No bio provided");
        assert_eq!(preview_bio("Bakes bread"), "Bakes bread");
    }

    #[test]
    fn test_avatar_initial() {
        assert_eq!(avatar_initial("  ada").as_deref(), Some("A"));
        assert_eq!(avatar_initial("émile").as_deref(), Some("É"));
        assert_eq!(avatar_initial("   "), None);
    }

    #[test]
    fn test_profile_alert_lists_errors() {
        assert_eq!(profile_alert(&[]), None);
        let alert = profile_alert(&["First name is required", "Email is required"]).unwrap();
        assert_eq!(alert, "Please fix the following errors:\nFirst name is required\nEmail is required");
    }
}
