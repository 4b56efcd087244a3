//! Create Profile Page
//!
//! First-time profile setup: photo preview, an avatar badge showing the
//! first name's initial, bio counter and cuisine chips. Nothing is validated
//! client-side.

use std::rc::Rc;

use dom_events::{on, Binding};
use web_sys::{Document, Event, HtmlButtonElement, HtmlElement, HtmlFormElement, HtmlInputElement};

use super::profile::avatar_initial;
use super::submit_after;
use crate::components::{CharCounter, ChipGroup, ImagePreview, NEW_PROFILE_LAYOUT};
use crate::dom;

const CREATE_SUBMIT_DELAY_MS: u32 = 2000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AvatarBadge {
    Initial(String),
    Camera,
}

impl AvatarBadge {
    pub fn for_first_name(first: &str) -> Self {
        avatar_initial(first).map(AvatarBadge::Initial).unwrap_or(AvatarBadge::Camera)
    }

    fn class_name(&self) -> &'static str {
        match self {
            AvatarBadge::Initial(_) => "avatar-initial",
            AvatarBadge::Camera => "avatar-icon",
        }
    }

    fn paint(&self, badge: &HtmlElement) {
        match self {
            AvatarBadge::Initial(letter) => badge.set_text_content(Some(letter)),
            AvatarBadge::Camera => badge.set_inner_html(r#"<i class="fas fa-camera"></i>"#),
        }
        badge.set_class_name(self.class_name());
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CreateEvent {
    FirstNameTyped,
    Submit,
}

const CREATE_EVENTS: &[Binding<CreateEvent>] = &[
    on("firstName", "input", CreateEvent::FirstNameTyped),
    on("profileForm", "submit", CreateEvent::Submit),
];

/// Repaints the avatar badge from the first-name field
#[derive(Clone)]
struct Avatar {
    first_name: HtmlInputElement,
    badge: Option<HtmlElement>,
}

impl Avatar {
    fn refresh(&self) {
        if let Some(badge) = &self.badge {
            AvatarBadge::for_first_name(&self.first_name.value()).paint(badge);
        }
    }
}

pub struct ProfileCreatePage {
    form: HtmlFormElement,
    submit: Option<HtmlButtonElement>,
    avatar: Avatar,
    _counter: Option<CharCounter>,
    _cuisines: Option<ChipGroup>,
    _photo: Option<Rc<ImagePreview>>,
}

impl ProfileCreatePage {
    pub fn attach(doc: &Document) -> Option<Rc<Self>> {
        let form: HtmlFormElement = dom::by_id(doc, "profileForm")?;
        let avatar = Avatar {
            first_name: dom::by_id(doc, "firstName")?,
            badge: dom::query_doc(doc, ".avatar-icon"),
        };

        // The preview looks up the badge by class, so it goes before the first repaint
        let a = avatar.clone();
        let photo = ImagePreview::attach(doc, &NEW_PROFILE_LAYOUT, move |data_url: Option<&str>| {
            if data_url.is_none() {
                a.refresh();
            }
        });

        let page = Rc::new(Self {
            form,
            submit: dom::by_id(doc, "submitBtn"),
            avatar,
            _counter: CharCounter::attach(doc, "bio", "charCount"),
            _cuisines: ChipGroup::attach(doc, "favorite_cuisines", "selectedCuisines", "cuisineTags", "cuisine-tag"),
            _photo: photo,
        });

        let p = Rc::clone(&page);
        dom_events::bind_table(doc, CREATE_EVENTS, move |event, ev| p.handle(event, ev));
        page.avatar.refresh();
        Some(page)
    }

    fn handle(&self, event: CreateEvent, ev: Event) {
        match event {
            CreateEvent::FirstNameTyped => self.avatar.refresh(),
            CreateEvent::Submit => {
                ev.prevent_default();
                submit_after(&self.form, self.submit.as_ref(), "Creating Profile...", CREATE_SUBMIT_DELAY_MS);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_badge_shows_initial_or_camera() {
        assert_eq!(AvatarBadge::for_first_name("  maria"), AvatarBadge::Initial("M".to_string()));
        assert_eq!(AvatarBadge::for_first_name("   "), AvatarBadge::Camera);
        assert_eq!(AvatarBadge::for_first_name(""), AvatarBadge::Camera);
    }

    #[test]
    fn test_badge_classes() {
        assert_eq!(AvatarBadge::Initial("A".to_string()).class_name(), "avatar-initial");
        assert_eq!(AvatarBadge::Camera.class_name(), "avatar-icon");
    }

    #[test]
    fn test_create_events_bind_form_and_name() {
        assert_eq!(dom_events::element_ids(CREATE_EVENTS), vec!["firstName", "profileForm"]);
    }
}
