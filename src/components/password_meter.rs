//! Password Strength & Match Indicators

use web_sys::{Document, Element, HtmlElement, HtmlInputElement};

use crate::dom;
use crate::validation::{password_requirements, password_strength, passwords_match};

const LEVEL_CLASSES: [&str; 4] = ["weak", "fair", "good", "strong"];

/// Indicator ids, matching the order of `password_requirements`
pub const REQUIREMENT_IDS: [&str; 5] = ["req-length", "req-lowercase", "req-uppercase", "req-number", "req-special"];

pub struct StrengthMeter {
    fill: Element,
    text: Element,
}

impl StrengthMeter {
    pub fn attach(doc: &Document) -> Option<Self> {
        Some(Self {
            fill: doc.get_element_by_id("strengthFill")?,
            text: doc.get_element_by_id("strengthText")?,
        })
    }

    pub fn update(&self, password: &str) -> u8 {
        let strength = password_strength(password);
        for class in LEVEL_CLASSES {
            dom::set_class(&self.fill, class, false);
            dom::set_class(&self.text, class, false);
        }
        if let Some(level) = strength.level {
            dom::set_class(&self.fill, level.css_class(), true);
            dom::set_class(&self.text, level.css_class(), true);
        }
        self.text.set_text_content(Some(strength.label()));
        strength.score
    }
}

pub struct MatchIndicator {
    root: HtmlElement,
}

impl MatchIndicator {
    pub fn attach(doc: &Document) -> Option<Self> {
        Some(Self { root: dom::by_id(doc, "passwordMatch")? })
    }

    /// Hidden until the confirmation field has content
    pub fn update(&self, password: &HtmlInputElement, confirmation: &HtmlInputElement) {
        let second = confirmation.value();
        if second.is_empty() {
            dom::hide(&self.root);
            return;
        }
        dom::show(&self.root, "flex");

        let matched = passwords_match(&password.value(), &second);
        dom::set_class(&self.root, "no-match", !matched);
        if let Some(label) = dom::query::<Element>(&self.root, "span") {
            label.set_text_content(Some(if matched { "Passwords match" } else { "Passwords don't match" }));
        }
        if let Some(icon) = dom::query::<Element>(&self.root, "i") {
            icon.set_class_name(if matched { "fas fa-check-circle" } else { "fas fa-times-circle" });
        }
    }
}

/// Checklist of password requirements that ticks as the user types.
/// Missing indicators are skipped.
pub struct RequirementList {
    items: Vec<(usize, Element)>,
}

impl RequirementList {
    pub fn attach(doc: &Document) -> Option<Self> {
        let items: Vec<(usize, Element)> = REQUIREMENT_IDS
            .iter()
            .enumerate()
            .filter_map(|(i, id)| doc.get_element_by_id(id).map(|el| (i, el)))
            .collect();
        (!items.is_empty()).then_some(Self { items })
    }

    pub fn update(&self, password: &str) {
        let met = password_requirements(password);
        for (i, item) in &self.items {
            dom::set_class(item, "valid", met[*i]);
            if let Some(icon) = dom::query::<Element>(item, "i") {
                icon.set_class_name(if met[*i] { "fas fa-check" } else { "fas fa-times" });
            }
        }
    }
}
