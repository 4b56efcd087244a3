//! Password Reset Pages
//!
//! The request form only needs a valid email. The confirm form shows the
//! strength meter with a requirement checklist and refuses weak or
//! mismatched passwords. Both post natively once their checks pass.

use std::rc::Rc;

use dom_events::{on, Binding};
use web_sys::{Document, Element, Event, HtmlButtonElement, HtmlFormElement, HtmlInputElement};

use super::flag;
use crate::components::{MatchIndicator, RequirementList, StrengthMeter};
use crate::dom;
use crate::validation::{password_strength, passwords_match, valid_email};

/// Weakest score the confirm form accepts ("Fair")
const MIN_RESET_SCORE: u8 = 3;

fn reset_email_ok(value: &str) -> bool {
    !value.trim().is_empty() && valid_email(value)
}

/// Alert for the confirm form, if any. Strength is checked before the match.
pub fn reset_confirm_problem(score: u8, matched: bool) -> Option<&'static str> {
    if score < MIN_RESET_SCORE {
        Some("Please choose a stronger password that meets all requirements.")
    } else if !matched {
        Some("Passwords don't match. Please make sure both passwords are identical.")
    } else {
        None
    }
}

// ========================
// Request
// ========================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ResetEvent {
    EmailLeft,
    EmailTyped,
    Submit,
}

const RESET_EVENTS: &[Binding<ResetEvent>] = &[
    on("email", "blur", ResetEvent::EmailLeft),
    on("email", "input", ResetEvent::EmailTyped),
    on("passwordResetForm", "submit", ResetEvent::Submit),
];

pub struct PasswordResetPage {
    submit: Option<HtmlButtonElement>,
    email: HtmlInputElement,
}

impl PasswordResetPage {
    pub fn attach(doc: &Document) -> Option<Rc<Self>> {
        let _form: HtmlFormElement = dom::by_id(doc, "passwordResetForm")?;
        let page = Rc::new(Self {
            submit: dom::by_id(doc, "submitBtn"),
            email: dom::by_id(doc, "email")?,
        });
        let p = Rc::clone(&page);
        dom_events::bind_table(doc, RESET_EVENTS, move |event, ev| p.handle(event, ev));
        Some(page)
    }

    fn handle(&self, event: ResetEvent, ev: Event) {
        match event {
            ResetEvent::EmailLeft => {
                flag(&self.email, reset_email_ok);
            }
            ResetEvent::EmailTyped => dom::set_class(&self.email, "error", false),
            ResetEvent::Submit => {
                if !flag(&self.email, reset_email_ok) {
                    ev.prevent_default();
                    return;
                }
                if let Some(button) = &self.submit {
                    dom::set_loading(button, "Sending...");
                }
            }
        }
    }
}

// ========================
// Confirm
// ========================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConfirmEvent {
    ShowPassword,
    ShowConfirmation,
    PasswordTyped,
    ConfirmationTyped,
    Submit,
}

const CONFIRM_EVENTS: &[Binding<ConfirmEvent>] = &[
    on("togglePassword1", "click", ConfirmEvent::ShowPassword),
    on("togglePassword2", "click", ConfirmEvent::ShowConfirmation),
    on("new_password1", "input", ConfirmEvent::PasswordTyped),
    on("new_password2", "input", ConfirmEvent::ConfirmationTyped),
    on("passwordResetConfirmForm", "submit", ConfirmEvent::Submit),
];

pub struct PasswordResetConfirmPage {
    submit: Option<HtmlButtonElement>,
    password: HtmlInputElement,
    confirmation: HtmlInputElement,
    toggles: [Option<Element>; 2],
    meter: Option<StrengthMeter>,
    requirements: Option<RequirementList>,
    matcher: Option<MatchIndicator>,
}

impl PasswordResetConfirmPage {
    pub fn attach(doc: &Document) -> Option<Rc<Self>> {
        let _form: HtmlFormElement = dom::by_id(doc, "passwordResetConfirmForm")?;
        let page = Rc::new(Self {
            submit: dom::by_id(doc, "submitBtn"),
            password: dom::by_id(doc, "new_password1")?,
            confirmation: dom::by_id(doc, "new_password2")?,
            toggles: [doc.get_element_by_id("togglePassword1"), doc.get_element_by_id("togglePassword2")],
            meter: StrengthMeter::attach(doc),
            requirements: RequirementList::attach(doc),
            matcher: MatchIndicator::attach(doc),
        });
        let p = Rc::clone(&page);
        dom_events::bind_table(doc, CONFIRM_EVENTS, move |event, ev| p.handle(event, ev));
        page.refresh_strength();
        Some(page)
    }

    fn handle(&self, event: ConfirmEvent, ev: Event) {
        match event {
            ConfirmEvent::ShowPassword => self.toggle_visibility(0, &self.password),
            ConfirmEvent::ShowConfirmation => self.toggle_visibility(1, &self.confirmation),
            ConfirmEvent::PasswordTyped => {
                self.refresh_strength();
                if !self.confirmation.value().is_empty() {
                    self.refresh_match();
                }
            }
            ConfirmEvent::ConfirmationTyped => self.refresh_match(),
            ConfirmEvent::Submit => {
                let score = self.refresh_strength();
                let matched = passwords_match(&self.password.value(), &self.confirmation.value());
                if let Some(problem) = reset_confirm_problem(score, matched) {
                    ev.prevent_default();
                    dom::alert(problem);
                    return;
                }
                if let Some(button) = &self.submit {
                    dom::set_loading(button, "Resetting Password...");
                }
            }
        }
    }

    fn toggle_visibility(&self, slot: usize, input: &HtmlInputElement) {
        if let Some(toggle) = &self.toggles[slot] {
            dom::toggle_password_visibility(input, toggle);
        }
    }

    /// Repaint the meter and checklist, returning the score
    fn refresh_strength(&self) -> u8 {
        let password = self.password.value();
        if let Some(requirements) = &self.requirements {
            requirements.update(&password);
        }
        match &self.meter {
            Some(meter) => meter.update(&password),
            None => password_strength(&password).score,
        }
    }

    fn refresh_match(&self) {
        if let Some(matcher) = &self.matcher {
            matcher.update(&self.password, &self.confirmation);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reset_email_rule() {
        assert!(reset_email_ok("cook@example.com"));
        assert!(!reset_email_ok("   "));
        assert!(!reset_email_ok("cook@example"));
    }

    #[test]
    fn test_weak_password_reported_before_mismatch() {
        assert_eq!(
            reset_confirm_problem(2, false),
            Some("Please choose a stronger password that meets all requirements.")
        );
        assert_eq!(
            reset_confirm_problem(2, true),
            Some("Please choose a stronger password that meets all requirements.")
        );
    }

    #[test]
    fn test_fair_password_must_still_match() {
        assert!(reset_confirm_problem(3, false).unwrap().starts_with("Passwords don't match"));
        assert_eq!(reset_confirm_problem(3, true), None);
        assert_eq!(reset_confirm_problem(5, true), None);
    }

    #[test]
    fn test_scores_from_real_passwords() {
        let fair = password_strength("abcdefgH").score;
        assert_eq!(reset_confirm_problem(fair, true), None);
        let weak = password_strength("abcdefgh").score;
        assert!(reset_confirm_problem(weak, true).is_some());
    }

    #[test]
    fn test_event_tables_name_their_forms() {
        assert!(dom_events::element_ids(RESET_EVENTS).contains(&"passwordResetForm"));
        assert_eq!(dom_events::element_ids(RESET_EVENTS).len(), 2);
        assert_eq!(dom_events::element_ids(CONFIRM_EVENTS).len(), CONFIRM_EVENTS.len());
    }
}
