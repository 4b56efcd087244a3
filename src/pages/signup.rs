//! Signup Page
//!
//! Field checks on blur, live password strength and match, and a final
//! check on submit before the form is posted.

use std::rc::Rc;

use dom_events::{on, Binding};
use web_sys::{Document, Event, HtmlButtonElement, HtmlFormElement, HtmlInputElement};

use super::submit_after;
use crate::components::{MatchIndicator, StrengthMeter};
use crate::config::AppConfig;
use crate::dom;
use crate::validation::{passwords_match, valid_email, valid_name, valid_password, valid_username};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SignupEvent {
    ShowPassword,
    ShowConfirmation,
    PasswordTyped,
    ConfirmationTyped,
    FirstNameLeft,
    LastNameLeft,
    UsernameLeft,
    EmailLeft,
    Submit,
}

const SIGNUP_EVENTS: &[Binding<SignupEvent>] = &[
    on("togglePassword1", "click", SignupEvent::ShowPassword),
    on("togglePassword2", "click", SignupEvent::ShowConfirmation),
    on("password1", "input", SignupEvent::PasswordTyped),
    on("password2", "input", SignupEvent::ConfirmationTyped),
    on("first_name", "blur", SignupEvent::FirstNameLeft),
    on("last_name", "blur", SignupEvent::LastNameLeft),
    on("username", "blur", SignupEvent::UsernameLeft),
    on("email", "blur", SignupEvent::EmailLeft),
    on("signupForm", "submit", SignupEvent::Submit),
];

/// Result of checking every field at submit time
#[derive(Debug, Clone, Copy, Default)]
pub struct SignupChecks {
    pub first_name: bool,
    pub last_name: bool,
    pub username: bool,
    pub email: bool,
    pub password: bool,
    pub confirmation: bool,
    pub terms: bool,
}

/// Alert to show, if any. Unaccepted terms are reported before field errors.
pub fn signup_problem(checks: &SignupChecks) -> Option<&'static str> {
    if !checks.terms {
        return Some("Please accept the Terms of Service and Privacy Policy to continue.");
    }
    let all_valid = checks.first_name
        && checks.last_name
        && checks.username
        && checks.email
        && checks.password
        && checks.confirmation;
    (!all_valid).then_some("Please correct the errors in the form before submitting.")
}

pub struct SignupPage {
    form: HtmlFormElement,
    submit: Option<HtmlButtonElement>,
    first_name: HtmlInputElement,
    last_name: HtmlInputElement,
    username: HtmlInputElement,
    email: HtmlInputElement,
    password: HtmlInputElement,
    confirmation: HtmlInputElement,
    terms: Option<HtmlInputElement>,
    meter: Option<StrengthMeter>,
    matcher: Option<MatchIndicator>,
    submit_delay_ms: u32,
}

impl SignupPage {
    pub fn attach(doc: &Document, config: &AppConfig) -> Option<Rc<Self>> {
        let page = Rc::new(Self {
            form: dom::by_id(doc, "signupForm")?,
            submit: dom::by_id(doc, "submitBtn"),
            first_name: dom::by_id(doc, "first_name")?,
            last_name: dom::by_id(doc, "last_name")?,
            username: dom::by_id(doc, "username")?,
            email: dom::by_id(doc, "email")?,
            password: dom::by_id(doc, "password1")?,
            confirmation: dom::by_id(doc, "password2")?,
            terms: dom::by_id(doc, "terms"),
            meter: StrengthMeter::attach(doc),
            matcher: MatchIndicator::attach(doc),
            submit_delay_ms: config.ui.submit_delay_ms,
        });

        let p = Rc::clone(&page);
        dom_events::bind_table(doc, SIGNUP_EVENTS, move |event, ev| p.handle(event, ev));

        if let Some(meter) = &page.meter {
            meter.update(&page.password.value());
        }
        Some(page)
    }

    fn handle(&self, event: SignupEvent, ev: Event) {
        match event {
            SignupEvent::ShowPassword => self.toggle_visibility(&self.password, "togglePassword1"),
            SignupEvent::ShowConfirmation => self.toggle_visibility(&self.confirmation, "togglePassword2"),
            SignupEvent::PasswordTyped => {
                if let Some(meter) = &self.meter {
                    meter.update(&self.password.value());
                }
                self.check_password();
                if !self.confirmation.value().is_empty() {
                    self.refresh_match();
                }
            }
            SignupEvent::ConfirmationTyped => {
                self.refresh_match();
                self.check_confirmation();
            }
            SignupEvent::FirstNameLeft => {
                check(&self.first_name, valid_name);
            }
            SignupEvent::LastNameLeft => {
                check(&self.last_name, valid_name);
            }
            SignupEvent::UsernameLeft => {
                check(&self.username, valid_username);
            }
            SignupEvent::EmailLeft => {
                check(&self.email, valid_email);
            }
            SignupEvent::Submit => {
                ev.prevent_default();
                self.submit();
            }
        }
    }

    fn toggle_visibility(&self, input: &HtmlInputElement, toggle_id: &str) {
        if let Some(toggle) = dom::document().and_then(|d| d.get_element_by_id(toggle_id)) {
            dom::toggle_password_visibility(input, &toggle);
        }
    }

    fn refresh_match(&self) {
        if let Some(matcher) = &self.matcher {
            matcher.update(&self.password, &self.confirmation);
        }
    }

    fn check_password(&self) -> bool {
        check(&self.password, valid_password)
    }

    fn check_confirmation(&self) -> bool {
        let valid = passwords_match(&self.password.value(), &self.confirmation.value());
        dom::mark_field(&self.confirmation, valid);
        valid
    }

    fn submit(&self) {
        let checks = SignupChecks {
            first_name: check(&self.first_name, valid_name),
            last_name: check(&self.last_name, valid_name),
            username: check(&self.username, valid_username),
            email: check(&self.email, valid_email),
            password: self.check_password(),
            confirmation: self.check_confirmation(),
            terms: self.terms.as_ref().map(|t| t.checked()).unwrap_or(true),
        };
        if let Some(problem) = signup_problem(&checks) {
            dom::alert(problem);
            return;
        }
        submit_after(&self.form, self.submit.as_ref(), "Creating Account...", self.submit_delay_ms);
    }
}

/// Run `rule` on the input's value and mark the field
fn check(input: &HtmlInputElement, rule: fn(&str) -> bool) -> bool {
    let valid = rule(&input.value());
    dom::mark_field(input, valid);
    valid
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_valid() -> SignupChecks {
        SignupChecks {
            first_name: true,
            last_name: true,
            username: true,
            email: true,
            password: true,
            confirmation: true,
            terms: true,
        }
    }

    #[test]
    fn test_valid_form_has_no_problem() {
        assert_eq!(signup_problem(&all_valid()), None);
    }

    #[test]
    fn test_terms_reported_before_field_errors() {
        let checks = SignupChecks { terms: false, email: false, ..all_valid() };
        assert!(signup_problem(&checks).unwrap().contains("Terms of Service"));
    }

    #[test]
    fn test_any_invalid_field_blocks_submit() {
        let checks = SignupChecks { confirmation: false, ..all_valid() };
        assert_eq!(
            signup_problem(&checks),
            Some("Please correct the errors in the form before submitting.")
        );
    }

    #[test]
    fn test_every_control_bound_once() {
        let ids = dom_events::element_ids(SIGNUP_EVENTS);
        assert_eq!(ids.len(), SIGNUP_EVENTS.len());
        assert!(ids.contains(&"signupForm"));
    }
}
