//! Login Page

use std::rc::Rc;

use dom_events::{on, Binding};
use web_sys::{Document, Element, Event, HtmlButtonElement, HtmlFormElement, HtmlInputElement};

use super::flag;
use crate::dom;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LoginEvent {
    ShowPassword,
    UsernameLeft,
    PasswordLeft,
    UsernameTyped,
    PasswordTyped,
    Submit,
}

const LOGIN_EVENTS: &[Binding<LoginEvent>] = &[
    on("togglePassword", "click", LoginEvent::ShowPassword),
    on("username", "blur", LoginEvent::UsernameLeft),
    on("password", "blur", LoginEvent::PasswordLeft),
    on("username", "input", LoginEvent::UsernameTyped),
    on("password", "input", LoginEvent::PasswordTyped),
    on("loginForm", "submit", LoginEvent::Submit),
];

fn username_present(value: &str) -> bool {
    !value.trim().is_empty()
}

fn password_present(value: &str) -> bool {
    !value.is_empty()
}

pub struct LoginPage {
    submit: Option<HtmlButtonElement>,
    username: HtmlInputElement,
    password: HtmlInputElement,
    toggle: Option<Element>,
}

impl LoginPage {
    pub fn attach(doc: &Document) -> Option<Rc<Self>> {
        let _form: HtmlFormElement = dom::by_id(doc, "loginForm")?;
        let page = Rc::new(Self {
            submit: dom::by_id(doc, "submitBtn"),
            username: dom::by_id(doc, "username")?,
            password: dom::by_id(doc, "password")?,
            toggle: doc.get_element_by_id("togglePassword"),
        });
        let p = Rc::clone(&page);
        dom_events::bind_table(doc, LOGIN_EVENTS, move |event, ev| p.handle(event, ev));
        Some(page)
    }

    fn handle(&self, event: LoginEvent, ev: Event) {
        match event {
            LoginEvent::ShowPassword => {
                if let Some(toggle) = &self.toggle {
                    dom::toggle_password_visibility(&self.password, toggle);
                }
            }
            LoginEvent::UsernameLeft => {
                flag(&self.username, username_present);
            }
            LoginEvent::PasswordLeft => {
                flag(&self.password, password_present);
            }
            LoginEvent::UsernameTyped => dom::set_class(&self.username, "error", false),
            LoginEvent::PasswordTyped => dom::set_class(&self.password, "error", false),
            LoginEvent::Submit => {
                // Both fields are checked so both get flagged
                let user_ok = flag(&self.username, username_present);
                let pass_ok = flag(&self.password, password_present);
                if !(user_ok && pass_ok) {
                    ev.prevent_default();
                    return;
                }
                // Native submit continues
                if let Some(button) = &self.submit {
                    dom::set_loading(button, "Logging In...");
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presence_rules() {
        assert!(!username_present("   "));
        assert!(username_present(" chef "));
        // Passwords are not trimmed
        assert!(password_present(" "));
        assert!(!password_present(""));
    }

    #[test]
    fn test_fields_have_blur_and_input_rows() {
        let username_rows: Vec<_> = LOGIN_EVENTS.iter().filter(|b| b.element_id == "username").collect();
        assert_eq!(username_rows.len(), 2);
        assert_eq!(dom_events::element_ids(LOGIN_EVENTS).len(), 4);
    }
}
