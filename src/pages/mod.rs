//! Page Controllers
//!
//! One controller per server-rendered page. `attach_all` offers the document
//! to each of them; a controller whose form or container is missing stays
//! inactive.

mod login;
mod password_reset;
mod profile;
mod profile_create;
mod recipe_detail;
mod recipe_form;
mod signup;

use std::rc::Rc;

use web_sys::{Document, HtmlButtonElement, HtmlFormElement, HtmlInputElement};

pub use login::LoginPage;
pub use password_reset::{PasswordResetConfirmPage, PasswordResetPage};
pub use profile::ProfilePage;
pub use profile_create::ProfileCreatePage;
pub use recipe_detail::RecipeDetailPage;
pub use recipe_form::RecipeFormPage;
pub use signup::SignupPage;

use crate::components::{nav, Notifier};
use crate::config::AppConfig;
use crate::dom;
use crate::error::js_error;

/// Controllers that found their page
#[derive(Default)]
pub struct ActivePages {
    pub signup: Option<Rc<SignupPage>>,
    pub login: Option<Rc<LoginPage>>,
    pub password_reset: Option<Rc<PasswordResetPage>>,
    pub password_reset_confirm: Option<Rc<PasswordResetConfirmPage>>,
    pub profile_create: Option<Rc<ProfileCreatePage>>,
    pub recipe_form: Option<Rc<RecipeFormPage>>,
    pub profile: Option<Rc<ProfilePage>>,
    pub recipe_detail: Option<Rc<RecipeDetailPage>>,
}

impl ActivePages {
    pub fn count(&self) -> usize {
        [
            self.signup.is_some(),
            self.login.is_some(),
            self.password_reset.is_some(),
            self.password_reset_confirm.is_some(),
            self.profile_create.is_some(),
            self.recipe_form.is_some(),
            self.profile.is_some(),
            self.recipe_detail.is_some(),
        ]
        .iter()
        .filter(|active| **active)
        .count()
    }
}

pub fn attach_all(doc: &Document, config: &AppConfig) -> ActivePages {
    let widgets = nav::attach(doc);
    report("nav", widgets > 0);

    let toasts = Notifier::mount(config.ui.toast_ms);
    let pages = ActivePages {
        signup: SignupPage::attach(doc, config),
        login: LoginPage::attach(doc),
        password_reset: PasswordResetPage::attach(doc),
        password_reset_confirm: PasswordResetConfirmPage::attach(doc),
        profile_create: ProfileCreatePage::attach(doc),
        recipe_form: RecipeFormPage::attach(doc, config),
        profile: ProfilePage::attach(doc, config),
        recipe_detail: toasts.and_then(|t| RecipeDetailPage::attach(doc, config, t)),
    };
    report("signup", pages.signup.is_some());
    report("login", pages.login.is_some());
    report("password reset", pages.password_reset.is_some());
    report("password reset confirm", pages.password_reset_confirm.is_some());
    report("create profile", pages.profile_create.is_some());
    report("recipe form", pages.recipe_form.is_some());
    report("profile", pages.profile.is_some());
    report("recipe detail", pages.recipe_detail.is_some());
    pages
}

fn report(name: &str, active: bool) {
    if active {
        log::debug!("[page] {} active", name);
    }
}

/// Show the loading look on `button`, then submit `form` natively after `delay_ms`
pub(crate) fn submit_after(form: &HtmlFormElement, button: Option<&HtmlButtonElement>, label: &str, delay_ms: u32) {
    if let Some(button) = button {
        dom::set_loading(button, label);
    }
    let form = form.clone();
    dom_events::delay(delay_ms as i32, move || {
        if let Err(e) = form.submit() {
            log::error!("[form] submit failed: {}", js_error(e));
        }
    });
}

/// Set only the `error` class from `rule`
pub(crate) fn flag(input: &HtmlInputElement, rule: fn(&str) -> bool) -> bool {
    let ok = rule(&input.value());
    dom::set_class(input, "error", !ok);
    ok
}
