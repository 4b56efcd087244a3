//! Review Submission

use gloo_net::http::Request;
use web_sys::{FormData, HtmlFormElement};

use super::Api;
use crate::error::{js_error, UiError};

impl Api {
    /// POST the review form to its own action; any 2xx counts as success
    pub async fn submit_review(&self, form: &HtmlFormElement) -> Result<(), UiError> {
        let body = FormData::new_with_form(form).map_err(|e| UiError::Dom(js_error(e)))?;
        let response = Request::post(&form.action())
            .header("X-CSRFToken", &self.csrf)
            .body(body)?
            .send()
            .await?;
        if response.ok() {
            Ok(())
        } else {
            Err(UiError::Api {
                message: format!("Review rejected with status {}", response.status()),
            })
        }
    }
}
