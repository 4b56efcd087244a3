//! Error Types
//!
//! Every fallible operation in the UI layer returns `UiError`.
//! Event handlers decide whether an error becomes a toast or a log line.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum UiError {
    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Malformed response: {0}")]
    Decode(String),

    /// Server answered but reported failure
    #[error("{message}")]
    Api { message: String },

    #[error("DOM error: {0}")]
    Dom(String),
}

impl UiError {
    /// Message suitable for a toast; falls back to `fallback` for transport-level errors
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            UiError::Api { message } if !message.is_empty() => message.clone(),
            _ => fallback.to_string(),
        }
    }
}

impl From<serde_json::Error> for UiError {
    fn from(err: serde_json::Error) -> Self {
        UiError::Decode(err.to_string())
    }
}

impl From<gloo_net::Error> for UiError {
    fn from(err: gloo_net::Error) -> Self {
        UiError::Network(err.to_string())
    }
}

/// Render a JS exception for logs
pub fn js_error(value: wasm_bindgen::JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_message_is_shown_to_user() {
        let err = UiError::Api { message: "x".to_string() };
        assert_eq!(err.user_message("Failed to save recipe."), "x");
    }

    #[test]
    fn test_transport_errors_use_fallback() {
        let err = UiError::Network("connection reset".to_string());
        assert_eq!(err.user_message("Failed to save recipe."), "Failed to save recipe.");
        let empty = UiError::Api { message: String::new() };
        assert_eq!(empty.user_message("fallback"), "fallback");
    }
}
