//! API Models
//!
//! Response bodies returned by the recipe server.

use serde::Deserialize;

/// `GET /review/api/check-saved-recipe/{id}/`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SavedStatus {
    #[serde(default)]
    pub is_saved: bool,
}

/// `POST /review/api/save-recipe/{id}/` and `.../unsave-recipe/{id}/`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SaveResponse {
    #[serde(default)]
    pub success: bool,
    pub saved: Option<bool>,
    pub message: Option<String>,
}

/// `POST /api/recipes/{id}/save/`, a toggle that reports the new state
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ToggleSaveResponse {
    pub saved: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_response_optional_fields() {
        let ok: SaveResponse = serde_json::from_str(r#"{"success":true,"saved":true}"#).unwrap();
        assert_eq!(ok, SaveResponse { success: true, saved: Some(true), message: None });

        let failed: SaveResponse = serde_json::from_str(r#"{"success":false,"message":"x"}"#).unwrap();
        assert!(!failed.success);
        assert_eq!(failed.message.as_deref(), Some("x"));
    }

    #[test]
    fn test_saved_status_defaults_to_false() {
        let status: SavedStatus = serde_json::from_str("{}").unwrap();
        assert!(!status.is_saved);
    }
}
