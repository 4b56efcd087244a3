//! Runtime Configuration
//!
//! Every field has a default matching the server's routes, so pages work
//! without any config. A page may override fields through a global
//! `window.RECIPE_UI_CONFIG` object or a JSON block
//! `<script type="application/json" id="recipe-ui-config">`.

use log::LevelFilter;
use serde::Deserialize;
use wasm_bindgen::JsValue;

pub const CONFIG_GLOBAL: &str = "RECIPE_UI_CONFIG";
pub const CONFIG_ELEMENT_ID: &str = "recipe-ui-config";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub log_level: String,
    pub api: ApiConfig,
    pub storage: StorageKeys,
    pub ui: UiTimings,
}

/// Server endpoints; `{id}` is replaced by the recipe id
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub check_saved: String,
    pub save: String,
    pub unsave: String,
    pub legacy_toggle_save: String,
    pub csrf_cookie: String,
    pub csrf_field: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct StorageKeys {
    pub checked_ingredients: String,
    pub completed_steps: String,
}

/// Durations in milliseconds, offsets in pixels
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct UiTimings {
    pub toast_ms: u32,
    pub modal_autohide_ms: u32,
    pub submit_delay_ms: u32,
    pub review_reload_ms: u32,
    pub copied_feedback_ms: u32,
    pub scroll_threshold_px: f64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            api: ApiConfig::default(),
            storage: StorageKeys::default(),
            ui: UiTimings::default(),
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            check_saved: "/review/api/check-saved-recipe/{id}/".to_string(),
            save: "/review/api/save-recipe/{id}/".to_string(),
            unsave: "/review/api/unsave-recipe/{id}/".to_string(),
            legacy_toggle_save: "/api/recipes/{id}/save/".to_string(),
            csrf_cookie: "csrftoken".to_string(),
            csrf_field: "csrfmiddlewaretoken".to_string(),
        }
    }
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self {
            checked_ingredients: "checkedIngredients".to_string(),
            completed_steps: "completedSteps".to_string(),
        }
    }
}

impl Default for UiTimings {
    fn default() -> Self {
        Self {
            toast_ms: 3000,
            modal_autohide_ms: 5000,
            submit_delay_ms: 1000,
            review_reload_ms: 1000,
            copied_feedback_ms: 2000,
            scroll_threshold_px: 300.0,
        }
    }
}

impl ApiConfig {
    pub fn url(template: &str, recipe_id: &str) -> String {
        template.replace("{id}", recipe_id)
    }
}

impl AppConfig {
    /// Parse a JSON override; unknown fields are ignored, missing ones defaulted
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    pub fn log_filter(&self) -> LevelFilter {
        self.log_level.parse().unwrap_or(LevelFilter::Info)
    }

    /// Load from the page, falling back to defaults
    pub fn load() -> Self {
        if let Some(found) = Self::from_global() {
            return found;
        }
        Self::from_script_block().unwrap_or_default()
    }

    fn from_global() -> Option<Self> {
        let window = web_sys::window()?;
        let value = js_sys::Reflect::get(&window, &JsValue::from_str(CONFIG_GLOBAL)).ok()?;
        if value.is_undefined() || value.is_null() {
            return None;
        }
        match serde_wasm_bindgen::from_value(value) {
            Ok(config) => Some(config),
            Err(e) => {
                log::warn!("[config] window.{} is invalid, using defaults: {}", CONFIG_GLOBAL, e);
                None
            }
        }
    }

    fn from_script_block() -> Option<Self> {
        let doc = web_sys::window()?.document()?;
        let raw = doc.get_element_by_id(CONFIG_ELEMENT_ID)?.text_content()?;
        match Self::from_json(&raw) {
            Ok(config) => Some(config),
            Err(e) => {
                log::warn!("[config] #{} is invalid, using defaults: {}", CONFIG_ELEMENT_ID, e);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_override_keeps_defaults() {
        let config = AppConfig::from_json(r#"{"log_level":"debug","api":{"save":"/s/{id}"}}"#).unwrap();
        assert_eq!(config.log_filter(), LevelFilter::Debug);
        assert_eq!(config.api.save, "/s/{id}");
        assert_eq!(config.api.unsave, "/review/api/unsave-recipe/{id}/");
        assert_eq!(config.storage.completed_steps, "completedSteps");
        assert_eq!(config.ui.toast_ms, 3000);
    }

    #[test]
    fn test_bad_log_level_falls_back_to_info() {
        let config = AppConfig { log_level: "loud".to_string(), ..AppConfig::default() };
        assert_eq!(config.log_filter(), LevelFilter::Info);
    }

    #[test]
    fn test_url_substitutes_recipe_id() {
        let api = ApiConfig::default();
        assert_eq!(ApiConfig::url(&api.check_saved, "42"), "/review/api/check-saved-recipe/42/");
        assert_eq!(ApiConfig::url(&api.legacy_toggle_save, "pie"), "/api/recipes/pie/save/");
    }
}
