//! Saved Recipe Endpoints

use gloo_net::http::Request;

use super::{read_json, Api};
use crate::config::ApiConfig;
use crate::error::UiError;
use crate::models::{SaveResponse, SavedStatus, ToggleSaveResponse};

impl Api {
    pub async fn check_saved(&self, recipe_id: &str) -> Result<bool, UiError> {
        let url = ApiConfig::url(&self.paths.check_saved, recipe_id);
        let response = self.with_headers(Request::get(&url)).send().await?;
        let status: SavedStatus = read_json(response).await?;
        Ok(status.is_saved)
    }

    pub async fn save_recipe(&self, recipe_id: &str) -> Result<SaveResponse, UiError> {
        let url = ApiConfig::url(&self.paths.save, recipe_id);
        let response = self.with_headers(Request::post(&url)).send().await?;
        read_json(response).await
    }

    pub async fn unsave_recipe(&self, recipe_id: &str) -> Result<SaveResponse, UiError> {
        let url = ApiConfig::url(&self.paths.unsave, recipe_id);
        let response = self.with_headers(Request::post(&url)).send().await?;
        read_json(response).await
    }

    /// Single-endpoint toggle used by the compact detail layout
    pub async fn toggle_saved(&self, recipe_id: &str) -> Result<bool, UiError> {
        let url = ApiConfig::url(&self.paths.legacy_toggle_save, recipe_id);
        let response = self.with_headers(Request::post(&url)).send().await?;
        let body: ToggleSaveResponse = read_json(response).await?;
        Ok(body.saved)
    }
}
