//! Server API Bindings
//!
//! Thin async wrappers over the recipe server's JSON endpoints.
//! Every call carries the page's CSRF token. No retries.

mod review;
mod saved;

use gloo_net::http::{RequestBuilder, Response};
use serde::de::DeserializeOwned;

use crate::config::ApiConfig;
use crate::error::UiError;

/// Endpoint paths plus the token read at page load
#[derive(Debug, Clone)]
pub struct Api {
    pub paths: ApiConfig,
    pub csrf: String,
}

impl Api {
    pub fn new(paths: ApiConfig, csrf: String) -> Self {
        Self { paths, csrf }
    }

    fn with_headers(&self, builder: RequestBuilder) -> RequestBuilder {
        builder
            .header("X-CSRFToken", &self.csrf)
            .header("Content-Type", "application/json")
    }
}

/// Decode a JSON body, treating non-2xx as failure
async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, UiError> {
    if !response.ok() {
        return Err(UiError::Network(format!("request failed with status {}", response.status())));
    }
    response.json::<T>().await.map_err(|e| UiError::Decode(e.to_string()))
}
