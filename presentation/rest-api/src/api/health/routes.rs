use chrono::Utc;
use poem_openapi::{Object, OpenApi, payload::Json};
use serde::{Deserialize, Serialize};

use crate::api::tags::ApiTags;

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct HealthCheckResponse {
    pub status: String,
    /// Current server timestamp in RFC 3339 format
    pub timestamp: String,
    pub version: String,
    /// "postgres" or "memory"
    pub storage: String,
    /// Locales the message catalog can serve
    pub locales: Vec<String>,
}

/// Liveness endpoint, public and without side effects.
pub struct Api {
    storage: &'static str,
    locales: Vec<String>,
}

impl Api {
    pub fn new(storage: &'static str, locales: Vec<String>) -> Self {
        Self { storage, locales }
    }
}

#[OpenApi]
impl Api {
    /// Health check endpoint
    ///
    /// Reports that the service is up, which storage backend it was wired
    /// with and the locales available for response messages.
    #[oai(path = "/health", method = "get", tag = "ApiTags::Health")]
    async fn health_check(&self) -> Json<HealthCheckResponse> {
        Json(HealthCheckResponse {
            status: "healthy".to_string(),
            timestamp: Utc::now().to_rfc3339(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            storage: self.storage.to_string(),
            locales: self.locales.clone(),
        })
    }
}
