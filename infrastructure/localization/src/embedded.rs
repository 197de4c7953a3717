use std::collections::HashMap;

use async_trait::async_trait;
use business::domain::localization::errors::ResourceError;
use business::domain::localization::provider::{ResourceEntry, ResourceProvider};

const ENGLISH: &str = include_str!("../resources/messages.en.json");
const SPANISH: &str = include_str!("../resources/messages.es.json");

/// Locales with a catalog compiled into the binary.
pub const SUPPORTED_LOCALES: &[&str] = &["en", "es"];

/// Message catalog compiled into the binary, one instance per locale.
#[derive(Debug, Clone)]
pub struct EmbeddedResourceProvider {
    locale: String,
    messages: HashMap<String, String>,
}

impl EmbeddedResourceProvider {
    pub fn new(locale: &str) -> Result<Self, ResourceError> {
        let catalog = match locale {
            "en" => ENGLISH,
            "es" => SPANISH,
            _ => return Err(ResourceError::ProviderUnavailable),
        };
        Self::from_json(locale, catalog)
    }

    pub fn english() -> Result<Self, ResourceError> {
        Self::new("en")
    }

    /// Parses a flat `{ "key": "message" }` JSON object.
    pub fn from_json(locale: &str, json: &str) -> Result<Self, ResourceError> {
        let messages: HashMap<String, String> = serde_json::from_str(json).map_err(|e| {
            tracing::error!("Malformed message catalog for {}: {}", locale, e);
            ResourceError::MalformedCatalog
        })?;

        Ok(Self {
            locale: locale.to_string(),
            messages,
        })
    }
}

#[async_trait]
impl ResourceProvider for EmbeddedResourceProvider {
    fn locale(&self) -> String {
        self.locale.clone()
    }

    async fn get_message(&self, key: &str) -> Result<Option<ResourceEntry>, ResourceError> {
        Ok(self
            .messages
            .get(key)
            .map(|value| ResourceEntry::new(key, value.as_str())))
    }

    async fn get_resource_entries(&self) -> Result<Vec<ResourceEntry>, ResourceError> {
        let mut entries: Vec<ResourceEntry> = self
            .messages
            .iter()
            .map(|(key, value)| ResourceEntry::new(key.as_str(), value.as_str()))
            .collect();
        entries.sort_by(|a, b| a.key.cmp(&b.key));
        Ok(entries)
    }
}
