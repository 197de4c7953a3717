use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::errors::ResourceError;

/// A single localized message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceEntry {
    pub key: String,
    pub value: String,
}

impl ResourceEntry {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Service port serving localized message strings for one locale.
#[async_trait]
pub trait ResourceProvider: Send + Sync {
    fn locale(&self) -> String;

    async fn get_message(&self, key: &str) -> Result<Option<ResourceEntry>, ResourceError>;

    async fn get_resource_entries(&self) -> Result<Vec<ResourceEntry>, ResourceError>;

    /// Provider to read from when this one is unavailable.
    fn fallback(&self) -> Option<Arc<dyn ResourceProvider>> {
        None
    }

    /// Value served when a key has no entry.
    fn default_value(&self, key: &str) -> String {
        key.to_string()
    }

    async fn get_message_value_or_default(&self, key: &str, fallback: &str) -> String {
        match self.get_message(key).await {
            Ok(Some(entry)) => entry.value,
            _ => fallback.to_string(),
        }
    }
}
