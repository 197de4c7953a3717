use std::collections::HashMap;

use super::errors::ResourceError;
use super::provider::ResourceProvider;

/// Returned by [`ResourceHandler::get_resource`] for keys that were not preloaded.
pub const RESOURCE_NOT_FOUND: &str = "Resource not found.";

/// In-memory lookup of the localized messages a call site declared up front.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResourceHandler {
    resources: HashMap<String, String>,
}

impl ResourceHandler {
    /// Fetches every key from the provider, one lookup per key.
    ///
    /// Keys without an entry get the provider default value.
    pub async fn create(
        provider: &dyn ResourceProvider,
        keys: &[&str],
    ) -> Result<Self, ResourceError> {
        if keys.is_empty() {
            return Err(ResourceError::EmptyKeys);
        }

        let mut resources = HashMap::with_capacity(keys.len());
        for key in keys {
            let fallback = provider.default_value(key);
            let value = provider.get_message_value_or_default(key, &fallback).await;
            resources.insert((*key).to_string(), value);
        }

        Ok(Self { resources })
    }

    pub(crate) fn from_map(resources: HashMap<String, String>) -> Self {
        Self { resources }
    }

    /// Handler with no preloaded keys; every lookup yields the sentinel.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn get_resource(&self, key: &str) -> &str {
        self.resources
            .get(key)
            .map(String::as_str)
            .unwrap_or(RESOURCE_NOT_FOUND)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.resources.contains_key(key)
    }

    /// Resolves `key` and fills the `{entity}` placeholder.
    pub fn format(&self, key: &str, entity: &str) -> String {
        self.get_resource(key).replace("{entity}", entity)
    }

    /// Resolves `key` and fills the `{entity}` and `{field}` placeholders.
    pub fn format_field(&self, key: &str, entity: &str, field: &str) -> String {
        self.format(key, entity).replace("{field}", field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::localization::provider::ResourceEntry;
    use async_trait::async_trait;
    use mockall::mock;

    mock! {
        pub Provider {}

        #[async_trait]
        impl ResourceProvider for Provider {
            fn locale(&self) -> String;
            async fn get_message(&self, key: &str) -> Result<Option<ResourceEntry>, ResourceError>;
            async fn get_resource_entries(&self) -> Result<Vec<ResourceEntry>, ResourceError>;
        }
    }

    fn provider_with(entries: Vec<(&'static str, &'static str)>) -> MockProvider {
        let mut provider = MockProvider::new();
        provider.expect_locale().return_const("en".to_string());
        provider.expect_get_message().returning(move |key| {
            Ok(entries
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(k, v)| ResourceEntry::new(*k, *v)))
        });
        provider
    }

    #[tokio::test]
    async fn should_fail_when_keys_are_empty() {
        let provider = provider_with(vec![]);

        let result = ResourceHandler::create(&provider, &[]).await;

        assert_eq!(result.unwrap_err(), ResourceError::EmptyKeys);
    }

    #[tokio::test]
    async fn should_preload_declared_keys() {
        let provider = provider_with(vec![("Greeting", "Hello {entity}")]);

        let handler = ResourceHandler::create(&provider, &["Greeting"]).await.unwrap();

        assert_eq!(handler.get_resource("Greeting"), "Hello {entity}");
        assert_eq!(handler.format("Greeting", "User"), "Hello User");
    }

    #[tokio::test]
    async fn should_use_provider_default_for_missing_entries() {
        let provider = provider_with(vec![]);

        let handler = ResourceHandler::create(&provider, &["Missing"]).await.unwrap();

        assert!(handler.contains("Missing"));
        assert_eq!(handler.get_resource("Missing"), "Missing");
    }

    #[tokio::test]
    async fn should_return_sentinel_for_unknown_keys() {
        let provider = provider_with(vec![("Known", "value")]);

        let handler = ResourceHandler::create(&provider, &["Known"]).await.unwrap();

        assert_eq!(handler.get_resource("Unknown"), RESOURCE_NOT_FOUND);
    }

    #[test]
    fn should_fill_entity_and_field_placeholders() {
        let mut map = HashMap::new();
        map.insert(
            "Dup".to_string(),
            "A {entity} with the same {field} already exists.".to_string(),
        );
        let handler = ResourceHandler::from_map(map);

        assert_eq!(
            handler.format_field("Dup", "Resource", "name"),
            "A Resource with the same name already exists."
        );
    }
}
