use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use business::domain::localization::errors::ResourceError;
use business::domain::localization::provider::{ResourceEntry, ResourceProvider};
use business::domain::resource::model::Resource;
use business::domain::shared::value_objects::Page;
use business::domain::store::{EntityStore, predicate};

/// Serves the active `Resource` records of a store as localized messages.
///
/// Keys missing from the store are looked up in the optional fallback
/// provider, so stored records override the embedded catalog.
pub struct StoreResourceProvider {
    locale: String,
    store: Arc<dyn EntityStore<Resource>>,
    fallback: Option<Arc<dyn ResourceProvider>>,
}

impl StoreResourceProvider {
    pub fn new(locale: impl Into<String>, store: Arc<dyn EntityStore<Resource>>) -> Self {
        Self {
            locale: locale.into(),
            store,
            fallback: None,
        }
    }

    pub fn with_fallback(mut self, fallback: Arc<dyn ResourceProvider>) -> Self {
        self.fallback = Some(fallback);
        self
    }
}

#[async_trait]
impl ResourceProvider for StoreResourceProvider {
    fn locale(&self) -> String {
        self.locale.clone()
    }

    async fn get_message(&self, key: &str) -> Result<Option<ResourceEntry>, ResourceError> {
        let found = self
            .store
            .find_filtered(key, Some(Page::new(0, 1)))
            .await
            .map_err(|e| {
                tracing::warn!("Resource store unavailable: {}", e);
                ResourceError::ProviderUnavailable
            })?;

        if let Some(resource) = found.into_iter().find(|r| r.active) {
            return Ok(Some(ResourceEntry::new(resource.name, resource.value)));
        }
        match &self.fallback {
            Some(fallback) => fallback.get_message(key).await,
            None => Ok(None),
        }
    }

    fn fallback(&self) -> Option<Arc<dyn ResourceProvider>> {
        self.fallback.clone()
    }

    /// Fails when the store is unreachable even if a fallback is set; callers
    /// read [`ResourceProvider::fallback`] themselves so a partial catalog is
    /// never mistaken for a complete one.
    async fn get_resource_entries(&self) -> Result<Vec<ResourceEntry>, ResourceError> {
        let stored = self
            .store
            .query(predicate(|r: &Resource| r.active), None)
            .await
            .map_err(|e| {
                tracing::warn!("Resource store unavailable: {}", e);
                ResourceError::ProviderUnavailable
            })?;

        let mut merged = BTreeMap::new();
        if let Some(fallback) = &self.fallback {
            for entry in fallback.get_resource_entries().await? {
                merged.insert(entry.key, entry.value);
            }
        }
        for resource in stored {
            merged.insert(resource.name, resource.value);
        }

        Ok(merged
            .into_iter()
            .map(|(key, value)| ResourceEntry::new(key, value))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::embedded::EmbeddedResourceProvider;
    use business::domain::errors::RepositoryError;
    use business::domain::store::Predicate;
    use mockall::mock;

    mock! {
        pub ResourceStore {}

        #[async_trait]
        impl EntityStore<Resource> for ResourceStore {
            async fn find_by_id(&self, id: &str) -> Result<Option<Resource>, RepositoryError>;
            async fn query(&self, predicate: Predicate<Resource>, page: Option<Page>) -> Result<Vec<Resource>, RepositoryError>;
            async fn count(&self, predicate: Predicate<Resource>) -> Result<u64, RepositoryError>;
            async fn find_filtered(&self, filter: &str, page: Option<Page>) -> Result<Vec<Resource>, RepositoryError>;
            async fn count_filtered(&self, filter: &str) -> Result<u64, RepositoryError>;
            async fn exists_unique_key(&self, key: &str, owner_id: &str) -> Result<bool, RepositoryError>;
            async fn add(&self, entity: Resource) -> Result<(), RepositoryError>;
            async fn update(&self, entity: Resource) -> Result<(), RepositoryError>;
            async fn remove(&self, id: &str) -> Result<(), RepositoryError>;
        }
    }

    fn records() -> Vec<Resource> {
        let mut active = Resource::new("EntityNotFound", "No {entity} here.", "Custom wording");
        active.active = true;
        let inactive = Resource::new("InvalidGuid", "Never served", "Still a draft");
        vec![active, inactive]
    }

    fn store_over(records: Vec<Resource>) -> Arc<dyn EntityStore<Resource>> {
        let by_name = records.clone();
        let mut store = MockResourceStore::new();
        store.expect_query().returning(move |matches, _| {
            Ok(records.iter().filter(|r| matches(*r)).cloned().collect())
        });
        store.expect_find_filtered().returning(move |name, page| {
            let hits = by_name.iter().filter(|r| r.name == name).cloned();
            Ok(match page {
                Some(page) => hits.skip(page.skip()).take(page.take()).collect(),
                None => hits.collect(),
            })
        });
        Arc::new(store)
    }

    #[tokio::test]
    async fn should_serve_only_active_records() {
        let provider = StoreResourceProvider::new("en", store_over(records()));

        let found = provider.get_message("EntityNotFound").await.unwrap();
        let draft = provider.get_message("InvalidGuid").await.unwrap();

        assert_eq!(found.unwrap().value, "No {entity} here.");
        assert!(draft.is_none());
    }

    #[tokio::test]
    async fn should_overlay_fallback_catalog() {
        let provider = StoreResourceProvider::new("en", store_over(records()))
            .with_fallback(Arc::new(EmbeddedResourceProvider::english().unwrap()));

        let entries = provider.get_resource_entries().await.unwrap();
        let lookup = |key: &str| {
            entries
                .iter()
                .find(|e| e.key == key)
                .map(|e| e.value.clone())
        };

        assert_eq!(lookup("EntityNotFound").as_deref(), Some("No {entity} here."));
        assert_eq!(
            lookup("InvalidGuid").as_deref(),
            Some("The identifier is not a valid GUID.")
        );
    }

    #[tokio::test]
    async fn should_report_unavailable_store() {
        let mut store = MockResourceStore::new();
        store
            .expect_find_filtered()
            .returning(|_, _| Err(RepositoryError::DatabaseError));
        let provider = StoreResourceProvider::new("en", Arc::new(store));

        assert_eq!(
            provider.get_message("EntityNotFound").await.unwrap_err(),
            ResourceError::ProviderUnavailable
        );
    }

    #[tokio::test]
    async fn should_expose_fallback_when_store_is_down() {
        let mut store = MockResourceStore::new();
        store
            .expect_query()
            .returning(|_, _| Err(RepositoryError::DatabaseError));
        let provider = StoreResourceProvider::new("en", Arc::new(store))
            .with_fallback(Arc::new(EmbeddedResourceProvider::english().unwrap()));

        let entries = provider.get_resource_entries().await;
        let fallback = provider.fallback().unwrap();

        assert_eq!(entries.unwrap_err(), ResourceError::ProviderUnavailable);
        assert_eq!(
            fallback
                .get_message_value_or_default("NecessaryDataNotProvided", "missing")
                .await,
            "Necessary data was not provided."
        );
    }
}
