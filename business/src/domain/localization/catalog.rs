use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use super::errors::ResourceError;
use super::handler::ResourceHandler;
use super::locale::current_locale;
use super::provider::{ResourceEntry, ResourceProvider};

type Messages = Arc<HashMap<String, String>>;

/// Process-wide cache of localized messages, one snapshot per locale.
///
/// A locale is loaded from its provider on first use and kept until
/// [`ResourceCatalog::invalidate`] or [`ResourceCatalog::invalidate_all`] is called.
pub struct ResourceCatalog {
    default_locale: String,
    providers: HashMap<String, Arc<dyn ResourceProvider>>,
    cache: RwLock<HashMap<String, Messages>>,
}

impl ResourceCatalog {
    pub fn new(default_provider: Arc<dyn ResourceProvider>) -> Self {
        let default_locale = default_provider.locale();
        let mut providers = HashMap::new();
        providers.insert(default_locale.clone(), default_provider);
        Self {
            default_locale,
            providers,
            cache: RwLock::new(HashMap::new()),
        }
    }

    /// Registers an additional locale.
    pub fn with_provider(mut self, provider: Arc<dyn ResourceProvider>) -> Self {
        self.providers.insert(provider.locale(), provider);
        self
    }

    pub fn default_locale(&self) -> &str {
        &self.default_locale
    }

    pub fn locales(&self) -> Vec<String> {
        let mut locales: Vec<String> = self.providers.keys().cloned().collect();
        locales.sort();
        locales
    }

    /// Handler in the locale of the current request scope, or the default one.
    pub async fn handler(&self, keys: &[&str]) -> Result<ResourceHandler, ResourceError> {
        let locale = current_locale().unwrap_or_else(|| self.default_locale.clone());
        self.handler_for(&locale, keys).await
    }

    /// Builds a handler for `keys` in `locale`, falling back to the default
    /// locale when no provider is registered for it.
    pub async fn handler_for(
        &self,
        locale: &str,
        keys: &[&str],
    ) -> Result<ResourceHandler, ResourceError> {
        if keys.is_empty() {
            return Err(ResourceError::EmptyKeys);
        }

        let (locale, provider) = match self.providers.get(locale) {
            Some(provider) => (locale, provider),
            None => (
                self.default_locale.as_str(),
                self.providers
                    .get(&self.default_locale)
                    .ok_or(ResourceError::ProviderUnavailable)?,
            ),
        };

        let messages = self.load(locale, provider.as_ref()).await?;

        let resources = keys
            .iter()
            .map(|key| {
                let value = messages
                    .get(*key)
                    .cloned()
                    .unwrap_or_else(|| provider.default_value(key));
                ((*key).to_string(), value)
            })
            .collect();

        Ok(ResourceHandler::from_map(resources))
    }

    pub async fn invalidate(&self, locale: &str) {
        self.cache.write().await.remove(locale);
    }

    pub async fn invalidate_all(&self) {
        self.cache.write().await.clear();
    }

    pub async fn is_loaded(&self, locale: &str) -> bool {
        self.cache.read().await.contains_key(locale)
    }

    async fn load(
        &self,
        locale: &str,
        provider: &dyn ResourceProvider,
    ) -> Result<Messages, ResourceError> {
        if let Some(messages) = self.cache.read().await.get(locale) {
            return Ok(messages.clone());
        }

        let mut cache = self.cache.write().await;
        // Another caller may have loaded the locale while we waited for the lock.
        if let Some(messages) = cache.get(locale) {
            return Ok(messages.clone());
        }

        let entries = match provider.get_resource_entries().await {
            Ok(entries) => entries,
            Err(error) => {
                // Degraded snapshot: served from the fallback but never cached.
                let fallback = provider.fallback().ok_or(error)?;
                return Ok(to_messages(fallback.get_resource_entries().await?));
            }
        };
        let messages = to_messages(entries);
        cache.insert(locale.to_string(), messages.clone());

        Ok(messages)
    }
}

fn to_messages(entries: Vec<ResourceEntry>) -> Messages {
    Arc::new(
        entries
            .into_iter()
            .map(|entry| (entry.key, entry.value))
            .collect(),
    )
}
