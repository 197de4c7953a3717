use std::sync::Arc;

use auth::JwtBearerDecoder;
use localization::embedded::SUPPORTED_LOCALES;
use localization::{EmbeddedResourceProvider, StoreResourceProvider};
use logger::{TracingLogService, TracingLogger};
use persistence::memory::InMemoryStore;
use persistence::resource::store::ResourceStorePostgres;
use persistence::user::store::UserStorePostgres;

use business::application::repository::Repository;
use business::domain::localization::catalog::ResourceCatalog;
use business::domain::localization::provider::ResourceProvider;
use business::domain::log_service::LogService;
use business::domain::logger::Logger;
use business::domain::resource::model::Resource;
use business::domain::store::EntityStore;
use business::domain::token::BearerTokenDecoder;
use business::domain::user::model::User;

use crate::config::app_config::AppConfig;

pub struct DependencyContainer {
    pub health_api: crate::api::health::routes::Api,
    pub resource_api: crate::api::resource::routes::ResourceApi,
    pub user_api: crate::api::user::routes::UserApi,
    /// Locales the message catalog can serve, for request negotiation.
    pub locales: Vec<String>,
}

impl DependencyContainer {
    pub async fn new(pool: Option<sqlx::PgPool>, config: &AppConfig) -> anyhow::Result<Self> {
        let logger: Arc<dyn Logger> = Arc::new(TracingLogger);
        let log_service: Arc<dyn LogService> = Arc::new(TracingLogService);

        // Infrastructure adapters
        let (resource_store, user_store): (
            Arc<dyn EntityStore<Resource>>,
            Arc<dyn EntityStore<User>>,
        ) = match &pool {
            Some(pool) => (
                Arc::new(ResourceStorePostgres::new(pool.clone())),
                Arc::new(UserStorePostgres::new(pool.clone())),
            ),
            None => (
                Arc::new(InMemoryStore::<Resource>::new()),
                Arc::new(InMemoryStore::<User>::new()),
            ),
        };
        let token_decoder: Arc<dyn BearerTokenDecoder> =
            Arc::new(JwtBearerDecoder::new(&config.auth.jwt_secret));

        // Message catalog: stored resources override the embedded default locale
        let default_locale = config.locale.default_locale.as_str();
        let embedded: Arc<dyn ResourceProvider> =
            Arc::new(EmbeddedResourceProvider::new(default_locale)?);
        let default_provider: Arc<dyn ResourceProvider> = Arc::new(
            StoreResourceProvider::new(default_locale, resource_store.clone())
                .with_fallback(embedded),
        );
        let mut catalog = ResourceCatalog::new(default_provider);
        for locale in SUPPORTED_LOCALES.iter().filter(|l| **l != default_locale) {
            catalog = catalog.with_provider(Arc::new(EmbeddedResourceProvider::new(locale)?));
        }
        let catalog = Arc::new(catalog);
        let storage = if pool.is_some() { "postgres" } else { "memory" };
        let locales = catalog.locales();
        let health_api = crate::api::health::routes::Api::new(storage, locales.clone());
        logger.info(&format!(
            "Message catalog ready for locales: {}",
            locales.join(", ")
        ));

        // Repositories
        let resource_repository = Arc::new(Repository::new(
            resource_store,
            catalog.clone(),
            log_service.clone(),
            logger.clone(),
            token_decoder.clone(),
        ));
        let user_repository = Arc::new(Repository::new(
            user_store,
            catalog.clone(),
            log_service,
            logger,
            token_decoder,
        ));

        let resource_api = crate::api::resource::routes::ResourceApi::new(
            resource_repository.clone(),
            resource_repository,
            catalog,
        );
        let user_api =
            crate::api::user::routes::UserApi::new(user_repository.clone(), user_repository);

        Ok(Self {
            health_api,
            resource_api,
            user_api,
            locales,
        })
    }
}
