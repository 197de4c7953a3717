use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::application::existence::EntityExistenceValidator;
use crate::application::pipeline::{Pipeline, PipelineError};
use crate::domain::entity::Entity;
use crate::domain::errors::RepositoryError;
use crate::domain::localization::catalog::ResourceCatalog;
use crate::domain::localization::handler::ResourceHandler;
use crate::domain::localization::keys;
use crate::domain::log_service::{ActionType, LogService};
use crate::domain::logger::Logger;
use crate::domain::operation::result::OperationResult;
use crate::domain::operation::strategy::AuthenticationStrategy;
use crate::domain::repository::{EntityRepository, StatusManager};
use crate::domain::shared::value_objects::{Page, PagedResult};
use crate::domain::store::{EntityStore, FilteredQuery, Predicate};
use crate::domain::token::BearerTokenDecoder;
use crate::domain::validation::{ValidationRuleSet, join_messages};

/// Generic repository running validation, uniqueness, existence checks and
/// failure logging in front of an [`EntityStore`].
pub struct Repository<T: Entity> {
    store: Arc<dyn EntityStore<T>>,
    existence: EntityExistenceValidator<T>,
    token_decoder: Arc<dyn BearerTokenDecoder>,
    pipeline: Pipeline,
}

impl<T: Entity> Repository<T> {
    pub fn new(
        store: Arc<dyn EntityStore<T>>,
        messages: Arc<ResourceCatalog>,
        log_service: Arc<dyn LogService>,
        logger: Arc<dyn Logger>,
        token_decoder: Arc<dyn BearerTokenDecoder>,
    ) -> Self {
        let pipeline = Pipeline {
            messages,
            log_service,
            logger,
        };
        Self {
            existence: EntityExistenceValidator::from_pipeline(store.clone(), pipeline.clone()),
            store,
            token_decoder,
            pipeline,
        }
    }

    /// A blank filter matches every record.
    fn filter_for(filter: &str) -> &str {
        if filter.trim().is_empty() { "" } else { filter }
    }

    fn validate(rules: &ValidationRuleSet<T>, entity: &T) -> Result<(), PipelineError> {
        let violations = rules.validate(entity);
        if violations.is_empty() {
            Ok(())
        } else {
            Err(PipelineError::validation(join_messages(&violations)))
        }
    }

    fn duplicate(messages: &ResourceHandler) -> PipelineError {
        PipelineError::validation(messages.format_field(
            keys::DUPLICATE_ENTRY,
            T::NAME,
            T::UNIQUE_FIELD,
        ))
    }

    async fn ensure_unique(
        &self,
        entity: &T,
        owner_id: &str,
        messages: &ResourceHandler,
    ) -> Result<(), PipelineError> {
        if self
            .store
            .exists_unique_key(&entity.unique_key(), owner_id)
            .await?
        {
            return Err(Self::duplicate(messages));
        }
        Ok(())
    }

    /// A unique constraint raced past [`Repository::ensure_unique`]; report it
    /// the same way.
    fn translate(error: RepositoryError, messages: &ResourceHandler) -> PipelineError {
        match error {
            RepositoryError::Duplicated => Self::duplicate(messages),
            other => PipelineError::Store(other),
        }
    }

    async fn try_create(&self, entity: Option<T>) -> Result<OperationResult<String>, PipelineError> {
        let messages = self.pipeline.messages(keys::CREATE_KEYS).await;
        let Some(mut entity) = entity else {
            return Err(PipelineError::validation(
                messages.get_resource(keys::NECESSARY_DATA_NOT_PROVIDED),
            ));
        };

        Self::validate(&T::rules(), &entity)?;
        self.ensure_unique(&entity, "", &messages).await?;

        entity.prepare_for_create();
        let id = Uuid::new_v4().to_string();
        let now = Utc::now();
        entity.set_id(id.clone());
        entity.set_created_at(now);
        entity.set_updated_at(now);

        self.store
            .add(entity)
            .await
            .map_err(|e| Self::translate(e, &messages))?;

        self.pipeline
            .logger
            .info(&format!("{} created with id: {}", T::NAME, id));
        Ok(OperationResult::success(
            id,
            messages.format(keys::CREATION_SUCCESS, T::NAME),
        ))
    }

    async fn try_update(&self, entity: Option<T>) -> Result<OperationResult<T>, PipelineError> {
        let messages = self.pipeline.messages(keys::UPDATE_KEYS).await;
        let Some(entity) = entity else {
            return Err(PipelineError::validation(
                messages.get_resource(keys::NECESSARY_DATA_NOT_PROVIDED),
            ));
        };

        let existing = self.existence.check_id(entity.id()).await?;
        Self::validate(&T::update_rules(), &entity)?;
        let id = existing.id().to_string();

        let mut merged = entity.merge_into(existing);
        self.ensure_unique(&merged, &id, &messages).await?;
        merged.set_updated_at(Utc::now());

        self.store
            .update(merged.clone())
            .await
            .map_err(|e| Self::translate(e, &messages))?;

        self.pipeline
            .logger
            .info(&format!("{} updated with id: {}", T::NAME, id));
        Ok(OperationResult::success(
            merged,
            messages.format(keys::UPDATE_SUCCESS, T::NAME),
        ))
    }

    async fn try_delete(&self, id: &str) -> Result<OperationResult<bool>, PipelineError> {
        let existing = self.existence.check_id(id).await?;
        self.store.remove(existing.id()).await?;

        self.pipeline
            .logger
            .info(&format!("{} deleted with id: {}", T::NAME, id));
        let messages = self.pipeline.messages(keys::DELETE_KEYS).await;
        Ok(OperationResult::success(
            true,
            messages.format(keys::DELETION_SUCCESS, T::NAME),
        ))
    }

    async fn try_set_status(
        &self,
        id: &str,
        active: bool,
    ) -> Result<OperationResult<T>, PipelineError> {
        let mut entity = self.existence.check_id(id).await?;
        entity.set_active(active);
        entity.set_updated_at(Utc::now());
        self.store.update(entity.clone()).await?;

        let messages = self.pipeline.messages(keys::STATUS_KEYS).await;
        let key = if active {
            keys::ACTIVATION_SUCCESS
        } else {
            keys::DEACTIVATION_SUCCESS
        };
        Ok(OperationResult::success(entity, messages.format(key, T::NAME)))
    }

    async fn try_read_by_bearer(&self, token: &str) -> Result<OperationResult<T>, PipelineError> {
        let messages = self.pipeline.messages(keys::READ_KEYS).await;
        let id = match self.token_decoder.extract_id(token) {
            Ok(id) => id,
            Err(e) => {
                self.pipeline
                    .logger
                    .debug(&format!("Bearer token rejected: {}", e));
                return Err(PipelineError::rejected(
                    messages.get_resource(keys::INVALID_BEARER_TOKEN),
                    &AuthenticationStrategy,
                ));
            }
        };

        let entity = self.existence.check_id(&id).await?;
        Ok(OperationResult::success(
            entity,
            messages.format(keys::READ_SUCCESS, T::NAME),
        ))
    }

    async fn try_count(&self, filter: &str) -> Result<OperationResult<u64>, PipelineError> {
        let total = self.store.count_filtered(Self::filter_for(filter)).await?;
        let messages = self.pipeline.messages(keys::READ_KEYS).await;
        Ok(OperationResult::success(
            total,
            messages.format(keys::SEARCH_SUCCESS, T::NAME),
        ))
    }

    async fn try_page(&self, page: Page, filter: &str) -> Result<Vec<T>, PipelineError> {
        Ok(self
            .store
            .find_filtered(Self::filter_for(filter), Some(page))
            .await?)
    }

    async fn try_paged(
        &self,
        page: Page,
        filter: &str,
    ) -> Result<OperationResult<PagedResult<T>>, PipelineError> {
        let total = self.store.count_filtered(Self::filter_for(filter)).await?;
        let items = self.try_page(page, filter).await?;
        Ok(self
            .search_success(PagedResult { items, page, total })
            .await)
    }

    async fn search_success<R>(&self, data: R) -> OperationResult<R> {
        let messages = self.pipeline.messages(keys::READ_KEYS).await;
        OperationResult::success(data, messages.format(keys::SEARCH_SUCCESS, T::NAME))
    }
}

#[async_trait]
impl<T: Entity> EntityRepository<T> for Repository<T> {
    async fn create(&self, entity: Option<T>) -> OperationResult<String> {
        let value = entity.clone();
        let outcome = self.try_create(entity).await;
        self.pipeline
            .complete(T::NAME, ActionType::Create, &value, outcome)
            .await
    }

    async fn read_id(&self, id: &str) -> OperationResult<T> {
        self.existence.has_id(id).await
    }

    async fn read_by_bearer(&self, token: &str) -> OperationResult<T> {
        let outcome = self.try_read_by_bearer(token).await;
        self.pipeline
            .complete(T::NAME, ActionType::ReadByBearer, &(), outcome)
            .await
    }

    async fn read_filter(&self, predicate: Predicate<T>) -> OperationResult<FilteredQuery<T>> {
        self.search_success(FilteredQuery::new(self.store.clone(), predicate))
            .await
    }

    async fn read_filter_count(&self, filter: &str) -> OperationResult<u64> {
        let outcome = self.try_count(filter).await;
        self.pipeline
            .complete(T::NAME, ActionType::ReadFilterCount, filter, outcome)
            .await
    }

    async fn read_filter_page(
        &self,
        page_number: usize,
        page_size: usize,
        filter: &str,
    ) -> OperationResult<Vec<T>> {
        let page = Page::new(page_number, page_size);
        let outcome = match self.try_page(page, filter).await {
            Ok(items) => Ok(self.search_success(items).await),
            Err(e) => Err(e),
        };
        self.pipeline
            .complete(T::NAME, ActionType::ReadFilterPage, filter, outcome)
            .await
    }

    async fn read_filter_paged(&self, page: Page, filter: &str) -> OperationResult<PagedResult<T>> {
        let outcome = self.try_paged(page, filter).await;
        self.pipeline
            .complete(T::NAME, ActionType::ReadFilterPage, filter, outcome)
            .await
    }

    async fn update(&self, entity: Option<T>) -> OperationResult<T> {
        let value = entity.clone();
        let outcome = self.try_update(entity).await;
        self.pipeline
            .complete(T::NAME, ActionType::Update, &value, outcome)
            .await
    }

    async fn delete(&self, id: &str) -> OperationResult<bool> {
        let outcome = self.try_delete(id).await;
        self.pipeline
            .complete(T::NAME, ActionType::Delete, id, outcome)
            .await
    }
}

#[async_trait]
impl<T: Entity> StatusManager<T> for Repository<T> {
    async fn activate(&self, id: &str) -> OperationResult<T> {
        let outcome = self.try_set_status(id, true).await;
        self.pipeline
            .complete(T::NAME, ActionType::Activate, id, outcome)
            .await
    }

    async fn deactivate(&self, id: &str) -> OperationResult<T> {
        let outcome = self.try_set_status(id, false).await;
        self.pipeline
            .complete(T::NAME, ActionType::Deactivate, id, outcome)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::localization::errors::ResourceError;
    use crate::domain::localization::provider::{ResourceEntry, ResourceProvider};
    use crate::domain::log_service::LogEntry;
    use crate::domain::operation::error_type::ErrorType;
    use crate::domain::resource::model::Resource;
    use crate::domain::store::predicate;
    use crate::domain::token::TokenError;
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

    mock! {
        pub Provider {}

        #[async_trait]
        impl ResourceProvider for Provider {
            fn locale(&self) -> String;
            async fn get_message(&self, key: &str) -> Result<Option<ResourceEntry>, ResourceError>;
            async fn get_resource_entries(&self) -> Result<Vec<ResourceEntry>, ResourceError>;
        }
    }

    mock! {
        pub LogSink {}

        #[async_trait]
        impl LogService for LogSink {
            async fn create_log(&self, entry: LogEntry) -> OperationResult<String>;
        }
    }

    mock! {
        pub Decoder {}

        impl BearerTokenDecoder for Decoder {
            fn extract_id(&self, token: &str) -> Result<String, TokenError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn catalog() -> Arc<ResourceCatalog> {
        let mut provider = MockProvider::new();
        provider.expect_locale().return_const("en".to_string());
        provider.expect_get_resource_entries().returning(|| {
            Ok(vec![
                ResourceEntry::new(
                    keys::NECESSARY_DATA_NOT_PROVIDED,
                    "Necessary data was not provided.",
                ),
                ResourceEntry::new(keys::INVALID_GUID, "The identifier is not a valid GUID."),
                ResourceEntry::new(keys::ENTITY_NOT_FOUND, "{entity} not found."),
                ResourceEntry::new(
                    keys::DUPLICATE_ENTRY,
                    "A {entity} with the same {field} already exists.",
                ),
                ResourceEntry::new(keys::DATABASE_ERROR, "A database error occurred."),
                ResourceEntry::new(keys::INVALID_BEARER_TOKEN, "The bearer token is not valid."),
                ResourceEntry::new(keys::CREATION_SUCCESS, "{entity} created."),
                ResourceEntry::new(keys::UPDATE_SUCCESS, "{entity} updated."),
                ResourceEntry::new(keys::DELETION_SUCCESS, "{entity} deleted."),
                ResourceEntry::new(keys::ACTIVATION_SUCCESS, "{entity} activated."),
                ResourceEntry::new(keys::DEACTIVATION_SUCCESS, "{entity} deactivated."),
                ResourceEntry::new(keys::READ_SUCCESS, "{entity} retrieved."),
                ResourceEntry::new(keys::SEARCH_SUCCESS, "{entity} search completed."),
            ])
        });
        Arc::new(ResourceCatalog::new(Arc::new(provider)))
    }

    struct Fixture {
        store: MockResourceStore,
        log_sink: MockLogSink,
        decoder: MockDecoder,
    }

    impl Fixture {
        fn new() -> Self {
            Self {
                store: MockResourceStore::new(),
                log_sink: MockLogSink::new(),
                decoder: MockDecoder::new(),
            }
        }

        fn build(self) -> Repository<Resource> {
            Repository::new(
                Arc::new(self.store),
                catalog(),
                Arc::new(self.log_sink),
                mock_logger(),
                Arc::new(self.decoder),
            )
        }
    }

    fn valid_resource() -> Resource {
        Resource::new("WelcomeTitle", "Welcome back", "Shown on the home page")
    }

    fn stored_resource(active: bool) -> Resource {
        let mut resource = valid_resource();
        resource.id = Uuid::new_v4().to_string();
        resource.active = active;
        resource
    }

    #[tokio::test]
    async fn should_reject_missing_entity_on_create() {
        let repository = Fixture::new().build();

        let result = repository.create(None).await;

        assert_eq!(result.error_type(), ErrorType::BusinessValidation);
        assert_eq!(result.message(), "Necessary data was not provided.");
    }

    #[tokio::test]
    async fn should_create_inactive_resource_with_new_id() {
        let mut fixture = Fixture::new();
        fixture
            .store
            .expect_exists_unique_key()
            .withf(|key, owner_id| key == "WelcomeTitle" && owner_id.is_empty())
            .returning(|_, _| Ok(false));
        fixture
            .store
            .expect_add()
            .times(1)
            .withf(|resource| !resource.active && Uuid::parse_str(&resource.id).is_ok())
            .returning(|_| Ok(()));
        let repository = fixture.build();

        let mut resource = valid_resource();
        resource.active = true;
        let result = repository.create(Some(resource)).await;

        assert!(result.is_success());
        assert_eq!(result.message(), "Resource created.");
        assert!(Uuid::parse_str(result.data().unwrap()).is_ok());
    }

    #[tokio::test]
    async fn should_report_field_violations_on_create() {
        let repository = Fixture::new().build();

        let result = repository
            .create(Some(Resource::new("", "Welcome back", "Shown on the home page")))
            .await;

        assert_eq!(result.error_type(), ErrorType::BusinessValidation);
        assert!(result.message().contains("Name"));
    }

    #[tokio::test]
    async fn should_reject_duplicate_name_on_create() {
        let mut fixture = Fixture::new();
        fixture
            .store
            .expect_exists_unique_key()
            .returning(|_, _| Ok(true));
        fixture.store.expect_add().never();
        let repository = fixture.build();

        let result = repository.create(Some(valid_resource())).await;

        assert_eq!(result.error_type(), ErrorType::BusinessValidation);
        assert_eq!(
            result.message(),
            "A Resource with the same name already exists."
        );
    }

    #[tokio::test]
    async fn should_translate_store_unique_violation() {
        let mut fixture = Fixture::new();
        fixture
            .store
            .expect_exists_unique_key()
            .returning(|_, _| Ok(false));
        fixture
            .store
            .expect_add()
            .returning(|_| Err(RepositoryError::Duplicated));
        fixture.log_sink.expect_create_log().never();
        let repository = fixture.build();

        let result = repository.create(Some(valid_resource())).await;

        assert_eq!(result.error_type(), ErrorType::BusinessValidation);
        assert_eq!(
            result.message(),
            "A Resource with the same name already exists."
        );
    }

    #[tokio::test]
    async fn should_log_store_failure_on_create() {
        let mut fixture = Fixture::new();
        fixture
            .store
            .expect_exists_unique_key()
            .returning(|_, _| Ok(false));
        fixture
            .store
            .expect_add()
            .returning(|_| Err(RepositoryError::DatabaseError));
        fixture
            .log_sink
            .expect_create_log()
            .times(1)
            .withf(|entry| entry.action == ActionType::Create && entry.entity_value.contains("WelcomeTitle"))
            .returning(|_| OperationResult::success("log-1".to_string(), "Logged"));
        let repository = fixture.build();

        let result = repository.create(Some(valid_resource())).await;

        assert_eq!(result.error_type(), ErrorType::Database);
        assert_eq!(result.message(), "A database error occurred.");
    }

    #[tokio::test]
    async fn should_merge_and_stamp_on_update() {
        let stored = stored_resource(true);
        let id = stored.id.clone();
        let own_id = id.clone();
        let created_at = stored.created_at;
        let mut fixture = Fixture::new();
        fixture
            .store
            .expect_find_by_id()
            .returning(move |_| Ok(Some(stored.clone())));
        fixture
            .store
            .expect_exists_unique_key()
            .withf(move |key, owner_id| key == "WelcomeTitle" && owner_id == own_id)
            .returning(|_, _| Ok(false));
        fixture
            .store
            .expect_update()
            .times(1)
            .withf(|resource| resource.value == "Welcome home again")
            .returning(|_| Ok(()));
        let repository = fixture.build();

        let mut incoming = Resource::new("WelcomeTitle", "Welcome home again", "Shown on the home page");
        incoming.id = id.clone();
        let result = repository.update(Some(incoming)).await;

        assert!(result.is_success());
        let updated = result.into_data().unwrap();
        assert_eq!(updated.id, id);
        assert!(updated.active);
        assert_eq!(updated.created_at, created_at);
        assert!(updated.updated_at >= created_at);
    }

    #[tokio::test]
    async fn should_reject_update_of_unknown_entity() {
        let mut fixture = Fixture::new();
        fixture.store.expect_find_by_id().returning(|_| Ok(None));
        fixture.store.expect_update().never();
        let repository = fixture.build();

        let mut incoming = valid_resource();
        incoming.id = Uuid::new_v4().to_string();
        let result = repository.update(Some(incoming)).await;

        assert_eq!(result.error_type(), ErrorType::BusinessValidation);
        assert_eq!(result.message(), "Resource not found.");
    }

    #[tokio::test]
    async fn should_check_existence_before_fields_on_update() {
        let mut fixture = Fixture::new();
        fixture.store.expect_find_by_id().returning(|_| Ok(None));
        let repository = fixture.build();

        let mut incoming = Resource::new("x", "y", "z");
        incoming.id = Uuid::new_v4().to_string();
        let result = repository.update(Some(incoming)).await;

        assert_eq!(result.error_type(), ErrorType::BusinessValidation);
        assert_eq!(result.message(), "Resource not found.");
    }

    #[tokio::test]
    async fn should_reject_update_with_malformed_id() {
        let repository = Fixture::new().build();

        let mut incoming = valid_resource();
        incoming.id = "42".to_string();
        let result = repository.update(Some(incoming)).await;

        assert_eq!(result.message(), "The identifier is not a valid GUID.");
    }

    #[tokio::test]
    async fn should_delete_existing_entity() {
        let stored = stored_resource(false);
        let id = stored.id.clone();
        let expected_id = id.clone();
        let mut fixture = Fixture::new();
        fixture
            .store
            .expect_find_by_id()
            .returning(move |_| Ok(Some(stored.clone())));
        fixture
            .store
            .expect_remove()
            .times(1)
            .withf(move |candidate| candidate.to_string() == expected_id)
            .returning(|_| Ok(()));
        let repository = fixture.build();

        let result = repository.delete(&id).await;

        assert_eq!(result.data(), Some(&true));
        assert_eq!(result.message(), "Resource deleted.");
    }

    #[tokio::test]
    async fn should_activate_and_deactivate() {
        let stored = stored_resource(false);
        let id = stored.id.clone();
        let mut fixture = Fixture::new();
        fixture
            .store
            .expect_find_by_id()
            .returning(move |_| Ok(Some(stored.clone())));
        fixture.store.expect_update().times(2).returning(|_| Ok(()));
        let repository = fixture.build();

        let activated = repository.activate(&id).await;
        let deactivated = repository.deactivate(&id).await;

        assert!(activated.data().unwrap().active);
        assert_eq!(activated.message(), "Resource activated.");
        assert!(!deactivated.data().unwrap().active);
        assert_eq!(deactivated.message(), "Resource deactivated.");
    }

    #[tokio::test]
    async fn should_reject_invalid_bearer_token() {
        let mut fixture = Fixture::new();
        fixture
            .decoder
            .expect_extract_id()
            .returning(|_| Err(TokenError::Invalid));
        let repository = fixture.build();

        let result = repository.read_by_bearer("garbage").await;

        assert_eq!(result.error_type(), ErrorType::Authentication);
        assert_eq!(result.message(), "The bearer token is not valid.");
    }

    #[tokio::test]
    async fn should_reject_bearer_subject_that_is_not_a_guid() {
        let mut fixture = Fixture::new();
        fixture
            .decoder
            .expect_extract_id()
            .returning(|_| Ok("not-a-guid".to_string()));
        fixture.store.expect_find_by_id().never();
        let repository = fixture.build();

        let result = repository.read_by_bearer("token").await;

        assert_eq!(result.error_type(), ErrorType::BusinessValidation);
        assert_eq!(result.message(), "The identifier is not a valid GUID.");
    }

    #[tokio::test]
    async fn should_read_entity_named_by_bearer_token() {
        let stored = stored_resource(true);
        let id = stored.id.clone();
        let mut fixture = Fixture::new();
        fixture
            .decoder
            .expect_extract_id()
            .returning(move |_| Ok(id.clone()));
        fixture
            .store
            .expect_find_by_id()
            .returning(move |_| Ok(Some(stored.clone())));
        let repository = fixture.build();

        let result = repository.read_by_bearer("token").await;

        assert!(result.is_success());
        assert_eq!(result.message(), "Resource retrieved.");
    }

    #[tokio::test]
    async fn should_count_everything_for_empty_filter() {
        let mut fixture = Fixture::new();
        fixture
            .store
            .expect_count_filtered()
            .withf(|filter| filter.is_empty())
            .returning(|_| Ok(3));
        let repository = fixture.build();

        let result = repository.read_filter_count("").await;

        assert_eq!(result.data(), Some(&3));
    }

    #[tokio::test]
    async fn should_pass_page_window_to_store() {
        let mut fixture = Fixture::new();
        fixture
            .store
            .expect_find_filtered()
            .withf(|filter, page| filter == "WelcomeTitle" && *page == Some(Page::new(1, 2)))
            .returning(|_, _| Ok(vec![stored_resource(true)]));
        let repository = fixture.build();

        let result = repository.read_filter_page(1, 2, "WelcomeTitle").await;

        assert_eq!(result.data().map(Vec::len), Some(1));
        assert_eq!(result.message(), "Resource search completed.");
    }

    #[tokio::test]
    async fn should_return_page_with_total() {
        let mut fixture = Fixture::new();
        fixture.store.expect_count_filtered().returning(|_| Ok(3));
        fixture
            .store
            .expect_find_filtered()
            .returning(|_, _| Ok(vec![stored_resource(true)]));
        let repository = fixture.build();

        let result = repository.read_filter_paged(Page::new(1, 2), "").await;

        let paged = result.into_data().unwrap();
        assert_eq!(paged.total, 3);
        assert_eq!(paged.items.len(), 1);
        assert!(!paged.has_next());
    }

    #[tokio::test]
    async fn should_defer_filter_until_fetched() {
        let mut fixture = Fixture::new();
        fixture.store.expect_query().times(1).returning(|_, _| Ok(Vec::new()));
        let repository = fixture.build();

        let result = repository.read_filter(predicate(|r: &Resource| r.active)).await;
        let query = result.into_data().unwrap();

        assert!(query.matches(&stored_resource(true)));
        assert!(query.fetch().await.unwrap().is_empty());
    }
}
