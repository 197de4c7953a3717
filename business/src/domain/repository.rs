use async_trait::async_trait;

use crate::domain::entity::Entity;
use crate::domain::operation::result::OperationResult;
use crate::domain::shared::value_objects::{Page, PagedResult};
use crate::domain::store::{FilteredQuery, Predicate};

/// CRUD and query capabilities offered for every entity type.
///
/// Every operation returns a terminal [`OperationResult`]; storage errors are
/// logged and reported as `ErrorType::Database` failures.
#[async_trait]
pub trait EntityRepository<T: Entity>: Send + Sync {
    /// Stores a new entity and returns its generated id.
    async fn create(&self, entity: Option<T>) -> OperationResult<String>;

    async fn read_id(&self, id: &str) -> OperationResult<T>;

    /// Reads the entity whose id is carried by a bearer token.
    async fn read_by_bearer(&self, token: &str) -> OperationResult<T>;

    /// Deferred query over every entity matching `predicate`.
    async fn read_filter(&self, predicate: Predicate<T>) -> OperationResult<FilteredQuery<T>>;

    async fn read_filter_count(&self, filter: &str) -> OperationResult<u64>;

    /// Zero-based page of the entities matching `filter`.
    async fn read_filter_page(
        &self,
        page_number: usize,
        page_size: usize,
        filter: &str,
    ) -> OperationResult<Vec<T>>;

    /// Page of matches together with the total match count.
    async fn read_filter_paged(&self, page: Page, filter: &str) -> OperationResult<PagedResult<T>>;

    async fn update(&self, entity: Option<T>) -> OperationResult<T>;

    async fn delete(&self, id: &str) -> OperationResult<bool>;
}

/// Soft enable/disable of stored entities.
#[async_trait]
pub trait StatusManager<T: Entity>: Send + Sync {
    async fn activate(&self, id: &str) -> OperationResult<T>;

    async fn deactivate(&self, id: &str) -> OperationResult<T>;
}
