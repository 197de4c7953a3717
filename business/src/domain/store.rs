use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::entity::Entity;
use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::Page;

/// Boolean filter over a stored record.
pub type Predicate<T> = Arc<dyn Fn(&T) -> bool + Send + Sync>;

pub fn predicate<T, F>(f: F) -> Predicate<T>
where
    F: Fn(&T) -> bool + Send + Sync + 'static,
{
    Arc::new(f)
}

/// Persistence port for one entity type.
///
/// Each mutating call is a single committed unit of work. Stores enforce
/// uniqueness of [`Entity::unique_key`] and report violations as
/// [`RepositoryError::Duplicated`].
#[async_trait]
pub trait EntityStore<T: Entity>: Send + Sync {
    async fn find_by_id(&self, id: &str) -> Result<Option<T>, RepositoryError>;

    /// Records matching `predicate` in store order, optionally windowed.
    ///
    /// The predicate runs in process; prefer [`EntityStore::find_filtered`]
    /// when the filter field is enough.
    async fn query(
        &self,
        predicate: Predicate<T>,
        page: Option<Page>,
    ) -> Result<Vec<T>, RepositoryError>;

    async fn count(&self, predicate: Predicate<T>) -> Result<u64, RepositoryError>;

    /// Records accepted by [`Entity::matches_filter`] in store order. An
    /// empty `filter` selects every record.
    async fn find_filtered(
        &self,
        filter: &str,
        page: Option<Page>,
    ) -> Result<Vec<T>, RepositoryError>;

    async fn count_filtered(&self, filter: &str) -> Result<u64, RepositoryError>;

    /// Whether a record other than `owner_id` already holds `key` as its
    /// [`Entity::unique_key`]. Unsaved entities pass an empty `owner_id`.
    async fn exists_unique_key(&self, key: &str, owner_id: &str) -> Result<bool, RepositoryError>;

    async fn add(&self, entity: T) -> Result<(), RepositoryError>;

    async fn update(&self, entity: T) -> Result<(), RepositoryError>;

    async fn remove(&self, id: &str) -> Result<(), RepositoryError>;
}

/// Deferred filter over a store.
///
/// Nothing is read until one of the fetch methods runs, and every call
/// re-runs the query against the current store contents.
pub struct FilteredQuery<T: Entity> {
    store: Arc<dyn EntityStore<T>>,
    predicate: Predicate<T>,
}

impl<T: Entity> FilteredQuery<T> {
    pub fn new(store: Arc<dyn EntityStore<T>>, predicate: Predicate<T>) -> Self {
        Self { store, predicate }
    }

    pub async fn fetch(&self) -> Result<Vec<T>, RepositoryError> {
        self.store.query(self.predicate.clone(), None).await
    }

    pub async fn fetch_page(&self, page: Page) -> Result<Vec<T>, RepositoryError> {
        self.store.query(self.predicate.clone(), Some(page)).await
    }

    pub async fn count(&self) -> Result<u64, RepositoryError> {
        self.store.count(self.predicate.clone()).await
    }

    pub fn matches(&self, entity: &T) -> bool {
        (self.predicate)(entity)
    }
}

impl<T: Entity> Clone for FilteredQuery<T> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            predicate: self.predicate.clone(),
        }
    }
}

impl<T: Entity> std::fmt::Debug for FilteredQuery<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FilteredQuery")
            .field("entity", &T::NAME)
            .finish_non_exhaustive()
    }
}
