use async_trait::async_trait;
use tokio::sync::RwLock;

use business::domain::entity::Entity;
use business::domain::errors::RepositoryError;
use business::domain::shared::value_objects::Page;
use business::domain::store::{EntityStore, Predicate};

/// Process-local store keeping records in insertion order.
///
/// Uniqueness of [`Entity::unique_key`] is enforced inside the write lock.
pub struct InMemoryStore<T: Entity> {
    records: RwLock<Vec<T>>,
}

impl<T: Entity> Default for InMemoryStore<T> {
    fn default() -> Self {
        Self {
            records: RwLock::new(Vec::new()),
        }
    }
}

impl<T: Entity> InMemoryStore<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the store without uniqueness checks.
    pub fn with_entities(entities: Vec<T>) -> Self {
        Self {
            records: RwLock::new(entities),
        }
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

fn holds_key<T: Entity>(records: &[T], key: &str, owner_id: &str) -> bool {
    records
        .iter()
        .any(|r| r.id() != owner_id && r.unique_key() == key)
}

fn conflicts<T: Entity>(records: &[T], candidate: &T) -> bool {
    holds_key(records, &candidate.unique_key(), candidate.id())
}

fn selected<T: Entity>(record: &T, filter: &str) -> bool {
    filter.is_empty() || record.matches_filter(filter)
}

#[async_trait]
impl<T: Entity> EntityStore<T> for InMemoryStore<T> {
    async fn find_by_id(&self, id: &str) -> Result<Option<T>, RepositoryError> {
        let records = self.records.read().await;
        Ok(records.iter().find(|r| r.id() == id).cloned())
    }

    async fn query(
        &self,
        predicate: Predicate<T>,
        page: Option<Page>,
    ) -> Result<Vec<T>, RepositoryError> {
        let records = self.records.read().await;
        let matches = records.iter().filter(|r| predicate(*r)).cloned();
        Ok(match page {
            Some(page) => matches.skip(page.skip()).take(page.take()).collect(),
            None => matches.collect(),
        })
    }

    async fn count(&self, predicate: Predicate<T>) -> Result<u64, RepositoryError> {
        let records = self.records.read().await;
        Ok(records.iter().filter(|r| predicate(*r)).count() as u64)
    }

    async fn find_filtered(
        &self,
        filter: &str,
        page: Option<Page>,
    ) -> Result<Vec<T>, RepositoryError> {
        let records = self.records.read().await;
        let matches = records.iter().filter(|r| selected(*r, filter)).cloned();
        Ok(match page {
            Some(page) => matches.skip(page.skip()).take(page.take()).collect(),
            None => matches.collect(),
        })
    }

    async fn count_filtered(&self, filter: &str) -> Result<u64, RepositoryError> {
        let records = self.records.read().await;
        Ok(records.iter().filter(|r| selected(*r, filter)).count() as u64)
    }

    async fn exists_unique_key(&self, key: &str, owner_id: &str) -> Result<bool, RepositoryError> {
        Ok(holds_key(&self.records.read().await, key, owner_id))
    }

    async fn add(&self, entity: T) -> Result<(), RepositoryError> {
        let mut records = self.records.write().await;
        if records.iter().any(|r| r.id() == entity.id()) || conflicts(&records, &entity) {
            return Err(RepositoryError::Duplicated);
        }
        records.push(entity);
        Ok(())
    }

    async fn update(&self, entity: T) -> Result<(), RepositoryError> {
        let mut records = self.records.write().await;
        if conflicts(&records, &entity) {
            return Err(RepositoryError::Duplicated);
        }
        let slot = records
            .iter_mut()
            .find(|r| r.id() == entity.id())
            .ok_or(RepositoryError::NotFound)?;
        *slot = entity;
        Ok(())
    }

    async fn remove(&self, id: &str) -> Result<(), RepositoryError> {
        let mut records = self.records.write().await;
        let index = records
            .iter()
            .position(|r| r.id() == id)
            .ok_or(RepositoryError::NotFound)?;
        records.remove(index);
        Ok(())
    }
}
