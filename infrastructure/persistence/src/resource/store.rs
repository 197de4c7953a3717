use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::resource::model::Resource;
use business::domain::shared::value_objects::Page;
use business::domain::store::{EntityStore, Predicate};

use super::entity::ResourceEntity;
use crate::db::{owner_uuid, repository_error, window};

const SELECT_RESOURCES: &str =
    "SELECT id, name, value, comment, active, created_at, updated_at FROM resources";

pub struct ResourceStorePostgres {
    pool: PgPool,
}

impl ResourceStorePostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Full scan filtered in process, used only for closure predicates.
    async fn matching(&self, predicate: &Predicate<Resource>) -> Result<Vec<Resource>, RepositoryError> {
        let entities = sqlx::query_as::<_, ResourceEntity>(&format!(
            "{} ORDER BY created_at, id",
            SELECT_RESOURCES
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(repository_error)?;

        Ok(entities
            .into_iter()
            .map(ResourceEntity::into_domain)
            .filter(|r| predicate(r))
            .collect())
    }
}

#[async_trait]
impl EntityStore<Resource> for ResourceStorePostgres {
    async fn find_by_id(&self, id: &str) -> Result<Option<Resource>, RepositoryError> {
        let Ok(id) = Uuid::parse_str(id) else {
            return Ok(None);
        };

        let entity = sqlx::query_as::<_, ResourceEntity>(&format!(
            "{} WHERE id = $1",
            SELECT_RESOURCES
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(repository_error)?;

        Ok(entity.map(ResourceEntity::into_domain))
    }

    async fn query(
        &self,
        predicate: Predicate<Resource>,
        page: Option<Page>,
    ) -> Result<Vec<Resource>, RepositoryError> {
        let matches = self.matching(&predicate).await?;
        Ok(match page {
            Some(page) => matches.into_iter().skip(page.skip()).take(page.take()).collect(),
            None => matches,
        })
    }

    async fn count(&self, predicate: Predicate<Resource>) -> Result<u64, RepositoryError> {
        Ok(self.matching(&predicate).await?.len() as u64)
    }

    async fn find_filtered(
        &self,
        filter: &str,
        page: Option<Page>,
    ) -> Result<Vec<Resource>, RepositoryError> {
        let (limit, offset) = window(page);

        let entities = sqlx::query_as::<_, ResourceEntity>(&format!(
            "{} WHERE ($1 = '' OR name = $1) ORDER BY created_at, id LIMIT $2 OFFSET $3",
            SELECT_RESOURCES
        ))
        .bind(filter)
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await
        .map_err(repository_error)?;

        Ok(entities.into_iter().map(ResourceEntity::into_domain).collect())
    }

    async fn count_filtered(&self, filter: &str) -> Result<u64, RepositoryError> {
        let total: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM resources WHERE ($1 = '' OR name = $1)")
                .bind(filter)
                .fetch_one(&self.pool)
                .await
                .map_err(repository_error)?;

        Ok(total as u64)
    }

    async fn exists_unique_key(&self, key: &str, owner_id: &str) -> Result<bool, RepositoryError> {
        sqlx::query_scalar(
            r#"SELECT EXISTS(
                SELECT 1 FROM resources
                WHERE TRIM(name) = $1 AND ($2::uuid IS NULL OR id <> $2)
            )"#,
        )
        .bind(key)
        .bind(owner_uuid(owner_id))
        .fetch_one(&self.pool)
        .await
        .map_err(repository_error)
    }

    async fn add(&self, resource: Resource) -> Result<(), RepositoryError> {
        let id = Uuid::parse_str(&resource.id).map_err(|_| RepositoryError::Persistence)?;

        sqlx::query(
            r#"INSERT INTO resources (id, name, value, comment, active, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)"#,
        )
        .bind(id)
        .bind(&resource.name)
        .bind(&resource.value)
        .bind(&resource.comment)
        .bind(resource.active)
        .bind(resource.created_at)
        .bind(resource.updated_at)
        .execute(&self.pool)
        .await
        .map_err(repository_error)?;

        Ok(())
    }

    async fn update(&self, resource: Resource) -> Result<(), RepositoryError> {
        let id = Uuid::parse_str(&resource.id).map_err(|_| RepositoryError::NotFound)?;

        let result = sqlx::query(
            r#"UPDATE resources
            SET name = $2, value = $3, comment = $4, active = $5, updated_at = $6
            WHERE id = $1"#,
        )
        .bind(id)
        .bind(&resource.name)
        .bind(&resource.value)
        .bind(&resource.comment)
        .bind(resource.active)
        .bind(resource.updated_at)
        .execute(&self.pool)
        .await
        .map_err(repository_error)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }

    async fn remove(&self, id: &str) -> Result<(), RepositoryError> {
        let id = Uuid::parse_str(id).map_err(|_| RepositoryError::NotFound)?;

        let result = sqlx::query("DELETE FROM resources WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(repository_error)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
