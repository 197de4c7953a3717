use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use business::domain::resource::model::Resource;

#[derive(Debug, FromRow)]
pub struct ResourceEntity {
    pub id: Uuid,
    pub name: String,
    pub value: String,
    pub comment: String,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ResourceEntity {
    pub fn into_domain(self) -> Resource {
        Resource::from_repository(
            self.id.to_string(),
            self.name,
            self.value,
            self.comment,
            self.active,
            self.created_at,
            self.updated_at,
        )
    }
}
