use chrono::{DateTime, Utc};
use poem_openapi::Object;

use business::domain::resource::model::Resource;
use business::domain::shared::value_objects::PagedResult;

#[derive(Debug, Clone, Object)]
pub struct CreateResourceRequest {
    /// Message key (6-50 characters, unique)
    pub name: String,
    /// Localized text (6-100 characters)
    pub value: String,
    /// Editorial note (10-100 characters)
    pub comment: String,
}

impl CreateResourceRequest {
    pub fn into_domain(self) -> Resource {
        Resource::new(self.name, self.value, self.comment)
    }
}

#[derive(Debug, Clone, Object)]
pub struct UpdateResourceRequest {
    pub name: String,
    pub value: String,
    pub comment: String,
}

impl UpdateResourceRequest {
    pub fn into_domain(self, id: String) -> Resource {
        let mut resource = Resource::new(self.name, self.value, self.comment);
        resource.id = id;
        resource
    }
}

#[derive(Debug, Clone, Object)]
pub struct ResourceResponse {
    pub id: String,
    pub name: String,
    pub value: String,
    pub comment: String,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Resource> for ResourceResponse {
    fn from(resource: Resource) -> Self {
        Self {
            id: resource.id,
            name: resource.name,
            value: resource.value,
            comment: resource.comment,
            active: resource.active,
            created_at: resource.created_at,
            updated_at: resource.updated_at,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct ResourcePageResponse {
    pub items: Vec<ResourceResponse>,
    /// Zero-based page number
    pub page: u64,
    pub size: u64,
    /// Number of records matching the filter
    pub total: u64,
    pub total_pages: u64,
}

impl From<PagedResult<Resource>> for ResourcePageResponse {
    fn from(paged: PagedResult<Resource>) -> Self {
        let total_pages = paged.total_pages();
        Self {
            page: paged.page.number as u64,
            size: paged.page.size as u64,
            total: paged.total,
            total_pages,
            items: paged.items.into_iter().map(Into::into).collect(),
        }
    }
}
