use std::sync::Arc;

use poem_openapi::{
    OpenApi,
    param::{Path, Query},
    payload::Json,
};

use business::domain::localization::catalog::ResourceCatalog;
use business::domain::operation::result::OperationResult;
use business::domain::repository::{EntityRepository, StatusManager};
use business::domain::resource::model::Resource;
use business::domain::shared::value_objects::Page;

use crate::api::resource::dto::{
    CreateResourceRequest, ResourcePageResponse, ResourceResponse, UpdateResourceRequest,
};
use crate::api::responses::{
    CountResult, CreateResponse, DeleteResponse, operation_response, page_size,
};
use crate::api::tags::ApiTags;

operation_response!(ResourceItemResponse, 200, Ok(Json<ResourceResponse>));
operation_response!(ResourceListResponse, 200, Ok(Json<ResourcePageResponse>));

impl ResourceItemResponse {
    fn from_result(result: OperationResult<Resource>) -> Self {
        match result.into_outcome() {
            Ok(resource) => Self::Ok(Json(resource.into())),
            Err(failure) => failure.into(),
        }
    }
}

pub struct ResourceApi {
    repository: Arc<dyn EntityRepository<Resource>>,
    status: Arc<dyn StatusManager<Resource>>,
    catalog: Arc<ResourceCatalog>,
}

impl ResourceApi {
    pub fn new(
        repository: Arc<dyn EntityRepository<Resource>>,
        status: Arc<dyn StatusManager<Resource>>,
        catalog: Arc<ResourceCatalog>,
    ) -> Self {
        Self {
            repository,
            status,
            catalog,
        }
    }

    /// Stored resources feed the message catalog; drop cached locales after
    /// every successful change.
    async fn refresh_catalog<T>(&self, result: &OperationResult<T>) {
        if result.is_success() {
            self.catalog.invalidate_all().await;
        }
    }
}

/// Localized resource management API
///
/// Endpoints for managing the message strings served by the application.
#[OpenApi]
impl ResourceApi {
    /// Create a resource
    ///
    /// New resources start inactive.
    #[oai(path = "/resources", method = "post", tag = "ApiTags::Resources")]
    async fn create(&self, body: Json<CreateResourceRequest>) -> CreateResponse {
        let result = self.repository.create(Some(body.0.into_domain())).await;
        self.refresh_catalog(&result).await;
        CreateResponse::from_result(result)
    }

    /// List resources
    ///
    /// Returns one zero-based page of resources whose name equals `filter`,
    /// or of all resources when no filter is given.
    #[oai(path = "/resources", method = "get", tag = "ApiTags::Resources")]
    async fn list(
        &self,
        page: Query<Option<u32>>,
        size: Query<Option<u32>>,
        filter: Query<Option<String>>,
    ) -> ResourceListResponse {
        let page = Page::new(page.0.unwrap_or(0) as usize, page_size(size.0));
        let filter = filter.0.unwrap_or_default();

        match self
            .repository
            .read_filter_paged(page, &filter)
            .await
            .into_outcome()
        {
            Ok(paged) => ResourceListResponse::Ok(Json(paged.into())),
            Err(failure) => failure.into(),
        }
    }

    /// Count resources
    #[oai(path = "/resources/count", method = "get", tag = "ApiTags::Resources")]
    async fn count(&self, filter: Query<Option<String>>) -> CountResult {
        let filter = filter.0.unwrap_or_default();
        CountResult::from_result(self.repository.read_filter_count(&filter).await)
    }

    /// Get a resource by id
    #[oai(path = "/resources/:id", method = "get", tag = "ApiTags::Resources")]
    async fn get_by_id(&self, id: Path<String>) -> ResourceItemResponse {
        ResourceItemResponse::from_result(self.repository.read_id(&id.0).await)
    }

    /// Update a resource
    ///
    /// Replaces name, value and comment. The active flag is left untouched.
    #[oai(path = "/resources/:id", method = "put", tag = "ApiTags::Resources")]
    async fn update(
        &self,
        id: Path<String>,
        body: Json<UpdateResourceRequest>,
    ) -> ResourceItemResponse {
        let result = self
            .repository
            .update(Some(body.0.into_domain(id.0)))
            .await;
        self.refresh_catalog(&result).await;
        ResourceItemResponse::from_result(result)
    }

    /// Delete a resource
    #[oai(path = "/resources/:id", method = "delete", tag = "ApiTags::Resources")]
    async fn delete(&self, id: Path<String>) -> DeleteResponse {
        let result = self.repository.delete(&id.0).await;
        self.refresh_catalog(&result).await;
        DeleteResponse::from_result(result)
    }

    /// Activate a resource
    #[oai(
        path = "/resources/:id/activate",
        method = "post",
        tag = "ApiTags::Resources"
    )]
    async fn activate(&self, id: Path<String>) -> ResourceItemResponse {
        let result = self.status.activate(&id.0).await;
        self.refresh_catalog(&result).await;
        ResourceItemResponse::from_result(result)
    }

    /// Deactivate a resource
    #[oai(
        path = "/resources/:id/deactivate",
        method = "post",
        tag = "ApiTags::Resources"
    )]
    async fn deactivate(&self, id: Path<String>) -> ResourceItemResponse {
        let result = self.status.deactivate(&id.0).await;
        self.refresh_catalog(&result).await;
        ResourceItemResponse::from_result(result)
    }
}
