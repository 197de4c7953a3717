use std::sync::Arc;

use poem_openapi::{
    OpenApi,
    param::{Path, Query},
    payload::Json,
};

use business::domain::operation::result::OperationResult;
use business::domain::repository::{EntityRepository, StatusManager};
use business::domain::shared::value_objects::Page;
use business::domain::user::model::User;

use crate::api::responses::{
    CountResult, CreateResponse, DeleteResponse, operation_response, page_size,
};
use crate::api::security::BearerAuth;
use crate::api::tags::ApiTags;
use crate::api::user::dto::{CreateUserRequest, UpdateUserRequest, UserPageResponse, UserResponse};

operation_response!(UserItemResponse, 200, Ok(Json<UserResponse>));
operation_response!(UserListResponse, 200, Ok(Json<UserPageResponse>));

impl UserItemResponse {
    fn from_result(result: OperationResult<User>) -> Self {
        match result.into_outcome() {
            Ok(user) => Self::Ok(Json(user.into())),
            Err(failure) => failure.into(),
        }
    }
}

pub struct UserApi {
    repository: Arc<dyn EntityRepository<User>>,
    status: Arc<dyn StatusManager<User>>,
}

impl UserApi {
    pub fn new(
        repository: Arc<dyn EntityRepository<User>>,
        status: Arc<dyn StatusManager<User>>,
    ) -> Self {
        Self { repository, status }
    }
}

/// User management API
#[OpenApi]
impl UserApi {
    /// Create a user
    #[oai(path = "/users", method = "post", tag = "ApiTags::Users")]
    async fn create(&self, body: Json<CreateUserRequest>) -> CreateResponse {
        CreateResponse::from_result(self.repository.create(Some(body.0.into_domain())).await)
    }

    /// List users
    ///
    /// Returns one zero-based page of users whose name equals `filter`, or of
    /// all users when no filter is given.
    #[oai(path = "/users", method = "get", tag = "ApiTags::Users")]
    async fn list(
        &self,
        page: Query<Option<u32>>,
        size: Query<Option<u32>>,
        filter: Query<Option<String>>,
    ) -> UserListResponse {
        let page = Page::new(page.0.unwrap_or(0) as usize, page_size(size.0));
        let filter = filter.0.unwrap_or_default();

        match self
            .repository
            .read_filter_paged(page, &filter)
            .await
            .into_outcome()
        {
            Ok(paged) => UserListResponse::Ok(Json(paged.into())),
            Err(failure) => failure.into(),
        }
    }

    /// Count users
    #[oai(path = "/users/count", method = "get", tag = "ApiTags::Users")]
    async fn count(&self, filter: Query<Option<String>>) -> CountResult {
        let filter = filter.0.unwrap_or_default();
        CountResult::from_result(self.repository.read_filter_count(&filter).await)
    }

    /// Get the authenticated user
    ///
    /// Resolves the user named by the `sub` claim of the bearer token.
    #[oai(path = "/users/me", method = "get", tag = "ApiTags::Users")]
    async fn me(&self, auth: BearerAuth) -> UserItemResponse {
        UserItemResponse::from_result(self.repository.read_by_bearer(&auth.0.token).await)
    }

    /// Get a user by id
    #[oai(path = "/users/:id", method = "get", tag = "ApiTags::Users")]
    async fn get_by_id(&self, id: Path<String>) -> UserItemResponse {
        UserItemResponse::from_result(self.repository.read_id(&id.0).await)
    }

    /// Update a user
    ///
    /// Omitted fields keep their stored value; a new password is hashed.
    #[oai(path = "/users/:id", method = "put", tag = "ApiTags::Users")]
    async fn update(&self, id: Path<String>, body: Json<UpdateUserRequest>) -> UserItemResponse {
        UserItemResponse::from_result(
            self.repository
                .update(Some(body.0.into_domain(id.0)))
                .await,
        )
    }

    /// Delete a user
    #[oai(path = "/users/:id", method = "delete", tag = "ApiTags::Users")]
    async fn delete(&self, id: Path<String>) -> DeleteResponse {
        DeleteResponse::from_result(self.repository.delete(&id.0).await)
    }

    /// Activate a user
    #[oai(path = "/users/:id/activate", method = "post", tag = "ApiTags::Users")]
    async fn activate(&self, id: Path<String>) -> UserItemResponse {
        UserItemResponse::from_result(self.status.activate(&id.0).await)
    }

    /// Deactivate a user
    #[oai(path = "/users/:id/deactivate", method = "post", tag = "ApiTags::Users")]
    async fn deactivate(&self, id: Path<String>) -> UserItemResponse {
        UserItemResponse::from_result(self.status.deactivate(&id.0).await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use auth::JwtBearerDecoder;
    use business::application::repository::Repository;
    use business::domain::localization::catalog::ResourceCatalog;
    use localization::EmbeddedResourceProvider;
    use logger::{TracingLogService, TracingLogger};
    use persistence::memory::InMemoryStore;
    use poem::http::StatusCode;
    use poem::test::TestClient;
    use poem_openapi::OpenApiService;
    use serde_json::json;

    fn client() -> TestClient<poem::Route> {
        let catalog = Arc::new(ResourceCatalog::new(Arc::new(
            EmbeddedResourceProvider::english().unwrap(),
        )));
        let repository = Arc::new(Repository::new(
            Arc::new(InMemoryStore::<User>::new()),
            catalog,
            Arc::new(TracingLogService),
            Arc::new(TracingLogger),
            Arc::new(JwtBearerDecoder::new("test-secret")),
        ));
        let service = OpenApiService::new(
            UserApi::new(repository.clone(), repository),
            "test",
            "1.0",
        );
        TestClient::new(poem::Route::new().nest("/", service))
    }

    #[tokio::test]
    async fn should_reject_duplicate_email() {
        // Arrange
        let cli = client();
        let body = json!({
            "name": "Ada Lovelace",
            "email": "ada@example.com",
            "password": "analytical-engine",
        });
        cli.post("/users")
            .body_json(&body)
            .send()
            .await
            .assert_status(StatusCode::CREATED);

        // Act
        let response = cli.post("/users").body_json(&body).send().await;

        // Assert
        response.assert_status(StatusCode::BAD_REQUEST);
        response
            .json()
            .await
            .value()
            .object()
            .get("message")
            .assert_string("A User with the same email already exists.");
    }

    #[tokio::test]
    async fn should_reject_invalid_bearer_token() {
        let cli = client();

        let response = cli
            .get("/users/me")
            .header("Authorization", "Bearer not-a-jwt")
            .send()
            .await;

        response.assert_status(StatusCode::UNAUTHORIZED);
        response
            .json()
            .await
            .value()
            .object()
            .get("name")
            .assert_string("AUTHENTICATION_ERROR");
    }
}
