use chrono::{DateTime, Utc};
use poem_openapi::Object;

use business::domain::shared::value_objects::PagedResult;
use business::domain::user::model::User;

#[derive(Debug, Clone, Object)]
pub struct CreateUserRequest {
    /// Display name (3-100 characters)
    pub name: String,
    /// Unique email address
    pub email: String,
    /// Plain password (8-128 characters), stored hashed
    pub password: String,
    /// Defaults to true
    #[oai(skip_serializing_if_is_none)]
    pub active: Option<bool>,
}

impl CreateUserRequest {
    pub fn into_domain(self) -> User {
        User::new(
            self.name,
            self.email,
            self.password,
            self.active.unwrap_or(true),
        )
    }
}

/// Partial update: omitted fields keep their stored value.
#[derive(Debug, Clone, Object)]
pub struct UpdateUserRequest {
    #[oai(skip_serializing_if_is_none)]
    pub name: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub email: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub password: Option<String>,
}

impl UpdateUserRequest {
    pub fn into_domain(self, id: String) -> User {
        let mut user = User::new(
            self.name.unwrap_or_default(),
            self.email.unwrap_or_default(),
            self.password.unwrap_or_default(),
            false,
        );
        user.id = id;
        user
    }
}

#[derive(Debug, Clone, Object)]
pub struct UserResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            active: user.active,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct UserPageResponse {
    pub items: Vec<UserResponse>,
    pub page: u64,
    pub size: u64,
    pub total: u64,
    pub total_pages: u64,
}

impl From<PagedResult<User>> for UserPageResponse {
    fn from(paged: PagedResult<User>) -> Self {
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_default_new_users_to_active() {
        let user = CreateUserRequest {
            name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            password: "analytical-engine".to_string(),
            active: None,
        }
        .into_domain();

        assert!(user.active);
    }

    #[test]
    fn should_not_expose_password() {
        let mut user = User::new("Ada Lovelace", "ada@example.com", "secret-hash", true);
        user.id = "id-1".to_string();

        let response = UserResponse::from(user);

        assert_eq!(response.email, "ada@example.com");
        assert_eq!(response.id, "id-1");
    }
}
