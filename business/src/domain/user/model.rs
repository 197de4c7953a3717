use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::password::hash_password;
use crate::domain::entity::Entity;
use crate::domain::validation::{Check, ValidationRuleSet};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    /// Plain text until created, salted hash afterwards. Never serialized.
    #[serde(skip_serializing, default)]
    pub password: String,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
        active: bool,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: String::new(),
            name: name.into(),
            email: email.into(),
            password: password.into(),
            active,
            created_at: now,
            updated_at: now,
        }
    }

    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        id: String,
        name: String,
        email: String,
        password: String,
        active: bool,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            email,
            password,
            active,
            created_at,
            updated_at,
        }
    }
}

impl Entity for User {
    const NAME: &'static str = "User";
    const UNIQUE_FIELD: &'static str = "email";

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }

    fn is_active(&self) -> bool {
        self.active
    }

    fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    fn set_created_at(&mut self, at: DateTime<Utc>) {
        self.created_at = at;
    }

    fn set_updated_at(&mut self, at: DateTime<Utc>) {
        self.updated_at = at;
    }

    fn rules() -> ValidationRuleSet<Self> {
        ValidationRuleSet::<Self>::new()
            .length("Name", |u| Some(u.name.as_str()), 3, 100)
            .rule(
                "Email",
                |u| Some(u.email.as_str()),
                [Check::Required, Check::Email, Check::MaxLength(150)],
            )
            .length("Password", |u| Some(u.password.as_str()), 8, 128)
    }

    /// Updates may omit any field; supplied values follow the create limits.
    fn update_rules() -> ValidationRuleSet<Self> {
        ValidationRuleSet::<Self>::new()
            .rule(
                "Name",
                |u| Some(u.name.as_str()),
                [Check::MinLength(3), Check::MaxLength(100)],
            )
            .rule(
                "Email",
                |u| Some(u.email.as_str()),
                [Check::Email, Check::MaxLength(150)],
            )
            .rule(
                "Password",
                |u| Some(u.password.as_str()),
                [Check::MinLength(8), Check::MaxLength(128)],
            )
    }

    fn unique_key(&self) -> String {
        self.email.trim().to_lowercase()
    }

    fn matches_filter(&self, filter: &str) -> bool {
        self.name == filter
    }

    fn prepare_for_create(&mut self) {
        self.password = hash_password(&self.password);
    }

    fn merge_into(self, mut existing: Self) -> Self {
        if !self.name.trim().is_empty() {
            existing.name = self.name;
        }
        if !self.email.trim().is_empty() {
            existing.email = self.email;
        }
        if !self.password.is_empty() {
            existing.password = hash_password(&self.password);
        }
        existing
    }
}
