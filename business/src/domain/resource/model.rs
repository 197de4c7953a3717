use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entity::Entity;
use crate::domain::validation::ValidationRuleSet;

/// A localized string managed through the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    pub id: String,
    pub name: String,
    pub value: String,
    pub comment: String,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Resource {
    /// Unsaved resource; the id and timestamps are assigned on create.
    pub fn new(
        name: impl Into<String>,
        value: impl Into<String>,
        comment: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: String::new(),
            name: name.into(),
            value: value.into(),
            comment: comment.into(),
            active: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        id: String,
        name: String,
        value: String,
        comment: String,
        active: bool,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            value,
            comment,
            active,
            created_at,
            updated_at,
        }
    }
}

impl Entity for Resource {
    const NAME: &'static str = "Resource";
    const UNIQUE_FIELD: &'static str = "name";

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
            .length("Name", |r| Some(r.name.as_str()), 6, 50)
            .length("Value", |r| Some(r.value.as_str()), 6, 100)
            .length("Comment", |r| Some(r.comment.as_str()), 10, 100)
    }

    fn unique_key(&self) -> String {
        self.name.trim().to_string()
    }

    fn matches_filter(&self, filter: &str) -> bool {
        self.name == filter
    }

    fn prepare_for_create(&mut self) {
        self.active = false;
    }

    fn merge_into(self, mut existing: Self) -> Self {
        existing.name = self.name;
        existing.value = self.value;
        existing.comment = self.comment;
        existing
    }
}
