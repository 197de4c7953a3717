use chrono::{DateTime, Utc};
use serde::Serialize;

use super::validation::ValidationRuleSet;

/// A persisted domain record handled by the generic repository pipeline.
///
/// Identifiers are GUID strings assigned on create. `active` carries the
/// soft enable/disable status.
pub trait Entity: std::fmt::Debug + Clone + Send + Sync + Serialize + 'static {
    /// Type name used in messages and log entries.
    const NAME: &'static str;
    /// Field whose value must be unique across the store.
    const UNIQUE_FIELD: &'static str;

    fn id(&self) -> &str;
    fn set_id(&mut self, id: String);

    fn is_active(&self) -> bool;
    fn set_active(&mut self, active: bool);

    fn created_at(&self) -> DateTime<Utc>;
    fn updated_at(&self) -> DateTime<Utc>;
    fn set_created_at(&mut self, at: DateTime<Utc>);
    fn set_updated_at(&mut self, at: DateTime<Utc>);

    /// Rules checked before an entity is created.
    fn rules() -> ValidationRuleSet<Self>;

    /// Rules checked against the incoming data of an update.
    fn update_rules() -> ValidationRuleSet<Self> {
        Self::rules()
    }

    /// Normalized value of [`Entity::UNIQUE_FIELD`].
    fn unique_key(&self) -> String;

    /// Whether the record matches a caller supplied filter string.
    fn matches_filter(&self, filter: &str) -> bool;

    /// Applies create-time defaults before the record is stored.
    fn prepare_for_create(&mut self) {}

    /// Copies the modified fields of `self` onto `existing`.
    fn merge_into(self, existing: Self) -> Self;
}
