use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::operation::result::OperationResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogLevel {
    Debug,
    Information,
    Warning,
    Error,
    Critical,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogLevel::Debug => write!(f, "debug"),
            LogLevel::Information => write!(f, "information"),
            LogLevel::Warning => write!(f, "warning"),
            LogLevel::Error => write!(f, "error"),
            LogLevel::Critical => write!(f, "critical"),
        }
    }
}

/// Semantic tag of the operation that produced a log entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionType {
    Create,
    Update,
    Delete,
    Activate,
    Deactivate,
    ReadId,
    ReadByBearer,
    ReadFilter,
    ReadFilterCount,
    ReadFilterPage,
}

static ACTION_NAMES: &[(ActionType, &str)] = &[
    (ActionType::Create, "CREATE"),
    (ActionType::Update, "UPDATE"),
    (ActionType::Delete, "DELETE"),
    (ActionType::Activate, "ACTIVATE"),
    (ActionType::Deactivate, "DEACTIVATE"),
    (ActionType::ReadId, "READ_ID"),
    (ActionType::ReadByBearer, "READ_BY_BEARER"),
    (ActionType::ReadFilter, "READ_FILTER"),
    (ActionType::ReadFilterCount, "READ_FILTER_COUNT"),
    (ActionType::ReadFilterPage, "READ_FILTER_PAGE"),
];

impl ActionType {
    pub fn name(self) -> &'static str {
        ACTION_NAMES
            .iter()
            .find(|(action, _)| *action == self)
            .map(|(_, name)| *name)
            .unwrap_or("UNKNOWN")
    }
}

impl std::fmt::Display for ActionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for ActionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ACTION_NAMES
            .iter()
            .find(|(_, name)| *name == s)
            .map(|(action, _)| *action)
            .ok_or_else(|| format!("Invalid action type: {}", s))
    }
}

/// Structured record sent to the external log collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    pub message: String,
    pub entity_name: String,
    /// JSON rendering of the entity or identifier involved.
    pub entity_value: String,
    pub level: LogLevel,
    pub action: ActionType,
    pub created_at: DateTime<Utc>,
}

impl LogEntry {
    pub fn error<V: Serialize + ?Sized>(
        message: impl Into<String>,
        entity_name: &str,
        value: &V,
        action: ActionType,
    ) -> Self {
        Self {
            message: message.into(),
            entity_name: entity_name.to_string(),
            entity_value: serde_json::to_string(value).unwrap_or_default(),
            level: LogLevel::Error,
            action,
            created_at: Utc::now(),
        }
    }
}

/// Service port for the external log store. Returns the id of the stored entry.
#[async_trait]
pub trait LogService: Send + Sync {
    async fn create_log(&self, entry: LogEntry) -> OperationResult<String>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn should_name_every_action_uniquely() {
        let names: HashSet<&str> = ACTION_NAMES.iter().map(|(_, name)| *name).collect();

        assert_eq!(names.len(), ACTION_NAMES.len());
        assert!(!names.contains("UNKNOWN"));
    }

    #[test]
    fn should_parse_action_from_name() {
        assert_eq!("READ_FILTER_PAGE".parse::<ActionType>(), Ok(ActionType::ReadFilterPage));
        assert!("SHRED".parse::<ActionType>().is_err());
    }

    #[test]
    fn should_serialize_entity_value_as_json() {
        let entry = LogEntry::error("boom", "Resource", &"abc", ActionType::Delete);

        assert_eq!(entry.entity_value, "\"abc\"");
        assert_eq!(entry.level, LogLevel::Error);
        assert_eq!(entry.action.to_string(), "DELETE");
    }
}
