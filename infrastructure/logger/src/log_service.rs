use async_trait::async_trait;
use business::domain::log_service::{LogEntry, LogLevel, LogService};
use business::domain::operation::result::OperationResult;
use tracing::{debug, error, info, warn};
use uuid::Uuid;

use crate::tracing_logger::TARGET;

/// Log store that writes each entry as a structured tracing event.
///
/// The returned id is attached to the event as `log_id`.
pub struct TracingLogService;

#[async_trait]
impl LogService for TracingLogService {
    async fn create_log(&self, entry: LogEntry) -> OperationResult<String> {
        let log_id = Uuid::new_v4().to_string();
        let action = entry.action.name();
        let created_at = entry.created_at.to_rfc3339();

        match entry.level {
            LogLevel::Debug => debug!(
                target: TARGET,
                log_id = %log_id,
                entity = %entry.entity_name,
                action,
                value = %entry.entity_value,
                created_at = %created_at,
                "{}",
                entry.message
            ),
            LogLevel::Information => info!(
                target: TARGET,
                log_id = %log_id,
                entity = %entry.entity_name,
                action,
                value = %entry.entity_value,
                created_at = %created_at,
                "{}",
                entry.message
            ),
            LogLevel::Warning => warn!(
                target: TARGET,
                log_id = %log_id,
                entity = %entry.entity_name,
                action,
                value = %entry.entity_value,
                created_at = %created_at,
                "{}",
                entry.message
            ),
            LogLevel::Error | LogLevel::Critical => error!(
                target: TARGET,
                log_id = %log_id,
                entity = %entry.entity_name,
                action,
                level = %entry.level,
                value = %entry.entity_value,
                created_at = %created_at,
                "{}",
                entry.message
            ),
        }

        OperationResult::success(log_id, "Log entry recorded.")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::log_service::ActionType;

    #[tokio::test]
    async fn should_return_fresh_log_id() {
        let service = TracingLogService;

        let first = service
            .create_log(LogEntry::error("boom", "Resource", "abc", ActionType::Delete))
            .await;
        let second = service
            .create_log(LogEntry::error("boom", "Resource", "abc", ActionType::Delete))
            .await;

        assert!(first.is_success());
        assert!(Uuid::parse_str(first.data().unwrap()).is_ok());
        assert_ne!(first.data(), second.data());
    }
}
