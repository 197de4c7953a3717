use std::sync::Arc;

use serde::Serialize;

use crate::domain::errors::RepositoryError;
use crate::domain::localization::catalog::ResourceCatalog;
use crate::domain::localization::handler::ResourceHandler;
use crate::domain::localization::keys;
use crate::domain::log_service::{ActionType, LogEntry, LogService};
use crate::domain::logger::Logger;
use crate::domain::operation::result::{Failure, OperationResult};
use crate::domain::operation::strategy::{
    BusinessValidationStrategy, DatabaseStrategy, ErrorStrategy, OperationStrategy,
};

/// Why a pipeline step stopped.
///
/// `Rejected` carries a failure already built for the caller, `Store` an
/// infrastructure error that still has to be logged and translated.
#[derive(Debug)]
pub(crate) enum PipelineError {
    Rejected(OperationResult<()>),
    Store(RepositoryError),
}

impl From<RepositoryError> for PipelineError {
    fn from(error: RepositoryError) -> Self {
        PipelineError::Store(error)
    }
}

impl From<Failure> for PipelineError {
    fn from(failure: Failure) -> Self {
        PipelineError::Rejected(failure.into())
    }
}

impl PipelineError {
    pub(crate) fn rejected<S>(message: impl Into<String>, strategy: &S) -> Self
    where
        S: ErrorStrategy<()>,
    {
        PipelineError::Rejected(OperationStrategy::fail(message, strategy))
    }

    pub(crate) fn validation(message: impl Into<String>) -> Self {
        Self::rejected(message, &BusinessValidationStrategy)
    }
}

/// Collaborators shared by every step: message lookup and failure logging.
#[derive(Clone)]
pub(crate) struct Pipeline {
    pub(crate) messages: Arc<ResourceCatalog>,
    pub(crate) log_service: Arc<dyn LogService>,
    pub(crate) logger: Arc<dyn Logger>,
}

impl Pipeline {
    /// Loads the declared message keys. Lookup failures degrade to the
    /// not-found sentinel instead of failing the operation.
    pub(crate) async fn messages(&self, keys: &[&str]) -> ResourceHandler {
        match self.messages.handler(keys).await {
            Ok(handler) => handler,
            Err(e) => {
                self.logger
                    .warn(&format!("Message catalog unavailable: {}", e));
                ResourceHandler::empty()
            }
        }
    }

    /// Turns the outcome of a step into the terminal result handed to callers.
    pub(crate) async fn complete<R, V>(
        &self,
        entity_name: &str,
        action: ActionType,
        value: &V,
        outcome: Result<OperationResult<R>, PipelineError>,
    ) -> OperationResult<R>
    where
        V: Serialize + ?Sized,
    {
        match outcome {
            Ok(result) => result,
            Err(PipelineError::Rejected(failure)) => {
                self.logger.debug(&format!(
                    "{} {} rejected: {}",
                    action,
                    entity_name,
                    failure.message()
                ));
                failure.convert_to()
            }
            Err(PipelineError::Store(error)) => {
                self.report(entity_name, action, value, &error).await;
                let messages = self.messages(&[keys::DATABASE_ERROR]).await;
                OperationStrategy::fail(
                    messages.get_resource(keys::DATABASE_ERROR),
                    &DatabaseStrategy,
                )
            }
        }
    }

    async fn report<V>(
        &self,
        entity_name: &str,
        action: ActionType,
        value: &V,
        error: &RepositoryError,
    ) where
        V: Serialize + ?Sized,
    {
        let message = format!("{} {} failed: {}", action, entity_name, error);
        self.logger.error(&message);

        let entry = LogEntry::error(message, entity_name, value, action);
        let logged = self.log_service.create_log(entry).await;
        if !logged.is_success() {
            self.logger.warn(&format!(
                "Log service rejected entry for {} {}: {}",
                action,
                entity_name,
                logged.message()
            ));
        }
    }
}
