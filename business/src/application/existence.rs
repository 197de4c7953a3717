use std::sync::Arc;

use uuid::Uuid;

use crate::application::pipeline::{Pipeline, PipelineError};
use crate::domain::entity::Entity;
use crate::domain::localization::catalog::ResourceCatalog;
use crate::domain::localization::keys;
use crate::domain::log_service::{ActionType, LogService};
use crate::domain::logger::Logger;
use crate::domain::operation::result::OperationResult;
use crate::domain::store::EntityStore;

/// Confirms an entity exists before it is read or mutated.
pub struct EntityExistenceValidator<T: Entity> {
    store: Arc<dyn EntityStore<T>>,
    pipeline: Pipeline,
}

impl<T: Entity> EntityExistenceValidator<T> {
    pub fn new(
        store: Arc<dyn EntityStore<T>>,
        messages: Arc<ResourceCatalog>,
        log_service: Arc<dyn LogService>,
        logger: Arc<dyn Logger>,
    ) -> Self {
        Self {
            store,
            pipeline: Pipeline {
                messages,
                log_service,
                logger,
            },
        }
    }

    pub(crate) fn from_pipeline(store: Arc<dyn EntityStore<T>>, pipeline: Pipeline) -> Self {
        Self { store, pipeline }
    }

    /// Checks that `id` is a well-formed GUID naming a stored entity.
    pub async fn has_id(&self, id: &str) -> OperationResult<T> {
        let outcome = self.check_id(id).await;
        self.finish(id, outcome).await
    }

    /// Looks `id` up without checking its format.
    pub async fn has_entity(&self, id: &str) -> OperationResult<T> {
        let outcome = self.check_entity(id).await;
        self.finish(id, outcome).await
    }

    pub(crate) async fn check_id(&self, id: &str) -> Result<T, PipelineError> {
        if id.trim().is_empty() {
            let messages = self.pipeline.messages(keys::EXISTENCE_KEYS).await;
            return Err(PipelineError::validation(
                messages.get_resource(keys::NECESSARY_DATA_NOT_PROVIDED),
            ));
        }

        if Uuid::parse_str(id).is_err() {
            let messages = self.pipeline.messages(keys::EXISTENCE_KEYS).await;
            return Err(PipelineError::validation(
                messages.get_resource(keys::INVALID_GUID),
            ));
        }

        self.check_entity(id).await
    }

    async fn check_entity(&self, id: &str) -> Result<T, PipelineError> {
        if id.is_empty() {
            let messages = self.pipeline.messages(keys::EXISTENCE_KEYS).await;
            return Err(PipelineError::validation(
                messages.get_resource(keys::NECESSARY_DATA_NOT_PROVIDED),
            ));
        }

        match self.store.find_by_id(id).await? {
            Some(entity) => Ok(entity),
            None => {
                let messages = self.pipeline.messages(keys::EXISTENCE_KEYS).await;
                Err(PipelineError::validation(
                    messages.format(keys::ENTITY_NOT_FOUND, T::NAME),
                ))
            }
        }
    }

    async fn finish(&self, id: &str, outcome: Result<T, PipelineError>) -> OperationResult<T> {
        let outcome = match outcome {
            Ok(entity) => {
                let messages = self.pipeline.messages(keys::EXISTENCE_KEYS).await;
                Ok(OperationResult::success(
                    entity,
                    messages.format(keys::READ_SUCCESS, T::NAME),
                ))
            }
            Err(e) => Err(e),
        };
        self.pipeline
            .complete(T::NAME, ActionType::ReadId, id, outcome)
            .await
    }
}
