/// Failures reported by an [`EntityStore`](crate::domain::store::EntityStore).
///
/// Variants render as code-style identifiers so they can be looked up in a
/// message catalog.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RepositoryError {
    #[error("repository.not_found")]
    NotFound,
    /// The record could not be mapped to a storage row.
    #[error("repository.persistence")]
    Persistence,
    /// A unique constraint rejected the write.
    #[error("repository.duplicated")]
    Duplicated,
    #[error("repository.database_error")]
    DatabaseError,
}
