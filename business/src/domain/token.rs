#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TokenError {
    #[error("auth.token_empty")]
    Empty,
    #[error("auth.token_invalid")]
    Invalid,
    #[error("auth.subject_missing")]
    SubjectMissing,
}

/// Service port extracting the caller identifier from a bearer token.
pub trait BearerTokenDecoder: Send + Sync {
    fn extract_id(&self, token: &str) -> Result<String, TokenError>;
}
