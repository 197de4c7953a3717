#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResourceError {
    #[error("resource.empty_keys")]
    EmptyKeys,
    #[error("resource.provider_unavailable")]
    ProviderUnavailable,
    #[error("resource.malformed_catalog")]
    MalformedCatalog,
}
