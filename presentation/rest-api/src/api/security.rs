use poem_openapi::{SecurityScheme, auth::Bearer};

/// Bearer token authentication
///
/// The token is decoded by the repository layer, which reports invalid
/// tokens as authentication failures.
#[derive(SecurityScheme)]
#[oai(ty = "bearer", bearer_format = "JWT")]
pub struct BearerAuth(pub Bearer);
