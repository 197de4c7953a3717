use anyhow::Context;

/// Configuration for bearer token verification.
pub struct AuthConfig {
    pub jwt_secret: String,
}

impl AuthConfig {
    /// Environment variables:
    /// - JWT_SECRET: HS256 signing secret (required)
    pub fn from_env() -> anyhow::Result<Self> {
        let jwt_secret = std::env::var("JWT_SECRET").context("JWT_SECRET must be set")?;
        Ok(Self { jwt_secret })
    }
}
