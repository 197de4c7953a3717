use business::domain::token::{BearerTokenDecoder, TokenError};
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// Identifier of the authenticated entity.
    #[serde(default)]
    pub sub: Option<String>,
    pub exp: usize,
}

/// Verifies HS256 bearer tokens and yields their `sub` claim.
pub struct JwtBearerDecoder {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl JwtBearerDecoder {
    pub fn new(secret: &str) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        Self {
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        }
    }
}

impl BearerTokenDecoder for JwtBearerDecoder {
    fn extract_id(&self, token: &str) -> Result<String, TokenError> {
        let token = token.trim();
        let token = match token.strip_prefix("Bearer") {
            Some(rest) if rest.is_empty() || rest.starts_with(' ') => rest.trim(),
            _ => token,
        };
        if token.is_empty() {
            return Err(TokenError::Empty);
        }

        let data = decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
            tracing::debug!("Token decode error: {}", e);
            TokenError::Invalid
        })?;

        data.claims
            .sub
            .filter(|sub| !sub.trim().is_empty())
            .ok_or(TokenError::SubjectMissing)
    }
}
