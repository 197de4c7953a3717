use serde::{Deserialize, Serialize};
use strum_macros::EnumIter;

const UNKNOWN_NAME: &str = "UNKNOWN";
const UNKNOWN_DESCRIPTION: &str = "Description not available.";

/// Kinds of failure a business operation can report.
///
/// `None` is reserved for successful results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Serialize, Deserialize)]
pub enum ErrorType {
    None,
    BusinessValidation,
    Database,
    ExternalService,
    Unexpected,
    InvalidData,
    ConfigMissing,
    Network,
    UserInput,
    NotFound,
    Authentication,
    Authorization,
    Resource,
    Timeout,
}

/// Machine name and human description attached to an [`ErrorType`].
#[derive(Debug)]
pub struct ErrorTypeMetadata {
    pub error_type: ErrorType,
    pub name: &'static str,
    pub description: &'static str,
}

static METADATA: &[ErrorTypeMetadata] = &[
    ErrorTypeMetadata {
        error_type: ErrorType::None,
        name: "NONE",
        description: "No error has occurred.",
    },
    ErrorTypeMetadata {
        error_type: ErrorType::BusinessValidation,
        name: "BUSINESS_VALIDATION_ERROR",
        description: "A business rule or data validation failed.",
    },
    ErrorTypeMetadata {
        error_type: ErrorType::Database,
        name: "DATABASE_ERROR",
        description: "The persistence store reported a failure.",
    },
    ErrorTypeMetadata {
        error_type: ErrorType::ExternalService,
        name: "EXTERNAL_SERVICE_ERROR",
        description: "An external service could not complete the request.",
    },
    ErrorTypeMetadata {
        error_type: ErrorType::Unexpected,
        name: "UNEXPECTED_ERROR",
        description: "An unexpected error has occurred.",
    },
    ErrorTypeMetadata {
        error_type: ErrorType::InvalidData,
        name: "INVALID_DATA_ERROR",
        description: "The supplied data is malformed or inconsistent.",
    },
    ErrorTypeMetadata {
        error_type: ErrorType::ConfigMissing,
        name: "CONFIG_MISSING_ERROR",
        description: "A required configuration value is missing.",
    },
    ErrorTypeMetadata {
        error_type: ErrorType::Network,
        name: "NETWORK_ERROR",
        description: "A network connection failed.",
    },
    ErrorTypeMetadata {
        error_type: ErrorType::UserInput,
        name: "USER_INPUT_ERROR",
        description: "The user input could not be accepted.",
    },
    ErrorTypeMetadata {
        error_type: ErrorType::NotFound,
        name: "NOT_FOUND_ERROR",
        description: "The requested item does not exist.",
    },
    ErrorTypeMetadata {
        error_type: ErrorType::Authentication,
        name: "AUTHENTICATION_ERROR",
        description: "The caller could not be authenticated.",
    },
    ErrorTypeMetadata {
        error_type: ErrorType::Authorization,
        name: "AUTHORIZATION_ERROR",
        description: "The caller is not allowed to perform this operation.",
    },
    ErrorTypeMetadata {
        error_type: ErrorType::Resource,
        name: "RESOURCE_ERROR",
        description: "A localized resource could not be loaded.",
    },
    ErrorTypeMetadata {
        error_type: ErrorType::Timeout,
        name: "TIMEOUT_ERROR",
        description: "The operation did not complete in time.",
    },
];

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("error_type.unknown: {0}")]
pub struct ParseErrorTypeError(pub String);

impl ErrorType {
    pub fn metadata(self) -> Option<&'static ErrorTypeMetadata> {
        METADATA.iter().find(|m| m.error_type == self)
    }

    /// Stable machine-readable name, `"UNKNOWN"` when no metadata is registered.
    pub fn name(self) -> &'static str {
        self.metadata().map(|m| m.name).unwrap_or(UNKNOWN_NAME)
    }

    pub fn description(self) -> &'static str {
        self.metadata()
            .map(|m| m.description)
            .unwrap_or(UNKNOWN_DESCRIPTION)
    }

    pub fn is_error(self) -> bool {
        self != ErrorType::None
    }
}

impl std::fmt::Display for ErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for ErrorType {
    type Err = ParseErrorTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        METADATA
            .iter()
            .find(|m| m.name == s)
            .map(|m| m.error_type)
            .ok_or_else(|| ParseErrorTypeError(s.to_string()))
    }
}
