use poem::http::StatusCode;
use poem_openapi::{Object, payload::Json};

use business::domain::operation::error_type::ErrorType;
use business::domain::operation::result::Failure;

#[derive(Object, Debug)]
pub struct ErrorResponse {
    pub name: String,
    pub message: String,
}

pub trait IntoErrorResponse {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>);
}

pub fn status_for(error_type: ErrorType) -> StatusCode {
    match error_type {
        ErrorType::BusinessValidation | ErrorType::InvalidData | ErrorType::UserInput => {
            StatusCode::BAD_REQUEST
        }
        ErrorType::NotFound => StatusCode::NOT_FOUND,
        ErrorType::Authentication => StatusCode::UNAUTHORIZED,
        ErrorType::Authorization => StatusCode::FORBIDDEN,
        ErrorType::Timeout => StatusCode::GATEWAY_TIMEOUT,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl IntoErrorResponse for Failure {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        (
            status_for(self.error_type),
            Json(ErrorResponse {
                name: self.error_type.name().to_string(),
                message: self.message,
            }),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_map_validation_failures_to_bad_request() {
        // Arrange
        let failure = Failure::new("Name is required.", ErrorType::BusinessValidation);

        // Act
        let (status, json) = failure.into_error_response();

        // Assert
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json.0.name, "BUSINESS_VALIDATION_ERROR");
        assert_eq!(json.0.message, "Name is required.");
    }

    #[test]
    fn should_map_security_and_infrastructure_kinds() {
        assert_eq!(status_for(ErrorType::Authentication), StatusCode::UNAUTHORIZED);
        assert_eq!(status_for(ErrorType::Authorization), StatusCode::FORBIDDEN);
        assert_eq!(status_for(ErrorType::Timeout), StatusCode::GATEWAY_TIMEOUT);
        assert_eq!(status_for(ErrorType::NotFound), StatusCode::NOT_FOUND);
        assert_eq!(status_for(ErrorType::Database), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
