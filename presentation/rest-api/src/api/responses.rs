use poem_openapi::{Object, payload::Json};

use business::domain::operation::result::OperationResult;

/// Generates an endpoint response enum with one success variant plus the
/// error statuses a failed `OperationResult` can map to.
macro_rules! operation_response {
    ($name:ident, $status:literal, $variant:ident($payload:ty)) => {
        #[derive(poem_openapi::ApiResponse)]
        pub enum $name {
            #[oai(status = $status)]
            $variant($payload),
            #[oai(status = 400)]
            BadRequest(poem_openapi::payload::Json<crate::api::error::ErrorResponse>),
            #[oai(status = 401)]
            Unauthorized(poem_openapi::payload::Json<crate::api::error::ErrorResponse>),
            #[oai(status = 403)]
            Forbidden(poem_openapi::payload::Json<crate::api::error::ErrorResponse>),
            #[oai(status = 404)]
            NotFound(poem_openapi::payload::Json<crate::api::error::ErrorResponse>),
            #[oai(status = 500)]
            InternalError(poem_openapi::payload::Json<crate::api::error::ErrorResponse>),
            #[oai(status = 504)]
            GatewayTimeout(poem_openapi::payload::Json<crate::api::error::ErrorResponse>),
        }

        impl From<business::domain::operation::result::Failure> for $name {
            fn from(failure: business::domain::operation::result::Failure) -> Self {
                let (status, json) =
                    crate::api::error::IntoErrorResponse::into_error_response(failure);
                match status.as_u16() {
                    400 => Self::BadRequest(json),
                    401 => Self::Unauthorized(json),
                    403 => Self::Forbidden(json),
                    404 => Self::NotFound(json),
                    504 => Self::GatewayTimeout(json),
                    _ => Self::InternalError(json),
                }
            }
        }
    };
}

pub(crate) use operation_response;

#[derive(Debug, Clone, Object)]
pub struct CreatedResponse {
    /// Identifier assigned to the new record
    pub id: String,
    pub message: String,
}

#[derive(Debug, Clone, Object)]
pub struct CountResponse {
    /// Number of records matching the filter
    pub count: u64,
    pub message: String,
}

#[derive(Debug, Clone, Object)]
pub struct MessageResponse {
    pub message: String,
}

/// Default and upper bound for the `size` query parameter.
pub const DEFAULT_PAGE_SIZE: u32 = 20;
pub const MAX_PAGE_SIZE: u32 = 100;

/// Clamps the requested page size into `1..=MAX_PAGE_SIZE`.
pub fn page_size(requested: Option<u32>) -> usize {
    requested.unwrap_or(DEFAULT_PAGE_SIZE).clamp(1, MAX_PAGE_SIZE) as usize
}

operation_response!(CreateResponse, 201, Created(Json<CreatedResponse>));
operation_response!(CountResult, 200, Ok(Json<CountResponse>));
operation_response!(DeleteResponse, 200, Ok(Json<MessageResponse>));

impl CreateResponse {
    pub fn from_result(result: OperationResult<String>) -> Self {
        let message = result.message().to_string();
        match result.into_outcome() {
            Ok(id) => Self::Created(Json(CreatedResponse { id, message })),
            Err(failure) => failure.into(),
        }
    }
}

impl CountResult {
    pub fn from_result(result: OperationResult<u64>) -> Self {
        let message = result.message().to_string();
        match result.into_outcome() {
            Ok(count) => Self::Ok(Json(CountResponse { count, message })),
            Err(failure) => failure.into(),
        }
    }
}

impl DeleteResponse {
    pub fn from_result(result: OperationResult<bool>) -> Self {
        let message = result.message().to_string();
        match result.into_outcome() {
            Ok(_) => Self::Ok(Json(MessageResponse { message })),
            Err(failure) => failure.into(),
        }
    }
}
