use super::error_type::ErrorType;

#[derive(Debug, Clone, PartialEq)]
enum Outcome<T> {
    Success(T),
    Failure(ErrorType),
}

/// Success-or-typed-failure wrapper returned by every business operation.
///
/// Data is present only on success and the error type is `ErrorType::None`
/// only on success.
#[derive(Debug, Clone, PartialEq)]
pub struct OperationResult<T> {
    message: String,
    outcome: Outcome<T>,
}

/// Failure metadata detached from any payload type.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{error_type}: {message}")]
pub struct Failure {
    pub message: String,
    pub error_type: ErrorType,
}

impl Failure {
    pub fn new(message: impl Into<String>, error_type: ErrorType) -> Self {
        let error_type = match error_type {
            ErrorType::None => ErrorType::Unexpected,
            other => other,
        };
        Self {
            message: message.into(),
            error_type,
        }
    }
}

impl<T> OperationResult<T> {
    pub fn success(data: T, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            outcome: Outcome::Success(data),
        }
    }

    /// Builds a failure. `ErrorType::None` is not a failure kind and is
    /// recorded as `ErrorType::Unexpected`.
    pub fn fail(message: impl Into<String>, error_type: ErrorType) -> Self {
        Failure::new(message, error_type).into()
    }

    pub fn is_success(&self) -> bool {
        matches!(self.outcome, Outcome::Success(_))
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn error_type(&self) -> ErrorType {
        match self.outcome {
            Outcome::Success(_) => ErrorType::None,
            Outcome::Failure(error_type) => error_type,
        }
    }

    pub fn data(&self) -> Option<&T> {
        match &self.outcome {
            Outcome::Success(data) => Some(data),
            Outcome::Failure(_) => None,
        }
    }

    pub fn into_data(self) -> Option<T> {
        match self.outcome {
            Outcome::Success(data) => Some(data),
            Outcome::Failure(_) => None,
        }
    }

    /// Splits the result so failures can be propagated with `?`.
    pub fn into_outcome(self) -> Result<T, Failure> {
        match self.outcome {
            Outcome::Success(data) => Ok(data),
            Outcome::Failure(error_type) => Err(Failure {
                message: self.message,
                error_type,
            }),
        }
    }

    /// Re-wraps a failure under another payload type, handing the result
    /// back unchanged when it is a success.
    pub fn try_convert_to<U>(self) -> Result<OperationResult<U>, Self> {
        match self.outcome {
            Outcome::Failure(error_type) => Ok(OperationResult {
                message: self.message,
                outcome: Outcome::Failure(error_type),
            }),
            Outcome::Success(_) => Err(self),
        }
    }

    /// Re-wraps a failure under another payload type.
    ///
    /// # Panics
    ///
    /// Panics when called on a successful result: its data cannot be
    /// reinterpreted as `U`.
    pub fn convert_to<U>(self) -> OperationResult<U> {
        match self.try_convert_to() {
            Ok(converted) => converted,
            Err(_) => panic!("operation_result.convert_successful: only failed results can change payload type"),
        }
    }

    /// Alias of [`OperationResult::convert_to`].
    pub fn as_type<U>(self) -> OperationResult<U> {
        self.convert_to()
    }

    pub fn map<U, F>(self, f: F) -> OperationResult<U>
    where
        F: FnOnce(T) -> U,
    {
        OperationResult {
            message: self.message,
            outcome: match self.outcome {
                Outcome::Success(data) => Outcome::Success(f(data)),
                Outcome::Failure(error_type) => Outcome::Failure(error_type),
            },
        }
    }
}

impl<T> From<Failure> for OperationResult<T> {
    fn from(failure: Failure) -> Self {
        Self {
            message: failure.message,
            outcome: Outcome::Failure(failure.error_type),
        }
    }
}
