use super::error_type::ErrorType;
use super::result::OperationResult;

/// Builds a failed [`OperationResult`] for one error kind.
///
/// Call sites pick the intent (a database problem, a validation problem) and
/// the strategy fixes the taxonomy value.
pub trait ErrorStrategy<T> {
    fn create_failure(&self, message: String) -> OperationResult<T>;
}

macro_rules! error_strategies {
    ($($(#[$doc:meta])* $name:ident => $error_type:expr;)+) => {
        $(
            $(#[$doc])*
            #[derive(Debug, Clone, Copy, Default)]
            pub struct $name;

            impl $name {
                pub const ERROR_TYPE: ErrorType = $error_type;
            }

            impl<T> ErrorStrategy<T> for $name {
                fn create_failure(&self, message: String) -> OperationResult<T> {
                    OperationResult::fail(message, Self::ERROR_TYPE)
                }
            }
        )+
    };
}

error_strategies! {
    /// Business rules and field validation.
    BusinessValidationStrategy => ErrorType::BusinessValidation;
    DatabaseStrategy => ErrorType::Database;
    ExternalServiceStrategy => ErrorType::ExternalService;
    UnexpectedStrategy => ErrorType::Unexpected;
    InvalidDataStrategy => ErrorType::InvalidData;
    ConfigMissingStrategy => ErrorType::ConfigMissing;
    NetworkStrategy => ErrorType::Network;
    UserInputStrategy => ErrorType::UserInput;
    NotFoundStrategy => ErrorType::NotFound;
    AuthenticationStrategy => ErrorType::Authentication;
    AuthorizationStrategy => ErrorType::Authorization;
    /// Localized message lookups.
    ResourceStrategy => ErrorType::Resource;
    TimeoutStrategy => ErrorType::Timeout;
}

/// Entry point delegating failure construction to a strategy.
pub struct OperationStrategy;

impl OperationStrategy {
    pub fn fail<T, S>(message: impl Into<String>, strategy: &S) -> OperationResult<T>
    where
        S: ErrorStrategy<T> + ?Sized,
    {
        strategy.create_failure(message.into())
    }
}
