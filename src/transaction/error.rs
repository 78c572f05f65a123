//! Transaction error types.

use thiserror::Error;

use crate::error::InvalidArgument;

/// Result type for safe transaction begin.
pub type TransactionResult<T, E> = Result<T, TransactionError<E>>;

/// Errors returned by the transaction dispatcher.
///
/// `E` is the provider's own error type. Provider errors are carried as-is:
/// no retry, wrapping message or translation is added.
#[derive(Debug, Error)]
pub enum TransactionError<E> {
    /// A required argument was absent. Raised before any provider call.
    #[error(transparent)]
    InvalidArgument(#[from] InvalidArgument),

    /// The provider's native begin failed or was cancelled.
    #[error(transparent)]
    Provider(E),
}

impl<E> TransactionError<E> {
    /// Check if this error was raised by argument validation.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, TransactionError::InvalidArgument(_))
    }

    /// Take the provider error, if that is what this is.
    pub fn into_provider(self) -> Option<E> {
        match self {
            TransactionError::Provider(e) => Some(e),
            TransactionError::InvalidArgument(_) => None,
        }
    }
}
