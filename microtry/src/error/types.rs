//! Primary error enum for callers that need a concrete error type.

use figment::Error as FigmentError;
use thiserror::Error;

/// Errors surfaced when a raised payload leaves the `Try` world.
///
/// A [`Failure`](crate::Try::Failure) keeps whatever was raised. Converting
/// it into a `TryError` is where an error shape is finally imposed.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum TryError {
    /// A raised payload that was not itself an error value.
    #[error("computation raised: {message}")]
    Panicked {
        /// Text recovered from the payload, or a placeholder when the payload
        /// carried no message.
        message: String,
    },

    /// A standard error value that was raised or returned.
    #[error(transparent)]
    Raised(Box<dyn std::error::Error + Send + Sync>),

    /// Settings could not be extracted from their providers.
    #[error("failed to load settings: {0}")]
    Settings(#[from] Box<FigmentError>),
}

impl TryError {
    /// Builds a [`TryError::Panicked`] from any message.
    #[must_use]
    pub fn panicked(message: impl Into<String>) -> Self {
        Self::Panicked {
            message: message.into(),
        }
    }
}

/// Result alias used by operations that report [`TryError`].
pub type TryResult<T> = Result<T, TryError>;
