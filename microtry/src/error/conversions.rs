//! Conversions from raised payloads and provider errors into `TryError`.

use figment::Error as FigmentError;

use super::TryError;
use crate::Thrown;

impl From<Thrown> for TryError {
    /// Imposes an error shape on a raised payload.
    ///
    /// A payload that already is a `TryError` is returned as is, and one that
    /// [`Thrown::into_error`] can release becomes [`TryError::Raised`] with
    /// the error untouched. Anything else becomes [`TryError::Panicked`]
    /// carrying its message.
    fn from(thrown: Thrown) -> Self {
        let thrown = match thrown.downcast::<Self>() {
            Ok(err) => return err,
            Err(other) => other,
        };
        match thrown.into_error() {
            Ok(source) => Self::Raised(source),
            Err(other) => Self::panicked(other.to_string()),
        }
    }
}

impl From<FigmentError> for TryError {
    fn from(e: FigmentError) -> Self {
        Self::Settings(Box::new(e))
    }
}
