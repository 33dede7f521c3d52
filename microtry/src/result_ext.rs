//! Extensions bridging `std::result::Result` and [`Try`].
//!
//! - Use [`TryResultExt::into_try`] to lift a fallible result into the
//!   chaining world, keeping the error as the failure payload. Results whose
//!   error is not a standard error lift through `Try::from` instead.
//! - Use [`ThrownResultExt::into_try_error`] to impose [`TryError`] on the
//!   output of [`Try::result`].
//!
//! # Examples
//!
//! ```
//! use microtry::{ThrownResultExt, TryResultExt};
//!
//! let parsed = "12".parse::<u8>().into_try().then(|n| n + 1);
//! assert_eq!(parsed.unwrap(), 13);
//!
//! let shaped = "x".parse::<u8>().into_try().result().into_try_error();
//! assert!(shaped.is_err());
//! ```

use std::error::Error as StdError;

use crate::{Thrown, Try, TryError, TryResult};

/// Lifts a `Result<T, E>` whose error is a standard error.
pub trait TryResultExt<T> {
    /// Convert `Result<T, E>` into `Try<T>`, storing the error through
    /// [`Thrown::from_error`].
    fn into_try(self) -> Try<T>;
}

impl<T, E> TryResultExt<T> for Result<T, E>
where
    E: StdError + Send + Sync + 'static,
{
    fn into_try(self) -> Try<T> {
        match self {
            Ok(value) => Try::Success(value),
            Err(error) => Try::Failure(Thrown::from_error(error)),
        }
    }
}

/// Imposes [`TryError`] on results carrying a raw payload.
pub trait ThrownResultExt<T> {
    /// Convert `Result<T, Thrown>` into `TryResult<T>`.
    ///
    /// # Errors
    ///
    /// Returns the payload converted into a [`TryError`].
    fn into_try_error(self) -> TryResult<T>;
}

impl<T> ThrownResultExt<T> for Result<T, Thrown> {
    fn into_try_error(self) -> TryResult<T> {
        self.map_err(TryError::from)
    }
}
