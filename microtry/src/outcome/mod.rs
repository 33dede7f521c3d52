//! The `Try` sum type and its chaining protocol.
//!
//! A [`Try`] is built once and consumed by each chaining step, which returns
//! a fresh value. [`Try::then`] and [`Try::catch`] run their callback under
//! capture, so a panic inside a callback becomes a [`Try::Failure`] instead of
//! escaping. Only [`Try::unwrap`] raises.
//!
//! ```
//! use microtry::{apply, throw};
//!
//! let doubled = apply(|| 5).then(|x| x * 2);
//! assert_eq!(doubled.unwrap(), 10);
//!
//! let recovered = apply(|| -> i32 { throw("Oops") })
//!     .then(|x| x * 2)
//!     .catch(|_| 42);
//! assert_eq!(recovered.unwrap(), 42);
//! ```

use std::any::Any;

use crate::capture::capture;
use crate::config::FinallyPolicy;
use crate::{Thrown, TryResult};

/// Outcome of a synchronous computation: a value or the payload it raised.
#[derive(Debug)]
#[must_use = "a Try may hold a failure that should be inspected"]
pub enum Try<A> {
    /// The computation produced a value.
    Success(A),
    /// The computation raised; the payload is kept untouched.
    Failure(Thrown),
}

impl<A> Try<A> {
    /// Returns `true` for [`Try::Success`].
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` for [`Try::Failure`].
    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// Borrows the success value, if any.
    #[must_use]
    pub const fn value(&self) -> Option<&A> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Borrows the raised payload, if any.
    #[must_use]
    pub const fn error(&self) -> Option<&Thrown> {
        match self {
            Self::Success(_) => None,
            Self::Failure(thrown) => Some(thrown),
        }
    }

    /// Transforms a success value.
    ///
    /// The callback runs only for [`Try::Success`]; a failure passes through
    /// re-typed and the callback is dropped unused. A panic inside the
    /// callback is captured as a new failure.
    pub fn then<B, F>(self, on_success: F) -> Try<B>
    where
        F: FnOnce(A) -> B,
    {
        match self {
            Self::Success(value) => capture(move || on_success(value)).into(),
            Self::Failure(thrown) => Try::Failure(thrown),
        }
    }

    /// Chains a computation that itself yields a [`Try`].
    ///
    /// The returned `Try` is passed on as-is rather than nested.
    pub fn then_try<B, F>(self, on_success: F) -> Try<B>
    where
        F: FnOnce(A) -> Try<B>,
    {
        match self {
            Self::Success(value) => Try::from(capture(move || on_success(value))).flatten(),
            Self::Failure(thrown) => Try::Failure(thrown),
        }
    }

    /// Recovers from a failure.
    ///
    /// The callback receives the raised payload and runs only for
    /// [`Try::Failure`]; a success is returned untouched.
    pub fn catch<F>(self, on_failure: F) -> Self
    where
        F: FnOnce(Thrown) -> A,
    {
        match self {
            Self::Success(value) => Self::Success(value),
            Self::Failure(thrown) => capture(move || on_failure(thrown)).into(),
        }
    }

    /// Recovers from a failure with a computation that itself yields a
    /// [`Try`].
    pub fn catch_try<F>(self, on_failure: F) -> Self
    where
        F: FnOnce(Thrown) -> Self,
    {
        match self {
            Self::Success(value) => Self::Success(value),
            Self::Failure(thrown) => Try::from(capture(move || on_failure(thrown))).flatten(),
        }
    }

    /// Runs a side effect regardless of the outcome.
    ///
    /// The outcome is returned unchanged. A panic raised by `on_finally` is
    /// logged and discarded; see [`Try::finally_with`] to turn it into a
    /// failure instead.
    pub fn finally<F>(self, on_finally: F) -> Self
    where
        F: FnOnce(),
    {
        self.finally_with(FinallyPolicy::Preserve, on_finally)
    }

    /// Runs a side effect, resolving a panic inside it according to
    /// `policy`.
    pub fn finally_with<F>(self, policy: FinallyPolicy, on_finally: F) -> Self
    where
        F: FnOnce(),
    {
        let Err(secondary) = capture(on_finally) else {
            return self;
        };
        match policy {
            FinallyPolicy::Preserve => {
                tracing::warn!(
                    error = %secondary,
                    outcome_ok = self.is_ok(),
                    "finally callback raised; keeping original outcome"
                );
                self
            }
            FinallyPolicy::Fail => Self::Failure(secondary),
        }
    }

    /// Extracts the success value.
    ///
    /// # Panics
    ///
    /// Re-raises the original payload of a [`Try::Failure`] through
    /// [`Thrown::raise`]; the payload is not wrapped.
    pub fn unwrap(self) -> A {
        match self {
            Self::Success(value) => value,
            Self::Failure(thrown) => thrown.raise(),
        }
    }

    /// Projects the outcome onto a plain [`Result`].
    ///
    /// # Errors
    ///
    /// Returns the raised payload for [`Try::Failure`].
    pub fn result(self) -> Result<A, Thrown> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(thrown) => Err(thrown),
        }
    }

    /// Projects the outcome onto a [`TryResult`], imposing an error shape on
    /// the payload.
    ///
    /// # Errors
    ///
    /// Returns the payload converted into a [`TryError`](crate::TryError).
    pub fn into_result(self) -> TryResult<A> {
        self.result().map_err(Into::into)
    }

    /// Reinterprets the whole outcome as a failure reason.
    ///
    /// A success value becomes the payload of the new failure; an existing
    /// failure keeps its payload.
    pub fn into_failure<B>(self) -> Try<B>
    where
        A: Any + Send,
    {
        match self {
            Self::Success(value) => Try::Failure(Thrown::new(value)),
            Self::Failure(thrown) => Try::Failure(thrown),
        }
    }
}

impl<A> Try<Try<A>> {
    /// Removes one level of nesting.
    ///
    /// An outer failure wins; otherwise the inner outcome is returned.
    pub fn flatten(self) -> Try<A> {
        match self {
            Self::Success(inner) => inner,
            Self::Failure(thrown) => Try::Failure(thrown),
        }
    }
}

impl<A, E> From<Result<A, E>> for Try<A>
where
    E: Any + Send,
{
    /// Lifts a plain result; the error becomes the failure payload.
    fn from(result: Result<A, E>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::Failure(Thrown::new(error)),
        }
    }
}

impl<A> From<Try<A>> for Result<A, Thrown> {
    fn from(outcome: Try<A>) -> Self {
        outcome.result()
    }
}
