//! Free functions that build and inspect [`Try`] values.
//!
//! [`apply`] is the entry point from code that may panic into the `Try`
//! world. [`success`] and [`failure`] build outcomes directly; [`success`]
//! also collapses outcomes nested inside each other.

use std::any::Any;
use std::error::Error as StdError;
use std::panic;

use crate::capture::capture;
use crate::{Thrown, Try, TryResult};

pub mod nested;
pub mod probe;

use nested::{Nested, There};

/// Runs `f` once, capturing its value or whatever it raised.
///
/// # Examples
///
/// ```
/// use microtry::apply;
///
/// assert_eq!(apply(|| 100).unwrap(), 100);
/// assert!(apply(|| -> u8 { panic!("Oops") }).is_error());
/// ```
pub fn apply<A, F>(f: F) -> Try<A>
where
    F: FnOnce() -> A,
{
    capture(f).into()
}

/// Runs a fallible `f` once; an `Err` becomes the failure payload.
///
/// The error is stored through [`Thrown::from_error`], so it stays
/// downcastable to `E` and converts into
/// [`TryError::Raised`](crate::TryError::Raised) with its message. Panics
/// raised by `f` are captured exactly as with [`apply`].
///
/// ```
/// use microtry::{TryError, apply_result};
///
/// let err = apply_result(|| "x".parse::<u8>()).into_result().err();
/// assert!(matches!(err, Some(TryError::Raised(_))));
/// ```
pub fn apply_result<A, E, F>(f: F) -> Try<A>
where
    E: StdError + Send + Sync + 'static,
    F: FnOnce() -> Result<A, E>,
{
    match capture(f) {
        Ok(Ok(value)) => Try::Success(value),
        Ok(Err(error)) => Try::Failure(Thrown::from_error(error)),
        Err(thrown) => Try::Failure(thrown),
    }
}

/// Runs `f` once and imposes [`TryError`](crate::TryError) on whatever it
/// raised.
///
/// # Errors
///
/// Returns the raised payload converted into a `TryError`.
pub fn result_of<A, F>(f: F) -> TryResult<A>
where
    F: FnOnce() -> A,
{
    apply(f).into_result()
}

/// Builds a success, flattening outcomes nested inside `value`.
///
/// A plain value is wrapped directly. A `Try<Try<..<A>>>` collapses to
/// `Try<A>`; a failure at any depth becomes the result. When `value` is
/// itself a `Try`, the leaf type must be known from context.
///
/// # Examples
///
/// ```
/// use microtry::{Try, failure, success};
///
/// let nested = Try::Success(Try::Success(Try::Success(99)));
/// let flat: Try<i32> = success(nested);
/// assert_eq!(flat.unwrap(), 99);
///
/// let hidden: Try<Try<i32>> = Try::Success(failure("fail"));
/// let flat: Try<i32> = success(hidden);
/// assert!(flat.is_error());
/// ```
pub fn success<A, I, V>(value: V) -> Try<A>
where
    V: Nested<A, I>,
{
    <V as Nested<A, I>>::unnest(value)
}

/// Builds a failure carrying `reason` verbatim.
///
/// A [`Thrown`] reason is reused rather than wrapped again. Nothing else is
/// inspected: a `Try` passed here is not unwrapped and becomes an opaque
/// payload. Use [`failure_of`] when the reason is itself an outcome.
pub fn failure<A, E>(reason: E) -> Try<A>
where
    E: Any + Send,
{
    Try::Failure(Thrown::new(reason))
}

/// Builds a failure from another outcome.
///
/// The reason is flattened first, exactly as [`success`] would flatten it:
/// the deepest failure keeps its payload, and the leaf value of an
/// all-success chain becomes the new payload. When `reason` nests further
/// outcomes, name the leaf type `L`.
///
/// ```
/// use microtry::{Try, failure, failure_of};
///
/// let shallow: Try<u8> = failure_of(Try::Success(12_u16));
/// assert_eq!(shallow.error().and_then(|e| e.downcast_ref::<u16>()), Some(&12));
///
/// let hidden = Try::Success(failure::<u8, _>("inner"));
/// let deep: Try<u8> = failure_of::<_, u8, _, _>(hidden);
/// assert_eq!(deep.error().and_then(|e| e.downcast_ref::<&str>()), Some(&"inner"));
/// ```
pub fn failure_of<A, L, I, R>(reason: Try<R>) -> Try<A>
where
    R: Nested<L, I>,
    L: Any + Send,
{
    <Try<R> as Nested<L, There<I>>>::unnest(reason).into_failure()
}

/// Extracts the value of `outcome`.
///
/// # Panics
///
/// Re-raises the original payload when `outcome` is a failure.
pub fn unwrap<A>(outcome: Try<A>) -> A {
    outcome.unwrap()
}

/// Returns `true` when `outcome` is a success.
#[must_use]
pub const fn is_ok<A>(outcome: &Try<A>) -> bool {
    outcome.is_ok()
}

/// Returns `true` when `outcome` is a failure.
#[must_use]
pub const fn is_error<A>(outcome: &Try<A>) -> bool {
    outcome.is_error()
}

/// Raises `error` as a payload that [`apply`] and the chaining methods
/// capture verbatim.
///
/// The panic hook is not invoked, so nothing is printed when the payload is
/// captured.
///
/// The payload is kept as the concrete `E` with no error view, so a
/// standard error raised here converts into
/// [`TryError::Panicked`](crate::TryError::Panicked) with an opaque message.
/// Raise errors through [`throw_error`] to keep them as errors.
///
/// # Panics
///
/// Always.
pub fn throw<E>(error: E) -> !
where
    E: Any + Send,
{
    panic::resume_unwind(Box::new(error))
}

/// Raises a standard error so that a capturing caller keeps it as an error.
///
/// Unlike [`throw`], the payload is wrapped by [`Thrown::from_error`] before
/// unwinding, so [`Thrown::as_error`] and
/// [`TryError::Raised`](crate::TryError::Raised) see it after capture. A
/// foreign `catch_unwind` observes a [`Thrown`].
///
/// ```
/// use microtry::{TryError, result_of, throw_error};
///
/// let err = result_of(|| -> u8 { throw_error(std::io::Error::other("disk gone")) }).err();
/// assert_eq!(err.map(|e| e.to_string()).as_deref(), Some("disk gone"));
/// assert!(matches!(
///     result_of(|| -> u8 { throw_error(std::io::Error::other("x")) }),
///     Err(TryError::Raised(_))
/// ));
/// ```
///
/// # Panics
///
/// Always.
pub fn throw_error<E>(error: E) -> !
where
    E: StdError + Send + Sync + 'static,
{
    panic::resume_unwind(Box::new(Thrown::from_error(error)))
}

/// Evaluates to `true` when the expression is a [`Try`], `false` otherwise.
///
/// The answer is decided from the static type of the expression, which is
/// borrowed rather than moved.
///
/// ```
/// use microtry::{apply, is_try};
///
/// let outcome = apply(|| 1);
/// assert!(is_try!(outcome));
/// assert!(!is_try!(5));
/// ```
#[macro_export]
macro_rules! is_try {
    ($value:expr $(,)?) => {{
        #[expect(unused_imports, reason = "only one probe trait applies per type")]
        use $crate::__probe::{OtherKind as _, TryKind as _};
        (&&$crate::__probe::Probe(&$value)).is_try()
    }};
}
