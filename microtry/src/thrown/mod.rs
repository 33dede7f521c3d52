//! The untyped payload carried by a failed [`Try`](crate::Try).
//!
//! A failure stores exactly what was raised: a panic message, a value passed
//! to [`throw`](crate::throw), or a reason handed to
//! [`failure`](crate::failure). Nothing is coerced at this layer; callers
//! that need a typed error convert at the boundary through
//! [`TryError`](crate::TryError).

use std::any::Any;
use std::borrow::Cow;
use std::error::Error as StdError;
use std::fmt;
use std::panic;

use crate::TryError;

type SharedError = dyn StdError + Send + Sync + 'static;

/// A raised payload, preserved verbatim for later inspection or re-raising.
pub struct Thrown {
    payload: Box<dyn Any + Send>,
    as_error: Option<ErrorView>,
}

/// Accessors recovering the `dyn Error` face of a payload whose concrete
/// type was known when it was raised.
#[derive(Clone, Copy)]
struct ErrorView {
    borrow: for<'a> fn(&'a (dyn Any + Send + 'static)) -> Option<&'a SharedError>,
    take: fn(Box<dyn Any + Send>) -> Result<Box<SharedError>, Box<dyn Any + Send>>,
}

impl ErrorView {
    fn of<E>() -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Self {
            borrow: borrow_error::<E>,
            take: take_error::<E>,
        }
    }
}

fn borrow_error<'a, E>(payload: &'a (dyn Any + Send + 'static)) -> Option<&'a SharedError>
where
    E: StdError + Send + Sync + 'static,
{
    payload.downcast_ref::<E>().map(|err| err as &SharedError)
}

fn take_error<E>(payload: Box<dyn Any + Send>) -> Result<Box<SharedError>, Box<dyn Any + Send>>
where
    E: StdError + Send + Sync + 'static,
{
    payload.downcast::<E>().map(|err| err as Box<SharedError>)
}

impl Thrown {
    /// Wraps an arbitrary value as a raised payload.
    ///
    /// Passing an existing [`Thrown`] returns it unchanged rather than
    /// nesting one payload inside another.
    ///
    /// # Examples
    ///
    /// ```
    /// use microtry::Thrown;
    ///
    /// let thrown = Thrown::new("boom");
    /// assert_eq!(thrown.downcast_ref::<&str>(), Some(&"boom"));
    /// ```
    #[must_use]
    pub fn new<E>(error: E) -> Self
    where
        E: Any + Send,
    {
        Self::from_payload(Box::new(error))
    }

    /// Wraps a standard error as a raised payload.
    ///
    /// The payload is still the concrete `E`, so [`Thrown::downcast_ref`]
    /// finds it, but the value is also reachable through
    /// [`Thrown::as_error`] and converts into
    /// [`TryError::Raised`](crate::TryError::Raised) with its source intact.
    ///
    /// ```
    /// use microtry::Thrown;
    ///
    /// let thrown = Thrown::from_error(std::io::Error::other("disk gone"));
    /// assert!(thrown.is::<std::io::Error>());
    /// assert_eq!(thrown.to_string(), "disk gone");
    /// ```
    #[must_use]
    pub fn from_error<E>(error: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Self {
            payload: Box::new(error),
            as_error: Some(ErrorView::of::<E>()),
        }
    }

    /// Adopts a payload produced by unwinding, such as the `Err` side of
    /// [`std::panic::catch_unwind`].
    #[must_use]
    pub fn from_payload(payload: Box<dyn Any + Send>) -> Self {
        match payload.downcast::<Self>() {
            Ok(thrown) => *thrown,
            Err(payload) => Self {
                payload,
                as_error: None,
            },
        }
    }

    /// Returns `true` when the payload is of type `E`.
    #[must_use]
    pub fn is<E: Any>(&self) -> bool {
        self.payload.is::<E>()
    }

    /// Borrows the payload as `E` if it has that type.
    #[must_use]
    pub fn downcast_ref<E: Any>(&self) -> Option<&E> {
        self.payload.downcast_ref::<E>()
    }

    /// Takes the payload out as `E`.
    ///
    /// # Errors
    ///
    /// Returns the untouched [`Thrown`] when the payload is not an `E`.
    pub fn downcast<E: Any>(self) -> Result<E, Self> {
        let Self { payload, as_error } = self;
        payload
            .downcast::<E>()
            .map(|boxed| *boxed)
            .map_err(|payload| Self { payload, as_error })
    }

    /// Borrows the payload as a standard error.
    ///
    /// Succeeds for payloads built by [`Thrown::from_error`], boxed
    /// `dyn Error + Send + Sync` values and [`TryError`] values.
    #[must_use]
    pub fn as_error(&self) -> Option<&(dyn StdError + Send + Sync + 'static)> {
        if let Some(view) = self.as_error {
            return (view.borrow)(&*self.payload);
        }
        if let Some(err) = self.downcast_ref::<Box<SharedError>>() {
            return Some(&**err);
        }
        self.downcast_ref::<TryError>().map(|err| err as &SharedError)
    }

    /// Takes the payload out as a boxed standard error.
    ///
    /// # Errors
    ///
    /// Returns the untouched [`Thrown`] when the payload was neither built by
    /// [`Thrown::from_error`] nor already a boxed standard error.
    pub fn into_error(self) -> Result<Box<dyn StdError + Send + Sync>, Self> {
        let Self { payload, as_error } = self;
        let payload = match as_error {
            Some(view) => match (view.take)(payload) {
                Ok(err) => return Ok(err),
                Err(payload) => payload,
            },
            None => payload,
        };
        payload
            .downcast::<Box<SharedError>>()
            .map(|boxed| *boxed)
            .map_err(|payload| Self { payload, as_error })
    }

    /// Renders a human-readable message when the payload carries one.
    ///
    /// Panic messages (`&str` and `String`) and anything [`Thrown::as_error`]
    /// recognises produce text; any other payload yields `None`.
    #[must_use]
    pub fn message(&self) -> Option<Cow<'_, str>> {
        if let Some(text) = self.downcast_ref::<&'static str>() {
            return Some(Cow::Borrowed(text));
        }
        if let Some(text) = self.downcast_ref::<String>() {
            return Some(Cow::Borrowed(text.as_str()));
        }
        self.as_error().map(|err| Cow::Owned(err.to_string()))
    }

    /// Releases the raw payload, forgetting any error view.
    #[must_use]
    pub fn into_payload(self) -> Box<dyn Any + Send> {
        self.payload
    }

    /// Re-raises the original payload on the current thread.
    ///
    /// The payload is resumed with [`std::panic::resume_unwind`], so the
    /// panic hook does not run again and the value observed by an outer
    /// `catch_unwind` is the one originally raised. A payload built by
    /// [`Thrown::from_error`] travels inside its `Thrown` so that a later
    /// capture still sees it as an error; a foreign `catch_unwind` then
    /// observes a `Thrown` and can downcast through it.
    ///
    /// # Panics
    ///
    /// Always; unwinding is the purpose of this method.
    pub fn raise(self) -> ! {
        if self.as_error.is_some() {
            panic::resume_unwind(Box::new(self))
        }
        panic::resume_unwind(self.payload)
    }
}

impl fmt::Display for Thrown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.message() {
            Some(text) => f.write_str(&text),
            None => f.write_str("opaque payload"),
        }
    }
}

impl fmt::Debug for Thrown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Thrown")
            .field(&self.message().unwrap_or(Cow::Borrowed("<opaque>")))
            .finish()
    }
}
