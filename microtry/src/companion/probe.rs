//! Support for [`is_try!`](crate::is_try).
//!
//! Method resolution prefers the impl on `&Probe<Try<_>>` when the probed
//! expression is a `Try`, and otherwise auto-derefs to the blanket impl on
//! `Probe<_>`. The choice is made at compile time.

use crate::Try;

/// Borrowed view over the value being probed.
#[derive(Debug)]
pub struct Probe<'a, T: ?Sized>(pub &'a T);

/// Answers for `Try` values.
pub trait TryKind {
    /// Always `true`.
    fn is_try(&self) -> bool {
        true
    }
}

impl<A> TryKind for &Probe<'_, Try<A>> {}

/// Answers for every other type.
pub trait OtherKind {
    /// Always `false`.
    fn is_try(&self) -> bool {
        false
    }
}

impl<T: ?Sized> OtherKind for Probe<'_, T> {}
