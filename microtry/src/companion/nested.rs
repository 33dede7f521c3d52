//! Type-level flattening of statically nested outcomes.
//!
//! [`Nested`] is implemented once for every type (the leaf, at index
//! [`Here`]) and once for `Try<T>` (one level deeper, at index
//! [`There`]). Because the two impls differ in their index parameter they
//! never overlap, and the compiler picks the only index that reaches the
//! requested leaf type.

use std::marker::PhantomData;

use crate::Try;

/// Index of a value that is already the leaf.
#[derive(Debug)]
pub enum Here {}

/// Index of a `Try` wrapping a value found at index `I`.
#[derive(Debug)]
pub struct There<I>(PhantomData<I>);

/// Values that collapse into a single `Try<A>`.
pub trait Nested<A, I> {
    /// Collapses `self`, stopping at the first failure encountered from the
    /// outside in.
    fn unnest(self) -> Try<A>;
}

impl<A> Nested<A, Here> for A {
    fn unnest(self) -> Try<A> {
        Try::Success(self)
    }
}

impl<T, A, I> Nested<A, There<I>> for Try<T>
where
    T: Nested<A, I>,
{
    fn unnest(self) -> Try<A> {
        match self {
            Self::Success(inner) => <T as Nested<A, I>>::unnest(inner),
            Self::Failure(thrown) => Try::Failure(thrown),
        }
    }
}
