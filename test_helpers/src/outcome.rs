//! Clonable snapshots of `Try` values.
//!
//! A `Try` owns an opaque payload and cannot be cloned, which makes it
//! awkward to share between behavioural steps. [`Snapshot`] records the
//! variant together with the value or the payload's message, and can
//! rebuild an equivalent `Try`.

use anyhow::{Result, anyhow};
use microtry::{Try, failure};

/// Observable state of a `Try`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Snapshot<T> {
    /// A success holding the value.
    Value(T),
    /// A failure; the payload rendered through its `Display` impl.
    Error(String),
}

impl<T> Snapshot<T> {
    /// Records `outcome`, consuming it.
    pub fn of(outcome: Try<T>) -> Self {
        match outcome {
            Try::Success(value) => Self::Value(value),
            Try::Failure(thrown) => Self::Error(thrown.to_string()),
        }
    }

    /// Rebuilds a `Try`; failures carry their message as a `String` payload.
    pub fn into_try(self) -> Try<T> {
        match self {
            Self::Value(value) => Try::Success(value),
            Self::Error(message) => failure(message),
        }
    }

    /// Returns the success value.
    ///
    /// # Errors
    ///
    /// Returns an error describing the failure message otherwise.
    pub fn value(&self) -> Result<&T> {
        match self {
            Self::Value(value) => Ok(value),
            Self::Error(message) => Err(anyhow!("expected success, found failure: {message}")),
        }
    }

    /// Returns the failure message.
    ///
    /// # Errors
    ///
    /// Returns an error when the snapshot is a success.
    pub fn error(&self) -> Result<&str> {
        match self {
            Self::Value(_) => Err(anyhow!("expected failure, found success")),
            Self::Error(message) => Ok(message),
        }
    }
}
