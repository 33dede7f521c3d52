//! Typed errors produced at the boundary of the crate.

mod conversions;
mod types;

pub use types::{TryError, TryResult};

#[cfg(test)]
mod tests;
