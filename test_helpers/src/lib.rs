//! Test helpers shared across crates in the workspace.
//!
//! - [`env`] serialises environment mutation for settings tests.
//! - [`panic_hook`] keeps expected panics out of test output.
//! - [`outcome`] offers a clonable view of `Try` values for step state.

pub mod env;
pub mod outcome;
pub mod panic_hook;
