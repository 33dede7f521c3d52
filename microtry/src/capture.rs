//! Conversion of unwinding into values.
//!
//! Every callback the crate runs on behalf of a caller goes through
//! [`capture`], so a raised payload is handled identically whether it came
//! from [`apply`](crate::apply), a chained callback or flattening.

use std::panic::{self, AssertUnwindSafe};

use crate::Thrown;

/// Runs `f` to completion, returning its value or the payload it raised.
///
/// The closure is consumed and never observed again after a panic, so the
/// unwind-safety assertion cannot expose broken invariants to the caller.
pub(crate) fn capture<T, F>(f: F) -> Result<T, Thrown>
where
    F: FnOnce() -> T,
{
    panic::catch_unwind(AssertUnwindSafe(f)).map_err(|payload| {
        let thrown = Thrown::from_payload(payload);
        tracing::debug!(error = %thrown, "captured raised payload as failure");
        thrown
    })
}
