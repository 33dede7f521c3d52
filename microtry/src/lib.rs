//! Synchronous, eagerly evaluated `Try` outcomes.
//!
//! A [`Try`] is either a [`Try::Success`] holding a value or a
//! [`Try::Failure`] holding whatever a computation raised. Outcomes chain
//! with [`Try::then`], [`Try::catch`] and [`Try::finally`] in the style of
//! deferred computations, but every step runs to completion immediately.
//!
//! Raising means unwinding: a callback fails by panicking, or by calling
//! [`throw`] with an arbitrary payload. Capture relies on
//! [`std::panic::catch_unwind`] and therefore on the `unwind` panic
//! strategy.
//!
//! ```
//! use microtry::{Try, apply, is_try, success};
//!
//! let outcome = apply(|| 5).then(|x| x * 2);
//! assert!(is_try!(outcome));
//! assert_eq!(outcome.unwrap(), 10);
//!
//! let flat: Try<&str> = success(Try::Success(Try::Success("pass")));
//! assert_eq!(flat.unwrap(), "pass");
//! ```

mod capture;
mod companion;
mod config;
mod error;
mod outcome;
mod result_ext;
mod thrown;

pub use companion::nested::{Here, Nested, There};
pub use companion::{
    apply, apply_result, failure, failure_of, is_error, is_ok, result_of, success, throw,
    throw_error, unwrap,
};
pub use config::{ENV_PREFIX, FinallyPolicy, Settings};
pub use error::{TryError, TryResult};
pub use outcome::Try;
pub use result_ext::{ThrownResultExt, TryResultExt};
pub use thrown::Thrown;

#[doc(hidden)]
pub use companion::probe as __probe;
