//! Runtime settings layered from defaults and the process environment.
//!
//! Settings are gathered with [`figment`]: serialized defaults first, then
//! any `MICROTRY_`-prefixed environment variables. Only the behaviour of
//! [`Try::finally`](crate::Try::finally) is configurable today.
//!
//! ```
//! use microtry::{FinallyPolicy, Settings};
//!
//! let settings = Settings::default();
//! assert_eq!(settings.finally, FinallyPolicy::Preserve);
//! ```

use figment::Figment;
use figment::providers::{Env, Serialized};
use serde::{Deserialize, Serialize};

use crate::{Try, TryResult};

/// Prefix applied to environment variables read by [`Settings::load`].
pub const ENV_PREFIX: &str = "MICROTRY_";

/// How a panic raised inside a `finally` callback is resolved.
///
/// Serialized in lowercase; capitalised and upper-case spellings are
/// accepted when reading.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FinallyPolicy {
    /// Discard the secondary panic and keep the original outcome.
    #[default]
    #[serde(alias = "Preserve", alias = "PRESERVE")]
    Preserve,
    /// Replace the outcome with a failure carrying the secondary panic.
    #[serde(alias = "Fail", alias = "FAIL")]
    Fail,
}

/// Crate-wide behaviour switches.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Policy used by [`Settings::finally`].
    pub finally: FinallyPolicy,
}

impl Settings {
    /// Builds the provider stack: defaults overlaid with `MICROTRY_*`
    /// environment variables.
    #[must_use]
    pub fn figment() -> Figment {
        Figment::from(Serialized::defaults(Self::default())).merge(Env::prefixed(ENV_PREFIX))
    }

    /// Extracts settings from an arbitrary provider stack.
    ///
    /// # Errors
    ///
    /// Returns [`TryError::Settings`](crate::TryError::Settings) when a
    /// provider supplies a value that does not deserialize.
    pub fn from_figment(figment: &Figment) -> TryResult<Self> {
        let settings: Self = figment.extract()?;
        tracing::debug!(finally = ?settings.finally, "loaded microtry settings");
        Ok(settings)
    }

    /// Loads settings from defaults and the environment.
    ///
    /// # Errors
    ///
    /// Returns [`TryError::Settings`](crate::TryError::Settings) when an
    /// environment variable holds an invalid value.
    pub fn load() -> TryResult<Self> {
        Self::from_figment(&Self::figment())
    }

    /// Runs [`Try::finally_with`] using the configured policy.
    pub fn finally<A, F>(&self, outcome: Try<A>, on_finally: F) -> Try<A>
    where
        F: FnOnce(),
    {
        outcome.finally_with(self.finally, on_finally)
    }
}
