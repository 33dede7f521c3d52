//! Behavioural step modules registered with `rstest-bdd`.

pub mod chain_steps;
pub mod flatten_steps;
