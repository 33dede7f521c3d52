//! Shared fixtures for the behavioural scenarios.

use rstest::fixture;
use rstest_bdd::Slot;
use rstest_bdd_macros::ScenarioState;
use test_helpers::outcome::Snapshot;

/// Scenario state carrying the outcome under test between steps.
#[derive(Debug, Default, ScenarioState)]
pub struct ChainContext {
    /// Snapshot of the most recent outcome in the chain.
    pub outcome: Slot<Snapshot<i64>>,
    /// Whether the last transformation callback ran.
    pub invoked: Slot<bool>,
}

/// Creates an empty chain context for each scenario.
#[fixture]
pub fn chain_context() -> ChainContext {
    ChainContext::default()
}
