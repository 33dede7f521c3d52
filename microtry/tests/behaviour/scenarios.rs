//! Binds the behavioural feature files to the step registry.

use crate::fixtures::{ChainContext, chain_context};
use rstest_bdd_macros::scenarios;

scenarios!(
    "tests/features/chaining.feature",
    fixtures = [chain_context: ChainContext]
);
scenarios!(
    "tests/features/flattening.feature",
    fixtures = [chain_context: ChainContext]
);
