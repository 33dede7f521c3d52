//! Steps covering nested outcomes.

use crate::fixtures::ChainContext;
use anyhow::{Result, ensure};
use microtry::{Try, failure, success};
use rstest_bdd_macros::{given, when};
use test_helpers::outcome::Snapshot;

#[given("a success nested {depth} levels deep around {value}")]
fn nested_success(chain_context: &ChainContext, depth: u8, value: i64) -> Result<()> {
    ensure!(
        chain_context.outcome.is_empty(),
        "outcome already initialised"
    );
    let flat: Try<i64> = match depth {
        1 => success(Try::Success(value)),
        2 => success(Try::Success(Try::Success(value))),
        3 => success(Try::Success(Try::Success(Try::Success(value)))),
        other => anyhow::bail!("unsupported nesting depth {other}"),
    };
    chain_context.outcome.set(Snapshot::of(flat));
    Ok(())
}

#[when("a failure with message {message} is nested inside a success")]
fn failure_nested_in_success(chain_context: &ChainContext, message: String) -> Result<()> {
    let nested: Try<Try<i64>> = Try::Success(failure(message));
    let flat: Try<i64> = success(nested);
    chain_context.outcome.set(Snapshot::of(flat));
    Ok(())
}
