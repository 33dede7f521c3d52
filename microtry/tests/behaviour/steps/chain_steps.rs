//! Steps building and transforming outcomes.

use crate::fixtures::ChainContext;
use anyhow::{Result, anyhow, ensure};
use microtry::{apply, throw};
use rstest_bdd_macros::{given, then, when};
use std::cell::Cell;
use test_helpers::outcome::Snapshot;

fn take_snapshot(chain_context: &ChainContext) -> Result<Snapshot<i64>> {
    chain_context
        .outcome
        .take()
        .ok_or_else(|| anyhow!("no outcome has been produced yet"))
}

#[given("a computation returning {value}")]
fn computation_returning(chain_context: &ChainContext, value: i64) -> Result<()> {
    ensure!(
        chain_context.outcome.is_empty(),
        "outcome already initialised"
    );
    chain_context.outcome.set(Snapshot::of(apply(|| value)));
    Ok(())
}

#[given("a computation raising {message}")]
fn computation_raising(chain_context: &ChainContext, message: String) -> Result<()> {
    ensure!(
        chain_context.outcome.is_empty(),
        "outcome already initialised"
    );
    let outcome = apply(|| -> i64 { throw(message) });
    chain_context.outcome.set(Snapshot::of(outcome));
    Ok(())
}

#[when("the value is doubled")]
fn value_doubled(chain_context: &ChainContext) -> Result<()> {
    let invoked = Cell::new(false);
    let outcome = take_snapshot(chain_context)?.into_try().then(|x| {
        invoked.set(true);
        x * 2
    });
    chain_context.invoked.set(invoked.get());
    chain_context.outcome.set(Snapshot::of(outcome));
    Ok(())
}

#[when("the failure is recovered with {value}")]
fn failure_recovered(chain_context: &ChainContext, value: i64) -> Result<()> {
    let outcome = take_snapshot(chain_context)?.into_try().catch(|_| value);
    chain_context.outcome.set(Snapshot::of(outcome));
    Ok(())
}

#[when("a cleanup step raises")]
fn cleanup_raises(chain_context: &ChainContext) -> Result<()> {
    let outcome = take_snapshot(chain_context)?
        .into_try()
        .finally(|| throw("cleanup"));
    chain_context.outcome.set(Snapshot::of(outcome));
    Ok(())
}

#[then("unwrapping yields {expected}")]
fn unwrapping_yields(chain_context: &ChainContext, expected: i64) -> Result<()> {
    let snapshot = take_snapshot(chain_context)?;
    let value = *snapshot.value()?;
    ensure!(value == expected, "expected {expected}, found {value}");
    chain_context.outcome.set(snapshot);
    Ok(())
}

#[then("the outcome is a failure with message {message}")]
fn failure_with_message(chain_context: &ChainContext, message: String) -> Result<()> {
    let snapshot = take_snapshot(chain_context)?;
    let found = snapshot.error()?;
    ensure!(found == message, "expected {message:?}, found {found:?}");
    chain_context.outcome.set(snapshot);
    Ok(())
}

#[then("the callback was invoked")]
fn callback_invoked(chain_context: &ChainContext) -> Result<()> {
    let invoked = chain_context
        .invoked
        .take()
        .ok_or_else(|| anyhow!("no transformation has run"))?;
    ensure!(invoked, "expected the callback to run");
    Ok(())
}

#[then("the callback was not invoked")]
fn callback_not_invoked(chain_context: &ChainContext) -> Result<()> {
    let invoked = chain_context
        .invoked
        .take()
        .ok_or_else(|| anyhow!("no transformation has run"))?;
    ensure!(!invoked, "expected the callback to be skipped");
    Ok(())
}
