//! End-to-end chaining scenarios across the public API.

use microtry::{Try, apply, failure, is_try, throw};
use rstest::rstest;
use std::cell::Cell;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use test_helpers::panic_hook;

#[rstest]
#[case(0)]
#[case(-17)]
#[case(i64::MAX)]
fn apply_then_unwrap_is_identity(#[case] value: i64) {
    assert_eq!(apply(|| value).unwrap(), value);
}

#[test]
fn unwrap_reraises_the_raised_value() {
    #[derive(Debug)]
    struct Reason;

    let reason = Arc::new(Reason);
    let raised = Arc::clone(&reason);
    let outcome: Try<()> = apply(move || throw(raised));
    let payload = panic::catch_unwind(AssertUnwindSafe(|| outcome.unwrap())).err();
    let caught = payload.and_then(|p| p.downcast::<Arc<Reason>>().ok());
    assert!(caught.is_some_and(|c| Arc::ptr_eq(&c, &reason)));
}

#[test]
fn doubling_a_success() {
    assert_eq!(apply(|| 5).then(|x| x * 2).unwrap(), 10);
}

#[test]
fn failed_chain_recovers_with_catch() {
    let _quiet = panic_hook::silence();
    let failed = apply(|| -> i32 { panic!("Oops") }).then(|x| x * 2);
    assert!(failed.is_error());
    assert_eq!(failed.catch(|_| 42).unwrap(), 42);
}

#[test]
fn then_never_runs_after_failure() {
    let invoked = Cell::new(false);
    let outcome = apply(|| -> u8 { throw("x") }).then(|v| {
        invoked.set(true);
        v
    });
    assert!(!invoked.get());
    assert_eq!(
        outcome.error().and_then(|e| e.downcast_ref::<&str>()),
        Some(&"x")
    );
}

#[test]
fn catch_never_runs_after_success() {
    let invoked = Cell::new(false);
    let outcome = apply(|| 1).catch(|_| {
        invoked.set(true);
        0
    });
    assert!(!invoked.get());
    assert_eq!(outcome.value(), Some(&1));
}

#[rstest]
#[case(apply(|| 9))]
#[case(failure("gone"))]
fn finally_preserves_kind(#[case] outcome: Try<i32>) {
    let ran = Cell::new(0);
    let before = outcome.value().copied();
    let after = outcome.finally(|| ran.set(ran.get() + 1));
    assert_eq!(ran.get(), 1);
    assert_eq!(after.value().copied(), before);
}

#[test]
fn panicking_cleanup_is_ignored() {
    let _quiet = panic_hook::silence();
    let outcome = apply(|| 3).finally(|| panic!("cleanup failed"));
    assert_eq!(outcome.unwrap(), 3);
}

#[test]
fn then_composes_like_function_composition() {
    let f = || 2_u64;
    let g = |x: u64| x.pow(3);
    let h = |x: u64| x + 1;
    let chained = apply(f).then(g).then(h);
    let direct = apply(|| h(g(f())));
    assert_eq!(chained.result().ok(), direct.result().ok());
}

#[test]
fn chain_stops_at_first_failure() {
    let steps = Cell::new(0);
    let outcome = apply(|| 1)
        .then(|x| {
            steps.set(steps.get() + 1);
            x + 1
        })
        .then(|_| -> i32 { throw("midway") })
        .then(|x| {
            steps.set(steps.get() + 1);
            x + 1
        });
    assert_eq!(steps.get(), 1);
    assert_eq!(outcome.error().map(ToString::to_string).as_deref(), Some("midway"));
}

#[test]
fn is_try_rejects_plain_values() {
    assert!(is_try!(apply(|| 1)));
    assert!(!is_try!(5));
}
