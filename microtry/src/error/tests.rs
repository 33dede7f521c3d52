//! Unit tests for boundary error coercion.

use rstest::rstest;

use super::TryError;
use crate::Thrown;

#[rstest]
#[case(Thrown::new("plain text"), "computation raised: plain text")]
#[case(Thrown::new(String::from("formatted 7")), "computation raised: formatted 7")]
#[case(Thrown::new(42_u64), "computation raised: opaque payload")]
fn non_error_payloads_become_panicked(#[case] thrown: Thrown, #[case] expected: &str) {
    let err = TryError::from(thrown);
    assert!(matches!(err, TryError::Panicked { .. }), "got {err:?}");
    assert_eq!(err.to_string(), expected);
}

#[test]
fn boxed_errors_stay_transparent() {
    let source: Box<dyn std::error::Error + Send + Sync> = "socket closed".into();
    let err = TryError::from(Thrown::new(source));
    assert!(matches!(err, TryError::Raised(_)), "got {err:?}");
    assert_eq!(err.to_string(), "socket closed");
}

#[test]
fn concrete_std_errors_keep_identity_and_message() {
    let Err(parse) = "x".parse::<u8>() else {
        panic!("parsing `x` should fail");
    };
    let err = TryError::from(Thrown::from_error(parse.clone()));
    match err {
        TryError::Raised(source) => {
            assert_eq!(source.downcast_ref::<std::num::ParseIntError>(), Some(&parse));
            assert_eq!(source.to_string(), "invalid digit found in string");
        }
        other => panic!("expected Raised, got {other:?}"),
    }
}

#[test]
fn typed_errors_are_not_rewrapped() {
    let err = TryError::from(Thrown::new(TryError::panicked("inner")));
    match err {
        TryError::Panicked { message } => assert_eq!(message, "inner"),
        other => panic!("expected Panicked, got {other:?}"),
    }
}

#[test]
fn figment_errors_map_to_settings() {
    let err = TryError::from(figment::Error::from("bad key"));
    assert!(matches!(err, TryError::Settings(_)), "got {err:?}");
    assert!(err.to_string().starts_with("failed to load settings"));
}
