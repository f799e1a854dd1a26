//! Integration tests for failure normalization.

use std::any::Any;

use terse::{Error, normalize};

#[test]
fn absent_signal_stays_absent() {
    assert!(normalize(None).is_none());
}

#[test]
fn present_signal_becomes_error() {
    let payload: Box<dyn Any + Send> = Box::new("it broke".to_string());
    let err = normalize(Some(payload)).expect("signal present");
    assert_eq!(format!("{err}"), "it broke");
}

#[test]
fn structured_error_is_unchanged() {
    let source: Box<dyn std::error::Error + Send + Sync> = "disk full".to_string().into();
    let payload: Box<dyn Any + Send> = Box::new(source);
    let err = normalize(Some(payload)).expect("signal present");
    assert!(matches!(err, Error::Wrapped(_)));
    assert_eq!(format!("{err}"), "disk full");
}

#[test]
fn arbitrary_value_is_rendered() {
    let err = Error::message(1.5);
    assert_eq!(format!("{err}"), "1.5");
}

#[test]
fn wrap_preserves_source() {
    let io = std::io::Error::other("socket closed");
    let err = Error::wrap(io);
    assert_eq!(format!("{err}"), "socket closed");
    assert!(std::error::Error::source(&err).is_some());
}

#[test]
fn panic_payload_from_catch_unwind() {
    let outcome = std::panic::catch_unwind(|| {
        panic!("stage {} failed", 2);
    });
    let err = normalize(outcome.err()).expect("panic produced a payload");
    assert_eq!(format!("{err}"), "stage 2 failed");
}

#[test]
fn result_alias_propagates() {
    fn might_fail(fail: bool) -> terse::Result<i64> {
        if fail {
            return Err(Error::message("nope"));
        }
        Ok(7)
    }

    fn caller() -> terse::Result<i64> {
        let n = might_fail(false)?;
        Ok(n + 1)
    }

    assert_eq!(caller().unwrap(), 8);
    assert!(might_fail(true).is_err());
}
