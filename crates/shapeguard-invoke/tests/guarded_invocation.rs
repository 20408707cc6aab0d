//! Integration tests: guarded invocation over nested schemas, under both
//! error policies, checking the exact diagnostic lines.

use std::cell::RefCell;
use std::sync::Arc;

use serde_json::{json, Value};
use shapeguard_core::Schema;
use shapeguard_invoke::{
    invoke_guarded, ErrorPolicy, FailureKind, GuardError, Invocation, MemorySink,
};

const SUCCESS: &str = "Function executed successfully";

fn schemas() -> Vec<Schema> {
    [
        json!({
            "user": {
                "id": "number",
                "profile": {
                    "name": "string",
                    "details": {
                        "hobbies": ["string"],
                        "address": {
                            "street": "string",
                            "city": "string",
                            "coordinates": {"lat": "number", "lng": "number"}
                        }
                    }
                }
            }
        }),
        json!(["number"]),
        json!({
            "data": {
                "values": [{"timestamp": "number", "value": "number"}]
            }
        }),
    ]
    .iter()
    .map(|literal| Schema::from_json(literal).expect("schema literal should decode"))
    .collect()
}

fn args() -> Vec<Value> {
    vec![
        json!({
            "user": {
                "id": 1,
                "profile": {
                    "name": "John",
                    "details": {
                        "hobbies": ["reading", "gaming"],
                        "address": {
                            "street": "123 Main St",
                            "city": "Anytown",
                            "coordinates": {"lat": 40.7128, "lng": -74.006}
                        }
                    }
                }
            }
        }),
        json!([42, 43, 44]),
        json!({
            "data": {
                "values": [
                    {"timestamp": 1616161616, "value": 100},
                    {"timestamp": 1616161717, "value": 110}
                ]
            }
        }),
    ]
}

fn reporting() -> (Arc<MemorySink>, ErrorPolicy) {
    let sink = Arc::new(MemorySink::new());
    let policy = ErrorPolicy::report_to(sink.clone());
    (sink, policy)
}

fn failing(_args: Vec<Value>) -> Result<Value, String> {
    Err("Test error".to_string())
}

#[test]
fn test_valid_arguments_reach_operation_in_order() {
    let seen = RefCell::new(Vec::new());
    let (sink, policy) = reporting();

    let outcome = invoke_guarded(
        &schemas(),
        args(),
        |received| {
            seen.borrow_mut().push(received);
            Ok::<_, String>(SUCCESS)
        },
        &policy,
    )
    .unwrap();

    assert_eq!(outcome, Invocation::Completed(SUCCESS));
    assert_eq!(*seen.borrow(), vec![args()]);
    assert!(sink.lines().is_empty());
}

#[test]
fn test_arity_failure_reported() {
    let (sink, policy) = reporting();
    let outcome = invoke_guarded(
        &[Schema::structure([("id", Schema::number())])],
        vec![],
        failing,
        &policy,
    )
    .unwrap();
    assert_eq!(outcome, Invocation::Suppressed(FailureKind::ArityMismatch));
    assert_eq!(sink.lines(), vec!["Invalid number of arguments"]);
}

#[test]
fn test_arity_failure_propagated() {
    let err = invoke_guarded(
        &[Schema::structure([("id", Schema::number())])],
        vec![],
        failing,
        &ErrorPolicy::Propagate,
    )
    .unwrap_err();
    assert_eq!(err.to_string(), "Invalid number of arguments");
    assert_eq!(err.kind(), FailureKind::ArityMismatch);
}

#[test]
fn test_type_failure_reported() {
    let (sink, policy) = reporting();
    let outcome = invoke_guarded(
        &[Schema::structure([("id", Schema::number())])],
        vec![json!({"id": "not a number"})],
        failing,
        &policy,
    )
    .unwrap();
    assert_eq!(outcome.completed(), None);
    assert_eq!(
        sink.lines(),
        vec![
            "Argument at position index: 0, value: [object Object] does not match the expected type or structure."
        ]
    );
}

#[test]
fn test_type_failure_propagated_with_detail() {
    let err = invoke_guarded(
        &[Schema::structure([("id", Schema::number())])],
        vec![json!({"id": "1"})],
        failing,
        &ErrorPolicy::Propagate,
    )
    .unwrap_err();
    assert_eq!(
        err.to_string(),
        "Argument at position index: 0, value: [object Object] does not match the expected type or structure."
    );
    match err {
        GuardError::TypeMismatch {
            index,
            value,
            mismatch,
        } => {
            assert_eq!(index, 0);
            assert_eq!(value, json!({"id": "1"}));
            assert_eq!(mismatch.path, "/id");
            assert_eq!(mismatch.found, "string");
        }
        other => panic!("Expected TypeMismatch, got: {other}"),
    }
}

#[test]
fn test_only_first_failing_index_cited() {
    let mut bad = args();
    bad[1] = json!([42, "43"]);
    bad[2] = json!({"data": {"values": [{"timestamp": "now", "value": 1}]}});

    let err = invoke_guarded(&schemas(), bad, failing, &ErrorPolicy::Propagate).unwrap_err();
    assert!(matches!(err, GuardError::TypeMismatch { index: 1, .. }));
    assert_eq!(
        err.to_string(),
        "Argument at position index: 1, value: 42,43 does not match the expected type or structure."
    );
}

#[test]
fn test_execution_failure_reported() {
    let (sink, policy) = reporting();
    let outcome = invoke_guarded(&[Schema::number()], vec![json!(42)], failing, &policy).unwrap();
    assert_eq!(outcome, Invocation::Suppressed(FailureKind::ExecutionFailure));
    assert_eq!(sink.lines(), vec!["Test error"]);
}

#[test]
fn test_execution_failure_propagated_unchanged() {
    #[derive(Debug, PartialEq)]
    struct Custom {
        code: u16,
    }
    impl std::fmt::Display for Custom {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "custom failure {}", self.code)
        }
    }

    let err = invoke_guarded(
        &[Schema::number()],
        vec![json!(42)],
        |_| Err::<(), _>(Custom { code: 7 }),
        &ErrorPolicy::Propagate,
    )
    .unwrap_err();
    assert_eq!(err.to_string(), "custom failure 7");
    assert_eq!(err.into_execution(), Some(Custom { code: 7 }));
}

#[test]
fn test_raise_flag_mapping() {
    let outcome = invoke_guarded(
        &[Schema::number()],
        vec![json!(42)],
        |mut a| Ok::<_, String>(a.remove(0)),
        &ErrorPolicy::from_raise_flag(false),
    )
    .unwrap();
    assert_eq!(outcome.completed(), Some(json!(42)));

    let err = invoke_guarded(
        &[Schema::number()],
        vec![json!("42")],
        failing,
        &ErrorPolicy::from_raise_flag(true),
    );
    assert!(err.is_err());
}
