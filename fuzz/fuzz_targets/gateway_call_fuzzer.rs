//! Fuzz target for the host-facing call surface
//!
//! Harden argument validation against arbitrary host values (HIGH priority)
//!
//! # Strategy
//!
//! - Any operation, by host name, including `_utf8` variants and unknown names
//! - Any number of arguments of any value type
//!
//! # Invariants
//!
//! - Wrong arity or argument type fails with `ArgumentError`, never a domain
//!   error
//! - Every failure carries exactly one kind and a non-empty message
//! - NEVER panic

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use naclgate_core::{ErrorKind, Gateway, Operation, Value};

#[derive(Debug, Clone, Arbitrary)]
enum FuzzValue {
    Text(String),
    Bytes(Vec<u8>),
    Integer(i64),
    Float(f64),
    Bool(bool),
    Null,
}

impl From<FuzzValue> for Value {
    fn from(value: FuzzValue) -> Self {
        match value {
            FuzzValue::Text(s) => Value::Text(s),
            FuzzValue::Bytes(b) => Value::Bytes(b),
            FuzzValue::Integer(n) => Value::Integer(n),
            FuzzValue::Float(x) => Value::Float(x),
            FuzzValue::Bool(b) => Value::Bool(b),
            FuzzValue::Null => Value::Null,
        }
    }
}

#[derive(Debug, Clone, Arbitrary)]
struct FuzzInput {
    operation: u8,
    text_variant: bool,
    unknown_name: Option<String>,
    args: Vec<FuzzValue>,
}

fuzz_target!(|input: FuzzInput| {
    let op = Operation::ALL[usize::from(input.operation) % Operation::ALL.len()];
    let name = match input.unknown_name {
        Some(name) => name,
        None if input.text_variant => format!("{}_utf8", op.name()),
        None => op.name().to_owned(),
    };
    let args: Vec<Value> = input.args.into_iter().take(6).map(Value::from).collect();

    let Err(err) = Gateway::new().call_named(&name, &args) else {
        return;
    };
    assert!(!err.message().is_empty());

    let shape_is_wrong = match Operation::resolve(&name) {
        Some((resolved, _)) => args.len() != resolved.params().len(),
        None => true,
    };
    if shape_is_wrong {
        assert_eq!(err.kind(), ErrorKind::Argument);
    }
});
