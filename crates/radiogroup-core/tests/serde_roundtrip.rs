//! Serialization shape of scalars and records.
//!
//!   cargo test -p radiogroup-core --features serde --test serde_roundtrip

#![cfg(feature = "serde")]

use radiogroup_core::{Record, Scalar};

#[test]
fn scalars_are_untagged() {
    assert_eq!(serde_json::to_string(&Scalar::from(1)).unwrap(), "1");
    assert_eq!(serde_json::to_string(&Scalar::from("a")).unwrap(), "\"a\"");
    assert_eq!(serde_json::to_string(&Scalar::from(true)).unwrap(), "true");
}

#[test]
fn record_is_a_plain_object() {
    let record = Record::new().with("id", 1).with("text", "A");
    let json = serde_json::to_string(&record).unwrap();
    assert_eq!(json, r#"{"id":1,"text":"A"}"#);

    let back: Record = serde_json::from_str(r#"{"id":2,"text":"B","ratio":0.5}"#).unwrap();
    assert_eq!(back.get("id"), Some(&Scalar::Int(2)));
    assert_eq!(back.get("ratio"), Some(&Scalar::Float(0.5)));
}
