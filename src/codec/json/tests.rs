use serde_json::json;

use crate::codec::{CodecError, Field, Value, decode_json, encode_json};

#[test]
fn converts_document_keeping_field_order() {
	let json = json!({"zeta": 1, "alpha": "a", "mid": [true, 2.5]});
	let value = Value::from_json(&json).expect("conversion succeeds");

	let expected = Value::Object(vec![
		Field::new("zeta", 1),
		Field::new("alpha", "a"),
		Field::new("mid", Value::array([Value::Bool(true), Value::Float(2.5)])),
	]);
	assert_eq!(value, expected);
}

#[test]
fn integer_array_matches_reference_bytes() {
	let bytes = encode_json(&json!([1, 2.5])).expect("encode succeeds");
	let mut expected = vec![0x01, 0x02, 0x00, 0x00, 0x00, 0x04, 0x01, 0x00, 0x00, 0x00, 0x07];
	expected.extend_from_slice(&2.5_f32.to_le_bytes());
	assert_eq!(bytes, expected);
}

#[test]
fn exponent_integers_in_source_text_encode_as_int() {
	let json: serde_json::Value = serde_json::from_str(r#"[1e5, -0, 1e-50]"#).expect("json parses");
	let value = Value::from_json(&json).expect("conversion succeeds");
	assert_eq!(value, Value::array([Value::Int(100_000), Value::Int(0), Value::Int(0)]));

	let bytes = encode_json(&json).expect("encode succeeds");
	assert_eq!(&bytes[5..10], &[0x04, 0xA0, 0x86, 0x01, 0x00]);
}

#[test]
fn null_is_rejected_with_location() {
	let err = Value::from_json(&json!({"a": [1, {"b/c": null}]})).expect_err("null fails");
	match err {
		CodecError::NullValue { path } => assert_eq!(path, "/a/1/b~1c"),
		other => panic!("unexpected error: {other}"),
	}

	let err = Value::from_json(&json!(null)).expect_err("root null fails");
	assert!(matches!(err, CodecError::NullValue { path } if path == "/"));
}

#[test]
fn json_round_trip_is_stable_for_decimal_friendly_documents() {
	let json = json!({
		"name": "doc",
		"count": 3,
		"ratio": 0.1,
		"big": 1.5e300,
		"flags": [true, false],
		"nested": {"empty": {}, "list": []}
	});
	let decoded = decode_json(&encode_json(&json).expect("encode succeeds")).expect("decode succeeds");
	assert_eq!(decoded, json);
}

#[test]
fn repeated_names_collapse_to_last_value_in_json() {
	let value = Value::Object(vec![Field::new("k", 1), Field::new("k", 2)]);
	assert_eq!(value.to_json().expect("conversion succeeds"), json!({"k": 2}));
}

#[test]
fn non_finite_decoded_floats_are_reported() {
	let err = Value::Array(vec![Value::Double(f64::NEG_INFINITY)]).to_json().expect_err("infinity fails");
	assert!(matches!(err, CodecError::NonFiniteNumber { .. }));
}
