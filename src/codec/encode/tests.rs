use crate::codec::{CodecError, EncodeOptions, Field, Value, encode, encode_to, encode_with};

#[test]
fn empty_object() {
	let bytes = encode(&Value::Object(Vec::new())).expect("encode succeeds");
	assert_eq!(bytes, vec![0x02, 0x00, 0x00, 0x00, 0x00]);
}

#[test]
fn single_char_string() {
	let bytes = encode(&Value::from("A")).expect("encode succeeds");
	assert_eq!(bytes, vec![0x03, 0x01, 0x41]);
}

#[test]
fn int_is_four_bytes_little_endian() {
	assert_eq!(encode(&Value::Int(42)).expect("encode succeeds"), vec![0x04, 0x2A, 0x00, 0x00, 0x00]);
	assert_eq!(encode(&Value::Int(-1)).expect("encode succeeds"), vec![0x04, 0xFF, 0xFF, 0xFF, 0xFF]);
}

#[test]
fn mixed_array() {
	let bytes = encode(&Value::array([Value::Int(1), Value::Float(2.5)])).expect("encode succeeds");

	let mut expected = vec![0x01, 0x02, 0x00, 0x00, 0x00, 0x04, 0x01, 0x00, 0x00, 0x00, 0x07];
	expected.extend_from_slice(&2.5_f32.to_le_bytes());
	assert_eq!(bytes, expected);
}

#[test]
fn bool_and_double_payloads() {
	assert_eq!(encode(&Value::Bool(true)).expect("encode succeeds"), vec![0x06, 0x01]);
	assert_eq!(encode(&Value::Bool(false)).expect("encode succeeds"), vec![0x06, 0x00]);

	let mut expected = vec![0x05];
	expected.extend_from_slice(&1.0e300_f64.to_le_bytes());
	assert_eq!(encode(&Value::Double(1.0e300)).expect("encode succeeds"), expected);
}

#[test]
fn field_names_carry_no_tag_byte() {
	let value = Value::Object(vec![Field::new("k", "v")]);
	let bytes = encode(&value).expect("encode succeeds");
	assert_eq!(bytes, vec![0x02, 0x01, 0x00, 0x00, 0x00, 0x01, b'k', 0x03, 0x01, b'v']);
}

#[test]
fn lengths_count_utf8_bytes_not_chars() {
	let bytes = encode(&Value::from("\u{e9}")).expect("encode succeeds");
	assert_eq!(bytes, vec![0x03, 0x02, 0xC3, 0xA9]);
}

#[test]
fn long_strings_use_multi_byte_varint() {
	let text = "x".repeat(130);
	let bytes = encode(&Value::from(text.as_str())).expect("encode succeeds");
	assert_eq!(&bytes[..3], &[0x03, 0x82, 0x01]);
	assert_eq!(bytes.len(), 3 + 130);
}

#[test]
fn encode_to_reports_bytes_written() {
	let mut sink = Vec::new();
	let written = encode_to(&mut sink, &Value::from("A"), &EncodeOptions::default()).expect("encode succeeds");
	assert_eq!(written, 3);
	assert_eq!(sink.len(), 3);
}

#[test]
fn depth_limit_is_enforced() {
	let mut value = Value::Int(0);
	for _ in 0..4 {
		value = Value::Array(vec![value]);
	}

	let opt = EncodeOptions { max_depth: 4 };
	encode_with(&value, &opt).expect("depth 4 fits");

	let value = Value::Array(vec![value]);
	let err = encode_with(&value, &opt).expect_err("depth 5 exceeds");
	assert!(matches!(err, CodecError::DepthExceeded { max_depth: 4 }));
}
