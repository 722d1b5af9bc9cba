//! Bridge between `serde_json::Value` documents and the wire value model.

use serde_json::{Map, Value as JsonValue};

use crate::codec::number::{classify_number, double_to_json, float_to_json};
use crate::codec::value::{Field, Value};
use crate::codec::{CodecError, DecodeOptions, EncodeOptions, Result, decode_with, encode_with};

impl Value {
	/// Convert a JSON document, choosing numeric kinds by their text form.
	///
	/// JSON `null` has no wire representation and is rejected with its location.
	pub fn from_json(json: &JsonValue) -> Result<Self> {
		let mut path = String::new();
		from_json_impl(json, &mut path)
	}

	/// Convert back to a JSON document.
	///
	/// Repeated object names collapse to the last value, and non-finite floats are rejected.
	pub fn to_json(&self) -> Result<JsonValue> {
		Ok(match self {
			Self::Array(items) => JsonValue::Array(items.iter().map(Value::to_json).collect::<Result<_>>()?),
			Self::Object(fields) => {
				let mut out = Map::with_capacity(fields.len());
				for Field { name, value } in fields {
					out.insert(name.clone(), value.to_json()?);
				}
				JsonValue::Object(out)
			}
			Self::String(text) => JsonValue::String(text.clone()),
			Self::Int(number) => JsonValue::from(*number),
			Self::Double(number) => JsonValue::Number(double_to_json(*number)?),
			Self::Float(number) => JsonValue::Number(float_to_json(*number)?),
			Self::Bool(flag) => JsonValue::Bool(*flag),
		})
	}
}

fn from_json_impl(json: &JsonValue, path: &mut String) -> Result<Value> {
	Ok(match json {
		JsonValue::Null => return Err(CodecError::NullValue { path: display_path(path) }),
		JsonValue::Bool(flag) => Value::Bool(*flag),
		JsonValue::Number(number) => classify_number(number)?,
		JsonValue::String(text) => Value::String(text.clone()),
		JsonValue::Array(items) => {
			let mut out = Vec::with_capacity(items.len());
			for (idx, item) in items.iter().enumerate() {
				let mark = push_segment(path, &idx.to_string());
				out.push(from_json_impl(item, path)?);
				path.truncate(mark);
			}
			Value::Array(out)
		}
		JsonValue::Object(map) => {
			let mut out = Vec::with_capacity(map.len());
			for (name, item) in map {
				let mark = push_segment(path, name);
				out.push(Field {
					name: name.clone(),
					value: from_json_impl(item, path)?,
				});
				path.truncate(mark);
			}
			Value::Object(out)
		}
	})
}

/// Append a JSON-pointer segment, returning the length to truncate back to.
fn push_segment(path: &mut String, segment: &str) -> usize {
	let mark = path.len();
	path.push('/');
	for ch in segment.chars() {
		match ch {
			'~' => path.push_str("~0"),
			'/' => path.push_str("~1"),
			c => path.push(c),
		}
	}
	mark
}

fn display_path(path: &str) -> String {
	if path.is_empty() { "/".to_owned() } else { path.to_owned() }
}

/// Encode a JSON document with default options.
pub fn encode_json(json: &JsonValue) -> Result<Vec<u8>> {
	encode_json_with(json, &EncodeOptions::default())
}

/// Encode a JSON document.
pub fn encode_json_with(json: &JsonValue, opt: &EncodeOptions) -> Result<Vec<u8>> {
	encode_with(&Value::from_json(json)?, opt)
}

/// Decode bytes straight to a JSON document with default options.
pub fn decode_json(bytes: &[u8]) -> Result<JsonValue> {
	decode_json_with(bytes, &DecodeOptions::default())
}

/// Decode bytes straight to a JSON document.
pub fn decode_json_with(bytes: &[u8], opt: &DecodeOptions) -> Result<JsonValue> {
	decode_with(bytes, opt)?.to_json()
}

#[cfg(test)]
mod tests;
