//! Numeric kind selection for numbers arriving from textual JSON.
//!
//! The wire format has three numeric tags but JSON has one number type, so the kind is inferred
//! from the number's text exactly as it appeared in the source document (`serde_json` is built
//! with `arbitrary_precision`, so `Number` keeps that text):
//!
//! - text with a decimal separator (`.` or `,`) that parses as a finite `f32` becomes `Float`;
//! - text with a decimal separator that overflows `f32` becomes `Double`;
//! - anything else becomes `Int`, keeping only the low 32 bits of the exact integer part, so
//!   `1e5` is `100000`, `-0` is `0`, and `1e-50` is `0`.
//!
//! This is lossy on purpose and must stay byte-for-byte compatible with existing files:
//! `0.1` is stored as the nearest `f32`, and `4294967297` is stored as `1`. Callers that need
//! exact numerics should build `Value::Double`/`Value::Int` directly instead of going through
//! JSON.

use serde_json::Number;

use crate::codec::{CodecError, Result, Value};

/// Pick the wire kind and payload for a JSON number.
pub fn classify_number(number: &Number) -> Result<Value> {
	let text = number.to_string();

	if has_decimal_separator(&text) {
		return match text.parse::<f32>() {
			Ok(narrow) if narrow.is_finite() => Ok(Value::Float(narrow)),
			_ => parse_f64(&text).map(Value::Double),
		};
	}

	low_i32_bits(&text).map(Value::Int)
}

/// Convert a decoded `f32` to the JSON number with the same shortest decimal text.
pub fn float_to_json(value: f32) -> Result<Number> {
	if !value.is_finite() {
		return Err(CodecError::NonFiniteNumber { value: f64::from(value) });
	}

	let widened = parse_f64(&value.to_string())?;
	double_to_json(widened)
}

/// Convert a decoded `f64` to a JSON number.
pub fn double_to_json(value: f64) -> Result<Number> {
	Number::from_f64(value).ok_or(CodecError::NonFiniteNumber { value })
}

fn has_decimal_separator(text: &str) -> bool {
	text.contains(['.', ','])
}

fn parse_f64(text: &str) -> Result<f64> {
	text.parse::<f64>().map_err(|_| CodecError::InvalidNumber { text: text.to_owned() })
}

/// Two's-complement low 32 bits of the integer part of decimal text with no fraction digits,
/// such as `-12`, `1e5`, or `7E-3`.
fn low_i32_bits(text: &str) -> Result<i32> {
	let invalid = || CodecError::InvalidNumber { text: text.to_owned() };

	let (negative, body) = match text.strip_prefix('-') {
		Some(rest) => (true, rest),
		None => (false, text.strip_prefix('+').unwrap_or(text)),
	};
	let (digits, exponent) = match body.find(['e', 'E']) {
		Some(split) => (&body[..split], parse_exponent(&body[split + 1..]).ok_or_else(invalid)?),
		None => (body, 0),
	};
	if digits.is_empty() || !digits.bytes().all(|byte| byte.is_ascii_digit()) {
		return Err(invalid());
	}

	// a negative exponent truncates toward zero by dropping trailing digits
	let kept = match usize::try_from(exponent.unsigned_abs()) {
		Ok(drop) if exponent < 0 => &digits[..digits.len().saturating_sub(drop)],
		Err(_) if exponent < 0 => "",
		_ => digits,
	};
	let mut low = kept.bytes().fold(0_u32, |acc, byte| acc.wrapping_mul(10).wrapping_add(u32::from(byte - b'0')));

	// 10^k is a multiple of 2^32 once k reaches 32
	if exponent > 0 {
		low = match u32::try_from(exponent) {
			Ok(power) if power < 32 => low.wrapping_mul(10_u32.wrapping_pow(power)),
			_ => 0,
		};
	}

	let low = if negative { low.wrapping_neg() } else { low };
	Ok(low as i32)
}

/// Exponent digits with an optional sign, saturating far outside any meaningful range.
fn parse_exponent(text: &str) -> Option<i64> {
	let (negative, digits) = match text.strip_prefix('-') {
		Some(rest) => (true, rest),
		None => (false, text.strip_prefix('+').unwrap_or(text)),
	};
	if digits.is_empty() || !digits.bytes().all(|byte| byte.is_ascii_digit()) {
		return None;
	}

	let magnitude = digits.bytes().fold(0_i64, |acc, byte| acc.saturating_mul(10).saturating_add(i64::from(byte - b'0')));
	Some(if negative { -magnitude } else { magnitude })
}
