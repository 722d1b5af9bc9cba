use std::io::Write;

use crate::codec::bytes::ByteWriter;
use crate::codec::value::{Field, Value};
use crate::codec::varint::write_varint;
use crate::codec::{CodecError, Result};

/// Default container nesting ceiling shared by encoder and decoder.
pub const DEFAULT_MAX_DEPTH: u32 = 512;

/// Runtime limits for encoding.
#[derive(Debug, Clone)]
pub struct EncodeOptions {
	/// Maximum container nesting depth; deeper trees fail instead of recursing further.
	pub max_depth: u32,
}

impl Default for EncodeOptions {
	fn default() -> Self {
		Self { max_depth: DEFAULT_MAX_DEPTH }
	}
}

/// Encode `value` into a fresh buffer with default options.
pub fn encode(value: &Value) -> Result<Vec<u8>> {
	encode_with(value, &EncodeOptions::default())
}

/// Encode `value` into a fresh buffer.
pub fn encode_with(value: &Value, opt: &EncodeOptions) -> Result<Vec<u8>> {
	let mut out = Vec::new();
	encode_to(&mut out, value, opt)?;
	Ok(out)
}

/// Encode `value` into `writer`, returning the number of bytes written.
///
/// The writer is not flushed; callers owning a buffered sink flush it themselves.
pub fn encode_to<W: Write>(writer: W, value: &Value, opt: &EncodeOptions) -> Result<u64> {
	let mut writer = ByteWriter::new(writer);
	encode_impl(&mut writer, value, opt, 0)?;
	Ok(writer.pos())
}

fn encode_impl<W: Write>(writer: &mut ByteWriter<W>, value: &Value, opt: &EncodeOptions, depth: u32) -> Result<()> {
	writer.write_u8(value.tag().as_byte())?;

	match value {
		Value::Array(items) => {
			enter_container(depth, opt.max_depth)?;
			write_count(writer, items.len())?;
			for item in items {
				encode_impl(writer, item, opt, depth + 1)?;
			}
			Ok(())
		}
		Value::Object(fields) => {
			enter_container(depth, opt.max_depth)?;
			write_count(writer, fields.len())?;
			for Field { name, value } in fields {
				// Field names are untagged: varint length + UTF-8 only. Existing files depend on
				// this asymmetry with `Value::String`, which carries a tag byte first.
				write_str(writer, name)?;
				encode_impl(writer, value, opt, depth + 1)?;
			}
			Ok(())
		}
		Value::String(text) => write_str(writer, text),
		Value::Int(number) => writer.write_i32_le(*number),
		Value::Double(number) => writer.write_f64_le(*number),
		Value::Float(number) => writer.write_f32_le(*number),
		Value::Bool(flag) => writer.write_u8(u8::from(*flag)),
	}
}

/// Fail once `depth` enclosing containers reach the ceiling.
pub(crate) fn enter_container(depth: u32, max_depth: u32) -> Result<()> {
	if depth >= max_depth {
		return Err(CodecError::DepthExceeded { max_depth });
	}
	Ok(())
}

fn write_count<W: Write>(writer: &mut ByteWriter<W>, count: usize) -> Result<()> {
	let count = i32::try_from(count).map_err(|_| CodecError::CountTooLarge { count })?;
	writer.write_i32_le(count)
}

fn write_str<W: Write>(writer: &mut ByteWriter<W>, text: &str) -> Result<()> {
	let bytes = text.as_bytes();
	let len = u32::try_from(bytes.len()).map_err(|_| CodecError::LengthTooLarge {
		len: bytes.len() as u64,
		max: u64::from(u32::MAX),
	})?;
	write_varint(writer, len)?;
	writer.write_bytes(bytes)
}

#[cfg(test)]
mod tests;
