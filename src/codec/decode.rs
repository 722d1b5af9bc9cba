use std::io::Read;

use crate::codec::bytes::ByteReader;
use crate::codec::encode::{DEFAULT_MAX_DEPTH, enter_container};
use crate::codec::value::{Field, Value};
use crate::codec::varint::read_varint;
use crate::codec::{CodecError, Result, Tag};

/// Upper bound on up-front capacity for decoded containers; larger counts grow as children arrive.
const MAX_PREALLOC_CHILDREN: usize = 4096;

/// Runtime limits and behavior switches for decoding.
#[derive(Debug, Clone)]
pub struct DecodeOptions {
	/// Maximum container nesting depth.
	pub max_depth: u32,
	/// Maximum byte length accepted for one string or field name.
	pub max_string_bytes: u32,
	/// Error when bytes remain after the root value.
	pub reject_trailing: bool,
}

impl Default for DecodeOptions {
	fn default() -> Self {
		Self {
			max_depth: DEFAULT_MAX_DEPTH,
			max_string_bytes: u32::MAX,
			reject_trailing: false,
		}
	}
}

impl DecodeOptions {
	/// Preset that requires the source to hold exactly one value.
	pub fn strict() -> Self {
		Self {
			reject_trailing: true,
			..Self::default()
		}
	}
}

/// Decode one value from `bytes` with default options.
pub fn decode(bytes: &[u8]) -> Result<Value> {
	decode_with(bytes, &DecodeOptions::default())
}

/// Decode one value from `bytes`.
pub fn decode_with(bytes: &[u8], opt: &DecodeOptions) -> Result<Value> {
	decode_from(bytes, opt)
}

/// Decode one value from a byte source.
///
/// Reads exactly the bytes of the root value unless `reject_trailing` is set, in which case
/// one extra byte is read to check for trailing data.
pub fn decode_from<R: Read>(reader: R, opt: &DecodeOptions) -> Result<Value> {
	let mut reader = ByteReader::new(reader);
	let value = decode_impl(&mut reader, opt, 0)?;
	if opt.reject_trailing {
		ensure_consumed(&mut reader)?;
	}
	Ok(value)
}

fn decode_impl<R: Read>(reader: &mut ByteReader<R>, opt: &DecodeOptions, depth: u32) -> Result<Value> {
	let tag = read_tag(reader)?;

	match tag {
		Tag::Array => {
			enter_container(depth, opt.max_depth)?;
			let count = read_count(reader)?;
			let mut items = Vec::with_capacity(count.min(MAX_PREALLOC_CHILDREN));
			for _ in 0..count {
				items.push(decode_impl(reader, opt, depth + 1)?);
			}
			Ok(Value::Array(items))
		}
		Tag::Object => {
			enter_container(depth, opt.max_depth)?;
			let count = read_count(reader)?;
			let mut fields = Vec::with_capacity(count.min(MAX_PREALLOC_CHILDREN));
			for _ in 0..count {
				// untagged name, then a tagged value
				let name = read_str(reader, opt)?;
				let value = decode_impl(reader, opt, depth + 1)?;
				fields.push(Field { name, value });
			}
			Ok(Value::Object(fields))
		}
		Tag::String => read_str(reader, opt).map(Value::String),
		Tag::Int => reader.read_i32_le().map(Value::Int),
		Tag::Double => reader.read_f64_le().map(Value::Double),
		Tag::Float => reader.read_f32_le().map(Value::Float),
		Tag::Bool => Ok(Value::Bool(reader.read_u8()? != 0)),
	}
}

/// Read and classify one tag byte.
pub(crate) fn read_tag<R: Read>(reader: &mut ByteReader<R>) -> Result<Tag> {
	let at = reader.pos();
	let byte = reader.read_u8()?;
	Tag::from_byte(byte).ok_or(CodecError::UnknownTag { tag: byte, at })
}

/// Read a container count, rejecting negative values.
pub(crate) fn read_count<R: Read>(reader: &mut ByteReader<R>) -> Result<usize> {
	let at = reader.pos();
	let count = reader.read_count()?;
	usize::try_from(count).map_err(|_| CodecError::NegativeCount { count, at })
}

/// Read a varint length followed by that many UTF-8 bytes.
pub(crate) fn read_str<R: Read>(reader: &mut ByteReader<R>, opt: &DecodeOptions) -> Result<String> {
	let len = read_varint(reader)?;
	if len > opt.max_string_bytes {
		return Err(CodecError::LengthTooLarge {
			len: u64::from(len),
			max: u64::from(opt.max_string_bytes),
		});
	}

	let at = reader.pos();
	let bytes = reader.read_bytes(u64::from(len))?;
	String::from_utf8(bytes).map_err(|_| CodecError::InvalidUtf8 { at })
}

pub(crate) fn ensure_consumed<R: Read>(reader: &mut ByteReader<R>) -> Result<()> {
	let at = reader.pos();
	if reader.has_more()? {
		return Err(CodecError::TrailingBytes { at });
	}
	Ok(())
}
