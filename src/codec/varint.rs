//! Base-128 little-endian varint used for string and field-name byte lengths.
//!
//! Each byte carries seven payload bits, least-significant group first; the high bit is set on
//! every byte except the last. Encodings are minimal, and `0` is the single byte `0x00`.

use std::io::{Read, Write};

use crate::codec::bytes::{ByteReader, ByteWriter};
use crate::codec::{CodecError, Result};

/// Maximum number of groups a 32-bit length can occupy.
pub const MAX_VARINT_LEN: usize = 5;

const CONTINUE: u8 = 0x80;
const PAYLOAD: u8 = 0x7F;

/// Number of bytes `value` occupies once encoded.
pub fn varint_len(value: u32) -> usize {
	let bits = 32 - value.leading_zeros() as usize;
	bits.div_ceil(7).max(1)
}

/// Encode `value` into a fresh buffer.
pub fn encode_varint(value: u32) -> Vec<u8> {
	let mut out = Vec::with_capacity(varint_len(value));
	push_varint(&mut out, value);
	out
}

/// Decode one varint from the front of `bytes`, returning `(value, bytes_consumed)`.
pub fn decode_varint(bytes: &[u8]) -> Result<(u32, usize)> {
	let mut reader = ByteReader::new(bytes);
	let value = read_varint(&mut reader)?;
	Ok((value, reader.pos() as usize))
}

/// Write `value` as a varint.
pub fn write_varint<W: Write>(writer: &mut ByteWriter<W>, value: u32) -> Result<()> {
	let mut buf = Vec::with_capacity(MAX_VARINT_LEN);
	push_varint(&mut buf, value);
	writer.write_bytes(&buf)
}

/// Read one varint, bounded to 32 bits.
pub fn read_varint<R: Read>(reader: &mut ByteReader<R>) -> Result<u32> {
	let at = reader.pos();
	let mut value = 0_u32;

	for group in 0..MAX_VARINT_LEN {
		let byte = reader.read_u8()?;
		let payload = u32::from(byte & PAYLOAD);
		let shift = 7 * group as u32;

		// the fifth group only has room for bits 28..=31
		if group == MAX_VARINT_LEN - 1 && (payload > 0x0F || byte & CONTINUE != 0) {
			return Err(CodecError::VarintOverflow { at });
		}

		value |= payload << shift;
		if byte & CONTINUE == 0 {
			return Ok(value);
		}
	}

	Err(CodecError::VarintOverflow { at })
}

fn push_varint(out: &mut Vec<u8>, mut value: u32) {
	loop {
		let payload = (value & u32::from(PAYLOAD)) as u8;
		value >>= 7;
		if value == 0 {
			out.push(payload);
			return;
		}
		out.push(payload | CONTINUE);
	}
}

#[cfg(test)]
mod tests;
