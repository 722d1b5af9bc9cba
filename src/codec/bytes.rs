use std::io::{ErrorKind, Read, Write};

use crate::codec::{CodecError, Result};

/// Initial buffer reservation for length-prefixed payloads; the rest grows as bytes arrive.
const PAYLOAD_RESERVE: u64 = 64 * 1024;

/// Offset-tracking little-endian reader over any byte source.
pub struct ByteReader<R> {
	inner: R,
	pos: u64,
}

impl<R: Read> ByteReader<R> {
	/// Wrap a source positioned at offset 0.
	pub fn new(inner: R) -> Self {
		Self { inner, pos: 0 }
	}

	/// Return number of bytes consumed so far.
	pub fn pos(&self) -> u64 {
		self.pos
	}

	/// Unwrap the underlying source.
	pub fn into_inner(self) -> R {
		self.inner
	}

	/// Read exactly `N` bytes and advance.
	pub fn read_array<const N: usize>(&mut self) -> Result<[u8; N]> {
		let at = self.pos;
		let mut buf = [0_u8; N];
		let got = self.fill(&mut buf)?;
		if got < N {
			return Err(CodecError::UnexpectedEof { at, need: N as u64 });
		}
		Ok(buf)
	}

	/// Read a single byte.
	pub fn read_u8(&mut self) -> Result<u8> {
		let [byte] = self.read_array::<1>()?;
		Ok(byte)
	}

	/// Read a little-endian `i32`.
	pub fn read_i32_le(&mut self) -> Result<i32> {
		Ok(i32::from_le_bytes(self.read_array()?))
	}

	/// Read a little-endian IEEE-754 `f32`.
	pub fn read_f32_le(&mut self) -> Result<f32> {
		Ok(f32::from_le_bytes(self.read_array()?))
	}

	/// Read a little-endian IEEE-754 `f64`.
	pub fn read_f64_le(&mut self) -> Result<f64> {
		Ok(f64::from_le_bytes(self.read_array()?))
	}

	/// Read an array/object count header, reporting short reads as a truncated header.
	pub fn read_count(&mut self) -> Result<i32> {
		let at = self.pos;
		self.read_i32_le().map_err(|err| match err {
			CodecError::UnexpectedEof { .. } => CodecError::TruncatedHeader { at },
			other => other,
		})
	}

	/// Read exactly `len` bytes into an owned buffer.
	///
	/// The buffer grows with the data actually received, so a corrupt length fails with
	/// `UnexpectedEof` instead of reserving `len` bytes up front.
	pub fn read_bytes(&mut self, len: u64) -> Result<Vec<u8>> {
		let at = self.pos;
		let mut out = Vec::with_capacity(len.min(PAYLOAD_RESERVE) as usize);
		let got = (&mut self.inner).take(len).read_to_end(&mut out)?;
		self.pos += got as u64;
		if (got as u64) < len {
			return Err(CodecError::UnexpectedEof { at, need: len });
		}
		Ok(out)
	}

	/// Report whether at least one more byte is available; consumes it if so.
	pub fn has_more(&mut self) -> Result<bool> {
		let mut byte = [0_u8; 1];
		Ok(self.fill(&mut byte)? == 1)
	}

	fn fill(&mut self, buf: &mut [u8]) -> Result<usize> {
		let mut filled = 0;
		while filled < buf.len() {
			match self.inner.read(&mut buf[filled..]) {
				Ok(0) => break,
				Ok(read) => filled += read,
				Err(err) if err.kind() == ErrorKind::Interrupted => continue,
				Err(err) => return Err(err.into()),
			}
		}
		self.pos += filled as u64;
		Ok(filled)
	}
}

/// Offset-tracking little-endian writer over any byte sink.
pub struct ByteWriter<W> {
	inner: W,
	pos: u64,
}

impl<W: Write> ByteWriter<W> {
	/// Wrap a sink positioned at offset 0.
	pub fn new(inner: W) -> Self {
		Self { inner, pos: 0 }
	}

	/// Return number of bytes written so far.
	pub fn pos(&self) -> u64 {
		self.pos
	}

	/// Unwrap the underlying sink.
	pub fn into_inner(self) -> W {
		self.inner
	}

	/// Write all of `bytes`.
	pub fn write_bytes(&mut self, bytes: &[u8]) -> Result<()> {
		self.inner.write_all(bytes)?;
		self.pos += bytes.len() as u64;
		Ok(())
	}

	/// Write a single byte.
	pub fn write_u8(&mut self, byte: u8) -> Result<()> {
		self.write_bytes(&[byte])
	}

	/// Write a little-endian `i32`.
	pub fn write_i32_le(&mut self, value: i32) -> Result<()> {
		self.write_bytes(&value.to_le_bytes())
	}

	/// Write a little-endian IEEE-754 `f32`.
	pub fn write_f32_le(&mut self, value: f32) -> Result<()> {
		self.write_bytes(&value.to_le_bytes())
	}

	/// Write a little-endian IEEE-754 `f64`.
	pub fn write_f64_le(&mut self, value: f64) -> Result<()> {
		self.write_bytes(&value.to_le_bytes())
	}

	/// Flush the underlying sink.
	pub fn flush(&mut self) -> Result<()> {
		self.inner.flush()?;
		Ok(())
	}
}
