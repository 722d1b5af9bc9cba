use std::io::Read;

use crate::codec::{CodecError, Result, Tag};

/// zstd frame magic used by compressed documents.
pub const ZSTD_MAGIC: [u8; 4] = [0x28, 0xB5, 0x2F, 0xFD];
/// Default zstd level for compressed writes.
pub const DEFAULT_ZSTD_LEVEL: i32 = 3;

/// Compression layer wrapped around the raw encoded stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Compression {
	/// Raw uncompressed stream.
	#[default]
	None,
	/// zstd-compressed stream.
	Zstd,
}

impl Compression {
	/// Render compression mode as a stable lowercase label.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::None => "none",
			Self::Zstd => "zstd",
		}
	}

	/// Detect the layer from the leading bytes of a stream.
	///
	/// Raw documents start with a value tag, which never collides with the zstd magic.
	pub fn detect(prefix: &[u8]) -> Result<Self> {
		if prefix.starts_with(&ZSTD_MAGIC) {
			return Ok(Self::Zstd);
		}

		match prefix.first().copied().and_then(Tag::from_byte) {
			Some(_) => Ok(Self::None),
			None => Err(CodecError::UnknownCompression { magic: first4(prefix) }),
		}
	}
}

/// Compress a whole encoded buffer.
pub fn compress(raw: &[u8], level: i32) -> Result<Vec<u8>> {
	Ok(zstd::stream::encode_all(raw, level)?)
}

/// Decompress a whole buffer produced by [`compress`].
pub fn decompress(compressed: &[u8]) -> Result<Vec<u8>> {
	let mut decoder = zstd::stream::read::Decoder::new(compressed)?;
	let mut out = Vec::new();
	decoder.read_to_end(&mut out)?;
	Ok(out)
}

fn first4(bytes: &[u8]) -> [u8; 4] {
	let mut magic = [0_u8; 4];
	let take = bytes.len().min(4);
	magic[..take].copy_from_slice(&bytes[..take]);
	magic
}
