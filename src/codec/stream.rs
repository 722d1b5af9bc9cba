use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};
use std::process;
use std::sync::atomic::{AtomicU64, Ordering};

use tracing::debug;

use crate::codec::compression::DEFAULT_ZSTD_LEVEL;
use crate::codec::{CodecError, Compression, DecodeOptions, EncodeOptions, Result, Value, decode_from, encode_to};

/// How a document is written to a file or stream.
#[derive(Debug, Clone)]
pub struct SaveOptions {
	/// Compression layer wrapped around the encoded bytes.
	pub compression: Compression,
	/// zstd level, ignored for uncompressed output.
	pub level: i32,
	/// Write a sibling temporary file and rename it over the target on success.
	pub atomic: bool,
	/// Encoder limits.
	pub encode: EncodeOptions,
}

impl Default for SaveOptions {
	fn default() -> Self {
		Self {
			compression: Compression::None,
			level: DEFAULT_ZSTD_LEVEL,
			atomic: false,
			encode: EncodeOptions::default(),
		}
	}
}

impl SaveOptions {
	/// Preset for zstd-compressed output at the default level.
	pub fn compressed() -> Self {
		Self {
			compression: Compression::Zstd,
			..Self::default()
		}
	}
}

/// How a document is read from a file or stream.
#[derive(Debug, Clone, Default)]
pub struct LoadOptions {
	/// Expected compression layer; `None` detects it from the leading bytes.
	pub compression: Option<Compression>,
	/// Decoder limits.
	pub decode: DecodeOptions,
}

/// Encode `value` into `writer` through the configured compression layer.
///
/// Returns the number of encoded bytes before compression. The compression frame is finished
/// and the writer flushed before returning.
pub fn write_to<W: Write>(mut writer: W, value: &Value, opt: &SaveOptions) -> Result<u64> {
	let written = match opt.compression {
		Compression::None => encode_to(&mut writer, value, &opt.encode)?,
		Compression::Zstd => {
			let mut encoder = zstd::stream::write::Encoder::new(&mut writer, opt.level)?;
			let written = encode_to(&mut encoder, value, &opt.encode)?;
			encoder.finish()?;
			written
		}
	};
	writer.flush()?;
	Ok(written)
}

/// Decode one document from `reader`, undoing the compression layer first.
pub fn read_from<R: Read>(reader: R, opt: &LoadOptions) -> Result<Value> {
	let (compression, source) = open_source(reader, opt.compression)?;
	debug!(compression = compression.as_str(), "decoding document");
	decode_from(source, &opt.decode)
}

/// Encode `value` into the file at `path`, replacing it.
pub fn save_file(path: impl AsRef<Path>, value: &Value, opt: &SaveOptions) -> Result<u64> {
	let path = path.as_ref();

	let written = if opt.atomic {
		let tmp = temp_sibling(path);
		match write_file(&tmp, value, opt) {
			Ok(written) => {
				fs::rename(&tmp, path)?;
				written
			}
			Err(err) => {
				let _ = fs::remove_file(&tmp);
				return Err(err);
			}
		}
	} else {
		write_file(path, value, opt)?
	};

	debug!(
		path = %path.display(),
		compression = opt.compression.as_str(),
		atomic = opt.atomic,
		bytes = written,
		"saved document"
	);
	Ok(written)
}

/// Decode the document stored at `path`.
pub fn load_file(path: impl AsRef<Path>, opt: &LoadOptions) -> Result<Value> {
	let path = path.as_ref();
	let file = File::open(path)?;
	debug!(path = %path.display(), "opened document");
	read_from(BufReader::new(file), opt)
}

/// Convert a JSON document and save it to `path`.
pub fn save_json_file(path: impl AsRef<Path>, json: &serde_json::Value, opt: &SaveOptions) -> Result<u64> {
	save_file(path, &Value::from_json(json)?, opt)
}

/// Load the document at `path` as JSON.
pub fn load_json_file(path: impl AsRef<Path>, opt: &LoadOptions) -> Result<serde_json::Value> {
	load_file(path, opt)?.to_json()
}

/// Peel the compression layer off `reader`, detecting it when not given.
pub(crate) fn open_source<'a, R: Read + 'a>(mut reader: R, compression: Option<Compression>) -> Result<(Compression, Box<dyn Read + 'a>)> {
	let mut prefix = [0_u8; 4];
	let got = read_prefix(&mut reader, &mut prefix)?;

	let compression = match compression {
		Some(compression) => compression,
		None if got == 0 => return Err(CodecError::UnexpectedEof { at: 0, need: 1 }),
		None => Compression::detect(&prefix[..got])?,
	};

	let raw = io::Cursor::new(prefix).take(got as u64).chain(reader);
	let source: Box<dyn Read + 'a> = match compression {
		Compression::None => Box::new(raw),
		Compression::Zstd => Box::new(zstd::stream::read::Decoder::new(raw)?),
	};
	Ok((compression, source))
}

fn read_prefix<R: Read>(reader: &mut R, buf: &mut [u8]) -> Result<usize> {
	let mut filled = 0;
	while filled < buf.len() {
		match reader.read(&mut buf[filled..]) {
			Ok(0) => break,
			Ok(read) => filled += read,
			Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
			Err(err) => return Err(err.into()),
		}
	}
	Ok(filled)
}

fn write_file(path: &Path, value: &Value, opt: &SaveOptions) -> Result<u64> {
	let mut writer = BufWriter::new(File::create(path)?);
	let written = write_to(&mut writer, value, opt)?;
	let file = writer.into_inner().map_err(io::IntoInnerError::into_error)?;
	if opt.atomic {
		file.sync_all()?;
	}
	Ok(written)
}

/// Unique temporary path beside `path`; pid and counter keep concurrent saves apart.
pub(crate) fn temp_sibling(path: &Path) -> PathBuf {
	static COUNTER: AtomicU64 = AtomicU64::new(0);

	let seq = COUNTER.fetch_add(1, Ordering::Relaxed);
	let name = path.file_name().map(|name| name.to_string_lossy().into_owned()).unwrap_or_else(|| "jsonbin".to_owned());
	path.with_file_name(format!(".{name}.{}.{seq}.tmp", process::id()))
}
