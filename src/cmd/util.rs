use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

use jsonbin::codec::{Compression, Result};

/// Compression selection accepted on the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub(crate) enum CompressionArg {
	/// Detect from the leading bytes.
	#[default]
	Auto,
	/// Raw stream.
	None,
	/// zstd frame.
	Zstd,
}

impl CompressionArg {
	/// Map onto load options; `Auto` means detect.
	pub(crate) fn to_option(self) -> Option<Compression> {
		match self {
			Self::Auto => None,
			Self::None => Some(Compression::None),
			Self::Zstd => Some(Compression::Zstd),
		}
	}
}

/// Open a file for reading, or stdin when `path` is `-`.
pub(crate) fn open_input(path: &Path) -> Result<Box<dyn Read>> {
	if path.as_os_str() == "-" {
		return Ok(Box::new(io::stdin().lock()));
	}
	Ok(Box::new(BufReader::new(File::open(path)?)))
}

/// Print a serializable payload as pretty JSON on stdout.
pub(crate) fn emit_json<T: serde::Serialize>(payload: &T) -> Result<()> {
	println!("{}", serde_json::to_string_pretty(payload)?);
	Ok(())
}
