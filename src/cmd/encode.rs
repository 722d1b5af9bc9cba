use std::fs;
use std::path::PathBuf;

use jsonbin::codec::{Compression, DEFAULT_MAX_DEPTH, DEFAULT_ZSTD_LEVEL, EncodeOptions, Result, SaveOptions, Value, save_file};
use tracing::info;

use crate::cmd::util::open_input;

#[derive(clap::Args)]
pub struct Args {
	/// JSON input file, or `-` for stdin.
	pub input: PathBuf,
	/// Binary output file.
	pub output: PathBuf,
	/// Wrap the output in a zstd frame.
	#[arg(long)]
	pub zstd: bool,
	/// zstd compression level, ignored without `--zstd`.
	#[arg(long, default_value_t = DEFAULT_ZSTD_LEVEL)]
	pub level: i32,
	/// Write a temporary file and rename it over the output on success.
	#[arg(long)]
	pub atomic: bool,
	/// Deepest container nesting accepted.
	#[arg(long = "max-depth", default_value_t = DEFAULT_MAX_DEPTH)]
	pub max_depth: u32,
}

/// Parse JSON input and write it in the binary format.
pub fn run(args: Args) -> Result<()> {
	let Args {
		input,
		output,
		zstd,
		level,
		atomic,
		max_depth,
	} = args;

	let json: serde_json::Value = serde_json::from_reader(open_input(&input)?)?;
	let value = Value::from_json(&json)?;

	let opt = SaveOptions {
		compression: if zstd { Compression::Zstd } else { Compression::None },
		level,
		atomic,
		encode: EncodeOptions { max_depth },
	};
	let encoded_bytes = save_file(&output, &value, &opt)?;
	let file_bytes = fs::metadata(&output)?.len();
	info!(output = %output.display(), encoded_bytes, file_bytes, "encoded document");

	println!("input: {}", input.display());
	println!("output: {}", output.display());
	println!("compression: {}", opt.compression.as_str());
	println!("root: {}", value.tag().as_str());
	println!("encoded_bytes: {encoded_bytes}");
	println!("file_bytes: {file_bytes}");

	Ok(())
}
