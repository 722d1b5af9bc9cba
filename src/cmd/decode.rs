use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use jsonbin::codec::{DEFAULT_MAX_DEPTH, DecodeOptions, LoadOptions, Result, load_file};
use tracing::info;

use crate::cmd::util::CompressionArg;

#[derive(clap::Args)]
pub struct Args {
	/// Binary input file.
	pub input: PathBuf,
	/// Write JSON here instead of stdout.
	#[arg(long, short)]
	pub output: Option<PathBuf>,
	/// Indent the JSON output.
	#[arg(long)]
	pub pretty: bool,
	/// Fail when bytes follow the root value.
	#[arg(long)]
	pub strict: bool,
	/// Compression layer of the input; `auto` detects it.
	#[arg(long, value_enum, default_value_t = CompressionArg::Auto)]
	pub compression: CompressionArg,
	/// Deepest container nesting accepted.
	#[arg(long = "max-depth", default_value_t = DEFAULT_MAX_DEPTH)]
	pub max_depth: u32,
}

/// Decode a binary file and print it as JSON.
pub fn run(args: Args) -> Result<()> {
	let Args {
		input,
		output,
		pretty,
		strict,
		compression,
		max_depth,
	} = args;

	let opt = LoadOptions {
		compression: compression.to_option(),
		decode: DecodeOptions {
			max_depth,
			reject_trailing: strict,
			..DecodeOptions::default()
		},
	};
	let json = load_file(&input, &opt)?.to_json()?;
	info!(input = %input.display(), "decoded document");

	match output {
		Some(path) => {
			let mut writer = BufWriter::new(File::create(&path)?);
			write_json(&mut writer, &json, pretty)?;
			writer.flush()?;
		}
		None => {
			let mut writer = io::stdout().lock();
			write_json(&mut writer, &json, pretty)?;
			writer.flush()?;
		}
	}

	Ok(())
}

fn write_json<W: Write>(writer: &mut W, json: &serde_json::Value, pretty: bool) -> Result<()> {
	if pretty {
		serde_json::to_writer_pretty(&mut *writer, json)?;
	} else {
		serde_json::to_writer(&mut *writer, json)?;
	}
	writeln!(writer)?;
	Ok(())
}
