use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

use jsonbin::codec::{DecodeOptions, LoadOptions, Result, Tag, inspect_file};

use crate::cmd::util::{CompressionArg, emit_json};

#[derive(clap::Args)]
pub struct Args {
	/// Binary file to inspect.
	pub path: PathBuf,
	/// Compression layer of the input; `auto` detects it.
	#[arg(long, value_enum, default_value_t = CompressionArg::Auto)]
	pub compression: CompressionArg,
	/// Print the summary as JSON.
	#[arg(long)]
	pub json: bool,
}

/// Print compression, size, and structural statistics for a binary file.
pub fn run(args: Args) -> Result<()> {
	let Args { path, compression, json } = args;

	let opt = LoadOptions {
		compression: compression.to_option(),
		decode: DecodeOptions::default(),
	};
	let (compression, stats) = inspect_file(&path, &opt)?;
	let file_bytes = fs::metadata(&path)?.len();

	if json {
		let tags = Tag::ALL.into_iter().map(|tag| (tag.as_str(), stats.count(tag))).collect();
		return emit_json(&InfoJson {
			path: path.display().to_string(),
			compression: compression.as_str(),
			file_bytes,
			encoded_bytes: stats.encoded_bytes,
			root: stats.root.as_str(),
			values: stats.value_count(),
			fields: stats.fields,
			max_depth: stats.max_depth,
			string_bytes: stats.string_bytes,
			tags,
		});
	}

	println!("path: {}", path.display());
	println!("compression: {}", compression.as_str());
	println!("file_bytes: {file_bytes}");
	println!("encoded_bytes: {}", stats.encoded_bytes);
	println!("root: {}", stats.root.as_str());
	println!("values: {}", stats.value_count());
	println!("fields: {}", stats.fields);
	println!("max_depth: {}", stats.max_depth);
	println!("string_bytes: {}", stats.string_bytes);
	println!("tags:");
	for tag in Tag::ALL {
		let count = stats.count(tag);
		if count > 0 {
			println!("  {}: {count}", tag.as_str());
		}
	}

	Ok(())
}

#[derive(serde::Serialize)]
struct InfoJson {
	path: String,
	compression: &'static str,
	file_bytes: u64,
	encoded_bytes: u64,
	root: &'static str,
	values: u64,
	fields: u64,
	max_depth: u32,
	string_bytes: u64,
	tags: BTreeMap<&'static str, u64>,
}

