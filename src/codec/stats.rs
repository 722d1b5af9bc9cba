use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::codec::bytes::ByteReader;
use crate::codec::decode::{ensure_consumed, read_count, read_str, read_tag};
use crate::codec::encode::enter_container;
use crate::codec::stream::open_source;
use crate::codec::{Compression, DecodeOptions, LoadOptions, Result, Tag};

/// Structural summary of an encoded document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentStats {
	/// Kind of the root value.
	pub root: Tag,
	/// Number of values seen per tag, root included.
	pub tag_counts: BTreeMap<Tag, u64>,
	/// Number of object entries.
	pub fields: u64,
	/// Deepest container nesting; a scalar root is 0.
	pub max_depth: u32,
	/// UTF-8 bytes held by strings and field names.
	pub string_bytes: u64,
	/// Encoded bytes consumed, before any compression.
	pub encoded_bytes: u64,
}

impl DocumentStats {
	/// Total number of values in the document.
	pub fn value_count(&self) -> u64 {
		self.tag_counts.values().sum()
	}

	/// Number of values carrying `tag`.
	pub fn count(&self, tag: Tag) -> u64 {
		self.tag_counts.get(&tag).copied().unwrap_or(0)
	}
}

#[derive(Default)]
struct ScanState {
	tag_counts: BTreeMap<Tag, u64>,
	fields: u64,
	max_depth: u32,
	string_bytes: u64,
}

/// Walk one encoded value and summarize it without building a tree.
///
/// Applies the same validation and limits as decoding, so a document that scans cleanly also
/// decodes cleanly.
pub fn scan_stats<R: Read>(reader: R, opt: &DecodeOptions) -> Result<DocumentStats> {
	let mut reader = ByteReader::new(reader);
	let mut state = ScanState::default();
	let root = scan_impl(&mut reader, opt, 0, &mut state)?;
	let encoded_bytes = reader.pos();
	if opt.reject_trailing {
		ensure_consumed(&mut reader)?;
	}

	Ok(DocumentStats {
		root,
		tag_counts: state.tag_counts,
		fields: state.fields,
		max_depth: state.max_depth,
		string_bytes: state.string_bytes,
		encoded_bytes,
	})
}

/// Detect compression and summarize the document stored at `path`.
pub fn inspect_file(path: impl AsRef<Path>, opt: &LoadOptions) -> Result<(Compression, DocumentStats)> {
	let file = File::open(path)?;
	let (compression, source) = open_source(BufReader::new(file), opt.compression)?;
	let stats = scan_stats(source, &opt.decode)?;
	Ok((compression, stats))
}

fn scan_impl<R: Read>(reader: &mut ByteReader<R>, opt: &DecodeOptions, depth: u32, state: &mut ScanState) -> Result<Tag> {
	let tag = read_tag(reader)?;
	*state.tag_counts.entry(tag).or_insert(0) += 1;

	match tag {
		Tag::Array | Tag::Object => {
			enter_container(depth, opt.max_depth)?;
			state.max_depth = state.max_depth.max(depth + 1);
			let count = read_count(reader)?;
			for _ in 0..count {
				if tag == Tag::Object {
					let name = read_str(reader, opt)?;
					state.fields += 1;
					state.string_bytes += name.len() as u64;
				}
				scan_impl(reader, opt, depth + 1, state)?;
			}
		}
		Tag::String => {
			let text = read_str(reader, opt)?;
			state.string_bytes += text.len() as u64;
		}
		Tag::Int | Tag::Float => {
			reader.read_array::<4>()?;
		}
		Tag::Double => {
			reader.read_array::<8>()?;
		}
		Tag::Bool => {
			reader.read_u8()?;
		}
	}

	Ok(tag)
}
