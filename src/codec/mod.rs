/// Offset-tracking little-endian byte reader and writer.
pub mod bytes;
mod compression;
mod decode;
mod encode;
mod error;
mod json;
mod number;
mod stats;
mod stream;
mod tag;
mod value;
/// Length-prefix varint codec.
pub mod varint;

/// Compression layer selection and whole-buffer helpers.
pub use compression::{Compression, DEFAULT_ZSTD_LEVEL, ZSTD_MAGIC, compress, decompress};
/// Decoding entry points and options.
pub use decode::{DecodeOptions, decode, decode_from, decode_with};
/// Encoding entry points and options.
pub use encode::{DEFAULT_MAX_DEPTH, EncodeOptions, encode, encode_to, encode_with};
/// Error and result aliases.
pub use error::{CodecError, Result};
/// `serde_json` document bridge.
pub use json::{decode_json, decode_json_with, encode_json, encode_json_with};
/// Numeric kind selection for JSON numbers.
pub use number::classify_number;
/// Encoded-document inspection.
pub use stats::{DocumentStats, inspect_file, scan_stats};
/// File and stream adapters.
pub use stream::{LoadOptions, SaveOptions, load_file, load_json_file, read_from, save_file, save_json_file, write_to};
/// Wire tag table.
pub use tag::Tag;
/// In-memory value model.
pub use value::{Field, Value};
