use thiserror::Error;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, CodecError>;

/// Errors produced while encoding, decoding, and moving documents through streams.
#[derive(Debug, Error)]
pub enum CodecError {
	/// Filesystem, stream, or compression-layer IO failure.
	#[error("io: {0}")]
	Io(#[from] std::io::Error),
	/// Textual JSON could not be parsed or written.
	#[error("json: {0}")]
	Json(#[from] serde_json::Error),
	/// Stream ended before a field was complete.
	#[error("unexpected end of stream at offset {at}, need {need} bytes")]
	UnexpectedEof {
		/// Byte offset where the read was attempted.
		at: u64,
		/// Requested bytes.
		need: u64,
	},
	/// Array/object count field was cut short.
	#[error("truncated count header at offset {at}")]
	TruncatedHeader {
		/// Byte offset of the count field.
		at: u64,
	},
	/// Tag byte outside the wire tag table.
	#[error("unknown tag {tag} at offset {at}")]
	UnknownTag {
		/// Offending tag byte.
		tag: u8,
		/// Byte offset of the tag.
		at: u64,
	},
	/// String or field-name bytes were not valid UTF-8.
	#[error("invalid utf-8 in string at offset {at}")]
	InvalidUtf8 {
		/// Byte offset of the string payload.
		at: u64,
	},
	/// Length varint ran past the 32-bit bound.
	#[error("varint overflow at offset {at}")]
	VarintOverflow {
		/// Byte offset of the first varint byte.
		at: u64,
	},
	/// Array/object count was negative.
	#[error("negative count {count} at offset {at}")]
	NegativeCount {
		/// Parsed signed count.
		count: i32,
		/// Byte offset of the count field.
		at: u64,
	},
	/// Container has more children than a signed 32-bit count can hold.
	#[error("container count {count} exceeds i32::MAX")]
	CountTooLarge {
		/// Actual child count.
		count: usize,
	},
	/// String payload length exceeds the permitted bound.
	#[error("string length {len} exceeds limit {max}")]
	LengthTooLarge {
		/// Declared or actual byte length.
		len: u64,
		/// Maximum permitted byte length.
		max: u64,
	},
	/// Nesting depth exceeded configured limit.
	#[error("nesting depth exceeded (max={max_depth})")]
	DepthExceeded {
		/// Configured depth ceiling.
		max_depth: u32,
	},
	/// Strict decode found bytes after the root value.
	#[error("trailing bytes after root value at offset {at}")]
	TrailingBytes {
		/// Offset of the first unconsumed byte.
		at: u64,
	},
	/// JSON null has no wire representation.
	#[error("null value at {path} has no binary representation")]
	NullValue {
		/// JSON-pointer-like location of the null.
		path: String,
	},
	/// Decoded float cannot be expressed as a JSON number.
	#[error("non-finite number {value} cannot be represented in JSON")]
	NonFiniteNumber {
		/// Offending value, widened to `f64`.
		value: f64,
	},
	/// Number text did not parse back as a float.
	#[error("invalid number text {text:?}")]
	InvalidNumber {
		/// Canonical text of the number.
		text: String,
	},
	/// Leading bytes are neither a zstd frame nor a value tag.
	#[error("unsupported compression or not a jsonbin document (magic={magic:?})")]
	UnknownCompression {
		/// First up-to-4 bytes of the stream.
		magic: [u8; 4],
	},
}
