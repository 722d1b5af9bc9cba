/// One-byte wire tag that opens every encoded value.
///
/// Byte values are part of the on-disk format and must never be renumbered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Tag {
	/// `count(i32 LE)` followed by `count` values.
	Array = 1,
	/// `count(i32 LE)` followed by `count` untagged names, each followed by a value.
	Object = 2,
	/// Varint byte length followed by UTF-8 bytes.
	String = 3,
	/// Signed 32-bit little-endian integer.
	Int = 4,
	/// IEEE-754 binary64, little-endian.
	Double = 5,
	/// One byte, nonzero is true.
	Bool = 6,
	/// IEEE-754 binary32, little-endian.
	Float = 7,
}

impl Tag {
	/// Every tag in wire order.
	pub const ALL: [Tag; 7] = [Tag::Array, Tag::Object, Tag::String, Tag::Int, Tag::Double, Tag::Bool, Tag::Float];

	/// Map a raw byte to its tag, if it is one.
	pub fn from_byte(byte: u8) -> Option<Self> {
		match byte {
			1 => Some(Self::Array),
			2 => Some(Self::Object),
			3 => Some(Self::String),
			4 => Some(Self::Int),
			5 => Some(Self::Double),
			6 => Some(Self::Bool),
			7 => Some(Self::Float),
			_ => None,
		}
	}

	/// Raw wire byte.
	pub fn as_byte(self) -> u8 {
		self as u8
	}

	/// Render tag as a stable lowercase label.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Array => "array",
			Self::Object => "object",
			Self::String => "string",
			Self::Int => "int",
			Self::Double => "double",
			Self::Bool => "bool",
			Self::Float => "float",
		}
	}

	/// Whether the tag opens a container with a count header.
	pub fn is_container(self) -> bool {
		matches!(self, Self::Array | Self::Object)
	}
}
