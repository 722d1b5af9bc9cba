use crate::codec::Tag;

/// In-memory document tree, one variant per wire tag.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
	/// Ordered sequence of values.
	Array(Vec<Value>),
	/// Ordered fields; duplicate names are kept as given.
	Object(Vec<Field>),
	/// UTF-8 text.
	String(String),
	/// Signed 32-bit integer.
	Int(i32),
	/// 64-bit float.
	Double(f64),
	/// 32-bit float.
	Float(f32),
	/// Boolean.
	Bool(bool),
}

/// Named object entry.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
	/// Field name, written without a tag byte.
	pub name: String,
	/// Field value.
	pub value: Value,
}

impl Field {
	/// Build a field from anything convertible into a name and a value.
	pub fn new(name: impl Into<String>, value: impl Into<Value>) -> Self {
		Self {
			name: name.into(),
			value: value.into(),
		}
	}
}

impl Value {
	/// Wire tag this value is encoded under.
	pub fn tag(&self) -> Tag {
		match self {
			Self::Array(_) => Tag::Array,
			Self::Object(_) => Tag::Object,
			Self::String(_) => Tag::String,
			Self::Int(_) => Tag::Int,
			Self::Double(_) => Tag::Double,
			Self::Float(_) => Tag::Float,
			Self::Bool(_) => Tag::Bool,
		}
	}

	/// Build an object from `(name, value)` pairs, keeping their order.
	pub fn object<K, V>(fields: impl IntoIterator<Item = (K, V)>) -> Self
	where
		K: Into<String>,
		V: Into<Value>,
	{
		Self::Object(fields.into_iter().map(|(name, value)| Field::new(name, value)).collect())
	}

	/// Build an array from anything convertible into values.
	pub fn array<V: Into<Value>>(items: impl IntoIterator<Item = V>) -> Self {
		Self::Array(items.into_iter().map(Into::into).collect())
	}

	/// Look up an object field by name; the last entry wins when names repeat.
	pub fn get(&self, name: &str) -> Option<&Value> {
		match self {
			Self::Object(fields) => fields.iter().rev().find(|field| field.name == name).map(|field| &field.value),
			_ => None,
		}
	}

	/// Number of array items or object fields, if this is a container.
	pub fn child_count(&self) -> Option<usize> {
		match self {
			Self::Array(items) => Some(items.len()),
			Self::Object(fields) => Some(fields.len()),
			_ => None,
		}
	}

	/// Borrow string contents.
	pub fn as_str(&self) -> Option<&str> {
		match self {
			Self::String(text) => Some(text),
			_ => None,
		}
	}

	/// Return the integer payload.
	pub fn as_int(&self) -> Option<i32> {
		match self {
			Self::Int(value) => Some(*value),
			_ => None,
		}
	}

	/// Return the boolean payload.
	pub fn as_bool(&self) -> Option<bool> {
		match self {
			Self::Bool(value) => Some(*value),
			_ => None,
		}
	}

	/// Nesting depth; scalars are 0, an empty container is 1.
	pub fn depth(&self) -> usize {
		match self {
			Self::Array(items) => 1 + items.iter().map(Value::depth).max().unwrap_or(0),
			Self::Object(fields) => 1 + fields.iter().map(|field| field.value.depth()).max().unwrap_or(0),
			_ => 0,
		}
	}
}

impl From<bool> for Value {
	fn from(value: bool) -> Self {
		Self::Bool(value)
	}
}

impl From<i32> for Value {
	fn from(value: i32) -> Self {
		Self::Int(value)
	}
}

impl From<f32> for Value {
	fn from(value: f32) -> Self {
		Self::Float(value)
	}
}

impl From<f64> for Value {
	fn from(value: f64) -> Self {
		Self::Double(value)
	}
}

impl From<&str> for Value {
	fn from(value: &str) -> Self {
		Self::String(value.to_owned())
	}
}

impl From<String> for Value {
	fn from(value: String) -> Self {
		Self::String(value)
	}
}

impl From<Vec<Value>> for Value {
	fn from(items: Vec<Value>) -> Self {
		Self::Array(items)
	}
}

impl From<Vec<Field>> for Value {
	fn from(fields: Vec<Field>) -> Self {
		Self::Object(fields)
	}
}
