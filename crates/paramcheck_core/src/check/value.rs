use std::fmt;

/// Runtime value checked by the validators.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
	/// Absence of a value.
	Null,
	/// Boolean scalar.
	Bool(bool),
	/// Signed integer scalar.
	I64(i64),
	/// Unsigned integer scalar.
	U64(u64),
	/// 32-bit float scalar.
	F32(f32),
	/// 64-bit float scalar.
	F64(f64),
	/// Opaque byte payload.
	Bytes(Vec<u8>),
	/// UTF-8 text.
	String(Box<str>),
	/// Ordered, indexable sequence.
	Array(Vec<Value>),
	/// Named record of fields.
	Record(RecordValue),
}

/// Record value with field names preserved.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordValue {
	/// Nominal type name of the record.
	pub type_name: Box<str>,
	/// Field values in declaration order.
	pub fields: Vec<FieldValue>,
}

/// Named record field.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldValue {
	/// Field identifier.
	pub name: Box<str>,
	/// Field payload.
	pub value: Value,
}

impl Value {
	/// True for [`Value::Null`].
	pub fn is_absent(&self) -> bool {
		matches!(self, Self::Null)
	}

	/// True for integer scalars.
	///
	/// Booleans are not integers here, even where a host language would treat `true` as `1`, so
	/// `PositiveInt`, `Size`, and `ColorRGBA` reject them.
	pub fn is_integral(&self) -> bool {
		matches!(self, Self::I64(_) | Self::U64(_))
	}

	/// True for integer and float scalars.
	pub fn is_real(&self) -> bool {
		self.is_integral() || matches!(self, Self::F32(_) | Self::F64(_))
	}

	/// Borrow sequence items when this value is an array. Text and bytes are never sequences.
	pub fn as_sequence(&self) -> Option<&[Value]> {
		match self {
			Self::Array(items) => Some(items),
			_ => None,
		}
	}

	/// Numeric view of a real scalar.
	pub fn as_f64(&self) -> Option<f64> {
		match *self {
			Self::I64(v) => Some(v as f64),
			Self::U64(v) => Some(v as f64),
			Self::F32(v) => Some(f64::from(v)),
			Self::F64(v) => Some(v),
			_ => None,
		}
	}

	/// Runtime type label used in diagnostics.
	pub fn type_name(&self) -> &str {
		match self {
			Self::Null => "None",
			Self::Bool(_) => "bool",
			Self::I64(_) | Self::U64(_) => "int",
			Self::F32(_) | Self::F64(_) => "float",
			Self::Bytes(_) => "bytes",
			Self::String(_) => "str",
			Self::Array(_) => "sequence",
			Self::Record(record) => &*record.type_name,
		}
	}
}

impl RecordValue {
	/// Create a record with no fields.
	pub fn new(type_name: impl Into<Box<str>>) -> Self {
		Self {
			type_name: type_name.into(),
			fields: Vec::new(),
		}
	}

	/// Append a field and return the record.
	pub fn with_field(mut self, name: impl Into<Box<str>>, value: impl Into<Value>) -> Self {
		self.fields.push(FieldValue {
			name: name.into(),
			value: value.into(),
		});
		self
	}

	/// Look up the first field with `name`.
	pub fn field(&self, name: &str) -> Option<&Value> {
		self.fields.iter().find(|field| &*field.name == name).map(|field| &field.value)
	}
}

impl fmt::Display for Value {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Null => f.write_str("None"),
			Self::Bool(v) => write!(f, "{v}"),
			Self::I64(v) => write!(f, "{v}"),
			Self::U64(v) => write!(f, "{v}"),
			Self::F32(v) => write!(f, "{v}"),
			Self::F64(v) => write!(f, "{v}"),
			Self::Bytes(v) => write!(f, "bytes[{}]", v.len()),
			Self::String(v) => write!(f, "{v:?}"),
			Self::Array(items) => {
				f.write_str("[")?;
				for (idx, item) in items.iter().enumerate() {
					if idx > 0 {
						f.write_str(", ")?;
					}
					write!(f, "{item}")?;
				}
				f.write_str("]")
			}
			Self::Record(record) => write!(f, "{} {{ .. }}", record.type_name),
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
		Self::I64(i64::from(value))
	}
}

impl From<i64> for Value {
	fn from(value: i64) -> Self {
		Self::I64(value)
	}
}

impl From<u32> for Value {
	fn from(value: u32) -> Self {
		Self::U64(u64::from(value))
	}
}

impl From<u64> for Value {
	fn from(value: u64) -> Self {
		Self::U64(value)
	}
}

impl From<f32> for Value {
	fn from(value: f32) -> Self {
		Self::F32(value)
	}
}

impl From<f64> for Value {
	fn from(value: f64) -> Self {
		Self::F64(value)
	}
}

impl From<&str> for Value {
	fn from(value: &str) -> Self {
		Self::String(value.into())
	}
}

impl From<String> for Value {
	fn from(value: String) -> Self {
		Self::String(value.into_boxed_str())
	}
}

impl From<Vec<Value>> for Value {
	fn from(items: Vec<Value>) -> Self {
		Self::Array(items)
	}
}

impl From<RecordValue> for Value {
	fn from(record: RecordValue) -> Self {
		Self::Record(record)
	}
}

impl<T: Into<Value>> From<Option<T>> for Value {
	fn from(value: Option<T>) -> Self {
		value.map_or(Self::Null, Into::into)
	}
}

impl<T: Into<Value>, const N: usize> From<[T; N]> for Value {
	fn from(items: [T; N]) -> Self {
		Self::Array(items.into_iter().map(Into::into).collect())
	}
}
