use std::fmt;
use std::str::FromStr;

use crate::check::{DescriptorError, Value};

/// Concrete type checked by nominal membership.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Nominal {
	/// Absence of a value.
	None,
	/// Boolean scalar.
	Bool,
	/// Integer scalar.
	Int,
	/// Float scalar. Integers are not floats.
	Float,
	/// Any integer or float scalar.
	Real,
	/// UTF-8 text.
	Str,
	/// Byte payload.
	Bytes,
	/// Ordered sequence, excluding text and bytes.
	Sequence,
	/// Any record.
	Mapping,
	/// Record with a specific type name.
	Named(Box<str>),
}

impl Nominal {
	/// Bare type name. `Display` additionally prefixes named types with `@`, as the parser expects.
	pub fn name(&self) -> &str {
		match self {
			Self::None => "None",
			Self::Bool => "bool",
			Self::Int => "int",
			Self::Float => "float",
			Self::Real => "Real",
			Self::Str => "str",
			Self::Bytes => "bytes",
			Self::Sequence => "Sequence",
			Self::Mapping => "Mapping",
			Self::Named(name) => &**name,
		}
	}

	/// Nominal membership test.
	pub fn admits(&self, value: &Value) -> bool {
		match self {
			Self::None => value.is_absent(),
			Self::Bool => matches!(value, Value::Bool(_)),
			Self::Int => value.is_integral(),
			Self::Float => matches!(value, Value::F32(_) | Value::F64(_)),
			Self::Real => value.is_real(),
			Self::Str => matches!(value, Value::String(_)),
			Self::Bytes => matches!(value, Value::Bytes(_)),
			Self::Sequence => value.as_sequence().is_some(),
			Self::Mapping => matches!(value, Value::Record(_)),
			Self::Named(name) => matches!(value, Value::Record(record) if record.type_name == *name),
		}
	}

	fn from_name(name: &str) -> Option<Self> {
		if let Some(builtin) = Self::builtin(name) {
			return Some(builtin);
		}
		let named = name.strip_prefix('@')?;
		if named.is_empty() || !named.chars().all(|ch| ch.is_alphanumeric() || ch == '_') {
			return None;
		}
		// `@int` or `@Size` would shadow a built-in atom.
		if Self::builtin(named).is_some() || SemanticKind::from_name(named).is_some() {
			return None;
		}
		Some(Self::Named(named.into()))
	}

	fn builtin(name: &str) -> Option<Self> {
		let nominal = match name {
			"None" | "NoneType" => Self::None,
			"bool" => Self::Bool,
			"int" => Self::Int,
			"float" => Self::Float,
			"Real" => Self::Real,
			"str" => Self::Str,
			"bytes" => Self::Bytes,
			"Sequence" => Self::Sequence,
			"Mapping" => Self::Mapping,
			_ => return None,
		};
		Some(nominal)
	}
}

impl fmt::Display for Nominal {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Named(name) => write!(f, "@{name}"),
			other => f.write_str(other.name()),
		}
	}
}

/// Named composite constraint with a fixed shape and range rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SemanticKind {
	/// Integer `>= 0`.
	PositiveInt,
	/// Two real numbers.
	Coordinate,
	/// Two real numbers, each `>= 0`.
	Size,
	/// Four real numbers, each in `[0, 1]`.
	ColorRGBA,
}

impl SemanticKind {
	/// Every semantic kind, in declaration order.
	pub const ALL: [Self; 4] = [Self::PositiveInt, Self::Coordinate, Self::Size, Self::ColorRGBA];

	/// Display name used in diagnostics and accepted by the parser.
	pub fn name(self) -> &'static str {
		match self {
			Self::PositiveInt => "PositiveInt",
			Self::Coordinate => "Coordinate",
			Self::Size => "Size",
			Self::ColorRGBA => "ColorRGBA",
		}
	}

	fn from_name(name: &str) -> Option<Self> {
		Self::ALL.into_iter().find(|kind| kind.name() == name)
	}
}

/// Expected type of a validated value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeDescriptor {
	/// Nominal membership check.
	Plain(Nominal),
	/// Semantic shape and range check.
	Semantic(SemanticKind),
	/// One of several alternatives.
	Union(UnionDescriptor),
}

/// Ordered alternatives, optionally admitting absence.
///
/// Alternatives never contain `None` or nested unions; absence is carried by `nullable`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UnionDescriptor {
	alternatives: Vec<TypeDescriptor>,
	nullable: bool,
}

impl UnionDescriptor {
	/// Non-null alternatives in declaration order.
	pub fn alternatives(&self) -> &[TypeDescriptor] {
		&self.alternatives
	}

	/// Whether absence is an accepted alternative.
	pub fn nullable(&self) -> bool {
		self.nullable
	}

	/// Names of every candidate, `None` last when nullable.
	pub fn candidate_names(&self) -> Vec<String> {
		let mut names: Vec<String> = self.alternatives.iter().map(ToString::to_string).collect();
		if self.nullable {
			names.push(Nominal::None.name().to_owned());
		}
		names
	}
}

impl TypeDescriptor {
	/// Plain descriptor for a record type name.
	pub fn named(type_name: impl Into<Box<str>>) -> Self {
		Self::Plain(Nominal::Named(type_name.into()))
	}

	/// Build a union from alternatives. Nested unions are flattened, duplicates dropped, and a
	/// `None` alternative makes the union nullable.
	pub fn union(alternatives: impl IntoIterator<Item = TypeDescriptor>) -> Result<Self, DescriptorError> {
		Self::union_with(alternatives, false)
	}

	/// Like [`TypeDescriptor::union`], additionally admitting absence when `nullable` is set.
	pub fn union_with(alternatives: impl IntoIterator<Item = TypeDescriptor>, nullable: bool) -> Result<Self, DescriptorError> {
		let mut out = UnionDescriptor {
			alternatives: Vec::new(),
			nullable,
		};
		let mut seen_any = false;
		for alternative in alternatives {
			seen_any = true;
			push_flattened(&mut out, alternative);
		}
		if !seen_any && !nullable {
			return Err(DescriptorError::EmptyUnion);
		}
		Ok(Self::Union(out))
	}

	/// `inner | None`.
	pub fn optional(inner: TypeDescriptor) -> Self {
		let mut out = UnionDescriptor {
			alternatives: Vec::new(),
			nullable: true,
		};
		push_flattened(&mut out, inner);
		Self::Union(out)
	}

	/// True for the plain `None` descriptor.
	pub fn is_none(&self) -> bool {
		matches!(self, Self::Plain(Nominal::None))
	}
}

fn push_flattened(out: &mut UnionDescriptor, alternative: TypeDescriptor) {
	match alternative {
		TypeDescriptor::Plain(Nominal::None) => out.nullable = true,
		TypeDescriptor::Union(inner) => {
			out.nullable |= inner.nullable;
			for item in inner.alternatives {
				push_flattened(out, item);
			}
		}
		other => {
			if !out.alternatives.contains(&other) {
				out.alternatives.push(other);
			}
		}
	}
}

impl From<Nominal> for TypeDescriptor {
	fn from(nominal: Nominal) -> Self {
		Self::Plain(nominal)
	}
}

impl From<SemanticKind> for TypeDescriptor {
	fn from(kind: SemanticKind) -> Self {
		Self::Semantic(kind)
	}
}

impl fmt::Display for TypeDescriptor {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Plain(nominal) => write!(f, "{nominal}"),
			Self::Semantic(kind) => f.write_str(kind.name()),
			Self::Union(union) => f.write_str(&union.candidate_names().join(" | ")),
		}
	}
}

impl FromStr for TypeDescriptor {
	type Err = DescriptorError;

	/// Parse `atom ('|' atom)*`, for example `PositiveInt | None` or `@Camera | Size`.
	fn from_str(input: &str) -> Result<Self, Self::Err> {
		if input.trim().is_empty() {
			return Err(DescriptorError::Empty);
		}

		let mut atoms = Vec::new();
		for (position, raw) in input.split('|').enumerate() {
			let name = raw.trim();
			if name.is_empty() {
				return Err(DescriptorError::EmptyAlternative { position });
			}
			atoms.push(parse_atom(name)?);
		}

		if atoms.len() == 1 {
			return Ok(atoms.remove(0));
		}
		Self::union(atoms)
	}
}

fn parse_atom(name: &str) -> Result<TypeDescriptor, DescriptorError> {
	if let Some(kind) = SemanticKind::from_name(name) {
		return Ok(TypeDescriptor::Semantic(kind));
	}
	Nominal::from_name(name)
		.map(TypeDescriptor::Plain)
		.ok_or_else(|| DescriptorError::UnknownType { name: name.to_owned() })
}

#[cfg(test)]
mod tests;
