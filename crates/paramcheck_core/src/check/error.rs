use thiserror::Error;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, ValidationError>;

/// Classification of a rejected value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
	/// The value's shape or kind does not match the descriptor.
	TypeMismatch,
	/// The shape matched but the content breaks a range rule.
	ValueViolation,
}

impl ErrorKind {
	/// Stable snake-case label.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::TypeMismatch => "type_mismatch",
			Self::ValueViolation => "value_violation",
		}
	}
}

/// Rejection produced by [`validate`](crate::check::validate) and friends.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
	/// Failure classification.
	pub kind: ErrorKind,
	/// Human-readable diagnostic naming the field, the expectation, and what was observed.
	pub message: String,
}

impl ValidationError {
	/// Build a [`ErrorKind::TypeMismatch`] error.
	pub fn type_mismatch(message: impl Into<String>) -> Self {
		Self {
			kind: ErrorKind::TypeMismatch,
			message: message.into(),
		}
	}

	/// Build a [`ErrorKind::ValueViolation`] error.
	pub fn value_violation(message: impl Into<String>) -> Self {
		Self {
			kind: ErrorKind::ValueViolation,
			message: message.into(),
		}
	}

	/// True when the value had the wrong shape.
	pub fn is_type_mismatch(&self) -> bool {
		self.kind == ErrorKind::TypeMismatch
	}

	/// True when the value had the right shape but illegal content.
	pub fn is_value_violation(&self) -> bool {
		self.kind == ErrorKind::ValueViolation
	}
}

/// Malformed descriptor text or construction. A configuration fault, never a validation outcome.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DescriptorError {
	/// Descriptor text was empty or whitespace.
	#[error("empty type descriptor")]
	Empty,
	/// Descriptor text named a type that does not exist.
	#[error("unknown type name: {name}")]
	UnknownType {
		/// Offending type name as written.
		name: String,
	},
	/// A `|` separator had nothing on one side.
	#[error("empty union alternative at position {position}")]
	EmptyAlternative {
		/// Zero-based alternative position.
		position: usize,
	},
	/// A union was built with no alternatives.
	#[error("union must have at least one alternative")]
	EmptyUnion,
}
