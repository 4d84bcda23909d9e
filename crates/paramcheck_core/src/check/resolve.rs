use crate::check::semantic::check_semantic;
use crate::check::union::check_union;
use crate::check::{Nominal, Result, TypeDescriptor, ValidationError, Value};

/// Validate one named value against `descriptor`.
///
/// `name` only labels diagnostics. Unions are resolved by trying alternatives in order, semantic
/// kinds run their shape then range checks, and plain descriptors test nominal membership.
pub fn validate(name: &str, value: &Value, descriptor: &TypeDescriptor) -> Result<()> {
	match descriptor {
		TypeDescriptor::Union(union) => check_union(name, value, union),
		TypeDescriptor::Semantic(kind) => check_semantic(name, value, *kind),
		TypeDescriptor::Plain(nominal) => check_plain(name, value, nominal),
	}
}

fn check_plain(name: &str, value: &Value, nominal: &Nominal) -> Result<()> {
	if nominal.admits(value) {
		return Ok(());
	}
	Err(ValidationError::type_mismatch(format!(
		"Invalid type for {name}. Expected {nominal}, got {}.",
		value.type_name()
	)))
}
