use crate::check::{Result, UnionDescriptor, ValidationError, Value, validate};

/// Resolve `value` against the alternatives of `union`.
///
/// The first accepting branch wins. Type mismatches only rule a branch out, while value
/// violations are kept and reported together when no branch accepts.
pub(crate) fn check_union(name: &str, value: &Value, union: &UnionDescriptor) -> Result<()> {
	if value.is_absent() {
		if union.nullable() {
			return Ok(());
		}
		return Err(ValidationError::type_mismatch(format!(
			"Invalid type for {name}. Expected {}, got {}.",
			union_label(union),
			value.type_name()
		)));
	}

	let mut violations = Vec::new();
	for branch in union.alternatives() {
		match validate(name, value, branch) {
			Ok(()) => return Ok(()),
			Err(err) if err.is_value_violation() => violations.push(format!("  [{branch}] {}", err.message)),
			Err(_) => {}
		}
	}

	if violations.is_empty() {
		return Err(ValidationError::type_mismatch(format!(
			"Invalid type for {name}. Expected one of ({}), got {}.",
			union.candidate_names().join(", "),
			value.type_name()
		)));
	}

	tracing::debug!(field = name, branches = violations.len(), "union rejected with value violations");
	Err(ValidationError::value_violation(format!(
		"Invalid value for {name}. No alternative of {} accepted the value:\n{}",
		union_label(union),
		violations.join("\n")
	)))
}

fn union_label(union: &UnionDescriptor) -> String {
	union.candidate_names().join(" | ")
}
