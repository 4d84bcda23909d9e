use crate::check::{Result, SemanticKind, ValidationError, Value};

/// Fixed-arity real sequence layout shared by the tuple-shaped kinds.
struct SequenceShape {
	/// Subject used in messages, e.g. `Coordinate` or `the Color`.
	subject: &'static str,
	arity: usize,
	/// Sentence describing the required length.
	length_rule: &'static str,
}

const COORDINATE: SequenceShape = SequenceShape {
	subject: "Coordinate",
	arity: 2,
	length_rule: "Coordinate must be two numbers",
};

const SIZE: SequenceShape = SequenceShape {
	subject: "Size",
	arity: 2,
	length_rule: "Size must be two numbers",
};

const COLOR_RGBA: SequenceShape = SequenceShape {
	subject: "the Color",
	arity: 4,
	length_rule: "Color must contain four channels: Red, Green, Blue, Alpha",
};

/// Run the structural then range checks for one semantic kind.
pub(crate) fn check_semantic(name: &str, value: &Value, kind: SemanticKind) -> Result<()> {
	match kind {
		SemanticKind::PositiveInt => check_positive_int(name, value),
		SemanticKind::Coordinate => check_coordinate(name, value),
		SemanticKind::Size => check_size(name, value),
		SemanticKind::ColorRGBA => check_color_rgba(name, value),
	}
}

fn check_positive_int(name: &str, value: &Value) -> Result<()> {
	let negative = match *value {
		Value::I64(v) => v < 0,
		Value::U64(_) => false,
		_ => {
			return Err(ValidationError::type_mismatch(format!(
				"Invalid type for {name}. Expected int, got {}.",
				value.type_name()
			)));
		}
	};

	if negative {
		return Err(ValidationError::value_violation(format!(
			"Invalid value for {name}. PositiveInt numbers must be non-negative, got {value}."
		)));
	}
	Ok(())
}

fn check_coordinate(name: &str, value: &Value) -> Result<()> {
	real_sequence(name, value, &COORDINATE)?;
	Ok(())
}

fn check_size(name: &str, value: &Value) -> Result<()> {
	let items = real_sequence(name, value, &SIZE)?;
	for (idx, item) in items.iter().enumerate() {
		if !is_non_negative(item) {
			return Err(ValidationError::value_violation(format!(
				"Invalid value for Size[{idx}] '{name}'. All size numbers must be non-negative, got {item} in {value}."
			)));
		}
	}
	Ok(())
}

fn check_color_rgba(name: &str, value: &Value) -> Result<()> {
	let items = real_sequence(name, value, &COLOR_RGBA)?;
	for (idx, item) in items.iter().enumerate() {
		let in_range = item.as_f64().is_some_and(|channel| (0.0..=1.0).contains(&channel));
		if !in_range {
			return Err(ValidationError::value_violation(format!(
				"Invalid value for the Color[{idx}] '{name}'. Color numbers must be between 0 and 1 inclusive, but the value was {item}."
			)));
		}
	}
	Ok(())
}

/// Structural phase: a non-textual sequence of exactly `shape.arity` real numbers.
fn real_sequence<'v>(name: &str, value: &'v Value, shape: &SequenceShape) -> Result<&'v [Value]> {
	let subject = shape.subject;
	let items = value.as_sequence().ok_or_else(|| {
		ValidationError::type_mismatch(format!(
			"Invalid type for {subject} '{name}'. Expected Sequence, got {}.",
			value.type_name()
		))
	})?;

	if items.len() != shape.arity {
		return Err(ValidationError::type_mismatch(format!(
			"Invalid length for {subject} '{name}'. {}, got {}.",
			shape.length_rule,
			items.len()
		)));
	}

	for (idx, item) in items.iter().enumerate() {
		if !item.is_real() {
			return Err(ValidationError::type_mismatch(format!(
				"Invalid type for {subject}[{idx}] '{name}'. Expected Real, got {}.",
				item.type_name()
			)));
		}
	}
	Ok(items)
}

fn is_non_negative(item: &Value) -> bool {
	match *item {
		Value::I64(v) => v >= 0,
		Value::U64(_) => true,
		_ => item.as_f64().is_some_and(|v| v >= 0.0),
	}
}
