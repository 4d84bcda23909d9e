use paramcheck::check::{Value, validate};

use crate::cmd::error::CliError;
use crate::cmd::util::{OutcomeJson, emit_json, parse_descriptor, print_outcome};

#[derive(clap::Args)]
pub struct Args {
	/// JSON literal to validate, e.g. `[0, -1]` or `"ab"`.
	#[arg(allow_hyphen_values = true)]
	pub value: String,
	/// Label used in diagnostics.
	#[arg(long, default_value = "value")]
	pub name: String,
	/// Type expression, e.g. `Size` or `PositiveInt | None`.
	#[arg(long = "type")]
	pub type_expr: String,
	#[arg(long)]
	pub json: bool,
}

/// Validate one JSON literal against a type expression.
pub fn run(args: Args) -> Result<(), CliError> {
	let Args {
		value,
		name,
		type_expr,
		json,
	} = args;

	let descriptor = parse_descriptor(&name, &type_expr)?;
	let value = Value::from_json(&serde_json::from_str(&value)?);
	let result = validate(&name, &value, &descriptor);

	if json {
		emit_json(&CheckJson {
			name: name.clone(),
			type_expr: descriptor.to_string(),
			outcome: OutcomeJson::from_result(&result),
		});
	} else {
		print_outcome(&format!("{name}: {descriptor}"), &result);
	}

	result.map_err(CliError::from)
}

#[derive(serde::Serialize)]
struct CheckJson {
	name: String,
	#[serde(rename = "type")]
	type_expr: String,
	#[serde(flatten)]
	outcome: OutcomeJson,
}
