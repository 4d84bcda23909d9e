use std::path::PathBuf;

use paramcheck::check::{TypeDescriptor, ValidationRequest, Value, validate_all};

use crate::cmd::error::CliError;
use crate::cmd::util::{OutcomeJson, emit_json, parse_descriptor, print_outcome, read_json};

#[derive(clap::Args)]
pub struct Args {
	/// JSON file holding an array of `{ "name", "type", "value" }` entries.
	pub file: PathBuf,
	#[arg(long)]
	pub json: bool,
}

#[derive(serde::Deserialize)]
struct BatchEntry {
	name: String,
	#[serde(rename = "type")]
	type_expr: String,
	#[serde(default)]
	value: serde_json::Value,
}

/// Validate every entry of a batch file in order, stopping at the first rejection.
pub fn run(args: Args) -> Result<(), CliError> {
	let Args { file: path, json } = args;

	let entries: Vec<BatchEntry> = serde_json::from_value(read_json(&path)?)?;

	// Every type expression must parse before any value is checked.
	let prepared = entries
		.iter()
		.map(|entry| -> Result<(TypeDescriptor, Value), CliError> {
			Ok((parse_descriptor(&entry.name, &entry.type_expr)?, Value::from_json(&entry.value)))
		})
		.collect::<Result<Vec<_>, _>>()?;

	let result = validate_all(
		entries
			.iter()
			.zip(&prepared)
			.map(|(entry, (descriptor, value))| ValidationRequest::new(&entry.name, value, descriptor)),
	);

	if json {
		emit_json(&BatchJson {
			path: path.display().to_string(),
			requests: entries.len(),
			outcome: OutcomeJson::from_result(&result),
		});
	} else {
		print_outcome(&format!("{} ({} requests)", path.display(), entries.len()), &result);
	}

	result.map_err(CliError::from)
}

#[derive(serde::Serialize)]
struct BatchJson {
	path: String,
	requests: usize,
	#[serde(flatten)]
	outcome: OutcomeJson,
}

#[cfg(test)]
mod tests;
