use std::path::Path;

use paramcheck::check::{TypeDescriptor, ValidationError};

use crate::cmd::error::CliError;

/// Parse a type expression, attributing failures to `name`.
pub(crate) fn parse_descriptor(name: &str, text: &str) -> Result<TypeDescriptor, CliError> {
	text.parse().map_err(|source| CliError::Descriptor {
		name: name.to_owned(),
		source,
	})
}

/// Read and parse a JSON file.
pub(crate) fn read_json(path: &Path) -> Result<serde_json::Value, CliError> {
	let source = std::fs::read_to_string(path)?;
	Ok(serde_json::from_str(&source)?)
}

/// Print a serializable payload as pretty JSON on stdout.
pub(crate) fn emit_json<T: serde::Serialize>(payload: &T) {
	match serde_json::to_string_pretty(payload) {
		Ok(text) => println!("{text}"),
		Err(err) => eprintln!("error: failed to encode json output: {err}"),
	}
}

/// Machine-readable validation outcome.
#[derive(serde::Serialize)]
pub(crate) struct OutcomeJson {
	pub(crate) ok: bool,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub(crate) kind: Option<&'static str>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub(crate) message: Option<String>,
}

impl OutcomeJson {
	pub(crate) fn from_result(result: &Result<(), ValidationError>) -> Self {
		match result {
			Ok(()) => Self {
				ok: true,
				kind: None,
				message: None,
			},
			Err(err) => Self {
				ok: false,
				kind: Some(err.kind.as_str()),
				message: Some(err.message.clone()),
			},
		}
	}
}

/// Print a one-line text outcome.
pub(crate) fn print_outcome(label: &str, result: &Result<(), ValidationError>) {
	match result {
		Ok(()) => println!("ok: {label}"),
		Err(err) => {
			println!("rejected: {label} ({})", err.kind.as_str());
			for line in err.message.lines() {
				println!("  {line}");
			}
		}
	}
}
