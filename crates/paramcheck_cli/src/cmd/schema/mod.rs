use std::path::PathBuf;

use paramcheck::check::{ParamSchema, RecordValue};

use crate::cmd::error::CliError;
use crate::cmd::util::{OutcomeJson, emit_json, print_outcome, read_json};

/// Built-in parameter tables.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum Preset {
	/// Window construction parameters.
	Window,
}

impl Preset {
	fn schema(self) -> ParamSchema {
		match self {
			Self::Window => ParamSchema::window(),
		}
	}
}

#[derive(clap::Args)]
pub struct Args {
	/// JSON file holding an object of keyword arguments.
	pub file: PathBuf,
	#[arg(long, value_enum, default_value_t = Preset::Window)]
	pub preset: Preset,
	#[arg(long)]
	pub json: bool,
}

/// Resolve keyword arguments against a preset schema and print the resolved parameters.
pub fn run(args: Args) -> Result<(), CliError> {
	let Args { file: path, preset, json } = args;

	let schema = preset.schema();
	let input = read_json(&path)?;
	let object = input
		.as_object()
		.ok_or_else(|| CliError::Input(format!("{} must hold a JSON object of arguments", path.display())))?;

	let resolved = schema.resolve(&RecordValue::from_json_object(object));
	let result = resolved.as_ref().map(|_| ()).map_err(Clone::clone);

	if json {
		emit_json(&SchemaJson {
			schema: schema.name.to_string(),
			params: resolved.as_ref().ok().map(RecordValue::to_json),
			outcome: OutcomeJson::from_result(&result),
		});
	} else {
		print_outcome(&schema.name, &result);
		if let Ok(record) = &resolved {
			for field in &record.fields {
				println!("  {} = {}", field.name, field.value);
			}
		}
	}

	result.map_err(CliError::from)
}

#[derive(serde::Serialize)]
struct SchemaJson {
	schema: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	params: Option<serde_json::Value>,
	#[serde(flatten)]
	outcome: OutcomeJson,
}
