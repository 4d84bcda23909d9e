use paramcheck::check::{DescriptorError, ValidationError};
use thiserror::Error;

/// Failures surfaced by the command-line front end.
#[derive(Debug, Error)]
pub enum CliError {
	/// Filesystem read failure.
	#[error("io: {0}")]
	Io(#[from] std::io::Error),
	/// Input was not valid JSON or had the wrong layout.
	#[error("json: {0}")]
	Json(#[from] serde_json::Error),
	/// A type expression could not be parsed.
	#[error("invalid type for {name}: {source}")]
	Descriptor {
		/// Parameter whose type expression failed.
		name: String,
		/// Parser failure.
		source: DescriptorError,
	},
	/// A value was rejected.
	#[error("{0}")]
	Validation(#[from] ValidationError),
	/// Input parsed but did not have the expected shape.
	#[error("invalid input: {0}")]
	Input(String),
}
