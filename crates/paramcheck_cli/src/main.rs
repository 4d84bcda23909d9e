#![allow(missing_docs)]

use clap::{Parser, Subcommand};
use paramcheck::check::{TracingSink, report_failure};
use tracing_subscriber::EnvFilter;

mod cmd;

use cmd::error::CliError;

#[derive(Parser)]
#[command(name = "paramcheck", about = "Validate parameter values against type descriptors")]
struct Cli {
	/// Tracing filter directive, e.g. `debug` or `paramcheck=trace`.
	#[arg(long, global = true, default_value = "warn")]
	log_level: String,
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	/// Validate one JSON value.
	Check(cmd::check::Args),
	/// Validate a JSON file of `{ name, type, value }` entries, stopping at the first failure.
	Batch(cmd::batch::Args),
	/// Resolve keyword arguments against a parameter schema preset.
	Schema(cmd::schema::Args),
}

fn main() {
	let cli = Cli::parse();
	init_tracing(&cli.log_level);

	if let Err(err) = run(cli.command) {
		match &err {
			CliError::Validation(rejection) => report_failure(&TracingSink, rejection),
			other => eprintln!("error: {other}"),
		}
		std::process::exit(1);
	}
}

fn run(command: Commands) -> Result<(), CliError> {
	match command {
		Commands::Check(args) => cmd::check::run(args),
		Commands::Batch(args) => cmd::batch::run(args),
		Commands::Schema(args) => cmd::schema::run(args),
	}
}

fn init_tracing(level: &str) {
	let (filter, rejected) = match EnvFilter::try_new(level) {
		Ok(filter) => (filter, None),
		Err(err) => (EnvFilter::new("warn"), Some(err)),
	};
	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.with_target(false)
		.compact()
		.init();

	if let Some(err) = rejected {
		tracing::warn!(directive = level, error = %err, "invalid --log-level, falling back to warn");
	}
}
