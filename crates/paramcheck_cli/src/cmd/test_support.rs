use std::path::PathBuf;
use std::process::{Command, Output};
use std::sync::OnceLock;

use paramcheck_testkit::{fixture_path as shared_fixture_path, target_dir as workspace_target_dir};

static PARAMCHECK_BIN: OnceLock<PathBuf> = OnceLock::new();

pub(crate) fn fixture_path(name: &str) -> PathBuf {
	shared_fixture_path(name)
}

pub(crate) fn run_paramcheck(args: &[&str]) -> Output {
	Command::new(paramcheck_bin()).args(args).output().expect("paramcheck command executes")
}

/// Run a command expected to accept and parse its JSON stdout.
pub(crate) fn run_paramcheck_json(args: &[&str]) -> serde_json::Value {
	let output = run_paramcheck(args);
	assert!(
		output.status.success(),
		"paramcheck command failed with status={}: {}",
		output.status,
		String::from_utf8_lossy(&output.stderr)
	);
	serde_json::from_slice(&output.stdout).expect("stdout should be valid json")
}

/// Run a command expected to reject its input; the JSON outcome is still printed on stdout.
pub(crate) fn run_paramcheck_json_rejected(args: &[&str]) -> serde_json::Value {
	let output = run_paramcheck(args);
	assert_eq!(output.status.code(), Some(1), "rejection should exit with status 1");
	serde_json::from_slice(&output.stdout).expect("stdout should be valid json")
}

fn paramcheck_bin() -> &'static PathBuf {
	PARAMCHECK_BIN.get_or_init(resolve_paramcheck_bin)
}

fn resolve_paramcheck_bin() -> PathBuf {
	if let Ok(path) = std::env::var("CARGO_BIN_EXE_paramcheck") {
		return PathBuf::from(path);
	}

	let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
	let target_dir = workspace_target_dir();

	let mut bin = target_dir.join("debug");
	bin.push(if cfg!(windows) { "paramcheck.exe" } else { "paramcheck" });

	let status = Command::new("cargo")
		.current_dir(&manifest_dir)
		.args(["build", "--quiet", "--bin", "paramcheck"])
		.status()
		.expect("cargo build executes");
	assert!(status.success(), "failed to build paramcheck binary at {}", bin.display());

	bin
}
