use crate::cmd::test_support::{fixture_path, run_paramcheck, run_paramcheck_json, run_paramcheck_json_rejected};

#[test]
fn batch_json_accepts_window_style_parameters() {
	let fixture = fixture_path("batch_ok.json");
	let fixture = fixture.to_string_lossy().into_owned();
	let json = run_paramcheck_json(&["batch", &fixture, "--json"]);

	assert_eq!(json["ok"], true);
	assert_eq!(json["requests"], 4);
}

#[test]
fn batch_reports_only_the_first_failure() {
	let fixture = fixture_path("batch_invalid_size.json");
	let fixture = fixture.to_string_lossy().into_owned();
	let json = run_paramcheck_json_rejected(&["batch", &fixture, "--json"]);

	assert_eq!(json["kind"], "value_violation");
	let message = json["message"].as_str().expect("message is a string");
	assert!(message.contains("'size'"), "message: {message}");
	assert!(!message.contains("max_fps"), "later entries must not be reported: {message}");
}

#[test]
fn batch_parses_all_types_before_validating() {
	let fixture = fixture_path("batch_unknown_type.json");
	let fixture = fixture.to_string_lossy().into_owned();
	let output = run_paramcheck(&["batch", &fixture, "--json"]);

	assert!(!output.status.success(), "unknown type must fail");
	assert!(output.stdout.is_empty(), "nothing is validated when a type is unknown");
	let stderr = String::from_utf8_lossy(&output.stderr);
	assert!(stderr.contains("invalid type for origin"), "stderr: {stderr}");
}
