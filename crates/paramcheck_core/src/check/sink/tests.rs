use crate::check::{DiagnosticSink, FilteredSink, MemorySink, Severity, ValidationError, Verbosity, report_failure};

#[test]
fn verbosity_thresholds_are_cumulative() {
	assert!(!Verbosity::None.prints(Severity::Error));
	assert!(!Verbosity::LogOnly.prints(Severity::Error));
	assert!(Verbosity::Error.prints(Severity::Error));
	assert!(!Verbosity::Error.prints(Severity::Warning));
	assert!(Verbosity::Crucial.prints(Severity::Crucial));
	assert!(!Verbosity::Crucial.prints(Severity::Info));
	assert!(Verbosity::Info.prints(Severity::Info));
	assert!(!Verbosity::Info.prints(Severity::Dev));
	assert!(Verbosity::Dev.prints(Severity::Dev));
}

#[test]
fn verbosity_labels_parse_case_insensitively() {
	assert_eq!(Verbosity::from_label("log_only"), Some(Verbosity::LogOnly));
	assert_eq!(Verbosity::from_label("WARNING"), Some(Verbosity::Warning));
	assert_eq!(Verbosity::from_label("loud"), None);
}

#[test]
fn filtered_sink_drops_quiet_messages() {
	let sink = FilteredSink::new(MemorySink::new(), Verbosity::Warning);
	sink.report(Severity::Info, "starting");
	sink.report(Severity::Warning, "vsync unavailable");
	sink.report(Severity::Error, "window failed");

	let records = sink.into_inner().records();
	let severities: Vec<Severity> = records.iter().map(|item| item.severity).collect();
	assert_eq!(severities, vec![Severity::Warning, Severity::Error]);
}

#[test]
fn report_failure_prefixes_kind_label() {
	let sink = MemorySink::new();
	report_failure(&sink, &ValidationError::value_violation("Invalid value for n."));

	let records = sink.records();
	assert_eq!(records.len(), 1);
	assert_eq!(records[0].severity, Severity::Error);
	assert_eq!(records[0].message, "value_violation: Invalid value for n.");
}

#[test]
fn memory_sink_keeps_records_after_a_panicking_holder() {
	let sink = MemorySink::new();
	sink.report(Severity::Warning, "before");

	let poisoned = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
		let _guard = sink.records.lock();
		panic!("holder panics");
	}));
	assert!(poisoned.is_err());
	assert!(sink.records.is_poisoned());

	sink.report(Severity::Error, "after");
	let messages: Vec<String> = sink.records().into_iter().map(|record| record.message).collect();
	assert_eq!(messages, ["before", "after"]);
}
