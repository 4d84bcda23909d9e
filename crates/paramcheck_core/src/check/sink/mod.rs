use std::sync::{Mutex, PoisonError};

use crate::check::ValidationError;

/// Level of a diagnostic message, most severe first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
	/// Failure the caller must act on.
	Error,
	/// Suspicious but recoverable condition.
	Warning,
	/// Important progress information.
	Crucial,
	/// General information.
	Info,
	/// Developer notes.
	Dev,
}

impl Severity {
	/// Stable uppercase label.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Error => "ERROR",
			Self::Warning => "WARNING",
			Self::Crucial => "CRUCIAL",
			Self::Info => "INFO",
			Self::Dev => "DEV",
		}
	}
}

/// Console threshold deciding which severities are shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Verbosity {
	/// Nothing is shown or kept.
	None,
	/// Messages are kept but not shown.
	LogOnly,
	/// Errors only.
	Error,
	/// Warnings and errors.
	#[default]
	Warning,
	/// Crucial messages, warnings, and errors.
	Crucial,
	/// Everything except developer notes.
	Info,
	/// Everything.
	Dev,
}

impl Verbosity {
	/// Whether a message of `severity` is shown at this verbosity.
	pub fn prints(self, severity: Severity) -> bool {
		let needed = match severity {
			Severity::Error => Self::Error,
			Severity::Warning => Self::Warning,
			Severity::Crucial => Self::Crucial,
			Severity::Info => Self::Info,
			Severity::Dev => Self::Dev,
		};
		self >= needed
	}

	/// Parse a case-insensitive label such as `warning` or `log_only`.
	pub fn from_label(label: &str) -> Option<Self> {
		let verbosity = match label.to_ascii_uppercase().as_str() {
			"NONE" => Self::None,
			"LOG_ONLY" => Self::LogOnly,
			"ERROR" => Self::Error,
			"WARNING" => Self::Warning,
			"CRUCIAL" => Self::Crucial,
			"INFO" => Self::Info,
			"DEV" => Self::Dev,
			_ => return None,
		};
		Some(verbosity)
	}
}

/// Receiver of leveled diagnostic messages. The engine never calls this itself.
pub trait DiagnosticSink {
	/// Accept one message.
	fn report(&self, severity: Severity, message: &str);
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for &S {
	fn report(&self, severity: Severity, message: &str) {
		(**self).report(severity, message);
	}
}

/// Sink forwarding to the `tracing` facade.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
	fn report(&self, severity: Severity, message: &str) {
		match severity {
			Severity::Error => tracing::error!("{message}"),
			Severity::Warning => tracing::warn!("{message}"),
			Severity::Crucial => tracing::info!(crucial = true, "{message}"),
			Severity::Info => tracing::info!("{message}"),
			Severity::Dev => tracing::debug!("{message}"),
		}
	}
}

/// One message captured by [`MemorySink`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
	/// Message level.
	pub severity: Severity,
	/// Message text.
	pub message: String,
}

/// Sink collecting messages in memory.
#[derive(Debug, Default)]
pub struct MemorySink {
	records: Mutex<Vec<Diagnostic>>,
}

impl MemorySink {
	/// Create an empty sink.
	pub fn new() -> Self {
		Self::default()
	}

	/// Snapshot of collected messages in arrival order.
	pub fn records(&self) -> Vec<Diagnostic> {
		self.records.lock().unwrap_or_else(PoisonError::into_inner).clone()
	}
}

impl DiagnosticSink for MemorySink {
	fn report(&self, severity: Severity, message: &str) {
		self.records.lock().unwrap_or_else(PoisonError::into_inner).push(Diagnostic {
			severity,
			message: message.to_owned(),
		});
	}
}

/// Sink wrapper dropping messages the verbosity would not show.
#[derive(Debug)]
pub struct FilteredSink<S> {
	inner: S,
	verbosity: Verbosity,
}

impl<S: DiagnosticSink> FilteredSink<S> {
	/// Wrap `inner` with a verbosity threshold.
	pub fn new(inner: S, verbosity: Verbosity) -> Self {
		Self { inner, verbosity }
	}

	/// Active threshold.
	pub fn verbosity(&self) -> Verbosity {
		self.verbosity
	}

	/// Unwrap the inner sink.
	pub fn into_inner(self) -> S {
		self.inner
	}
}

impl<S: DiagnosticSink> DiagnosticSink for FilteredSink<S> {
	fn report(&self, severity: Severity, message: &str) {
		if self.verbosity.prints(severity) {
			self.inner.report(severity, message);
		}
	}
}

/// Report a validation failure at [`Severity::Error`], prefixed with its kind label.
pub fn report_failure(sink: &impl DiagnosticSink, err: &ValidationError) {
	sink.report(Severity::Error, &format!("{}: {}", err.kind.as_str(), err.message));
}

#[cfg(test)]
mod tests;
