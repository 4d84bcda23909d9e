mod batch;
mod descriptor;
mod error;
mod json;
mod resolve;
mod schema;
mod semantic;
mod sink;
mod union;
mod value;

/// Batch request type and fail-fast runner.
pub use batch::{ValidationRequest, validate_all};
/// Type descriptor model and text parser.
pub use descriptor::{Nominal, SemanticKind, TypeDescriptor, UnionDescriptor};
/// Error and result aliases.
pub use error::{DescriptorError, ErrorKind, Result, ValidationError};
/// Record type name given to JSON objects.
pub use json::JSON_OBJECT_TYPE;
/// Single-value entry point.
pub use resolve::validate;
/// Parameter tables resolving keyword-style arguments.
pub use schema::{ParamSchema, ParamSpec};
/// Leveled diagnostic sinks.
pub use sink::{Diagnostic, DiagnosticSink, FilteredSink, MemorySink, Severity, TracingSink, Verbosity, report_failure};
/// Runtime value types.
pub use value::{FieldValue, RecordValue, Value};
