use crate::check::{Result, TypeDescriptor, Value, validate};

/// One `(name, value, descriptor)` triple for [`validate_all`].
#[derive(Debug, Clone, Copy)]
pub struct ValidationRequest<'a> {
	/// Diagnostic label.
	pub name: &'a str,
	/// Value under test.
	pub value: &'a Value,
	/// Expected type.
	pub descriptor: &'a TypeDescriptor,
}

impl<'a> ValidationRequest<'a> {
	/// Bundle a request.
	pub fn new(name: &'a str, value: &'a Value, descriptor: &'a TypeDescriptor) -> Self {
		Self { name, value, descriptor }
	}

	/// Validate this request alone.
	pub fn validate(&self) -> Result<()> {
		validate(self.name, self.value, self.descriptor)
	}
}

impl<'a> From<(&'a str, &'a Value, &'a TypeDescriptor)> for ValidationRequest<'a> {
	fn from((name, value, descriptor): (&'a str, &'a Value, &'a TypeDescriptor)) -> Self {
		Self::new(name, value, descriptor)
	}
}

/// Validate requests in order, returning the first rejection.
///
/// Requests after the first failure are never pulled from `requests`.
pub fn validate_all<'a, I>(requests: I) -> Result<()>
where
	I: IntoIterator,
	I::Item: Into<ValidationRequest<'a>>,
{
	for (position, request) in requests.into_iter().enumerate() {
		let request = request.into();
		if let Err(err) = request.validate() {
			tracing::debug!(position, field = request.name, kind = err.kind.as_str(), "batch validation stopped");
			return Err(err);
		}
	}
	Ok(())
}
