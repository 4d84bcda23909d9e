use crate::check::{
	FieldValue, Nominal, RecordValue, Result, SemanticKind, TypeDescriptor, ValidationError, ValidationRequest, Value, validate_all,
};

/// One named parameter of a [`ParamSchema`].
#[derive(Debug, Clone, PartialEq)]
pub struct ParamSpec {
	/// Parameter name, also the diagnostic label.
	pub name: Box<str>,
	/// Expected type.
	pub descriptor: TypeDescriptor,
	/// Value used when the argument is omitted. Omitted parameters without a default are `Null`.
	pub default: Option<Value>,
}

impl ParamSpec {
	/// Parameter without a default.
	pub fn required(name: impl Into<Box<str>>, descriptor: TypeDescriptor) -> Self {
		Self {
			name: name.into(),
			descriptor,
			default: None,
		}
	}

	/// Parameter with a default value.
	pub fn with_default(name: impl Into<Box<str>>, descriptor: TypeDescriptor, default: impl Into<Value>) -> Self {
		Self {
			name: name.into(),
			descriptor,
			default: Some(default.into()),
		}
	}
}

/// Ordered parameter table resolving keyword-style arguments.
#[derive(Debug, Clone, PartialEq)]
pub struct ParamSchema {
	/// Schema name, used as the resolved record's type name.
	pub name: Box<str>,
	/// Parameters in validation order.
	pub params: Vec<ParamSpec>,
}

impl ParamSchema {
	/// Create an empty schema.
	pub fn new(name: impl Into<Box<str>>) -> Self {
		Self {
			name: name.into(),
			params: Vec::new(),
		}
	}

	/// Append a parameter and return the schema.
	pub fn param(mut self, spec: ParamSpec) -> Self {
		self.params.push(spec);
		self
	}

	/// Window construction parameters.
	pub fn window() -> Self {
		let boolean = || TypeDescriptor::Plain(Nominal::Bool);
		Self::new("Window")
			.param(ParamSpec::with_default("size", TypeDescriptor::Semantic(SemanticKind::Size), [1280, 720]))
			.param(ParamSpec::with_default("caption", TypeDescriptor::Plain(Nominal::Str), "GLFW Window :)"))
			.param(ParamSpec::with_default("fullscreen", boolean(), false))
			.param(ParamSpec::with_default("resizable", boolean(), false))
			.param(ParamSpec::with_default("borderless", boolean(), false))
			.param(ParamSpec::with_default(
				"target_fps",
				TypeDescriptor::optional(TypeDescriptor::Semantic(SemanticKind::PositiveInt)),
				Value::Null,
			))
			.param(ParamSpec::with_default("vsync", boolean(), true))
	}

	/// Look up a parameter by name.
	pub fn get(&self, name: &str) -> Option<&ParamSpec> {
		self.params.iter().find(|spec| &*spec.name == name)
	}

	/// Resolve `args` into a validated record in parameter order.
	///
	/// Unknown argument names are rejected before any value is checked. Omitted parameters take
	/// their default, then every parameter is validated fail-fast in schema order.
	pub fn resolve(&self, args: &RecordValue) -> Result<RecordValue> {
		if let Some(unknown) = args.fields.iter().find(|field| self.get(&field.name).is_none()) {
			return Err(ValidationError::type_mismatch(format!(
				"Unexpected parameter '{}' for {}.",
				unknown.name, self.name
			)));
		}

		let fields: Vec<FieldValue> = self
			.params
			.iter()
			.map(|spec| FieldValue {
				name: spec.name.clone(),
				value: args.field(&spec.name).or(spec.default.as_ref()).cloned().unwrap_or(Value::Null),
			})
			.collect();

		validate_all(
			self.params
				.iter()
				.zip(&fields)
				.map(|(spec, field)| ValidationRequest::new(&spec.name, &field.value, &spec.descriptor)),
		)?;

		Ok(RecordValue {
			type_name: self.name.clone(),
			fields,
		})
	}
}
