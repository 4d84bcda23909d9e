use crate::check::{RecordValue, Value};

/// Record type name given to JSON objects.
pub const JSON_OBJECT_TYPE: &str = "dict";

impl Value {
	/// Convert parsed JSON into a runtime value.
	///
	/// Integers keep integer kind (`I64`, or `U64` above `i64::MAX`); objects become `dict` records.
	pub fn from_json(json: &serde_json::Value) -> Self {
		match json {
			serde_json::Value::Null => Self::Null,
			serde_json::Value::Bool(v) => Self::Bool(*v),
			serde_json::Value::Number(n) => {
				if let Some(v) = n.as_i64() {
					Self::I64(v)
				} else if let Some(v) = n.as_u64() {
					Self::U64(v)
				} else {
					Self::F64(n.as_f64().unwrap_or(f64::NAN))
				}
			}
			serde_json::Value::String(s) => Self::String(s.as_str().into()),
			serde_json::Value::Array(items) => Self::Array(items.iter().map(Self::from_json).collect()),
			serde_json::Value::Object(map) => Self::Record(RecordValue::from_json_object(map)),
		}
	}

	/// Convert back into JSON. Records become objects and lose their type name.
	pub fn to_json(&self) -> serde_json::Value {
		match self {
			Self::Null => serde_json::Value::Null,
			Self::Bool(v) => serde_json::Value::Bool(*v),
			Self::I64(v) => serde_json::Value::from(*v),
			Self::U64(v) => serde_json::Value::from(*v),
			Self::F32(v) => serde_json::Value::from(f64::from(*v)),
			Self::F64(v) => serde_json::Value::from(*v),
			Self::Bytes(v) => serde_json::Value::from(v.clone()),
			Self::String(v) => serde_json::Value::from(&**v),
			Self::Array(items) => serde_json::Value::Array(items.iter().map(Self::to_json).collect()),
			Self::Record(record) => record.to_json(),
		}
	}
}

impl RecordValue {
	/// Convert a JSON object into a `dict` record.
	pub fn from_json_object(map: &serde_json::Map<String, serde_json::Value>) -> Self {
		map.iter()
			.fold(Self::new(JSON_OBJECT_TYPE), |record, (key, item)| record.with_field(key.as_str(), Value::from_json(item)))
	}

	/// Convert into a JSON object keyed by field name.
	pub fn to_json(&self) -> serde_json::Value {
		serde_json::Value::Object(self.fields.iter().map(|field| (field.name.to_string(), field.value.to_json())).collect())
	}
}
