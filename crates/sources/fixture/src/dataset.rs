use indexmap::IndexMap;
use linkpick_core::{NAME_FIELD, Record};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::FixtureError;

/// Records of every entity type in a fixture file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
	#[serde(default)]
	pub entities: IndexMap<String, EntityData>,
}

/// Records of one entity type and how they are searched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EntityData {
	/// Fields matched against the query in addition to `name`. Their values
	/// also make up the hit description.
	#[serde(default)]
	pub search_fields: Vec<String>,
	/// Prefix of generated names, e.g. `CUST` for `CUST-00001`.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub naming_prefix: Option<String>,
	#[serde(default)]
	pub records: Vec<Record>,
}

impl Dataset {
	pub fn from_json_str(json: &str, origin: &str) -> Result<Self, FixtureError> {
		let dataset: Self = serde_json::from_str(json).map_err(|source| FixtureError::Parse {
			origin: origin.to_string(),
			source,
		})?;
		dataset.validate()?;
		Ok(dataset)
	}

	fn validate(&self) -> Result<(), FixtureError> {
		for (entity, data) in &self.entities {
			if let Some(index) = data.records.iter().position(|record| record_name(record).is_none()) {
				return Err(FixtureError::MissingName {
					entity: entity.clone(),
					index,
				});
			}
		}
		Ok(())
	}
}

impl EntityData {
	pub fn find(&self, name: &str) -> Option<&Record> {
		self.records
			.iter()
			.find(|record| record_name(record) == Some(name))
	}

	/// Text the query is matched against: the name followed by every search
	/// field value.
	pub(crate) fn haystack(&self, record: &Record) -> String {
		let mut haystack = record_name(record).unwrap_or_default().to_string();
		for value in self.search_values(record) {
			haystack.push(' ');
			haystack.push_str(&value);
		}
		haystack
	}

	/// Comma-joined search field values, `None` when all are empty.
	pub(crate) fn description(&self, record: &Record) -> Option<String> {
		let values: Vec<String> = self.search_values(record).collect();
		(!values.is_empty()).then(|| values.join(", "))
	}

	fn search_values<'a>(&'a self, record: &'a Record) -> impl Iterator<Item = String> + 'a {
		self.search_fields
			.iter()
			.filter(|field| field.as_str() != NAME_FIELD)
			.filter_map(|field| record.get(field))
			.filter_map(scalar_text)
			.filter(|text| !text.is_empty())
	}
}

pub(crate) fn record_name(record: &Record) -> Option<&str> {
	record.get(NAME_FIELD).and_then(Value::as_str)
}

fn scalar_text(value: &Value) -> Option<String> {
	match value {
		Value::String(text) => Some(text.clone()),
		Value::Number(number) => Some(number.to_string()),
		Value::Bool(flag) => Some(flag.to_string()),
		_ => None,
	}
}
