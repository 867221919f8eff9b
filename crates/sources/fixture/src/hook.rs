use std::sync::{Arc, RwLock};

use linkpick_core::{CreateHook, CreateRequest, HookError, NAME_FIELD, Record};
use serde_json::Value;
use tracing::info;

use crate::dataset::Dataset;

/// Creates records in a fixture dataset.
///
/// New records are named `<prefix>-<counter>` with a five digit counter. The
/// prefill text, when present, goes into the first search field.
#[derive(Debug, Clone)]
pub struct FixtureCreateHook {
	dataset: Arc<RwLock<Dataset>>,
	entity: String,
}

impl FixtureCreateHook {
	pub(crate) fn new(dataset: Arc<RwLock<Dataset>>, entity: impl Into<String>) -> Self {
		Self {
			dataset,
			entity: entity.into(),
		}
	}

	pub fn entity(&self) -> &str {
		&self.entity
	}
}

impl CreateHook for FixtureCreateHook {
	fn create(&self, request: &CreateRequest) -> Result<String, HookError> {
		let mut dataset = self
			.dataset
			.write()
			.map_err(|_| HookError::Failed("fixture dataset lock poisoned".into()))?;
		let data = dataset
			.entities
			.get_mut(&self.entity)
			.ok_or_else(|| HookError::Failed(format!("unknown entity type '{}'", self.entity)))?;

		let prefix = data
			.naming_prefix
			.clone()
			.unwrap_or_else(|| default_prefix(&self.entity));
		let name = (data.records.len() + 1..)
			.map(|counter| format!("{prefix}-{counter:05}"))
			.find(|candidate| data.find(candidate).is_none())
			.ok_or_else(|| HookError::Failed("ran out of record names".into()))?;

		let mut record = Record::new();
		record.insert(NAME_FIELD.to_string(), Value::String(name.clone()));
		let prefill = request.prefill.trim();
		if !prefill.is_empty() {
			if let Some(field) = data.search_fields.first() {
				record.insert(field.clone(), Value::String(prefill.to_string()));
			}
		}
		data.records.push(record);

		info!(entity = %self.entity, %name, "created fixture record");
		Ok(name)
	}
}

fn default_prefix(entity: &str) -> String {
	let prefix: String = entity
		.chars()
		.filter(char::is_ascii_alphanumeric)
		.take(4)
		.collect::<String>()
		.to_ascii_uppercase();
	if prefix.is_empty() {
		"REC".to_string()
	} else {
		prefix
	}
}
