use linkpick_core::Filters;
use serde::Deserialize;
use serde_json::Value;

use crate::cli::CliArgs;

/// `[picker]` table as read from disk.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct PickerSection {
	pub(super) entity: Option<String>,
	pub(super) target_field: Option<String>,
	pub(super) page_size: Option<usize>,
	pub(super) debounce_ms: Option<u64>,
	pub(super) allow_create_new: Option<bool>,
	pub(super) prefill: Option<String>,
	pub(super) fetch_fields: Option<Vec<String>>,
	pub(super) columns: Option<Vec<ColumnSection>>,
	pub(super) static_filters: Option<Filters>,
	pub(super) quick_filters: Option<Vec<QuickFilterSection>>,
}

/// One `[[picker.columns]]` entry.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(crate) struct ColumnSection {
	pub(crate) key: String,
	pub(crate) label: Option<String>,
	pub(crate) width: Option<String>,
	pub(crate) formatter: Option<String>,
}

/// One `[[picker.quick_filters]]` entry.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct QuickFilterSection {
	pub(crate) key: String,
	pub(crate) value: Value,
	#[serde(default)]
	pub(crate) label: Option<String>,
}

impl PickerSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(entity) = cli.entity.clone() {
			self.entity = Some(entity);
		}
		if let Some(field) = cli.target_field.clone() {
			self.target_field = Some(field);
		}
		if let Some(value) = cli.page_size {
			self.page_size = Some(value);
		}
		if let Some(value) = cli.debounce_ms {
			self.debounce_ms = Some(value);
		}
		if let Some(value) = cli.allow_create_new {
			self.allow_create_new = Some(value);
		}
		if let Some(prefill) = cli.prefill.clone() {
			self.prefill = Some(prefill);
		}
		if let Some(keys) = &cli.columns {
			self.columns = Some(
				keys.iter()
					.map(|key| ColumnSection {
						key: key.clone(),
						..ColumnSection::default()
					})
					.collect(),
			);
		}
		if !cli.filters.is_empty() {
			let filters = self.static_filters.get_or_insert_with(Filters::new);
			for filter in &cli.filters {
				filters.insert(filter.key.clone(), filter.value.clone());
			}
		}
	}
}
