use std::sync::Arc;

use anyhow::{Context, Result, anyhow, bail};
use linkpick_core::{
	CapturedValue, ColumnDef, CreateHookRegistry, Picker, PickerConfig, PickerOutcome, formatters,
};
use linkpick_source_fixture::FixtureSource;
use linkpick_tui::{StyleConfig, UiLabels};
use tracing::{debug, info};

use crate::settings::{ColumnSetting, ResolvedConfig};

/// Coordinates building and running the picker dialog.
pub(crate) struct PickWorkflow {
	picker: Picker,
	labels: UiLabels,
	style: StyleConfig,
	prefill: String,
	destination: CapturedValue,
}

impl PickWorkflow {
	pub(crate) fn from_config(config: ResolvedConfig) -> Result<Self> {
		let source = FixtureSource::from_path(&config.fixture)
			.with_context(|| format!("failed to load fixture {}", config.fixture.display()))?
			.with_latency(config.latency);

		let available = source.entities();
		if !available.iter().any(|entity| entity == &config.entity) {
			bail!(
				"entity '{}' is not in fixture {} (available: {})",
				config.entity,
				config.fixture.display(),
				available.join(", ")
			);
		}

		let picker_config = picker_config(&config)?;

		let mut hooks = CreateHookRegistry::new();
		if config.allow_create_new {
			hooks.register(
				config.entity.clone(),
				Arc::new(source.create_hook(config.entity.clone())),
			)?;
		}

		let destination = CapturedValue::new();
		let picker = Picker::new(picker_config, Arc::new(source))
			.with_destination(destination.clone())
			.with_hooks(hooks);

		let labels = match &config.title {
			Some(title) => UiLabels::for_entity(&config.entity).with_title(title.clone()),
			None => UiLabels::for_entity(&config.entity),
		};
		let style = match &config.theme {
			Some(name) => linkpick_tui::style::by_name(name)
				.map(StyleConfig::with_theme)
				.ok_or_else(|| anyhow!("unknown theme '{name}'"))?,
			None => StyleConfig::default(),
		};

		Ok(Self {
			picker,
			labels,
			style,
			prefill: config.prefill,
			destination,
		})
	}

	pub(crate) fn entity(&self) -> &str {
		self.picker.config().entity()
	}

	pub(crate) fn run(self) -> Result<PickerOutcome> {
		let Self {
			picker,
			labels,
			style,
			prefill,
			destination,
		} = self;
		let outcome = linkpick_tui::run(picker, labels, style, &prefill)?;
		if let Some((field, value)) = destination.last() {
			info!(%field, %value, "value written to destination");
		} else {
			debug!(query = %outcome.query, "picker closed without a write");
		}
		Ok(outcome)
	}
}

/// Translate resolved settings into the core picker configuration.
fn picker_config(config: &ResolvedConfig) -> Result<PickerConfig> {
	let columns = config
		.columns
		.iter()
		.map(column_def)
		.collect::<Result<Vec<_>>>()?;

	let mut builder = PickerConfig::builder(config.entity.clone())
		.columns(columns)
		.fetch_fields(config.fetch_fields.iter().cloned())
		.static_filters(config.static_filters.clone())
		.allow_create_new(config.allow_create_new)
		.page_size(config.page_size)
		.debounce(config.debounce);
	if let Some(field) = &config.target_field {
		builder = builder.target_field(field.clone());
	}
	for filter in &config.quick_filters {
		builder = builder.quick_filter(filter.clone());
	}

	builder.build().context("invalid picker configuration")
}

fn column_def(setting: &ColumnSetting) -> Result<ColumnDef> {
	let column = ColumnDef::new(setting.key.clone(), setting.label.clone()).width(setting.width);
	match &setting.formatter {
		Some(name) => {
			let formatter =
				formatters::named(name).ok_or_else(|| anyhow!("unknown column formatter '{name}'"))?;
			Ok(column.with_formatter(formatter))
		}
		None => Ok(column),
	}
}

#[cfg(test)]
mod tests {
	use std::fs;
	use std::path::Path;
	use std::time::Duration;

	use linkpick_core::{ColumnWidth, Filters};
	use tempfile::tempdir;

	use super::*;

	const FIXTURE: &str = r#"{
		"entities": {
			"Customer": {
				"search_fields": ["customer_name"],
				"records": [
					{"name": "CUST-00001", "customer_name": "Acme Corp", "owner": "ops"}
				]
			}
		}
	}"#;

	fn resolved(fixture: &Path, entity: &str) -> ResolvedConfig {
		ResolvedConfig {
			entity: entity.into(),
			target_field: Some("customer".into()),
			page_size: 10,
			debounce: Duration::from_millis(150),
			allow_create_new: true,
			prefill: "acme".into(),
			fetch_fields: vec!["territory".into()],
			columns: vec![ColumnSetting {
				key: "customer_name".into(),
				label: "Customer".into(),
				width: ColumnWidth::Percent(60),
				formatter: Some("upper".into()),
			}],
			static_filters: Filters::new(),
			quick_filters: Vec::new(),
			fixture: fixture.to_path_buf(),
			latency: Duration::ZERO,
			theme: Some("paper".into()),
			title: None,
		}
	}

	#[test]
	fn workflow_builds_a_configured_picker() {
		let dir = tempdir().unwrap();
		let fixture = dir.path().join("customers.json");
		fs::write(&fixture, FIXTURE).unwrap();

		let workflow = PickWorkflow::from_config(resolved(&fixture, "Customer")).unwrap();
		let config = workflow.picker.config();

		assert_eq!(workflow.entity(), "Customer");
		assert_eq!(config.target_field(), Some("customer"));
		assert_eq!(config.page_size(), 10);
		assert_eq!(config.columns()[0].label, "Customer");
		assert!(config.columns()[0].formatter.is_some());
		assert!(config.fetch_fields().iter().any(|field| field == "territory"));
		assert_eq!(workflow.labels.title, "Select Customer");
		assert_eq!(workflow.prefill, "acme");
	}

	#[test]
	fn unknown_entity_is_rejected() {
		let dir = tempdir().unwrap();
		let fixture = dir.path().join("customers.json");
		fs::write(&fixture, FIXTURE).unwrap();

		let err = PickWorkflow::from_config(resolved(&fixture, "Supplier"))
			.err()
			.unwrap();

		assert!(err.to_string().contains("available: Customer"));
	}
}
