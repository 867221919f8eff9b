use std::collections::HashSet;

use linkpick_core::formatters;

use super::{ConfigError, ConfigSources, ResolvedConfig, SettingSource};

pub(super) fn validate(
	config: &ResolvedConfig,
	sources: &ConfigSources,
) -> Result<(), ConfigError> {
	if config.entity.trim().is_empty() {
		return Err(ConfigError::invalid(
			"picker.entity",
			config.entity.clone(),
			sources.source_for_entity(),
			"an entity type is required",
		));
	}

	if config.page_size == 0 {
		return Err(ConfigError::invalid(
			"picker.page_size",
			"0",
			sources.source_for_page_size(),
			"must be greater than zero",
		));
	}

	if !config.fixture.is_file() {
		return Err(ConfigError::invalid(
			"source.fixture",
			config.fixture.display().to_string(),
			sources.source_for_fixture(),
			"must point to a readable JSON dataset",
		));
	}

	for column in &config.columns {
		if let Some(name) = &column.formatter
			&& formatters::named(name).is_none()
		{
			return Err(ConfigError::invalid(
				"picker.columns",
				name.clone(),
				SettingSource::ConfigKey("picker.columns"),
				format!("unknown formatter, expected one of {}", formatters::NAMES.join(", ")),
			));
		}
	}

	let mut seen = HashSet::new();
	for filter in &config.quick_filters {
		if !seen.insert(filter.key.as_str()) {
			return Err(ConfigError::invalid(
				"picker.quick_filters",
				filter.key.clone(),
				SettingSource::ConfigKey("picker.quick_filters"),
				"quick filter keys must be unique",
			));
		}
	}

	if let Some(theme) = &config.theme
		&& linkpick_tui::style::by_name(theme).is_none()
	{
		return Err(ConfigError::invalid(
			"ui.theme",
			theme.clone(),
			sources.source_for_theme(),
			format!(
				"unknown theme, expected one of {}",
				linkpick_tui::style::names().join(", ")
			),
		));
	}

	Ok(())
}

#[cfg(test)]
mod tests {
	use std::path::PathBuf;
	use std::time::Duration;

	use linkpick_core::{ColumnWidth, Filters, QuickFilter};
	use serde_json::json;
	use tempfile::NamedTempFile;

	use super::super::ColumnSetting;
	use super::*;

	fn config(fixture: PathBuf) -> ResolvedConfig {
		ResolvedConfig {
			entity: "Customer".into(),
			target_field: Some("customer".into()),
			page_size: 20,
			debounce: Duration::from_millis(200),
			allow_create_new: true,
			prefill: String::new(),
			fetch_fields: Vec::new(),
			columns: Vec::new(),
			static_filters: Filters::new(),
			quick_filters: Vec::new(),
			fixture,
			latency: Duration::ZERO,
			theme: None,
			title: None,
		}
	}

	#[test]
	fn valid_configuration_passes() {
		let fixture = NamedTempFile::new().unwrap();
		let config = config(fixture.path().to_path_buf());

		assert!(validate(&config, &ConfigSources::default()).is_ok());
	}

	#[test]
	fn validation_rejects_zero_page_size() {
		let fixture = NamedTempFile::new().unwrap();
		let config = ResolvedConfig {
			page_size: 0,
			..config(fixture.path().to_path_buf())
		};
		let sources = ConfigSources {
			page_size: Some(SettingSource::CliFlag("--page-size")),
			..ConfigSources::default()
		};

		let err = validate(&config, &sources).unwrap_err();
		assert_eq!(err.key, "picker.page_size");
		let message = err.to_string();
		assert!(message.contains("value: 0"));
		assert!(message.contains("CLI flag"));
	}

	#[test]
	fn validation_rejects_missing_fixture() {
		let config = config(PathBuf::from("/definitely/not/here.json"));
		let sources = ConfigSources {
			fixture: Some(SettingSource::Environment("LINKPICK__SOURCE__FIXTURE")),
			..ConfigSources::default()
		};

		let err = validate(&config, &sources).unwrap_err();
		assert_eq!(err.key, "source.fixture");
		assert!(err.to_string().contains("environment variable"));
	}

	#[test]
	fn validation_rejects_unknown_formatter_and_theme() {
		let fixture = NamedTempFile::new().unwrap();
		let mut bad_formatter = config(fixture.path().to_path_buf());
		bad_formatter.columns.push(ColumnSetting {
			key: "name".into(),
			label: "Name".into(),
			width: ColumnWidth::Auto,
			formatter: Some("sparkle".into()),
		});
		let err = validate(&bad_formatter, &ConfigSources::default()).unwrap_err();
		assert_eq!(err.key, "picker.columns");

		let bad_theme = ResolvedConfig {
			theme: Some("neon".into()),
			..config(fixture.path().to_path_buf())
		};
		let err = validate(&bad_theme, &ConfigSources::default()).unwrap_err();
		assert_eq!(err.key, "ui.theme");
		assert!(err.to_string().contains("ui.theme"));
	}

	#[test]
	fn validation_rejects_duplicate_quick_filters() {
		let fixture = NamedTempFile::new().unwrap();
		let mut config = config(fixture.path().to_path_buf());
		config.quick_filters = vec![
			QuickFilter::new("status", json!("Active"), "Active"),
			QuickFilter::new("status", json!("Closed"), "Closed"),
		];

		let err = validate(&config, &ConfigSources::default()).unwrap_err();
		assert_eq!(err.key, "picker.quick_filters");
	}
}
