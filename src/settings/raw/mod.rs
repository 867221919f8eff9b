use std::env;
use std::time::Duration;

use anyhow::{Error, Result};
use linkpick_core::{ColumnWidth, DEFAULT_DEBOUNCE, DEFAULT_PAGE_SIZE, QuickFilter};
use serde::Deserialize;

use crate::cli::CliArgs;

use super::resolved::{ColumnSetting, ConfigError, ConfigSources, ResolvedConfig, SettingSource};
use super::util::{label_for_key, sanitize_fields};

mod picker;
mod source;
mod ui;

use picker::{ColumnSection, PickerSection, QuickFilterSection};
use source::SourceSection;
use ui::UiSection;

/// Mirror of the configuration file representation before CLI overrides and
/// validation are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
	picker: PickerSection,
	source: SourceSection,
	ui: UiSection,
}

impl RawConfig {
	/// Apply CLI overrides on top of the raw configuration values.
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		self.picker.apply_cli_overrides(cli);
		self.source.apply_cli_overrides(cli);
		self.ui.apply_cli_overrides(cli);
	}

	/// Convert the raw configuration into a [`ResolvedConfig`], validating and
	/// filling defaults where required.
	pub(super) fn resolve(self, cli: &CliArgs) -> Result<ResolvedConfig> {
		let sources = ConfigSources {
			entity: detect_source(
				cli.entity.is_some(),
				self.picker.entity.is_some(),
				"LINKPICK__PICKER__ENTITY",
				"--entity",
				"picker.entity",
			),
			page_size: detect_source(
				cli.page_size.is_some(),
				self.picker.page_size.is_some(),
				"LINKPICK__PICKER__PAGE_SIZE",
				"--page-size",
				"picker.page_size",
			),
			fixture: detect_source(
				cli.fixture.is_some(),
				self.source.fixture.is_some(),
				"LINKPICK__SOURCE__FIXTURE",
				"--fixture",
				"source.fixture",
			),
			theme: detect_source(
				cli.theme.is_some(),
				self.ui.theme.is_some(),
				"LINKPICK__UI__THEME",
				"--theme",
				"ui.theme",
			),
		};

		let Some(fixture) = self.source.resolve_fixture()? else {
			return Err(Error::new(ConfigError::invalid(
				"source.fixture",
				"(unset)",
				sources.source_for_fixture(),
				"a JSON dataset is required; pass --fixture or set source.fixture",
			)));
		};

		let PickerSection {
			entity,
			target_field,
			page_size,
			debounce_ms,
			allow_create_new,
			prefill,
			fetch_fields,
			columns,
			static_filters,
			quick_filters,
		} = self.picker;

		let columns = columns
			.unwrap_or_default()
			.into_iter()
			.filter(|column| !column.key.trim().is_empty())
			.map(resolve_column)
			.collect::<Result<Vec<_>, _>>()
			.map_err(Error::new)?;
		let quick_filters = quick_filters
			.unwrap_or_default()
			.into_iter()
			.map(resolve_quick_filter)
			.collect();
		let (theme, title) = self.ui.finalize();

		let config = ResolvedConfig {
			entity: entity.map(|name| name.trim().to_string()).unwrap_or_default(),
			target_field: target_field
				.map(|field| field.trim().to_string())
				.filter(|field| !field.is_empty()),
			page_size: page_size.unwrap_or(DEFAULT_PAGE_SIZE),
			debounce: debounce_ms.map_or(DEFAULT_DEBOUNCE, Duration::from_millis),
			allow_create_new: allow_create_new.unwrap_or(true),
			prefill: prefill.unwrap_or_default(),
			fetch_fields: sanitize_fields(fetch_fields.unwrap_or_default()),
			columns,
			static_filters: static_filters.unwrap_or_default(),
			quick_filters,
			fixture,
			latency: Duration::from_millis(self.source.latency_ms.unwrap_or(0)),
			theme,
			title,
		};

		config.validate(&sources).map_err(Error::new)?;

		Ok(config)
	}
}

fn resolve_column(column: ColumnSection) -> Result<ColumnSetting, ConfigError> {
	let key = column.key.trim().to_string();
	let width = match column.width.as_deref() {
		Some(raw) => raw.parse::<ColumnWidth>().map_err(|err| {
			ConfigError::invalid(
				"picker.columns",
				raw,
				SettingSource::ConfigKey("picker.columns"),
				err.to_string(),
			)
		})?,
		None => ColumnWidth::Auto,
	};
	let label = column
		.label
		.filter(|label| !label.trim().is_empty())
		.unwrap_or_else(|| label_for_key(&key));
	Ok(ColumnSetting {
		key,
		label,
		width,
		formatter: column.formatter,
	})
}

fn resolve_quick_filter(filter: QuickFilterSection) -> QuickFilter {
	let key = filter.key.trim().to_string();
	let label = filter
		.label
		.filter(|label| !label.trim().is_empty())
		.unwrap_or_else(|| label_for_key(&key));
	QuickFilter::new(key, filter.value, label)
}

fn detect_source(
	cli_present: bool,
	value_present: bool,
	env_var: &'static str,
	cli_flag: &'static str,
	key: &'static str,
) -> Option<SettingSource> {
	if !value_present {
		return None;
	}

	if cli_present {
		return Some(SettingSource::CliFlag(cli_flag));
	}

	if env::var_os(env_var).is_some() {
		return Some(SettingSource::Environment(env_var));
	}

	Some(SettingSource::ConfigKey(key))
}

#[cfg(test)]
mod tests;
