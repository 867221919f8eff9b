use std::path::PathBuf;
use std::time::Duration;

use linkpick_core::{ColumnWidth, Filters, QuickFilter};

mod errors;
mod sources;
mod summary;
mod validation;

pub(crate) use errors::ConfigError;
pub(crate) use sources::{ConfigSources, SettingSource};

/// A configured results column. The formatter is kept by name and attached
/// when the picker is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSetting {
	pub key: String,
	pub label: String,
	pub width: ColumnWidth,
	pub formatter: Option<String>,
}

/// Application-ready configuration derived from user input, config files and
/// sensible defaults.
#[derive(Debug)]
pub struct ResolvedConfig {
	pub entity: String,
	pub target_field: Option<String>,
	pub page_size: usize,
	pub debounce: Duration,
	pub allow_create_new: bool,
	pub prefill: String,
	pub fetch_fields: Vec<String>,
	/// Empty means the picker's default columns.
	pub columns: Vec<ColumnSetting>,
	pub static_filters: Filters,
	pub quick_filters: Vec<QuickFilter>,
	pub fixture: PathBuf,
	pub latency: Duration,
	pub theme: Option<String>,
	pub title: Option<String>,
}

impl ResolvedConfig {
	pub(super) fn validate(&self, sources: &ConfigSources) -> Result<(), ConfigError> {
		validation::validate(self, sources)
	}

	/// Print a human readable summary of the effective configuration.
	pub fn print_summary(&self) {
		summary::print_summary(self);
	}
}
