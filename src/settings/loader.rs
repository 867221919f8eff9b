use anyhow::{Result, anyhow};

use super::raw::RawConfig;
use super::resolved::ResolvedConfig;
use super::sources::build_config;
use crate::cli::CliArgs;

/// Load configuration by combining CLI arguments, config files and environment
/// variables.
pub fn load(cli: &CliArgs) -> Result<ResolvedConfig> {
	let builder = build_config(cli)?;
	let mut raw: RawConfig = builder
		.try_deserialize()
		.map_err(|err| anyhow!("failed to deserialize configuration: {err}"))?;
	raw.apply_cli_overrides(cli);
	raw.resolve(cli)
}

#[cfg(test)]
mod tests {
	use std::fs;
	use std::time::Duration;

	use clap::Parser;
	use linkpick_core::ColumnWidth;
	use serde_json::json;
	use tempfile::tempdir;

	use super::*;

	const CONFIG: &str = r#"
[picker]
entity = "Customer"
target_field = "customer"
page_size = 5
debounce_ms = 120
fetch_fields = ["territory"]

[picker.static_filters]
disabled = 0

[[picker.columns]]
key = "name"
label = "ID"
width = "25%"

[[picker.columns]]
key = "customer_name"
formatter = "upper"

[[picker.quick_filters]]
key = "customer_group"
value = "Commercial"
label = "Commercial only"

[source]
latency_ms = 10

[ui]
theme = "paper"
"#;

	#[test]
	fn config_file_and_cli_flags_are_layered() {
		let dir = tempdir().unwrap();
		let fixture = dir.path().join("records.json");
		fs::write(&fixture, r#"{"entities": {}}"#).unwrap();
		let config_path = dir.path().join("picker.toml");
		fs::write(&config_path, CONFIG).unwrap();

		let cli = CliArgs::parse_from([
			"linkpick".to_string(),
			"--no-config".to_string(),
			"--config".to_string(),
			config_path.display().to_string(),
			"--fixture".to_string(),
			fixture.display().to_string(),
			"--page-size".to_string(),
			"8".to_string(),
			"--filter".to_string(),
			"territory=India".to_string(),
		]);

		let resolved = load(&cli).unwrap();

		assert_eq!(resolved.entity, "Customer");
		assert_eq!(resolved.target_field.as_deref(), Some("customer"));
		assert_eq!(resolved.page_size, 8);
		assert_eq!(resolved.debounce, Duration::from_millis(120));
		assert!(resolved.allow_create_new);
		assert_eq!(resolved.fetch_fields, ["territory"]);
		assert_eq!(resolved.static_filters["disabled"], json!(0));
		assert_eq!(resolved.static_filters["territory"], json!("India"));
		assert_eq!(resolved.columns.len(), 2);
		assert_eq!(resolved.columns[0].label, "ID");
		assert_eq!(resolved.columns[0].width, ColumnWidth::Percent(25));
		assert_eq!(resolved.columns[1].label, "Customer Name");
		assert_eq!(resolved.columns[1].formatter.as_deref(), Some("upper"));
		assert_eq!(resolved.quick_filters[0].label, "Commercial only");
		assert_eq!(resolved.latency, Duration::from_millis(10));
		assert_eq!(resolved.theme.as_deref(), Some("paper"));
		assert_eq!(resolved.fixture, fixture);
	}

	#[test]
	fn missing_required_config_file_is_an_error() {
		let dir = tempdir().unwrap();
		let cli = CliArgs::parse_from([
			"linkpick".to_string(),
			"--no-config".to_string(),
			"--config".to_string(),
			dir.path().join("absent.toml").display().to_string(),
		]);

		assert!(load(&cli).is_err());
	}
}
