use std::path::PathBuf;

use clap::Parser;
use linkpick_core::ColumnWidth;
use serde_json::json;

use super::picker::ColumnSection;
use super::{RawConfig, resolve_column};
use crate::cli::CliArgs;

#[test]
fn cli_overrides_take_precedence() {
	let cli = CliArgs::parse_from([
		"linkpick",
		"--entity",
		"Supplier",
		"--target-field",
		"supplier",
		"--fixture",
		"/tmp/suppliers.json",
		"--latency-ms",
		"40",
		"--query",
		"acme",
		"--page-size",
		"3",
		"--debounce-ms",
		"50",
		"--allow-create-new",
		"false",
		"--columns",
		"name,supplier_group",
		"--filter",
		"disabled=0",
		"--title",
		"Choose a supplier",
		"--theme",
		"paper",
	]);

	let mut config = RawConfig::default();
	config.picker.entity = Some("Customer".into());
	config.picker.page_size = Some(20);
	config.apply_cli_overrides(&cli);

	assert_eq!(config.picker.entity.as_deref(), Some("Supplier"));
	assert_eq!(config.picker.target_field.as_deref(), Some("supplier"));
	assert_eq!(config.picker.page_size, Some(3));
	assert_eq!(config.picker.debounce_ms, Some(50));
	assert_eq!(config.picker.allow_create_new, Some(false));
	assert_eq!(config.picker.prefill.as_deref(), Some("acme"));
	let columns = config.picker.columns.as_ref().unwrap();
	assert_eq!(columns.len(), 2);
	assert_eq!(columns[1].key, "supplier_group");
	assert_eq!(
		config.picker.static_filters.as_ref().unwrap()["disabled"],
		json!(0)
	);
	assert_eq!(
		config.source.fixture,
		Some(PathBuf::from("/tmp/suppliers.json"))
	);
	assert_eq!(config.source.latency_ms, Some(40));
	assert_eq!(config.ui.theme.as_deref(), Some("paper"));
	assert_eq!(config.ui.title.as_deref(), Some("Choose a supplier"));
}

#[test]
fn missing_fixture_is_reported_with_its_key() {
	let cli = CliArgs::parse_from(["linkpick", "--entity", "Customer"]);
	let mut config = RawConfig::default();
	config.apply_cli_overrides(&cli);

	let err = config.resolve(&cli).unwrap_err();

	assert!(err.to_string().contains("source.fixture"));
}

#[test]
fn column_widths_are_parsed_and_labels_derived() {
	let column = resolve_column(ColumnSection {
		key: " customer_name ".into(),
		width: Some("12".into()),
		..ColumnSection::default()
	})
	.unwrap();
	assert_eq!(column.key, "customer_name");
	assert_eq!(column.label, "Customer Name");
	assert_eq!(column.width, ColumnWidth::Fixed(12));

	let err = resolve_column(ColumnSection {
		key: "name".into(),
		width: Some("wide".into()),
		..ColumnSection::default()
	})
	.unwrap_err();
	assert_eq!(err.key, "picker.columns");
	assert!(err.to_string().contains("value: wide"));
}
