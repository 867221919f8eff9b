use super::ResolvedConfig;

pub(super) fn print_summary(config: &ResolvedConfig) {
	for line in summary_lines(config) {
		println!("{line}");
	}
}

fn summary_lines(config: &ResolvedConfig) -> Vec<String> {
	let mut lines = vec![
		"Effective configuration:".to_string(),
		format!("  Entity: {}", config.entity),
		format!(
			"  Target field: {}",
			config.target_field.as_deref().unwrap_or("(none, commit disabled)")
		),
		format!("  Page size: {}", config.page_size),
		format!("  Debounce: {} ms", config.debounce.as_millis()),
		format!("  Create new: {}", bool_to_word(config.allow_create_new)),
	];
	if !config.prefill.is_empty() {
		lines.push(format!("  Initial query: {}", config.prefill));
	}
	if !config.fetch_fields.is_empty() {
		lines.push(format!("  Extra fields: {}", config.fetch_fields.join(", ")));
	}
	if config.columns.is_empty() {
		lines.push("  Columns: (defaults)".to_string());
	} else {
		let columns: Vec<String> = config
			.columns
			.iter()
			.map(|column| match &column.formatter {
				Some(formatter) => format!("{} [{}, {formatter}]", column.key, column.width),
				None => format!("{} [{}]", column.key, column.width),
			})
			.collect();
		lines.push(format!("  Columns: {}", columns.join(", ")));
	}
	for (key, value) in &config.static_filters {
		lines.push(format!("  Filter: {key} = {value}"));
	}
	for filter in &config.quick_filters {
		lines.push(format!(
			"  Quick filter: {} ({} = {})",
			filter.label, filter.key, filter.value
		));
	}
	lines.push(format!("  Fixture: {}", config.fixture.display()));
	if !config.latency.is_zero() {
		lines.push(format!("  Latency: {} ms", config.latency.as_millis()));
	}
	lines.push(format!(
		"  UI theme: {}",
		config.theme.as_deref().unwrap_or("(use the library default)")
	));
	if let Some(title) = &config.title {
		lines.push(format!("  Title: {title}"));
	}
	lines
}

fn bool_to_word(value: bool) -> &'static str {
	if value { "yes" } else { "no" }
}

#[cfg(test)]
mod tests {
	use std::path::PathBuf;
	use std::time::Duration;

	use linkpick_core::{ColumnWidth, Filters};
	use serde_json::json;

	use super::super::ColumnSetting;
	use super::*;

	#[test]
	fn bool_to_word_matches_expectations() {
		assert_eq!(bool_to_word(true), "yes");
		assert_eq!(bool_to_word(false), "no");
	}

	#[test]
	fn summary_lists_columns_and_filters() {
		let mut static_filters = Filters::new();
		static_filters.insert("disabled".into(), json!(0));
		let config = ResolvedConfig {
			entity: "Customer".into(),
			target_field: None,
			page_size: 20,
			debounce: Duration::from_millis(200),
			allow_create_new: false,
			prefill: "acme".into(),
			fetch_fields: Vec::new(),
			columns: vec![ColumnSetting {
				key: "name".into(),
				label: "ID".into(),
				width: ColumnWidth::Percent(30),
				formatter: Some("upper".into()),
			}],
			static_filters,
			quick_filters: Vec::new(),
			fixture: PathBuf::from("/tmp/customers.json"),
			latency: Duration::ZERO,
			theme: Some("paper".into()),
			title: None,
		};

		let lines = summary_lines(&config);

		assert!(lines.contains(&"  Target field: (none, commit disabled)".to_string()));
		assert!(lines.contains(&"  Columns: name [30%, upper]".to_string()));
		assert!(lines.contains(&"  Filter: disabled = 0".to_string()));
		assert!(lines.contains(&"  Create new: no".to_string()));
		print_summary(&config);
	}
}
