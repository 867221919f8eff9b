use clap::{CommandFactory, FromArgMatches, Parser};
use serde_json::json;

use super::options::FilterArg;
use super::{CliArgs, OutputFormat};

#[test]
fn command_definition_is_consistent() {
	CliArgs::command().debug_assert();
}

#[test]
fn parse_cli_accepts_default_arguments() {
	let command = CliArgs::command();
	let mut matches = command.get_matches_from(vec!["linkpick"]);
	let parsed = CliArgs::from_arg_matches_mut(&mut matches).expect("parses");
	assert_eq!(parsed.output, OutputFormat::Plain);
	assert!(parsed.filters.is_empty());
}

#[test]
fn repeated_filters_and_columns_are_collected() {
	let parsed = CliArgs::parse_from([
		"linkpick",
		"--filter",
		"status=Active",
		"--filter",
		r#"territory=["!=","Overseas"]"#,
		"--columns",
		"name,customer_name",
		"--allow-create-new",
		"no",
	]);

	assert_eq!(parsed.filters.len(), 2);
	assert_eq!(parsed.filters[0].value, json!("Active"));
	assert_eq!(parsed.filters[1].value, json!(["!=", "Overseas"]));
	assert_eq!(
		parsed.columns,
		Some(vec!["name".to_string(), "customer_name".to_string()])
	);
	assert_eq!(parsed.allow_create_new, Some(false));
}

#[test]
fn filter_values_fall_back_to_strings() {
	let number: FilterArg = "disabled=0".parse().unwrap();
	assert_eq!(number.value, json!(0));

	let text: FilterArg = "company = Right Hire".parse().unwrap();
	assert_eq!(text.key, "company");
	assert_eq!(text.value, json!("Right Hire"));

	assert!("=value".parse::<FilterArg>().is_err());
	assert!("novalue".parse::<FilterArg>().is_err());
}
