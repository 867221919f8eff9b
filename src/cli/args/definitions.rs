use std::path::PathBuf;

use clap::builder::BoolishValueParser;
use clap::{ArgAction, ColorChoice, Parser};

use super::options::{FilterArg, OutputFormat};
use super::styles::{cli_styles, long_version};

/// Command-line arguments accepted by the `linkpick` binary.
#[derive(Parser, Debug)]
#[command(
	name = "linkpick",
	version,
	long_version = long_version(),
	about = "Search a record source page by page and pick one record",
	color = ColorChoice::Auto,
	styles = cli_styles()
)]
pub(crate) struct CliArgs {
	#[arg(
		short,
		long = "config",
		value_name = "FILE",
		env = "LINKPICK_CONFIG",
		action = ArgAction::Append,
		help = "Additional configuration file to merge (default: none)"
	)]
	pub(crate) config: Vec<PathBuf>,
	#[arg(
		short = 'n',
		long = "no-config",
		help = "Skip loading default configuration files (default: disabled)"
	)]
	pub(crate) no_config: bool,
	#[arg(
		short = 'e',
		long,
		value_name = "ENTITY",
		help = "Entity type to search, e.g. Customer (default: from config)"
	)]
	pub(crate) entity: Option<String>,
	#[arg(
		long = "target-field",
		value_name = "FIELD",
		help = "Field that receives the picked identifier (default: none)"
	)]
	pub(crate) target_field: Option<String>,
	#[arg(
		short = 'f',
		long,
		value_name = "PATH",
		help = "JSON dataset served as the record source (default: from config)"
	)]
	pub(crate) fixture: Option<PathBuf>,
	#[arg(
		long = "latency-ms",
		value_name = "MS",
		help = "Artificial delay added to every source call (default: 0)"
	)]
	pub(crate) latency_ms: Option<u64>,
	#[arg(
		short = 'q',
		long = "query",
		value_name = "QUERY",
		help = "Initial search text (default: empty)"
	)]
	pub(crate) prefill: Option<String>,
	#[arg(
		long = "page-size",
		value_name = "NUM",
		help = "Rows requested per page (default: 20)"
	)]
	pub(crate) page_size: Option<usize>,
	#[arg(
		long = "debounce-ms",
		value_name = "MS",
		help = "Quiet period before a typed search runs (default: 200)"
	)]
	pub(crate) debounce_ms: Option<u64>,
	#[arg(
		long = "allow-create-new",
		value_parser = BoolishValueParser::new(),
		help = "Offer the create-new action (default: enabled)"
	)]
	pub(crate) allow_create_new: Option<bool>,
	#[arg(
		long = "columns",
		value_delimiter = ',',
		value_name = "KEY",
		help = "Comma-separated row fields shown as columns (default: name, description, owner)"
	)]
	pub(crate) columns: Option<Vec<String>>,
	#[arg(
		long = "filter",
		value_name = "KEY=VALUE",
		action = ArgAction::Append,
		help = "Static filter sent with every search; VALUE may be JSON (default: none)"
	)]
	pub(crate) filters: Vec<FilterArg>,
	#[arg(
		short = 't',
		long,
		value_name = "TITLE",
		help = "Set the results table title (default: Select <entity>)"
	)]
	pub(crate) title: Option<String>,
	#[arg(
		long,
		value_name = "THEME",
		help = "Select a theme by name (default: library theme)"
	)]
	pub(crate) theme: Option<String>,
	#[arg(
		short = 'p',
		long = "print-config",
		help = "Print the resolved configuration before running (default: disabled)"
	)]
	pub(crate) print_config: bool,
	#[arg(
		short = 'l',
		long = "list-themes",
		help = "List supported themes and exit (default: disabled)"
	)]
	pub(crate) list_themes: bool,
	#[arg(
		long = "log-stderr",
		help = "Write logs to stderr instead of the cache log file (default: disabled)"
	)]
	pub(crate) log_stderr: bool,
	#[arg(
		short = 'o',
		long = "output",
		value_enum,
		default_value_t = OutputFormat::Plain,
		help = "Choose how to print the result"
	)]
	pub(crate) output: OutputFormat,
}
