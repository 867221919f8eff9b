mod cli;
mod settings;
mod workflow;

use anyhow::Result;
use cli::{OutputFormat, parse_cli, print_json, print_plain};
use linkpick::logging;
use settings::ResolvedConfig;
use tracing::info;
use workflow::PickWorkflow;

fn main() -> Result<()> {
	let cli = parse_cli();

	if cli.list_themes {
		for name in linkpick_tui::style::names() {
			println!("{name}");
		}
		return Ok(());
	}

	let target = logging::initialize(cli.log_stderr)?;
	info!(?target, "logging initialized");

	let resolved = settings::load(&cli)?;

	if cli.print_config {
		resolved.print_summary();
	}

	run_picker(cli.output, resolved)
}

/// Run the picker dialog and print the outcome in the chosen format.
fn run_picker(format: OutputFormat, settings: ResolvedConfig) -> Result<()> {
	let workflow = PickWorkflow::from_config(settings)?;
	let entity = workflow.entity().to_string();
	let outcome = workflow.run()?;

	match format {
		OutputFormat::Plain => print_plain(&outcome),
		OutputFormat::Json => print_json(&entity, &outcome)?,
	}

	Ok(())
}
