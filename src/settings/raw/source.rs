use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::cli::CliArgs;

/// `[source]` table: where records come from.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct SourceSection {
	pub(super) fixture: Option<PathBuf>,
	pub(super) latency_ms: Option<u64>,
}

impl SourceSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(path) = cli.fixture.clone() {
			self.fixture = Some(path);
		}
		if let Some(value) = cli.latency_ms {
			self.latency_ms = Some(value);
		}
	}

	/// Fixture path made absolute against the working directory.
	pub(super) fn resolve_fixture(&self) -> Result<Option<PathBuf>> {
		let Some(path) = self.fixture.clone() else {
			return Ok(None);
		};
		if path.is_absolute() {
			return Ok(Some(path));
		}
		let cwd = env::current_dir().context("failed to resolve current directory for fixture")?;
		Ok(Some(cwd.join(path)))
	}
}
