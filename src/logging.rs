//! Tracing subscriber setup for the `linkpick` binary.
//!
//! The terminal UI owns the screen, so by default events are appended to
//! `<cache dir>/linkpick.log`. The filter comes from `LINKPICK_LOG` and falls
//! back to `warn`.

use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, OnceLock};

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use crate::app_dirs;

/// Environment variable holding the log filter directives.
pub const LOG_ENV: &str = "LINKPICK_LOG";
const DEFAULT_FILTER: &str = "warn";
const LOG_FILE: &str = "linkpick.log";

static INSTALLED: OnceLock<LogTarget> = OnceLock::new();

/// Where log events end up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
	Stderr,
	File(PathBuf),
}

/// Install the global subscriber. Later calls return the first target and
/// change nothing.
pub fn initialize(to_stderr: bool) -> Result<&'static LogTarget> {
	if let Some(target) = INSTALLED.get() {
		return Ok(target);
	}

	let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
	let target = if to_stderr {
		tracing_subscriber::fmt()
			.with_env_filter(filter)
			.with_target(false)
			.with_writer(std::io::stderr)
			.try_init()
			.ok();
		LogTarget::Stderr
	} else {
		let path = app_dirs::get_cache_dir()?.join(LOG_FILE);
		let file = open_log_file(&path)?;
		tracing_subscriber::fmt()
			.with_env_filter(filter)
			.with_ansi(false)
			.with_writer(Mutex::new(file))
			.try_init()
			.ok();
		LogTarget::File(path)
	};

	Ok(INSTALLED.get_or_init(|| target))
}

fn open_log_file(path: &Path) -> Result<File> {
	if let Some(parent) = path.parent() {
		fs::create_dir_all(parent)
			.with_context(|| format!("failed to create log directory {}", parent.display()))?;
	}
	OpenOptions::new()
		.create(true)
		.append(true)
		.open(path)
		.with_context(|| format!("failed to open log file {}", path.display()))
}
