use std::str::FromStr;

use clap::ValueEnum;
use serde_json::Value;

/// Output formats supported by the CLI utility.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
	Plain,
	Json,
}

/// A `KEY=VALUE` static filter given on the command line.
///
/// The value is read as JSON when it parses, so `--filter 'status=["!=","Closed"]'`
/// yields an operator filter and `--filter disabled=0` a number. Anything else is
/// kept as a plain string.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct FilterArg {
	pub(crate) key: String,
	pub(crate) value: Value,
}

impl FromStr for FilterArg {
	type Err = String;

	fn from_str(raw: &str) -> Result<Self, Self::Err> {
		let (key, value) = raw
			.split_once('=')
			.ok_or_else(|| format!("expected KEY=VALUE, got '{raw}'"))?;
		let key = key.trim();
		if key.is_empty() {
			return Err(format!("filter key is empty in '{raw}'"));
		}
		let value = serde_json::from_str(value.trim())
			.unwrap_or_else(|_| Value::String(value.trim().to_string()));
		Ok(Self {
			key: key.to_string(),
			value,
		})
	}
}
