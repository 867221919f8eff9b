use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde_json::Value;

use super::row::Row;
use crate::error::PickerConfigError;

/// Turns a raw field value (and the row it belongs to) into display text.
pub type Formatter = Arc<dyn Fn(&Value, &Row) -> String + Send + Sync>;

/// Horizontal space requested by a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColumnWidth {
	/// Share of the table width, `0..=100`.
	Percent(u16),
	/// Exact number of cells.
	Fixed(u16),
	/// Whatever is left over.
	#[default]
	Auto,
}

impl FromStr for ColumnWidth {
	type Err = PickerConfigError;

	fn from_str(value: &str) -> Result<Self, Self::Err> {
		let trimmed = value.trim();
		let invalid = || PickerConfigError::InvalidWidth {
			value: value.to_string(),
		};

		if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("auto") {
			return Ok(Self::Auto);
		}

		if let Some(percent) = trimmed.strip_suffix('%') {
			let percent: u16 = percent.trim().parse().map_err(|_| invalid())?;
			if percent == 0 || percent > 100 {
				return Err(invalid());
			}
			return Ok(Self::Percent(percent));
		}

		let cells = trimmed.strip_suffix("ch").unwrap_or(trimmed);
		match cells.trim().parse::<u16>() {
			Ok(0) | Err(_) => Err(invalid()),
			Ok(cells) => Ok(Self::Fixed(cells)),
		}
	}
}

impl fmt::Display for ColumnWidth {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Percent(percent) => write!(f, "{percent}%"),
			Self::Fixed(cells) => write!(f, "{cells}"),
			Self::Auto => f.write_str("auto"),
		}
	}
}

/// Declares how one field of a row is shown in the results table.
#[derive(Clone)]
pub struct ColumnDef {
	pub key: String,
	pub label: String,
	pub width: ColumnWidth,
	pub formatter: Option<Formatter>,
}

impl ColumnDef {
	/// Create a column for `key`; an empty label falls back to the key.
	pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
		let key = key.into();
		let mut label = label.into();
		if label.trim().is_empty() {
			label = key.clone();
		}
		Self {
			key,
			label,
			width: ColumnWidth::Auto,
			formatter: None,
		}
	}

	#[must_use]
	pub fn width(mut self, width: ColumnWidth) -> Self {
		self.width = width;
		self
	}

	#[must_use]
	pub fn format<F>(mut self, formatter: F) -> Self
	where
		F: Fn(&Value, &Row) -> String + Send + Sync + 'static,
	{
		self.formatter = Some(Arc::new(formatter));
		self
	}

	#[must_use]
	pub fn with_formatter(mut self, formatter: Formatter) -> Self {
		self.formatter = Some(formatter);
		self
	}

	/// Columns shown when the caller does not declare any.
	pub fn defaults() -> Vec<Self> {
		vec![
			Self::new("value", "Name").width(ColumnWidth::Percent(30)),
			Self::new("description", "Description").width(ColumnWidth::Percent(40)),
			Self::new("owner", "Owner").width(ColumnWidth::Percent(30)),
		]
	}
}

impl fmt::Debug for ColumnDef {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("ColumnDef")
			.field("key", &self.key)
			.field("label", &self.label)
			.field("width", &self.width)
			.field("formatter", &self.formatter.as_ref().map(|_| ".."))
			.finish()
	}
}

/// Named formatters that configuration files can attach to columns.
pub mod formatters {
	use std::sync::Arc;

	use serde_json::Value;

	use super::Formatter;
	use crate::types::row::{Row, display_value};

	/// Names accepted by [`named`].
	pub const NAMES: &[&str] = &["upper", "lower", "currency", "yes-no"];

	/// Look up a built-in formatter by name (case-insensitive).
	pub fn named(name: &str) -> Option<Formatter> {
		let formatter: Formatter = match name.trim().to_ascii_lowercase().as_str() {
			"upper" => Arc::new(|value: &Value, _: &Row| display_value(value).to_uppercase()),
			"lower" => Arc::new(|value: &Value, _: &Row| display_value(value).to_lowercase()),
			"currency" => Arc::new(|value: &Value, _: &Row| currency(value)),
			"yes-no" | "yes_no" | "check" => Arc::new(|value: &Value, _: &Row| yes_no(value)),
			_ => return None,
		};
		Some(formatter)
	}

	/// Two decimals with thousands separators; non-numeric input is shown as is.
	pub fn currency(value: &Value) -> String {
		let amount = match value {
			Value::Number(number) => number.as_f64(),
			Value::String(text) => text.trim().parse::<f64>().ok(),
			_ => None,
		};
		let Some(amount) = amount else {
			return display_value(value);
		};

		let rendered = format!("{:.2}", amount.abs());
		let (whole, fraction) = rendered.split_once('.').unwrap_or((rendered.as_str(), "00"));
		let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
		for (index, digit) in whole.chars().enumerate() {
			if index > 0 && (whole.len() - index) % 3 == 0 {
				grouped.push(',');
			}
			grouped.push(digit);
		}
		let sign = if amount < 0.0 { "-" } else { "" };
		format!("{sign}{grouped}.{fraction}")
	}

	/// Check fields arrive as `0`/`1` or booleans.
	pub fn yes_no(value: &Value) -> String {
		let truthy = match value {
			Value::Bool(flag) => *flag,
			Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
			Value::String(text) => matches!(text.trim(), "1" | "true" | "yes" | "Yes"),
			_ => false,
		};
		if truthy { "Yes" } else { "No" }.to_string()
	}
}

#[cfg(test)]
mod tests {
	use serde_json::json;

	use super::*;

	#[test]
	fn widths_parse_from_config_strings() {
		assert_eq!("30%".parse::<ColumnWidth>(), Ok(ColumnWidth::Percent(30)));
		assert_eq!("12".parse::<ColumnWidth>(), Ok(ColumnWidth::Fixed(12)));
		assert_eq!("12ch".parse::<ColumnWidth>(), Ok(ColumnWidth::Fixed(12)));
		assert_eq!("auto".parse::<ColumnWidth>(), Ok(ColumnWidth::Auto));
		assert_eq!("".parse::<ColumnWidth>(), Ok(ColumnWidth::Auto));
		assert!("0%".parse::<ColumnWidth>().is_err());
		assert!("150%".parse::<ColumnWidth>().is_err());
		assert!("wide".parse::<ColumnWidth>().is_err());
	}

	#[test]
	fn empty_label_falls_back_to_key() {
		let column = ColumnDef::new("mobile_no", " ");
		assert_eq!(column.label, "mobile_no");
	}

	#[test]
	fn currency_groups_thousands() {
		assert_eq!(formatters::currency(&json!(1234567.5)), "1,234,567.50");
		assert_eq!(formatters::currency(&json!("-950")), "-950.00");
		assert_eq!(formatters::currency(&json!("n/a")), "n/a");
	}

	#[test]
	fn named_formatters_resolve() {
		let row = Row::new();
		let upper = formatters::named("UPPER").unwrap();
		assert_eq!(upper(&json!("dxb"), &row), "DXB");
		let check = formatters::named("yes-no").unwrap();
		assert_eq!(check(&json!(1), &row), "Yes");
		assert_eq!(check(&json!(0), &row), "No");
		assert!(formatters::named("sparkles").is_none());
	}
}
