use std::str::FromStr;

use linkpick_core::types::display_value;
use linkpick_core::{Filters, Record, SourceError};
use serde_json::Value;

/// Comparison applied by a `[op, value]` filter. A bare value means
/// [`FilterOp::Eq`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterOp {
	Eq,
	NotEq,
	In,
	NotIn,
	/// SQL-style pattern with `%` and `_` wildcards, case-insensitive.
	Like,
}

impl FromStr for FilterOp {
	type Err = SourceError;

	fn from_str(op: &str) -> Result<Self, Self::Err> {
		match op.trim().to_ascii_lowercase().as_str() {
			"=" | "==" => Ok(Self::Eq),
			"!=" | "<>" => Ok(Self::NotEq),
			"in" => Ok(Self::In),
			"not in" => Ok(Self::NotIn),
			"like" => Ok(Self::Like),
			other => Err(SourceError::rejected(format!(
				"unsupported filter operator '{other}'"
			))),
		}
	}
}

/// Whether `record` satisfies every filter.
///
/// A missing field compares as `null`.
pub fn matches_filters(record: &Record, filters: &Filters) -> Result<bool, SourceError> {
	for (field, filter) in filters {
		let actual = record.get(field).unwrap_or(&Value::Null);
		let (op, expected) = parse_filter(field, filter)?;
		if !op.matches(actual, expected)? {
			return Ok(false);
		}
	}
	Ok(true)
}

fn parse_filter<'a>(field: &str, filter: &'a Value) -> Result<(FilterOp, &'a Value), SourceError> {
	match filter {
		Value::Array(parts) => match parts.as_slice() {
			[Value::String(op), expected] => Ok((op.parse()?, expected)),
			_ => Err(SourceError::rejected(format!(
				"filter on '{field}' must be a value or an [operator, value] pair"
			))),
		},
		other => Ok((FilterOp::Eq, other)),
	}
}

impl FilterOp {
	fn matches(self, actual: &Value, expected: &Value) -> Result<bool, SourceError> {
		Ok(match self {
			Self::Eq => loosely_equal(actual, expected),
			Self::NotEq => !loosely_equal(actual, expected),
			Self::In => candidates(expected)?.any(|candidate| loosely_equal(actual, candidate)),
			Self::NotIn => !candidates(expected)?.any(|candidate| loosely_equal(actual, candidate)),
			Self::Like => like(&display_value(actual), &display_value(expected)),
		})
	}
}

fn candidates(expected: &Value) -> Result<std::slice::Iter<'_, Value>, SourceError> {
	expected
		.as_array()
		.map(|values| values.iter())
		.ok_or_else(|| SourceError::rejected("'in' filters take a list of values"))
}

/// Equal as JSON, or equal once both sides are shown as text (`1` and `"1"`).
fn loosely_equal(actual: &Value, expected: &Value) -> bool {
	actual == expected
		|| (!actual.is_null()
			&& !expected.is_null()
			&& display_value(actual) == display_value(expected))
}

/// Wildcard match that only backtracks to the most recent `%`.
fn like(text: &str, pattern: &str) -> bool {
	let text: Vec<char> = text.to_lowercase().chars().collect();
	let pattern: Vec<char> = pattern.to_lowercase().chars().collect();

	let (mut t, mut p) = (0, 0);
	let mut resume: Option<(usize, usize)> = None;
	while t < text.len() {
		match pattern.get(p) {
			Some('%') => {
				resume = Some((p, t));
				p += 1;
			}
			Some(&ch) if ch == '_' || ch == text[t] => {
				t += 1;
				p += 1;
			}
			_ => match resume {
				Some((star, matched)) => {
					p = star + 1;
					t = matched + 1;
					resume = Some((star, t));
				}
				None => return false,
			},
		}
	}
	pattern[p..].iter().all(|&ch| ch == '%')
}

#[cfg(test)]
mod tests {
	use serde_json::json;

	use super::*;

	fn record() -> Record {
		serde_json::from_value(json!({
			"name": "VEH-00001",
			"status": "Available",
			"seats": 5,
			"model": "Nissan Patrol"
		}))
		.unwrap()
	}

	fn filters(value: Value) -> Filters {
		serde_json::from_value(value).unwrap()
	}

	#[test]
	fn bare_values_compare_for_equality() {
		assert!(matches_filters(&record(), &filters(json!({"status": "Available"}))).unwrap());
		assert!(matches_filters(&record(), &filters(json!({"seats": "5"}))).unwrap());
		assert!(!matches_filters(&record(), &filters(json!({"status": "Rented"}))).unwrap());
		assert!(!matches_filters(&record(), &filters(json!({"plate": "A 123"}))).unwrap());
	}

	#[test]
	fn operator_pairs_are_applied() {
		let cases = [
			(json!({"status": ["!=", "Rented"]}), true),
			(json!({"status": ["in", ["Rented", "Available"]]}), true),
			(json!({"status": ["not in", ["Available"]]}), false),
			(json!({"model": ["like", "%patrol"]}), true),
			(json!({"model": ["like", "N_ssan%"]}), true),
			(json!({"model": ["like", "Toyota%"]}), false),
		];
		for (filter, expected) in cases {
			assert_eq!(
				matches_filters(&record(), &filters(filter.clone())).unwrap(),
				expected,
				"{filter}"
			);
		}
	}

	#[test]
	fn like_handles_many_wildcards() {
		let text = "a".repeat(200);
		assert!(!like(&text, "%a%a%a%a%a%a%a%a%a%a%a%a%b"));
		assert!(like(&text, "%a%a%a%a%a%a%a%a%a%a%a%a%"));
		assert!(like("abc", "a%%c"));
		assert!(like("", "%"));
		assert!(!like("", "_"));
		assert!(!like("abcd", "a_c"));
	}

	#[test]
	fn malformed_filters_are_rejected() {
		let err = matches_filters(&record(), &filters(json!({"status": [">>", 1]}))).unwrap_err();
		assert!(matches!(err, SourceError::Rejected { .. }));

		let err = matches_filters(&record(), &filters(json!({"status": ["in", "x"]}))).unwrap_err();
		assert!(matches!(err, SourceError::Rejected { .. }));
	}
}
