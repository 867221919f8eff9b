use indexmap::IndexMap;
use serde_json::Value;

/// Field holding the unique identifier of every merged row.
pub const IDENTIFIER_FIELD: &str = "value";

/// Field the bulk fetch uses to key its records.
pub const NAME_FIELD: &str = "name";

/// A merged result row: field name to value, in insertion order.
pub type Row = IndexMap<String, Value>;

/// A record returned by the bulk fetch call.
pub type Record = IndexMap<String, Value>;

/// Identifier stored in a row, if it holds a non-empty string.
pub fn row_identifier(row: &Row) -> Option<&str> {
	row.get(IDENTIFIER_FIELD)
		.and_then(Value::as_str)
		.filter(|value| !value.is_empty())
}

/// Display text for a raw field value.
///
/// Strings are shown without quotes, `null` is empty and any other value uses
/// its compact JSON form.
pub fn display_value(value: &Value) -> String {
	match value {
		Value::Null => String::new(),
		Value::String(text) => text.clone(),
		Value::Bool(flag) => flag.to_string(),
		Value::Number(number) => number.to_string(),
		other => other.to_string(),
	}
}
