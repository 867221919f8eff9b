use indexmap::IndexMap;
use serde_json::Value;

/// Field constraints forwarded to the record source with every search.
pub type Filters = IndexMap<String, Value>;

/// Combine the caller's static filters with the user's quick filters.
///
/// Quick filters win when both name the same field.
pub fn merge_filters(static_filters: &Filters, quick_filters: &Filters) -> Filters {
	let mut merged = static_filters.clone();
	for (key, value) in quick_filters {
		merged.insert(key.clone(), value.clone());
	}
	merged
}
