use std::collections::HashSet;

/// Trim field names, dropping empty and repeated entries.
pub(super) fn sanitize_fields(values: Vec<String>) -> Vec<String> {
	let mut seen = HashSet::new();
	let mut cleaned = Vec::new();
	for value in values {
		let normalized = value.trim().to_string();
		if normalized.is_empty() {
			continue;
		}
		if seen.insert(normalized.clone()) {
			cleaned.push(normalized);
		}
	}
	cleaned
}

/// Column header derived from a field name: `customer_name` becomes
/// `Customer Name`.
pub(super) fn label_for_key(key: &str) -> String {
	key.split(['_', '-', ' '])
		.filter(|word| !word.is_empty())
		.map(|word| {
			let mut chars = word.chars();
			match chars.next() {
				Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
				None => String::new(),
			}
		})
		.collect::<Vec<_>>()
		.join(" ")
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn fields_are_trimmed_and_deduplicated() {
		let cleaned = sanitize_fields(vec![
			" territory ".into(),
			"territory".into(),
			"".into(),
			"customer_group".into(),
		]);
		assert_eq!(cleaned, vec!["territory", "customer_group"]);
	}

	#[test]
	fn labels_are_title_cased_words() {
		assert_eq!(label_for_key("customer_name"), "Customer Name");
		assert_eq!(label_for_key("name"), "Name");
		assert_eq!(label_for_key("is-frozen"), "Is Frozen");
	}
}
