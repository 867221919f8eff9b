use anyhow::Result;
use linkpick_core::PickerOutcome;
use serde_json::json;

/// Print a plain-text representation of the picker outcome.
pub(crate) fn print_plain(outcome: &PickerOutcome) {
	println!("{}", format_outcome_plain(outcome));
}

pub(crate) fn format_outcome_plain(outcome: &PickerOutcome) -> String {
	match &outcome.commit {
		Some(commit) if outcome.accepted => format!("{}={}", commit.field, commit.value),
		_ => "No selection".to_string(),
	}
}

/// Format the picker outcome as a JSON string.
pub(crate) fn format_outcome_json(entity: &str, outcome: &PickerOutcome) -> Result<String> {
	let (field, value) = match &outcome.commit {
		Some(commit) => (json!(commit.field), json!(commit.value)),
		None => (serde_json::Value::Null, serde_json::Value::Null),
	};

	let payload = json!({
		"accepted": outcome.accepted,
		"entity": entity,
		"field": field,
		"value": value,
		"query": outcome.query,
	});

	Ok(serde_json::to_string_pretty(&payload)?)
}

/// Print the JSON representation of the picker outcome.
pub(crate) fn print_json(entity: &str, outcome: &PickerOutcome) -> Result<()> {
	println!("{}", format_outcome_json(entity, outcome)?);
	Ok(())
}
