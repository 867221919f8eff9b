/// Text shown around the picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiLabels {
	/// Title of the results table, e.g. `Select Customer`.
	pub title: String,
	/// Placeholder displayed while the search input is empty.
	pub placeholder: String,
	/// Key hints rendered in the footer.
	pub hint: String,
}

impl UiLabels {
	/// Labels for picking a record of `entity`.
	#[must_use]
	pub fn for_entity(entity: &str) -> Self {
		Self {
			title: format!("Select {entity}"),
			placeholder: format!("Search {entity}…"),
			..Self::default()
		}
	}

	#[must_use]
	pub fn with_title(mut self, title: impl Into<String>) -> Self {
		let title = title.into();
		if !title.trim().is_empty() {
			self.title = title;
		}
		self
	}
}

impl Default for UiLabels {
	fn default() -> Self {
		Self {
			title: "Select a record".to_string(),
			placeholder: "Search…".to_string(),
			hint: "↵ select · esc cancel · ^N new · ^R reset · ^L more".to_string(),
		}
	}
}
