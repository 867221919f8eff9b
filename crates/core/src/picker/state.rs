use serde_json::Value;

use crate::types::{Filters, Row};

/// Everything the picker currently shows and what the next page load will ask
/// for.
///
/// The selected index is either `None` or a valid index into [`rows`].
///
/// [`rows`]: QueryState::rows
#[derive(Debug, Clone, PartialEq)]
pub struct QueryState {
	text: String,
	page_index: usize,
	rows: Vec<Row>,
	loading: bool,
	has_more: bool,
	selected: Option<usize>,
	quick_filters: Filters,
	epoch: u64,
}

impl Default for QueryState {
	fn default() -> Self {
		Self {
			text: String::new(),
			page_index: 0,
			rows: Vec::new(),
			loading: false,
			has_more: true,
			selected: None,
			quick_filters: Filters::new(),
			epoch: 0,
		}
	}
}

impl QueryState {
	pub fn text(&self) -> &str {
		&self.text
	}

	/// Number of pages loaded for the current search.
	pub fn page_index(&self) -> usize {
		self.page_index
	}

	pub fn rows(&self) -> &[Row] {
		&self.rows
	}

	pub fn is_loading(&self) -> bool {
		self.loading
	}

	pub fn has_more(&self) -> bool {
		self.has_more
	}

	pub fn selected_index(&self) -> Option<usize> {
		self.selected
	}

	pub fn selected_row(&self) -> Option<&Row> {
		self.selected.and_then(|index| self.rows.get(index))
	}

	pub fn active_quick_filters(&self) -> &Filters {
		&self.quick_filters
	}

	pub fn is_quick_filter_active(&self, key: &str) -> bool {
		self.quick_filters.contains_key(key)
	}

	/// Search generation the state belongs to.
	pub fn epoch(&self) -> u64 {
		self.epoch
	}

	/// Start over with `text`. Quick filters survive.
	pub(crate) fn reset(&mut self, text: impl Into<String>, epoch: u64) {
		self.text = text.into();
		self.page_index = 0;
		self.rows.clear();
		self.loading = false;
		self.has_more = true;
		self.selected = None;
		self.epoch = epoch;
	}

	pub(crate) fn append_rows(&mut self, rows: Vec<Row>) {
		self.rows.extend(rows);
		if self.selected.is_none() && !self.rows.is_empty() {
			self.selected = Some(0);
		}
	}

	pub(crate) fn advance_page(&mut self) {
		self.page_index += 1;
	}

	pub(crate) fn set_loading(&mut self, loading: bool) {
		self.loading = loading;
	}

	pub(crate) fn set_has_more(&mut self, has_more: bool) {
		self.has_more = has_more;
	}

	/// Select `index`; out-of-range indices are ignored.
	pub(crate) fn set_selected(&mut self, index: Option<usize>) {
		match index {
			Some(index) if index >= self.rows.len() => {}
			other => self.selected = other,
		}
	}

	pub(crate) fn toggle_quick_filter(&mut self, key: &str, value: &Value) -> bool {
		if self.quick_filters.shift_remove(key).is_some() {
			false
		} else {
			self.quick_filters.insert(key.to_string(), value.clone());
			true
		}
	}

	pub(crate) fn clear_quick_filters(&mut self) {
		self.quick_filters.clear();
	}
}
