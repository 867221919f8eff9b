use std::collections::HashSet;
use std::time::Duration;

use serde_json::Value;

use super::column::ColumnDef;
use super::filters::Filters;
use super::row::{IDENTIFIER_FIELD, NAME_FIELD};
use crate::error::PickerConfigError;

/// Rows requested per page when the caller does not say otherwise.
pub const DEFAULT_PAGE_SIZE: usize = 20;

/// Quiet period between the last keystroke and the search it triggers.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(200);

/// Fields produced by the base search itself; the bulk fetch cannot project them.
const SEARCH_ONLY_FIELDS: &[&str] = &[IDENTIFIER_FIELD, "description"];

/// A user-toggleable constraint offered next to the search input.
#[derive(Debug, Clone, PartialEq)]
pub struct QuickFilter {
	pub key: String,
	pub value: Value,
	pub label: String,
}

impl QuickFilter {
	pub fn new(key: impl Into<String>, value: Value, label: impl Into<String>) -> Self {
		let key = key.into();
		let mut label = label.into();
		if label.trim().is_empty() {
			label = key.clone();
		}
		Self { key, value, label }
	}
}

/// Everything a picker needs to know about one invocation.
///
/// Built once through [`PickerConfig::builder`] and shared read-only for the
/// lifetime of the dialog.
#[derive(Debug, Clone)]
pub struct PickerConfig {
	entity: String,
	target_field: Option<String>,
	columns: Vec<ColumnDef>,
	fetch_fields: Vec<String>,
	static_filters: Filters,
	quick_filters: Vec<QuickFilter>,
	allow_create_new: bool,
	page_size: usize,
	debounce: Duration,
}

impl PickerConfig {
	pub fn builder(entity: impl Into<String>) -> PickerConfigBuilder {
		PickerConfigBuilder::new(entity)
	}

	pub fn entity(&self) -> &str {
		&self.entity
	}

	/// Destination field the committed identifier is written to.
	pub fn target_field(&self) -> Option<&str> {
		self.target_field.as_deref()
	}

	pub fn columns(&self) -> &[ColumnDef] {
		&self.columns
	}

	/// Deduplicated field list requested from the bulk fetch; always starts
	/// with the `name` identifier.
	pub fn fetch_fields(&self) -> &[String] {
		&self.fetch_fields
	}

	pub fn static_filters(&self) -> &Filters {
		&self.static_filters
	}

	pub fn quick_filters(&self) -> &[QuickFilter] {
		&self.quick_filters
	}

	pub fn quick_filter(&self, key: &str) -> Option<&QuickFilter> {
		self.quick_filters.iter().find(|filter| filter.key == key)
	}

	pub fn allow_create_new(&self) -> bool {
		self.allow_create_new
	}

	pub fn page_size(&self) -> usize {
		self.page_size
	}

	pub fn debounce(&self) -> Duration {
		self.debounce
	}
}

/// Builder for [`PickerConfig`].
#[derive(Debug, Clone)]
pub struct PickerConfigBuilder {
	entity: String,
	target_field: Option<String>,
	columns: Vec<ColumnDef>,
	extra_fields: Vec<String>,
	static_filters: Filters,
	quick_filters: Vec<QuickFilter>,
	allow_create_new: bool,
	page_size: usize,
	debounce: Duration,
}

impl PickerConfigBuilder {
	fn new(entity: impl Into<String>) -> Self {
		Self {
			entity: entity.into(),
			target_field: None,
			columns: Vec::new(),
			extra_fields: Vec::new(),
			static_filters: Filters::new(),
			quick_filters: Vec::new(),
			allow_create_new: true,
			page_size: DEFAULT_PAGE_SIZE,
			debounce: DEFAULT_DEBOUNCE,
		}
	}

	#[must_use]
	pub fn target_field(mut self, field: impl Into<String>) -> Self {
		self.target_field = Some(field.into());
		self
	}

	#[must_use]
	pub fn column(mut self, column: ColumnDef) -> Self {
		self.columns.push(column);
		self
	}

	#[must_use]
	pub fn columns(mut self, columns: impl IntoIterator<Item = ColumnDef>) -> Self {
		self.columns.extend(columns);
		self
	}

	/// Extra fields fetched for every row even when no column shows them.
	#[must_use]
	pub fn fetch_fields<I, S>(mut self, fields: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.extra_fields.extend(fields.into_iter().map(Into::into));
		self
	}

	#[must_use]
	pub fn static_filter(mut self, key: impl Into<String>, value: Value) -> Self {
		self.static_filters.insert(key.into(), value);
		self
	}

	#[must_use]
	pub fn static_filters(mut self, filters: Filters) -> Self {
		self.static_filters.extend(filters);
		self
	}

	#[must_use]
	pub fn quick_filter(mut self, filter: QuickFilter) -> Self {
		self.quick_filters.push(filter);
		self
	}

	#[must_use]
	pub fn allow_create_new(mut self, allow: bool) -> Self {
		self.allow_create_new = allow;
		self
	}

	#[must_use]
	pub fn page_size(mut self, page_size: usize) -> Self {
		self.page_size = page_size;
		self
	}

	#[must_use]
	pub fn debounce(mut self, debounce: Duration) -> Self {
		self.debounce = debounce;
		self
	}

	pub fn build(self) -> Result<PickerConfig, PickerConfigError> {
		let entity = self.entity.trim().to_string();
		if entity.is_empty() {
			return Err(PickerConfigError::EmptyEntity);
		}
		if self.page_size == 0 {
			return Err(PickerConfigError::ZeroPageSize);
		}
		if self.columns.iter().any(|column| column.key.trim().is_empty()) {
			return Err(PickerConfigError::EmptyColumnKey);
		}

		let mut seen = HashSet::new();
		for filter in &self.quick_filters {
			if !seen.insert(filter.key.as_str()) {
				return Err(PickerConfigError::DuplicateQuickFilter {
					key: filter.key.clone(),
				});
			}
		}

		let fetch_fields = collect_fetch_fields(&self.columns, &self.extra_fields);
		let columns = if self.columns.is_empty() {
			ColumnDef::defaults()
		} else {
			self.columns
		};
		let target_field = self
			.target_field
			.map(|field| field.trim().to_string())
			.filter(|field| !field.is_empty());

		Ok(PickerConfig {
			entity,
			target_field,
			columns,
			fetch_fields,
			static_filters: self.static_filters,
			quick_filters: self.quick_filters,
			allow_create_new: self.allow_create_new,
			page_size: self.page_size,
			debounce: self.debounce,
		})
	}
}

/// `name`, then the declared column keys, then the extra fields, without
/// duplicates or fields only the base search can produce.
fn collect_fetch_fields(columns: &[ColumnDef], extra: &[String]) -> Vec<String> {
	let mut seen = HashSet::new();
	std::iter::once(NAME_FIELD)
		.chain(columns.iter().map(|column| column.key.as_str()))
		.chain(extra.iter().map(String::as_str))
		.map(str::trim)
		.filter(|field| !field.is_empty() && !SEARCH_ONLY_FIELDS.contains(field))
		.filter(|field| seen.insert(*field))
		.map(str::to_string)
		.collect()
}
