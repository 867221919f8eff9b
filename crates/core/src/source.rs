//! Contract for the remote operations the picker consumes.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::SourceError;
use crate::types::{Filters, IDENTIFIER_FIELD, Record, Row};

/// Parameters of one base search call.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchRequest {
	pub entity: String,
	pub text: String,
	pub page_size: usize,
	pub offset: usize,
	pub filters: Filters,
}

/// Parameters of one bulk fetch call: project `fields` for every record whose
/// `name` is listed in `names`.
#[derive(Debug, Clone, PartialEq)]
pub struct BulkFetchRequest {
	pub entity: String,
	pub fields: Vec<String>,
	pub names: Vec<String>,
	pub limit: usize,
}

/// Lightweight match returned by the base search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchHit {
	/// Unique identifier of the matched record.
	pub value: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub description: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub owner: Option<String>,
}

impl SearchHit {
	pub fn new(value: impl Into<String>) -> Self {
		Self {
			value: value.into(),
			description: None,
			owner: None,
		}
	}

	#[must_use]
	pub fn with_description(mut self, description: impl Into<String>) -> Self {
		self.description = Some(description.into());
		self
	}

	#[must_use]
	pub fn with_owner(mut self, owner: impl Into<String>) -> Self {
		self.owner = Some(owner.into());
		self
	}

	/// Minimal row carrying only what the base search knows.
	pub fn into_row(self) -> Row {
		let mut row = Row::new();
		row.insert(IDENTIFIER_FIELD.to_string(), Value::String(self.value));
		if let Some(description) = self.description {
			row.insert("description".to_string(), Value::String(description));
		}
		if let Some(owner) = self.owner {
			row.insert("owner".to_string(), Value::String(owner));
		}
		row
	}
}

/// A remote service able to answer the picker's two queries.
///
/// Implementations are called from the fetch worker thread, never from the
/// UI thread, so they are free to block.
pub trait RecordSource: Send + Sync {
	/// Fuzzy search for `request.text`, paginated by offset. Hits come back in
	/// the order they should be displayed.
	fn base_search(&self, request: &SearchRequest) -> Result<Vec<SearchHit>, SourceError>;

	/// Exact-match projection of the requested fields. Result order is not
	/// significant; records are matched back to hits by their `name`.
	fn bulk_fetch(&self, request: &BulkFetchRequest) -> Result<Vec<Record>, SourceError>;
}

impl<T: RecordSource + ?Sized> RecordSource for std::sync::Arc<T> {
	fn base_search(&self, request: &SearchRequest) -> Result<Vec<SearchHit>, SourceError> {
		(**self).base_search(request)
	}

	fn bulk_fetch(&self, request: &BulkFetchRequest) -> Result<Vec<Record>, SourceError> {
		(**self).bulk_fetch(request)
	}
}
