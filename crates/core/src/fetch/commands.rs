use crate::error::SourceError;
use crate::types::Filters;

use super::page::PageOutcome;

/// Everything the worker needs to load one page.
#[derive(Debug, Clone, PartialEq)]
pub struct PageRequest {
	pub entity: String,
	pub text: String,
	pub page_size: usize,
	pub offset: usize,
	pub filters: Filters,
	pub fetch_fields: Vec<String>,
}

/// Messages accepted by the fetch worker.
#[derive(Debug)]
pub enum FetchCommand {
	Page { epoch: u64, request: PageRequest },
	Shutdown,
}

/// Completed page load reported back to the picker.
#[derive(Debug, Clone)]
pub struct FetchResult {
	/// Epoch of the search that issued the request.
	pub epoch: u64,
	pub outcome: Result<PageOutcome, SourceError>,
}
