//! Scripted record source shared by the crate's tests.

use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::error::SourceError;
use crate::source::{BulkFetchRequest, RecordSource, SearchHit, SearchRequest};
use crate::types::Record;

type Scripted<T> = Mutex<VecDeque<Result<Vec<T>, SourceError>>>;

/// Answers calls from queued responses and records every request.
///
/// An exhausted queue answers with an empty list.
#[derive(Default)]
pub(crate) struct ScriptedSource {
	hits: Scripted<SearchHit>,
	records: Scripted<Record>,
	search_log: Mutex<Vec<SearchRequest>>,
	bulk_log: Mutex<Vec<BulkFetchRequest>>,
	base_calls: AtomicUsize,
	bulk_calls: AtomicUsize,
}

impl ScriptedSource {
	pub(crate) fn new() -> Self {
		Self::default()
	}

	pub(crate) fn push_hits(&self, response: Result<Vec<SearchHit>, SourceError>) {
		self.hits.lock().unwrap().push_back(response);
	}

	pub(crate) fn push_records(&self, response: Result<Vec<Record>, SourceError>) {
		self.records.lock().unwrap().push_back(response);
	}

	pub(crate) fn base_calls(&self) -> usize {
		self.base_calls.load(Ordering::SeqCst)
	}

	pub(crate) fn bulk_calls(&self) -> usize {
		self.bulk_calls.load(Ordering::SeqCst)
	}

	pub(crate) fn search_requests(&self) -> Vec<SearchRequest> {
		self.search_log.lock().unwrap().clone()
	}

	pub(crate) fn bulk_requests(&self) -> Vec<BulkFetchRequest> {
		self.bulk_log.lock().unwrap().clone()
	}
}

impl RecordSource for ScriptedSource {
	fn base_search(&self, request: &SearchRequest) -> Result<Vec<SearchHit>, SourceError> {
		self.base_calls.fetch_add(1, Ordering::SeqCst);
		self.search_log.lock().unwrap().push(request.clone());
		self.hits
			.lock()
			.unwrap()
			.pop_front()
			.unwrap_or_else(|| Ok(Vec::new()))
	}

	fn bulk_fetch(&self, request: &BulkFetchRequest) -> Result<Vec<Record>, SourceError> {
		self.bulk_calls.fetch_add(1, Ordering::SeqCst);
		self.bulk_log.lock().unwrap().push(request.clone());
		self.records
			.lock()
			.unwrap()
			.pop_front()
			.unwrap_or_else(|| Ok(Vec::new()))
	}
}
