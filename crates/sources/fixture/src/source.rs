use std::fs;
use std::path::Path;
use std::sync::{Arc, RwLock, RwLockReadGuard};
use std::thread;
use std::time::Duration;

use frizbee::{Config, match_list};
use linkpick_core::{
	BulkFetchRequest, NAME_FIELD, Record, RecordSource, SearchHit, SearchRequest, SourceError,
};
use serde_json::Value;
use tracing::{debug, trace};

use crate::dataset::{Dataset, EntityData, record_name};
use crate::error::FixtureError;
use crate::filter::matches_filters;
use crate::hook::FixtureCreateHook;

/// In-memory record source loaded from a fixture file.
///
/// Clones share the same dataset.
#[derive(Debug, Clone, Default)]
pub struct FixtureSource {
	dataset: Arc<RwLock<Dataset>>,
	latency: Duration,
}

impl FixtureSource {
	pub fn new(dataset: Dataset) -> Self {
		Self {
			dataset: Arc::new(RwLock::new(dataset)),
			latency: Duration::ZERO,
		}
	}

	pub fn from_path(path: &Path) -> Result<Self, FixtureError> {
		let json = fs::read_to_string(path).map_err(|source| FixtureError::Io {
			path: path.to_path_buf(),
			source,
		})?;
		let dataset = Dataset::from_json_str(&json, &path.display().to_string())?;
		debug!(
			path = %path.display(),
			entities = dataset.entities.len(),
			"loaded fixture"
		);
		Ok(Self::new(dataset))
	}

	pub fn from_json_str(json: &str) -> Result<Self, FixtureError> {
		Dataset::from_json_str(json, "<inline>").map(Self::new)
	}

	/// Sleep this long before answering each call, to mimic a remote service.
	#[must_use]
	pub fn with_latency(mut self, latency: Duration) -> Self {
		self.latency = latency;
		self
	}

	pub fn entities(&self) -> Vec<String> {
		self.read()
			.map(|dataset| dataset.entities.keys().cloned().collect())
			.unwrap_or_default()
	}

	/// Create hook appending records of `entity` to this source.
	pub fn create_hook(&self, entity: impl Into<String>) -> FixtureCreateHook {
		FixtureCreateHook::new(Arc::clone(&self.dataset), entity)
	}

	fn read(&self) -> Result<RwLockReadGuard<'_, Dataset>, SourceError> {
		self.dataset
			.read()
			.map_err(|_| SourceError::Unavailable("fixture dataset lock poisoned".into()))
	}

	fn simulate_latency(&self) {
		if !self.latency.is_zero() {
			thread::sleep(self.latency);
		}
	}
}

impl RecordSource for FixtureSource {
	fn base_search(&self, request: &SearchRequest) -> Result<Vec<SearchHit>, SourceError> {
		self.simulate_latency();
		let dataset = self.read()?;
		let data = dataset
			.entities
			.get(&request.entity)
			.ok_or_else(|| SourceError::unknown_entity(&request.entity))?;

		let mut candidates = Vec::new();
		for record in &data.records {
			if matches_filters(record, &request.filters)? {
				candidates.push(record);
			}
		}

		let ranked = rank(data, &candidates, request.text.trim());
		trace!(
			entity = %request.entity,
			text = %request.text,
			matched = ranked.len(),
			"fixture search"
		);

		Ok(ranked
			.into_iter()
			.skip(request.offset)
			.take(request.page_size)
			.map(|record| to_hit(data, record))
			.collect())
	}

	fn bulk_fetch(&self, request: &BulkFetchRequest) -> Result<Vec<Record>, SourceError> {
		self.simulate_latency();
		let dataset = self.read()?;
		let data = dataset
			.entities
			.get(&request.entity)
			.ok_or_else(|| SourceError::unknown_entity(&request.entity))?;

		Ok(data
			.records
			.iter()
			.filter(|record| {
				record_name(record).is_some_and(|name| request.names.iter().any(|n| n == name))
			})
			.take(request.limit)
			.map(|record| project(record, &request.fields))
			.collect())
	}
}

/// Records matching `text`, best first. An empty query keeps dataset order.
fn rank<'a>(data: &EntityData, candidates: &[&'a Record], text: &str) -> Vec<&'a Record> {
	if text.is_empty() {
		return candidates.to_vec();
	}

	let haystacks: Vec<String> = candidates
		.iter()
		.map(|record| data.haystack(record))
		.collect();
	let haystack_refs: Vec<&str> = haystacks.iter().map(String::as_str).collect();
	let config = Config {
		prefilter: true,
		max_typos: Some(0),
		sort: false,
		..Config::default()
	};

	let mut scored: Vec<(usize, u16)> = match_list(text, &haystack_refs, &config)
		.into_iter()
		.filter(|entry| entry.score > 0)
		.map(|entry| (entry.index as usize, entry.score))
		.collect();
	scored.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));

	scored
		.into_iter()
		.filter_map(|(index, _)| candidates.get(index).copied())
		.collect()
}

fn to_hit(data: &EntityData, record: &Record) -> SearchHit {
	let mut hit = SearchHit::new(record_name(record).unwrap_or_default());
	hit.description = data.description(record);
	hit.owner = record
		.get("owner")
		.and_then(Value::as_str)
		.map(str::to_string);
	hit
}

/// Keep only `fields`, always including `name` so the record can be matched
/// back to its hit.
fn project(record: &Record, fields: &[String]) -> Record {
	let mut projected = Record::new();
	if let Some(name) = record.get(NAME_FIELD) {
		projected.insert(NAME_FIELD.to_string(), name.clone());
	}
	for field in fields {
		if let Some(value) = record.get(field) {
			projected.insert(field.clone(), value.clone());
		}
	}
	projected
}

#[cfg(test)]
mod tests {
	use std::io::Write;

	use linkpick_core::Filters;
	use serde_json::json;

	use super::*;

	const FIXTURE: &str = r#"{
		"entities": {
			"Customer": {
				"search_fields": ["customer_name", "mobile_no"],
				"naming_prefix": "CUST",
				"records": [
					{"name": "CUST-00001", "customer_name": "Ali Hassan", "mobile_no": "0501112222", "owner": "admin", "status": "Active"},
					{"name": "CUST-00002", "customer_name": "Omar Khalid", "mobile_no": "0503334444", "owner": "admin", "status": "Active"},
					{"name": "CUST-00003", "customer_name": "Fatima Noor", "mobile_no": "0505556666", "owner": "sales", "status": "Blocked"}
				]
			}
		}
	}"#;

	fn source() -> FixtureSource {
		FixtureSource::from_json_str(FIXTURE).unwrap()
	}

	fn search(text: &str, offset: usize, page_size: usize) -> SearchRequest {
		SearchRequest {
			entity: "Customer".into(),
			text: text.into(),
			page_size,
			offset,
			filters: Filters::new(),
		}
	}

	#[test]
	fn empty_query_pages_in_dataset_order() {
		let source = source();

		let first = source.base_search(&search("", 0, 2)).unwrap();
		let second = source.base_search(&search("", 2, 2)).unwrap();

		let names: Vec<_> = first.iter().chain(&second).map(|hit| hit.value.as_str()).collect();
		assert_eq!(names, ["CUST-00001", "CUST-00002", "CUST-00003"]);
		assert_eq!(first[0].description.as_deref(), Some("Ali Hassan, 0501112222"));
		assert_eq!(first[0].owner.as_deref(), Some("admin"));
	}

	#[test]
	fn query_matches_search_fields() {
		let hits = source().base_search(&search("fatima", 0, 20)).unwrap();

		assert_eq!(hits.len(), 1);
		assert_eq!(hits[0].value, "CUST-00003");
	}

	#[test]
	fn filters_narrow_the_candidates() {
		let mut request = search("", 0, 20);
		request.filters.insert("status".into(), json!("Active"));
		request.filters.insert("owner".into(), json!(["!=", "sales"]));

		let hits = source().base_search(&request).unwrap();

		assert_eq!(hits.len(), 2);
	}

	#[test]
	fn unknown_entity_is_an_error() {
		let mut request = search("", 0, 20);
		request.entity = "Invoice".into();

		let err = source().base_search(&request).unwrap_err();

		assert_eq!(err, SourceError::unknown_entity("Invoice"));
	}

	#[test]
	fn bulk_fetch_projects_requested_fields() {
		let records = source()
			.bulk_fetch(&BulkFetchRequest {
				entity: "Customer".into(),
				fields: vec!["name".into(), "mobile_no".into(), "missing".into()],
				names: vec!["CUST-00002".into(), "CUST-00009".into()],
				limit: 20,
			})
			.unwrap();

		assert_eq!(records.len(), 1);
		assert_eq!(records[0]["name"], json!("CUST-00002"));
		assert_eq!(records[0]["mobile_no"], json!("0503334444"));
		assert!(!records[0].contains_key("customer_name"));
		assert!(!records[0].contains_key("missing"));
	}

	#[test]
	fn loads_from_a_file() {
		let mut file = tempfile::NamedTempFile::new().unwrap();
		file.write_all(FIXTURE.as_bytes()).unwrap();

		let source = FixtureSource::from_path(file.path()).unwrap();

		assert_eq!(source.entities(), ["Customer"]);
	}

	#[test]
	fn broken_file_reports_its_origin() {
		let mut file = tempfile::NamedTempFile::new().unwrap();
		file.write_all(b"{ not json").unwrap();

		let err = FixtureSource::from_path(file.path()).unwrap_err();

		assert!(matches!(err, FixtureError::Parse { .. }));
		assert!(err.to_string().contains(&file.path().display().to_string()));
	}
}
