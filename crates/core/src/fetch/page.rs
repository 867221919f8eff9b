use std::collections::HashMap;

use serde_json::Value;
use tracing::debug;

use super::commands::PageRequest;
use crate::error::SourceError;
use crate::source::{BulkFetchRequest, RecordSource, SearchHit, SearchRequest};
use crate::types::{NAME_FIELD, Record, Row};

/// Rows produced for one page.
#[derive(Debug, Clone, PartialEq)]
pub struct PageOutcome {
	pub rows: Vec<Row>,
	/// Number of base search hits; a short page means the results ran out.
	pub hit_count: usize,
}

/// Result of [`load_page`] when neither call failed.
#[derive(Debug, Clone, PartialEq)]
pub enum PageLoad {
	Loaded(PageOutcome),
	/// A newer search made this page irrelevant between the two calls.
	Superseded,
}

/// Load one page: base search, then a bulk fetch of the declared fields for
/// every hit, merged in base search order.
///
/// `superseded` is consulted between the two calls so a stale page does not
/// pay for its enrichment.
pub fn load_page(
	source: &dyn RecordSource,
	request: &PageRequest,
	superseded: impl Fn() -> bool,
) -> Result<PageLoad, SourceError> {
	let search = SearchRequest {
		entity: request.entity.clone(),
		text: request.text.clone(),
		page_size: request.page_size,
		offset: request.offset,
		filters: request.filters.clone(),
	};
	let hits = source.base_search(&search)?;
	let hit_count = hits.len();

	let names: Vec<String> = hits
		.iter()
		.map(|hit| hit.value.clone())
		.filter(|name| !name.is_empty())
		.collect();

	let records = if names.is_empty() {
		Vec::new()
	} else {
		if superseded() {
			debug!(entity = %request.entity, offset = request.offset, "page superseded before enrichment");
			return Ok(PageLoad::Superseded);
		}
		source.bulk_fetch(&BulkFetchRequest {
			entity: request.entity.clone(),
			fields: request.fetch_fields.clone(),
			names,
			limit: request.page_size,
		})?
	};

	Ok(PageLoad::Loaded(PageOutcome {
		rows: merge_rows(hits, records),
		hit_count,
	}))
}

/// Overlay each hit with the bulk record sharing its identifier.
///
/// Hits without a matching record keep only the fields the base search
/// returned.
pub fn merge_rows(hits: Vec<SearchHit>, records: Vec<Record>) -> Vec<Row> {
	let by_name: HashMap<String, Record> = records
		.into_iter()
		.filter_map(|record| {
			let name = record.get(NAME_FIELD).and_then(Value::as_str)?.to_string();
			Some((name, record))
		})
		.collect();

	hits.into_iter()
		.map(|hit| {
			let extra = by_name.get(&hit.value).cloned();
			let mut row = hit.into_row();
			if let Some(extra) = extra {
				row.extend(extra);
			}
			row
		})
		.collect()
}

#[cfg(test)]
mod tests {
	use indexmap::indexmap;
	use serde_json::json;

	use super::*;
	use crate::testing::ScriptedSource;

	fn request(page_size: usize) -> PageRequest {
		PageRequest {
			entity: "Customer".into(),
			text: "ab".into(),
			page_size,
			offset: 0,
			filters: Default::default(),
			fetch_fields: vec!["name".into(), "title".into()],
		}
	}

	#[test]
	fn merge_overlays_matching_records_only() {
		let hits = vec![SearchHit::new("A"), SearchHit::new("B")];
		let records = vec![indexmap! {
			"name".to_string() => json!("A"),
			"extra".to_string() => json!("x"),
		}];

		let rows = merge_rows(hits, records);

		assert_eq!(rows[0]["value"], json!("A"));
		assert_eq!(rows[0]["extra"], json!("x"));
		assert_eq!(rows[1]["value"], json!("B"));
		assert!(!rows[1].contains_key("extra"));
		assert_eq!(rows[1].len(), 1);
	}

	#[test]
	fn repeated_hits_share_the_bulk_record() {
		let hits = vec![SearchHit::new("A"), SearchHit::new("A")];
		let records = vec![indexmap! {
			"name".to_string() => json!("A"),
			"extra".to_string() => json!("x"),
		}];

		let rows = merge_rows(hits, records);

		assert_eq!(rows.len(), 2);
		assert_eq!(rows[0]["extra"], json!("x"));
		assert_eq!(rows[1]["extra"], json!("x"));
	}

	#[test]
	fn bulk_fetch_requests_every_hit_with_declared_fields() {
		let source = ScriptedSource::new();
		source.push_hits(Ok(vec![
			SearchHit::new("E1").with_owner("admin"),
			SearchHit::new("E2"),
		]));
		source.push_records(Ok(vec![indexmap! {
			"name".to_string() => json!("E1"),
			"title".to_string() => json!("Alpha"),
		}]));

		let PageLoad::Loaded(outcome) = load_page(&source, &request(2), || false).unwrap() else {
			panic!("page should load");
		};

		assert_eq!(outcome.hit_count, 2);
		assert_eq!(outcome.rows[0]["title"], json!("Alpha"));
		assert_eq!(outcome.rows[0]["owner"], json!("admin"));
		assert!(!outcome.rows[1].contains_key("title"));

		let bulk = source.bulk_requests();
		assert_eq!(bulk.len(), 1);
		assert_eq!(bulk[0].names, ["E1", "E2"]);
		assert_eq!(bulk[0].fields, ["name", "title"]);
		assert_eq!(bulk[0].limit, 2);
	}

	#[test]
	fn empty_search_skips_bulk_fetch() {
		let source = ScriptedSource::new();
		source.push_hits(Ok(Vec::new()));

		let load = load_page(&source, &request(20), || false).unwrap();

		assert_eq!(
			load,
			PageLoad::Loaded(PageOutcome {
				rows: Vec::new(),
				hit_count: 0
			})
		);
		assert_eq!(source.bulk_calls(), 0);
	}

	#[test]
	fn superseded_page_skips_enrichment() {
		let source = ScriptedSource::new();
		source.push_hits(Ok(vec![SearchHit::new("E1")]));

		let load = load_page(&source, &request(20), || true).unwrap();

		assert_eq!(load, PageLoad::Superseded);
		assert_eq!(source.bulk_calls(), 0);
	}

	#[test]
	fn bulk_failure_fails_the_page() {
		let source = ScriptedSource::new();
		source.push_hits(Ok(vec![SearchHit::new("E1")]));
		source.push_records(Err(SourceError::Unavailable("timeout".into())));

		let err = load_page(&source, &request(20), || false).unwrap_err();

		assert_eq!(err, SourceError::Unavailable("timeout".into()));
	}
}
