//! Projection of picker state through the column definitions.
//!
//! Rendering is a pure function: the same state and columns always produce the
//! same [`RenderedTable`]. Front-ends only lay the result out.

use serde_json::Value;

use crate::picker::QueryState;
use crate::types::{ColumnDef, ColumnWidth, display_value};

/// Placeholder shown when there are no rows.
pub const EMPTY_PLACEHOLDER: &str = "No results";

/// How cell text is made safe for the surface it is shown on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Escaping {
	/// Escape `& < > " '` for HTML output.
	#[default]
	Html,
	/// Strip control characters so values cannot drive the terminal.
	Terminal,
}

impl Escaping {
	pub fn apply(self, text: &str) -> String {
		match self {
			Self::Html => escape_html(text),
			Self::Terminal => strip_controls(text),
		}
	}
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedHeader {
	pub label: String,
	pub width: ColumnWidth,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedRow {
	/// Position in the accumulated rows.
	pub index: usize,
	pub cells: Vec<String>,
	pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableBody {
	/// Shown across all columns when nothing was found.
	Placeholder(String),
	Rows(Vec<RenderedRow>),
}

/// State of the "load more" control under the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PagerControl {
	pub label: &'static str,
	pub enabled: bool,
}

impl PagerControl {
	fn for_state(state: &QueryState) -> Self {
		if state.is_loading() {
			Self {
				label: "Loading…",
				enabled: false,
			}
		} else if state.has_more() {
			Self {
				label: "Load more",
				enabled: true,
			}
		} else {
			Self {
				label: "No more",
				enabled: false,
			}
		}
	}
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedTable {
	pub headers: Vec<RenderedHeader>,
	pub body: TableBody,
	pub pager: PagerControl,
}

impl RenderedTable {
	pub fn rows(&self) -> &[RenderedRow] {
		match &self.body {
			TableBody::Rows(rows) => rows,
			TableBody::Placeholder(_) => &[],
		}
	}
}

/// Render the accumulated rows of `state` through `columns`.
pub fn render(state: &QueryState, columns: &[ColumnDef], escaping: Escaping) -> RenderedTable {
	let headers = columns
		.iter()
		.map(|column| RenderedHeader {
			label: escaping.apply(&column.label),
			width: column.width,
		})
		.collect();

	let body = if state.rows().is_empty() {
		TableBody::Placeholder(EMPTY_PLACEHOLDER.to_string())
	} else {
		let selected = state.selected_index();
		TableBody::Rows(
			state
				.rows()
				.iter()
				.enumerate()
				.map(|(index, row)| RenderedRow {
					index,
					cells: columns
						.iter()
						.map(|column| {
							let raw = row.get(&column.key).unwrap_or(&Value::Null);
							let text = match &column.formatter {
								Some(format) => format(raw, row),
								None => display_value(raw),
							};
							escaping.apply(&text)
						})
						.collect(),
					active: selected == Some(index),
				})
				.collect(),
		)
	};

	RenderedTable {
		headers,
		body,
		pager: PagerControl::for_state(state),
	}
}

pub fn escape_html(text: &str) -> String {
	let mut escaped = String::with_capacity(text.len());
	for ch in text.chars() {
		match ch {
			'&' => escaped.push_str("&amp;"),
			'<' => escaped.push_str("&lt;"),
			'>' => escaped.push_str("&gt;"),
			'"' => escaped.push_str("&quot;"),
			'\'' => escaped.push_str("&#39;"),
			other => escaped.push(other),
		}
	}
	escaped
}

fn strip_controls(text: &str) -> String {
	text.chars()
		.map(|ch| if ch == '\n' || ch == '\t' { ' ' } else { ch })
		.filter(|ch| !ch.is_control())
		.collect()
}

#[cfg(test)]
mod tests {
	use serde_json::json;

	use super::*;
	use crate::types::Row;

	fn row(pairs: &[(&str, Value)]) -> Row {
		pairs
			.iter()
			.map(|(key, value)| (key.to_string(), value.clone()))
			.collect()
	}

	fn columns() -> Vec<ColumnDef> {
		vec![
			ColumnDef::new("value", "ID"),
			ColumnDef::new("rate", "Rate").format(|value, _| format!("AED {}", display_value(value))),
		]
	}

	#[test]
	fn empty_state_renders_placeholder() {
		let state = QueryState::default();

		let table = render(&state, &columns(), Escaping::Html);

		assert_eq!(table.body, TableBody::Placeholder(EMPTY_PLACEHOLDER.into()));
		assert_eq!(table.headers.len(), 2);
	}

	#[test]
	fn cells_are_formatted_then_escaped() {
		let mut state = QueryState::default();
		state.append_rows(vec![
			row(&[("value", json!("<b>V-1</b>")), ("rate", json!(120))]),
			row(&[("value", json!("V-2"))]),
		]);
		state.set_selected(Some(1));

		let table = render(&state, &columns(), Escaping::Html);
		let rows = table.rows();

		assert_eq!(rows[0].cells, ["&lt;b&gt;V-1&lt;/b&gt;", "AED 120"]);
		assert_eq!(rows[1].cells, ["V-2", "AED "]);
		assert!(!rows[0].active);
		assert!(rows[1].active);
	}

	#[test]
	fn terminal_escaping_strips_control_sequences() {
		assert_eq!(Escaping::Terminal.apply("a\u{1b}[31mb\nc"), "a[31mb c");
		assert_eq!(Escaping::Html.apply("Tom & 'Jerry'"), "Tom &amp; &#39;Jerry&#39;");
	}

	#[test]
	fn pager_reflects_pagination_state() {
		let mut state = QueryState::default();
		assert_eq!(render(&state, &[], Escaping::Html).pager.label, "Load more");

		state.set_has_more(false);
		let pager = render(&state, &[], Escaping::Html).pager;
		assert_eq!(pager.label, "No more");
		assert!(!pager.enabled);
	}
}
