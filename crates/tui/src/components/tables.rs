use linkpick_core::ColumnWidth;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{
	Block, Borders, Cell, HighlightSpacing, Paragraph, Row, ScrollbarState, Table, TableState,
};

use crate::components::render_scrollbar;
use crate::style::Theme;

pub(crate) const HIGHLIGHT_SYMBOL: &str = "▶ ";
pub(crate) const TABLE_COLUMN_SPACING: u16 = 1;
/// Header row + separator height inside the table's viewport.
pub(crate) const TABLE_HEADER_ROWS: u16 = 2;
/// Top and bottom border of the table block.
pub(crate) const TABLE_BORDER_ROWS: u16 = 2;

/// Fully materialized table configuration.
pub struct TableSpec<'a> {
	pub headers: Vec<String>,
	pub widths: Vec<Constraint>,
	pub rows: Vec<Row<'a>>,
	pub title: Option<String>,
	/// Shown instead of the rows when there are none.
	pub placeholder: Option<&'a str>,
}

/// Layout constraint for a configured column width.
#[must_use]
pub fn constraint_for(width: ColumnWidth) -> Constraint {
	match width {
		ColumnWidth::Percent(percent) => Constraint::Percentage(percent),
		ColumnWidth::Fixed(cells) => Constraint::Length(cells),
		ColumnWidth::Auto => Constraint::Fill(1),
	}
}

/// Build a table row from already formatted cell text.
#[must_use]
pub fn text_row(cells: &[String]) -> Row<'static> {
	Row::new(cells.iter().cloned().map(Cell::from))
}

/// Number of result rows visible in a table drawn into `area`.
#[must_use]
pub fn visible_rows(area: Rect) -> usize {
	area.height
		.saturating_sub(TABLE_BORDER_ROWS + TABLE_HEADER_ROWS) as usize
}

/// Index of the result row drawn at screen row `row`, before applying the
/// scroll offset.
#[must_use]
pub fn row_at(area: Rect, row: u16) -> Option<usize> {
	let first = area.y.saturating_add(1 + TABLE_HEADER_ROWS);
	let last = area.bottom().saturating_sub(1);
	(row >= first && row < last).then(|| usize::from(row - first))
}

/// Render the bordered results table.
pub fn render_table(
	frame: &mut Frame,
	area: Rect,
	table_state: &mut TableState,
	scrollbar_state: &mut ScrollbarState,
	scrollbar_area: &mut Option<Rect>,
	spec: TableSpec<'_>,
	theme: &Theme,
) {
	*scrollbar_area = None;

	let mut block = Block::default()
		.borders(Borders::ALL)
		.border_set(ratatui::symbols::border::ROUNDED)
		.border_style(theme.border_style());
	if let Some(title) = spec.title.clone() {
		block = block.title(title);
	}

	let inner = block.inner(area);
	frame.render_widget(block, area);

	render_configured_table(frame, inner, table_state, scrollbar_state, scrollbar_area, theme, spec);
}

fn render_configured_table(
	frame: &mut Frame,
	area: Rect,
	table_state: &mut TableState,
	scrollbar_state: &mut ScrollbarState,
	scrollbar_area: &mut Option<Rect>,
	theme: &Theme,
	spec: TableSpec<'_>,
) {
	let header = Row::new(spec.headers.into_iter().map(Cell::from).collect::<Vec<_>>())
		.style(theme.header)
		.height(1)
		.bottom_margin(1);

	let mut widths = spec.widths;
	if widths.is_empty() {
		widths = vec![Constraint::Fill(1)];
	}

	let available_rows = area.height.saturating_sub(TABLE_HEADER_ROWS) as usize;
	let total_rows = spec.rows.len();
	let needs_scrollbar = total_rows > available_rows && available_rows > 0;

	let table_area = if needs_scrollbar {
		Rect {
			width: area.width.saturating_sub(1),
			..area
		}
	} else {
		area
	};

	let table = Table::new(spec.rows, widths)
		.header(header)
		.column_spacing(TABLE_COLUMN_SPACING)
		.highlight_spacing(HighlightSpacing::Always)
		.row_highlight_style(theme.row_highlight)
		.highlight_symbol(HIGHLIGHT_SYMBOL);
	frame.render_stateful_widget(table, table_area, table_state);

	if needs_scrollbar {
		render_scrollbar(frame, area, scrollbar_state, scrollbar_area, theme);
	}

	render_header_separator(frame, table_area, theme);

	if total_rows == 0
		&& let Some(placeholder) = spec.placeholder
	{
		render_placeholder(frame, table_area, placeholder, theme);
	}
}

fn render_header_separator(frame: &mut Frame, area: Rect, theme: &Theme) {
	let sep_y = area.y + 1;
	if area.height <= 1 || area.width == 0 {
		return;
	}

	let width = area.width as usize;
	let sep_rect = Rect {
		y: sep_y,
		height: 1,
		..area
	};
	if width <= 2 {
		frame.render_widget(Paragraph::new(" ".repeat(width)), sep_rect);
		return;
	}

	let middle = Span::styled("─".repeat(width - 2), theme.border_style());
	let line = Line::from(vec![Span::raw(" "), middle, Span::raw(" ")]);
	frame.render_widget(Paragraph::new(Text::from(line)), sep_rect);
}

fn render_placeholder(frame: &mut Frame, area: Rect, text: &str, theme: &Theme) {
	if area.height <= TABLE_HEADER_ROWS {
		return;
	}
	let message_area = Rect {
		y: area.y + TABLE_HEADER_ROWS,
		height: area.height - TABLE_HEADER_ROWS,
		..area
	};
	let empty = Paragraph::new(text)
		.style(Style::default().patch(theme.empty_style()))
		.alignment(Alignment::Center);
	frame.render_widget(empty, message_area);
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn widths_map_to_constraints() {
		assert_eq!(
			constraint_for(ColumnWidth::Percent(30)),
			Constraint::Percentage(30)
		);
		assert_eq!(constraint_for(ColumnWidth::Fixed(12)), Constraint::Length(12));
		assert_eq!(constraint_for(ColumnWidth::Auto), Constraint::Fill(1));
	}

	#[test]
	fn row_hit_testing_skips_border_and_header() {
		let area = Rect::new(0, 2, 40, 10);

		assert_eq!(row_at(area, 4), None);
		assert_eq!(row_at(area, 5), Some(0));
		assert_eq!(row_at(area, 10), Some(5));
		assert_eq!(row_at(area, 11), None);
		assert_eq!(visible_rows(area), 6);
	}
}
