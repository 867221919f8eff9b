use linkpick_core::{Escaping, RenderedTable, TableBody};
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Margin, Rect};
use ratatui::widgets::{ScrollbarState, TableState};

use super::App;
use crate::components::tables::{constraint_for, text_row, visible_rows};
use crate::components::{
	InputContext, ProgressState, TableSpec, render_footer, render_input, render_notice,
	render_quick_filters, render_table,
};

impl App<'_> {
	pub(crate) fn draw(&mut self, frame: &mut Frame) {
		let area = frame.area().inner(Margin {
			vertical: 0,
			horizontal: 1,
		});

		let filter_rows = u16::from(!self.picker.config().quick_filters().is_empty());
		let layout = Layout::default()
			.direction(Direction::Vertical)
			.constraints([
				Constraint::Length(1),
				Constraint::Length(filter_rows),
				Constraint::Min(3),
				Constraint::Length(1),
			])
			.split(area);

		let (progress_text, progress_complete) = self.progress_status();
		let input_ctx = InputContext {
			search_input: &self.search_input,
			placeholder: Some(self.labels.placeholder.as_str()),
			area: layout[0],
			theme: &self.style.theme,
		};
		let progress_state = ProgressState {
			progress_text: &progress_text,
			progress_complete,
			throbber_state: &self.throbber_state,
		};
		render_input(frame, input_ctx, progress_state);

		let state = self.picker.state();
		render_quick_filters(
			frame,
			layout[1],
			self.picker.config().quick_filters(),
			|key| state.is_quick_filter_active(key),
			&self.style.theme,
		);

		self.results.area = Some(layout[2]);
		self.picker.set_viewport_height(visible_rows(layout[2]));
		let table = self.picker.render(Escaping::Terminal);
		self.render_results(frame, layout[2], &table);

		render_footer(
			frame,
			layout[3],
			table.pager,
			table.rows().len(),
			&self.labels.hint,
			&self.style.theme,
		);

		if let Some(notice) = self.picker.notification() {
			render_notice(frame, frame.area(), notice, &self.style.theme);
		}
	}

	fn progress_status(&self) -> (String, bool) {
		let state = self.picker.state();
		if state.is_loading() {
			("Loading".to_string(), false)
		} else {
			(format!("{} rows", state.rows().len()), true)
		}
	}

	fn render_results(&mut self, frame: &mut Frame, area: Rect, table: &RenderedTable) {
		let widths = table
			.headers
			.iter()
			.map(|header| constraint_for(header.width))
			.collect();
		let headers = table
			.headers
			.iter()
			.map(|header| header.label.clone())
			.collect();
		let (rows, placeholder) = match &table.body {
			TableBody::Rows(rows) => (
				rows.iter().map(|row| text_row(&row.cells)).collect(),
				None,
			),
			TableBody::Placeholder(text) => (Vec::new(), Some(text.as_str())),
		};
		let total = table.rows().len();

		let selected = self.picker.state().selected_index();
		self.results.table_state = TableState::default()
			.with_offset(self.picker.scroll().offset())
			.with_selected(selected);
		self.results.scrollbar_state = ScrollbarState::new(total)
			.viewport_content_length(self.picker.scroll().height())
			.position(selected.unwrap_or(0));

		let spec = TableSpec {
			headers,
			widths,
			rows,
			title: Some(format!(" {} ", self.labels.title)),
			placeholder,
		};
		render_table(
			frame,
			area,
			&mut self.results.table_state,
			&mut self.results.scrollbar_state,
			&mut self.results.scrollbar_area,
			spec,
			&self.style.theme,
		);
	}
}
