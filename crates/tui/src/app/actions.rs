use std::time::Instant;

use linkpick_core::PickerOutcome;
use ratatui::crossterm::event::{
	KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use tracing::debug;

use super::App;
use crate::components::MAX_QUICK_FILTERS;

impl<'a> App<'a> {
	/// Process a keyboard event and return the outcome once the dialog closes.
	pub(crate) fn handle_key(&mut self, key: KeyEvent, now: Instant) -> Option<PickerOutcome> {
		// A notification blocks everything until dismissed.
		if self.picker.notification().is_some() {
			if matches!(key.code, KeyCode::Esc | KeyCode::Enter) {
				self.picker.take_notification();
			}
			return None;
		}

		let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
		match key.code {
			KeyCode::Esc => self.picker.cancel(),
			KeyCode::Char('c') if ctrl => self.picker.cancel(),
			KeyCode::Enter => {
				self.picker.commit();
			}
			KeyCode::Up => self.picker.move_up(),
			KeyCode::Down => self.picker.move_down(),
			KeyCode::PageUp => {
				for _ in 0..self.page_rows() {
					self.picker.move_up();
				}
			}
			KeyCode::PageDown => {
				for _ in 0..self.page_rows() {
					self.picker.move_down();
				}
			}
			KeyCode::Char('l') if ctrl => {
				self.picker.load_next_page();
			}
			KeyCode::Char('n') if ctrl => {
				self.picker.create_new();
			}
			KeyCode::Char('r') if ctrl => {
				self.search_input.clear();
				self.picker.reset_filters();
			}
			KeyCode::F(number) => self.toggle_quick_filter(usize::from(number)),
			_ => {
				if self.search_input.input(key) {
					self.picker
						.on_search_text_changed(self.search_input.text(), now);
				}
			}
		}
		self.outcome()
	}

	pub(crate) fn handle_mouse(&mut self, mouse: MouseEvent) -> Option<PickerOutcome> {
		if self.picker.notification().is_some() {
			return None;
		}
		self.results.update_hover(mouse.column, mouse.row);

		match mouse.kind {
			MouseEventKind::ScrollUp if self.results.hovered => self.picker.move_up(),
			MouseEventKind::ScrollDown if self.results.hovered => self.picker.move_down(),
			MouseEventKind::Down(MouseButton::Left) => {
				if let Some(index) = self.results.index_at(mouse.column, mouse.row) {
					debug!(index, "row clicked");
					self.picker.commit_index(index);
				}
			}
			_ => {}
		}
		self.outcome()
	}

	/// F-key `number` (1-based) toggles the quick filter in that position.
	fn toggle_quick_filter(&mut self, number: usize) {
		if number == 0 || number > MAX_QUICK_FILTERS {
			return;
		}
		let key = self
			.picker
			.config()
			.quick_filters()
			.get(number - 1)
			.map(|filter| filter.key.clone());
		if let Some(key) = key {
			self.picker.toggle_quick_filter(&key);
		}
	}

	fn page_rows(&self) -> usize {
		self.picker.scroll().height().max(1)
	}
}
