//! Single-line search input backed by `tui-textarea`.

use ratatui::Frame;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::layout::Rect;
use ratatui::style::Style;
use tui_textarea::TextArea;

pub struct SearchInput<'a> {
	textarea: TextArea<'a>,
}

impl<'a> SearchInput<'a> {
	pub fn new(initial: &str) -> Self {
		let mut input = Self {
			textarea: TextArea::default(),
		};
		input.set_text(initial);
		input
	}

	pub fn set_style(&mut self, style: Style) {
		self.textarea.set_style(style);
	}

	/// The current query, always a single line.
	pub fn text(&self) -> &str {
		self.textarea
			.lines()
			.first()
			.map(String::as_str)
			.unwrap_or("")
	}

	pub fn set_text(&mut self, text: &str) {
		let mut textarea = TextArea::new(vec![text.replace(['\n', '\r'], " ")]);
		textarea.set_cursor_line_style(Style::default());
		textarea.set_style(self.textarea.style());
		textarea.move_cursor(tui_textarea::CursorMove::End);
		self.textarea = textarea;
	}

	pub fn clear(&mut self) {
		self.set_text("");
	}

	/// Feed a key to the text area. Returns `true` when the text changed.
	///
	/// Keys that would add a line are swallowed.
	pub fn input(&mut self, key: KeyEvent) -> bool {
		if matches!(key.code, KeyCode::Enter)
			|| (key.code == KeyCode::Char('m') && key.modifiers.contains(KeyModifiers::CONTROL))
		{
			return false;
		}
		let before = self.text().to_string();
		self.textarea.input(key);
		self.text() != before
	}

	pub fn render_textarea(&self, frame: &mut Frame, area: Rect) {
		frame.render_widget(&self.textarea, area);
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn key(code: KeyCode) -> KeyEvent {
		KeyEvent::new(code, KeyModifiers::NONE)
	}

	#[test]
	fn typing_reports_changes() {
		let mut input = SearchInput::new("al");

		assert!(input.input(key(KeyCode::Char('i'))));
		assert_eq!(input.text(), "ali");
		assert!(input.input(key(KeyCode::Backspace)));
		assert_eq!(input.text(), "al");
		assert!(!input.input(key(KeyCode::Left)));
	}

	#[test]
	fn enter_never_splits_the_line() {
		let mut input = SearchInput::new("ali");

		assert!(!input.input(key(KeyCode::Enter)));
		assert_eq!(input.text(), "ali");
	}
}
