//! State management for the results table.

use ratatui::layout::Rect;
use ratatui::widgets::{ScrollbarState, TableState};

use crate::components::point_in_rect;
use crate::components::tables::row_at;

/// Aggregate state for the results table and its interactions.
#[derive(Default)]
pub(crate) struct ResultsState {
	/// Selection and scroll offset as last rendered.
	pub table_state: TableState,
	pub scrollbar_state: ScrollbarState,
	/// Screen area of the scrollbar if rendered.
	pub scrollbar_area: Option<Rect>,
	/// Last known results area on screen, borders included.
	pub area: Option<Rect>,
	/// Whether the mouse is currently hovering the results table.
	pub hovered: bool,
}

impl ResultsState {
	pub fn update_hover(&mut self, column: u16, row: u16) {
		self.hovered = self
			.area
			.is_some_and(|area| point_in_rect(column, row, area));
	}

	/// Result index drawn under the screen position, if any.
	pub fn index_at(&self, column: u16, row: u16) -> Option<usize> {
		let area = self.area?;
		if !point_in_rect(column, row, area) {
			return None;
		}
		if self
			.scrollbar_area
			.is_some_and(|scrollbar| point_in_rect(column, row, scrollbar))
		{
			return None;
		}
		row_at(area, row).map(|visible| self.table_state.offset() + visible)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn clicks_are_offset_by_the_scroll_position() {
		let mut results = ResultsState {
			area: Some(Rect::new(0, 2, 40, 10)),
			..ResultsState::default()
		};
		*results.table_state.offset_mut() = 4;

		assert_eq!(results.index_at(5, 5), Some(4));
		assert_eq!(results.index_at(5, 7), Some(6));
		assert_eq!(results.index_at(5, 3), None);
		assert_eq!(results.index_at(50, 5), None);
	}
}
