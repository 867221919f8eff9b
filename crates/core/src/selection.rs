//! Keyboard navigation over the accumulated rows.

/// Index after pressing "down", clamped to the last row.
///
/// Returns `current` unchanged when there are no rows.
pub fn next_index(current: Option<usize>, len: usize) -> Option<usize> {
	if len == 0 {
		return current;
	}
	let next = current.map_or(0, |index| index.saturating_add(1));
	Some(next.min(len - 1))
}

/// Index after pressing "up", clamped to the first row.
///
/// Returns `current` unchanged when there are no rows.
pub fn previous_index(current: Option<usize>, len: usize) -> Option<usize> {
	if len == 0 {
		return current;
	}
	let previous = current.map_or(0, |index| index.saturating_sub(1));
	Some(previous.min(len - 1))
}

/// Visible slice of the result list, kept around the active row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScrollWindow {
	offset: usize,
	height: usize,
}

impl ScrollWindow {
	pub fn new(height: usize) -> Self {
		Self { offset: 0, height }
	}

	pub fn offset(&self) -> usize {
		self.offset
	}

	pub fn height(&self) -> usize {
		self.height
	}

	/// Update the number of visible rows, keeping `active` in view.
	pub fn set_height(&mut self, height: usize, active: Option<usize>) {
		self.height = height;
		if let Some(index) = active {
			self.ensure_visible(index);
		}
	}

	pub fn reset(&mut self) {
		self.offset = 0;
	}

	pub fn is_visible(&self, index: usize) -> bool {
		index >= self.offset && index < self.offset + self.height
	}

	/// Scroll the minimum distance needed for `index` to be visible. Returns
	/// `true` when the offset moved.
	pub fn ensure_visible(&mut self, index: usize) -> bool {
		if self.height == 0 || self.is_visible(index) {
			return false;
		}
		self.offset = if index < self.offset {
			index
		} else {
			index + 1 - self.height
		};
		true
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn navigation_stays_in_bounds() {
		for len in 1..6 {
			let mut index = None;
			for _ in 0..10 {
				index = next_index(index, len);
				assert!(index.is_some_and(|i| i < len));
			}
			assert_eq!(index, Some(len - 1));
			for _ in 0..10 {
				index = previous_index(index, len);
				assert!(index.is_some_and(|i| i < len));
			}
			assert_eq!(index, Some(0));
		}
	}

	#[test]
	fn navigation_is_a_no_op_without_rows() {
		assert_eq!(next_index(None, 0), None);
		assert_eq!(previous_index(None, 0), None);
	}

	#[test]
	fn up_from_no_selection_lands_on_first_row() {
		assert_eq!(previous_index(None, 3), Some(0));
		assert_eq!(next_index(None, 3), Some(0));
	}

	#[test]
	fn window_scrolls_to_nearest_edge() {
		let mut window = ScrollWindow::new(3);
		assert!(!window.ensure_visible(2));
		assert!(window.ensure_visible(3));
		assert_eq!(window.offset(), 1);
		assert!(window.ensure_visible(7));
		assert_eq!(window.offset(), 5);
		assert!(window.ensure_visible(2));
		assert_eq!(window.offset(), 2);
	}

	#[test]
	fn zero_height_window_never_scrolls() {
		let mut window = ScrollWindow::new(0);
		assert!(!window.ensure_visible(10));
		assert_eq!(window.offset(), 0);
	}
}
