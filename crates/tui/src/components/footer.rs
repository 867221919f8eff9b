use linkpick_core::PagerControl;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use unicode_truncate::UnicodeTruncateStr;

use crate::style::Theme;

/// Render the pager control on the left and the key hints on the right.
///
/// Hints are truncated first when the row is too narrow.
pub fn render_footer(
	frame: &mut Frame,
	area: Rect,
	pager: PagerControl,
	row_count: usize,
	hint: &str,
	theme: &Theme,
) {
	if area.width == 0 || area.height == 0 {
		return;
	}

	let pager_style = if pager.enabled {
		theme.highlight
	} else {
		theme.empty_style()
	};
	let left = Line::from(vec![
		Span::styled(format!("[{}]", pager.label), pager_style),
		Span::styled(format!(" {row_count} shown"), theme.empty_style()),
	]);
	let left_width = left.width() as u16;
	let buffer = frame.buffer_mut();
	buffer.set_line(area.left(), area.top(), &left, area.width);

	let room = usize::from(area.width.saturating_sub(left_width + 2));
	if room == 0 || hint.is_empty() {
		return;
	}
	let (shown, width) = hint.unicode_truncate(room);
	if shown.is_empty() {
		return;
	}
	let start = area.right().saturating_sub(width as u16);
	buffer.set_line(
		start,
		area.top(),
		&Line::from(Span::styled(shown.to_string(), theme.empty_style())),
		width as u16,
	);
}
