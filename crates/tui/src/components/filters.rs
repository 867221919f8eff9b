use linkpick_core::QuickFilter;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::style::Theme;

/// Highest function key bound to a quick filter.
pub const MAX_QUICK_FILTERS: usize = 9;

/// Render the quick filter toggles as `F1 [x] Label` chips.
pub fn render_quick_filters(
	frame: &mut Frame,
	area: Rect,
	filters: &[QuickFilter],
	is_active: impl Fn(&str) -> bool,
	theme: &Theme,
) {
	if area.width == 0 || area.height == 0 || filters.is_empty() {
		return;
	}

	let mut spans = Vec::with_capacity(filters.len() * 3);
	for (index, filter) in filters.iter().take(MAX_QUICK_FILTERS).enumerate() {
		if index > 0 {
			spans.push(Span::raw("  "));
		}
		let active = is_active(&filter.key);
		spans.push(Span::styled(format!("F{} ", index + 1), theme.empty_style()));
		let (mark, style) = if active {
			("[x] ", theme.highlight)
		} else {
			("[ ] ", theme.prompt)
		};
		spans.push(Span::styled(format!("{mark}{}", filter.label), style));
	}

	frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
