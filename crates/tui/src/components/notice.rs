use linkpick_core::{Notification, NotificationLevel};
use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use unicode_width::UnicodeWidthStr;

use crate::style::Theme;

const DISMISS_HINT: &str = "↵/esc to dismiss";

/// Centered box of `width` × `height` cells inside `area`, clamped to fit.
#[must_use]
pub fn centered(area: Rect, width: u16, height: u16) -> Rect {
	let width = width.min(area.width);
	let height = height.min(area.height);
	Rect {
		x: area.x + (area.width - width) / 2,
		y: area.y + (area.height - height) / 2,
		width,
		height,
	}
}

/// Render a blocking notification over everything else.
pub fn render_notice(frame: &mut Frame, area: Rect, notice: &Notification, theme: &Theme) {
	let accent = match notice.level {
		NotificationLevel::Error => theme.error,
		NotificationLevel::Info => theme.highlight,
	};

	let content_width = notice
		.message
		.width()
		.max(notice.title.width())
		.max(DISMISS_HINT.width()) as u16;
	let width = (content_width + 4).clamp(24, area.width.saturating_sub(4).max(24));
	let inner_width = width.saturating_sub(2).max(1);
	let message_lines = (notice.message.width() as u16).div_ceil(inner_width).max(1);
	let popup = centered(area, width, message_lines + 4);

	let block = Block::default()
		.borders(Borders::ALL)
		.border_set(ratatui::symbols::border::ROUNDED)
		.border_style(accent)
		.title(Span::styled(format!(" {} ", notice.title), accent));

	let text = vec![
		Line::from(notice.message.as_str()),
		Line::default(),
		Line::from(Span::styled(DISMISS_HINT, theme.empty_style())).alignment(Alignment::Right),
	];

	frame.render_widget(Clear, popup);
	frame.render_widget(
		Paragraph::new(text)
			.block(block)
			.wrap(Wrap { trim: true }),
		popup,
	);
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn centered_box_is_clamped_to_the_area() {
		let area = Rect::new(0, 0, 20, 10);

		assert_eq!(centered(area, 10, 4), Rect::new(5, 3, 10, 4));
		assert_eq!(centered(area, 30, 30), area);
	}
}
