use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use throbber_widgets_tui::{Throbber, ThrobberState};

use crate::input::SearchInput;
use crate::style::Theme;

/// Argument bundle for rendering the input area.
pub struct InputContext<'a> {
	pub search_input: &'a SearchInput<'a>,
	/// Shown while the input is empty.
	pub placeholder: Option<&'a str>,
	pub area: Rect,
	pub theme: &'a Theme,
}

/// Right-aligned status next to the input.
pub struct ProgressState<'a> {
	pub progress_text: &'a str,
	/// Hides the spinner.
	pub progress_complete: bool,
	pub throbber_state: &'a ThrobberState,
}

/// Render the input row with optional placeholder.
pub fn render_input(
	frame: &mut ratatui::Frame,
	input: InputContext<'_>,
	progress: ProgressState<'_>,
) {
	let InputContext {
		search_input,
		placeholder,
		area,
		theme,
	} = input;
	let ProgressState {
		progress_text,
		progress_complete,
		throbber_state,
	} = progress;

	search_input.render_textarea(frame, area);

	if search_input.text().is_empty()
		&& let Some(placeholder_text) = placeholder
	{
		render_placeholder(frame, area, placeholder_text, theme);
	}

	render_progress(
		frame,
		area,
		progress_text,
		progress_complete,
		throbber_state,
		theme,
	);
}

fn render_placeholder(frame: &mut ratatui::Frame, area: Rect, text: &str, theme: &Theme) {
	if area.width == 0 || area.height == 0 || text.is_empty() {
		return;
	}
	let display_text: String = text.chars().take(area.width as usize).collect();
	frame.buffer_mut().set_line(
		area.left(),
		area.top(),
		&Line::from(Span::styled(display_text, theme.empty_style())),
		area.width,
	);
}

fn render_progress(
	frame: &mut ratatui::Frame,
	area: Rect,
	progress_text: &str,
	progress_complete: bool,
	throbber_state: &ThrobberState,
	theme: &Theme,
) {
	if area.width == 0 || area.height == 0 || progress_text.is_empty() {
		return;
	}

	let muted_style = theme.empty_style();
	let mut line = Line::default();
	if !progress_complete {
		let spinner = Throbber::default()
			.style(muted_style)
			.throbber_style(muted_style);
		line.spans.push(spinner.to_symbol_span(throbber_state));
	}
	line.spans
		.push(Span::styled(progress_text.to_string(), muted_style));

	let line_width = line.width() as u16;
	if line_width == 0 {
		return;
	}

	let buffer = frame.buffer_mut();
	let mut start_x = if line_width >= area.width {
		area.left()
	} else {
		area.right().saturating_sub(line_width)
	};

	// Keep a gap after the typed text.
	let input_row = area.top();
	let last_char_x = (area.left()..area.right())
		.filter(|&x| {
			buffer
				.cell((x, input_row))
				.is_some_and(|cell| !cell.symbol().trim().is_empty())
		})
		.last();
	if let Some(last_x) = last_char_x {
		start_x = start_x.max(last_x.saturating_add(3));
	}

	if start_x >= area.right() {
		return;
	}

	let max_width = area
		.right()
		.saturating_sub(start_x)
		.min(line_width)
		.min(area.width);
	if max_width == 0 {
		return;
	}

	buffer.set_line(start_x, input_row, &line, max_width);
}
