use ratatui::style::{Color, Style};

/// Styles for each element of the picker dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
	/// Column headers, borders and the separator line.
	pub header: Style,
	/// The active row.
	pub row_highlight: Style,
	/// Search input text.
	pub prompt: Style,
	/// Placeholders, hints and disabled controls.
	pub empty: Style,
	/// Active quick filters and enabled controls.
	pub highlight: Style,
	/// Error notifications.
	pub error: Style,
}

impl Theme {
	/// Border colour shared by every framed widget.
	#[must_use]
	pub fn border_style(&self) -> Style {
		Style::new().fg(self.header.fg.unwrap_or(Color::Reset))
	}

	/// Muted style without background or modifiers.
	#[must_use]
	pub fn empty_style(&self) -> Style {
		Style::new().fg(self.empty.fg.unwrap_or(Color::DarkGray))
	}
}

/// A named theme with its alternate names.
#[derive(Debug, Clone)]
pub struct ThemeRegistration {
	pub name: String,
	pub theme: Theme,
	pub aliases: Vec<String>,
}

impl ThemeRegistration {
	pub fn new(name: impl Into<String>, theme: Theme) -> Self {
		Self {
			name: name.into(),
			theme,
			aliases: Vec::new(),
		}
	}

	/// Adds a single alias to this theme registration.
	pub fn alias(mut self, alias: impl Into<String>) -> Self {
		self.aliases.push(alias.into());
		self
	}

	/// Whether `name` refers to this theme, ignoring case.
	pub fn answers_to(&self, name: &str) -> bool {
		let name = name.trim();
		self.name.eq_ignore_ascii_case(name)
			|| self
				.aliases
				.iter()
				.any(|alias| alias.eq_ignore_ascii_case(name))
	}
}
