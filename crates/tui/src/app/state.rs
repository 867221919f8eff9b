//! Core state container for the terminal dialog.
//!
//! [`App`] wraps a [`Picker`] with everything the terminal needs on top of
//! it: the text input, the table widget state and the spinner.

use std::time::Instant;

use linkpick_core::{Picker, PickerOutcome};
use throbber_widgets_tui::ThrobberState;

use super::results::ResultsState;
use crate::config::UiLabels;
use crate::input::SearchInput;
use crate::style::StyleConfig;

pub struct App<'a> {
	pub(crate) picker: Picker,
	/// Text input widget for the search query.
	pub search_input: SearchInput<'a>,
	pub(crate) labels: UiLabels,
	/// Current style and theme configuration.
	pub style: StyleConfig,
	pub(crate) throbber_state: ThrobberState,
	pub(crate) results: ResultsState,
}

impl<'a> App<'a> {
	pub fn new(picker: Picker, labels: UiLabels, style: StyleConfig) -> Self {
		let mut search_input = SearchInput::new("");
		search_input.set_style(style.theme.prompt);
		Self {
			picker,
			search_input,
			labels,
			style,
			throbber_state: ThrobberState::default(),
			results: ResultsState::default(),
		}
	}

	/// Show `prefill` in the input and start the first search.
	pub fn open(&mut self, prefill: &str) {
		self.search_input.set_text(prefill);
		self.picker.open(prefill);
	}

	pub fn picker(&self) -> &Picker {
		&self.picker
	}

	/// Advance timers and apply finished page loads.
	pub fn tick(&mut self, now: Instant) {
		self.picker.tick(now);
		self.picker.pump();
		if self.picker.state().is_loading() {
			self.throbber_state.calc_next();
		}
	}

	/// The final outcome once the dialog has closed.
	pub fn outcome(&self) -> Option<PickerOutcome> {
		self.picker.is_closed().then(|| self.picker.outcome())
	}
}
