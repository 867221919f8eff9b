//! Application runtime and event loop.

use std::collections::VecDeque;
use std::io::{self, stdout};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, mpsc};
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Context, Result, anyhow};
use linkpick_core::{Picker, PickerOutcome};
use ratatui::crossterm::event::{
	self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind,
};
use ratatui::crossterm::execute;
use tracing::debug;

use crate::App;
use crate::config::UiLabels;
use crate::style::StyleConfig;

/// Open `picker` in the terminal with `prefill` as the initial search text
/// and run it until the user commits, creates or cancels.
pub fn run(
	picker: Picker,
	labels: UiLabels,
	style: StyleConfig,
	prefill: &str,
) -> Result<PickerOutcome> {
	let mut app = App::new(picker, labels, style);
	app.open(prefill);
	app.run()
}

impl App<'_> {
	/// Pump the terminal event loop until the dialog closes.
	///
	/// The terminal is restored and the input thread stopped on every exit
	/// path, including draw failures.
	pub fn run(&mut self) -> Result<PickerOutcome> {
		let mut terminal = ratatui::init();
		let setup = terminal
			.clear()
			.and_then(|()| execute!(stdout(), EnableMouseCapture));

		let (event_tx, event_rx) = mpsc::channel();
		let event_loop_running = Arc::new(AtomicBool::new(true));
		let event_loop_flag = Arc::clone(&event_loop_running);

		let event_thread = thread::spawn(move || -> Result<()> {
			while event_loop_flag.load(Ordering::Relaxed) {
				if event::poll(Duration::from_millis(50))? {
					let event = event::read()?;
					if event_tx.send(event).is_err() {
						break;
					}
				}
			}
			Ok(())
		});

		let result = match setup {
			Ok(()) => self.event_loop(&event_rx, |app| {
				terminal.draw(|frame| app.draw(frame)).map(drop)
			}),
			Err(err) => Err(err.into()),
		};

		event_loop_running.store(false, Ordering::Relaxed);
		let mouse = execute!(stdout(), DisableMouseCapture);
		ratatui::restore();
		let input = match event_thread.join() {
			Ok(join_result) => join_result,
			Err(err) => std::panic::resume_unwind(err),
		};

		let outcome = result?;
		mouse?;
		input?;
		Ok(outcome)
	}

	/// Drain input, tick and redraw until an event closes the dialog or
	/// drawing fails.
	pub(crate) fn event_loop(
		&mut self,
		events: &mpsc::Receiver<Event>,
		mut draw: impl FnMut(&mut Self) -> io::Result<()>,
	) -> Result<PickerOutcome> {
		let mut pending_events = VecDeque::new();

		loop {
			loop {
				match events.try_recv() {
					Ok(event) => pending_events.push_back(event),
					Err(mpsc::TryRecvError::Empty) => break,
					Err(mpsc::TryRecvError::Disconnected) => {
						return Err(anyhow!("input event channel disconnected"));
					}
				}
			}

			let now = Instant::now();
			while let Some(event) = pending_events.pop_front() {
				let outcome = match event {
					Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key, now),
					Event::Mouse(mouse) => self.handle_mouse(mouse),
					_ => None,
				};
				if let Some(outcome) = outcome {
					debug!(accepted = outcome.accepted, "picker closed");
					return Ok(outcome);
				}
			}

			self.tick(Instant::now());
			draw(self).context("failed to draw the picker")?;

			thread::sleep(Duration::from_millis(16));
		}
	}
}

#[cfg(test)]
mod tests {
	use std::sync::Arc;

	use linkpick_core::{
		BulkFetchRequest, CloseReason, PickerConfig, Record, RecordSource, SearchHit,
		SearchRequest, SourceError,
	};
	use ratatui::Terminal;
	use ratatui::backend::TestBackend;
	use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

	use super::*;

	struct Empty;

	impl RecordSource for Empty {
		fn base_search(&self, _: &SearchRequest) -> Result<Vec<SearchHit>, SourceError> {
			Ok(Vec::new())
		}

		fn bulk_fetch(&self, _: &BulkFetchRequest) -> Result<Vec<Record>, SourceError> {
			Ok(Vec::new())
		}
	}

	fn app() -> App<'static> {
		let config = PickerConfig::builder("Customer").build().unwrap();
		let mut app = App::new(
			Picker::new(config, Arc::new(Empty)),
			UiLabels::for_entity("Customer"),
			StyleConfig::default(),
		);
		app.open("");
		app
	}

	#[test]
	fn escape_ends_the_loop_with_a_cancellation() {
		let mut app = app();
		let mut terminal = Terminal::new(TestBackend::new(60, 12)).unwrap();
		let (tx, rx) = mpsc::channel();
		tx.send(Event::Key(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE)))
			.unwrap();

		let outcome = app
			.event_loop(&rx, |app| terminal.draw(|frame| app.draw(frame)).map(drop))
			.unwrap();

		assert!(!outcome.accepted);
		assert_eq!(app.picker().close_reason(), Some(CloseReason::Cancelled));
	}

	#[test]
	fn draw_failures_are_returned_to_the_caller() {
		let mut app = app();
		let (_tx, rx) = mpsc::channel();

		let err = app
			.event_loop(&rx, |_| Err(io::Error::other("terminal gone")))
			.unwrap_err();

		assert!(format!("{err:#}").contains("terminal gone"));
	}
}
