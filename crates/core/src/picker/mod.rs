//! Search coordinator.
//!
//! A [`Picker`] owns the [`QueryState`] of one dialog, talks to the fetch
//! worker and turns user intent (typing, navigation, commit) into state
//! transitions. It never blocks: page loads run on the worker and their results
//! are applied when the event loop calls [`Picker::pump`].

mod state;

use std::collections::VecDeque;
use std::fmt;
use std::sync::Arc;
use std::sync::mpsc::{RecvTimeoutError, TryRecvError};
use std::time::{Duration, Instant};

use tracing::{debug, info, trace, warn};

pub use self::state::QueryState;
use crate::debounce::Debouncer;
use crate::destination::Destination;
use crate::error::HookError;
use crate::fetch::{FetchResult, FetchRuntime, PageRequest};
use crate::hooks::{CreateHookRegistry, CreateRequest};
use crate::render::{self, Escaping, RenderedTable};
use crate::selection::{ScrollWindow, next_index, previous_index};
use crate::source::RecordSource;
use crate::types::{
	CloseReason, Commit, NAME_FIELD, Notification, PickerConfig, PickerOutcome, merge_filters,
	row_identifier,
};

pub struct Picker {
	config: PickerConfig,
	state: QueryState,
	runtime: FetchRuntime,
	debouncer: Debouncer<String>,
	/// Latest text typed by the user, including text still waiting on the
	/// debouncer.
	input: String,
	destination: Option<Box<dyn Destination>>,
	hooks: CreateHookRegistry,
	notifications: VecDeque<Notification>,
	scroll: ScrollWindow,
	close_reason: Option<CloseReason>,
	commit: Option<Commit>,
}

impl Picker {
	pub fn new(config: PickerConfig, source: Arc<dyn RecordSource>) -> Self {
		debug!(
			entity = config.entity(),
			page_size = config.page_size(),
			fields = ?config.fetch_fields(),
			"creating picker"
		);
		Self {
			debouncer: Debouncer::new(config.debounce()),
			config,
			state: QueryState::default(),
			runtime: FetchRuntime::new(source),
			input: String::new(),
			destination: None,
			hooks: CreateHookRegistry::default(),
			notifications: VecDeque::new(),
			scroll: ScrollWindow::default(),
			close_reason: None,
			commit: None,
		}
	}

	/// Bind the sink that receives the committed identifier.
	#[must_use]
	pub fn with_destination(mut self, destination: impl Destination + 'static) -> Self {
		self.destination = Some(Box::new(destination));
		self
	}

	#[must_use]
	pub fn with_hooks(mut self, hooks: CreateHookRegistry) -> Self {
		self.hooks = hooks;
		self
	}

	pub fn config(&self) -> &PickerConfig {
		&self.config
	}

	pub fn state(&self) -> &QueryState {
		&self.state
	}

	pub fn scroll(&self) -> &ScrollWindow {
		&self.scroll
	}

	/// Latest typed text, which may be newer than [`QueryState::text`] while a
	/// debounced search is pending.
	pub fn input(&self) -> &str {
		&self.input
	}

	/// Reset the dialog to `prefill` and load the first page.
	pub fn open(&mut self, prefill: &str) {
		self.close_reason = None;
		self.commit = None;
		self.notifications.clear();
		self.debouncer.cancel();
		self.input = prefill.to_string();
		self.fresh_search(prefill.to_string());
	}

	/// Record a keystroke. The search runs once the text has been stable for
	/// the configured debounce delay; see [`tick`](Self::tick).
	pub fn on_search_text_changed(&mut self, text: &str, now: Instant) {
		if self.is_closed() {
			return;
		}
		self.input = text.to_string();
		self.debouncer.schedule(text.to_string(), now);
	}

	/// Fire the debounced search if it is due. Returns `true` when a new search
	/// started.
	pub fn tick(&mut self, now: Instant) -> bool {
		if self.is_closed() {
			return false;
		}
		match self.debouncer.poll(now) {
			Some(text) => {
				self.fresh_search(text.trim().to_string());
				true
			}
			None => false,
		}
	}

	/// When the pending debounced search is due, for event loop timeouts.
	pub fn next_deadline(&self) -> Option<Instant> {
		self.debouncer.deadline()
	}

	/// Discard everything shown and search `text` from the first page.
	///
	/// Any load still in flight belongs to the previous epoch and is ignored
	/// when it completes.
	pub fn fresh_search(&mut self, text: String) {
		if self.is_closed() {
			return;
		}
		let epoch = self.runtime.advance_epoch();
		debug!(epoch, text = %text, "fresh search");
		self.state.reset(text, epoch);
		self.scroll.reset();
		self.load_next_page();
	}

	/// Clear the quick filters and the search text.
	pub fn reset_filters(&mut self) {
		if self.is_closed() {
			return;
		}
		self.debouncer.cancel();
		self.input.clear();
		self.state.clear_quick_filters();
		self.fresh_search(String::new());
	}

	/// Flip the quick filter named `key` and search again. Unknown keys are
	/// ignored.
	pub fn toggle_quick_filter(&mut self, key: &str) -> bool {
		if self.is_closed() {
			return false;
		}
		let Some(filter) = self.config.quick_filter(key) else {
			debug!(key, "ignoring unknown quick filter");
			return false;
		};
		let active = self.state.toggle_quick_filter(&filter.key, &filter.value);
		debug!(key, active, "toggled quick filter");
		self.debouncer.cancel();
		self.fresh_search(self.input.trim().to_string());
		true
	}

	/// Request the next page. A no-op while a page is loading or once the
	/// results are exhausted.
	pub fn load_next_page(&mut self) -> bool {
		if self.is_closed() || self.state.is_loading() || !self.state.has_more() {
			return false;
		}

		let page_size = self.config.page_size();
		let request = PageRequest {
			entity: self.config.entity().to_string(),
			text: self.state.text().to_string(),
			page_size,
			offset: self.state.page_index() * page_size,
			filters: merge_filters(
				self.config.static_filters(),
				self.state.active_quick_filters(),
			),
			fetch_fields: self.config.fetch_fields().to_vec(),
		};

		self.state.set_loading(true);
		if !self.runtime.dispatch(request) {
			self.worker_lost();
			return false;
		}
		true
	}

	/// Apply every completed page load. Returns `true` when the state changed.
	pub fn pump(&mut self) -> bool {
		let mut changed = false;
		loop {
			match self.runtime.try_recv() {
				Ok(result) => changed |= self.apply_fetch_result(result),
				Err(TryRecvError::Empty) => break,
				Err(TryRecvError::Disconnected) => {
					changed |= self.worker_lost();
					break;
				}
			}
		}
		changed
	}

	/// Block until the current page load completes or `timeout` passes.
	/// Returns `true` when nothing is loading anymore.
	pub fn wait_until_idle(&mut self, timeout: Duration) -> bool {
		let deadline = Instant::now() + timeout;
		while self.state.is_loading() {
			let remaining = deadline.saturating_duration_since(Instant::now());
			if remaining.is_zero() {
				return false;
			}
			match self.runtime.recv_timeout(remaining) {
				Ok(result) => {
					self.apply_fetch_result(result);
				}
				Err(RecvTimeoutError::Timeout) => return false,
				Err(RecvTimeoutError::Disconnected) => {
					self.worker_lost();
				}
			}
		}
		true
	}

	pub(crate) fn apply_fetch_result(&mut self, result: FetchResult) -> bool {
		if !self.runtime.matches_current(result.epoch) || self.is_closed() {
			trace!(
				epoch = result.epoch,
				current = self.runtime.epoch(),
				"dropping stale page"
			);
			return false;
		}
		self.runtime.record_completion(result.epoch);
		self.state.set_loading(false);

		match result.outcome {
			Ok(page) => {
				let had_selection = self.state.selected_index().is_some();
				debug!(
					epoch = result.epoch,
					hits = page.hit_count,
					rows = page.rows.len(),
					"page loaded"
				);
				self.state.set_has_more(page.hit_count == self.config.page_size());
				self.state.append_rows(page.rows);
				self.state.advance_page();
				if !had_selection {
					if let Some(index) = self.state.selected_index() {
						self.scroll.ensure_visible(index);
					}
				}
			}
			Err(err) => {
				warn!(epoch = result.epoch, %err, "search failed");
				self.state.set_has_more(false);
				self.notify(Notification::error("Search failed", err.to_string()));
			}
		}
		true
	}

	fn worker_lost(&mut self) -> bool {
		if !self.state.is_loading() {
			return false;
		}
		warn!("fetch worker is gone");
		self.state.set_loading(false);
		self.state.set_has_more(false);
		self.notify(Notification::error(
			"Search failed",
			"the background fetch worker stopped",
		));
		true
	}

	pub fn move_down(&mut self) {
		if self.is_closed() {
			return;
		}
		let len = self.state.rows().len();
		let current = self.state.selected_index();
		if len > 0 && current == Some(len - 1) && self.state.has_more() {
			self.load_next_page();
			return;
		}
		self.select(next_index(current, len));
	}

	pub fn move_up(&mut self) {
		if self.is_closed() {
			return;
		}
		let len = self.state.rows().len();
		self.select(previous_index(self.state.selected_index(), len));
	}

	/// Make the row at `index` active. Returns `false` when it does not exist.
	pub fn set_active(&mut self, index: usize) -> bool {
		if self.is_closed() || index >= self.state.rows().len() {
			return false;
		}
		self.select(Some(index));
		true
	}

	fn select(&mut self, index: Option<usize>) {
		if index == self.state.selected_index() {
			return;
		}
		self.state.set_selected(index);
		if let Some(index) = self.state.selected_index() {
			self.scroll.ensure_visible(index);
		}
	}

	/// Number of rows the front-end can show at once.
	pub fn set_viewport_height(&mut self, height: usize) {
		self.scroll.set_height(height, self.state.selected_index());
	}

	/// Write the active row's identifier to the destination and close.
	///
	/// Without a bound destination or an active row nothing happens and the
	/// dialog stays open.
	pub fn commit(&mut self) -> bool {
		if self.is_closed() {
			return false;
		}
		let Some(field) = self.config.target_field().map(str::to_string) else {
			trace!("commit ignored: no destination field");
			return false;
		};
		let Some(destination) = self.destination.as_mut() else {
			trace!("commit ignored: no destination bound");
			return false;
		};
		let Some(row) = self.state.selected_row() else {
			trace!("commit ignored: no active row");
			return false;
		};
		let Some(value) = row_identifier(row).map(str::to_string) else {
			trace!("commit ignored: active row has no identifier");
			return false;
		};

		destination.set_value(&field, &value);
		info!(field = %field, value = %value, "committed selection");
		self.commit = Some(Commit {
			field,
			value,
			row: Some(row.clone()),
		});
		self.finish(CloseReason::Committed);
		true
	}

	/// Select the row at `index` and commit it, as a click does.
	pub fn commit_index(&mut self, index: usize) -> bool {
		self.set_active(index) && self.commit()
	}

	/// Run the create-new hook registered for the entity and commit the
	/// identifier it returns.
	pub fn create_new(&mut self) -> bool {
		if self.is_closed() {
			return false;
		}
		let entity = self.config.entity().to_string();
		if !self.config.allow_create_new() {
			self.notify(Notification::info(
				"Create new",
				format!("Creating new {entity} records is disabled here"),
			));
			return false;
		}
		let Some(hook) = self.hooks.get(&entity) else {
			self.notify(Notification::info(
				"Create new",
				format!("No create flow is registered for {entity}"),
			));
			return false;
		};

		let request = CreateRequest {
			entity: entity.clone(),
			prefill: self.input.trim().to_string(),
		};
		let created = match hook.create(&request) {
			Ok(id) if id.trim().is_empty() => Err(HookError::Failed(
				"the create flow returned an empty identifier".into(),
			)),
			other => other,
		};

		match created {
			Ok(value) => {
				let field = self
					.config
					.target_field()
					.unwrap_or(NAME_FIELD)
					.to_string();
				if let (Some(destination), Some(_)) =
					(self.destination.as_mut(), self.config.target_field())
				{
					destination.set_value(&field, &value);
				}
				info!(%entity, value = %value, "created record");
				self.commit = Some(Commit {
					field,
					value,
					row: None,
				});
				self.finish(CloseReason::Created);
				true
			}
			Err(HookError::Cancelled) => {
				debug!(%entity, "create flow cancelled");
				false
			}
			Err(err) => {
				warn!(%entity, %err, "create flow failed");
				self.notify(Notification::error("Create failed", err.to_string()));
				false
			}
		}
	}

	/// Close the dialog without writing anything.
	pub fn cancel(&mut self) {
		if !self.is_closed() {
			debug!("picker cancelled");
			self.finish(CloseReason::Cancelled);
		}
	}

	fn finish(&mut self, reason: CloseReason) {
		self.debouncer.cancel();
		self.runtime.advance_epoch();
		self.state.set_loading(false);
		self.close_reason = Some(reason);
	}

	pub fn is_closed(&self) -> bool {
		self.close_reason.is_some()
	}

	pub fn close_reason(&self) -> Option<CloseReason> {
		self.close_reason
	}

	pub fn outcome(&self) -> PickerOutcome {
		match &self.commit {
			Some(commit) => PickerOutcome {
				accepted: true,
				query: self.input.clone(),
				commit: Some(commit.clone()),
			},
			None => PickerOutcome::cancelled(self.input.clone()),
		}
	}

	pub fn render(&self, escaping: Escaping) -> RenderedTable {
		render::render(&self.state, self.config.columns(), escaping)
	}

	fn notify(&mut self, notification: Notification) {
		self.notifications.push_back(notification);
	}

	/// Oldest notification the user has not dismissed yet.
	pub fn notification(&self) -> Option<&Notification> {
		self.notifications.front()
	}

	pub fn take_notification(&mut self) -> Option<Notification> {
		self.notifications.pop_front()
	}
}

impl fmt::Debug for Picker {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Picker")
			.field("config", &self.config)
			.field("state", &self.state)
			.field("input", &self.input)
			.field("hooks", &self.hooks)
			.field("close_reason", &self.close_reason)
			.finish_non_exhaustive()
	}
}
