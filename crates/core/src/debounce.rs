//! Cancellable delayed task used for search-as-you-type.

use std::time::{Duration, Instant};

/// Holds at most one pending value and releases it once `delay` has passed
/// without a newer value being scheduled.
///
/// The debouncer does not own a timer: the event loop calls [`poll`] with the
/// current time on every tick.
///
/// [`poll`]: Debouncer::poll
#[derive(Debug, Clone)]
pub struct Debouncer<T> {
	delay: Duration,
	pending: Option<Pending<T>>,
}

#[derive(Debug, Clone)]
struct Pending<T> {
	value: T,
	deadline: Instant,
}

impl<T> Debouncer<T> {
	pub fn new(delay: Duration) -> Self {
		Self {
			delay,
			pending: None,
		}
	}

	pub fn delay(&self) -> Duration {
		self.delay
	}

	/// Schedule `value`, replacing (and so cancelling) anything still pending.
	pub fn schedule(&mut self, value: T, now: Instant) {
		self.pending = Some(Pending {
			value,
			deadline: now + self.delay,
		});
	}

	/// Drop the pending value, if any.
	pub fn cancel(&mut self) -> Option<T> {
		self.pending.take().map(|pending| pending.value)
	}

	pub fn is_pending(&self) -> bool {
		self.pending.is_some()
	}

	pub fn deadline(&self) -> Option<Instant> {
		self.pending.as_ref().map(|pending| pending.deadline)
	}

	/// Release the pending value if its quiet period has elapsed.
	pub fn poll(&mut self, now: Instant) -> Option<T> {
		match &self.pending {
			Some(pending) if now >= pending.deadline => self.cancel(),
			_ => None,
		}
	}
}
