use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::mpsc::{Receiver, RecvTimeoutError, Sender, TryRecvError};
use std::time::Duration;

use super::commands::{FetchCommand, FetchResult, PageRequest};
use super::worker;
use crate::source::RecordSource;

/// Picker-side handle on the fetch worker.
///
/// Tracks the current search epoch and whether a request for it is still in
/// flight. Advancing the epoch abandons the outstanding request: its result
/// will no longer match and is dropped on arrival.
pub struct FetchRuntime {
	tx: Sender<FetchCommand>,
	rx: Receiver<FetchResult>,
	latest_epoch: Arc<AtomicU64>,
	epoch: u64,
	in_flight: Option<u64>,
}

impl FetchRuntime {
	pub fn new(source: Arc<dyn RecordSource>) -> Self {
		let (tx, rx, latest_epoch) = worker::spawn(source);
		Self {
			tx,
			rx,
			latest_epoch,
			epoch: 0,
			in_flight: None,
		}
	}

	pub fn epoch(&self) -> u64 {
		self.epoch
	}

	/// Start a new search generation.
	pub fn advance_epoch(&mut self) -> u64 {
		self.epoch = self.epoch.wrapping_add(1);
		self.in_flight = None;
		self.latest_epoch.store(self.epoch, Ordering::Release);
		self.epoch
	}

	/// Queue a page load for the current epoch. Returns `false` when the worker
	/// is gone.
	pub fn dispatch(&mut self, request: PageRequest) -> bool {
		let epoch = self.epoch;
		let sent = self
			.tx
			.send(FetchCommand::Page { epoch, request })
			.is_ok();
		if sent {
			self.in_flight = Some(epoch);
		}
		sent
	}

	pub fn is_in_flight(&self) -> bool {
		self.in_flight.is_some()
	}

	pub fn matches_current(&self, epoch: u64) -> bool {
		epoch == self.epoch
	}

	/// Mark the request for `epoch` as finished.
	pub fn record_completion(&mut self, epoch: u64) {
		if self.in_flight == Some(epoch) {
			self.in_flight = None;
		}
	}

	pub fn try_recv(&self) -> Result<FetchResult, TryRecvError> {
		self.rx.try_recv()
	}

	pub fn recv_timeout(&self, timeout: Duration) -> Result<FetchResult, RecvTimeoutError> {
		self.rx.recv_timeout(timeout)
	}

	pub fn shutdown(&self) {
		let _ = self.tx.send(FetchCommand::Shutdown);
	}
}

impl Drop for FetchRuntime {
	fn drop(&mut self) {
		self.shutdown();
	}
}
