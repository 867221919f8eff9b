use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;

use tracing::{debug, trace, warn};

use super::commands::{FetchCommand, FetchResult};
use super::page::{PageLoad, load_page};
use crate::source::RecordSource;

/// Launch the fetch worker thread and return its channels together with the
/// shared "latest epoch" marker the worker checks for superseded requests.
pub fn spawn(
	source: Arc<dyn RecordSource>,
) -> (Sender<FetchCommand>, Receiver<FetchResult>, Arc<AtomicU64>) {
	let (command_tx, command_rx) = mpsc::channel();
	let (result_tx, result_rx) = mpsc::channel();
	let latest_epoch = Arc::new(AtomicU64::new(0));
	let thread_latest = Arc::clone(&latest_epoch);

	thread::Builder::new()
		.name("linkpick-fetch".into())
		.spawn(move || worker_loop(source.as_ref(), command_rx, result_tx, thread_latest))
		.map_err(|err| warn!(%err, "failed to start fetch worker"))
		.ok();

	(command_tx, result_rx, latest_epoch)
}

fn worker_loop(
	source: &dyn RecordSource,
	command_rx: Receiver<FetchCommand>,
	result_tx: Sender<FetchResult>,
	latest_epoch: Arc<AtomicU64>,
) {
	while let Ok(command) = command_rx.recv() {
		if !handle_command(source, &result_tx, &latest_epoch, command) {
			break;
		}
	}
	debug!("fetch worker stopped");
}

fn handle_command(
	source: &dyn RecordSource,
	result_tx: &Sender<FetchResult>,
	latest_epoch: &AtomicU64,
	command: FetchCommand,
) -> bool {
	match command {
		FetchCommand::Page { epoch, request } => {
			let superseded = || latest_epoch.load(Ordering::Acquire) != epoch;
			if superseded() {
				trace!(epoch, "skipping request for superseded search");
				return true;
			}

			debug!(
				epoch,
				entity = %request.entity,
				offset = request.offset,
				page_size = request.page_size,
				"loading page"
			);
			let outcome = match load_page(source, &request, superseded) {
				Ok(PageLoad::Loaded(outcome)) => Ok(outcome),
				Ok(PageLoad::Superseded) => return true,
				Err(err) => {
					warn!(epoch, entity = %request.entity, %err, "page load failed");
					Err(err)
				}
			};
			result_tx.send(FetchResult { epoch, outcome }).is_ok()
		}
		FetchCommand::Shutdown => false,
	}
}

#[cfg(test)]
mod tests {
	use std::time::Duration;

	use super::*;
	use crate::fetch::PageRequest;
	use crate::source::SearchHit;
	use crate::testing::ScriptedSource;

	fn page(epoch: u64) -> FetchCommand {
		FetchCommand::Page {
			epoch,
			request: PageRequest {
				entity: "Vehicle".into(),
				text: String::new(),
				page_size: 20,
				offset: 0,
				filters: Default::default(),
				fetch_fields: vec!["name".into()],
			},
		}
	}

	#[test]
	fn current_requests_are_answered() {
		let source = Arc::new(ScriptedSource::new());
		source.push_hits(Ok(vec![SearchHit::new("V-001")]));
		source.push_records(Ok(Vec::new()));
		let (tx, rx, latest) = spawn(source.clone());
		latest.store(3, Ordering::Release);

		tx.send(page(3)).unwrap();
		let result = rx.recv_timeout(Duration::from_secs(5)).unwrap();

		assert_eq!(result.epoch, 3);
		assert_eq!(result.outcome.unwrap().rows.len(), 1);
		tx.send(FetchCommand::Shutdown).unwrap();
	}

	#[test]
	fn superseded_requests_are_skipped() {
		let source = Arc::new(ScriptedSource::new());
		let (tx, rx, latest) = spawn(source.clone());
		latest.store(2, Ordering::Release);

		tx.send(page(1)).unwrap();
		tx.send(FetchCommand::Shutdown).unwrap();

		assert!(rx.recv_timeout(Duration::from_secs(5)).is_err());
		assert_eq!(source.base_calls(), 0);
	}
}
