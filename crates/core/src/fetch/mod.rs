//! Remote fetcher: loads one page as a base search followed by a bulk
//! enrichment, off the UI thread.
//!
//! [`load_page`] is the synchronous two-phase loader. [`spawn`] starts the
//! worker thread that runs it for the [`FetchRuntime`] owned by a picker.
//! Every request carries the epoch of the search it belongs to; the worker
//! abandons requests that a newer search has superseded and the runtime drops
//! any result whose epoch is no longer current.

mod commands;
mod page;
mod runtime;
mod worker;

pub use commands::{FetchCommand, FetchResult, PageRequest};
pub use page::{PageLoad, PageOutcome, load_page, merge_rows};
pub use runtime::FetchRuntime;
pub use worker::spawn;
