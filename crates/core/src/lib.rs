//! Headless core of the `linkpick` record picker.
//!
//! The picker lets a user search one entity type on a remote record source,
//! page through the results incrementally and commit a single identifier back
//! to a caller-supplied destination. Everything in this crate is independent of
//! any particular front-end: the terminal UI drives a [`Picker`] through plain
//! method calls and renders the [`RenderedTable`] it produces.
//!
//! The main pieces are:
//!
//! - [`Picker`]: the search coordinator owning the [`QueryState`].
//! - [`fetch`]: the two-phase page loader and the background worker that runs it.
//! - [`render`]: the pure projection of state and columns into display rows.
//! - [`selection`]: keyboard navigation and scroll bookkeeping.
//! - [`hooks`]: the create-new extension points keyed by entity type.

pub mod debounce;
pub mod destination;
pub mod error;
pub mod fetch;
pub mod hooks;
pub mod picker;
pub mod render;
pub mod selection;
pub mod source;
#[cfg(test)]
mod testing;
pub mod types;

pub use debounce::Debouncer;
pub use destination::{CapturedValue, Destination};
pub use error::{HookError, PickerConfigError, SourceError};
pub use hooks::{CreateHook, CreateHookRegistry, CreateRequest};
pub use picker::{Picker, QueryState};
pub use render::{Escaping, PagerControl, RenderedRow, RenderedTable, TableBody};
pub use selection::ScrollWindow;
pub use source::{BulkFetchRequest, RecordSource, SearchHit, SearchRequest};
pub use types::{
	CloseReason, ColumnDef, ColumnWidth, Commit, DEFAULT_DEBOUNCE, DEFAULT_PAGE_SIZE, Filters,
	Formatter, IDENTIFIER_FIELD, NAME_FIELD, Notification, NotificationLevel, PickerConfig,
	PickerConfigBuilder, PickerOutcome, QuickFilter, Record, Row, formatters,
};
