mod column;
mod config;
mod filters;
mod outcome;
mod row;

pub use column::{ColumnDef, ColumnWidth, Formatter, formatters};
pub use config::{DEFAULT_DEBOUNCE, DEFAULT_PAGE_SIZE, PickerConfig, PickerConfigBuilder, QuickFilter};
pub use filters::{Filters, merge_filters};
pub use outcome::{CloseReason, Commit, Notification, NotificationLevel, PickerOutcome};
pub use row::{IDENTIFIER_FIELD, NAME_FIELD, Record, Row, display_value, row_identifier};
