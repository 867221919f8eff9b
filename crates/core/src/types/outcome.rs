use serde::Serialize;

use super::row::Row;

/// Severity attached to a [`Notification`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationLevel {
	Info,
	Error,
}

/// Message the front-end must show to the user before continuing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
	pub level: NotificationLevel,
	pub title: String,
	pub message: String,
}

impl Notification {
	pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
		Self {
			level: NotificationLevel::Error,
			title: title.into(),
			message: message.into(),
		}
	}

	pub fn info(title: impl Into<String>, message: impl Into<String>) -> Self {
		Self {
			level: NotificationLevel::Info,
			title: title.into(),
			message: message.into(),
		}
	}
}

/// Value written to the destination when the picker commits.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Commit {
	pub field: String,
	pub value: String,
	/// The selected row, absent when the value came from the create-new flow.
	pub row: Option<Row>,
}

/// Why the picker dialog closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CloseReason {
	Committed,
	Created,
	Cancelled,
}

/// Final result handed back to whoever opened the picker.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PickerOutcome {
	/// `true` when a value was written to the destination.
	pub accepted: bool,
	/// Search text at the time the dialog closed.
	pub query: String,
	pub commit: Option<Commit>,
}

impl PickerOutcome {
	pub fn cancelled(query: impl Into<String>) -> Self {
		Self {
			accepted: false,
			query: query.into(),
			commit: None,
		}
	}
}
