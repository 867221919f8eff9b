use thiserror::Error;

/// Failures reported by a [`RecordSource`](crate::RecordSource).
///
/// The picker does not distinguish between the base search and the bulk fetch
/// when one of these occurs: either call failing aborts the whole page.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SourceError {
	/// The source has no entity type with the requested name.
	#[error("unknown entity type '{entity}'")]
	UnknownEntity { entity: String },

	/// The request was well formed but the source refused it.
	#[error("request rejected: {message}")]
	Rejected { message: String },

	/// The source could not be reached or failed while answering.
	#[error("source unavailable: {0}")]
	Unavailable(String),
}

impl SourceError {
	pub fn rejected(message: impl Into<String>) -> Self {
		Self::Rejected {
			message: message.into(),
		}
	}

	pub fn unknown_entity(entity: impl Into<String>) -> Self {
		Self::UnknownEntity {
			entity: entity.into(),
		}
	}
}

/// Errors raised while registering or running create-new hooks.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum HookError {
	/// A hook is already registered for the entity type.
	#[error("a create-new hook for '{entity}' is already registered")]
	DuplicateEntity { entity: String },

	/// The user backed out of the creation flow.
	#[error("creation cancelled")]
	Cancelled,

	/// The creation flow ran but did not produce a record.
	#[error("creation failed: {0}")]
	Failed(String),
}

/// Invalid picker configuration detected while building a
/// [`PickerConfig`](crate::PickerConfig).
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PickerConfigError {
	#[error("entity type must not be empty")]
	EmptyEntity,

	#[error("page size must be greater than zero")]
	ZeroPageSize,

	#[error("column key must not be empty")]
	EmptyColumnKey,

	#[error("invalid column width '{value}': expected a percentage, a cell count or 'auto'")]
	InvalidWidth { value: String },

	#[error("unknown column formatter '{name}'")]
	UnknownFormatter { name: String },

	#[error("quick filter '{key}' is declared more than once")]
	DuplicateQuickFilter { key: String },
}
