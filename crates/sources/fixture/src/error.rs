use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FixtureError {
	#[error("failed to read fixture {path}")]
	Io {
		path: PathBuf,
		#[source]
		source: io::Error,
	},

	#[error("invalid fixture {origin}")]
	Parse {
		origin: String,
		#[source]
		source: serde_json::Error,
	},

	#[error("record {index} of entity '{entity}' has no string 'name'")]
	MissingName { entity: String, index: usize },
}
