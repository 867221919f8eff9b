//! File-backed [`RecordSource`](linkpick_core::RecordSource) for `linkpick`.
//!
//! A fixture is a JSON document listing records per entity type. The base
//! search applies the request filters, fuzzy matches the query against each
//! record's name and search fields, and pages through the ranked matches. The
//! bulk fetch projects the requested fields for a set of names.
//!
//! [`FixtureCreateHook`] appends new records to the same dataset, so a record
//! created from the picker shows up in later searches.

mod dataset;
mod error;
mod filter;
mod hook;
mod source;

pub use dataset::{Dataset, EntityData};
pub use error::FixtureError;
pub use filter::{FilterOp, matches_filters};
pub use hook::FixtureCreateHook;
pub use source::FixtureSource;
