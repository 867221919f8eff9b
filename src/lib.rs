//! Support code for the `linkpick` binary.
//!
//! The picker itself lives in `linkpick-core` and its terminal front-end in
//! `linkpick-tui`; this crate only adds process level concerns such as
//! directory discovery and log setup.

pub mod app_dirs;
pub mod logging;
