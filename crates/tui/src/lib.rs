//! Terminal dialog for the `linkpick` record picker.
//!
//! This crate hosts a [`linkpick_core::Picker`] in a full-screen ratatui
//! application: a search prompt, optional quick filter toggles, the paginated
//! results table, a pager footer and a modal for notifications. Keyboard and
//! mouse input are translated into picker operations; everything the picker
//! decides is rendered back through [`linkpick_core::render`].

mod app;
pub mod components;
mod config;
pub mod input;
mod runtime;
pub mod style;

pub use app::App;
pub use config::UiLabels;
pub use runtime::run;

pub use crate::components::{prompt, tables};
pub use crate::input::SearchInput;
pub use crate::style::{StyleConfig, Theme, builtin_themes, default_theme};
