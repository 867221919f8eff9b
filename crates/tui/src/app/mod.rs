//! Terminal front-end state and behavior for the picker dialog.
//!
//! The [`App`] type pairs a headless [`linkpick_core::Picker`] with widget
//! state. Supporting modules split the implementation into input handling,
//! rendering and the results table bookkeeping.

mod actions;
mod render;
mod results;
mod state;

pub use state::App;
