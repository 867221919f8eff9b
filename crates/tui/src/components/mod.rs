//! UI building blocks shared across rendering and state modules.

/// Quick filter toggles under the search input.
pub mod filters;
/// Pager control and key hints.
pub mod footer;
/// Blocking notification popup.
pub mod notice;
/// Input prompt rendering and progress display.
pub mod prompt;
/// Scrollbar for viewports.
pub mod scrollbar;
/// Table rendering and configuration.
pub mod tables;

pub use filters::{MAX_QUICK_FILTERS, render_quick_filters};
pub use footer::render_footer;
pub use notice::render_notice;
pub use prompt::{InputContext, ProgressState, render_input};
pub use scrollbar::{point_in_rect, render_scrollbar};
pub use tables::{TableSpec, render_table};
