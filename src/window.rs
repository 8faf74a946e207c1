//! Host window for the scroll engine
//!
//! A `Window` is a named, fixed-size line buffer that callers write into
//! row by row and then draw with ratatui. It lends its height and the last
//! polled key to the scroll engine through the [`Surface`](crate::scroll::Surface)
//! trait.

mod window_render;
mod window_state;

pub use crate::widgets::scrollbar::ScrollPosition;
pub use window_state::Window;
