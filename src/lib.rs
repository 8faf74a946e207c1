//! termwin library - Terminal windows with a saturating scroll engine
//!
//! The core is [`ScrollEngine`], which maps a scroll position onto the visible
//! sub-range of a line sequence. [`Window`] is the host surface it reads its
//! height and key input from.

pub mod app;
pub mod config;
pub mod error;
pub mod keys;
pub mod scroll;
pub mod session;

#[cfg(test)]
pub mod test_utils;
pub mod theme;
pub mod widgets;
pub mod window;

// Re-export commonly used types for convenience
pub use app::App;
pub use config::Config;
pub use keys::{ScrollKey, ScrollKeys};
pub use scroll::{ScrollEngine, Surface};
pub use window::Window;
