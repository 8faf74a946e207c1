//! Scroll engine for windows whose content exceeds the visible area

mod scroll_engine;
mod surface;

pub use scroll_engine::ScrollEngine;
pub use surface::Surface;
