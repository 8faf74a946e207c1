//! Centralized theme configuration for all UI components.
//!
//! All colors and styles are defined here. When adding or modifying UI components:
//! - Add new colors to the appropriate module
//! - Use `theme::module::CONSTANT` in render files
//! - Do NOT hardcode `Color::*` values directly in render files
//!
//! Theme: Galaxy - cyan accents on a deep space blue background

use ratatui::style::{Color, Modifier, Style};

/// Core color palette - shared base colors.
/// Only use these directly when a component truly shares the same color.
/// Otherwise, define component-specific constants that reference these.
pub mod palette {
    use super::*;

    // Text colors - softer than pure white
    pub const TEXT: Color = Color::Rgb(236, 236, 244);
    pub const TEXT_DIM: Color = Color::Rgb(90, 92, 119);
    pub const TEXT_MUTED: Color = Color::Rgb(130, 133, 158);

    // Background colors - deep space blue tints
    pub const BG_DARK: Color = Color::Rgb(26, 26, 46);

    // Semantic colors - vibrant Galaxy palette
    pub const WARNING: Color = Color::Rgb(255, 217, 61);

    // Accent colors
    pub const CYAN: Color = Color::Rgb(0, 217, 255);
}

/// Scroll window styles
pub mod window {
    use super::*;

    pub const BORDER: Color = palette::CYAN;
    pub const BACKGROUND: Color = palette::BG_DARK;
    pub const TEXT: Color = palette::TEXT;
    pub const TITLE: Style = Style::new()
        .fg(palette::CYAN)
        .add_modifier(Modifier::BOLD);
}

/// Status line at the bottom of the window
pub mod status {
    use super::*;

    pub const KEY: Color = palette::TEXT_MUTED;
    pub const DESCRIPTION: Color = palette::TEXT_DIM;
    pub const POSITION: Color = palette::CYAN;
    pub const WARNING: Color = palette::WARNING;
}

pub mod scrollbar {
    use super::*;

    pub const THUMB: Color = palette::CYAN;
    pub const TRACK: Color = Color::Rgb(55, 55, 85);
}
