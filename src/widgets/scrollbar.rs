//! Vertical scrollbar drawn on a window's right border

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    widgets::{Scrollbar, ScrollbarOrientation, ScrollbarState},
};

use crate::theme;

/// Where the visible window sits in the scrolled content
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollPosition {
    /// Lines of content
    pub total: usize,
    /// Lines shown per page
    pub viewport: usize,
    /// First visible line
    pub offset: usize,
}

impl ScrollPosition {
    /// Largest offset that still fills a page
    pub fn max_offset(&self) -> usize {
        self.total.saturating_sub(self.viewport)
    }

    /// Whether the content is longer than one page
    pub fn overflows(&self) -> bool {
        self.viewport > 0 && self.total > self.viewport
    }
}

/// Draw the thumb for `position` in the rightmost column of `track`.
///
/// Nothing is drawn when the content fits in one page. Offsets past the last
/// page pin the thumb to the bottom.
pub fn render_vertical_scrollbar(frame: &mut Frame, track: Rect, position: ScrollPosition) {
    if !position.overflows() || track.height == 0 {
        return;
    }

    let max_offset = position.max_offset();
    // ratatui puts the thumb at the end when position == content_length - 1
    let mut state = ScrollbarState::new(max_offset + 1)
        .position(position.offset.min(max_offset))
        .viewport_content_length(position.viewport);

    let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
        .begin_symbol(None)
        .end_symbol(None)
        .thumb_style(Style::default().fg(theme::scrollbar::THUMB))
        .track_style(Style::default().fg(theme::scrollbar::TRACK));

    frame.render_stateful_widget(scrollbar, track, &mut state);
}

#[cfg(test)]
#[path = "scrollbar_tests.rs"]
mod scrollbar_tests;
