use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use super::window_state::Window;
use crate::theme;
use crate::widgets::scrollbar::{ScrollPosition, render_vertical_scrollbar};

impl Window {
    /// Area left for rows once the border is drawn around `area`
    pub fn content_area(area: Rect) -> Rect {
        Rect {
            x: area.x.saturating_add(1),
            y: area.y.saturating_add(1),
            width: area.width.saturating_sub(2),
            height: area.height.saturating_sub(2),
        }
    }

    /// Draw the buffered rows inside a rounded border titled with the window name.
    ///
    /// Rows that do not fit `area` are clipped. With a `position`, a scrollbar
    /// is drawn on the right border (excluding corners).
    pub fn render(&self, frame: &mut Frame, area: Rect, position: Option<ScrollPosition>) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(theme::window::BORDER))
            .title(Span::styled(format!(" {} ", self.name()), theme::window::TITLE))
            .style(Style::default().bg(theme::window::BACKGROUND));

        let lines: Vec<Line> = self
            .rows()
            .iter()
            .map(|row| Line::from(row.as_str()))
            .collect();

        let paragraph = Paragraph::new(lines)
            .style(Style::default().fg(theme::window::TEXT))
            .block(block);
        frame.render_widget(paragraph, area);

        if let Some(position) = position {
            let track = Rect {
                x: area.x,
                y: area.y.saturating_add(1),
                width: area.width,
                height: area.height.saturating_sub(2),
            };
            render_vertical_scrollbar(frame, track, position);
        }
    }
}

#[cfg(test)]
#[path = "window_render_tests.rs"]
mod window_render_tests;
