use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use super::app_state::{App, BANNER_WIDTH, FOOTER_ROWS, HEADER_ROWS};
use crate::keys::key_name;
use crate::scroll::Surface;
use crate::theme;
use crate::window::{ScrollPosition, Window};

impl App {
    pub fn render(&mut self, frame: &mut Frame) {
        let [window_area, status_area] =
            Layout::vertical([Constraint::Min(3), Constraint::Length(1)]).areas(frame.area());

        if self.fit_to_window {
            let rows = (Window::content_area(window_area).height as usize)
                .saturating_sub(HEADER_ROWS + FOOTER_ROWS)
                .max(1);
            self.engine.set_visible_count(rows);
        }

        // A larger page may now reach past the end of data
        self.engine.clamp_to_len(&self.window, self.data.len());

        self.write_contents();

        let position = ScrollPosition {
            total: self.data.len(),
            viewport: self.engine.visible_count(),
            offset: self.engine.top(),
        };
        self.window.render(frame, window_area, Some(position));
        self.render_status(frame, status_area);
    }

    /// Fill the window: header banner, the visible data lines, footer banner
    fn write_contents(&mut self) {
        let banner = "-".repeat(BANNER_WIDTH);
        let name = self.window.name().to_string();

        self.window.clear();
        let row = self.window.first_line();
        self.window.write_line(row, 0, &banner);
        let row = self.window.next_line();
        self.window.write_line(row, 0, &format!("This is a {}", name));
        let row = self.window.next_line();
        self.window.write_line(row, 0, &banner);

        for line in self.engine.crop_to_range(&self.window, &self.data) {
            let row = self.window.next_line();
            self.window.write_line(row, 0, line);
        }

        let row = self.window.next_line();
        self.window.write_line(row, 0, &banner);
        let row = self.window.next_line();
        self.window.write_line(row, 0, &format!("End of {}", name));
        let row = self.window.next_line();
        self.window.write_line(row, 0, &banner);
    }

    fn render_status(&self, frame: &mut Frame, area: Rect) {
        let total = self.data.len();
        let (start, end) = self.engine.visible_range(&self.window);
        let end = end.min(total);
        let position = if end > start {
            format!(" {}-{}/{} ", start + 1, end, total)
        } else {
            format!(" 0/{} ", total)
        };

        let keys = self.engine.scroll_keys();
        let key_style = Style::default().fg(theme::status::KEY);
        let description_style = Style::default().fg(theme::status::DESCRIPTION);

        let mut spans = vec![
            Span::styled(position, Style::default().fg(theme::status::POSITION)),
            Span::styled(
                format!(" {}/{}", key_name(keys.up), key_name(keys.down)),
                key_style,
            ),
            Span::styled(" scroll", description_style),
            Span::styled("  PgUp/PgDn", key_style),
            Span::styled(" page", description_style),
            Span::styled(format!("  {}", key_name(self.quit_key)), key_style),
            Span::styled(" quit", description_style),
        ];

        if let Some(warning) = self.warnings.last() {
            spans.push(Span::styled(
                format!("  {}", warning),
                Style::default().fg(theme::status::WARNING),
            ));
        }

        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }
}
