use std::time::Duration;

use ratatui::crossterm::event::KeyCode;

use crate::config::Config;
use crate::scroll::ScrollEngine;
use crate::window::Window;

/// Banner rows written above the scrolled data
pub const HEADER_ROWS: usize = 3;
/// Banner rows written below the scrolled data
pub const FOOTER_ROWS: usize = 3;

pub(super) const BANNER_WIDTH: usize = 50;

pub struct App {
    pub window: Window,
    pub engine: ScrollEngine,
    pub data: Vec<String>,
    pub quit_key: KeyCode,
    pub refresh: Duration,
    /// Page size follows the window's rendered height when not configured
    pub fit_to_window: bool,
    pub warnings: Vec<String>,
    pub(super) should_quit: bool,
    pub(super) dirty: bool,
}

impl App {
    /// Build the pager over `data`.
    ///
    /// `visible_count` takes precedence over the config's page size. Bad key
    /// names or a zero page size in the config fall back to the defaults and
    /// leave a warning.
    pub fn new(data: Vec<String>, config: &Config, visible_count: Option<usize>) -> Self {
        let mut warnings = Vec::new();

        let width = data
            .iter()
            .map(|line| line.chars().count())
            .max()
            .unwrap_or(0)
            .max(BANNER_WIDTH);
        let height = data.len() + HEADER_ROWS + FOOTER_ROWS;
        let window = Window::new(config.window.title.clone(), width, height);

        let mut engine = ScrollEngine::new(&window);
        let configured = match config.scroll.visible_count {
            Some(0) => {
                warnings.push("visible_count = 0 shows no lines, fitting to window".to_string());
                None
            }
            n => n,
        };
        let visible_count = visible_count.or(configured);
        if let Some(n) = visible_count {
            engine.set_visible_count(n);
        }

        match config.scroll.scroll_keys() {
            Ok(keys) => engine.set_scroll_keys(keys.up, keys.down),
            Err(e) => warnings.push(format!("{}, using arrow keys", e)),
        }

        let quit_key = match config.window.quit_key_code() {
            Ok(code) => code,
            Err(e) => {
                warnings.push(format!("{}, quitting with q", e));
                KeyCode::Char('q')
            }
        };

        #[cfg(debug_assertions)]
        log::debug!(
            "App created: {} lines, window {}x{}, visible {:?}",
            data.len(),
            width,
            height,
            visible_count
        );

        Self {
            window,
            engine,
            data,
            quit_key,
            refresh: Duration::from_millis(config.window.refresh_ms),
            fit_to_window: visible_count.is_none(),
            warnings,
            should_quit: false,
            dirty: true,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn should_render(&self) -> bool {
        self.dirty
    }

    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub fn clear_dirty(&mut self) {
        self.dirty = false;
    }

    /// Restrict bound handed to the engine: scrolling stops at end of data
    pub fn restrict(&self) -> Option<usize> {
        Some(self.data.len())
    }
}
