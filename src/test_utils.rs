//! Shared test utilities for termwin
//!
//! This module provides common test fixtures and helper functions
//! used across multiple test modules.

#[cfg(test)]
pub mod test_helpers {
    use crate::app::App;
    use crate::config::Config;
    use crate::scroll::Surface;
    use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    /// Minimal surface with a fixed height and a settable current key
    #[derive(Debug, Clone, Default)]
    pub struct TestSurface {
        pub height: usize,
        pub key: Option<KeyCode>,
        pub lines: Vec<(usize, usize, String)>,
    }

    impl TestSurface {
        pub fn new(height: usize) -> Self {
            Self {
                height,
                ..Self::default()
            }
        }

        pub fn with_key(height: usize, key: KeyCode) -> Self {
            Self {
                height,
                key: Some(key),
                ..Self::default()
            }
        }
    }

    impl Surface for TestSurface {
        fn height(&self) -> usize {
            self.height
        }

        fn current_key_code(&self) -> Option<KeyCode> {
            self.key
        }

        fn write_line(&mut self, row: usize, col: usize, text: &str) {
            self.lines.push((row, col, text.to_string()));
        }
    }

    /// Numbered demo lines, `"0"`, `"1"`, ...
    pub fn numbered_lines(count: usize) -> Vec<String> {
        (0..count).map(|i| i.to_string()).collect()
    }

    /// Helper to create App over numbered lines with default config
    pub fn test_app(lines: usize) -> App {
        App::new(numbered_lines(lines), &Config::default(), None)
    }

    /// Helper to create App with a fixed page size
    pub fn test_app_with_visible(lines: usize, visible: usize) -> App {
        App::new(numbered_lines(lines), &Config::default(), Some(visible))
    }

    /// Helper to create a KeyEvent without modifiers
    pub fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    /// Helper to create a KeyEvent with specific modifiers
    pub fn key_with_mods(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }
}
