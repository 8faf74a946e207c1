use ratatui::crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::io;

use super::app_state::App;

impl App {
    /// Poll one key (waiting at most the refresh interval) and run a frame
    pub fn handle_events(&mut self) -> io::Result<()> {
        let mut key = None;
        if event::poll(self.refresh)? {
            match event::read()? {
                // Check that it's a key press event to avoid duplicates
                Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                    key = Some(key_event);
                }
                Event::Resize(_, _) => self.mark_dirty(),
                _ => {}
            }
        }
        self.handle_frame(key);
        Ok(())
    }

    /// Run one frame of input handling for the key polled this frame.
    ///
    /// The key is lent to the window so the engine reads it as the surface's
    /// current key; it is cleared again before the frame ends.
    pub fn handle_frame(&mut self, key: Option<KeyEvent>) {
        self.window.set_key(key.map(|k| k.code));

        if let Some(key) = key
            && self.is_quit_key(key)
        {
            #[cfg(debug_assertions)]
            log::debug!("Quit requested with {:?}", key.code);
            self.should_quit = true;
            self.window.set_key(None);
            return;
        }

        let before = self.engine.top();
        let restrict = self.restrict();
        if !self.engine.auto_scroll(&self.window, restrict)
            && let Some(key) = key
        {
            self.handle_navigation_key(key.code);
        }

        if self.engine.top() != before {
            self.mark_dirty();
        }
        self.window.set_key(None);
    }

    fn is_quit_key(&self, key: KeyEvent) -> bool {
        key.code == self.quit_key
            || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
    }

    /// Page and jump keys, handled after the engine declined the key
    fn handle_navigation_key(&mut self, code: KeyCode) {
        let restrict = self.restrict();
        match code {
            KeyCode::PageUp => self.engine.page_up(),
            KeyCode::PageDown => self.engine.page_down(&self.window, restrict),
            KeyCode::Home => self.engine.jump_to_top(),
            KeyCode::End => self.engine.jump_to_bottom(&self.window, restrict),
            _ => {}
        }
    }
}
