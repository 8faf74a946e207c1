use ratatui::crossterm::event::KeyCode;

/// Capabilities a display surface lends to the scroll engine
///
/// The engine only reads `height` and `current_key_code`. `write_line` is
/// for the caller, which draws the lines the engine selected.
pub trait Surface {
    /// Physical row count of the surface
    fn height(&self) -> usize;

    /// Most recently polled key, `None` when no key arrived this frame
    fn current_key_code(&self) -> Option<KeyCode>;

    /// Write `text` on `row` starting at column `col`
    fn write_line(&mut self, row: usize, col: usize, text: &str);
}
