use ratatui::crossterm::event::KeyCode;

use crate::scroll::Surface;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Window {
    name: String,
    width: usize,
    height: usize,
    rows: Vec<String>,
    cursor: usize,
    key: Option<KeyCode>,
}

impl Window {
    pub fn new(name: impl Into<String>, width: usize, height: usize) -> Self {
        Self {
            name: name.into(),
            width,
            height,
            rows: Vec::new(),
            cursor: 0,
            key: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Written rows, top to bottom. Rows never written are absent at the end.
    pub fn rows(&self) -> &[String] {
        &self.rows
    }

    /// Change the window's logical size; rows past the new height are dropped.
    pub fn resize(&mut self, height: usize, width: usize) {
        self.height = height;
        self.width = width;
        self.rows.truncate(height);
        for row in &mut self.rows {
            if let Some((byte_idx, _)) = row.char_indices().nth(width) {
                row.truncate(byte_idx);
            }
        }
        self.cursor = self.cursor.min(height);
    }

    /// Erase all rows and move the line cursor back to the first line
    pub fn clear(&mut self) {
        self.rows.clear();
        self.cursor = 0;
    }

    pub fn first_line(&mut self) -> usize {
        self.cursor = 0;
        self.cursor
    }

    pub fn next_line(&mut self) -> usize {
        self.cursor = self.cursor.saturating_add(1);
        self.cursor
    }

    pub fn set_key(&mut self, key: Option<KeyCode>) {
        self.key = key;
    }
}

impl Surface for Window {
    fn height(&self) -> usize {
        self.height
    }

    fn current_key_code(&self) -> Option<KeyCode> {
        self.key
    }

    fn write_line(&mut self, row: usize, col: usize, text: &str) {
        if row >= self.height || col >= self.width {
            #[cfg(debug_assertions)]
            log::debug!(
                "Dropping write at ({}, {}) outside {}x{} window {:?}",
                row,
                col,
                self.width,
                self.height,
                self.name
            );
            return;
        }

        if self.rows.len() <= row {
            self.rows.resize(row + 1, String::new());
        }

        let mut cells: Vec<char> = self.rows[row].chars().collect();
        if cells.len() < col {
            cells.resize(col, ' ');
        }

        for (offset, ch) in text.chars().take(self.width - col).enumerate() {
            let x = col + offset;
            if x < cells.len() {
                cells[x] = ch;
            } else {
                cells.push(ch);
            }
        }

        self.rows[row] = cells.into_iter().collect();
    }
}

#[cfg(test)]
#[path = "window_state_tests.rs"]
mod window_state_tests;
