//! Key bindings for scrolling
//!
//! Raw key codes are resolved into a [`ScrollKey`] tag once, where input is
//! polled, so scroll transitions never look at platform key codes directly.

use ratatui::crossterm::event::KeyCode;

use crate::error::TermwinError;

/// Semantic meaning of a polled key as far as scrolling is concerned
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollKey {
    Up,
    Down,
    Other(KeyCode),
}

/// The two key codes recognized as scroll triggers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollKeys {
    pub up: KeyCode,
    pub down: KeyCode,
}

impl ScrollKeys {
    pub fn new(up: KeyCode, down: KeyCode) -> Self {
        Self { up, down }
    }

    /// Resolve a raw key code against the bindings.
    ///
    /// The up binding is checked first, so binding both directions to the
    /// same key makes it scroll up.
    pub fn resolve(&self, code: KeyCode) -> ScrollKey {
        if code == self.up {
            ScrollKey::Up
        } else if code == self.down {
            ScrollKey::Down
        } else {
            ScrollKey::Other(code)
        }
    }
}

impl Default for ScrollKeys {
    fn default() -> Self {
        Self::new(KeyCode::Up, KeyCode::Down)
    }
}

/// Parse a key name from the config file into a key code
///
/// Named keys are case-insensitive (`"Up"`, `"pagedown"`, `"F5"`), a single
/// character is taken literally so `"k"` and `"K"` stay distinct. Surrounding
/// whitespace is ignored unless the name is nothing but whitespace, which
/// binds that whitespace character itself.
pub fn parse_key_code(name: &str) -> Result<KeyCode, TermwinError> {
    let trimmed = name.trim();
    let key = if trimmed.is_empty() { name } else { trimmed };

    let mut chars = key.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        return Ok(KeyCode::Char(c));
    }

    let lower = key.to_ascii_lowercase();
    let code = match lower.as_str() {
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "pageup" | "pgup" => KeyCode::PageUp,
        "pagedown" | "pgdn" => KeyCode::PageDown,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "enter" => KeyCode::Enter,
        "esc" | "escape" => KeyCode::Esc,
        "tab" => KeyCode::Tab,
        "space" => KeyCode::Char(' '),
        "backspace" => KeyCode::Backspace,
        _ => match lower.strip_prefix('f').and_then(|n| n.parse::<u8>().ok()) {
            Some(n @ 1..=12) => KeyCode::F(n),
            _ => return Err(TermwinError::UnknownKey(name.to_string())),
        },
    };
    Ok(code)
}

/// Short display name for a key code, used in the status line
pub fn key_name(code: KeyCode) -> String {
    match code {
        KeyCode::Up => "↑".to_string(),
        KeyCode::Down => "↓".to_string(),
        KeyCode::Left => "←".to_string(),
        KeyCode::Right => "→".to_string(),
        KeyCode::PageUp => "PgUp".to_string(),
        KeyCode::PageDown => "PgDn".to_string(),
        KeyCode::Home => "Home".to_string(),
        KeyCode::End => "End".to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Esc => "Esc".to_string(),
        KeyCode::Tab => "Tab".to_string(),
        KeyCode::Backspace => "Backspace".to_string(),
        KeyCode::Char(' ') => "Space".to_string(),
        KeyCode::Char(c) => c.to_string(),
        KeyCode::F(n) => format!("F{}", n),
        other => format!("{:?}", other),
    }
}
