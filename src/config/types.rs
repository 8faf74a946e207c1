// Configuration type definitions

use ratatui::crossterm::event::KeyCode;
use serde::Deserialize;

use crate::error::TermwinError;
use crate::keys::{ScrollKeys, parse_key_code};

/// Window configuration section
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct WindowConfig {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_refresh_ms")]
    pub refresh_ms: u64,
    #[serde(default = "default_quit_key")]
    pub quit_key: String,
}

fn default_title() -> String {
    "ScrollWindow".to_string()
}

fn default_refresh_ms() -> u64 {
    50
}

fn default_quit_key() -> String {
    "q".to_string()
}

impl Default for WindowConfig {
    fn default() -> Self {
        WindowConfig {
            title: default_title(),
            refresh_ms: default_refresh_ms(),
            quit_key: default_quit_key(),
        }
    }
}

impl WindowConfig {
    pub fn quit_key_code(&self) -> Result<KeyCode, TermwinError> {
        parse_key_code(&self.quit_key)
    }
}

/// Scroll configuration section
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ScrollConfig {
    /// Lines per page; `None` fits the page to the window
    #[serde(default)]
    pub visible_count: Option<usize>,
    #[serde(default = "default_up_key")]
    pub up_key: String,
    #[serde(default = "default_down_key")]
    pub down_key: String,
}

fn default_up_key() -> String {
    "up".to_string()
}

fn default_down_key() -> String {
    "down".to_string()
}

impl Default for ScrollConfig {
    fn default() -> Self {
        ScrollConfig {
            visible_count: None,
            up_key: default_up_key(),
            down_key: default_down_key(),
        }
    }
}

impl ScrollConfig {
    pub fn scroll_keys(&self) -> Result<ScrollKeys, TermwinError> {
        Ok(ScrollKeys::new(
            parse_key_code(&self.up_key)?,
            parse_key_code(&self.down_key)?,
        ))
    }
}

/// Root configuration structure
#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub window: WindowConfig,
    #[serde(default)]
    pub scroll: ScrollConfig,
}
