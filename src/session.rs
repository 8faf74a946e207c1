//! Terminal session lifecycle
//!
//! A [`TerminalSession`] owns the process-wide terminal modes (raw mode,
//! alternate screen, bracketed paste) for as long as it lives. Dropping it
//! restores the terminal, and a panic hook restores it before the panic
//! message is printed.

use std::io::{self, stdout};
use std::sync::Once;

use ratatui::DefaultTerminal;
use ratatui::backend::CrosstermBackend;
use ratatui::crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use ratatui::crossterm::execute;
use ratatui::crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};

pub struct TerminalSession {
    terminal: DefaultTerminal,
    restored: bool,
}

impl TerminalSession {
    /// Enter raw mode, the alternate screen and bracketed paste.
    ///
    /// If a later step fails, the steps already taken are undone before the
    /// error is returned.
    pub fn enter() -> io::Result<Self> {
        install_panic_hook();

        enable_raw_mode()?;

        if let Err(e) = execute!(stdout(), EnterAlternateScreen, EnableBracketedPaste) {
            let _ = disable_raw_mode();
            return Err(e);
        }

        match ratatui::Terminal::new(CrosstermBackend::new(stdout())) {
            Ok(terminal) => {
                #[cfg(debug_assertions)]
                log::debug!("Terminal session entered");
                Ok(Self {
                    terminal,
                    restored: false,
                })
            }
            Err(e) => {
                let _ = restore_terminal();
                Err(e)
            }
        }
    }

    pub fn terminal_mut(&mut self) -> &mut DefaultTerminal {
        &mut self.terminal
    }

    /// Restore the terminal now and report failures, instead of on drop
    pub fn restore(mut self) -> io::Result<()> {
        self.restored = true;
        let _ = self.terminal.show_cursor();
        restore_terminal()
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        if !self.restored {
            let _ = self.terminal.show_cursor();
            let _ = restore_terminal();
        }
    }
}

/// Restore terminal to normal state
fn restore_terminal() -> io::Result<()> {
    let _ = execute!(stdout(), DisableBracketedPaste, LeaveAlternateScreen);
    disable_raw_mode()?;
    #[cfg(debug_assertions)]
    log::debug!("Terminal restored");
    Ok(())
}

fn install_panic_hook() {
    static HOOK: Once = Once::new();
    HOOK.call_once(|| {
        let hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            let _ = execute!(stdout(), DisableBracketedPaste, LeaveAlternateScreen);
            let _ = disable_raw_mode();
            hook(info);
        }));
    });
}
