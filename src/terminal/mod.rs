//! Terminal ownership for the lifetime of the browser.
//!
//! [`TerminalManager`] switches the terminal into raw, alternate-screen,
//! mouse-reporting mode on creation and switches it back when restored or
//! dropped. The panic hook from [`setup_panic_hook`] covers the path where
//! a panic unwinds past the manager.
//!
//! ```no_run
//! use sysident::terminal::{setup_panic_hook, TerminalManager};
//!
//! fn main() -> Result<(), sysident::error::SysidentError> {
//!     setup_panic_hook();
//!     let mut manager = TerminalManager::new()?;
//!     let _terminal = manager.terminal();
//!     // ... run frames ...
//!     manager.restore()
//! }
//! ```

mod enhancements;
mod panic;
mod setup;

pub use enhancements::{pop_keyboard_enhancements, push_keyboard_enhancements};
pub use panic::setup_panic_hook;
pub use setup::{emergency_restore, enter_tui_mode, leave_tui_mode};

use crossterm::terminal::enable_raw_mode;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};

use crate::error::SysidentError;

pub struct TerminalManager {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    enhanced: bool,
    restored: bool,
}

impl TerminalManager {
    /// Enter raw mode and the alternate screen, enable mouse reporting and
    /// ask for key event types.
    pub fn new() -> Result<Self, SysidentError> {
        enable_raw_mode()?;

        let mut stdout = io::stdout();
        if let Err(e) = enter_tui_mode(&mut stdout) {
            leave_tui_mode(&mut stdout);
            return Err(e.into());
        }
        let enhanced = push_keyboard_enhancements(&mut stdout);
        tracing::debug!(enhanced, "Terminal prepared");

        let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        terminal.clear()?;

        Ok(Self {
            terminal,
            enhanced,
            restored: false,
        })
    }

    pub fn terminal(&mut self) -> &mut Terminal<CrosstermBackend<Stdout>> {
        &mut self.terminal
    }

    /// Put the terminal back the way it was. Later calls do nothing.
    pub fn restore(&mut self) -> Result<(), SysidentError> {
        if self.restored {
            return Ok(());
        }
        self.restored = true;

        if self.enhanced {
            pop_keyboard_enhancements(self.terminal.backend_mut());
        }
        leave_tui_mode(self.terminal.backend_mut());
        self.terminal.show_cursor()?;
        Ok(())
    }
}

impl Drop for TerminalManager {
    fn drop(&mut self) {
        if let Err(e) = self.restore() {
            tracing::warn!("Terminal restore failed: {}", e);
        }
    }
}
