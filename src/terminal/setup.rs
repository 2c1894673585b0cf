//! Entering and leaving TUI mode.

use crossterm::{
    cursor::Show,
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::io::{self, Write};

/// Alternate screen plus mouse capture, so clicks arrive as touches.
pub fn enter_tui_mode<W: Write>(writer: &mut W) -> io::Result<()> {
    execute!(writer, EnterAlternateScreen, EnableMouseCapture)
}

/// Undo [`enter_tui_mode`] and raw mode. Never fails; safe to repeat.
pub fn leave_tui_mode<W: Write>(writer: &mut W) {
    let _ = disable_raw_mode();
    let _ = execute!(writer, DisableMouseCapture, LeaveAlternateScreen);

    // Some terminals keep keyboard enhancement flags past the alternate
    // screen; CSI = 0 u clears them outright.
    let _ = write!(writer, "\x1b[=0u");
    let _ = writer.flush();

    let _ = execute!(writer, Show);
}

/// Best-effort restore on stdout, for panics.
pub fn emergency_restore() {
    let mut stdout = io::stdout();
    super::enhancements::pop_keyboard_enhancements(&mut stdout);
    leave_tui_mode(&mut stdout);
}
