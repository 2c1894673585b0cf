//! Keyboard enhancement flags (kitty protocol).
//!
//! Reporting event types lets crossterm tell a key press from auto-repeat,
//! so holding a key does not retrigger actions. Terminals without the
//! protocol ignore the request and every key arrives as a press; there,
//! holding Tab or Space flips reveal mode on each auto-repeat.

use crossterm::{
    event::{KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags},
    execute,
};
use std::io::Write;

pub fn push_keyboard_enhancements<W: Write>(writer: &mut W) -> bool {
    execute!(
        writer,
        PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES
                | KeyboardEnhancementFlags::REPORT_EVENT_TYPES
        )
    )
    .is_ok()
}

pub fn pop_keyboard_enhancements<W: Write>(writer: &mut W) -> bool {
    execute!(writer, PopKeyboardEnhancementFlags).is_ok()
}
