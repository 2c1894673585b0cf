//! Default keybindings.
//!
//! Maps key combinations to [`Action`]s and folds crossterm events into an
//! [`InputSnapshot`].

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind,
};
use ratatui::layout::Position;
use std::collections::HashMap;

use super::snapshot::{Action, InputSnapshot};

/// Represents a key combination (key code + modifiers).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyCombo {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyCombo {
    /// Creates a new key combo with the given code and modifiers.
    pub const fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    /// Creates a key combo with no modifiers.
    pub const fn plain(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::NONE)
    }

    /// Creates a key combo with Control modifier.
    pub const fn ctrl(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::CONTROL)
    }
}

impl From<&KeyEvent> for KeyCombo {
    fn from(key: &KeyEvent) -> Self {
        // Shift is already folded into the character for printable keys.
        let mut modifiers = key.modifiers;
        if let KeyCode::Char(_) = key.code {
            modifiers.remove(KeyModifiers::SHIFT);
        }
        Self::new(key.code, modifiers)
    }
}

/// Keybinding table.
#[derive(Debug, Clone)]
pub struct KeybindingConfig {
    bindings: HashMap<KeyCombo, Action>,
}

impl Default for KeybindingConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl KeybindingConfig {
    /// Creates the default bindings.
    pub fn new() -> Self {
        let mut bindings = HashMap::new();

        for code in [KeyCode::Down, KeyCode::Right, KeyCode::Char('j'), KeyCode::Char('l')] {
            bindings.insert(KeyCombo::plain(code), Action::Next);
        }
        for code in [KeyCode::Up, KeyCode::Left, KeyCode::Char('k'), KeyCode::Char('h')] {
            bindings.insert(KeyCombo::plain(code), Action::Previous);
        }
        for code in [KeyCode::Tab, KeyCode::Char('s'), KeyCode::Char(' ')] {
            bindings.insert(KeyCombo::plain(code), Action::ToggleReveal);
        }
        bindings.insert(KeyCombo::plain(KeyCode::Char('q')), Action::Exit);
        bindings.insert(KeyCombo::plain(KeyCode::Esc), Action::Exit);
        bindings.insert(KeyCombo::ctrl(KeyCode::Char('c')), Action::Exit);

        Self { bindings }
    }

    /// Override or add a binding.
    pub fn bind(&mut self, combo: KeyCombo, action: Action) {
        self.bindings.insert(combo, action);
    }

    pub fn action_for(&self, key: &KeyEvent) -> Option<Action> {
        self.bindings.get(&KeyCombo::from(key)).copied()
    }

    /// Fold one terminal event into `snapshot`.
    ///
    /// Key presses are edges; auto-repeat only marks the action as held.
    /// A left-button press or drag is a touch at that cell.
    pub fn record(&self, snapshot: &mut InputSnapshot, event: &Event) {
        match event {
            Event::Key(key) => {
                let Some(action) = self.action_for(key) else {
                    return;
                };
                match key.kind {
                    KeyEventKind::Press => snapshot.pressed.insert(action),
                    KeyEventKind::Repeat => snapshot.held.insert(action),
                    KeyEventKind::Release => {}
                }
            }
            Event::Mouse(mouse) => {
                if let MouseEventKind::Down(MouseButton::Left)
                | MouseEventKind::Drag(MouseButton::Left) = mouse.kind
                {
                    snapshot.touch = Some(Position::new(mouse.column, mouse.row));
                }
            }
            _ => {}
        }
    }
}
