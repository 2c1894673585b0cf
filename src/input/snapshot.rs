//! Per-frame input capture.

use ratatui::layout::Position;

/// A logical input, independent of the physical key that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Next,
    Previous,
    ToggleReveal,
    Exit,
}

impl Action {
    fn bit(self) -> u8 {
        match self {
            Action::Next => 1,
            Action::Previous => 1 << 1,
            Action::ToggleReveal => 1 << 2,
            Action::Exit => 1 << 3,
        }
    }
}

/// Small set of [`Action`]s.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ActionSet(u8);

impl ActionSet {
    pub fn insert(&mut self, action: Action) {
        self.0 |= action.bit();
    }

    pub fn contains(&self, action: Action) -> bool {
        self.0 & action.bit() != 0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }
}

/// Immutable record of one frame's input.
///
/// `pressed` holds press edges only. Keys that stayed down (auto-repeat) land
/// in `held` and never trigger an action. `touch` is an absolute screen cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputSnapshot {
    pub pressed: ActionSet,
    pub held: ActionSet,
    pub touch: Option<Position>,
}

impl InputSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot with a single press edge.
    pub fn press(action: Action) -> Self {
        Self::new().with_press(action)
    }

    /// Snapshot with a single touch and nothing else.
    pub fn touch_at(x: u16, y: u16) -> Self {
        Self::new().with_touch(Position::new(x, y))
    }

    pub fn with_press(mut self, action: Action) -> Self {
        self.pressed.insert(action);
        self
    }

    pub fn with_held(mut self, action: Action) -> Self {
        self.held.insert(action);
        self
    }

    pub fn with_touch(mut self, position: Position) -> Self {
        self.touch = Some(position);
        self
    }

    pub fn was_pressed(&self, action: Action) -> bool {
        self.pressed.contains(action)
    }

    pub fn is_idle(&self) -> bool {
        self.pressed.is_empty() && self.held.is_empty() && self.touch.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_set() {
        let mut set = ActionSet::default();
        assert!(set.is_empty());
        set.insert(Action::Next);
        set.insert(Action::Exit);
        set.insert(Action::Next);
        assert!(set.contains(Action::Next));
        assert!(set.contains(Action::Exit));
        assert!(!set.contains(Action::Previous));
        assert!(!set.contains(Action::ToggleReveal));
    }

    #[test]
    fn test_held_is_not_pressed() {
        let snapshot = InputSnapshot::new().with_held(Action::ToggleReveal);
        assert!(!snapshot.was_pressed(Action::ToggleReveal));
        assert!(!snapshot.is_idle());
    }

    #[test]
    fn test_touch_builder() {
        let snapshot = InputSnapshot::touch_at(5, 16);
        assert_eq!(snapshot.touch, Some(Position::new(5, 16)));
        assert!(snapshot.pressed.is_empty());
    }
}
