//! Selection state and the controller that owns it.

use ratatui::layout::Position;

use super::hit_zone::HitZones;

/// Direction of a navigation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Next,
    Previous,
}

/// Which panel is active and whether sensitive fields are shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionState {
    pub active_index: usize,
    pub reveal_sensitive: bool,
}

impl Default for SelectionState {
    fn default() -> Self {
        Self {
            active_index: 0,
            reveal_sensitive: true,
        }
    }
}

/// Owns [`SelectionState`] for a catalogue of `panel_count` panels.
///
/// Invariant: `active_index < panel_count`. Every operation is total; moving
/// past either end wraps around.
#[derive(Debug, Clone)]
pub struct SelectionController {
    state: SelectionState,
    panel_count: usize,
    zones: HitZones,
}

impl SelectionController {
    /// # Panics
    ///
    /// Panics if `panel_count` is zero; there is no valid selection then.
    pub fn new(panel_count: usize, zones: HitZones) -> Self {
        assert!(panel_count > 0, "selection needs at least one panel");
        Self {
            state: SelectionState::default(),
            panel_count,
            zones: zones.with_count(panel_count),
        }
    }

    /// Start with reveal mode set to `reveal`.
    pub fn with_reveal(mut self, reveal: bool) -> Self {
        self.state.reveal_sensitive = reveal;
        self
    }

    pub fn state(&self) -> SelectionState {
        self.state
    }

    pub fn active_index(&self) -> usize {
        self.state.active_index
    }

    pub fn reveal_sensitive(&self) -> bool {
        self.state.reveal_sensitive
    }

    pub fn panel_count(&self) -> usize {
        self.panel_count
    }

    pub fn zones(&self) -> &HitZones {
        &self.zones
    }

    pub fn advance(&mut self, direction: Direction) {
        let n = self.panel_count;
        let current = self.state.active_index;
        self.state.active_index = match direction {
            Direction::Next => (current + 1) % n,
            Direction::Previous => (current + n - 1) % n,
        };
        tracing::debug!(
            from = current,
            to = self.state.active_index,
            ?direction,
            "Selection advanced"
        );
    }

    /// Panel index under `point` (navigation-surface coordinates), or the
    /// current index when the point misses every zone. Does not mutate.
    pub fn select_from_point(&self, point: Position) -> usize {
        self.zones.hit(point).unwrap_or(self.state.active_index)
    }

    /// Make the panel under `point` active.
    pub fn touch(&mut self, point: Position) {
        let selected = self.select_from_point(point);
        if selected != self.state.active_index {
            tracing::debug!(
                from = self.state.active_index,
                to = selected,
                x = point.x,
                y = point.y,
                "Selection touched"
            );
        }
        self.state.active_index = selected;
    }

    pub fn toggle_reveal(&mut self) {
        self.state.reveal_sensitive = !self.state.reveal_sensitive;
        tracing::debug!(reveal = self.state.reveal_sensitive, "Reveal toggled");
    }
}
