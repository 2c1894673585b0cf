//! Application state.
//!
//! [`App`] binds the selection controller to the compositor and owns the
//! loop's two-state lifecycle. It knows nothing about individual panels;
//! swapping the catalogue changes what is drawn, never how input is handled.

mod main_loop;

pub use main_loop::run_app;

use crate::input::{Action, InputSnapshot};
use crate::selection::{Direction, SelectionController};
use crate::traits::InfoProvider;
use crate::ui::layout::{to_navigation, PANEL_ZONES};
use crate::ui::Compositor;

/// Main loop lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoopState {
    #[default]
    Running,
    Terminated,
}

pub struct App<P> {
    controller: SelectionController,
    compositor: Compositor<P>,
    state: LoopState,
    frames: u64,
}

impl<P: InfoProvider> App<P> {
    /// A running app showing the first panel with reveal mode on.
    pub fn new(compositor: Compositor<P>) -> Self {
        let panels = compositor.catalogue().len();
        Self {
            controller: SelectionController::new(panels, PANEL_ZONES),
            compositor,
            state: LoopState::Running,
            frames: 0,
        }
    }

    /// Start with reveal mode set to `reveal`.
    pub fn with_reveal(mut self, reveal: bool) -> Self {
        self.controller = self.controller.with_reveal(reveal);
        self
    }

    pub fn controller(&self) -> &SelectionController {
        &self.controller
    }

    pub fn compositor(&self) -> &Compositor<P> {
        &self.compositor
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == LoopState::Running
    }

    /// Frames presented so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub(crate) fn frame_presented(&mut self) {
        self.frames += 1;
    }

    /// Apply one frame of input: touch, then direction, then reveal toggle,
    /// then exit.
    ///
    /// Only press edges act. When both directions are pressed in the same
    /// frame, `Next` wins.
    pub fn handle_input(&mut self, input: &InputSnapshot) {
        if self.state == LoopState::Terminated {
            return;
        }

        if let Some(point) = input.touch.and_then(to_navigation) {
            self.controller.touch(point);
        }

        if input.was_pressed(Action::Next) {
            self.controller.advance(Direction::Next);
        } else if input.was_pressed(Action::Previous) {
            self.controller.advance(Direction::Previous);
        }

        if input.was_pressed(Action::ToggleReveal) {
            self.controller.toggle_reveal();
        }

        if input.was_pressed(Action::Exit) {
            tracing::info!(frames = self.frames, "Exit requested");
            self.state = LoopState::Terminated;
        }
    }
}
