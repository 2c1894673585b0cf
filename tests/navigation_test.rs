// Integration tests for panel selection: wrap-around, touch mapping and
// reveal toggling through the app's input handling.

mod common;

use common::touch_panel;
use ratatui::layout::Position;
use sysident::adapters::mock::StaticInfoProvider;
use sysident::app::{App, LoopState};
use sysident::input::{Action, InputSnapshot};
use sysident::panels;
use sysident::selection::{Direction, SelectionController};
use sysident::ui::layout::PANEL_ZONES;
use sysident::ui::Compositor;

const N: usize = 9;

fn controller_at(index: usize) -> SelectionController {
    let mut controller = SelectionController::new(N, PANEL_ZONES);
    for _ in 0..index {
        controller.advance(Direction::Next);
    }
    controller
}

fn app() -> App<StaticInfoProvider> {
    App::new(Compositor::new(StaticInfoProvider::new(), panels::standard()))
}

// =============================================================================
// Wrap-around
// =============================================================================

#[test]
fn test_next_then_previous_restores_every_index() {
    for start in 0..N {
        let mut controller = controller_at(start);
        controller.advance(Direction::Next);
        controller.advance(Direction::Previous);
        assert_eq!(controller.active_index(), start);
    }
}

#[test]
fn test_n_steps_is_a_full_cycle() {
    for start in 0..N {
        for direction in [Direction::Next, Direction::Previous] {
            let mut controller = controller_at(start);
            for _ in 0..N {
                controller.advance(direction);
                assert!(controller.active_index() < N);
            }
            assert_eq!(controller.active_index(), start);
        }
    }
}

#[test]
fn test_wraps_at_both_ends() {
    let mut last = controller_at(N - 1);
    last.advance(Direction::Next);
    assert_eq!(last.active_index(), 0);

    let mut first = controller_at(0);
    first.advance(Direction::Previous);
    assert_eq!(first.active_index(), N - 1);
}

#[test]
fn test_single_panel_catalogue_stays_put() {
    let mut controller = SelectionController::new(1, PANEL_ZONES);
    controller.advance(Direction::Next);
    controller.advance(Direction::Previous);
    assert_eq!(controller.active_index(), 0);
}

// =============================================================================
// Touch
// =============================================================================

#[test]
fn test_every_cell_of_a_zone_selects_it() {
    let controller = controller_at(0);
    for k in 0..N {
        let zone = controller.zones().zone(k);
        for x in zone.x..zone.right() {
            for y in zone.y..zone.bottom() {
                assert_eq!(controller.select_from_point(Position::new(x, y)), k);
            }
        }
    }
}

#[test]
fn test_gaps_and_outside_keep_selection() {
    let controller = controller_at(4);
    let first = controller.zones().zone(0);
    let last = controller.zones().zone(N - 1);

    let misses = [
        Position::new(first.x, first.y + 1),
        Position::new(first.x - 1, first.y),
        Position::new(first.right(), first.y),
        Position::new(first.x, first.y - 1),
        Position::new(last.x, last.bottom()),
        Position::new(60, 10),
    ];
    for point in misses {
        assert_eq!(controller.select_from_point(point), 4, "{:?}", point);
    }
}

#[test]
fn test_select_from_point_does_not_mutate() {
    let controller = controller_at(2);
    let zone = controller.zones().zone(6);
    let _ = controller.select_from_point(Position::new(zone.x, zone.y));
    assert_eq!(controller.active_index(), 2);
}

#[test]
fn test_touch_through_app() {
    let mut app = app();
    for k in (0..N).rev() {
        app.handle_input(&touch_panel(k));
        assert_eq!(app.controller().active_index(), k);
    }
}

// =============================================================================
// Reveal toggle
// =============================================================================

#[test]
fn test_toggle_twice_restores() {
    let mut controller = controller_at(0);
    let initial = controller.reveal_sensitive();
    controller.toggle_reveal();
    assert_ne!(controller.reveal_sensitive(), initial);
    controller.toggle_reveal();
    assert_eq!(controller.reveal_sensitive(), initial);
}

#[test]
fn test_held_toggle_flips_once() {
    let mut app = app();
    app.handle_input(&InputSnapshot::press(Action::ToggleReveal));
    for _ in 0..30 {
        app.handle_input(&InputSnapshot::new().with_held(Action::ToggleReveal));
    }
    assert!(!app.controller().reveal_sensitive());
}

#[test]
fn test_reveal_survives_navigation() {
    let mut app = app().with_reveal(false);
    for _ in 0..N + 2 {
        app.handle_input(&InputSnapshot::press(Action::Next));
    }
    assert!(!app.controller().reveal_sensitive());
    assert_eq!(app.controller().active_index(), 2);
}

// =============================================================================
// Concrete scenario
// =============================================================================

#[test]
fn test_next_touch_previous_exit_scenario() {
    let mut app = app();
    assert_eq!(app.controller().active_index(), 0);

    for _ in 0..3 {
        app.handle_input(&InputSnapshot::press(Action::Next));
    }
    assert_eq!(app.controller().active_index(), 3);

    app.handle_input(&touch_panel(7));
    assert_eq!(app.controller().active_index(), 7);

    app.handle_input(&InputSnapshot::press(Action::Previous));
    assert_eq!(app.controller().active_index(), 6);

    assert_eq!(app.state(), LoopState::Running);
    app.handle_input(&InputSnapshot::press(Action::Exit));
    assert_eq!(app.state(), LoopState::Terminated);
}
