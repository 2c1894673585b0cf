//! Static screen geometry.
//!
//! The screen is two fixed surfaces side by side: navigation on the left,
//! detail on the right. Nothing here depends on the terminal size; cells
//! that fall outside the terminal are clipped when drawn.

use ratatui::layout::{Position, Rect};

use crate::selection::HitZones;

// ============================================================================
// Surfaces
// ============================================================================

/// Panel list, selector and help line.
pub const NAVIGATION_SURFACE: Rect = Rect {
    x: 0,
    y: 0,
    width: 30,
    height: 24,
};

/// Status bar and the active panel.
pub const DETAIL_SURFACE: Rect = Rect {
    x: 30,
    y: 0,
    width: 64,
    height: 24,
};

/// Smallest terminal that shows both surfaces in full.
pub const MIN_WIDTH: u16 = DETAIL_SURFACE.x + DETAIL_SURFACE.width;
pub const MIN_HEIGHT: u16 = NAVIGATION_SURFACE.height;

// ============================================================================
// Navigation surface
// ============================================================================

/// Box around the panel list.
pub const PANEL_LIST: Rect = Rect {
    x: 1,
    y: 1,
    width: 28,
    height: 20,
};

/// Box around the help line.
pub const HELP_BOX: Rect = Rect {
    x: 1,
    y: 21,
    width: 28,
    height: 3,
};

/// Panel labels are drawn this many cells right of their zone's origin.
pub const LABEL_INSET: u16 = 2;

/// One zone per panel label; also where the selector highlight is drawn.
pub const PANEL_ZONES: HitZones = HitZones {
    origin: Position { x: 2, y: 2 },
    width: 26,
    height: 1,
    stride: 2,
    count: 0,
};

// ============================================================================
// Detail surface
// ============================================================================

pub const STATUS_BAR_HEIGHT: u16 = 1;

/// Width of a usage meter bar.
pub const METER_WIDTH: u16 = 16;

/// Translate an absolute screen cell into navigation-surface coordinates.
///
/// Returns `None` for cells outside the navigation surface, so touches on the
/// detail surface never change the selection.
pub fn to_navigation(point: Position) -> Option<Position> {
    if !NAVIGATION_SURFACE.contains(point) {
        return None;
    }
    Some(Position::new(
        point.x - NAVIGATION_SURFACE.x,
        point.y - NAVIGATION_SURFACE.y,
    ))
}
