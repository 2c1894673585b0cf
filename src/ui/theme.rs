//! Color theme constants.

use ratatui::style::{Color, Modifier, Style};

// ============================================================================
// Surfaces
// ============================================================================

/// Screen background behind everything.
pub const COLOR_BACKGROUND: Color = Color::Rgb(12, 14, 20);

/// Status bar fill on the detail surface.
pub const COLOR_STATUS_BAR: Color = Color::Rgb(58, 130, 200);

/// Border around panel and list boxes.
pub const COLOR_BORDER: Color = Color::Gray;

/// Fill inside panel and list boxes.
pub const COLOR_PANEL: Color = Color::Rgb(28, 31, 42);

// ============================================================================
// Panel fields
// ============================================================================

/// Field labels.
pub const COLOR_LABEL: Color = Color::Rgb(120, 200, 255);

/// Field values.
pub const COLOR_VALUE: Color = Color::White;

/// Placeholder shown for unavailable facts.
pub const COLOR_UNAVAILABLE: Color = Color::DarkGray;

/// Filled part of a usage meter.
pub const COLOR_METER_FILL: Color = Color::Rgb(4, 181, 117);

/// Empty part of a usage meter.
pub const COLOR_METER_EMPTY: Color = Color::Rgb(50, 54, 66);

// ============================================================================
// Navigation
// ============================================================================

/// Selector highlight behind the active panel label.
pub const COLOR_SELECTOR: Color = Color::Rgb(58, 130, 200);

/// Inactive panel labels.
pub const COLOR_ITEM: Color = Color::Gray;

/// Active panel label.
pub const COLOR_ITEM_SELECTED: Color = Color::White;

pub fn label_style() -> Style {
    Style::default().fg(COLOR_LABEL).bg(COLOR_PANEL)
}

pub fn value_style() -> Style {
    Style::default().fg(COLOR_VALUE).bg(COLOR_PANEL)
}

pub fn unavailable_style() -> Style {
    Style::default().fg(COLOR_UNAVAILABLE).bg(COLOR_PANEL)
}

pub fn item_style(selected: bool) -> Style {
    if selected {
        Style::default()
            .fg(COLOR_ITEM_SELECTED)
            .bg(COLOR_SELECTOR)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(COLOR_ITEM).bg(COLOR_PANEL)
    }
}

pub fn status_style() -> Style {
    Style::default()
        .fg(COLOR_BACKGROUND)
        .bg(COLOR_STATUS_BAR)
        .add_modifier(Modifier::BOLD)
}
