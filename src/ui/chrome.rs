//! Static chrome: status bar on the detail surface, panel list and help
//! line on the navigation surface.

use ratatui::layout::Rect;
use unicode_width::UnicodeWidthStr;

use crate::cli::VERSION;
use crate::selection::HitZones;
use crate::traits::Surface;

use super::layout::{HELP_BOX, LABEL_INSET, PANEL_LIST, STATUS_BAR_HEIGHT};
use super::theme::{
    item_style, status_style, value_style, COLOR_BACKGROUND, COLOR_BORDER, COLOR_PANEL,
    COLOR_SELECTOR, COLOR_STATUS_BAR,
};

const SELECTED_MARKER: &str = "\u{25B6}";

/// Program name on the left, `[i/N] Title` on the right.
pub fn draw_status_bar<S: Surface>(surface: &mut S, index: usize, total: usize, title: &str) {
    let width = surface.bounds().width;
    surface.fill(Rect::new(0, 0, width, STATUS_BAR_HEIGHT), COLOR_STATUS_BAR);
    surface.text(1, 0, &format!("sysident v{}", VERSION), status_style());

    let position = format!("[{}/{}] {}", index + 1, total, title);
    let x = width.saturating_sub(position.width() as u16 + 1);
    surface.text(x, 0, &position, status_style());
}

/// Panel list with the selector on `active`, followed by the help line.
pub fn draw_navigation<'a, S: Surface>(
    surface: &mut S,
    titles: impl IntoIterator<Item = &'a str>,
    zones: &HitZones,
    active: usize,
    reveal: bool,
) {
    let bounds = surface.bounds();
    surface.fill(bounds, COLOR_BACKGROUND);

    surface.fill(PANEL_LIST, COLOR_PANEL);
    surface.outline(PANEL_LIST, COLOR_BORDER);
    for (index, title) in titles.into_iter().enumerate() {
        let zone = zones.zone(index);
        let selected = index == active;
        if selected {
            surface.fill(zone, COLOR_SELECTOR);
            surface.text(zone.x, zone.y, SELECTED_MARKER, item_style(true));
        }
        surface.text(zone.x + LABEL_INSET, zone.y, title, item_style(selected));
    }

    surface.fill(HELP_BOX, COLOR_PANEL);
    surface.outline(HELP_BOX, COLOR_BORDER);
    let help = if reveal {
        "Tab: hide private  q: quit"
    } else {
        "Tab: show private  q: quit"
    };
    surface.text(HELP_BOX.x + 1, HELP_BOX.y + 1, help, value_style());
}
