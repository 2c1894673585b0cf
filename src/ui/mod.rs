//! UI rendering for the panel browser.
//!
//! One frame draws two fixed surfaces:
//! - detail surface: status bar and the active panel
//! - navigation surface: panel list, selector and help line
//!
//! Surface geometry lives in [`layout`] and colours in [`theme`].

mod chrome;
pub mod compositor;
pub mod layout;
mod panel_renderer;
pub mod theme;

pub use compositor::{Compositor, FieldValue, ResolvedField};
pub use panel_renderer::PanelRenderer;

use ratatui::buffer::Buffer;
use ratatui::style::Style;
use ratatui::Frame;

use crate::adapters::BufferSurface;
use crate::app::App;
use crate::selection::SelectionController;
use crate::traits::InfoProvider;

use layout::{DETAIL_SURFACE, NAVIGATION_SURFACE};
use theme::COLOR_BACKGROUND;

// ============================================================================
// Main UI Rendering
// ============================================================================

/// Render one frame of the app.
pub fn render<P: InfoProvider>(frame: &mut Frame, app: &App<P>) {
    compose(frame.buffer_mut(), app.controller(), app.compositor());
}

/// Draw both surfaces into `buf` for the controller's current state.
pub fn compose<P: InfoProvider>(
    buf: &mut Buffer,
    controller: &SelectionController,
    compositor: &Compositor<P>,
) {
    let area = buf.area;
    buf.set_style(area, Style::default().bg(COLOR_BACKGROUND));

    let catalogue = compositor.catalogue();
    let index = controller.active_index();
    let reveal = controller.reveal_sensitive();

    let mut detail = BufferSurface::new(buf, DETAIL_SURFACE);
    if let Some(panel) = catalogue.get(index) {
        chrome::draw_status_bar(&mut detail, index, catalogue.len(), panel.title);
    }
    compositor.render_panel(index, reveal, &mut detail);

    let mut navigation = BufferSurface::new(buf, NAVIGATION_SURFACE);
    chrome::draw_navigation(
        &mut navigation,
        catalogue.titles(),
        controller.zones(),
        index,
        reveal,
    );
}
