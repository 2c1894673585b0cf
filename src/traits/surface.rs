//! Drawing surface trait abstraction.
//!
//! A surface is one logical drawing target (the navigation list or the
//! detail panel). Coordinates are relative to the surface's own top-left
//! corner and anything outside [`Surface::bounds`] is clipped.

use ratatui::layout::Rect;
use ratatui::style::{Color, Style};

pub trait Surface {
    /// Local bounds, always anchored at `(0, 0)`.
    fn bounds(&self) -> Rect;

    /// Fill `rect` with a solid background colour.
    fn fill(&mut self, rect: Rect, color: Color);

    /// Draw a one-cell border around `rect`.
    fn outline(&mut self, rect: Rect, color: Color);

    /// Draw `text` starting at `(x, y)`, clipped at the right edge.
    fn text(&mut self, x: u16, y: u16, text: &str, style: Style);

    /// Draw a horizontal bar inside `rect` filled to `ratio` (0.0..=1.0).
    fn meter(&mut self, rect: Rect, ratio: f64, fill: Color, empty: Color);
}
