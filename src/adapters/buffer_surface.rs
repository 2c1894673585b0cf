//! [`Surface`] over a region of a ratatui [`Buffer`].
//!
//! Each surface owns one screen rectangle. Local coordinates are offset by
//! the rectangle's origin and every write is clipped to both the rectangle
//! and the buffer, so a small terminal simply loses the cells it cannot show.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};

use crate::traits::Surface;

pub struct BufferSurface<'b> {
    buf: &'b mut Buffer,
    area: Rect,
}

impl<'b> BufferSurface<'b> {
    pub fn new(buf: &'b mut Buffer, area: Rect) -> Self {
        Self { buf, area }
    }

    /// Screen rectangle of a local `rect`, clipped to what can be drawn.
    fn to_screen(&self, rect: Rect) -> Rect {
        let moved = Rect::new(
            self.area.x.saturating_add(rect.x),
            self.area.y.saturating_add(rect.y),
            rect.width,
            rect.height,
        );
        moved.intersection(self.area).intersection(self.buf.area)
    }

    fn set_cell(&mut self, x: u16, y: u16, ch: char, style: Style) {
        let clip = self.area.intersection(self.buf.area);
        let (x, y) = (self.area.x.saturating_add(x), self.area.y.saturating_add(y));
        if x < clip.x || y < clip.y || x >= clip.right() || y >= clip.bottom() {
            return;
        }
        if let Some(cell) = self.buf.cell_mut((x, y)) {
            cell.set_char(ch).set_style(style);
        }
    }
}

impl Surface for BufferSurface<'_> {
    fn bounds(&self) -> Rect {
        Rect::new(0, 0, self.area.width, self.area.height)
    }

    fn fill(&mut self, rect: Rect, color: Color) {
        let screen = self.to_screen(rect);
        self.buf.set_style(screen, Style::default().bg(color));
    }

    fn outline(&mut self, rect: Rect, color: Color) {
        if rect.width < 2 || rect.height < 2 {
            return;
        }
        let style = Style::default().fg(color);
        let (x1, y1) = (rect.x, rect.y);
        let x2 = rect.x + rect.width - 1;
        let y2 = rect.y + rect.height - 1;

        self.set_cell(x1, y1, '\u{250C}', style);
        self.set_cell(x2, y1, '\u{2510}', style);
        self.set_cell(x1, y2, '\u{2514}', style);
        self.set_cell(x2, y2, '\u{2518}', style);
        for x in (x1 + 1)..x2 {
            self.set_cell(x, y1, '\u{2500}', style);
            self.set_cell(x, y2, '\u{2500}', style);
        }
        for y in (y1 + 1)..y2 {
            self.set_cell(x1, y, '\u{2502}', style);
            self.set_cell(x2, y, '\u{2502}', style);
        }
    }

    fn text(&mut self, x: u16, y: u16, text: &str, style: Style) {
        if x >= self.area.width || y >= self.area.height {
            return;
        }
        let screen = self.to_screen(Rect::new(x, y, self.area.width - x, 1));
        if screen.is_empty() {
            return;
        }
        self.buf
            .set_stringn(screen.x, screen.y, text, screen.width as usize, style);
    }

    fn meter(&mut self, rect: Rect, ratio: f64, fill: Color, empty: Color) {
        let ratio = ratio.clamp(0.0, 1.0);
        let filled = (f64::from(rect.width) * ratio).round() as u16;
        self.fill(Rect::new(rect.x, rect.y, filled, rect.height), fill);
        self.fill(
            Rect::new(rect.x + filled, rect.y, rect.width - filled, rect.height),
            empty,
        );
    }
}
