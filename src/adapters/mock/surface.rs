//! Recording surface.

use ratatui::layout::Rect;
use ratatui::style::{Color, Style};

use crate::traits::Surface;

/// One recorded [`Surface`] call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Fill {
        rect: Rect,
        color: Color,
    },
    Outline {
        rect: Rect,
        color: Color,
    },
    Text {
        x: u16,
        y: u16,
        text: String,
        style: Style,
    },
    Meter {
        rect: Rect,
        ratio: f64,
        fill: Color,
        empty: Color,
    },
}

/// Surface that draws nothing and remembers everything.
#[derive(Debug, Clone)]
pub struct RecordingSurface {
    width: u16,
    height: u16,
    calls: Vec<DrawCall>,
}

impl RecordingSurface {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            calls: Vec::new(),
        }
    }

    pub fn calls(&self) -> &[DrawCall] {
        &self.calls
    }

    /// All text drawn, in call order.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.calls.iter().filter_map(|call| match call {
            DrawCall::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    /// Text of the last text call that started exactly at `(x, y)`.
    pub fn text_at(&self, x: u16, y: u16) -> Option<&str> {
        self.calls.iter().rev().find_map(|call| match call {
            DrawCall::Text {
                x: cx,
                y: cy,
                text,
                ..
            } if *cx == x && *cy == y => Some(text.as_str()),
            _ => None,
        })
    }

    pub fn clear(&mut self) {
        self.calls.clear();
    }
}

impl Surface for RecordingSurface {
    fn bounds(&self) -> Rect {
        Rect::new(0, 0, self.width, self.height)
    }

    fn fill(&mut self, rect: Rect, color: Color) {
        self.calls.push(DrawCall::Fill { rect, color });
    }

    fn outline(&mut self, rect: Rect, color: Color) {
        self.calls.push(DrawCall::Outline { rect, color });
    }

    fn text(&mut self, x: u16, y: u16, text: &str, style: Style) {
        self.calls.push(DrawCall::Text {
            x,
            y,
            text: text.to_string(),
            style,
        });
    }

    fn meter(&mut self, rect: Rect, ratio: f64, fill: Color, empty: Color) {
        self.calls.push(DrawCall::Meter {
            rect,
            ratio,
            fill,
            empty,
        });
    }
}
