//! Draws resolved fields and section chrome onto a [`Surface`].

use ratatui::layout::{Position, Rect};
use ratatui::style::Modifier;
use unicode_width::UnicodeWidthStr;

use crate::models::{FieldFormat, Formatted, Section};
use crate::traits::Surface;

use super::compositor::{FieldValue, ResolvedField};
use super::layout::METER_WIDTH;
use super::theme::{
    label_style, unavailable_style, value_style, COLOR_BORDER, COLOR_METER_EMPTY,
    COLOR_METER_FILL, COLOR_PANEL,
};

/// Cells between a label and its value.
const LABEL_GAP: u16 = 1;

pub struct PanelRenderer<'s, S: Surface> {
    surface: &'s mut S,
}

impl<'s, S: Surface> PanelRenderer<'s, S> {
    pub fn new(surface: &'s mut S) -> Self {
        Self { surface }
    }

    /// Box, fill and optional title of a section.
    pub fn section(&mut self, section: &Section) {
        self.surface.fill(section.bounds, COLOR_PANEL);
        self.surface.outline(section.bounds, COLOR_BORDER);
        if let Some(title) = section.title {
            let origin = section.title_origin();
            self.surface.text(
                origin.x,
                origin.y,
                title,
                label_style().add_modifier(Modifier::BOLD),
            );
        }
    }

    /// One field: label, then value (or meter) on the same row.
    pub fn field(&mut self, origin: Position, field: &ResolvedField<'_>) {
        let label = field.descriptor.label;
        let mut x = origin.x;
        if !label.is_empty() {
            self.surface.text(x, origin.y, label, label_style());
            x += label.width() as u16 + LABEL_GAP;
        }

        if field.descriptor.format == FieldFormat::Meter {
            self.meter(Position::new(x, origin.y), &field.value);
            return;
        }

        let style = match field.value {
            FieldValue::Unavailable => unavailable_style(),
            _ => value_style(),
        };
        self.surface.text(x, origin.y, &field.display(), style);
    }

    fn meter(&mut self, origin: Position, value: &FieldValue) {
        let ratio = match value {
            FieldValue::Shown(Formatted::Meter { ratio, .. }) => *ratio,
            _ => 0.0,
        };
        let bar = Rect::new(origin.x, origin.y, METER_WIDTH, 1);
        self.surface
            .meter(bar, ratio, COLOR_METER_FILL, COLOR_METER_EMPTY);
        self.surface.text(
            bar.right() + LABEL_GAP,
            origin.y,
            value.text(),
            value_style(),
        );
    }
}
