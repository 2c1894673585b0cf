//! Declarative panel definitions.
//!
//! A [`Panel`] is a titled list of [`Section`]s; each section is a boxed
//! region of the detail surface holding [`FieldDescriptor`]s at fixed rows.
//! Geometry is static: a field's position depends only on its section and
//! its index, never on the content of other fields.

use ratatui::layout::{Position, Rect};

use super::fact::Query;
use super::format::FieldFormat;

/// Width of the detail-surface box used by single-section panels.
const LIST_WIDTH: u16 = 62;
/// Rows between consecutive fields of a single-section panel.
const LIST_STRIDE: u16 = 2;
/// Top row of the first section box, below the status bar.
const LIST_TOP: u16 = 2;

/// Extra context appended in parentheses after a field's value.
///
/// Annotation parts are never redacted. Unavailable parts are skipped and the
/// annotation is omitted entirely when no part resolves.
#[derive(Debug, Clone, PartialEq)]
pub struct Annotation {
    pub prefix: &'static str,
    pub parts: Vec<Query>,
}

impl Annotation {
    pub fn new(parts: impl IntoIterator<Item = Query>) -> Self {
        Self {
            prefix: "",
            parts: parts.into_iter().collect(),
        }
    }

    pub fn with_prefix(mut self, prefix: &'static str) -> Self {
        self.prefix = prefix;
        self
    }
}

/// One labeled fact within a panel.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDescriptor {
    pub label: &'static str,
    pub query: Query,
    pub sensitive: bool,
    pub format: FieldFormat,
    pub annotation: Option<Annotation>,
}

impl FieldDescriptor {
    pub fn new(label: &'static str, query: Query, format: FieldFormat) -> Self {
        Self {
            label,
            query,
            sensitive: false,
            format,
            annotation: None,
        }
    }

    /// Shorthand for a free-text field.
    pub fn text(label: &'static str, query: Query) -> Self {
        Self::new(label, query, FieldFormat::Text)
    }

    /// Mark the field as redacted unless reveal mode is on.
    pub fn sensitive(mut self) -> Self {
        self.sensitive = true;
        self
    }

    pub fn annotated(mut self, annotation: Annotation) -> Self {
        self.annotation = Some(annotation);
        self
    }

    /// Every query this field issues when fully revealed.
    pub fn queries(&self) -> impl Iterator<Item = Query> + '_ {
        std::iter::once(self.query).chain(
            self.annotation
                .iter()
                .flat_map(|annotation| annotation.parts.iter().copied()),
        )
    }
}

/// A boxed group of fields on the detail surface.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub title: Option<&'static str>,
    pub bounds: Rect,
    pub stride: u16,
    pub fields: Vec<FieldDescriptor>,
}

impl Section {
    /// A single untitled box sized to hold `fields` two rows apart.
    pub fn list(fields: Vec<FieldDescriptor>) -> Self {
        let rows = fields.len() as u16;
        Self {
            title: None,
            bounds: Rect::new(1, LIST_TOP, LIST_WIDTH, rows * LIST_STRIDE + 1),
            stride: LIST_STRIDE,
            fields,
        }
    }

    /// A titled box at a fixed position with one field per row.
    pub fn group(title: &'static str, bounds: Rect, fields: Vec<FieldDescriptor>) -> Self {
        Self {
            title: Some(title),
            bounds,
            stride: 1,
            fields,
        }
    }

    /// Where the title is drawn, if any.
    pub fn title_origin(&self) -> Position {
        Position::new(self.bounds.x + 2, self.bounds.y + 1)
    }

    /// Top-left cell of the field at `index`.
    pub fn field_origin(&self, index: usize) -> Position {
        let first_row = self.bounds.y + 1 + u16::from(self.title.is_some());
        Position::new(self.bounds.x + 2, first_row + self.stride * index as u16)
    }
}

/// One selectable screen of related facts.
#[derive(Debug, Clone, PartialEq)]
pub struct Panel {
    pub title: &'static str,
    pub sections: Vec<Section>,
}

impl Panel {
    pub fn new(title: &'static str) -> Self {
        Self {
            title,
            sections: Vec::new(),
        }
    }

    pub fn with_section(mut self, section: Section) -> Self {
        self.sections.push(section);
        self
    }

    pub fn fields(&self) -> impl Iterator<Item = &FieldDescriptor> {
        self.sections.iter().flat_map(|section| section.fields.iter())
    }
}

/// Ordered, immutable list of panels. Panel indices are positions in it.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalogue {
    panels: Vec<Panel>,
}

impl Catalogue {
    /// Build a catalogue. An empty catalogue has no valid selection and is
    /// rejected.
    pub fn new(panels: Vec<Panel>) -> Option<Self> {
        if panels.is_empty() {
            return None;
        }
        Some(Self { panels })
    }

    pub fn len(&self) -> usize {
        self.panels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.panels.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Panel> {
        self.panels.get(index)
    }

    pub fn panels(&self) -> &[Panel] {
        &self.panels
    }

    pub fn titles(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.panels.iter().map(|panel| panel.title)
    }
}
