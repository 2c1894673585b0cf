//! Per-frame composition of the active panel.
//!
//! The compositor owns no state between frames. Each call resolves the
//! fields of one panel against the info provider, applies redaction, and
//! hands the results to a [`PanelRenderer`]. A failed query only affects the
//! field that issued it.

use std::sync::Arc;

use crate::models::format::{REDACTED, UNAVAILABLE};
use crate::models::{Catalogue, FieldDescriptor, Formatted, Query};
use crate::traits::{InfoProvider, Surface};

use super::panel_renderer::PanelRenderer;

/// What a field shows this frame.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Shown(Formatted),
    /// Sensitive and reveal mode is off. The provider was not asked.
    Redacted,
    /// The query failed or returned the wrong kind of fact.
    Unavailable,
}

impl FieldValue {
    /// Display text of the value. Meters yield their caption.
    pub fn text(&self) -> &str {
        match self {
            FieldValue::Shown(Formatted::Text(text)) => text,
            FieldValue::Shown(Formatted::Meter { caption, .. }) => caption,
            FieldValue::Redacted => REDACTED,
            FieldValue::Unavailable => UNAVAILABLE,
        }
    }
}

/// A field descriptor together with its value for this frame.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedField<'p> {
    pub descriptor: &'p FieldDescriptor,
    pub value: FieldValue,
    pub annotation: Option<String>,
}

impl ResolvedField<'_> {
    /// Value text with the annotation appended in parentheses.
    pub fn display(&self) -> String {
        let value = self.value.text();
        match (&self.annotation, value.is_empty()) {
            (Some(annotation), false) => format!("{} ({})", value, annotation),
            (Some(annotation), true) => format!("({})", annotation),
            (None, _) => value.to_string(),
        }
    }
}

pub struct Compositor<P> {
    provider: P,
    catalogue: Arc<Catalogue>,
}

impl<P: InfoProvider> Compositor<P> {
    pub fn new(provider: P, catalogue: Arc<Catalogue>) -> Self {
        Self {
            provider,
            catalogue,
        }
    }

    pub fn catalogue(&self) -> &Catalogue {
        &self.catalogue
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Draw panel `index` onto `surface`.
    ///
    /// `index` must be a valid catalogue position; the selection controller
    /// never produces anything else.
    pub fn render_panel<S: Surface>(&self, index: usize, reveal: bool, surface: &mut S) {
        let Some(panel) = self.catalogue.get(index) else {
            tracing::error!(index, panels = self.catalogue.len(), "Invalid panel index");
            return;
        };

        let mut renderer = PanelRenderer::new(surface);
        for section in &panel.sections {
            renderer.section(section);
            for (row, descriptor) in section.fields.iter().enumerate() {
                let resolved = self.resolve(descriptor, reveal);
                renderer.field(section.field_origin(row), &resolved);
            }
        }
    }

    /// Resolve one field. Sensitive fields are not queried while redacted.
    pub fn resolve<'p>(&self, descriptor: &'p FieldDescriptor, reveal: bool) -> ResolvedField<'p> {
        let value = if descriptor.sensitive && !reveal {
            FieldValue::Redacted
        } else {
            self.lookup(descriptor)
        };

        ResolvedField {
            descriptor,
            value,
            annotation: self.annotation(descriptor),
        }
    }

    fn lookup(&self, descriptor: &FieldDescriptor) -> FieldValue {
        let fact = match self.provider.query(descriptor.query) {
            Ok(fact) => fact,
            Err(err) => {
                tracing::trace!(query = %descriptor.query, error = %err, "Fact unavailable");
                return FieldValue::Unavailable;
            }
        };
        match descriptor.format.apply(&fact) {
            Ok(formatted) => FieldValue::Shown(formatted),
            Err(err) => {
                tracing::trace!(query = %descriptor.query, error = %err, "Fact has wrong kind");
                FieldValue::Unavailable
            }
        }
    }

    fn annotation(&self, descriptor: &FieldDescriptor) -> Option<String> {
        let annotation = descriptor.annotation.as_ref()?;
        let parts: Vec<String> = annotation
            .parts
            .iter()
            .filter_map(|&query| self.part(query))
            .collect();
        if parts.is_empty() {
            return None;
        }
        Some(format!("{}{}", annotation.prefix, parts.join(" - ")))
    }

    fn part(&self, query: Query) -> Option<String> {
        match self.provider.query(query) {
            Ok(fact) => Some(fact.to_string()),
            Err(err) => {
                tracing::trace!(query = %query, error = %err, "Annotation part unavailable");
                None
            }
        }
    }
}
