//! Data model for the panel browser.
//!
//! - [`fact`]: query identifiers and fact values
//! - [`format`]: typed field formatting
//! - [`panel`]: declarative panels, sections and the catalogue

pub mod fact;
pub mod format;
pub mod panel;

pub use fact::{Fact, Query, StorageMedium, WifiSlot};
pub use format::{FieldFormat, FormatMismatch, Formatted};
pub use panel::{Annotation, Catalogue, FieldDescriptor, Panel, Section};
