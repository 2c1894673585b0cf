//! Trait abstractions for the collaborators around the core.
//!
//! # Traits
//!
//! - [`InfoProvider`] - platform fact queries
//! - [`Surface`] - drawing primitives for one output surface
//! - [`InputSource`] - per-frame input capture

pub mod info;
pub mod input;
pub mod surface;

pub use info::InfoProvider;
pub use input::InputSource;
pub use surface::Surface;
