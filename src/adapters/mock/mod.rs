//! Mock implementations for testing.
//!
//! These doubles let the compositor, renderer and main loop run without a
//! terminal or a real host.
//!
//! # Available Mocks
//!
//! - [`StaticInfoProvider`] - in-memory facts with a query log
//! - [`RecordingSurface`] - records every draw call
//! - [`ScriptedInput`] - replays a fixed list of snapshots

pub mod info;
pub mod input;
pub mod surface;

pub use info::StaticInfoProvider;
pub use input::ScriptedInput;
pub use surface::{DrawCall, RecordingSurface};
