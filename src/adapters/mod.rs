//! Concrete implementations of trait abstractions.
//!
//! # Adapters
//!
//! - [`HostInfoProvider`] - facts read from the running Linux host
//! - [`FixtureInfoProvider`] - facts loaded from a JSON file
//! - [`BufferSurface`] - drawing surface over a ratatui buffer
//!
//! # Mock Implementations
//!
//! The [`mock`] submodule provides test doubles:
//! - [`mock::StaticInfoProvider`] - in-memory facts with a query log
//! - [`mock::RecordingSurface`] - records draw calls
//! - [`mock::ScriptedInput`] - replays input snapshots

pub mod buffer_surface;
pub mod fixture_info;
pub mod host_info;
pub mod mock;

pub use buffer_surface::BufferSurface;
pub use fixture_info::FixtureInfoProvider;
pub use host_info::{HostInfoProvider, MountUsage};
pub use mock::{RecordingSurface, ScriptedInput, StaticInfoProvider};
