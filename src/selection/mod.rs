//! Panel selection.
//!
//! [`SelectionController`] owns the active panel index and the reveal flag.
//! Directional steps wrap around, touches map through static [`HitZones`],
//! and nothing outside the controller mutates the state.

mod hit_zone;
mod state;

pub use hit_zone::HitZones;
pub use state::{Direction, SelectionController, SelectionState};
