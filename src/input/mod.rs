//! Input handling.
//!
//! Terminal events are folded into one [`InputSnapshot`] per frame. The
//! snapshot records press edges, held keys and the latest touch (left-click)
//! position; the main loop consumes it and discards it.

pub mod keybindings;
pub mod snapshot;
pub mod source;

pub use keybindings::{KeyCombo, KeybindingConfig};
pub use snapshot::{Action, ActionSet, InputSnapshot};
pub use source::CrosstermInput;
