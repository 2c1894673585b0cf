//! Prelude module for convenient imports.
//!
//! ```ignore
//! use sysident::prelude::*;
//! ```

pub use crate::app::{run_app, App, LoopState};
pub use crate::error::{QueryError, QueryResult, SysidentError};
pub use crate::input::{Action, InputSnapshot};
pub use crate::models::{Catalogue, Fact, FieldDescriptor, FieldFormat, Panel, Query, Section};
pub use crate::selection::{Direction, SelectionController, SelectionState};
pub use crate::traits::{InfoProvider, InputSource, Surface};
pub use crate::ui::Compositor;
