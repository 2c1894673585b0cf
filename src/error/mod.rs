//! Error types for sysident.
//!
//! | Type | Raised by | Handling |
//! |------|-----------|----------|
//! | [`QueryError`] | info providers | degraded to a placeholder by the compositor |
//! | [`SysidentError`] | start-up, terminal | reported on exit by `main` |
//!
//! An out-of-range panel selection is not an error type: the selection
//! controller's wrap-around makes it unrepresentable.

mod query;
mod sysident_error;

pub use query::{classify_io_error, QueryError, QueryResult};
pub use sysident_error::SysidentError;
