//! Info provider trait abstraction.
//!
//! An info provider answers one [`Query`] at a time. Calls are independent,
//! synchronous and read-only; a provider must return promptly, reporting
//! [`QueryError`](crate::error::QueryError) instead of blocking.

use crate::error::QueryResult;
use crate::models::{Fact, Query};

/// Source of platform facts.
///
/// # Example
///
/// ```ignore
/// use sysident::models::Query;
/// use sysident::traits::InfoProvider;
///
/// fn battery_line<P: InfoProvider>(provider: &P) -> String {
///     match provider.query(Query::BatteryLevel) {
///         Ok(fact) => format!("battery {}", fact),
///         Err(err) => format!("battery unknown ({})", err),
///     }
/// }
/// ```
pub trait InfoProvider {
    fn query(&self, query: Query) -> QueryResult<Fact>;
}

impl<P: InfoProvider + ?Sized> InfoProvider for &P {
    fn query(&self, query: Query) -> QueryResult<Fact> {
        (**self).query(query)
    }
}

impl<P: InfoProvider + ?Sized> InfoProvider for Box<P> {
    fn query(&self, query: Query) -> QueryResult<Fact> {
        (**self).query(query)
    }
}
