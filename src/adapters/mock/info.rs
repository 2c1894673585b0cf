//! In-memory info provider.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::error::{QueryError, QueryResult};
use crate::models::{Fact, Query};
use crate::traits::InfoProvider;

/// Answers queries from a fixed map and logs every query it receives.
///
/// Clones share the log, so a test can keep one handle while the compositor
/// owns another.
///
/// # Example
///
/// ```ignore
/// use sysident::adapters::mock::StaticInfoProvider;
/// use sysident::models::{Fact, Query};
///
/// let provider = StaticInfoProvider::new().with(Query::BatteryLevel, Fact::Unsigned(80));
/// let handle = provider.clone();
/// // ... render with `provider` ...
/// assert_eq!(handle.queried(), vec![Query::BatteryLevel]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct StaticInfoProvider {
    facts: HashMap<Query, Fact>,
    not_applicable: Vec<Query>,
    log: Arc<Mutex<Vec<Query>>>,
}

impl StaticInfoProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, query: Query, fact: Fact) -> Self {
        self.facts.insert(query, fact);
        self
    }

    /// Report `query` as not applicable rather than missing.
    pub fn without(mut self, query: Query) -> Self {
        self.facts.remove(&query);
        self.not_applicable.push(query);
        self
    }

    /// Every query received so far, in order.
    pub fn queried(&self) -> Vec<Query> {
        self.log.lock().unwrap().clone()
    }

    pub fn clear_log(&self) {
        self.log.lock().unwrap().clear();
    }
}

impl InfoProvider for StaticInfoProvider {
    fn query(&self, query: Query) -> QueryResult<Fact> {
        self.log.lock().unwrap().push(query);
        if self.not_applicable.contains(&query) {
            return Err(QueryError::NotApplicable { query });
        }
        self.facts
            .get(&query)
            .cloned()
            .ok_or(QueryError::Missing { query })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_log() {
        let provider = StaticInfoProvider::new().with(Query::Model, Fact::text("N3DS"));
        let handle = provider.clone();
        assert_eq!(provider.query(Query::Model).unwrap(), Fact::text("N3DS"));
        assert!(matches!(
            provider.query(Query::Region),
            Err(QueryError::Missing { .. })
        ));
        assert_eq!(handle.queried(), vec![Query::Model, Query::Region]);
    }

    #[test]
    fn test_without_is_not_applicable() {
        let provider = StaticInfoProvider::new()
            .with(Query::Nnid, Fact::text("someone"))
            .without(Query::Nnid);
        assert!(matches!(
            provider.query(Query::Nnid),
            Err(QueryError::NotApplicable { .. })
        ));
    }
}
