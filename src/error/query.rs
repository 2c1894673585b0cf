//! Query failure types.
//!
//! A failed query never escapes the compositor: it degrades to the
//! unavailable placeholder for that one field.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

use crate::models::Query;

/// Why a fact could not be resolved.
#[derive(Debug, Error)]
pub enum QueryError {
    /// The fact does not exist on this device.
    #[error("{query} does not apply to this device")]
    NotApplicable { query: Query },

    /// The provider has no value for the fact.
    #[error("no value for {query}")]
    Missing { query: Query },

    /// Reading the backing source failed.
    #[error("failed to read {query} from '{}': {source}", path.display())]
    Io {
        query: Query,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The backing source held something unexpected.
    #[error("unexpected value for {query}: {detail}")]
    Parse { query: Query, detail: String },
}

impl QueryError {
    pub fn query(&self) -> Query {
        match self {
            QueryError::NotApplicable { query }
            | QueryError::Missing { query }
            | QueryError::Io { query, .. }
            | QueryError::Parse { query, .. } => *query,
        }
    }

    pub fn parse(query: Query, detail: impl Into<String>) -> Self {
        QueryError::Parse {
            query,
            detail: detail.into(),
        }
    }
}

/// Classify an I/O failure while reading `path` for `query`.
///
/// A missing file means the host has no such fact rather than a fault.
pub fn classify_io_error(err: io::Error, path: impl Into<PathBuf>, query: Query) -> QueryError {
    match err.kind() {
        io::ErrorKind::NotFound => QueryError::NotApplicable { query },
        _ => QueryError::Io {
            query,
            path: path.into(),
            source: err,
        },
    }
}

/// Result of one provider query.
pub type QueryResult<T> = Result<T, QueryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_is_not_applicable() {
        let err = classify_io_error(
            io::Error::new(io::ErrorKind::NotFound, "gone"),
            "/sys/class/power_supply/BAT0/capacity",
            Query::BatteryLevel,
        );
        assert!(matches!(err, QueryError::NotApplicable { query: Query::BatteryLevel }));
    }

    #[test]
    fn test_permission_denied_keeps_path() {
        let err = classify_io_error(
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
            "/etc/machine-id",
            Query::SerialNumber,
        );
        match &err {
            QueryError::Io { path, .. } => assert_eq!(path, &PathBuf::from("/etc/machine-id")),
            other => panic!("unexpected {:?}", other),
        }
        assert_eq!(err.query(), Query::SerialNumber);
        assert!(err.to_string().contains("serial_number"));
    }

    #[test]
    fn test_display_names_the_query() {
        let err = QueryError::NotApplicable {
            query: Query::NandCid,
        };
        assert_eq!(err.to_string(), "nand_cid does not apply to this device");
    }
}
