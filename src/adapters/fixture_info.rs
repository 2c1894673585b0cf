//! Info provider backed by a JSON fact file.
//!
//! The file is a single object keyed by [`Query::key`]:
//!
//! ```json
//! {
//!   "model": "New 3DS XL",
//!   "battery_level": 87,
//!   "battery_charging": false,
//!   "storage_sd_usage": { "used": 1200000000, "total": 31914983424 }
//! }
//! ```
//!
//! Keys that are absent resolve as missing; unknown keys reject the file.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::error::{QueryError, QueryResult, SysidentError};
use crate::models::{Fact, Query};
use crate::traits::InfoProvider;

#[derive(Debug, Clone, Default)]
pub struct FixtureInfoProvider {
    facts: HashMap<Query, Fact>,
}

impl FixtureInfoProvider {
    /// Load facts from `path`.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, SysidentError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| SysidentError::FixtureIo {
            path: path.to_path_buf(),
            source,
        })?;
        let provider = Self::parse(&content, path)?;
        tracing::info!(
            path = %path.display(),
            facts = provider.facts.len(),
            "Loaded fact file"
        );
        Ok(provider)
    }

    /// Parse facts from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self, SysidentError> {
        Self::parse(json, Path::new("<inline>"))
    }

    fn parse(json: &str, path: &Path) -> Result<Self, SysidentError> {
        let format_error = |detail: String| SysidentError::FixtureFormat {
            path: PathBuf::from(path),
            detail,
        };

        let raw: HashMap<String, Fact> =
            serde_json::from_str(json).map_err(|e| format_error(e.to_string()))?;

        let mut facts = HashMap::with_capacity(raw.len());
        for (key, fact) in raw {
            let query =
                Query::from_key(&key).ok_or_else(|| format_error(format!("unknown fact '{}'", key)))?;
            facts.insert(query, fact);
        }
        Ok(Self { facts })
    }

    pub fn len(&self) -> usize {
        self.facts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.facts.is_empty()
    }
}

impl InfoProvider for FixtureInfoProvider {
    fn query(&self, query: Query) -> QueryResult<Fact> {
        self.facts
            .get(&query)
            .cloned()
            .ok_or(QueryError::Missing { query })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{StorageMedium, WifiSlot};
    use std::io::Write;

    #[test]
    fn test_parses_every_fact_kind() {
        let provider = FixtureInfoProvider::from_json_str(
            r#"{
                "model": "New 3DS XL",
                "battery_voltage": 200,
                "power_saving": true,
                "wifi_1_ssid": "home",
                "storage_twl_photo_usage": {"used": 10, "total": 40}
            }"#,
        )
        .unwrap();

        assert_eq!(provider.len(), 5);
        assert_eq!(provider.query(Query::Model).unwrap(), Fact::text("New 3DS XL"));
        assert_eq!(provider.query(Query::BatteryVoltage).unwrap(), Fact::Unsigned(200));
        assert_eq!(provider.query(Query::PowerSaving).unwrap(), Fact::Flag(true));
        assert_eq!(
            provider.query(Query::WifiSsid(WifiSlot::One)).unwrap(),
            Fact::text("home")
        );
        assert_eq!(
            provider
                .query(Query::StorageUsage(StorageMedium::TwlPhoto))
                .unwrap(),
            Fact::Usage { used: 10, total: 40 }
        );
    }

    #[test]
    fn test_absent_key_is_missing() {
        let provider = FixtureInfoProvider::from_json_str("{}").unwrap();
        assert!(provider.is_empty());
        assert!(matches!(
            provider.query(Query::Nnid),
            Err(QueryError::Missing { query: Query::Nnid })
        ));
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        let err = FixtureInfoProvider::from_json_str(r#"{"flux_capacitor": 1}"#).unwrap_err();
        assert!(err.to_string().contains("unknown fact 'flux_capacitor'"));
    }

    #[test]
    fn test_non_object_is_rejected() {
        let err = FixtureInfoProvider::from_json_str("[1, 2]").unwrap_err();
        assert!(matches!(err, SysidentError::FixtureFormat { .. }));
    }

    #[test]
    fn test_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"username": "Yoshi"}}"#).unwrap();

        let provider = FixtureInfoProvider::from_path(file.path()).unwrap();
        assert_eq!(provider.query(Query::Username).unwrap(), Fact::text("Yoshi"));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = FixtureInfoProvider::from_path(dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, SysidentError::FixtureIo { .. }));
    }
}
