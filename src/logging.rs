//! File logging.
//!
//! The browser owns stdout, so tracing output goes to a file. `RUST_LOG`
//! overrides the configured level, e.g. `RUST_LOG=sysident=trace` to see
//! every unavailable fact.

use std::fs::OpenOptions;
#[cfg(unix)]
use std::os::unix::fs::OpenOptionsExt;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::AppConfig;
use crate::error::SysidentError;

/// Install the global subscriber. Does nothing when logging is disabled.
pub fn init_logging(config: &AppConfig) -> Result<(), SysidentError> {
    let Some(path) = &config.log_file else {
        return Ok(());
    };

    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&config.log_level).map_err(|e| {
            SysidentError::Config(format!("invalid log level '{}': {}", config.log_level, e))
        })?,
    };

    let file = open_log_file(path)
        .map_err(|e| SysidentError::Logging(format!("{}: {}", path.display(), e)))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|e| SysidentError::Logging(e.to_string()))?;

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        log = %path.display(),
        "Logging initialised"
    );
    Ok(())
}

fn open_log_file(path: &Path) -> std::io::Result<std::fs::File> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    let mut options = OpenOptions::new();
    options.create(true).append(true);
    #[cfg(unix)]
    options.mode(0o600);
    options.open(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_logging_is_ok() {
        let config = AppConfig::default().with_log_file(None);
        assert!(init_logging(&config).is_ok());
    }

    #[test]
    fn test_open_log_file_creates_parents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("sysident.log");
        open_log_file(&path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_unwritable_log_path_is_logging_error() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::default()
            .with_log_file(Some(dir.path().to_path_buf()))
            .with_log_level("info");
        let err = init_logging(&config).unwrap_err();
        assert!(matches!(err, SysidentError::Logging(_) | SysidentError::Config(_)));
    }
}
