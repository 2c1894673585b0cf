//! Run configuration.
//!
//! Layers, lowest first: built-in defaults, `SYSIDENT_*` environment
//! variables, command-line options.

use std::path::PathBuf;
use std::time::Duration;

use crate::cli::RunOptions;
use crate::error::SysidentError;

pub const DEFAULT_FRAME_MS: u64 = 16;
pub const DEFAULT_LOG_LEVEL: &str = "info";

pub const ENV_FRAME_MS: &str = "SYSIDENT_FRAME_MS";
pub const ENV_LOG_LEVEL: &str = "SYSIDENT_LOG_LEVEL";
pub const ENV_FACTS: &str = "SYSIDENT_FACTS";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// How long one frame waits for input.
    pub frame_interval: Duration,
    /// Whether private fields are shown on the first frame.
    pub reveal_on_start: bool,
    /// Fact file to read instead of querying the host.
    pub facts: Option<PathBuf>,
    /// Log file; `None` disables logging.
    pub log_file: Option<PathBuf>,
    /// Default filter directive when `RUST_LOG` is unset.
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            frame_interval: Duration::from_millis(DEFAULT_FRAME_MS),
            reveal_on_start: true,
            facts: None,
            log_file: default_log_path(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

/// `<data dir>/sysident/sysident.log`, if the platform has a data dir.
pub fn default_log_path() -> Option<PathBuf> {
    dirs::data_local_dir().map(|dir| dir.join("sysident").join("sysident.log"))
}

impl AppConfig {
    pub fn with_frame_interval(mut self, interval: Duration) -> Self {
        self.frame_interval = interval;
        self
    }

    pub fn with_reveal_on_start(mut self, reveal: bool) -> Self {
        self.reveal_on_start = reveal;
        self
    }

    pub fn with_facts(mut self, path: impl Into<PathBuf>) -> Self {
        self.facts = Some(path.into());
        self
    }

    pub fn with_log_file(mut self, path: Option<PathBuf>) -> Self {
        self.log_file = path;
        self
    }

    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }

    /// Defaults, then the process environment, then `options`.
    pub fn load(options: &RunOptions) -> Result<Self, SysidentError> {
        Ok(Self::default()
            .apply_env(|name| std::env::var(name).ok())?
            .apply_options(options))
    }

    /// Overlay `SYSIDENT_*` variables read through `lookup`.
    pub fn apply_env<F>(mut self, lookup: F) -> Result<Self, SysidentError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = lookup(ENV_FRAME_MS) {
            let ms = raw
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|ms| *ms > 0)
                .ok_or_else(|| {
                    SysidentError::Config(format!(
                        "{} must be a positive number of milliseconds, got '{}'",
                        ENV_FRAME_MS, raw
                    ))
                })?;
            self.frame_interval = Duration::from_millis(ms);
        }
        if let Some(level) = lookup(ENV_LOG_LEVEL).filter(|level| !level.trim().is_empty()) {
            self.log_level = level.trim().to_string();
        }
        if let Some(path) = lookup(ENV_FACTS).filter(|path| !path.is_empty()) {
            self.facts = Some(PathBuf::from(path));
        }
        Ok(self)
    }

    /// Overlay command-line options.
    pub fn apply_options(mut self, options: &RunOptions) -> Self {
        if options.hide_private {
            self.reveal_on_start = false;
        }
        if let Some(path) = &options.facts {
            self.facts = Some(path.clone());
        }
        if let Some(ms) = options.frame_ms {
            self.frame_interval = Duration::from_millis(ms);
        }
        if let Some(path) = &options.log_file {
            self.log_file = Some(path.clone());
        }
        if options.no_log {
            self.log_file = None;
        }
        self
    }
}
