//! Application-level errors.
//!
//! These cover start-up and terminal plumbing only. Nothing in the frame
//! loop itself produces one of these except terminal I/O.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SysidentError {
    /// The fact fixture file could not be read.
    #[error("failed to read fact file '{}': {source}", path.display())]
    FixtureIo {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The fact fixture file was read but is not valid.
    #[error("invalid fact file '{}': {detail}", path.display())]
    FixtureFormat { path: PathBuf, detail: String },

    /// A configuration value from the environment or command line is invalid.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// The tracing subscriber could not be installed.
    #[error("failed to initialise logging: {0}")]
    Logging(String),

    /// Terminal setup, drawing or teardown failed.
    #[error("terminal error: {0}")]
    Terminal(#[from] io::Error),
}

impl SysidentError {
    /// Hint printed under the error on exit.
    pub fn recovery_hint(&self) -> &'static str {
        match self {
            SysidentError::FixtureIo { .. } => "Check the path passed to --facts.",
            SysidentError::FixtureFormat { .. } => {
                "The fact file must be a JSON object keyed by fact name."
            }
            SysidentError::Config(_) => "Run with --help to see accepted options.",
            SysidentError::Logging(_) => "Use --no-log or --log-file to pick another location.",
            SysidentError::Terminal(_) => "Make sure sysident runs in an interactive terminal.",
        }
    }
}
