//! Command-line interface.
//!
//! Flags are parsed before the terminal is touched, so `--version`, `--help`
//! and argument errors print to a normal screen:
//!
//! ```ignore
//! use sysident::cli::{parse_args, run_cli_command, CliCommand};
//!
//! let command = parse_args(std::env::args());
//! match run_cli_command(&command) {
//!     Some(code) => std::process::exit(code),
//!     None => { /* start the browser */ }
//! }
//! ```

pub mod args;
pub mod version;

pub use args::{parse_args, CliCommand, RunOptions, USAGE};
pub use version::{version_line, VERSION};

/// Handle commands that finish without the browser.
///
/// Returns the process exit code, or `None` for [`CliCommand::RunTui`].
pub fn run_cli_command(command: &CliCommand) -> Option<i32> {
    match command {
        CliCommand::Version => {
            println!("{}", version_line());
            Some(0)
        }
        CliCommand::Help => {
            println!("{}\n\n{}", version_line(), USAGE);
            Some(0)
        }
        CliCommand::Invalid(message) => {
            eprintln!("error: {}\n\n{}", message, USAGE);
            Some(2)
        }
        CliCommand::RunTui(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_tui_returns_none() {
        assert!(run_cli_command(&CliCommand::RunTui(RunOptions::default())).is_none());
    }

    #[test]
    fn test_invalid_exits_with_usage_code() {
        assert_eq!(run_cli_command(&CliCommand::Invalid("bad".into())), Some(2));
    }
}
