//! Command-line argument parsing.

use std::path::PathBuf;

/// Options for a browser run. `None` means "not given on the command line".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunOptions {
    pub hide_private: bool,
    pub facts: Option<PathBuf>,
    pub frame_ms: Option<u64>,
    pub log_file: Option<PathBuf>,
    pub no_log: bool,
}

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Show usage
    Help,
    /// Run the browser (default)
    RunTui(RunOptions),
    /// The arguments could not be understood
    Invalid(String),
}

pub const USAGE: &str = "\
Usage: sysident [OPTIONS]

Options:
      --hide             Start with private fields hidden
      --facts <PATH>     Read facts from a JSON file instead of this host
      --frame-ms <MS>    Frame interval in milliseconds (default 16)
      --log-file <PATH>  Write the log to PATH
      --no-log           Do not write a log file
  -h, --help             Print help
  -V, --version          Print version

Keys:
  Down/j/Right/l  next panel       Up/k/Left/h  previous panel
  Tab/s/Space     hide/show private fields
  q/Esc/Ctrl+C    quit             mouse click  select panel";

/// Parse command-line arguments, program name first.
///
/// # Examples
///
/// ```
/// use sysident::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["sysident".to_string(), "--version".to_string()];
/// assert_eq!(parse_args(args.into_iter()), CliCommand::Version);
/// ```
pub fn parse_args<I>(args: I) -> CliCommand
where
    I: Iterator<Item = String>,
{
    let mut options = RunOptions::default();
    let mut args = args.skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--version" | "-V" => return CliCommand::Version,
            "--help" | "-h" => return CliCommand::Help,
            "--hide" => options.hide_private = true,
            "--no-log" => options.no_log = true,
            "--facts" => match args.next() {
                Some(path) => options.facts = Some(PathBuf::from(path)),
                None => return missing_value("--facts"),
            },
            "--log-file" => match args.next() {
                Some(path) => options.log_file = Some(PathBuf::from(path)),
                None => return missing_value("--log-file"),
            },
            "--frame-ms" => match args.next().map(|v| v.parse::<u64>()) {
                Some(Ok(ms)) if ms > 0 => options.frame_ms = Some(ms),
                Some(_) => {
                    return CliCommand::Invalid(
                        "--frame-ms expects a positive number of milliseconds".to_string(),
                    )
                }
                None => return missing_value("--frame-ms"),
            },
            other => return CliCommand::Invalid(format!("unexpected argument '{}'", other)),
        }
    }

    CliCommand::RunTui(options)
}

fn missing_value(flag: &str) -> CliCommand {
    CliCommand::Invalid(format!("{} requires a value", flag))
}
