//! Command-line arguments for the `vigil` binary

use std::path::PathBuf;

use crate::error::{Result, RunnerError};
use crate::export::DEFAULT_DELIMITER;

pub const USAGE: &str = r#"Vigil - scripted order book quote-manipulation simulator

USAGE:
    vigil [OPTIONS]

OPTIONS:
    --config <PATH>       Load scenario configuration from JSON file
    --output <PATH>       Write the exported log to a file instead of stdout
    --format <FORMAT>     Export format: csv (event log) or json (full run) [default: csv]
    --delimiter <CHAR>    CSV field delimiter [default: ,]
    --help                Print this help message

ENVIRONMENT VARIABLES:
    RUST_LOG              Log level filter (default: info)

EXAMPLES:
    # Run the default scenario
    vigil

    # Run with config file, semicolon-separated output
    vigil --config scenario.json --delimiter ';' --output events.csv
"#;

/// Export format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Csv,
    Json,
}

/// Parsed options for a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliOptions {
    pub config_path: Option<PathBuf>,
    pub output_path: Option<PathBuf>,
    pub format: OutputFormat,
    pub delimiter: u8,
}

impl Default for CliOptions {
    fn default() -> Self {
        Self {
            config_path: None,
            output_path: None,
            format: OutputFormat::Csv,
            delimiter: DEFAULT_DELIMITER,
        }
    }
}

/// What the binary should do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliCommand {
    Help,
    Run(CliOptions),
}

/// Parse arguments (without the program name)
pub fn parse_args<I>(args: I) -> Result<CliCommand>
where
    I: IntoIterator<Item = String>,
{
    let mut options = CliOptions::default();
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--help" | "-h" => return Ok(CliCommand::Help),
            "--config" | "-c" => {
                options.config_path = Some(PathBuf::from(value_for(&arg, args.next())?));
            }
            "--output" | "-o" => {
                options.output_path = Some(PathBuf::from(value_for(&arg, args.next())?));
            }
            "--format" | "-f" => {
                options.format = match value_for(&arg, args.next())?.as_str() {
                    "csv" => OutputFormat::Csv,
                    "json" => OutputFormat::Json,
                    other => {
                        return Err(RunnerError::Usage(format!("Unknown format: {other}")));
                    }
                };
            }
            "--delimiter" | "-d" => {
                options.delimiter = parse_delimiter(&value_for(&arg, args.next())?)?;
            }
            other => {
                return Err(RunnerError::Usage(format!("Unknown argument: {other}")));
            }
        }
    }

    Ok(CliCommand::Run(options))
}

fn value_for(flag: &str, value: Option<String>) -> Result<String> {
    value.ok_or_else(|| RunnerError::Usage(format!("{flag} requires a value")))
}

fn parse_delimiter(value: &str) -> Result<u8> {
    match value {
        "\\t" | "tab" => Ok(b'\t'),
        _ => match value.as_bytes() {
            [byte] if byte.is_ascii() => Ok(*byte),
            _ => Err(RunnerError::Usage(format!(
                "Delimiter must be a single ASCII character, got {value:?}"
            ))),
        },
    }
}
