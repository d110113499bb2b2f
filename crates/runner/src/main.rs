use std::fs::File;
use std::io::{self, BufWriter, Write};

use vigil_runner::{
    CliCommand, CliOptions, DISCLAIMER, ExportError, OutputFormat, RunResult, RunnerError, USAGE,
    parse_args, run_result_to_json, simulate, summary, write_event_log,
};
use vigil_scenario::ScenarioConfig;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let command = match parse_args(std::env::args().skip(1)) {
        Ok(command) => command,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!("{}", USAGE);
            std::process::exit(1);
        }
    };

    let options = match command {
        CliCommand::Help => {
            eprintln!("{}", USAGE);
            return;
        }
        CliCommand::Run(options) => options,
    };

    if let Err(e) = run(&options) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

fn run(options: &CliOptions) -> Result<(), RunnerError> {
    let config = match &options.config_path {
        Some(path) => {
            log::info!("Loading configuration from: {}", path.display());
            ScenarioConfig::from_file(path)?
        }
        None => {
            log::info!("Using default configuration");
            ScenarioConfig::default()
        }
    };

    let result = simulate(&config)?;

    match &options.output_path {
        Some(path) => {
            let file = File::create(path).map_err(ExportError::from)?;
            write_output(&result, options, BufWriter::new(file))?;
            log::info!("Wrote {} events to {}", result.events.len(), path.display());
        }
        None => write_output(&result, options, io::stdout().lock())?,
    }

    for line in summary(&result).lines() {
        log::info!("{}", line);
    }
    log::info!("{}", DISCLAIMER);
    Ok(())
}

fn write_output<W: Write>(
    result: &RunResult,
    options: &CliOptions,
    mut writer: W,
) -> Result<(), RunnerError> {
    match options.format {
        OutputFormat::Csv => write_event_log(&result.events, writer, options.delimiter)?,
        OutputFormat::Json => {
            let json = run_result_to_json(result)?;
            writeln!(writer, "{}", json).map_err(ExportError::from)?;
            writer.flush().map_err(ExportError::from)?;
        }
    }
    Ok(())
}
