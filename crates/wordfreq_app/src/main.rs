mod app;
mod chart;
mod config;

use std::io::{self, Write};
use std::path::Path;
use std::process::ExitCode;

use log::LevelFilter;
use wordfreq_logging::{wf_error, LogDestination};

const LOG_FILENAME: &str = "wordfreq.log";

fn main() -> ExitCode {
    wordfreq_logging::initialize(LogDestination::File, LevelFilter::Info, Path::new(LOG_FILENAME));

    let config = match config::load(Path::new(config::CONFIG_FILENAME)) {
        Ok(config) => config,
        Err(err) => {
            wf_error!("Configuration rejected: {:#}", err);
            println!("Error loading configuration: {err:#}");
            return ExitCode::FAILURE;
        }
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let succeeded = match app::run(&config, &mut out) {
        Ok(outcome) => outcome.is_success(),
        Err(err) => {
            wf_error!("Failed to write output: {}", err);
            false
        }
    };
    let _ = out.flush();

    if succeeded {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
