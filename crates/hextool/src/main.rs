use std::{path::PathBuf, process::ExitCode};

use clap::Parser;

use hexbin::log::{self, LogType};

pub mod cli;
pub mod commands;
pub mod config;
pub mod consts;

fn main() -> ExitCode {
    let args = cli::Args::parse();

    let config_path = args
        .config
        .clone()
        .unwrap_or_else(|| PathBuf::from(consts::CONFIGFILE_PATH));
    let config = match config::load_config(&config_path) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{:#}", e);
            return ExitCode::FAILURE;
        }
    };

    let level = args.log_level.as_deref().unwrap_or(config.log_level());
    log::setup_logging(level, LogType::Tool);
    log::debug!("hextool {} started", consts::VERSION);

    let mut stdout = std::io::stdout().lock();
    match commands::execute(&args.command, &config, &mut stdout) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::debug!("Command failed: {:?}", args.command);
            eprintln!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}
