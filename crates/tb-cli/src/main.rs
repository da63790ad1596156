//! tb - task board CLI
//!
//! # Examples
//!
//! ```bash
//! # Boards on disk, current one flagged
//! tb board list --pretty
//!
//! # New task in the first column of the current board
//! tb task add "Write release notes" --priority high --deadline 2026-12-01
//!
//! # Drop task onto the empty area of a column
//! tb drag task-1234 col-board-1-done-droppable
//! ```

use tb_cli::{Cli, CliResult, logger, open_session, render, run};
use tb_config::Config;

use std::process::ExitCode;

use chrono::Local;
use clap::Parser;
use log::error;

fn main() -> ExitCode {
    let cli = Cli::parse();
    let pretty = cli.pretty;

    match try_main(cli).and_then(|value| render(&value, pretty)) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{e}");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn try_main(cli: Cli) -> CliResult<serde_json::Value> {
    let config = Config::load()?;
    config.validate()?;

    logger::initialize(
        config.logging.level,
        config.log_file_path()?,
        config.logging.colored,
    )?;
    config.log_summary();

    let mut session = open_session(&config)?;
    run(&mut session, cli, Local::now().date_naive())
}
