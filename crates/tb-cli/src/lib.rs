//! tb-cli library
//!
//! Command definitions and dispatch for the `tb` binary, exported so tests
//! can drive them against an in-memory store.

pub(crate) mod board_commands;
pub(crate) mod cli;
pub(crate) mod column_commands;
pub(crate) mod commands;
pub(crate) mod error;
pub(crate) mod execute;
pub mod logger;
pub(crate) mod task_commands;
pub(crate) mod user_commands;

#[cfg(test)]
mod tests;

pub use board_commands::BoardCommands;
pub use cli::Cli;
pub use column_commands::ColumnCommands;
pub use commands::Commands;
pub use error::{CliError, CliResult};
pub use execute::execute;
pub use task_commands::TaskCommands;
pub use user_commands::UserCommands;

use chrono::NaiveDate;
use log::info;
use serde_json::Value;
use tb_config::Config;
use tb_core::{BoardSession, KeyValueStore};
use tb_store::JsonFileStore;

/// Open the board session backed by the configured data directory.
pub fn open_session(config: &Config) -> CliResult<BoardSession<JsonFileStore>> {
    let store = JsonFileStore::open(config.storage_path()?)?;
    info!("Board data directory: {}", store.dir().display());
    Ok(BoardSession::open(
        store,
        config.validation.limits(),
        config.drag.reconciler(),
    ))
}

/// Focus the global `--board` for this invocation, then run the command.
pub fn run<S: KeyValueStore>(
    session: &mut BoardSession<S>,
    cli: Cli,
    today: NaiveDate,
) -> CliResult<Value> {
    if let Some(board) = &cli.board {
        session.focus_board(board)?;
    }
    execute(session, cli.command, today)
}

pub fn render(value: &Value, pretty: bool) -> CliResult<String> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(json)
}
