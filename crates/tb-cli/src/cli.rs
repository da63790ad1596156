use crate::commands::Commands;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "tb")]
#[command(about = "Task board: boards, columns, tasks and drag-and-drop from the shell")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Act on this board for this command only; the current board is kept
    #[arg(long, global = true)]
    pub board: Option<String>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,
}
