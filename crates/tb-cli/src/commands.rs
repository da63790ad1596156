use crate::{
    board_commands::BoardCommands, column_commands::ColumnCommands,
    task_commands::TaskCommands, user_commands::UserCommands,
};

use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Board operations
    Board {
        #[command(subcommand)]
        action: BoardCommands,
    },

    /// Column operations on the current board
    Column {
        #[command(subcommand)]
        action: ColumnCommands,
    },

    /// Task operations on the current board
    Task {
        #[command(subcommand)]
        action: TaskCommands,
    },

    /// Board user operations
    User {
        #[command(subcommand)]
        action: UserCommands,
    },

    /// Drop a column or task onto a drop region, as a pointer drag would
    Drag {
        /// Column or task id being dragged
        active: String,

        /// Column id, `<columnId>-droppable` or task id to drop on; omit to
        /// cancel
        over: Option<String>,
    },
}
