use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum BoardCommands {
    /// List all boards
    List,

    /// Create a board with To Do, Progress and Done columns
    Add { name: String },

    /// Rename a board
    Rename { id: String, name: String },

    /// Delete a board and all of its tasks
    Delete { id: String },

    /// Make a board the current one
    Select { id: String },
}
