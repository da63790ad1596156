use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum ColumnCommands {
    /// List columns in board order
    List,

    /// Append a column
    Add { name: String },

    /// Rename a column
    Rename { id: String, name: String },

    /// Delete a column, moving its tasks to the end of another column
    Delete {
        id: String,

        /// Column receiving the deleted column's tasks
        #[arg(long)]
        target: Option<String>,
    },

    /// Move a column to a zero-based index
    Move {
        id: String,

        #[arg(long)]
        to: usize,
    },
}
