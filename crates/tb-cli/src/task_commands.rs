use chrono::NaiveDate;
use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum TaskCommands {
    /// List tasks in position order
    List {
        /// Only tasks in this column
        #[arg(long)]
        column: Option<String>,

        /// Only tasks assigned to this email
        #[arg(long)]
        assignee: Option<String>,
    },

    /// Create a task
    Add {
        title: String,

        /// Column id (default: first column)
        #[arg(long)]
        column: Option<String>,

        #[arg(long)]
        description: Option<String>,

        /// highest, high, medium, low or lowest (default: medium)
        #[arg(long)]
        priority: Option<String>,

        /// Due date, YYYY-MM-DD
        #[arg(long)]
        deadline: Option<NaiveDate>,

        /// Assignee email (repeatable)
        #[arg(long = "assign")]
        assignees: Vec<String>,

        /// Subtask title (repeatable)
        #[arg(long = "subtask")]
        subtasks: Vec<String>,
    },

    /// Update a task
    Update {
        id: String,

        #[arg(long)]
        title: Option<String>,

        #[arg(long)]
        description: Option<String>,

        /// Move to this column id
        #[arg(long)]
        column: Option<String>,

        #[arg(long)]
        priority: Option<String>,

        #[arg(long, conflicts_with = "clear_deadline")]
        deadline: Option<NaiveDate>,

        #[arg(long)]
        clear_deadline: bool,

        #[arg(long)]
        completed: Option<bool>,
    },

    /// Delete a task
    Delete { id: String },

    /// Put a task at the top of its column
    Front { id: String },

    /// Flip a subtask between open and done
    ToggleSubtask { task_id: String, subtask_id: String },
}
