//! Sample content written on first run.

use crate::models::board::Board;
use crate::models::priority::Priority;
use crate::models::subtask::Subtask;
use crate::models::task::Task;
use crate::models::user::User;

use std::collections::BTreeSet;

pub const SEED_BOARD_ID: &str = "board-getting-started";
const SEED_BOARD_NAME: &str = "Getting Started";
const SEED_USER_EMAIL: &str = "you@example.com";

pub fn seed_boards() -> Vec<Board> {
    let mut board = Board::new(SEED_BOARD_ID.to_string(), SEED_BOARD_NAME.to_string());
    board.users.push(User::new(
        "user-seed-you".to_string(),
        SEED_USER_EMAIL.to_string(),
    ));
    vec![board]
}

pub fn seed_tasks() -> Vec<Task> {
    let columns = Board::default_columns(SEED_BOARD_ID);
    let [todo, progress, done] = [&columns[0], &columns[1], &columns[2]];

    let task = |id: &str, column: &str, position: u32, title: &str, completed: bool| Task {
        id: id.to_string(),
        board_id: SEED_BOARD_ID.to_string(),
        status: column.to_string(),
        position,
        title: title.to_string(),
        description: String::new(),
        priority: Priority::Medium,
        subtasks: Vec::new(),
        assigned_users: BTreeSet::new(),
        deadline: None,
        completed,
    };

    let mut explore = task("task-seed-explore", &todo.id, 0, "Explore the board", false);
    explore.description = "Columns hold tasks; drag a card to move it.".to_string();
    explore.subtasks = vec![
        Subtask::new("sub-seed-open".to_string(), "Open a task".to_string()),
        Subtask::new("sub-seed-check".to_string(), "Check off a subtask".to_string()),
    ];

    let mut assign = task("task-seed-assign", &todo.id, 1, "Assign yourself", false);
    assign.priority = Priority::Low;
    assign.assigned_users.insert(SEED_USER_EMAIL.to_string());

    let mut column = task("task-seed-column", &progress.id, 0, "Add a column", false);
    column.priority = Priority::High;

    vec![
        explore,
        assign,
        column,
        task("task-seed-board", &done.id, 0, "Create your first board", true),
    ]
}
