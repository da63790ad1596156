//! Dispatch of parsed commands onto a board session. Every command yields a
//! JSON value for standard output.

use crate::{
    BoardCommands, CliError, CliResult, ColumnCommands, Commands, TaskCommands, UserCommands,
};

use std::str::FromStr;

use chrono::NaiveDate;
use log::info;
use serde::Serialize;
use serde_json::{Value, json};
use tb_core::{
    BoardPatch, BoardSession, ColumnPatch, Guarded, KeyValueStore, NewTask, Priority,
    SubtaskProgress, Task, TaskMove, TaskPatch,
};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TaskView<'a> {
    #[serde(flatten)]
    task: &'a Task,
    overdue: bool,
    subtask_progress: SubtaskProgress,
}

impl<'a> TaskView<'a> {
    fn new(task: &'a Task, today: NaiveDate) -> Self {
        Self {
            task,
            overdue: task.is_overdue(today),
            subtask_progress: task.subtask_progress(),
        }
    }
}

/// Run one command against `session`.
pub fn execute<S: KeyValueStore>(
    session: &mut BoardSession<S>,
    command: Commands,
    today: NaiveDate,
) -> CliResult<Value> {
    match command {
        Commands::Board { action } => board(session, action),
        Commands::Column { action } => column(session, action),
        Commands::Task { action } => task(session, action, today),
        Commands::User { action } => user(session, action),
        Commands::Drag { active, over } => drag(session, &active, over.as_deref()),
    }
}

fn board<S: KeyValueStore>(
    session: &mut BoardSession<S>,
    action: BoardCommands,
) -> CliResult<Value> {
    match action {
        BoardCommands::List => {
            let active = session.active_board_id();
            let boards: Vec<Value> = session
                .snapshot()
                .boards
                .iter()
                .map(|b| {
                    json!({
                        "id": b.id,
                        "name": b.name,
                        "active": Some(b.id.as_str()) == active,
                        "columns": b.columns.len(),
                        "doneColumn": b.done_column().map(|c| c.id.as_str()),
                        "users": b.users.len(),
                    })
                })
                .collect();
            Ok(Value::Array(boards))
        }
        BoardCommands::Add { name } => {
            let id = session.add_board(&name)?;
            Ok(json!({ "id": id }))
        }
        BoardCommands::Rename { id, name } => {
            session.update_board(&id, &BoardPatch { name: Some(name) })?;
            Ok(json!({ "id": id }))
        }
        BoardCommands::Delete { id } => {
            session.delete_board(&id)?;
            Ok(json!({ "deleted": id, "active": session.active_board_id() }))
        }
        BoardCommands::Select { id } => {
            session.select_board(&id)?;
            Ok(json!({ "active": id }))
        }
    }
}

fn column<S: KeyValueStore>(
    session: &mut BoardSession<S>,
    action: ColumnCommands,
) -> CliResult<Value> {
    match action {
        ColumnCommands::List => {
            let tasks = session.tasks();
            let columns: Vec<Value> = session
                .columns()
                .iter()
                .map(|c| {
                    json!({
                        "id": c.id,
                        "name": c.name,
                        "isDone": c.is_done,
                        "droppableId": c.droppable_id(),
                        "tasks": tasks.iter().filter(|t| t.status == c.id).count(),
                    })
                })
                .collect();
            Ok(Value::Array(columns))
        }
        ColumnCommands::Add { name } => {
            let id = session.add_column(&name)?;
            Ok(json!({ "id": id }))
        }
        ColumnCommands::Rename { id, name } => {
            session.update_column(&id, &ColumnPatch { name: Some(name) })?;
            Ok(json!({ "id": id }))
        }
        ColumnCommands::Delete { id, target } => {
            accepted(session.delete_column(&id, target.as_deref())?)?;
            Ok(json!({ "deleted": id }))
        }
        ColumnCommands::Move { id, to } => {
            let mut columns = session.columns().to_vec();
            let from = columns
                .iter()
                .position(|c| c.id == id)
                .ok_or_else(|| CliError::invalid_argument(format!("unknown column {id}")))?;
            let to = to.min(columns.len().saturating_sub(1));
            let moved = columns.remove(from);
            columns.insert(to, moved);
            session.reorder_columns(columns)?;
            info!("Column {id} moved to index {to}");
            Ok(json!({ "id": id, "index": to }))
        }
    }
}

fn task<S: KeyValueStore>(
    session: &mut BoardSession<S>,
    action: TaskCommands,
    today: NaiveDate,
) -> CliResult<Value> {
    match action {
        TaskCommands::List { column, assignee } => {
            let tasks = session.tasks();
            let views: Vec<TaskView<'_>> = tasks
                .iter()
                .filter(|t| column.as_deref().is_none_or(|c| t.status == c))
                .filter(|t| assignee.as_deref().is_none_or(|e| t.is_assigned(e)))
                .map(|t| TaskView::new(t, today))
                .collect();
            Ok(serde_json::to_value(views)?)
        }
        TaskCommands::Add {
            title,
            column,
            description,
            priority,
            deadline,
            assignees,
            subtasks,
        } => {
            let mut new = NewTask::new(title);
            if let Some(column) = column {
                new = new.in_column(column);
            }
            if let Some(description) = description {
                new.description = description;
            }
            if let Some(priority) = priority {
                new = new.with_priority(Priority::from_str(&priority)?);
            }
            if let Some(deadline) = deadline {
                new = new.with_deadline(deadline);
            }
            for email in assignees {
                new = new.assigned_to(email);
            }
            for subtask in subtasks {
                new = new.with_subtask(subtask);
            }
            let id = accepted(session.add_task(new, today)?)?;
            Ok(json!({ "id": id }))
        }
        TaskCommands::Update {
            id,
            title,
            description,
            column,
            priority,
            deadline,
            clear_deadline,
            completed,
        } => {
            let patch = TaskPatch {
                title,
                description,
                status: column,
                priority: priority.as_deref().map(Priority::from_str).transpose()?,
                deadline: if clear_deadline {
                    Some(None)
                } else {
                    deadline.map(Some)
                },
                completed,
                ..TaskPatch::default()
            };
            accepted(session.update_task(&id, patch, today)?)?;
            Ok(json!({ "id": id }))
        }
        TaskCommands::Delete { id } => {
            session.delete_task(&id)?;
            Ok(json!({ "deleted": id }))
        }
        TaskCommands::Front { id } => {
            session.move_task(TaskMove::ToFront(id.clone()))?;
            Ok(json!({ "id": id, "position": 0 }))
        }
        TaskCommands::ToggleSubtask {
            task_id,
            subtask_id,
        } => {
            session.toggle_subtask(&task_id, &subtask_id)?;
            Ok(json!({ "id": task_id, "subtask": subtask_id }))
        }
    }
}

fn user<S: KeyValueStore>(
    session: &mut BoardSession<S>,
    action: UserCommands,
) -> CliResult<Value> {
    match action {
        UserCommands::List => {
            let users: Vec<Value> = session
                .active_board()
                .map(|b| b.users.as_slice())
                .unwrap_or(&[])
                .iter()
                .map(|u| {
                    json!({
                        "email": u.email,
                        "assignedTasks": session.assigned_task_count(&u.email),
                    })
                })
                .collect();
            Ok(Value::Array(users))
        }
        UserCommands::Add { email } => {
            session.add_user(&email)?;
            Ok(json!({ "email": email }))
        }
        UserCommands::Remove { email } => {
            let unassigned = session.assigned_task_count(&email);
            session.remove_user(&email)?;
            Ok(json!({ "removed": email, "unassignedTasks": unassigned }))
        }
    }
}

/// A drag without pointer input: start on `active`, settle on `over`, drop.
fn drag<S: KeyValueStore>(
    session: &mut BoardSession<S>,
    active: &str,
    over: Option<&str>,
) -> CliResult<Value> {
    let Some(subject) = session.begin_drag(active) else {
        return Err(CliError::invalid_argument(format!(
            "{active} is neither a column nor a task of the current board"
        )));
    };
    session.drag_over(over);
    let committed = session.end_drag()?;
    Ok(json!({ "subject": subject, "over": over, "committed": committed }))
}

#[track_caller]
fn accepted<T>(outcome: Guarded<T>) -> CliResult<T> {
    match outcome {
        Guarded::Accepted(value) => Ok(value),
        Guarded::Rejected(reason) => Err(CliError::rejected(reason)),
    }
}
