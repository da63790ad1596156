use crate::{Cli, ColumnCommands, Commands, TaskCommands};

use chrono::NaiveDate;
use clap::Parser;
use googletest::prelude::*;

#[test]
fn given_task_add_with_repeated_flags_when_parsed_then_all_collected() {
    // When
    let cli = Cli::try_parse_from([
        "tb", "task", "add", "Ship", "--assign", "a@x.io", "--assign", "b@x.io", "--subtask",
        "one", "--deadline", "2026-04-01",
    ])
    .unwrap();

    // Then
    let Commands::Task {
        action:
            TaskCommands::Add {
                title,
                assignees,
                deadline,
                ..
            },
    } = cli.command
    else {
        panic!("expected task add");
    };
    assert_that!(title, eq("Ship"));
    assert_eq!(assignees, vec!["a@x.io".to_string(), "b@x.io".to_string()]);
    assert_eq!(deadline, NaiveDate::from_ymd_opt(2026, 4, 1));
}

#[test]
fn given_malformed_deadline_when_parsed_then_error() {
    let result = Cli::try_parse_from(["tb", "task", "add", "Ship", "--deadline", "tomorrow"]);

    assert_that!(result.is_err(), eq(true));
}

#[test]
fn given_deadline_and_clear_deadline_when_parsed_then_conflict() {
    let result = Cli::try_parse_from([
        "tb",
        "task",
        "update",
        "t1",
        "--deadline",
        "2026-04-01",
        "--clear-deadline",
    ]);

    assert_that!(result.is_err(), eq(true));
}

#[test]
fn given_global_flags_after_subcommand_when_parsed_then_applied() {
    let cli = Cli::try_parse_from([
        "tb", "column", "delete", "c1", "--target", "c2", "--pretty", "--board", "b1",
    ])
    .unwrap();

    assert_that!(cli.pretty, eq(true));
    assert_that!(cli.board.as_deref(), some(eq("b1")));
    assert!(matches!(
        cli.command,
        Commands::Column {
            action: ColumnCommands::Delete { .. }
        }
    ));
}

#[test]
fn given_drag_without_target_when_parsed_then_over_is_none() {
    let cli = Cli::try_parse_from(["tb", "drag", "task-1"]).unwrap();

    let Commands::Drag { active, over } = cli.command else {
        panic!("expected drag");
    };
    assert_that!(active, eq("task-1"));
    assert_that!(over, none());
}
