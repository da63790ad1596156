mod execute;
mod parse;

use crate::{Cli, CliResult, run};

use chrono::NaiveDate;
use clap::Parser;
use serde_json::Value;
use tb_core::{BoardSession, DragReconciler, Limits};
use tb_store::MemoryStore;

pub(crate) fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, 15).unwrap()
}

pub(crate) fn session() -> BoardSession<MemoryStore> {
    BoardSession::open(MemoryStore::new(), Limits::default(), DragReconciler::default())
}

/// Parse `args` as a `tb` command line and run it.
pub(crate) fn tb(session: &mut BoardSession<MemoryStore>, args: &[&str]) -> CliResult<Value> {
    let cli = Cli::try_parse_from(std::iter::once("tb").chain(args.iter().copied())).unwrap();
    run(session, cli, today())
}
