//! Board Store: the rule engine behind every board mutation.
//!
//! `BoardStore` holds no board data. Each operation reads a `BoardState`
//! snapshot plus an explicit board id and returns a brand new snapshot, so a
//! renderer holding the previous one never observes a half-applied change.

pub(crate) mod board_state;
pub(crate) mod boards;
pub(crate) mod columns;
pub(crate) mod renormalize;
pub(crate) mod tasks;
pub(crate) mod users;

pub use board_state::BoardState;
pub use tasks::TaskMove;

use crate::Limits;

#[derive(Debug, Clone, Copy, Default)]
pub struct BoardStore {
    limits: Limits,
}

impl BoardStore {
    pub fn new(limits: Limits) -> Self {
        Self { limits }
    }

    pub fn limits(&self) -> &Limits {
        &self.limits
    }
}
