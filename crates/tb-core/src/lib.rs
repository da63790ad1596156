//! Board state engine for a personal or team task board.
//!
//! Boards hold ordered columns and users; tasks live in a flat list and
//! point at their board and column. All rules (unique names, one done
//! column, contiguous positions, completion derivation, column deletion
//! with migration, drag reconciliation) live here, free of any UI or I/O.

pub mod completion;
pub mod drag;
pub mod error;
pub mod guard;
pub mod limits;
pub mod models;
pub mod persistence;
pub mod seed;
pub mod session;
pub mod store;

#[cfg(test)]
mod tests;

pub use completion::{completed, derive_completed};
pub use drag::{
    Collision, CollisionArgs, DragOutcome, DragPhase, DragReconciler, DragSubject, DropTarget,
    Droppable, Point, Rect, detect_collisions,
};
pub use error::{CoreError, CoreResult};
pub use guard::{GuardReason, Guarded, deadline_allowed};
pub use limits::Limits;
pub use models::board::{Board, BoardPatch};
pub use models::column::{Column, ColumnPatch};
pub use models::new_id;
pub use models::priority::Priority;
pub use models::subtask::{Subtask, SubtaskProgress};
pub use models::task::{NewTask, Task, TaskPatch};
pub use models::user::User;
pub use persistence::KeyValueStore;
pub use session::BoardSession;
pub use store::{BoardState, BoardStore, TaskMove};
