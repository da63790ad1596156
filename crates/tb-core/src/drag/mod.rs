//! Drag Reconciler: turns a drag gesture into a committed board state.
//!
//! A gesture goes `idle -> pressed -> dragging(column | task)` and ends either
//! committed or cancelled. Nothing is written to the board until the gesture
//! ends; cancelling leaves the snapshot the gesture started from.

pub(crate) mod collision;
pub(crate) mod commit;
pub(crate) mod geometry;
pub(crate) mod reconciler;
pub(crate) mod subject;
pub(crate) mod target;

pub use collision::{Collision, CollisionArgs, Droppable, detect_collisions};
pub use geometry::{Point, Rect};
pub use reconciler::{DEFAULT_ACTIVATION_DISTANCE, DragOutcome, DragPhase, DragReconciler};
pub use subject::DragSubject;
pub use target::DropTarget;
