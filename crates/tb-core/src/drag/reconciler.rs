use crate::drag::collision::{Collision, CollisionArgs, detect_collisions};
use crate::drag::commit::reconcile;
use crate::drag::geometry::Point;
use crate::drag::subject::DragSubject;
use crate::store::{BoardState, BoardStore};
use crate::CoreResult;

use log::debug;

/// Pointer travel, in pixels, before a press turns into a drag.
pub const DEFAULT_ACTIVATION_DISTANCE: f64 = 3.0;

#[derive(Debug, Clone, PartialEq)]
pub enum DragPhase {
    Idle,
    /// Pointer down on `id`, not yet moved far enough to count as a drag.
    Pressed { id: String, origin: Point },
    Dragging {
        subject: DragSubject,
        /// Current drop region id, if any.
        over: Option<String>,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub enum DragOutcome {
    Committed(BoardState),
    Cancelled,
}

/// Tracks one gesture at a time. The reconciler never touches the board
/// state it is given; a drop yields the next state for the caller to commit.
#[derive(Debug, Clone)]
pub struct DragReconciler {
    phase: DragPhase,
    activation_distance: f64,
}

impl Default for DragReconciler {
    fn default() -> Self {
        Self::new(DEFAULT_ACTIVATION_DISTANCE)
    }
}

impl DragReconciler {
    pub fn new(activation_distance: f64) -> Self {
        Self {
            phase: DragPhase::Idle,
            activation_distance,
        }
    }

    pub fn phase(&self) -> &DragPhase {
        &self.phase
    }

    pub fn subject(&self) -> Option<&DragSubject> {
        match &self.phase {
            DragPhase::Dragging { subject, .. } => Some(subject),
            _ => None,
        }
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, DragPhase::Dragging { .. })
    }

    /// Pointer went down on element `id`.
    pub fn press(&mut self, id: &str, origin: Point) {
        self.phase = DragPhase::Pressed {
            id: id.to_string(),
            origin,
        };
    }

    /// Pointer moved. A press that has travelled beyond the activation
    /// distance becomes a drag; returns the subject once dragging.
    pub fn pointer_moved(
        &mut self,
        state: &BoardState,
        board_id: &str,
        point: Point,
    ) -> Option<&DragSubject> {
        if let DragPhase::Pressed { id, origin } = &self.phase
            && origin.distance(&point) > self.activation_distance
        {
            let id = id.clone();
            self.start(state, board_id, &id);
        }
        self.subject()
    }

    /// Begin dragging `id` right away. Ids that are neither a column nor a
    /// task of the board are ignored and leave the reconciler idle.
    pub fn start(&mut self, state: &BoardState, board_id: &str, id: &str) -> Option<&DragSubject> {
        self.phase = match DragSubject::resolve(state, board_id, id) {
            Some(subject) => {
                debug!("Drag started: {subject:?}");
                DragPhase::Dragging {
                    subject,
                    over: None,
                }
            }
            None => {
                debug!("Drag ignored: {id} is not on board {board_id}");
                DragPhase::Idle
            }
        };
        self.subject()
    }

    /// Run collision detection for the current pointer and element position
    /// and remember the best target.
    pub fn hover(
        &mut self,
        state: &BoardState,
        board_id: &str,
        args: &CollisionArgs<'_>,
    ) -> Vec<Collision> {
        let DragPhase::Dragging { subject, over } = &mut self.phase else {
            return Vec::new();
        };
        let Some(board) = state.board(board_id) else {
            return Vec::new();
        };

        let collisions = detect_collisions(subject, board, args);
        *over = collisions.first().map(|c| c.id.clone());
        collisions
    }

    /// Set the current target directly, bypassing collision detection.
    pub fn set_over(&mut self, over_id: Option<&str>) {
        if let DragPhase::Dragging { over, .. } = &mut self.phase {
            *over = over_id.map(str::to_string);
        }
    }

    /// Pointer released: reconcile against the last target and return to
    /// idle. A press that never became a drag is a click and cancels.
    pub fn end(
        &mut self,
        store: &BoardStore,
        state: &BoardState,
        board_id: &str,
    ) -> CoreResult<DragOutcome> {
        let phase = std::mem::replace(&mut self.phase, DragPhase::Idle);
        let DragPhase::Dragging { subject, over } = phase else {
            return Ok(DragOutcome::Cancelled);
        };

        let outcome = reconcile(store, state, board_id, &subject, over.as_deref())?;
        if outcome == DragOutcome::Cancelled {
            debug!("Drag of {} cancelled: no usable target", subject.id());
        }
        Ok(outcome)
    }

    /// Abort the gesture; nothing is committed.
    pub fn cancel(&mut self) {
        if self.phase != DragPhase::Idle {
            debug!("Drag cancelled");
        }
        self.phase = DragPhase::Idle;
    }
}
