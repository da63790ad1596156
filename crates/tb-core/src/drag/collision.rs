//! Collision detection: which drop region the dragged element is over.
//!
//! Columns and tasks use different policies. A dragged column first looks at
//! which column region contains the pointer, so it never lands on a task;
//! only when the pointer is outside every column does it fall back to the
//! nearest corners. A dragged task uses plain rectangle intersection, which
//! suits the narrow gaps between task cards.

use crate::drag::geometry::{Point, Rect};
use crate::drag::subject::DragSubject;
use crate::models::board::Board;

use serde::{Deserialize, Serialize};

/// A registered drop region.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Droppable {
    pub id: String,
    pub rect: Rect,
}

impl Droppable {
    pub fn new<S: Into<String>>(id: S, rect: Rect) -> Self {
        Self {
            id: id.into(),
            rect,
        }
    }
}

/// A candidate target. `value` is a distance for the corner and pointer
/// strategies (lower is closer) and an overlap ratio for rectangle
/// intersection (higher is better); every list is sorted best first.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Collision {
    pub id: String,
    pub value: f64,
}

#[derive(Debug, Clone, Copy)]
pub struct CollisionArgs<'a> {
    /// Current rectangle of the dragged element.
    pub collision_rect: Rect,
    pub pointer: Option<Point>,
    pub droppables: &'a [Droppable],
}

/// Mean distance from each corner of `from` to the matching corner of `to`.
fn mean_corner_distance(from: &[Point; 4], to: &[Point; 4]) -> f64 {
    from.iter().zip(to.iter()).map(|(a, b)| a.distance(b)).sum::<f64>() / 4.0
}

fn sort_ascending(collisions: &mut [Collision]) {
    collisions.sort_by(|a, b| a.value.total_cmp(&b.value));
}

/// Regions containing the pointer, closest first.
pub fn pointer_within(args: &CollisionArgs<'_>) -> Vec<Collision> {
    let Some(pointer) = args.pointer else {
        return Vec::new();
    };

    let mut collisions: Vec<Collision> = args
        .droppables
        .iter()
        .filter(|d| d.rect.contains(&pointer))
        .map(|d| Collision {
            id: d.id.clone(),
            value: mean_corner_distance(&[pointer; 4], &d.rect.corners()),
        })
        .collect();
    sort_ascending(&mut collisions);
    collisions
}

/// Every region, ranked by how close its corners are to the dragged
/// element's corners.
pub fn closest_corners(args: &CollisionArgs<'_>) -> Vec<Collision> {
    let corners = args.collision_rect.corners();
    let mut collisions: Vec<Collision> = args
        .droppables
        .iter()
        .map(|d| Collision {
            id: d.id.clone(),
            value: mean_corner_distance(&corners, &d.rect.corners()),
        })
        .collect();
    sort_ascending(&mut collisions);
    collisions
}

/// Regions overlapping the dragged element, largest overlap ratio first.
pub fn rect_intersection(args: &CollisionArgs<'_>) -> Vec<Collision> {
    let entry = args.collision_rect;
    let mut collisions: Vec<Collision> = args
        .droppables
        .iter()
        .filter_map(|d| {
            let overlap = d.rect.intersection_area(&entry);
            if overlap <= 0.0 {
                return None;
            }
            let ratio = overlap / (d.rect.area() + entry.area() - overlap);
            Some(Collision {
                id: d.id.clone(),
                value: ratio,
            })
        })
        .collect();
    collisions.sort_by(|a, b| b.value.total_cmp(&a.value));
    collisions
}

/// Two-tier policy for the board's drag-and-drop.
pub fn detect_collisions(
    subject: &DragSubject,
    board: &Board,
    args: &CollisionArgs<'_>,
) -> Vec<Collision> {
    match subject {
        DragSubject::Column { .. } => {
            let column_hit = pointer_within(args)
                .into_iter()
                .find(|c| board.column(&c.id).is_some());
            match column_hit {
                Some(hit) => vec![hit],
                None => closest_corners(args),
            }
        }
        DragSubject::Task { .. } => rect_intersection(args),
    }
}
