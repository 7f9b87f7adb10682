//! Grid traversal that tracks the exact continuous position.
//!
//! Each step recomputes the displacement to the next grid lines from the
//! current position instead of accumulating per-axis distances. This costs a
//! division per step but yields the exact crossing point every time.
//!
//! This walk measures y upward: a positive y direction moves toward lower
//! cell indices. [`crate::Strategy::Exact`] converts grid-frame rays before
//! calling [`traverse`].

use glam::{DVec2, IVec2};
use tilecast_core::Side;

use crate::boundary::{side_vector, step_toward};
use crate::{GridRay, TraversalError};

/// Final state of a [`traverse`] call.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ExactHit {
    /// Cell the predicate accepted.
    pub cell: IVec2,
    /// Continuous position on the grid line crossed into `cell`.
    pub position: DVec2,
    /// Ray parameter accumulated over all steps.
    pub distance: f64,
    /// Axis of the grid line crossed into `cell`. Corners report [`Side::X`].
    pub side: Side,
}

#[inline]
fn proportion(side: f64, dir: f64) -> f64 {
    if dir == 0.0 {
        f64::INFINITY
    } else {
        side / dir
    }
}

/// Walk `ray` through the grid until `hit` accepts a cell.
///
/// When both grid lines are reached at the same parameter the ray steps
/// diagonally through the corner.
pub fn traverse<F>(ray: &GridRay, mut hit: F) -> Result<ExactHit, TraversalError>
where
    F: FnMut(IVec2) -> bool,
{
    ray.check_direction()?;

    let dir = ray.direction;
    let step = step_toward(dir);
    let mut cell = ray.cell;
    let mut position = ray.position;
    let mut distance = 0.0;

    for _ in 0..ray.max_steps {
        let sides = side_vector(dir, cell, position);
        let t = DVec2::new(proportion(sides.x, dir.x), proportion(sides.y, dir.y));

        let (t, side) = if t.x == t.y {
            cell.x += step.x;
            cell.y -= step.y;
            (t.x, Side::X)
        } else if t.x < t.y {
            cell.x += step.x;
            (t.x, Side::X)
        } else {
            cell.y -= step.y;
            (t.y, Side::Y)
        };

        position.x += t * dir.x;
        position.y -= t * dir.y;
        distance += t;

        if hit(cell) {
            return Ok(ExactHit {
                cell,
                position,
                distance,
                side,
            });
        }
    }

    tracing::warn!(
        "Exact traversal from {} along {} found no hit in {} steps",
        ray.cell,
        ray.direction,
        ray.max_steps
    );
    Err(TraversalError::StepLimitExceeded {
        steps: ray.max_steps,
        cell,
    })
}
