//! Grid traversal with precomputed crossing distances.
//!
//! Distances are measured in units of the ray parameter `t`, where the ray is
//! `position + direction * t`. For a camera ray built as
//! `view_direction + plane * camera_x` the parameter at a wall is the distance
//! along the view direction, which is what keeps walls free of fisheye bending.

use glam::{DVec2, IVec2};
use tilecast_core::Side;

use crate::boundary::{side_size, step_toward};
use crate::{GridRay, TraversalError};

/// First solid cell found by [`perpendicular_distance`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RayHit {
    /// Ray parameter at the grid line crossed into the hit cell.
    pub perp_dist: f64,
    /// Cell the predicate accepted.
    pub cell: IVec2,
    /// Axis of the grid line crossed into `cell`.
    pub side: Side,
}

/// Ray parameter needed to cross one whole cell on an axis.
#[inline]
fn delta_dist(dir: f64) -> f64 {
    if dir == 0.0 {
        f64::INFINITY
    } else {
        (1.0 / dir).abs()
    }
}

/// Scale a boundary distance by an axis delta. An infinite delta never
/// crosses, even from a zero distance where the product would be NaN.
#[inline]
fn scaled(distance: f64, delta: f64) -> f64 {
    if delta.is_infinite() {
        f64::INFINITY
    } else {
        distance * delta
    }
}

/// Walk `ray` through the grid until `hit` accepts a cell.
///
/// `hit` is called once per step with the cell just entered, never with the
/// start cell. When both axes reach their next grid line at the same time the
/// y axis is stepped first.
pub fn perpendicular_distance<F>(ray: &GridRay, mut hit: F) -> Result<RayHit, TraversalError>
where
    F: FnMut(IVec2) -> bool,
{
    ray.check_direction()?;

    let mut cell = ray.cell;
    let delta = DVec2::new(delta_dist(ray.direction.x), delta_dist(ray.direction.y));
    let sides = side_size(ray.direction, cell, ray.position);
    let mut side_dist = DVec2::new(scaled(sides.x, delta.x), scaled(sides.y, delta.y));
    let step = step_toward(ray.direction);

    for _ in 0..ray.max_steps {
        let side = if side_dist.x < side_dist.y {
            side_dist.x += delta.x;
            cell.x += step.x;
            Side::X
        } else {
            side_dist.y += delta.y;
            cell.y += step.y;
            Side::Y
        };

        if hit(cell) {
            let perp_dist = match side {
                Side::X => side_dist.x - delta.x,
                Side::Y => side_dist.y - delta.y,
            };
            return Ok(RayHit {
                perp_dist,
                cell,
                side,
            });
        }
    }

    tracing::warn!(
        "Traversal from {} along {} found no hit in {} steps",
        ray.cell,
        ray.direction,
        ray.max_steps
    );
    Err(TraversalError::StepLimitExceeded {
        steps: ray.max_steps,
        cell,
    })
}
