//! Ray-grid traversal for the Tilecast raycaster.
//!
//! Two traversal algorithms walk a ray through a tile grid one cell at a time
//! until a caller-supplied predicate reports a hit:
//! - [`delta`]: precomputed per-axis crossing distances (classic DDA), returns
//!   the fisheye-free perpendicular distance
//! - [`exact`]: recomputes the exact continuous position after every step
//!
//! [`Strategy`] selects between them behind one result type.
//!
//! The predicate is the only termination signal. Every ray carries a step bound
//! so that a grid without an enclosing wall ends in
//! [`TraversalError::StepLimitExceeded`] rather than an endless loop.

pub mod boundary;
pub mod delta;
pub mod exact;
pub mod strategy;

pub use boundary::{side_size, side_vector, step_toward};
pub use delta::{perpendicular_distance, RayHit};
pub use exact::{traverse, ExactHit};
pub use strategy::{Hit, ParseStrategyError, Strategy};

use glam::{DVec2, IVec2};
use thiserror::Error;
use tilecast_core::cell_of;
use tilecast_core::constants::DEFAULT_MAX_STEPS;

/// Errors produced by grid traversal.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum TraversalError {
    /// Both direction components are zero, or a component is not finite.
    #[error("ray direction {0} cannot step through the grid")]
    DegenerateDirection(DVec2),

    /// The predicate never reported a hit within the step bound.
    #[error("no hit after {steps} steps, last cell {cell}")]
    StepLimitExceeded { steps: u32, cell: IVec2 },
}

/// Start state of a single traversal.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridRay {
    /// Cell the ray starts in.
    pub cell: IVec2,
    /// Continuous start position, normally inside `cell`.
    pub position: DVec2,
    /// Direction; need not be normalized, either component may be zero.
    pub direction: DVec2,
    /// Maximum number of cells visited before giving up.
    pub max_steps: u32,
}

impl GridRay {
    /// Create a ray starting at `position` inside `cell`.
    #[must_use]
    pub const fn new(cell: IVec2, position: DVec2, direction: DVec2) -> Self {
        Self {
            cell,
            position,
            direction,
            max_steps: DEFAULT_MAX_STEPS,
        }
    }

    /// Create a ray starting in the cell that contains `position`.
    #[must_use]
    pub fn from_position(position: DVec2, direction: DVec2) -> Self {
        Self::new(cell_of(position), position, direction)
    }

    /// Set the step bound.
    #[must_use]
    pub const fn with_max_steps(mut self, max_steps: u32) -> Self {
        self.max_steps = max_steps;
        self
    }

    fn check_direction(&self) -> Result<(), TraversalError> {
        let d = self.direction;
        if !d.is_finite() || (d.x == 0.0 && d.y == 0.0) {
            return Err(TraversalError::DegenerateDirection(d));
        }
        Ok(())
    }
}
