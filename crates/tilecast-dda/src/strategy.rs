//! Traversal policy selection.

use std::fmt;
use std::str::FromStr;

use glam::{DVec2, IVec2};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tilecast_core::Side;

use crate::{delta, exact, GridRay, TraversalError};

/// Which traversal algorithm to run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Accumulated per-axis crossing distances. See [`delta`].
    #[default]
    Delta,
    /// Exact position recomputed every step. See [`exact`].
    Exact,
}

/// Traversal result shared by both strategies.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Hit {
    /// Cell the predicate accepted.
    pub cell: IVec2,
    /// Axis of the grid line crossed into `cell`.
    pub side: Side,
    /// Ray parameter at the crossing, the perpendicular distance for camera rays.
    pub distance: f64,
    /// Continuous crossing point in grid coordinates.
    pub position: DVec2,
}

impl Hit {
    /// Displacement from the ray origin to the crossing point.
    #[inline]
    #[must_use]
    pub fn ray(&self, direction: DVec2) -> DVec2 {
        direction * self.distance
    }
}

impl Strategy {
    /// Walk a grid-frame ray until `hit` accepts a cell.
    ///
    /// Both strategies visit the same cells except at exact corner crossings,
    /// where [`Strategy::Delta`] enters the y neighbour first and
    /// [`Strategy::Exact`] moves diagonally.
    pub fn cast<F>(self, ray: &GridRay, hit: F) -> Result<Hit, TraversalError>
    where
        F: FnMut(IVec2) -> bool,
    {
        match self {
            Self::Delta => {
                let found = delta::perpendicular_distance(ray, hit)?;
                Ok(Hit {
                    cell: found.cell,
                    side: found.side,
                    distance: found.perp_dist,
                    position: ray.position + ray.direction * found.perp_dist,
                })
            }
            Self::Exact => {
                // The exact walk measures y upward.
                let y_up = GridRay {
                    direction: DVec2::new(ray.direction.x, -ray.direction.y),
                    ..*ray
                };
                let found = exact::traverse(&y_up, hit)?;
                Ok(Hit {
                    cell: found.cell,
                    side: found.side,
                    distance: found.distance,
                    position: found.position,
                })
            }
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Delta => "delta",
            Self::Exact => "exact",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Unknown strategy name.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown traversal strategy `{0}`, expected `delta` or `exact`")]
pub struct ParseStrategyError(pub String);

impl FromStr for Strategy {
    type Err = ParseStrategyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "delta" | "dda" => Ok(Self::Delta),
            "exact" => Ok(Self::Exact),
            other => Err(ParseStrategyError(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    fn room(cell: IVec2) -> bool {
        cell.x <= 0 || cell.y <= 0 || cell.x >= 23 || cell.y >= 23
    }

    #[test]
    fn parse_names() {
        assert_eq!("delta".parse::<Strategy>(), Ok(Strategy::Delta));
        assert_eq!(" Exact ".parse::<Strategy>(), Ok(Strategy::Exact));
        assert!("bresenham".parse::<Strategy>().is_err());
    }

    #[test]
    fn display_round_trips_through_parse() {
        for strategy in [Strategy::Delta, Strategy::Exact] {
            assert_eq!(strategy.to_string().parse::<Strategy>(), Ok(strategy));
        }
    }

    #[test]
    fn exact_cast_uses_grid_orientation() {
        let ray = GridRay::from_position(DVec2::splat(12.5), DVec2::Y);
        let hit = Strategy::Exact.cast(&ray, room).unwrap();
        assert_eq!(hit.cell, IVec2::new(12, 23));
        assert_eq!(hit.side, Side::Y);
        assert_relative_eq!(hit.distance, 10.5, epsilon = 1e-9);
        assert_relative_eq!(hit.position.y, 23.0, epsilon = 1e-9);
    }

    #[test]
    fn delta_cast_reports_crossing_point() {
        let ray = GridRay::from_position(DVec2::new(12.5, 12.5), DVec2::new(1.0, 0.5));
        let hit = Strategy::Delta.cast(&ray, room).unwrap();
        assert_eq!(hit.side, Side::X);
        assert_relative_eq!(hit.position.x, 23.0, epsilon = 1e-9);
        assert_relative_eq!(hit.position.y, 17.75, epsilon = 1e-9);
        assert_relative_eq!(hit.ray(ray.direction).x, 10.5, epsilon = 1e-9);
    }
}
