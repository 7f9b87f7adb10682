//! Grid coordinate helpers.
//!
//! Continuous positions are [`DVec2`] in cell units: the cell `(3, 7)` covers
//! `[3, 4) x [7, 8)`. Cells are [`IVec2`].

use glam::{DVec2, IVec2};
use serde::{Deserialize, Serialize};

/// Axis whose grid line a ray crossed last.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// A vertical grid line (constant x) was crossed.
    #[default]
    X,
    /// A horizontal grid line (constant y) was crossed.
    Y,
}

/// Cell containing a continuous position.
#[inline]
#[must_use]
pub fn cell_of(position: DVec2) -> IVec2 {
    position.floor().as_ivec2()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_of_positive_position() {
        assert_eq!(cell_of(DVec2::new(12.5, 3.0)), IVec2::new(12, 3));
    }

    #[test]
    fn cell_of_negative_position() {
        assert_eq!(cell_of(DVec2::new(-0.25, -1.0)), IVec2::new(-1, -1));
    }
}
