//! Distance from a ray's position to the next grid lines.
//!
//! The two functions use different sign conventions and each traversal
//! depends on its own. [`side_size`] feeds [`crate::delta`]; [`side_vector`]
//! feeds [`crate::exact`], which walks with y pointing up.

use glam::{DVec2, IVec2};

/// Unsigned distance to the next vertical and horizontal grid line.
///
/// Measured along each axis in cell units, toward increasing index when the
/// direction component is positive and toward decreasing index otherwise.
#[must_use]
pub fn side_size(ray_dir: DVec2, cell: IVec2, position: DVec2) -> DVec2 {
    let cell = cell.as_dvec2();

    let x = if ray_dir.x > 0.0 {
        cell.x + 1.0 - position.x
    } else {
        position.x - cell.x
    };

    let y = if ray_dir.y > 0.0 {
        cell.y + 1.0 - position.y
    } else {
        position.y - cell.y
    };

    DVec2::new(x, y)
}

/// Signed displacement to the next grid lines, y measured upward.
///
/// On x this is the displacement itself (negative when moving left). On y a
/// positive direction means moving toward the lower cell edge, so the value is
/// `position.y - cell.y`; otherwise it is minus the distance to the upper edge.
#[must_use]
pub fn side_vector(ray_dir: DVec2, cell: IVec2, position: DVec2) -> DVec2 {
    let cell = cell.as_dvec2();

    let x = if ray_dir.x > 0.0 {
        cell.x + 1.0 - position.x
    } else {
        cell.x - position.x
    };

    let y = if ray_dir.y > 0.0 {
        position.y - cell.y
    } else {
        -(cell.y + 1.0 - position.y)
    };

    DVec2::new(x, y)
}

/// Cell step per axis: `+1` for a positive component, `-1` otherwise.
#[inline]
#[must_use]
pub fn step_toward(ray_dir: DVec2) -> IVec2 {
    IVec2::new(
        if ray_dir.x > 0.0 { 1 } else { -1 },
        if ray_dir.y > 0.0 { 1 } else { -1 },
    )
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    const CELL: IVec2 = IVec2::new(12, 12);
    const OFFSETS: [(f64, f64); 4] = [(0.25, 0.75), (0.5, 0.5), (0.9, 0.1), (0.013, 0.6)];

    fn start(ox: f64, oy: f64) -> DVec2 {
        CELL.as_dvec2() + DVec2::new(ox, oy)
    }

    #[test]
    fn size_right_and_left() {
        for (ox, oy) in OFFSETS {
            let right = side_size(DVec2::X, CELL, start(ox, oy));
            assert_relative_eq!(right.x, 1.0 - ox, epsilon = 1e-9);

            let left = side_size(DVec2::NEG_X, CELL, start(ox, oy));
            assert_relative_eq!(left.x, ox, epsilon = 1e-9);
        }
    }

    #[test]
    fn size_up_and_down() {
        for (ox, oy) in OFFSETS {
            let up = side_size(DVec2::Y, CELL, start(ox, oy));
            assert_relative_eq!(up.y, 1.0 - oy, epsilon = 1e-9);

            let down = side_size(DVec2::NEG_Y, CELL, start(ox, oy));
            assert_relative_eq!(down.y, oy, epsilon = 1e-9);
        }
    }

    #[test]
    fn size_is_never_negative() {
        for (ox, oy) in OFFSETS {
            for dir in [DVec2::new(1.0, -1.0), DVec2::new(-0.3, 2.0), DVec2::ZERO] {
                let sides = side_size(dir, CELL, start(ox, oy));
                assert!(sides.x >= 0.0 && sides.y >= 0.0);
            }
        }
    }

    #[test]
    fn vector_x_is_signed() {
        for (ox, oy) in OFFSETS {
            let right = side_vector(DVec2::X, CELL, start(ox, oy));
            assert_relative_eq!(right.x, 1.0 - ox, epsilon = 1e-9);

            let left = side_vector(DVec2::NEG_X, CELL, start(ox, oy));
            assert_relative_eq!(left.x, -ox, epsilon = 1e-9);
        }
    }

    #[test]
    fn vector_y_points_up() {
        for (ox, oy) in OFFSETS {
            let up = side_vector(DVec2::Y, CELL, start(ox, oy));
            assert_relative_eq!(up.y, oy, epsilon = 1e-9);

            let down = side_vector(DVec2::NEG_Y, CELL, start(ox, oy));
            assert_relative_eq!(down.y, oy - 1.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn zero_component_steps_negative() {
        assert_eq!(step_toward(DVec2::new(0.0, 2.0)), IVec2::new(-1, 1));
        assert_eq!(step_toward(DVec2::new(0.5, -0.0)), IVec2::new(1, -1));
    }
}
