//! Camera and per-column ray directions.

use glam::{DVec2, IVec2};
use tilecast_core::cell_of;

/// Default half-width of the camera plane, about a 66 degree field of view.
pub const DEFAULT_PLANE_LENGTH: f64 = 0.66;

/// First-person camera on the tile grid.
///
/// `plane` is perpendicular to `direction`; its length sets the field of view.
/// Column rays are `direction + plane * camera_x` with `camera_x` in `[-1, 1)`,
/// so the ray parameter at a wall equals its distance along `direction`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub position: DVec2,
    pub direction: DVec2,
    pub plane: DVec2,
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(DVec2::new(12.5, 12.5), 0.0, DEFAULT_PLANE_LENGTH)
    }
}

impl Camera {
    /// Create a camera at `position` looking along `angle` radians
    /// (0 looks toward +x, positive angles turn toward +y).
    pub fn new(position: DVec2, angle: f64, plane_length: f64) -> Self {
        let direction = DVec2::from_angle(angle);
        Self {
            position,
            direction,
            plane: direction.perp() * plane_length,
        }
    }

    /// Cell the camera stands in.
    #[inline]
    pub fn cell(&self) -> IVec2 {
        cell_of(self.position)
    }

    /// Viewing angle in radians.
    pub fn angle(&self) -> f64 {
        self.direction.to_angle()
    }

    /// Ray direction for a screen column.
    #[must_use]
    pub fn ray_direction(&self, column: u32, width: u32) -> DVec2 {
        let camera_x = 2.0 * f64::from(column) / f64::from(width) - 1.0;
        self.direction + self.plane * camera_x
    }

    /// Turn the camera by `angle` radians.
    pub fn rotate(&mut self, angle: f64) {
        let rotation = DVec2::from_angle(angle);
        self.direction = rotation.rotate(self.direction);
        self.plane = rotation.rotate(self.plane);
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::FRAC_PI_2;

    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn plane_is_perpendicular() {
        let camera = Camera::new(DVec2::ZERO, 0.3, 0.66);
        assert_relative_eq!(camera.direction.dot(camera.plane), 0.0, epsilon = 1e-12);
        assert_relative_eq!(camera.plane.length(), 0.66, epsilon = 1e-12);
    }

    #[test]
    fn column_rays_span_the_plane() {
        let camera = Camera::new(DVec2::ZERO, 0.0, 0.5);
        let left = camera.ray_direction(0, 100);
        let centre = camera.ray_direction(50, 100);

        assert_relative_eq!(left.x, 1.0);
        assert_relative_eq!(left.y, -0.5);
        assert_relative_eq!(centre.x, 1.0);
        assert_relative_eq!(centre.y, 0.0);
    }

    #[test]
    fn rotate_turns_direction_and_plane() {
        let mut camera = Camera::new(DVec2::ZERO, 0.0, 1.0);
        camera.rotate(FRAC_PI_2);
        assert_relative_eq!(camera.direction.x, 0.0, epsilon = 1e-12);
        assert_relative_eq!(camera.direction.y, 1.0, epsilon = 1e-12);
        assert_relative_eq!(camera.plane.x, -1.0, epsilon = 1e-12);
        assert_relative_eq!(camera.angle(), FRAC_PI_2, epsilon = 1e-12);
    }

    #[test]
    fn cell_floors_position() {
        let camera = Camera::new(DVec2::new(3.9, 0.1), 0.0, 0.66);
        assert_eq!(camera.cell(), IVec2::new(3, 0));
    }
}
