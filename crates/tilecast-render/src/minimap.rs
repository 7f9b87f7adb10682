//! Overhead minimap.
//!
//! The minimap shows a `(2 * zoom + 1)` cell window centred on the camera.
//! The window scrolls smoothly: its first and last rows and columns are cut
//! to the camera's sub-cell offset, so the camera always sits at the centre.

use glam::{DVec2, IVec2};
use tilecast_core::constants::MAX_MINIMAP_ZOOM;
use tilecast_core::{Palette, Rgb};

use crate::canvas::Canvas;
use crate::config::MinimapConfig;
use crate::map::TileMap;

/// Shrink a ray displacement so that neither axis exceeds `radius`, keeping
/// its direction.
///
/// The x axis is clamped first and the y axis is then checked on the result.
#[must_use]
pub fn clip_ray(ray: DVec2, radius: f64) -> DVec2 {
    let mut clipped = ray;

    if clipped.x.abs() > radius {
        let proportion = radius / clipped.x.abs();
        clipped.x = if clipped.x > 0.0 { radius } else { -radius };
        clipped.y *= proportion;
    }

    if clipped.y.abs() > radius {
        let proportion = radius / clipped.y.abs();
        clipped.x *= proportion;
        clipped.y = if clipped.y > 0.0 { radius } else { -radius };
    }

    clipped
}

/// One filled rectangle of the minimap grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MinimapCell {
    /// Map cell shown by this rectangle.
    pub cell: IVec2,
    /// Top-left corner in pixels.
    pub origin: DVec2,
    /// Size in pixels.
    pub size: DVec2,
    pub color: Rgb,
}

/// Minimap drawn on top of the first-person view.
#[derive(Debug, Clone)]
pub struct Minimap {
    config: MinimapConfig,
}

impl Minimap {
    pub const fn new(config: MinimapConfig) -> Self {
        Self { config }
    }

    pub const fn config(&self) -> &MinimapConfig {
        &self.config
    }

    /// Window radius in cells, capped at [`MAX_MINIMAP_ZOOM`].
    fn radius(&self) -> i32 {
        self.config.zoom.min(MAX_MINIMAP_ZOOM) as i32
    }

    fn zoom(&self) -> f64 {
        f64::from(self.radius())
    }

    /// Pixel position of the camera marker.
    pub fn centre(&self) -> DVec2 {
        DVec2::splat(self.zoom() * self.config.pixel_size) + self.config.position
    }

    /// Grid rectangles for a camera at `position`, row by row.
    pub fn cells(&self, map: &TileMap, palette: &Palette, position: DVec2) -> Vec<MinimapCell> {
        let span = self.radius() * 2 + 1;
        let last = span - 1;
        let pixel = self.config.pixel_size;
        let corner = position - DVec2::splat(self.zoom());
        let first_cell = corner.floor();
        let offset = corner - first_cell;
        let first_cell = first_cell.as_ivec2();

        let mut cells = Vec::with_capacity((span * span) as usize);
        for j in 0..span {
            for i in 0..span {
                let cell = first_cell + IVec2::new(i, j);
                let color = map
                    .get(cell)
                    .map_or(self.config.outside, |tile| palette.color(tile));

                let mut size = DVec2::splat(pixel);
                if i == 0 {
                    size.x = (1.0 - offset.x) * pixel;
                }
                if j == 0 {
                    size.y = (1.0 - offset.y) * pixel;
                }
                if i == last {
                    size.x = offset.x * pixel;
                }
                if j == last {
                    size.y = offset.y * pixel;
                }

                let mut origin = (DVec2::new(f64::from(i), f64::from(j)) - offset) * pixel;
                if i == 0 {
                    origin.x = 0.0;
                }
                if j == 0 {
                    origin.y = 0.0;
                }

                cells.push(MinimapCell {
                    cell,
                    origin: origin + self.config.position,
                    size,
                    color,
                });
            }
        }
        cells
    }

    /// End point in pixels of a ray displacement, clipped to the window.
    pub fn ray_end(&self, ray: DVec2) -> DVec2 {
        let clipped = clip_ray(ray, self.zoom());
        (DVec2::splat(self.zoom()) + clipped) * self.config.pixel_size + self.config.position
    }

    /// Draw border, grid, rays and camera marker.
    ///
    /// `rays` are displacements from the camera to each wall hit, in cells.
    pub fn draw<C: Canvas + ?Sized>(
        &self,
        canvas: &mut C,
        map: &TileMap,
        palette: &Palette,
        position: DVec2,
        rays: &[DVec2],
    ) {
        let pixel = self.config.pixel_size;

        canvas.fill_rect(
            DVec2::splat(-0.5 * pixel) + self.config.position,
            DVec2::splat((self.zoom() + 0.5) * 2.0 * pixel),
            self.config.border,
        );

        for cell in self.cells(map, palette, position) {
            canvas.fill_rect(cell.origin, cell.size, cell.color);
        }

        let centre = self.centre();
        for &ray in rays {
            canvas.line(centre, self.ray_end(ray), self.config.ray);
        }

        canvas.circle(centre, pixel / 2.0, self.config.player);
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use tilecast_core::TileId;

    use super::*;
    use crate::canvas::Framebuffer;

    fn minimap(zoom: u32) -> Minimap {
        Minimap::new(MinimapConfig {
            zoom,
            pixel_size: 10.0,
            position: DVec2::new(20.0, 30.0),
            ..Default::default()
        })
    }

    #[test]
    fn short_ray_is_untouched() {
        assert_eq!(clip_ray(DVec2::new(1.5, -2.0), 5.0), DVec2::new(1.5, -2.0));
    }

    #[test]
    fn long_x_is_clamped() {
        let clipped = clip_ray(DVec2::new(10.0, 2.0), 5.0);
        assert_relative_eq!(clipped.x, 5.0);
        assert_relative_eq!(clipped.y, 1.0);
    }

    #[test]
    fn long_negative_y_is_clamped() {
        let clipped = clip_ray(DVec2::new(2.0, -10.0), 5.0);
        assert_relative_eq!(clipped.x, 1.0);
        assert_relative_eq!(clipped.y, -5.0);
    }

    #[test]
    fn clipping_keeps_direction() {
        for ray in [
            DVec2::new(-20.0, 8.0),
            DVec2::new(7.0, 30.0),
            DVec2::new(-9.0, -9.5),
        ] {
            let clipped = clip_ray(ray, 5.0);
            assert!(clipped.x.abs() <= 5.0 + 1e-12 && clipped.y.abs() <= 5.0 + 1e-12);
            assert_relative_eq!(ray.perp_dot(clipped), 0.0, epsilon = 1e-9);
            assert!(ray.dot(clipped) > 0.0);
        }
    }

    #[test]
    fn window_has_partial_edges() {
        let map = TileMap::default_level();
        let cells = minimap(2).cells(&map, &Palette::default(), DVec2::new(12.5, 12.25));
        assert_eq!(cells.len(), 25);

        let first = cells[0];
        assert_eq!(first.cell, IVec2::new(10, 10));
        assert_eq!(first.origin, DVec2::new(20.0, 30.0));
        assert_relative_eq!(first.size.x, 5.0);
        assert_relative_eq!(first.size.y, 7.5);

        let second = cells[1];
        assert_relative_eq!(second.origin.x, 25.0);
        assert_relative_eq!(second.size.x, 10.0);

        let last = cells[24];
        assert_eq!(last.cell, IVec2::new(14, 14));
        assert_relative_eq!(last.origin.x, 55.0);
        assert_relative_eq!(last.origin.y, 67.5);
        assert_relative_eq!(last.size.x, 5.0);
        assert_relative_eq!(last.size.y, 2.5);
    }

    #[test]
    fn huge_zoom_is_capped() {
        let cells = minimap(u32::MAX).cells(
            &TileMap::default_level(),
            &Palette::default(),
            DVec2::new(12.5, 12.5),
        );
        let span = (MAX_MINIMAP_ZOOM * 2 + 1) as usize;
        assert_eq!(cells.len(), span * span);
    }

    #[test]
    fn outside_cells_use_outside_colour() {
        let map = TileMap::default_level();
        let palette = Palette::default();
        let cells = minimap(2).cells(&map, &palette, DVec2::new(1.5, 1.5));

        assert_eq!(cells[0].cell, IVec2::new(-1, -1));
        assert_eq!(cells[0].color, Rgb::BLACK);
        assert_eq!(cells[6].cell, IVec2::new(0, 0));
        assert_eq!(cells[6].color, palette.color(TileId(1)));
    }

    #[test]
    fn ray_end_is_clipped_to_window() {
        let mm = minimap(5);
        let end = mm.ray_end(DVec2::new(20.0, 0.0));
        assert_relative_eq!(end.x, 20.0 + 100.0);
        assert_relative_eq!(end.y, 30.0 + 50.0);
    }

    #[test]
    fn draw_marks_player_and_border() {
        let mm = minimap(2);
        let mut fb = Framebuffer::new(100, 100);
        mm.draw(
            &mut fb,
            &TileMap::default_level(),
            &Palette::default(),
            DVec2::new(12.5, 12.5),
            &[DVec2::new(0.0, -10.0)],
        );

        // Marker at the centre, border in the half-cell margin.
        assert_eq!(fb.pixel(40, 50), Some(Rgb::MAGENTA));
        assert_eq!(fb.pixel(16, 26), Some(Rgb::MAGENTA));
        // Ray drawn straight up from the marker.
        assert_eq!(fb.pixel(40, 33), Some(Rgb::WHITE));
        // Empty floor cell.
        assert_eq!(fb.pixel(25, 60), Some(Palette::default().color(TileId::EMPTY)));
    }
}
