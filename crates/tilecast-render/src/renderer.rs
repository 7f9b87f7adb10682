//! First-person column renderer.
//!
//! One ray is cast per screen column. Columns are independent and only read
//! the tile map, so they are cast in parallel.

use std::time::Instant;

use glam::DVec2;
use rayon::prelude::*;
use tilecast_core::{Side, TileId};
use tilecast_dda::{GridRay, Hit, TraversalError};
use tracing::debug;

use crate::camera::Camera;
use crate::canvas::Canvas;
use crate::config::RenderConfig;
use crate::error::RenderError;
use crate::map::TileMap;
use crate::minimap::Minimap;
use crate::projection::{calculate_line_height, ColumnSpan};

/// Traversal result for one screen column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColumnHit {
    pub column: u32,
    pub hit: Hit,
    /// Wall slice on screen.
    pub span: ColumnSpan,
    /// Displacement from the camera to the wall hit, in cells.
    pub ray: DVec2,
}

/// Renders the first-person view and minimap for a camera.
#[derive(Debug, Clone)]
pub struct Renderer {
    config: RenderConfig,
    minimap: Minimap,
}

impl Renderer {
    /// Create a renderer. The configuration is validated first.
    pub fn new(config: RenderConfig) -> Result<Self, RenderError> {
        config.validate()?;
        Ok(Self {
            minimap: Minimap::new(config.minimap.clone()),
            config,
        })
    }

    pub const fn config(&self) -> &RenderConfig {
        &self.config
    }

    pub const fn minimap(&self) -> &Minimap {
        &self.minimap
    }

    /// Cast the ray for a single column.
    pub fn cast_column(
        &self,
        map: &TileMap,
        camera: &Camera,
        column: u32,
    ) -> Result<ColumnHit, TraversalError> {
        let direction = camera.ray_direction(column, self.config.width);
        let ray = GridRay::new(camera.cell(), camera.position, direction)
            .with_max_steps(self.config.max_steps);

        let hit = self.config.strategy.cast(&ray, |cell| map.is_solid(cell))?;

        Ok(ColumnHit {
            column,
            hit,
            span: calculate_line_height(column, hit.distance, self.config.height),
            ray: hit.ray(direction),
        })
    }

    /// Cast every column, left to right.
    pub fn cast_columns(
        &self,
        map: &TileMap,
        camera: &Camera,
    ) -> Result<Vec<ColumnHit>, RenderError> {
        let start = Instant::now();

        let columns = (0..self.config.width)
            .into_par_iter()
            .map(|column| self.cast_column(map, camera, column))
            .collect::<Result<Vec<_>, _>>()?;

        debug!(
            "Cast {} columns with {} strategy in {:.2?}",
            columns.len(),
            self.config.strategy,
            start.elapsed()
        );
        Ok(columns)
    }

    /// Wall colour for a column: tile colour, halved on y-side walls.
    pub fn wall_color(&self, map: &TileMap, hit: &Hit) -> tilecast_core::Rgb {
        let color = map
            .get(hit.cell)
            .map_or(self.config.minimap.outside, |tile: TileId| {
                self.config.palette.color(tile)
            });
        match hit.side {
            Side::X => color,
            Side::Y => color.darken(),
        }
    }

    /// Render a full frame: ceiling, floor, walls, then the minimap.
    pub fn render<C: Canvas + ?Sized>(
        &self,
        map: &TileMap,
        camera: &Camera,
        canvas: &mut C,
    ) -> Result<Vec<ColumnHit>, RenderError> {
        let columns = self.cast_columns(map, camera)?;

        let (width, height) = (f64::from(self.config.width), f64::from(self.config.height));
        canvas.fill_rect(DVec2::ZERO, DVec2::new(width, height / 2.0), self.config.ceiling);
        canvas.fill_rect(
            DVec2::new(0.0, height / 2.0),
            DVec2::new(width, height / 2.0),
            self.config.floor,
        );

        for column in &columns {
            canvas.line(
                column.span.start,
                column.span.end,
                self.wall_color(map, &column.hit),
            );
        }

        if self.config.minimap.enabled {
            let rays: Vec<DVec2> = columns.iter().map(|c| c.ray).collect();
            self.minimap.draw(
                canvas,
                map,
                &self.config.palette,
                camera.position,
                &rays,
            );
        }

        Ok(columns)
    }
}
