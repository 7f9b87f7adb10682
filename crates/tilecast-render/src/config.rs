//! Render configuration.

use std::path::Path;

use glam::DVec2;
use serde::{Deserialize, Serialize};
use tilecast_core::constants::{
    DEFAULT_HEIGHT, DEFAULT_MAX_STEPS, DEFAULT_MINIMAP_ZOOM, DEFAULT_PIXEL_SIZE, DEFAULT_WIDTH,
    MAX_MINIMAP_ZOOM, MAX_PIXEL_SIZE,
};
use tilecast_core::{Error, Palette, Result, Rgb};
use tilecast_dda::Strategy;

use crate::camera::DEFAULT_PLANE_LENGTH;

/// Overhead minimap layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MinimapConfig {
    /// Whether the minimap is drawn at all.
    pub enabled: bool,
    /// Visible radius in cells around the camera.
    pub zoom: u32,
    /// Size of one cell in pixels.
    pub pixel_size: f64,
    /// Top-left corner of the map area in pixels.
    pub position: DVec2,
    pub border: Rgb,
    pub player: Rgb,
    pub ray: Rgb,
    /// Colour of cells outside the tile map.
    pub outside: Rgb,
}

impl Default for MinimapConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            zoom: DEFAULT_MINIMAP_ZOOM,
            pixel_size: DEFAULT_PIXEL_SIZE,
            position: DVec2::splat(DEFAULT_PIXEL_SIZE),
            border: Rgb::MAGENTA,
            player: Rgb::MAGENTA,
            ray: Rgb::WHITE,
            outside: Rgb::BLACK,
        }
    }
}

/// Viewport, traversal and colour settings for a render pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Canvas width in pixels, one ray per column.
    pub width: u32,
    /// Canvas height in pixels.
    pub height: u32,
    /// Half-width of the camera plane.
    pub plane_length: f64,
    pub strategy: Strategy,
    /// Step bound for every column ray.
    pub max_steps: u32,
    pub ceiling: Rgb,
    pub floor: Rgb,
    /// Wall colour per tile id.
    pub palette: Palette,
    pub minimap: MinimapConfig,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            plane_length: DEFAULT_PLANE_LENGTH,
            strategy: Strategy::default(),
            max_steps: DEFAULT_MAX_STEPS,
            ceiling: Rgb::new(32, 32, 40),
            floor: Rgb::new(64, 64, 64),
            palette: Palette::default(),
            minimap: MinimapConfig::default(),
        }
    }
}

impl RenderConfig {
    /// Create a configuration with the given canvas size.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ..Default::default()
        }
    }

    /// Set the traversal strategy.
    #[must_use]
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Disable the minimap overlay.
    #[must_use]
    pub fn without_minimap(mut self) -> Self {
        self.minimap.enabled = false;
        self
    }

    /// Parse and validate a JSON configuration. Missing fields take their
    /// default values.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| Error::Serialization(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load a JSON configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Reject settings the renderer cannot work with.
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(Error::InvalidConfig(format!(
                "canvas must not be empty, got {}x{}",
                self.width, self.height
            )));
        }
        if self.max_steps == 0 {
            return Err(Error::InvalidConfig("max_steps must be positive".into()));
        }
        if !self.plane_length.is_finite() || self.plane_length <= 0.0 {
            return Err(Error::InvalidConfig(format!(
                "plane_length must be positive, got {}",
                self.plane_length
            )));
        }
        if self.palette.is_empty() {
            return Err(Error::InvalidConfig("palette must not be empty".into()));
        }
        let pixel_size = self.minimap.pixel_size;
        if !pixel_size.is_finite() || pixel_size <= 0.0 || pixel_size > MAX_PIXEL_SIZE {
            return Err(Error::InvalidConfig(format!(
                "minimap pixel_size must be in (0, {MAX_PIXEL_SIZE}], got {pixel_size}"
            )));
        }
        if self.minimap.zoom > MAX_MINIMAP_ZOOM {
            return Err(Error::InvalidConfig(format!(
                "minimap zoom must be at most {MAX_MINIMAP_ZOOM}, got {}",
                self.minimap.zoom
            )));
        }
        Ok(())
    }
}
