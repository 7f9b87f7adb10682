//! Core types for the Tilecast raycaster.
//!
//! This crate provides the foundational types used throughout the workspace:
//! - Continuous positions and integer grid cells
//! - Tile ids and colours
//! - Common error types

pub mod coords;
pub mod error;
pub mod types;

pub use coords::{cell_of, Side};
pub use error::{Error, Result};
pub use glam::{DVec2, IVec2};
pub use types::{Palette, Rgb, TileId};

/// Engine-wide constants
pub mod constants {
    /// Upper bound on cells visited by a single traversal before giving up
    pub const DEFAULT_MAX_STEPS: u32 = 4096;
    /// Default viewport width in pixels
    pub const DEFAULT_WIDTH: u32 = 640;
    /// Default viewport height in pixels
    pub const DEFAULT_HEIGHT: u32 = 480;
    /// Default minimap radius in cells
    pub const DEFAULT_MINIMAP_ZOOM: u32 = 5;
    /// Default size of one minimap cell in pixels
    pub const DEFAULT_PIXEL_SIZE: f64 = 10.0;
    /// Largest accepted minimap radius in cells
    pub const MAX_MINIMAP_ZOOM: u32 = 256;
    /// Largest accepted minimap cell size in pixels
    pub const MAX_PIXEL_SIZE: f64 = 64.0;
}
