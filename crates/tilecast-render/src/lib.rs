//! Rendering for the Tilecast raycaster.
//!
//! This crate provides:
//! - Tile maps and render configuration
//! - Camera and per-column ray directions
//! - Wall projection onto screen columns
//! - Overhead minimap with clipped rays
//! - A drawing surface trait and an image-backed framebuffer
//! - Screenshot saving

pub mod camera;
pub mod canvas;
pub mod config;
pub mod error;
pub mod map;
pub mod minimap;
pub mod projection;
pub mod renderer;
pub mod screenshot;

pub use camera::Camera;
pub use canvas::{Canvas, Framebuffer};
pub use config::{MinimapConfig, RenderConfig};
pub use error::RenderError;
pub use map::TileMap;
pub use minimap::{clip_ray, Minimap, MinimapCell};
pub use projection::{calculate_line_height, ColumnSpan};
pub use renderer::{ColumnHit, Renderer};
pub use screenshot::save_screenshot;
