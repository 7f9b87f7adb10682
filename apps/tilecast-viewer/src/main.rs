//! Tilecast Snapshot Viewer
//!
//! Renders the first-person view and minimap of a tile map to image files.
//!
//! ## Usage
//!
//! ```bash
//! cargo run -p tilecast-viewer -- [OPTIONS]
//! ```
//!
//! ## Examples
//!
//! ```bash
//! # Built-in level from its centre
//! cargo run -p tilecast-viewer
//!
//! # Custom map and camera, exact traversal
//! cargo run -p tilecast-viewer -- --map level.txt --pos 3.5,4.5 --angle 90 --strategy exact
//!
//! # Eight frames turning 45 degrees each
//! cargo run -p tilecast-viewer -- -o turn_{}.png --frames 8 --turn 45
//! ```
//!
//! ## Environment Variables
//!
//! - `RUST_LOG`: Set log level (e.g., info, debug, trace)

mod args;

use anyhow::{bail, Context};
use glam::DVec2;
use tilecast_render::screenshot::output_path;
use tilecast_render::{Camera, Framebuffer, RenderConfig, Renderer, TileMap};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::args::ViewerArgs;

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.iter().any(|arg| arg == "-h" || arg == "--help") {
        print_help();
        return Ok(());
    }

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = ViewerArgs::parse_args(&args)?;
    run(&args)
}

fn run(args: &ViewerArgs) -> anyhow::Result<()> {
    let map = match &args.map {
        Some(path) => TileMap::load(path).with_context(|| format!("loading map {path}"))?,
        None => TileMap::default_level(),
    };
    let mut config = match &args.config {
        Some(path) => {
            RenderConfig::load(path).with_context(|| format!("loading config {path}"))?
        }
        None => RenderConfig::default(),
    };
    if let Some(strategy) = args.strategy {
        config.strategy = strategy;
    }
    if args.no_minimap {
        config = config.without_minimap();
    }

    let position = place_camera(&map, args.position)?;
    let renderer = Renderer::new(config)?;
    let (width, height) = (renderer.config().width, renderer.config().height);
    let mut camera = Camera::new(
        position,
        args.angle.to_radians(),
        renderer.config().plane_length,
    );

    info!(
        "Rendering {} frame(s) of {}x{} map at {}x{} with {} traversal",
        args.frames,
        map.width(),
        map.height(),
        width,
        height,
        renderer.config().strategy
    );

    for frame in 0..args.frames {
        let mut framebuffer = Framebuffer::new(width, height);
        renderer.render(&map, &camera, &mut framebuffer)?;
        framebuffer.save(output_path(&args.output, frame))?;
        camera.rotate(args.turn.to_radians());
    }

    Ok(())
}

/// Resolve the camera position, defaulting to the map centre.
///
/// Fails when the position is inside a wall. Warns when the map border is
/// open, since rays leaving the map then stop at its edge.
fn place_camera(map: &TileMap, requested: Option<DVec2>) -> anyhow::Result<DVec2> {
    if !map.is_enclosed() {
        warn!("Map border is not closed; rays leaving the map stop at its edge");
    }

    let position = requested.unwrap_or_else(|| {
        DVec2::new(f64::from(map.width()), f64::from(map.height())) / 2.0
    });
    if map.is_solid(tilecast_core::cell_of(position)) {
        bail!("camera position {position} is inside a wall");
    }
    Ok(position)
}

fn print_help() {
    eprintln!(
        "Tilecast Snapshot Viewer

USAGE:
    cargo run -p tilecast-viewer -- [OPTIONS]

OPTIONS:
    --map <FILE>            Tile map: text grid of digits, or JSON array of rows (.json)
                            Default: built-in 24x24 level
    --config <FILE>         JSON render configuration
    -o, --output <PATTERN>  Output path pattern (use {{}} for frame number)
                            Default: tilecast_{{}}.png
    --pos <X,Y>             Camera position in cells (default: map centre)
    --angle <DEG>           Viewing angle, 0 looks toward +x (default: 0)
    --strategy <NAME>       Traversal: delta or exact (default: from config)
    --frames <N>            Number of frames to render (default: 1)
    --turn <DEG>            Camera turn between frames (default: 0)
    --no-minimap            Render the first-person view only

OTHER:
    -h, --help              Print this help message

ENVIRONMENT VARIABLES:
    RUST_LOG                Set log level (e.g., info, debug, trace)"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn camera_defaults_to_map_centre() {
        let map = TileMap::default_level();
        assert_eq!(place_camera(&map, None).unwrap(), DVec2::new(12.0, 12.0));
    }

    #[test]
    fn camera_inside_wall_is_refused() {
        let map = TileMap::default_level();
        assert!(place_camera(&map, Some(DVec2::new(0.5, 0.5))).is_err());
        assert!(place_camera(&map, Some(DVec2::new(-3.0, 4.0))).is_err());
    }

    #[test]
    fn open_map_still_places_camera() {
        let map = TileMap::parse("111\n100\n111").unwrap();
        assert!(!map.is_enclosed());
        assert_eq!(
            place_camera(&map, Some(DVec2::new(1.5, 1.5))).unwrap(),
            DVec2::new(1.5, 1.5)
        );
    }
}
