//! Tile grid storage and lookup.

use std::path::Path;

use glam::IVec2;
use serde::{Deserialize, Serialize};
use tilecast_core::{Error, Result, TileId};

/// Built-in 24x24 level with a solid border.
const DEFAULT_LEVEL: [[u8; 24]; 24] = [
    [1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1],
    [1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1],
    [1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1],
    [1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1],
    [1, 0, 0, 0, 0, 0, 2, 2, 2, 2, 2, 0, 0, 0, 0, 3, 0, 3, 0, 3, 0, 0, 0, 1],
    [1, 0, 0, 0, 0, 0, 2, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1],
    [1, 0, 0, 0, 0, 0, 2, 0, 0, 0, 2, 0, 0, 0, 0, 3, 0, 0, 0, 3, 0, 0, 0, 1],
    [1, 0, 0, 0, 0, 0, 2, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1],
    [1, 0, 0, 0, 0, 0, 2, 2, 0, 2, 2, 0, 0, 0, 0, 3, 0, 3, 0, 3, 0, 0, 0, 1],
    [1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1],
    [1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1],
    [1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1],
    [1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1],
    [1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1],
    [1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1],
    [1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1],
    [1, 4, 4, 4, 4, 4, 4, 4, 4, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1],
    [1, 4, 0, 4, 0, 0, 0, 0, 4, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1],
    [1, 4, 0, 0, 0, 0, 5, 0, 4, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1],
    [1, 4, 0, 4, 0, 0, 0, 0, 4, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1],
    [1, 4, 0, 4, 4, 4, 4, 4, 4, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1],
    [1, 4, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1],
    [1, 4, 4, 4, 4, 4, 4, 4, 4, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1],
    [1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1],
];

/// Rectangular grid of tiles, stored row-major (row = y, column = x).
///
/// Read-only once built, so a shared reference can be handed to every
/// rendering thread.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<u8>>", into = "Vec<Vec<u8>>")]
pub struct TileMap {
    width: u32,
    height: u32,
    tiles: Vec<TileId>,
}

impl TileMap {
    /// Create a map from row-major tiles.
    pub fn new(width: u32, height: u32, tiles: Vec<TileId>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidMap(format!(
                "map must not be empty, got {width}x{height}"
            )));
        }
        if tiles.len() != width as usize * height as usize {
            return Err(Error::InvalidMap(format!(
                "expected {} tiles for {width}x{height}, got {}",
                width as usize * height as usize,
                tiles.len()
            )));
        }
        Ok(Self {
            width,
            height,
            tiles,
        })
    }

    /// Create a map from a list of rows of equal length.
    pub fn from_rows(rows: Vec<Vec<u8>>) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);

        if let Some((y, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != width) {
            return Err(Error::InvalidMap(format!(
                "row {y} has {} tiles, expected {width}",
                row.len()
            )));
        }

        let tiles = rows.into_iter().flatten().map(TileId).collect();
        Self::new(width as u32, height as u32, tiles)
    }

    /// Parse a text grid with one digit per tile and one row per line.
    ///
    /// Blank lines and lines starting with `#` are skipped.
    pub fn parse(text: &str) -> Result<Self> {
        let rows = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .enumerate()
            .map(|(y, line)| {
                line.chars()
                    .map(|c| {
                        c.to_digit(10).map(|d| d as u8).ok_or_else(|| {
                            Error::InvalidMap(format!("unexpected character {c:?} in row {y}"))
                        })
                    })
                    .collect::<Result<Vec<u8>>>()
            })
            .collect::<Result<Vec<_>>>()?;

        Self::from_rows(rows)
    }

    /// Parse a JSON array of rows, e.g. `[[1,1,1],[1,0,1],[1,1,1]]`.
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::Serialization(e.to_string()))
    }

    /// Load a map file. `.json` files are read as JSON, anything else as a
    /// text grid.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let map = if path.extension().is_some_and(|ext| ext == "json") {
            Self::from_json_str(&text)?
        } else {
            Self::parse(&text)?
        };
        tracing::debug!(
            "Loaded {}x{} map from {}",
            map.width,
            map.height,
            path.display()
        );
        Ok(map)
    }

    /// The built-in 24x24 level.
    #[must_use]
    pub fn default_level() -> Self {
        Self {
            width: 24,
            height: 24,
            tiles: DEFAULT_LEVEL
                .iter()
                .flat_map(|row| row.iter().copied().map(TileId))
                .collect(),
        }
    }

    #[inline]
    pub const fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Tile at `cell`, or `None` outside the map.
    #[inline]
    #[must_use]
    pub fn get(&self, cell: IVec2) -> Option<TileId> {
        if cell.x < 0 || cell.y < 0 || cell.x >= self.width as i32 || cell.y >= self.height as i32
        {
            return None;
        }
        self.tiles
            .get(cell.y as usize * self.width as usize + cell.x as usize)
            .copied()
    }

    /// Whether `cell` stops rays. Cells outside the map count as solid.
    #[inline]
    #[must_use]
    pub fn is_solid(&self, cell: IVec2) -> bool {
        self.get(cell).map_or(true, TileId::is_solid)
    }

    /// Whether every border cell is solid, so rays from inside always hit.
    #[must_use]
    pub fn is_enclosed(&self) -> bool {
        let (w, h) = (self.width as i32, self.height as i32);
        let rows_closed =
            (0..w).all(|x| self.is_solid(IVec2::new(x, 0)) && self.is_solid(IVec2::new(x, h - 1)));
        let columns_closed =
            (0..h).all(|y| self.is_solid(IVec2::new(0, y)) && self.is_solid(IVec2::new(w - 1, y)));
        rows_closed && columns_closed
    }

    /// Rows of tiles from top (y = 0) to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[TileId]> {
        self.tiles.chunks(self.width as usize)
    }
}

impl TryFrom<Vec<Vec<u8>>> for TileMap {
    type Error = Error;

    fn try_from(rows: Vec<Vec<u8>>) -> Result<Self> {
        Self::from_rows(rows)
    }
}

impl From<TileMap> for Vec<Vec<u8>> {
    fn from(map: TileMap) -> Self {
        map.rows()
            .map(|row| row.iter().map(|tile| tile.0).collect())
            .collect()
    }
}

impl Default for TileMap {
    fn default() -> Self {
        Self::default_level()
    }
}
