//! Tile and colour types.

use serde::{Deserialize, Serialize};

/// Identifier of the material stored in a map cell.
///
/// Tile 0 is reserved for empty space.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TileId(pub u8);

impl TileId {
    /// Empty, traversable cell
    pub const EMPTY: Self = Self(0);

    /// Returns true if rays pass through this tile
    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns true if this tile stops rays
    #[inline]
    #[must_use]
    pub const fn is_solid(self) -> bool {
        self.0 != 0
    }
}

/// 8-bit RGB colour.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "[u8; 3]", into = "[u8; 3]")]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Self = Self::new(0, 0, 0);
    pub const WHITE: Self = Self::new(255, 255, 255);
    pub const RED: Self = Self::new(255, 0, 0);
    pub const GREEN: Self = Self::new(0, 255, 0);
    pub const BLUE: Self = Self::new(0, 0, 255);
    pub const YELLOW: Self = Self::new(255, 255, 0);
    pub const MAGENTA: Self = Self::new(255, 0, 255);
    pub const DARK_GRAY: Self = Self::new(48, 48, 48);

    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Halve every channel. Used to shade y-side walls.
    #[inline]
    #[must_use]
    pub const fn darken(self) -> Self {
        Self::new(self.r / 2, self.g / 2, self.b / 2)
    }

    /// RGBA bytes with full opacity.
    #[inline]
    #[must_use]
    pub const fn to_rgba(self) -> [u8; 4] {
        [self.r, self.g, self.b, 255]
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::new(r, g, b)
    }
}

impl From<Rgb> for [u8; 3] {
    fn from(c: Rgb) -> Self {
        [c.r, c.g, c.b]
    }
}

/// Tile-to-colour table, indexed by [`TileId`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Palette(pub Vec<Rgb>);

impl Default for Palette {
    fn default() -> Self {
        Self(vec![
            Rgb::DARK_GRAY,
            Rgb::RED,
            Rgb::GREEN,
            Rgb::BLUE,
            Rgb::WHITE,
            Rgb::YELLOW,
        ])
    }
}

impl Palette {
    /// Colour for a tile. Tiles past the end of the table are drawn black.
    #[must_use]
    pub fn color(&self, tile: TileId) -> Rgb {
        self.0.get(tile.0 as usize).copied().unwrap_or(Rgb::BLACK)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
