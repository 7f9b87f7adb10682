//! Wall projection onto a screen column.

use glam::DVec2;

/// Vertical span of a wall slice. Both points share the column's x.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ColumnSpan {
    /// Top of the slice.
    pub start: DVec2,
    /// Bottom of the slice.
    pub end: DVec2,
}

impl ColumnSpan {
    /// Drawn height in pixels.
    #[inline]
    #[must_use]
    pub fn height(&self) -> f64 {
        self.end.y - self.start.y
    }
}

/// Project a perpendicular wall distance to a column span on a canvas of
/// `canvas_height` pixels.
///
/// The slice is `floor(canvas_height / perp_dist)` pixels tall, centred
/// vertically, with the top clamped to `0` and the bottom to
/// `canvas_height - 1`. `perp_dist` must be positive; anything else produces a
/// clamped but meaningless span.
#[must_use]
pub fn calculate_line_height(column: u32, perp_dist: f64, canvas_height: u32) -> ColumnSpan {
    let height = f64::from(canvas_height);
    let x = f64::from(column);

    let line_height = (height / perp_dist).floor();
    let start = -line_height / 2.0 + height / 2.0;
    let end = line_height / 2.0 + height / 2.0;

    ColumnSpan {
        start: DVec2::new(x, if start < 0.0 { 0.0 } else { start }),
        end: DVec2::new(x, if end >= height { height - 1.0 } else { end }),
    }
}
