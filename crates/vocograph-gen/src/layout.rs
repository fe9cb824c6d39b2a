//! Deterministic spatial layout.
//!
//! Positions are advisory metadata written into node parameters; nothing in
//! the generated topology depends on them. The layout is a simple grid:
//! splitter trees step right per level and down per index, bands occupy rows
//! that wrap into a new column every [`ROWS_PER_COLUMN`] bands.

use serde::{Deserialize, Serialize};

/// Grid step between splitters, both horizontally (per level) and vertically
/// (per index within a level).
pub const SPLITTER_STEP: f64 = 200.0;

/// Vertical distance between band rows.
pub const ROW_HEIGHT: f64 = 600.0;

/// Bands per column before wrapping, bounding vertical sprawl.
pub const ROWS_PER_COLUMN: usize = 9;

/// Horizontal distance between band columns; covers one band's full chain.
pub const BAND_COLUMN_WIDTH: f64 = 1700.0;

/// Offset of the band area from the anchor: to the right of the trees,
/// starting above the anchor line.
pub const BAND_AREA_OFFSET: (f64, f64) = (550.0, -300.0);

/// Horizontal offset of a source device from its tree root.
pub const SOURCE_X_OFFSET: f64 = -250.0;

/// Offsets of band-internal stages from the band's row origin.
pub const ENVELOPE_X_OFFSET: f64 = 600.0;
pub const COMBINER_X_OFFSET: f64 = 1500.0;

/// Internal offsets of the envelope-follower chain from its origin.
pub const CHAIN_SPLITTER_X: f64 = 200.0;
pub const CHAIN_WAVESHAPER_Y: f64 = 150.0;
pub const CHAIN_RECTIFIER_X: f64 = 380.0;
pub const CHAIN_SMOOTHER_X: f64 = 510.0;

/// Step between stages of the output tail.
pub const TAIL_STEP: f64 = 200.0;

/// A 2D placement, written into node parameters as `x`/`y`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub const ORIGIN: Position = Position { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn translate(&self, dx: f64, dy: f64) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Position of splitter `index` on `level` of a tree rooted at `origin`.
pub fn tree_slot(origin: Position, level: usize, index: usize) -> Position {
    origin.translate(level as f64 * SPLITTER_STEP, index as f64 * SPLITTER_STEP)
}

/// Origin of the carrier tree: below the vocal tree by a height proportional
/// to the band count, so the two trees never interleave.
pub fn carrier_tree_origin(anchor: Position, band_count: usize) -> Position {
    anchor.translate(0.0, band_count as f64 * SPLITTER_STEP)
}

/// Row origin for one band, wrapping into a new column every
/// [`ROWS_PER_COLUMN`] bands.
pub fn band_row_origin(anchor: Position, index: usize) -> Position {
    let (dx, dy) = BAND_AREA_OFFSET;
    let column = index / ROWS_PER_COLUMN;
    let row = index % ROWS_PER_COLUMN;
    anchor.translate(
        dx + column as f64 * BAND_COLUMN_WIDTH,
        dy + row as f64 * ROW_HEIGHT,
    )
}

/// Number of band columns used by `band_count` bands.
pub fn band_columns(band_count: usize) -> usize {
    band_count.div_ceil(ROWS_PER_COLUMN)
}

/// Centroid position: to the right of the last band column, on the anchor
/// line.
pub fn mixdown_position(anchor: Position, band_count: usize) -> Position {
    let (dx, _) = BAND_AREA_OFFSET;
    anchor.translate(
        dx + band_columns(band_count) as f64 * BAND_COLUMN_WIDTH + TAIL_STEP,
        0.0,
    )
}
