//! The submap - the 3x4 window of tiles in front of the player,
//! always oriented so that "forward" points along the rows.
//!
//! Cells are stored row by row, nearest row first. Each row is `[left, front, right]`.
//! The renderer relies on this order, both for the draw order and for finding walls.

use std::fmt;

use crate::defs::TILE_PLAYER;
use crate::{Orientation, TileGrid};

pub const SUBMAP_COLUMNS: usize = 3;
pub const SUBMAP_ROWS: usize = 4;
pub const SUBMAP_LEN: usize = SUBMAP_COLUMNS * SUBMAP_ROWS;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Submap([u8; SUBMAP_LEN]);

impl Submap {
    /// Build the window around a player standing at (x, y), facing `orientation`.
    /// Must be called again after every move or turn.
    pub fn extract(grid: &TileGrid, x: i32, y: i32, orientation: Orientation) -> Self {
        let mut cells = [0; SUBMAP_LEN];
        for (i, cell) in cells.iter_mut().enumerate() {
            let dx = (i % SUBMAP_COLUMNS) as i32 - 1;
            let dy = (i / SUBMAP_COLUMNS) as i32;
            let (rx, ry) = orientation.rotate((dx, dy));
            let (mx, my) = (x + rx, y + ry);
            *cell = if mx == x && my == y {
                TILE_PLAYER
            } else {
                grid.tile(mx, my)
            };
        }
        Self(cells)
    }

    pub fn from_cells(cells: [u8; SUBMAP_LEN]) -> Self {
        Self(cells)
    }

    #[inline]
    pub fn cells(&self) -> &[u8; SUBMAP_LEN] {
        &self.0
    }

    /// Cell at column `dx` (-1 = left, 0 = front, 1 = right) and `row` (0 = nearest).
    #[inline]
    pub fn cell(&self, dx: i32, row: usize) -> u8 {
        assert!((-1..=1).contains(&dx) && row < SUBMAP_ROWS);
        self.0[row * SUBMAP_COLUMNS + (dx + 1) as usize]
    }

    /// One row, as `[left, front, right]`.
    #[inline]
    pub fn row(&self, row: usize) -> [u8; SUBMAP_COLUMNS] {
        let start = row * SUBMAP_COLUMNS;
        [self.0[start], self.0[start + 1], self.0[start + 2]]
    }
}

/// Four lines of three digits, nearest row first.
impl fmt::Display for Submap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.0.chunks(SUBMAP_COLUMNS) {
            for code in row {
                write!(f, "{code}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
