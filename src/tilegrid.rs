//! The tile map - a read-only grid of tile codes, loaded from a flat map file.
//!
//! Map file format: byte 0 = width, byte 1 = height, then `width * height`
//! tile codes, row by row. No header magic, no versioning.

use std::fmt;
use std::path::Path;

use bytes::Buf;

use crate::defs::*;
use crate::{GameError, GameResult};

pub struct TileGrid {
    width: u8,
    height: u8,
    tiles: Vec<u8>,
}

impl TileGrid {
    pub fn new(width: u8, height: u8, tiles: Vec<u8>) -> GameResult<Self> {
        let expected = (width as usize) * (height as usize);
        if tiles.len() != expected {
            return Err(GameError::MapSize {
                width,
                height,
                expected,
                found: tiles.len(),
            });
        }
        Ok(Self { width, height, tiles })
    }

    /// Decode a map from its file contents. Extra bytes after the tiles are ignored.
    pub fn from_bytes(data: &[u8]) -> GameResult<Self> {
        let mut buf = data;
        if buf.remaining() < 2 {
            return Err(GameError::MapTruncated {
                expected: 2,
                found: data.len(),
            });
        }
        let width = buf.get_u8();
        let height = buf.get_u8();

        let len = (width as usize) * (height as usize);
        if buf.remaining() < len {
            return Err(GameError::MapTruncated {
                expected: 2 + len,
                found: data.len(),
            });
        }
        let tiles = buf.copy_to_bytes(len).to_vec();
        if buf.has_remaining() {
            tracing::debug!("Ignoring {} trailing bytes after the map tiles", buf.remaining());
        }

        Self::new(width, height, tiles)
    }

    pub fn load(path: &Path) -> GameResult<Self> {
        let data = std::fs::read(path).map_err(|source| GameError::MapIo {
            path: path.to_path_buf(),
            source,
        })?;
        let grid = Self::from_bytes(&data)?;

        tracing::info!("Loaded {}x{} map from {:?}", grid.width, grid.height, path);
        let unknown = grid.unknown_tile_count();
        if unknown > 0 {
            tracing::warn!("Map has {unknown} tiles that are neither floor nor wall - treating them as solid");
        }
        Ok(grid)
    }

    #[inline]
    pub fn width(&self) -> u8 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u8 {
        self.height
    }

    /// Tile code at (x, y), or `TILE_VOID` outside the map.
    #[inline]
    pub fn tile(&self, x: i32, y: i32) -> u8 {
        let w = self.width as i32;
        let h = self.height as i32;
        if x >= 0 && y >= 0 && x < w && y < h {
            self.tiles[(y * w + x) as usize]
        } else {
            TILE_VOID
        }
    }

    #[inline]
    pub fn is_floor(&self, x: i32, y: i32) -> bool {
        self.tile(x, y) == TILE_FLOOR
    }

    /// Number of tiles with a code other than floor or wall.
    pub fn unknown_tile_count(&self) -> usize {
        self.tiles
            .iter()
            .filter(|&&t| t != TILE_FLOOR && t != TILE_WALL)
            .count()
    }
}

/// ASCII dump: `.` for floor, `#` for walls, `?` for anything else.
impl fmt::Display for TileGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.tiles.chunks(self.width.max(1) as usize) {
            for &t in row {
                let ch = match t {
                    TILE_FLOOR => '.',
                    TILE_WALL => '#',
                    _ => '?',
                };
                write!(f, "{ch}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
