//! Errors - everything here is fatal for the game.
//! Rejected moves and out-of-map queries are normal control flow, not errors.

use std::path::PathBuf;

pub type GameResult<T> = Result<T, GameError>;

#[derive(Debug, thiserror::Error)]
pub enum GameError {
    /// Window, renderer, texture or event pump creation failed.
    #[error("SDL error: {0}")]
    Sdl(String),

    #[error("cannot load sprite sheet {path:?}: {msg}")]
    SpriteSheet { path: PathBuf, msg: String },

    #[error("cannot read map file {path:?}")]
    MapIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("map data is truncated: expected {expected} bytes, found {found}")]
    MapTruncated { expected: usize, found: usize },

    #[error("a {width}x{height} map needs {expected} tiles, got {found}")]
    MapSize {
        width: u8,
        height: u8,
        expected: usize,
        found: usize,
    },

    #[error("start position ({x}, {y}) is not a floor tile (found code {tile})")]
    StartNotPassable { x: i32, y: i32, tile: u8 },
}

impl GameError {
    /// SDL reports most of its failures as plain strings.
    #[inline]
    pub fn sdl(msg: impl ToString) -> Self {
        Self::Sdl(msg.to_string())
    }
}
