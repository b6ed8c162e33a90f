//!  Various constants and small definitions.

// tile codes, as stored in the map files
pub const TILE_FLOOR: u8 = 0;
pub const TILE_WALL: u8 = 1;
/// Returned for every query outside the map.
pub const TILE_VOID: u8 = 2;
/// Marks the player's own cell inside a submap. Never stored in a map.
pub const TILE_PLAYER: u8 = 3;

// the logical canvas, scaled to the window when presented
pub const CANVAS_WIDTH: u32 = 160;
pub const CANVAS_HEIGHT: u32 = 120;
