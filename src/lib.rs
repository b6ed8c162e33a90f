//! HAIRDRESSER - a tiny grid-based dungeon crawler viewer.
//! Main library.
//!
//! The first-person view is built from a 3x4 window of map tiles in front of
//! the player, drawn with walls pre-rendered at each of the 4 visible depths.

mod config;
mod defs;
mod error;
mod gameloop;
mod input;
mod player;
mod rotation;
mod sdl_wrapper;
mod submap;
mod tilegrid;
mod view;

pub use config::*;
pub use defs::*;
pub use error::*;
pub use gameloop::*;
pub use input::*;
pub use player::*;
pub use rotation::*;
pub use sdl_wrapper::*;
pub use submap::*;
pub use tilegrid::*;
pub use view::*;
