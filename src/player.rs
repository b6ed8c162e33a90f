//! The player - grid position + facing, and the commands that change them.

use strum_macros::{Display, EnumIter};

use crate::defs::TILE_FLOOR;
use crate::{Orientation, TileGrid};

/// The discrete actions coming from the input layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, EnumIter)]
pub enum Command {
    TurnLeft,
    TurnRight,
    MoveForward,
    MoveBackward,
    Quit,
}

impl Command {
    /// Player-relative move vector, for the move commands.
    pub fn move_offset(self) -> Option<(i32, i32)> {
        match self {
            Command::MoveForward => Some((0, 1)),
            Command::MoveBackward => Some((0, -1)),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Player {
    pub x: i32,
    pub y: i32,
    pub orientation: Orientation,
}

impl Player {
    pub fn new(x: i32, y: i32, orientation: Orientation) -> Self {
        Self { x, y, orientation }
    }

    #[inline]
    pub fn turn_left(&mut self) {
        self.orientation = self.orientation.turned_left();
    }

    #[inline]
    pub fn turn_right(&mut self) {
        self.orientation = self.orientation.turned_right();
    }

    /// Move by a player-relative offset. Only floor tiles can be walked into;
    /// anything else leaves the player where it is and returns false.
    pub fn try_move(&mut self, grid: &TileGrid, local_dx: i32, local_dy: i32) -> bool {
        let (dx, dy) = self.orientation.rotate((local_dx, local_dy));
        let (nx, ny) = (self.x + dx, self.y + dy);
        let tile = grid.tile(nx, ny);
        if tile != TILE_FLOOR {
            tracing::trace!("Blocked move to ({nx}, {ny}) - tile {tile}");
            return false;
        }
        self.x = nx;
        self.y = ny;
        true
    }

    /// Apply a command. Returns true if the player's state changed.
    pub fn apply(&mut self, cmd: Command, grid: &TileGrid) -> bool {
        match cmd {
            Command::TurnLeft => {
                self.turn_left();
                true
            }
            Command::TurnRight => {
                self.turn_right();
                true
            }
            Command::MoveForward | Command::MoveBackward => {
                let (dx, dy) = cmd.move_offset().unwrap_or_default();
                self.try_move(grid, dx, dy)
            }
            Command::Quit => false,
        }
    }
}
