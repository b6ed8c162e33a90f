//! Main game loop.
//! Also acts as the simulation state: owns the map, the player and the current submap.

use crate::*;
use sdl2::event::Event;

pub struct GameLoop {
    grid: TileGrid,
    player: Player,
    submap: Submap,
    inputs: InputManager,
}

impl GameLoop {
    /// The player must start on a floor tile.
    pub fn new(grid: TileGrid, player: Player) -> GameResult<Self> {
        let tile = grid.tile(player.x, player.y);
        if tile != TILE_FLOOR {
            return Err(GameError::StartNotPassable {
                x: player.x,
                y: player.y,
                tile,
            });
        }

        tracing::debug!("Map:\n{grid}");
        let submap = Submap::extract(&grid, player.x, player.y, player.orientation);
        tracing::debug!("Submap:\n{submap}");

        Ok(Self {
            grid,
            player,
            submap,
            inputs: InputManager::new(),
        })
    }

    #[inline]
    pub fn grid(&self) -> &TileGrid {
        &self.grid
    }

    #[inline]
    pub fn player(&self) -> &Player {
        &self.player
    }

    #[inline]
    pub fn submap(&self) -> &Submap {
        &self.submap
    }

    /// Apply one command. Returns false when the game should stop.
    pub fn apply_command(&mut self, cmd: Command) -> bool {
        if cmd == Command::Quit {
            tracing::info!("Quit requested");
            return false;
        }

        if self.player.apply(cmd, &self.grid) {
            let p = &self.player;
            self.submap = Submap::extract(&self.grid, p.x, p.y, p.orientation);
            tracing::debug!("{cmd} -> at ({}, {}) facing {}\n{}", p.x, p.y, p.orientation.turns(), self.submap);
        }
        true
    }

    /// All the blits for the current view, in paint order.
    pub fn compose(&self) -> Vec<Blit> {
        compose_view(&self.submap, self.player.orientation)
    }
}

impl GraphicsLoop for GameLoop {
    fn handle_event(&mut self, event: &Event) -> bool {
        self.inputs.handle_event(event);
        true
    }

    fn update_state(&mut self, _elapsed_time: f64) -> bool {
        while let Some(cmd) = self.inputs.next_command() {
            if !self.apply_command(cmd) {
                return false;
            }
        }
        true
    }

    fn paint(&self, painter: &mut dyn Painter) -> GameResult<()> {
        paint_view(&self.compose(), painter)
    }
}
