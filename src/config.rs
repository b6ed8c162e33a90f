//! Game configuration - where the assets are, the window and the starting spot.

use std::path::PathBuf;

use crate::{Orientation, Player, SdlConfiguration, SleepKind};

#[derive(Clone, Debug)]
pub struct GameConfig {
    pub title: String,
    pub map_path: PathBuf,
    pub sprite_sheet: PathBuf,
    pub window_width: u32,
    pub window_height: u32,
    pub start_x: i32,
    pub start_y: i32,
    pub start_facing: i32,
    pub sleep: SleepKind,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            title: String::from("HAIRDRESSER"),
            map_path: PathBuf::from("lvl/0"),
            sprite_sheet: PathBuf::from("img/dungeon.bmp"),
            window_width: 640,
            window_height: 480,
            start_x: 1,
            start_y: 1,
            start_facing: 1,
            sleep: SleepKind::SLEEP(1),
        }
    }
}

impl GameConfig {
    pub fn start_player(&self) -> Player {
        Player::new(self.start_x, self.start_y, Orientation::new(self.start_facing))
    }

    pub fn sdl_configuration(&self) -> SdlConfiguration {
        SdlConfiguration::new(
            &self.title,
            self.window_width,
            self.window_height,
            self.sprite_sheet.clone(),
            self.sleep,
        )
    }
}
