//! HAIRDRESSER - a tiny grid-based dungeon crawler viewer.
//! Main starting point.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use hairdresser::*;

#[derive(Parser)]
#[command(name = "hairdresser")]
#[command(about = "First-person viewer for a tiny grid dungeon", long_about = None)]
#[command(version)]
struct Cli {
    /// Map file: width byte, height byte, then the tiles row by row
    #[arg(long, default_value = "lvl/0")]
    map: PathBuf,

    /// Sprite sheet (BMP, cyan is transparent)
    #[arg(long, default_value = "img/dungeon.bmp")]
    sprites: PathBuf,

    #[arg(long, default_value_t = 1)]
    start_x: i32,

    #[arg(long, default_value_t = 1)]
    start_y: i32,

    /// Starting orientation, 0..3
    #[arg(long, default_value_t = 1)]
    facing: i32,

    #[arg(long, default_value_t = 640)]
    width: u32,

    #[arg(long, default_value_t = 480)]
    height: u32,

    /// Pause between frames; 0 just yields
    #[arg(long, default_value_t = 1)]
    sleep_ms: u64,
}

impl From<Cli> for GameConfig {
    fn from(cli: Cli) -> Self {
        Self {
            map_path: cli.map,
            sprite_sheet: cli.sprites,
            window_width: cli.width,
            window_height: cli.height,
            start_x: cli.start_x,
            start_y: cli.start_y,
            start_facing: cli.facing,
            sleep: match cli.sleep_ms {
                0 => SleepKind::YIELD,
                ms => SleepKind::SLEEP(ms),
            },
            ..Default::default()
        }
    }
}

fn main() -> Result<()> {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let config = GameConfig::from(Cli::parse());

    // load the map and place the player
    let grid = TileGrid::load(&config.map_path).context("failed to load the map")?;
    let mut gameloop = GameLoop::new(grid, config.start_player()).context("failed to start the game")?;

    // main game loop
    let sdl_config = config.sdl_configuration();
    let result = run_game_loop(&sdl_config, &mut gameloop);

    match result {
        Ok(_) => {
            tracing::info!("HAIRDRESSER finished OK :)");
            Ok(())
        }
        Err(err) => {
            tracing::error!("HAIRDRESSER failed: {err}");
            Err(err.into())
        }
    }
}
