//! SDL2 platform layer: window, sprite sheet, the logical canvas and the frame loop.
//!
//! The game always draws into a fixed 160x120 target texture, which is then
//! scaled (keeping the aspect ratio) into whatever size the window has.

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use sdl2::event::Event;
use sdl2::pixels::{Color, PixelFormatEnum};
use sdl2::rect::Rect;
use sdl2::render::{Canvas, Texture, TextureCreator};
use sdl2::surface::Surface;
use sdl2::video::{Window, WindowContext};

use crate::*;

/// Colour used as transparent on the sprite sheet.
const COLOR_KEY: Color = Color::RGB(0x00, 0xFF, 0xFF);

/// What to do between frames.
#[allow(non_camel_case_types)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SleepKind {
    NONE,
    YIELD,
    SLEEP(u64),
}

pub struct SdlConfiguration {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub sprite_sheet: PathBuf,
    pub sleep_kind: SleepKind,
}

impl SdlConfiguration {
    pub fn new(title: &str, width: u32, height: u32, sprite_sheet: PathBuf, sleep_kind: SleepKind) -> Self {
        Self {
            title: title.to_string(),
            width,
            height,
            sprite_sheet,
            sleep_kind,
        }
    }
}

/// The game side of the frame loop.
pub trait GraphicsLoop {
    /// Returns false to stop the loop.
    fn handle_event(&mut self, event: &Event) -> bool;
    /// Returns false to stop the loop.
    fn update_state(&mut self, elapsed_time: f64) -> bool;
    /// Paint a complete frame on the logical canvas.
    fn paint(&self, painter: &mut dyn Painter) -> GameResult<()>;
}

/// Run the frame loop until the game asks to stop.
/// Any SDL failure is fatal and is returned as-is.
pub fn run_game_loop(sdl_config: &SdlConfiguration, gameloop: &mut dyn GraphicsLoop) -> GameResult<()> {
    let sdl = sdl2::init().map_err(GameError::sdl)?;
    let video = sdl.video().map_err(GameError::sdl)?;
    let window = video
        .window(&sdl_config.title, sdl_config.width, sdl_config.height)
        .position_centered()
        .resizable()
        .build()
        .map_err(GameError::sdl)?;
    let mut canvas = window
        .into_canvas()
        .software()
        .target_texture()
        .build()
        .map_err(GameError::sdl)?;
    canvas.set_draw_color(Color::RGB(0, 0, 0));

    let creator = canvas.texture_creator();
    let sheet = load_sprite_sheet(&creator, &sdl_config.sprite_sheet)?;
    let mut screen = creator
        .create_texture_target(PixelFormatEnum::RGBA8888, CANVAS_WIDTH, CANVAS_HEIGHT)
        .map_err(GameError::sdl)?;
    let mut event_pump = sdl.event_pump().map_err(GameError::sdl)?;
    tracing::info!("SDL ready: {}x{} window", sdl_config.width, sdl_config.height);

    let mut prev = Instant::now();
    'running: loop {
        for event in event_pump.poll_iter() {
            if !gameloop.handle_event(&event) {
                break 'running;
            }
        }

        let now = Instant::now();
        let elapsed = now.duration_since(prev).as_secs_f64();
        prev = now;
        if !gameloop.update_state(elapsed) {
            break 'running;
        }

        // draw the whole frame off-screen, then present it
        let mut frame_result = Ok(());
        canvas
            .with_texture_canvas(&mut screen, |target| {
                let mut painter = SdlPainter { canvas: target, sheet: &sheet };
                frame_result = gameloop.paint(&mut painter);
            })
            .map_err(GameError::sdl)?;
        frame_result?;
        present(&mut canvas, &screen)?;

        match sdl_config.sleep_kind {
            SleepKind::NONE => {}
            SleepKind::YIELD => std::thread::yield_now(),
            SleepKind::SLEEP(ms) => std::thread::sleep(Duration::from_millis(ms)),
        }
    }

    Ok(())
}

/// The letterbox rectangle (x, y, w, h) for the logical canvas in a window of the given size.
pub fn fit_canvas(win_width: u32, win_height: u32) -> (i32, i32, u32, u32) {
    let xs = win_width as f64 / CANVAS_WIDTH as f64;
    let ys = win_height as f64 / CANVAS_HEIGHT as f64;
    let scale = xs.min(ys);
    let w = (CANVAS_WIDTH as f64 * scale) as u32;
    let h = (CANVAS_HEIGHT as f64 * scale) as u32;
    let x = (win_width as i32 - w as i32) / 2;
    let y = (win_height as i32 - h as i32) / 2;
    (x, y, w, h)
}

//----------------------
//  Internal stuff

struct SdlPainter<'c, 't> {
    canvas: &'c mut Canvas<Window>,
    sheet: &'c Texture<'t>,
}

impl Painter for SdlPainter<'_, '_> {
    fn clear(&mut self) -> GameResult<()> {
        self.canvas.clear();
        Ok(())
    }

    fn blit(&mut self, src: SpriteRect, dst: SpriteRect) -> GameResult<()> {
        self.canvas
            .copy(self.sheet, Rect::from(src), Rect::from(dst))
            .map_err(GameError::sdl)
    }
}

impl From<SpriteRect> for Rect {
    fn from(r: SpriteRect) -> Self {
        Rect::new(r.x, r.y, r.w, r.h)
    }
}

fn load_sprite_sheet<'t>(creator: &'t TextureCreator<WindowContext>, path: &Path) -> GameResult<Texture<'t>> {
    let sheet_err = |msg: String| GameError::SpriteSheet {
        path: path.to_path_buf(),
        msg,
    };
    let mut surface = Surface::load_bmp(path).map_err(sheet_err)?;
    surface.set_color_key(true, COLOR_KEY).map_err(sheet_err)?;
    let texture = creator
        .create_texture_from_surface(&surface)
        .map_err(|e| sheet_err(e.to_string()))?;
    tracing::info!("Loaded sprite sheet {:?} ({}x{})", path, surface.width(), surface.height());
    Ok(texture)
}

fn present(canvas: &mut Canvas<Window>, screen: &Texture) -> GameResult<()> {
    canvas.set_draw_color(Color::RGB(0, 0, 0));
    canvas.clear();
    let (w, h) = canvas.window().size();
    let (x, y, rw, rh) = fit_canvas(w, h);
    canvas
        .copy(screen, None, Rect::new(x, y, rw, rh))
        .map_err(GameError::sdl)?;
    canvas.present();
    Ok(())
}
