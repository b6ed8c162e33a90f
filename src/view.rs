//! ViewRenderer - turns the submap into a list of sprite blits.
//!
//! There is no real projection here: the sprite sheet already holds the walls
//! pre-rendered at each of the 4 visible depths, so a view is just a background
//! pair plus a few table lookups, painted from the farthest row to the nearest.
//!
//! Sprite sheet layout (64x64 cells, 32 pixel wide halves for the side walls):
//! ```text
//!   y \ x     0        32       64
//!   0     | L(3)   | R(3)   | front(3)  |   row 3 = farthest
//!   64    | L(2)   | R(2)   | front(2)  |
//!   128   | L(1)   | R(1)   | front(1)  |
//!   192   | L(0)   | R(0)   | front(0)  |   row 0 = nearest, also the backdrop
//!   256   | shade(3)        | shade(2)  |
//!   320   | shade(1)        | shade(0)  |
//! ```

use crate::defs::TILE_WALL;
use crate::submap::{Submap, SUBMAP_ROWS};
use crate::{GameResult, Orientation};

/// A rectangle on the sprite sheet or on the logical canvas.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SpriteRect {
    pub x: i32,
    pub y: i32,
    pub w: u32,
    pub h: u32,
}

impl SpriteRect {
    pub const fn new(x: i32, y: i32, w: u32, h: u32) -> Self {
        Self { x, y, w, h }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BlitKind {
    Backdrop,
    FloorShade,
    LeftWall,
    RightWall,
    FrontWall,
}

/// One sprite copy: `src` on the sprite sheet, `dst` on the canvas.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Blit {
    pub kind: BlitKind,
    /// Submap row this blit comes from, `None` for the background pair.
    pub row: Option<usize>,
    pub src: SpriteRect,
    pub dst: SpriteRect,
}

/// The draw primitive, provided by the platform layer.
pub trait Painter {
    fn clear(&mut self) -> GameResult<()>;
    fn blit(&mut self, src: SpriteRect, dst: SpriteRect) -> GameResult<()>;
}

//--------------------
//  Sprite tables

pub const BACKDROP_SRC: SpriteRect = SpriteRect::new(64, 192, 64, 64);

/// Floor/ceiling shading, indexed by orientation.
pub const FLOOR_SHADE_SRC: [SpriteRect; 4] = [
    SpriteRect::new(64, 320, 64, 64),
    SpriteRect::new(0, 320, 64, 64),
    SpriteRect::new(64, 256, 64, 64),
    SpriteRect::new(0, 256, 64, 64),
];

/// Left wall halves, indexed by submap row (0 = nearest).
pub const LEFT_WALL_SRC: [SpriteRect; SUBMAP_ROWS] = [
    SpriteRect::new(0, 192, 32, 64),
    SpriteRect::new(0, 128, 32, 64),
    SpriteRect::new(0, 64, 32, 64),
    SpriteRect::new(0, 0, 32, 64),
];

/// Right wall halves, indexed by submap row (0 = nearest).
pub const RIGHT_WALL_SRC: [SpriteRect; SUBMAP_ROWS] = [
    SpriteRect::new(32, 192, 32, 64),
    SpriteRect::new(32, 128, 32, 64),
    SpriteRect::new(32, 64, 32, 64),
    SpriteRect::new(32, 0, 32, 64),
];

/// Front walls, indexed by submap row (0 = nearest).
pub const FRONT_WALL_SRC: [SpriteRect; SUBMAP_ROWS] = [
    SpriteRect::new(64, 192, 64, 64),
    SpriteRect::new(64, 128, 64, 64),
    SpriteRect::new(64, 64, 64, 64),
    SpriteRect::new(64, 0, 64, 64),
];

// where the view lands on the canvas
pub const VIEW_DST: SpriteRect = SpriteRect::new(0, 0, 64, 64);
pub const LEFT_HALF_DST: SpriteRect = SpriteRect::new(0, 0, 32, 64);
pub const RIGHT_HALF_DST: SpriteRect = SpriteRect::new(32, 0, 32, 64);

//--------------------

/// Compose the whole view: background first, then the walls from the farthest row to the nearest.
pub fn compose_view(submap: &Submap, orientation: Orientation) -> Vec<Blit> {
    let mut blits = Vec::with_capacity(2 + 3 * SUBMAP_ROWS);
    blits.push(Blit {
        kind: BlitKind::Backdrop,
        row: None,
        src: BACKDROP_SRC,
        dst: VIEW_DST,
    });
    blits.push(Blit {
        kind: BlitKind::FloorShade,
        row: None,
        src: FLOOR_SHADE_SRC[orientation.turns() as usize],
        dst: VIEW_DST,
    });

    for row in (0..SUBMAP_ROWS).rev() {
        let [left, front, right] = submap.row(row);
        let walls = [
            (left, BlitKind::LeftWall, LEFT_WALL_SRC[row], LEFT_HALF_DST),
            (right, BlitKind::RightWall, RIGHT_WALL_SRC[row], RIGHT_HALF_DST),
            (front, BlitKind::FrontWall, FRONT_WALL_SRC[row], VIEW_DST),
        ];
        for (tile, kind, src, dst) in walls {
            if tile == TILE_WALL {
                blits.push(Blit {
                    kind,
                    row: Some(row),
                    src,
                    dst,
                });
            }
        }
    }

    blits
}

/// Clear the canvas and send the blits to the painter, in order.
pub fn paint_view(blits: &[Blit], painter: &mut dyn Painter) -> GameResult<()> {
    painter.clear()?;
    for blit in blits {
        painter.blit(blit.src, blit.dst)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GameError;

    fn all_walls() -> Submap {
        Submap::from_cells([1, 3, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1])
    }

    #[test]
    fn open_view_is_just_background() {
        let sub = Submap::from_cells([0, 3, 0, 0, 0, 0, 2, 2, 2, 0, 0, 0]);
        let blits = compose_view(&sub, Orientation::new(0));
        assert_eq!(2, blits.len());
        assert_eq!(BlitKind::Backdrop, blits[0].kind);
        assert_eq!(BACKDROP_SRC, blits[0].src);
        assert_eq!(BlitKind::FloorShade, blits[1].kind);
        assert_eq!(SpriteRect::new(64, 320, 64, 64), blits[1].src);
    }

    #[test]
    fn floor_shade_follows_orientation() {
        let sub = Submap::from_cells([0; 12]);
        let expected = [(64, 320), (0, 320), (64, 256), (0, 256)];
        for (turns, (x, y)) in expected.into_iter().enumerate() {
            let blits = compose_view(&sub, Orientation::new(turns as i32));
            assert_eq!(SpriteRect::new(x, y, 64, 64), blits[1].src);
            assert_eq!(VIEW_DST, blits[1].dst);
        }
    }

    #[test]
    fn depth_tables_use_reversed_sheet_rows() {
        for row in 0..SUBMAP_ROWS {
            let band = (3 - row as i32) * 64;
            assert_eq!(band, LEFT_WALL_SRC[row].y);
            assert_eq!(band, RIGHT_WALL_SRC[row].y);
            assert_eq!(band, FRONT_WALL_SRC[row].y);
        }
    }

    #[test]
    fn walls_are_painted_back_to_front() {
        let blits = compose_view(&all_walls(), Orientation::new(1));
        // background + 3 walls per row, except the player's own cell
        assert_eq!(2 + 4 * 3 - 1, blits.len());

        let rows: Vec<usize> = blits.iter().filter_map(|b| b.row).collect();
        assert!(rows.windows(2).all(|w| w[0] >= w[1]), "rows not far-to-near: {rows:?}");
        assert_eq!(Some(&3), rows.first());
        assert_eq!(Some(&0), rows.last());

        // left, right, front inside a row
        let far: Vec<BlitKind> = blits[2..5].iter().map(|b| b.kind).collect();
        assert_eq!(vec![BlitKind::LeftWall, BlitKind::RightWall, BlitKind::FrontWall], far);
        assert_eq!(FRONT_WALL_SRC[3], blits[4].src);
    }

    #[test]
    fn side_walls_cover_their_half() {
        let sub = Submap::from_cells([1, 3, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0]);
        let blits = compose_view(&sub, Orientation::new(0));
        assert_eq!(4, blits.len());
        assert_eq!(BlitKind::RightWall, blits[2].kind);
        assert_eq!(Some(1), blits[2].row);
        assert_eq!(SpriteRect::new(32, 128, 32, 64), blits[2].src);
        assert_eq!(RIGHT_HALF_DST, blits[2].dst);
        assert_eq!(BlitKind::LeftWall, blits[3].kind);
        assert_eq!(SpriteRect::new(0, 192, 32, 64), blits[3].src);
        assert_eq!(LEFT_HALF_DST, blits[3].dst);
    }

    #[test]
    fn only_wall_code_is_drawn() {
        let sub = Submap::from_cells([2, 3, 7, 2, 2, 2, 9, 0, 4, 2, 2, 2]);
        assert_eq!(2, compose_view(&sub, Orientation::new(3)).len());
    }

    #[test]
    fn composing_twice_gives_the_same_frame() {
        let sub = Submap::from_cells([1, 3, 0, 0, 1, 1, 1, 0, 1, 1, 1, 0]);
        let o = Orientation::new(2);
        assert_eq!(compose_view(&sub, o), compose_view(&sub, o));
    }

    struct FailingPainter(usize);

    impl Painter for FailingPainter {
        fn clear(&mut self) -> GameResult<()> {
            Ok(())
        }

        fn blit(&mut self, _src: SpriteRect, _dst: SpriteRect) -> GameResult<()> {
            self.0 += 1;
            Err(GameError::sdl("copy failed"))
        }
    }

    #[test]
    fn painter_errors_stop_the_frame() {
        let blits = compose_view(&all_walls(), Orientation::new(0));
        let mut painter = FailingPainter(0);
        assert!(matches!(paint_view(&blits, &mut painter), Err(GameError::Sdl(_))));
        assert_eq!(1, painter.0);
    }
}
