//! Integer rotations by multiples of 90 degrees, and the player's facing.
//!
//! The same rotation is used in both directions of the view math:
//! to turn a window cell (relative to the player) into a map offset,
//! and to turn a player-relative move into a map move.

/// Rotate an offset `turns` times, each step mapping `(dx, dy)` to `(dy, -dx)`.
/// The turn count is taken modulo 4, so negative counts are fine.
pub fn rotate(offset: (i32, i32), turns: i32) -> (i32, i32) {
    let (mut dx, mut dy) = offset;
    for _ in 0..turns.rem_euclid(4) {
        (dx, dy) = (dy, -dx);
    }
    (dx, dy)
}

/// Facing direction, always normalized to `0..4`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Orientation(u8);

impl Orientation {
    #[inline]
    pub fn new(turns: i32) -> Self {
        Self(turns.rem_euclid(4) as u8)
    }

    #[inline]
    pub fn turns(self) -> u8 {
        self.0
    }

    #[inline]
    pub fn turned_left(self) -> Self {
        Self::new(self.0 as i32 - 1)
    }

    #[inline]
    pub fn turned_right(self) -> Self {
        Self::new(self.0 as i32 + 1)
    }

    /// Rotate an offset from the player's frame into the map frame.
    #[inline]
    pub fn rotate(self, offset: (i32, i32)) -> (i32, i32) {
        rotate(offset, self.0 as i32)
    }
}
