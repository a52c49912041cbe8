//! Corner piece module - one physical corner cubie
//!
//! A corner carries three stickers painted in a fixed clockwise order and an
//! orientation recording how far that triple has been rotated inside its slot.

use crate::types::{Color, Direction, ORIENTATION_COUNT};

/// One of the eight corner cubies
///
/// The colour triple never changes after construction. Only the orientation
/// (always in `0..3`) is mutated by moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Corner {
    colors: [Color; 3],
    orientation: u8,
}

impl Corner {
    /// Create a corner in its canonical reading (orientation 0)
    pub const fn new(colors: [Color; 3]) -> Self {
        Self {
            colors,
            orientation: 0,
        }
    }

    /// Colours in clockwise paint order
    pub fn colors(&self) -> [Color; 3] {
        self.colors
    }

    /// Current orientation (0, 1 or 2)
    pub fn orientation(&self) -> u8 {
        self.orientation
    }

    /// Colour showing at sticker position `base` of the slot
    ///
    /// `base` is the layout constant of that sticker; the current orientation
    /// shifts which painted colour lands there.
    #[inline(always)]
    pub fn color_at(&self, base: u8) -> Color {
        let idx = (base + self.orientation) % ORIENTATION_COUNT;
        self.colors[idx as usize]
    }

    /// Rotate the triple by `steps` in `direction`
    ///
    /// The result is normalised into `0..3`; a counterclockwise rotation past
    /// zero wraps to 2 rather than going negative.
    pub fn twist(&mut self, steps: u8, direction: Direction) {
        let steps = i16::from(steps % ORIENTATION_COUNT);
        let delta = match direction {
            Direction::Clockwise => steps,
            Direction::CounterClockwise => -steps,
        };
        let next = (i16::from(self.orientation) + delta).rem_euclid(i16::from(ORIENTATION_COUNT));
        self.orientation = next as u8;
    }

    /// True if both corners carry the same three colours, in any order
    pub fn same_colors(&self, other: &Corner) -> bool {
        let mut a = self.colors;
        let mut b = other.colors;
        a.sort();
        b.sort();
        a == b
    }
}
