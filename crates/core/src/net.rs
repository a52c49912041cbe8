//! Facelet layout - which corner sticker shows on which face position
//!
//! The unfolded net places faces on a 4x3 grid:
//!
//! ```text
//!    U
//! L  F  R  B
//!    D
//! ```
//!
//! Each face lists its four stickers in reading order (top-left, top-right,
//! bottom-left, bottom-right) as `(slot, base)`. The displayed colour is
//! `triple[(base + orientation) % 3]` of the corner in that slot; `base` is a
//! property of the slot geometry and does not depend on the current state.

use crate::cube::Cube;
use crate::types::{Color, Face, STICKERS_PER_FACE};

/// One visible sticker: the slot it belongs to and its base offset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sticker {
    pub slot: usize,
    pub base: u8,
}

const fn st(slot: usize, base: u8) -> Sticker {
    Sticker { slot, base }
}

const UP: [Sticker; STICKERS_PER_FACE] = [st(1, 2), st(5, 1), st(0, 1), st(4, 2)];
const LEFT: [Sticker; STICKERS_PER_FACE] = [st(1, 0), st(0, 0), st(2, 0), st(3, 0)];
const FRONT: [Sticker; STICKERS_PER_FACE] = [st(0, 2), st(4, 1), st(3, 1), st(7, 2)];
const RIGHT: [Sticker; STICKERS_PER_FACE] = [st(4, 0), st(5, 0), st(7, 0), st(6, 0)];
const BACK: [Sticker; STICKERS_PER_FACE] = [st(5, 2), st(1, 1), st(6, 1), st(2, 2)];
const DOWN: [Sticker; STICKERS_PER_FACE] = [st(3, 2), st(7, 1), st(2, 1), st(6, 2)];

/// Sticker layout of a face, in reading order
pub fn face_stickers(face: Face) -> &'static [Sticker; STICKERS_PER_FACE] {
    match face {
        Face::Up => &UP,
        Face::Left => &LEFT,
        Face::Front => &FRONT,
        Face::Right => &RIGHT,
        Face::Back => &BACK,
        Face::Down => &DOWN,
    }
}

/// Position of a face on the net, in face units `(column, row)`
pub fn face_origin(face: Face) -> (u16, u16) {
    match face {
        Face::Up => (1, 0),
        Face::Left => (0, 1),
        Face::Front => (1, 1),
        Face::Right => (2, 1),
        Face::Back => (3, 1),
        Face::Down => (1, 2),
    }
}

/// Colours of a face in reading order
pub fn face_colors(cube: &Cube, face: Face) -> [Color; STICKERS_PER_FACE] {
    let corners = cube.corners();
    face_stickers(face).map(|s| corners[s.slot].color_at(s.base))
}

/// The 24 facelets of a cube, resolved to colours
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Net {
    faces: [[Color; STICKERS_PER_FACE]; 6],
}

impl Net {
    pub fn from_cube(cube: &Cube) -> Self {
        Self {
            faces: Face::ALL.map(|face| face_colors(cube, face)),
        }
    }

    // Index into `faces`, which follows `Face::ALL`.
    fn face_index(face: Face) -> usize {
        match face {
            Face::Front => 0,
            Face::Back => 1,
            Face::Up => 2,
            Face::Down => 3,
            Face::Right => 4,
            Face::Left => 5,
        }
    }

    /// Colours of `face` in reading order
    pub fn face(&self, face: Face) -> [Color; STICKERS_PER_FACE] {
        self.faces[Self::face_index(face)]
    }

    /// Colour at row `row` (0-1), column `col` (0-1) of `face`
    pub fn sticker(&self, face: Face, row: usize, col: usize) -> Color {
        self.face(face)[row * 2 + col]
    }

    /// True if every face shows a single colour
    pub fn is_uniform(&self) -> bool {
        self.faces.iter().all(|f| f.iter().all(|&c| c == f[0]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Move, SLOT_COUNT};

    #[test]
    fn each_slot_shows_three_stickers_with_distinct_bases() {
        let mut seen = [[false; 3]; SLOT_COUNT];
        for face in Face::ALL {
            for s in face_stickers(face) {
                assert!(s.base < 3);
                assert!(!seen[s.slot][s.base as usize], "slot {} base {} reused", s.slot, s.base);
                seen[s.slot][s.base as usize] = true;
            }
        }
        assert!(seen.iter().all(|bases| bases.iter().all(|&b| b)));
    }

    #[test]
    fn solved_net_is_uniform_with_home_colours() {
        let net = Net::from_cube(&Cube::new());
        assert!(net.is_uniform());
        for face in Face::ALL {
            assert_eq!(net.face(face)[0], face.home_color(), "{face:?}");
        }
    }

    #[test]
    fn up_turn_shifts_top_band() {
        let mut cube = Cube::new();
        cube.apply(Move::cw(Face::Up));
        let net = Net::from_cube(&cube);
        assert_eq!(net.face(Face::Up), [Color::White; 4]);
        assert_eq!(
            net.face(Face::Front),
            [Color::Red, Color::Red, Color::Green, Color::Green]
        );
        assert_eq!(
            net.face(Face::Left),
            [Color::Green, Color::Green, Color::Orange, Color::Orange]
        );
    }
}
