//! Move tables - the permutation and orientation data for every quarter turn
//!
//! Slot positions (white up, green front):
//!
//! | Slot | Position | Slot | Position |
//! |------|----------|------|----------|
//! | 0 | up-left-front | 4 | up-right-front |
//! | 1 | up-left-back | 5 | up-right-back |
//! | 2 | down-left-back | 6 | down-right-back |
//! | 3 | down-left-front | 7 | down-right-front |
//!
//! A quarter turn moves the four corners of one face around a 4-cycle
//! `a -> b -> c -> d -> a`. With value swaps that is `(a,b) (a,c) (a,d)`; the
//! counterclockwise turn issues the same swaps in reverse order.
//!
//! Orientation is measured against the Left/Right face, which is the first
//! colour of every corner triple. Turning L or R keeps that sticker on the
//! same axis, so those four moves carry no twist. F, B, U and D give two of
//! their corners +1 and the other two +2 (= -1).

use arrayvec::ArrayVec;

use crate::types::{Direction, Face, Move};

/// Static description of one quarter turn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveSpec {
    /// Slot swaps, applied in order
    pub swaps: [(usize, usize); 3],
    /// Clockwise orientation steps added to each slot after the swaps
    pub twists: [(usize, u8); 4],
}

impl MoveSpec {
    /// The four slots this turn touches, in table order
    pub fn affected_slots(&self) -> ArrayVec<usize, 4> {
        let mut slots = ArrayVec::new();
        for &(a, b) in &self.swaps {
            for s in [a, b] {
                if !slots.contains(&s) {
                    slots.push(s);
                }
            }
        }
        slots
    }

    /// True if the turn only permutes slots
    pub fn is_twist_free(&self) -> bool {
        self.twists.iter().all(|&(_, steps)| steps == 0)
    }

    /// Where the piece in `slot` ends up, or `None` if the turn leaves it alone
    pub fn destination(&self, slot: usize) -> Option<usize> {
        let mut perm = [0usize, 1, 2, 3, 4, 5, 6, 7];
        for &(a, b) in &self.swaps {
            perm.swap(a, b);
        }
        // perm[s] now holds the original slot whose piece lands in s.
        let dest = perm.iter().position(|&src| src == slot)?;
        (dest != slot).then_some(dest)
    }
}

const F_CW: MoveSpec = MoveSpec {
    swaps: [(0, 4), (0, 7), (0, 3)],
    twists: [(4, 1), (7, 2), (3, 1), (0, 2)],
};
const F_CCW: MoveSpec = MoveSpec {
    swaps: [(0, 3), (0, 7), (0, 4)],
    twists: [(0, 2), (4, 1), (7, 2), (3, 1)],
};

const B_CW: MoveSpec = MoveSpec {
    swaps: [(1, 2), (1, 6), (1, 5)],
    twists: [(2, 2), (6, 1), (5, 2), (1, 1)],
};
const B_CCW: MoveSpec = MoveSpec {
    swaps: [(1, 5), (1, 6), (1, 2)],
    twists: [(1, 1), (2, 2), (6, 1), (5, 2)],
};

const U_CW: MoveSpec = MoveSpec {
    swaps: [(0, 1), (0, 5), (0, 4)],
    twists: [(1, 2), (5, 1), (4, 2), (0, 1)],
};
const U_CCW: MoveSpec = MoveSpec {
    swaps: [(0, 4), (0, 5), (0, 1)],
    twists: [(0, 1), (1, 2), (5, 1), (4, 2)],
};

const D_CW: MoveSpec = MoveSpec {
    swaps: [(2, 3), (2, 7), (2, 6)],
    twists: [(3, 2), (7, 1), (6, 2), (2, 1)],
};
const D_CCW: MoveSpec = MoveSpec {
    swaps: [(2, 6), (2, 7), (2, 3)],
    twists: [(2, 1), (3, 2), (7, 1), (6, 2)],
};

const R_CW: MoveSpec = MoveSpec {
    swaps: [(4, 5), (4, 6), (4, 7)],
    twists: [(5, 0), (6, 0), (7, 0), (4, 0)],
};
const R_CCW: MoveSpec = MoveSpec {
    swaps: [(4, 7), (4, 6), (4, 5)],
    twists: [(4, 0), (5, 0), (6, 0), (7, 0)],
};

const L_CW: MoveSpec = MoveSpec {
    swaps: [(0, 3), (0, 2), (0, 1)],
    twists: [(3, 0), (2, 0), (1, 0), (0, 0)],
};
const L_CCW: MoveSpec = MoveSpec {
    swaps: [(0, 1), (0, 2), (0, 3)],
    twists: [(0, 0), (3, 0), (2, 0), (1, 0)],
};

/// Look up the table entry for a move
pub fn move_spec(mv: Move) -> &'static MoveSpec {
    match (mv.face, mv.direction) {
        (Face::Front, Direction::Clockwise) => &F_CW,
        (Face::Front, Direction::CounterClockwise) => &F_CCW,
        (Face::Back, Direction::Clockwise) => &B_CW,
        (Face::Back, Direction::CounterClockwise) => &B_CCW,
        (Face::Up, Direction::Clockwise) => &U_CW,
        (Face::Up, Direction::CounterClockwise) => &U_CCW,
        (Face::Down, Direction::Clockwise) => &D_CW,
        (Face::Down, Direction::CounterClockwise) => &D_CCW,
        (Face::Right, Direction::Clockwise) => &R_CW,
        (Face::Right, Direction::CounterClockwise) => &R_CCW,
        (Face::Left, Direction::Clockwise) => &L_CW,
        (Face::Left, Direction::CounterClockwise) => &L_CCW,
    }
}
