//! Cube module - the eight corner slots and every mutation on them
//!
//! The cube owns a fixed array of corners by value. Moves never create or
//! destroy a piece: they exchange slot contents and adjust orientation.
//! Slot indices 0-3 form the left (orange) half, 4-7 the right (red) half.

use log::{debug, trace, warn};

use crate::moves::move_spec;
use crate::piece::Corner;
use crate::types::{Color, Direction, Move, HALF_SLOT_COUNT, SLOT_COUNT};
use crate::CubeError;

/// Canonical clockwise triples, one per slot, for the solved cube
///
/// Each triple starts with the Left/Right colour and continues clockwise as
/// seen from outside the corner.
pub const SOLVED_CORNERS: [[Color; 3]; SLOT_COUNT] = [
    [Color::Orange, Color::White, Color::Green],
    [Color::Orange, Color::Blue, Color::White],
    [Color::Orange, Color::Yellow, Color::Blue],
    [Color::Orange, Color::Green, Color::Yellow],
    [Color::Red, Color::Green, Color::White],
    [Color::Red, Color::White, Color::Blue],
    [Color::Red, Color::Blue, Color::Yellow],
    [Color::Red, Color::Yellow, Color::Green],
];

/// A 2x2x2 cube
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Cube {
    slots: [Corner; SLOT_COUNT],
}

impl Default for Cube {
    fn default() -> Self {
        Self::new()
    }
}

impl Cube {
    /// Create a solved cube
    pub fn new() -> Self {
        Self {
            slots: SOLVED_CORNERS.map(Corner::new),
        }
    }

    #[inline(always)]
    fn check_slot(slot: usize) -> Result<usize, CubeError> {
        if slot < SLOT_COUNT {
            Ok(slot)
        } else {
            Err(CubeError::InvalidSlot(slot))
        }
    }

    /// Corner currently held by `slot`
    pub fn piece_at(&self, slot: usize) -> Result<&Corner, CubeError> {
        Self::check_slot(slot).map(|s| &self.slots[s])
    }

    /// All slots in index order
    pub fn corners(&self) -> &[Corner; SLOT_COUNT] {
        &self.slots
    }

    /// Slots 0-3
    pub fn left_half(&self) -> &[Corner] {
        &self.slots[..HALF_SLOT_COUNT]
    }

    /// Slots 4-7
    pub fn right_half(&self) -> &[Corner] {
        &self.slots[HALF_SLOT_COUNT..]
    }

    /// Exchange the full contents (colours and orientation) of two slots
    pub fn swap(&mut self, a: usize, b: usize) -> Result<(), CubeError> {
        let a = Self::check_slot(a)?;
        let b = Self::check_slot(b)?;
        self.slots.swap(a, b);
        Ok(())
    }

    /// Rotate the corner in `slot` by `steps` in `direction`
    pub fn rotate(&mut self, slot: usize, steps: u8, direction: Direction) -> Result<(), CubeError> {
        let slot = Self::check_slot(slot)?;
        self.slots[slot].twist(steps, direction);
        Ok(())
    }

    /// Apply one quarter turn
    pub fn apply(&mut self, mv: Move) {
        let spec = move_spec(mv);
        #[cfg(debug_assertions)]
        let before = self.slots;

        for &(a, b) in &spec.swaps {
            debug_assert!(a < SLOT_COUNT && b < SLOT_COUNT);
            self.slots.swap(a, b);
        }
        for &(slot, steps) in &spec.twists {
            self.slots[slot].twist(steps, Direction::Clockwise);
        }

        #[cfg(debug_assertions)]
        self.debug_check_turn(&before, spec);
        debug!("applied {mv}");
        trace!("state after {mv}: {:?}", self.slots);
    }

    // Every piece lands where the table says with its colours intact, and
    // slots outside the turn keep their exact contents.
    #[cfg(debug_assertions)]
    fn debug_check_turn(&self, before: &[Corner; SLOT_COUNT], spec: &crate::moves::MoveSpec) {
        let moved = spec.affected_slots();
        for (slot, corner) in before.iter().enumerate() {
            match spec.destination(slot) {
                Some(dest) => debug_assert!(
                    corner.same_colors(&self.slots[dest]),
                    "piece from slot {slot} lost its colours on the way to {dest}"
                ),
                None => {
                    debug_assert!(!moved.contains(&slot), "slot {slot} turned in place");
                    debug_assert_eq!(*corner, self.slots[slot], "slot {slot} changed");
                }
            }
        }
    }

    /// Apply a move given in notation
    ///
    /// Returns `false` and leaves the cube untouched if `symbol` is not one of
    /// the twelve quarter turns.
    pub fn apply_symbol(&mut self, symbol: &str) -> bool {
        match Move::from_str(symbol) {
            Some(mv) => {
                self.apply(mv);
                true
            }
            None => {
                debug!("ignoring unknown move symbol {symbol:?}");
                false
            }
        }
    }

    /// Apply a whitespace separated sequence such as `"R U R' U'"`
    ///
    /// Unknown tokens are skipped. Returns how many moves were applied.
    pub fn apply_sequence(&mut self, sequence: &str) -> usize {
        let mut applied = 0;
        for token in sequence.split_whitespace() {
            if self.apply_symbol(token) {
                applied += 1;
            } else {
                warn!("skipping unknown move {token:?}");
            }
        }
        applied
    }

    /// True if the cube equals a freshly constructed one
    pub fn is_solved(&self) -> bool {
        self.slots
            .iter()
            .zip(SOLVED_CORNERS.iter())
            .all(|(corner, home)| corner.colors() == *home && corner.orientation() == 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Face;

    #[test]
    fn new_cube_is_solved() {
        let cube = Cube::new();
        assert!(cube.is_solved());
        for (slot, corner) in cube.corners().iter().enumerate() {
            assert_eq!(corner.colors(), SOLVED_CORNERS[slot]);
            assert_eq!(corner.orientation(), 0);
        }
    }

    #[test]
    fn halves_split_by_side_colour() {
        let cube = Cube::new();
        assert_eq!(cube.left_half().len(), 4);
        assert_eq!(cube.right_half().len(), 4);
        assert!(cube.left_half().iter().all(|c| c.colors()[0] == Color::Orange));
        assert!(cube.right_half().iter().all(|c| c.colors()[0] == Color::Red));
    }

    #[test]
    fn piece_at_rejects_out_of_range() {
        let cube = Cube::new();
        assert!(cube.piece_at(7).is_ok());
        assert_eq!(cube.piece_at(8), Err(CubeError::InvalidSlot(8)));
        assert_eq!(cube.piece_at(usize::MAX), Err(CubeError::InvalidSlot(usize::MAX)));
    }

    #[test]
    fn swap_exchanges_values_only() {
        let mut cube = Cube::new();
        cube.rotate(2, 1, Direction::Clockwise).unwrap();
        let before = cube.clone();

        cube.swap(2, 6).unwrap();
        assert_eq!(cube.piece_at(2).unwrap(), before.piece_at(6).unwrap());
        assert_eq!(cube.piece_at(6).unwrap(), before.piece_at(2).unwrap());
        assert_eq!(cube.piece_at(6).unwrap().orientation(), 1);
        for slot in [0, 1, 3, 4, 5, 7] {
            assert_eq!(cube.piece_at(slot).unwrap(), before.piece_at(slot).unwrap());
        }
    }

    #[test]
    fn swap_with_bad_slot_leaves_cube_untouched() {
        let mut cube = Cube::new();
        assert_eq!(cube.swap(0, 9), Err(CubeError::InvalidSlot(9)));
        assert!(cube.is_solved());
    }

    #[test]
    fn rotate_normalises_both_directions() {
        let mut cube = Cube::new();
        cube.rotate(0, 1, Direction::CounterClockwise).unwrap();
        assert_eq!(cube.piece_at(0).unwrap().orientation(), 2);
        cube.rotate(0, 4, Direction::Clockwise).unwrap();
        assert_eq!(cube.piece_at(0).unwrap().orientation(), 0);
        assert_eq!(cube.rotate(8, 1, Direction::Clockwise), Err(CubeError::InvalidSlot(8)));
    }

    #[test]
    fn front_turn_matches_table() {
        let mut cube = Cube::new();
        cube.apply(Move::cw(Face::Front));
        assert_eq!(cube.piece_at(4).unwrap().colors(), SOLVED_CORNERS[0]);
        assert_eq!(cube.piece_at(4).unwrap().orientation(), 1);
        assert_eq!(cube.piece_at(0).unwrap().colors(), SOLVED_CORNERS[3]);
        assert_eq!(cube.piece_at(0).unwrap().orientation(), 2);
        assert_eq!(cube.piece_at(1).unwrap(), Cube::new().piece_at(1).unwrap());
    }

    #[test]
    fn every_turn_leaves_the_other_half_alone() {
        for mv in Move::ALL {
            let mut cube = Cube::new();
            cube.apply(mv);
            let spec = move_spec(mv);
            let moved = spec.affected_slots();
            assert_eq!(moved.len(), 4, "{mv}");
            for slot in 0..SLOT_COUNT {
                match spec.destination(slot) {
                    Some(dest) => assert!(
                        cube.piece_at(dest).unwrap().same_colors(&Cube::new().slots[slot]),
                        "{mv}: slot {slot}"
                    ),
                    None => {
                        assert!(!moved.contains(&slot), "{mv}: slot {slot}");
                        assert_eq!(cube.slots[slot], Cube::new().slots[slot], "{mv}: slot {slot}");
                    }
                }
            }
        }
    }

    #[test]
    fn apply_symbol_ignores_unknown() {
        let mut cube = Cube::new();
        assert!(!cube.apply_symbol("X"));
        assert!(!cube.apply_symbol("f"));
        assert!(!cube.apply_symbol(""));
        assert!(cube.is_solved());
        assert!(cube.apply_symbol("U'"));
        assert!(!cube.is_solved());
    }

    #[test]
    fn apply_sequence_counts_applied_moves() {
        let mut cube = Cube::new();
        assert_eq!(cube.apply_sequence("R U  bogus R' U'"), 4);
        assert!(!cube.is_solved());
        assert_eq!(cube.apply_sequence("U R U' R'"), 4);
        assert!(cube.is_solved());
    }
}
