//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (cube model, key mapping, terminal rendering).
//!
//! # Cube Dimensions
//!
//! A 2x2x2 cube has no centre or edge pieces, only corners:
//!
//! - **Slots**: 8 corner positions (indexed 0-7)
//! - **Halves**: slots 0-3 sit on the Left (orange) side, 4-7 on the Right (red) side
//! - **Facelets**: 6 faces x 4 stickers = 24
//!
//! # Move Notation
//!
//! Quarter turns use standard notation, a face letter optionally followed by a
//! prime for the counterclockwise direction:
//!
//! | Symbol | Meaning |
//! |--------|---------|
//! | `F` / `F'` | Front clockwise / counterclockwise |
//! | `B` / `B'` | Back |
//! | `U` / `U'` | Up |
//! | `D` / `D'` | Down |
//! | `R` / `R'` | Right |
//! | `L` / `L'` | Left |
//!
//! # Examples
//!
//! ```
//! use pocket_cube_types::{Color, Direction, Face, Move, SLOT_COUNT};
//!
//! let mv = Move::from_str("R'").unwrap();
//! assert_eq!(mv.face, Face::Right);
//! assert_eq!(mv.direction, Direction::CounterClockwise);
//! assert_eq!(mv.inverse().as_str(), "R");
//!
//! assert_eq!(Color::from_letter('g'), Some(Color::Green));
//! assert_eq!(SLOT_COUNT, 8);
//! ```

/// Number of corner slots on a 2x2x2 cube
pub const SLOT_COUNT: usize = 8;

/// Slots per half (left half = 0..4, right half = 4..8)
pub const HALF_SLOT_COUNT: usize = SLOT_COUNT / 2;

/// Number of orientation states of a corner
pub const ORIENTATION_COUNT: u8 = 3;

/// Stickers on one face (2x2)
pub const STICKERS_PER_FACE: usize = 4;

/// Width of the unfolded net in faces (Left, Front, Right, Back)
pub const NET_FACE_COLUMNS: u16 = 4;

/// Height of the unfolded net in faces (Up, middle band, Down)
pub const NET_FACE_ROWS: u16 = 3;

/// Terminal width assumed when the size query fails
pub const FALLBACK_TERMINAL_WIDTH: u16 = 80;

/// Consecutive failed key reads tolerated before the session gives up
pub const MAX_CONSECUTIVE_READ_ERRORS: u32 = 10;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cube_dimension_constants() {
        assert_eq!(SLOT_COUNT, 8);
        assert_eq!(HALF_SLOT_COUNT, 4);
        assert_eq!(ORIENTATION_COUNT, 3);
        assert_eq!(STICKERS_PER_FACE * Face::ALL.len(), 24);
        assert_eq!(NET_FACE_COLUMNS * NET_FACE_ROWS, 12);
    }

    #[test]
    fn every_move_parses_back_from_its_notation() {
        for mv in Move::ALL {
            assert_eq!(Move::from_str(mv.as_str()), Some(mv));
        }
        assert_eq!(Move::from_str("X"), None);
        assert_eq!(Move::from_str("F2"), None);
        assert_eq!(Move::from_str(""), None);
    }

    #[test]
    fn inverse_flips_direction_only() {
        for mv in Move::ALL {
            let inv = mv.inverse();
            assert_eq!(inv.face, mv.face);
            assert_ne!(inv.direction, mv.direction);
            assert_eq!(inv.inverse(), mv);
        }
    }
}

/// The six sticker colours
///
/// Indices follow the physical paint order used by the solved corner table:
/// White 0, Orange 1, Green 2, Red 3, Blue 4, Yellow 5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Color {
    White,
    Orange,
    Green,
    Red,
    Blue,
    Yellow,
}

impl Color {
    /// All colours in index order
    pub const ALL: [Color; 6] = [
        Color::White,
        Color::Orange,
        Color::Green,
        Color::Red,
        Color::Blue,
        Color::Yellow,
    ];

    /// Stable numeric index (0-5)
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Single identifying letter used by plain rendering
    ///
    /// # Examples
    ///
    /// ```
    /// use pocket_cube_types::Color;
    ///
    /// assert_eq!(Color::White.letter(), 'W');
    /// assert_eq!(Color::Blue.letter(), 'B');
    /// ```
    pub fn letter(&self) -> char {
        match self {
            Color::White => 'W',
            Color::Orange => 'O',
            Color::Green => 'G',
            Color::Red => 'R',
            Color::Blue => 'B',
            Color::Yellow => 'Y',
        }
    }

    /// Parse a colour letter (case-insensitive)
    pub fn from_letter(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'W' => Some(Color::White),
            'O' => Some(Color::Orange),
            'G' => Some(Color::Green),
            'R' => Some(Color::Red),
            'B' => Some(Color::Blue),
            'Y' => Some(Color::Yellow),
            _ => None,
        }
    }
}

/// The six faces of the cube
///
/// With the cube held white-up, green-front:
/// - **Up**: white
/// - **Down**: yellow
/// - **Front**: green
/// - **Back**: blue
/// - **Right**: red
/// - **Left**: orange
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Face {
    Up,
    Down,
    Front,
    Back,
    Right,
    Left,
}

impl Face {
    /// All faces in notation order
    pub const ALL: [Face; 6] = [
        Face::Front,
        Face::Back,
        Face::Up,
        Face::Down,
        Face::Right,
        Face::Left,
    ];

    /// Notation letter
    pub fn letter(&self) -> char {
        match self {
            Face::Up => 'U',
            Face::Down => 'D',
            Face::Front => 'F',
            Face::Back => 'B',
            Face::Right => 'R',
            Face::Left => 'L',
        }
    }

    /// Parse a notation letter (case-insensitive)
    pub fn from_letter(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'U' => Some(Face::Up),
            'D' => Some(Face::Down),
            'F' => Some(Face::Front),
            'B' => Some(Face::Back),
            'R' => Some(Face::Right),
            'L' => Some(Face::Left),
            _ => None,
        }
    }

    /// Colour of this face on a solved cube
    pub fn home_color(&self) -> Color {
        match self {
            Face::Up => Color::White,
            Face::Down => Color::Yellow,
            Face::Front => Color::Green,
            Face::Back => Color::Blue,
            Face::Right => Color::Red,
            Face::Left => Color::Orange,
        }
    }
}

/// Turn direction, as seen looking straight at the turning face
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Clockwise,
    CounterClockwise,
}

impl Direction {
    pub fn reverse(&self) -> Self {
        match self {
            Direction::Clockwise => Direction::CounterClockwise,
            Direction::CounterClockwise => Direction::Clockwise,
        }
    }
}

/// A quarter turn of one face
///
/// These are the twelve symbols of the move alphabet. Both the key map and
/// the notation parser produce them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub face: Face,
    pub direction: Direction,
}

impl Move {
    /// All twelve quarter turns, each clockwise turn followed by its inverse
    pub const ALL: [Move; 12] = [
        Move::cw(Face::Front),
        Move::ccw(Face::Front),
        Move::cw(Face::Back),
        Move::ccw(Face::Back),
        Move::cw(Face::Up),
        Move::ccw(Face::Up),
        Move::cw(Face::Down),
        Move::ccw(Face::Down),
        Move::cw(Face::Right),
        Move::ccw(Face::Right),
        Move::cw(Face::Left),
        Move::ccw(Face::Left),
    ];

    pub const fn new(face: Face, direction: Direction) -> Self {
        Self { face, direction }
    }

    /// Clockwise quarter turn of `face`
    pub const fn cw(face: Face) -> Self {
        Self::new(face, Direction::Clockwise)
    }

    /// Counterclockwise quarter turn of `face`
    pub const fn ccw(face: Face) -> Self {
        Self::new(face, Direction::CounterClockwise)
    }

    /// The turn that undoes this one
    pub fn inverse(&self) -> Self {
        Self::new(self.face, self.direction.reverse())
    }

    /// Parse standard notation (`"F"`, `"F'"`, ...)
    ///
    /// Face letters are upper-case only; anything outside the twelve symbols
    /// yields `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use pocket_cube_types::{Face, Move};
    ///
    /// assert_eq!(Move::from_str("U"), Some(Move::cw(Face::Up)));
    /// assert_eq!(Move::from_str("L'"), Some(Move::ccw(Face::Left)));
    /// assert_eq!(Move::from_str("u"), None);
    /// assert_eq!(Move::from_str("M"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        let mut chars = s.chars();
        let letter = chars.next()?;
        if !letter.is_ascii_uppercase() {
            return None;
        }
        let face = Face::from_letter(letter)?;
        match (chars.next(), chars.next()) {
            (None, None) => Some(Move::cw(face)),
            (Some('\''), None) => Some(Move::ccw(face)),
            _ => None,
        }
    }

    /// Notation string
    pub fn as_str(&self) -> &'static str {
        match (self.face, self.direction) {
            (Face::Front, Direction::Clockwise) => "F",
            (Face::Front, Direction::CounterClockwise) => "F'",
            (Face::Back, Direction::Clockwise) => "B",
            (Face::Back, Direction::CounterClockwise) => "B'",
            (Face::Up, Direction::Clockwise) => "U",
            (Face::Up, Direction::CounterClockwise) => "U'",
            (Face::Down, Direction::Clockwise) => "D",
            (Face::Down, Direction::CounterClockwise) => "D'",
            (Face::Right, Direction::Clockwise) => "R",
            (Face::Right, Direction::CounterClockwise) => "R'",
            (Face::Left, Direction::Clockwise) => "L",
            (Face::Left, Direction::CounterClockwise) => "L'",
        }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a sticker is drawn
///
/// - **Plain**: the colour's letter, no escape sequences
/// - **Color**: a block glyph in the colour's RGB value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayMode {
    Plain,
    #[default]
    Color,
}
