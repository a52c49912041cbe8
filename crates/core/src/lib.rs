//! Core cube model - pure, deterministic, and testable
//!
//! This crate contains the corner-piece state of a 2x2x2 cube and the move
//! engine that turns it. It has **no dependencies** on terminal I/O, making it:
//!
//! - **Deterministic**: the same move sequence always yields the same state
//! - **Testable**: group laws are checked directly against the move tables
//! - **Portable**: usable from the interactive session, the CLI or a benchmark
//!
//! # Module Structure
//!
//! - [`piece`]: a corner cubie (colour triple + orientation)
//! - [`cube`]: the eight slots and all mutation on them
//! - [`moves`]: static swap/twist tables for the twelve quarter turns
//! - [`net`]: facelet layout used by renderers
//! - [`cubes`]: a set of independent cubes addressed by index
//!
//! # Invariants
//!
//! - Every slot always holds exactly one corner; moves only swap and twist
//! - Orientation stays in `0..3` after any sequence of moves
//! - A turn followed by its inverse restores the exact previous state
//! - Four identical quarter turns restore the exact previous state
//!
//! # Example
//!
//! ```
//! use pocket_cube_core::{Cube, Net};
//! use pocket_cube_types::{Face, Move};
//!
//! let mut cube = Cube::new();
//! cube.apply(Move::cw(Face::Right));
//! assert!(!cube.is_solved());
//!
//! cube.apply(Move::ccw(Face::Right));
//! assert!(cube.is_solved());
//! assert!(Net::from_cube(&cube).is_uniform());
//! ```

pub mod cube;
pub mod cubes;
pub mod error;
pub mod moves;
pub mod net;
pub mod piece;

pub use pocket_cube_types as types;

pub use cube::{Cube, SOLVED_CORNERS};
pub use cubes::Cubes;
pub use error::CubeError;
pub use moves::{move_spec, MoveSpec};
pub use net::{face_colors, face_origin, face_stickers, Net, Sticker};
pub use piece::Corner;
