//! Terminal input module (session-facing).
//!
//! This module is independent of any UI framework. It maps `crossterm` key
//! events into cube moves and keeps count of failed reads so a transient
//! terminal error does not end the session.

pub mod handler;
pub mod map;

pub use pocket_cube_types as types;

pub use handler::{Input, InputHandler};
pub use map::{handle_key_event, key_for_move, should_quit, InputAction};
