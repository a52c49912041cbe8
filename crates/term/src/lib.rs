//! Terminal rendering for the pocket cube.
//!
//! A small rendering layer: cube nets are drawn into a framebuffer, and the
//! framebuffer is either encoded once to stdout (`print`) or redrawn in place
//! in raw mode (`play`).
//!
//! Goals:
//! - Keep `core` free of terminal concerns
//! - Share one layout between letter and colour-block output
//! - Restore the terminal on every exit path

pub mod cube_view;
pub mod fb;
pub mod palette;
pub mod renderer;

pub use pocket_cube_core as core;
pub use pocket_cube_types as types;

pub use cube_view::CubeView;
pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use palette::Palette;
pub use renderer::{
    encode_clear_into, encode_frame_into, encode_redraw_into, encode_restore_into, frame_lines,
    restore_terminal, TerminalRenderer,
};

/// Current terminal width, or the fallback when the size query fails.
pub fn terminal_width() -> u16 {
    match crossterm::terminal::size() {
        Ok((w, _)) if w > 0 => w,
        _ => types::FALLBACK_TERMINAL_WIDTH,
    }
}
