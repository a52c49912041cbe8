//! TerminalRenderer: flushes a framebuffer to a real terminal.
//!
//! The cube is drawn inline below the shell prompt rather than on an
//! alternate screen. Each redraw moves the cursor back to the top of the
//! previous frame, erases everything below it and prints the new frame.
//! After a resize the old frame may have rewrapped, so the whole screen is
//! cleared instead.

use std::io::{self, Write};

use anyhow::Result;
use log::debug;

use crossterm::{
    cursor,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
    terminal, QueueableCommand,
};

use crate::fb::{CellStyle, FrameBuffer, Rgb};

pub struct TerminalRenderer {
    stdout: io::Stdout,
    /// Rows printed by the last draw; the cursor sits just below them.
    drawn_rows: u16,
    active: bool,
    buf: Vec<u8>,
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            drawn_rows: 0,
            active: false,
            buf: Vec::with_capacity(4 * 1024),
        }
    }

    /// Switch to raw mode and hide the cursor.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.active = true;
        self.buf.clear();
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(cursor::DisableBlinking)?;
        self.flush_buf()?;
        debug!("terminal entered raw mode");
        Ok(())
    }

    /// Restore cursor and cooked mode. Safe to call more than once.
    pub fn exit(&mut self) -> Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;
        self.buf.clear();
        encode_restore_into(&mut self.buf)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        debug!("terminal restored");
        Ok(())
    }

    /// Clear the whole screen and draw the next frame from the top.
    pub fn reset(&mut self) -> Result<()> {
        self.buf.clear();
        encode_clear_into(&mut self.buf)?;
        self.flush_buf()?;
        self.drawn_rows = 0;
        Ok(())
    }

    /// Replace the previously drawn frame with `fb`.
    pub fn draw(&mut self, fb: &FrameBuffer) -> Result<()> {
        self.buf.clear();
        encode_redraw_into(fb, self.drawn_rows, &mut self.buf)?;
        self.flush_buf()?;
        self.drawn_rows = fb.height();
        Ok(())
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl Drop for TerminalRenderer {
    fn drop(&mut self) {
        let _ = self.exit();
    }
}

/// Undo `enter` without a renderer at hand.
///
/// Used from the panic hook and signal handler, where the renderer is owned
/// by a stack frame that will never unwind.
pub fn restore_terminal() -> Result<()> {
    let mut buf = Vec::new();
    encode_restore_into(&mut buf)?;
    let mut stdout = io::stdout();
    stdout.write_all(&buf)?;
    stdout.flush()?;
    terminal::disable_raw_mode()?;
    Ok(())
}

/// Escapes that reset colours and attributes and bring the cursor back.
pub fn encode_restore_into(out: &mut Vec<u8>) -> Result<()> {
    out.queue(ResetColor)?;
    out.queue(SetAttribute(Attribute::Reset))?;
    out.queue(cursor::EnableBlinking)?;
    out.queue(cursor::Show)?;
    Ok(())
}

/// Erase the screen and home the cursor.
pub fn encode_clear_into(out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    out.queue(cursor::MoveTo(0, 0))?;
    Ok(())
}

/// Encode an in-place redraw into `out`.
///
/// `prev_rows` is the height of the frame currently on screen, directly above
/// the cursor. Rows end in `\r\n` since output processing is off in raw mode.
pub fn encode_redraw_into(fb: &FrameBuffer, prev_rows: u16, out: &mut Vec<u8>) -> Result<()> {
    if prev_rows > 0 {
        out.queue(cursor::MoveUp(prev_rows))?;
    }
    out.queue(cursor::MoveToColumn(0))?;
    out.queue(terminal::Clear(terminal::ClearType::FromCursorDown))?;
    encode_frame_into(fb, out, "\r\n")
}

/// Encode every row of `fb`, each followed by `newline`.
///
/// Trailing unstyled blanks are dropped. Colour escapes are emitted only
/// where a cell carries a foreground colour, so a plain frame is bare text.
pub fn encode_frame_into(fb: &FrameBuffer, out: &mut Vec<u8>, newline: &str) -> Result<()> {
    for y in 0..fb.height() {
        let row = fb.row(y);
        let len = row
            .iter()
            .rposition(|c| c.ch != ' ' || !c.style.is_plain())
            .map_or(0, |i| i + 1);

        let mut current = CellStyle::PLAIN;
        for cell in &row[..len] {
            if cell.style != current {
                apply_style_into(out, cell.style)?;
                current = cell.style;
            }
            out.queue(Print(cell.ch))?;
        }
        if !current.is_plain() {
            apply_style_into(out, CellStyle::PLAIN)?;
        }
        out.queue(Print(newline))?;
    }
    Ok(())
}

/// Plain text of every row, trailing blanks trimmed.
pub fn frame_lines(fb: &FrameBuffer) -> Vec<String> {
    (0..fb.height()).map(|y| fb.row_text(y)).collect()
}

fn apply_style_into(out: &mut Vec<u8>, style: CellStyle) -> Result<()> {
    out.queue(SetAttribute(Attribute::Reset))?;
    match style.fg {
        Some(rgb) => {
            out.queue(SetForegroundColor(rgb_to_color(rgb)))?;
        }
        None => {
            out.queue(ResetColor)?;
        }
    }
    if style.bold {
        out.queue(SetAttribute(Attribute::Bold))?;
    }
    Ok(())
}

fn rgb_to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fb::Cell;

    #[test]
    fn plain_frame_encodes_to_bare_text() {
        let mut fb = FrameBuffer::new(4, 2);
        fb.put_str(0, 0, "AB", CellStyle::PLAIN);
        fb.put_str(1, 1, "C", CellStyle::PLAIN);

        let mut out = Vec::new();
        encode_frame_into(&fb, &mut out, "\n").unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "AB\n C\n");
    }

    #[test]
    fn coloured_cells_are_wrapped_in_escapes() {
        let mut fb = FrameBuffer::new(2, 1);
        let style = CellStyle::colored(Rgb::new(10, 20, 30));
        fb.set(0, 0, Cell { ch: '█', style });

        let mut out = Vec::new();
        encode_frame_into(&fb, &mut out, "\n").unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("\u{1b}[38;2;10;20;30m"));
        assert!(text.contains('█'));
        assert!(text.ends_with("\n"));
        // Colour is reset before the newline.
        let reset = text.rfind("\u{1b}[0m").unwrap();
        assert!(reset > text.find('█').unwrap());
    }

    #[test]
    fn redraw_moves_up_over_previous_frame() {
        let fb = FrameBuffer::new(1, 1);

        let mut first = Vec::new();
        encode_redraw_into(&fb, 0, &mut first).unwrap();
        assert!(!String::from_utf8(first).unwrap().contains("\u{1b}[6A"));

        let mut again = Vec::new();
        encode_redraw_into(&fb, 6, &mut again).unwrap();
        let text = String::from_utf8(again).unwrap();
        assert!(text.starts_with("\u{1b}[6A"));
        assert!(text.contains("\u{1b}[J"));
        assert!(text.ends_with("\r\n"));
    }

    #[test]
    fn restore_shows_cursor_and_resets_colour() {
        let mut out = Vec::new();
        encode_restore_into(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("\u{1b}[0m"));
        assert!(text.contains("\u{1b}[?12h"));
        assert!(text.ends_with("\u{1b}[?25h"));
    }

    #[test]
    fn clear_erases_screen_then_homes() {
        let mut out = Vec::new();
        encode_clear_into(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "\u{1b}[2J\u{1b}[1;1H");
    }
}
