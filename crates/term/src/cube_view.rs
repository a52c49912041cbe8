//! CubeView: maps cube nets into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{face_origin, Net};
use crate::fb::{CellStyle, FrameBuffer};
use crate::palette::Palette;
use crate::types::{DisplayMode, Face, NET_FACE_COLUMNS, NET_FACE_ROWS};

/// Glyph used for a sticker in colour mode.
const BLOCK: char = '█';

/// Lays out one or more nets, wrapping to the available width.
pub struct CubeView<'a> {
    palette: &'a Palette,
    mode: DisplayMode,
    /// Blank columns between neighbouring cubes.
    cube_gap: u16,
    /// Blank row above the first band of cubes.
    top_margin: bool,
}

impl<'a> CubeView<'a> {
    pub fn new(palette: &'a Palette, mode: DisplayMode) -> Self {
        Self {
            palette,
            mode,
            cube_gap: 2,
            top_margin: false,
        }
    }

    pub fn with_top_margin(mut self, top_margin: bool) -> Self {
        self.top_margin = top_margin;
        self
    }

    /// Sticker width in terminal columns.
    ///
    /// Colour blocks are drawn two wide to compensate for the glyph aspect
    /// ratio; letters stay one wide.
    fn sticker_w(&self) -> u16 {
        match self.mode {
            DisplayMode::Plain => 1,
            DisplayMode::Color => 2,
        }
    }

    fn face_stride(&self) -> u16 {
        self.sticker_w() * 2 + 1
    }

    /// Size of a single net in cells.
    pub fn net_size(&self) -> (u16, u16) {
        (NET_FACE_COLUMNS * self.face_stride() - 1, NET_FACE_ROWS * 2)
    }

    /// How many nets fit side by side in `width` columns (at least one).
    pub fn nets_per_band(&self, width: u16) -> u16 {
        let (net_w, _) = self.net_size();
        ((width.saturating_add(self.cube_gap)) / (net_w + self.cube_gap)).max(1)
    }

    /// Render `nets` followed by `footer` lines.
    ///
    /// Nets wrap into bands separated by a blank row. The footer starts after
    /// one blank row below the last band.
    pub fn render(&self, nets: &[Net], width: u16, footer: &[&str]) -> FrameBuffer {
        let (net_w, net_h) = self.net_size();
        let per_band = self.nets_per_band(width) as usize;
        let bands = nets.len().div_ceil(per_band) as u16;
        let in_first_band = nets.len().min(per_band) as u16;

        let nets_w = if in_first_band == 0 {
            0
        } else {
            in_first_band * net_w + (in_first_band - 1) * self.cube_gap
        };
        let footer_w = footer
            .iter()
            .map(|l| l.chars().count() as u16)
            .max()
            .unwrap_or(0);

        let top = u16::from(self.top_margin);
        let nets_h = if bands == 0 {
            0
        } else {
            bands * net_h + (bands - 1)
        };
        let footer_h = if footer.is_empty() {
            0
        } else {
            footer.len() as u16 + u16::from(bands > 0)
        };

        let mut fb = FrameBuffer::new(nets_w.max(footer_w), top + nets_h + footer_h);

        for (i, net) in nets.iter().enumerate() {
            let band = (i / per_band) as u16;
            let col = (i % per_band) as u16;
            let x = col * (net_w + self.cube_gap);
            let y = top + band * (net_h + 1);
            self.draw_net(&mut fb, net, x, y);
        }

        let mut y = top + nets_h + u16::from(bands > 0);
        for line in footer {
            fb.put_str(0, y, line, CellStyle::PLAIN);
            y += 1;
        }
        fb
    }

    /// Draw one net with its top-left corner at `(x, y)`.
    pub fn draw_net(&self, fb: &mut FrameBuffer, net: &Net, x: u16, y: u16) {
        let sw = self.sticker_w();
        for face in Face::ALL {
            let (fx, fy) = face_origin(face);
            let face_x = x + fx * self.face_stride();
            let face_y = y + fy * 2;
            for row in 0..2u16 {
                for col in 0..2u16 {
                    let color = net.sticker(face, row as usize, col as usize);
                    let sx = face_x + col * sw;
                    let sy = face_y + row;
                    match self.mode {
                        DisplayMode::Plain => {
                            fb.put_char(sx, sy, color.letter(), CellStyle::PLAIN)
                        }
                        DisplayMode::Color => {
                            let style = CellStyle::colored(self.palette.rgb(color));
                            fb.fill_rect(sx, sy, sw, 1, BLOCK, style);
                        }
                    }
                }
            }
        }
    }
}
