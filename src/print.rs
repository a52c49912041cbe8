//! One-shot rendering for the `new` and `print` subcommands.

use anyhow::Result;

use crate::config::Config;
use crate::core::{Cubes, Net};
use crate::term::{encode_frame_into, CubeView, Palette};

/// Encode every cube in `cubes` side by side, wrapped to `width` columns.
pub fn render_cubes(cubes: &Cubes, palette: &Palette, config: &Config, width: u16) -> Result<Vec<u8>> {
    let view = CubeView::new(palette, config.display);
    let nets: Vec<Net> = cubes.iter().map(Net::from_cube).collect();
    let fb = view.render(&nets, width, &[]);

    let mut out = Vec::new();
    encode_frame_into(&fb, &mut out, "\n")?;
    Ok(out)
}
