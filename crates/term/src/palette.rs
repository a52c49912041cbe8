//! Colour names, opposite pairs and display RGB values.
//!
//! Built once at startup and shared read-only with the view.

use crate::fb::Rgb;
use crate::types::Color;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    names: [&'static str; 6],
    opposites: [Color; 6],
    rgb: [Rgb; 6],
}

impl Default for Palette {
    fn default() -> Self {
        Self::standard()
    }
}

impl Palette {
    /// Western colour scheme: white/yellow, orange/red, green/blue.
    pub fn standard() -> Self {
        Self {
            names: ["white", "orange", "green", "red", "blue", "yellow"],
            opposites: [
                Color::Yellow,
                Color::Red,
                Color::Blue,
                Color::Orange,
                Color::Green,
                Color::White,
            ],
            rgb: [
                Rgb::new(240, 240, 240),
                Rgb::new(255, 140, 0),
                Rgb::new(0, 170, 70),
                Rgb::new(210, 30, 30),
                Rgb::new(30, 80, 220),
                Rgb::new(250, 220, 0),
            ],
        }
    }

    pub fn name(&self, color: Color) -> &'static str {
        self.names[color.index()]
    }

    pub fn opposite(&self, color: Color) -> Color {
        self.opposites[color.index()]
    }

    pub fn opposite_name(&self, color: Color) -> &'static str {
        self.name(self.opposite(color))
    }

    pub fn rgb(&self, color: Color) -> Rgb {
        self.rgb[color.index()]
    }

    /// One-line summary of the three opposite pairs, e.g. `white/yellow`.
    pub fn axis_legend(&self) -> String {
        [Color::White, Color::Green, Color::Orange]
            .iter()
            .map(|&c| format!("{}/{}", self.name(c), self.opposite_name(c)))
            .collect::<Vec<_>>()
            .join("  ")
    }
}
