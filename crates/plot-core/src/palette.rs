// File: crates/plot-core/src/palette.rs
// Summary: Fixed colour palettes with validated entries and bounds-checked lookup.

use crate::error::{PlotError, Result};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self { Self { r, g, b } }

    /// Parse `#rrggbb` (leading `#` optional, case-insensitive).
    /// Returns `None` when the text is not a six-digit hex colour.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
        Some(Self { r: channel(0)?, g: channel(2)?, b: channel(4)? })
    }

    /// CSS `rgba(r,g,b,a)` form.
    pub fn rgba(&self, alpha: f64) -> String {
        format!("rgba({},{},{},{})", self.r, self.g, self.b, alpha)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Colour {
    pub hex: String,
    pub rgb: Rgb,
}

impl Colour {
    pub fn parse(hex: &str) -> Result<Self> {
        let rgb = Rgb::from_hex(hex).ok_or_else(|| PlotError::InvalidColour(hex.to_string()))?;
        Ok(Self { hex: hex.to_string(), rgb })
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Palette {
    name: String,
    colours: Vec<Colour>,
}

const STANDARD: [(&str, Rgb); 12] = [
    ("#5694CA", Rgb::new(0x56, 0x94, 0xCA)), // base blue
    ("#ABCBE5", Rgb::new(0xAB, 0xCB, 0xE5)), // base blue tint 1
    ("#DEEAF4", Rgb::new(0xDE, 0xEA, 0xF4)), // base blue tint 2
    ("#003078", Rgb::new(0x00, 0x30, 0x78)), // dark blue
    ("#8098BC", Rgb::new(0x80, 0x98, 0xBC)), // dark blue tint 1
    ("#CCD6E4", Rgb::new(0xCC, 0xD6, 0xE4)), // dark blue tint 2
    ("#B1B4B6", Rgb::new(0xB1, 0xB4, 0xB6)), // grey
    ("#D8DADB", Rgb::new(0xD8, 0xDA, 0xDB)), // grey tint 1
    ("#EFF0F0", Rgb::new(0xEF, 0xF0, 0xF0)), // grey tint 2
    ("#FFDD00", Rgb::new(0xFF, 0xDD, 0x00)), // yellow
    ("#d4351c", Rgb::new(0xD4, 0x35, 0x1C)), // red
    ("#009f56", Rgb::new(0x00, 0x9F, 0x56)), // green
];

const SCALE: [(&str, Rgb); 7] = [
    ("#e0e543", Rgb::new(0xE0, 0xE5, 0x43)),
    ("#74bb68", Rgb::new(0x74, 0xBB, 0x68)),
    ("#399384", Rgb::new(0x39, 0x93, 0x84)),
    ("#2067AB", Rgb::new(0x20, 0x67, 0xAB)),
    ("#12407F", Rgb::new(0x12, 0x40, 0x7F)),
    ("#53084A", Rgb::new(0x53, 0x08, 0x4A)),
    ("#2B0226", Rgb::new(0x2B, 0x02, 0x26)),
];

impl Palette {
    /// Build a palette from hex strings, rejecting any entry that does not parse.
    pub fn new(name: impl Into<String>, hexes: &[&str]) -> Result<Self> {
        let colours = hexes.iter().map(|h| Colour::parse(h)).collect::<Result<Vec<_>>>()?;
        Ok(Self { name: name.into(), colours })
    }

    fn from_table(name: &str, table: &[(&str, Rgb)]) -> Self {
        let colours = table
            .iter()
            .map(|&(hex, rgb)| Colour { hex: hex.to_string(), rgb })
            .collect();
        Self { name: name.to_string(), colours }
    }

    /// The twelve categorical series colours.
    pub fn standard() -> Self { Self::from_table("standard", &STANDARD) }

    /// Seven-step sequential scale, light to dark.
    pub fn scale() -> Self { Self::from_table("scale", &SCALE) }

    pub fn name(&self) -> &str { &self.name }

    pub fn len(&self) -> usize { self.colours.len() }

    pub fn is_empty(&self) -> bool { self.colours.is_empty() }

    pub fn colours(&self) -> &[Colour] { &self.colours }

    /// Colour at `index`; out-of-range indices are a configuration error.
    pub fn get(&self, index: usize) -> Result<&Colour> {
        self.colours.get(index).ok_or_else(|| {
            log::warn!("palette '{}' has no colour #{index}", self.name);
            PlotError::PaletteIndex { index, len: self.colours.len(), palette: self.name.clone() }
        })
    }
}

impl Default for Palette {
    fn default() -> Self { Self::standard() }
}

/// Return the built-in palette presets.
pub fn presets() -> Vec<Palette> {
    vec![Palette::standard(), Palette::scale()]
}

/// Find a preset by name (case-insensitive).
pub fn find(name: &str) -> Option<Palette> {
    presets().into_iter().find(|p| p.name.eq_ignore_ascii_case(name))
}
