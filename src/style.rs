//! Colors: the fill palette offered by the control surface and hex parsing.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb8 {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Uppercase `#RRGGBB`.
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgb8 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Rgb8 {
    type Err = ValidationError;

    /// Accepts `#RRGGBB` or `RRGGBB`, case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s.trim().trim_start_matches('#');
        let bad = || ValidationError::InvalidColor(s.to_string());
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(bad());
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| bad());
        Ok(Rgb8::new(channel(0)?, channel(2)?, channel(4)?))
    }
}

/// Default bar fill (`#18A0FB`).
pub const DEFAULT_COLOR: Rgb8 = Rgb8::new(0x18, 0xA0, 0xFB);
/// Grid line color used behind bar charts (`#E0E0E0`).
pub const GRID_COLOR: Rgb8 = Rgb8::new(0xE0, 0xE0, 0xE0);
pub const WHITE: Rgb8 = Rgb8::new(0xFF, 0xFF, 0xFF);
pub const BLACK: Rgb8 = Rgb8::new(0x00, 0x00, 0x00);

/// The three fill colors offered in the settings panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaletteColor {
    Blue,
    Black,
    White,
}

impl PaletteColor {
    pub const ALL: [PaletteColor; 3] = [PaletteColor::Blue, PaletteColor::Black, PaletteColor::White];

    pub fn rgb(&self) -> Rgb8 {
        match self {
            PaletteColor::Blue => DEFAULT_COLOR,
            PaletteColor::Black => BLACK,
            PaletteColor::White => WHITE,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            PaletteColor::Blue => "Blue",
            PaletteColor::Black => "Black",
            PaletteColor::White => "White",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hex_with_and_without_hash() {
        assert_eq!("#18A0FB".parse::<Rgb8>().unwrap(), DEFAULT_COLOR);
        assert_eq!("18a0fb".parse::<Rgb8>().unwrap(), DEFAULT_COLOR);
        assert!("#18A0F".parse::<Rgb8>().is_err());
        assert!("#GGGGGG".parse::<Rgb8>().is_err());
    }

    #[test]
    fn palette_round_trips_through_hex() {
        for c in PaletteColor::ALL {
            assert_eq!(c.rgb().to_hex().parse::<Rgb8>().unwrap(), c.rgb());
        }
        assert_eq!(PaletteColor::White.rgb().to_hex(), "#FFFFFF");
    }
}
