//! Color buckets for weighted dotplots
//!
//! A `ColorChooser` maps a cell value to a display color through an ordered
//! list of `[start, end]` ranges inside `[0, 1]`. The first range containing
//! the value wins; values outside every range get the default color.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors raised by color parsing and range registration
#[derive(Debug, Error, PartialEq)]
pub enum ColorError {
    #[error("Color range [{start}, {end}] is outside [0, 1]")]
    OutOfBounds { start: f32, end: f32 },

    #[error("Invalid color '{0}', expected #RRGGBB")]
    InvalidHex(String),
}

pub type ColorResult<T> = Result<T, ColorError>;

/// 8-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const LIGHT_GREY: Rgb = Rgb::new(166, 166, 166);
    pub const DARK_GREY: Rgb = Rgb::new(75, 75, 75);
    pub const REGION_BLUE: Rgb = Rgb::new(47, 47, 203);

    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Parse a hex color like "#RRGGBB" (leading '#' optional)
    pub fn from_hex(s: &str) -> ColorResult<Self> {
        let hex = s.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(ColorError::InvalidHex(s.to_string()));
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16).map_err(|_| ColorError::InvalidHex(s.to_string()))
        };
        Ok(Self::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }

    pub fn to_array(self) -> [u8; 3] {
        [self.red, self.green, self.blue]
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.red, self.green, self.blue)
    }
}

impl FromStr for Rgb {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

/// A value interval mapped to a color
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorRange {
    pub start: f32,
    pub end: f32,
    pub color: Rgb,
}

impl ColorRange {
    /// Inclusive on both ends
    pub fn contains(&self, value: f32) -> bool {
        self.start <= value && value <= self.end
    }
}

/// Ordered color ranges plus a fallback color
#[derive(Debug, Clone, PartialEq)]
pub struct ColorChooser {
    ranges: Vec<ColorRange>,
    default_color: Rgb,
}

impl ColorChooser {
    pub fn new(default_color: Rgb) -> Self {
        Self {
            ranges: Vec::new(),
            default_color,
        }
    }

    /// Four grey levels from white (weak) to black (strongly conserved)
    pub fn conservation() -> Self {
        let mut chooser = Self::new(Rgb::BLACK);
        chooser.ranges = vec![
            ColorRange { start: 0.0, end: 0.25, color: Rgb::WHITE },
            ColorRange { start: 0.25, end: 0.5, color: Rgb::LIGHT_GREY },
            ColorRange { start: 0.5, end: 0.75, color: Rgb::DARK_GREY },
            ColorRange { start: 0.75, end: 1.0, color: Rgb::BLACK },
        ];
        chooser
    }

    /// Register a range. Ranges reaching below 0 or above 1 are rejected and
    /// leave the chooser unchanged.
    pub fn add_range(&mut self, start: f32, end: f32, color: Rgb) -> ColorResult<()> {
        if start < 0.0 || end > 1.0 {
            return Err(ColorError::OutOfBounds { start, end });
        }
        self.ranges.push(ColorRange { start, end, color });
        Ok(())
    }

    /// Index of the first range containing `value`, or `len()` for the default
    pub fn color_index_for(&self, value: f32) -> usize {
        self.ranges
            .iter()
            .position(|r| r.contains(value))
            .unwrap_or(self.ranges.len())
    }

    pub fn color_for(&self, value: f32) -> Rgb {
        self.ranges
            .iter()
            .find(|r| r.contains(value))
            .map(|r| r.color)
            .unwrap_or(self.default_color)
    }

    /// Range colors in order followed by the default color.
    ///
    /// Indexing with [`color_index_for`](Self::color_index_for) is always in bounds.
    pub fn palette(&self) -> Vec<Rgb> {
        self.ranges
            .iter()
            .map(|r| r.color)
            .chain(std::iter::once(self.default_color))
            .collect()
    }

    pub fn ranges(&self) -> &[ColorRange] {
        &self.ranges
    }

    pub fn default_color(&self) -> Rgb {
        self.default_color
    }

    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }
}

impl Default for ColorChooser {
    fn default() -> Self {
        Self::conservation()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_range_bounds() {
        let mut chooser = ColorChooser::new(Rgb::BLACK);
        assert!(chooser.add_range(0.0, 1.0, Rgb::WHITE).is_ok());
        assert_eq!(
            chooser.add_range(-0.1, 0.5, Rgb::WHITE),
            Err(ColorError::OutOfBounds { start: -0.1, end: 0.5 })
        );
        assert!(chooser.add_range(0.5, 1.5, Rgb::WHITE).is_err());
        assert_eq!(chooser.len(), 1);
    }

    #[test]
    fn test_first_match_wins_on_shared_boundary() {
        let mut chooser = ColorChooser::new(Rgb::BLACK);
        chooser.add_range(0.0, 0.25, Rgb::WHITE).unwrap();
        chooser.add_range(0.25, 0.5, Rgb::LIGHT_GREY).unwrap();

        // Both ranges include 0.25; insertion order decides
        assert_eq!(chooser.color_index_for(0.25), 0);
        assert_eq!(chooser.color_index_for(0.3), 1);
        assert_eq!(chooser.color_for(0.3), Rgb::LIGHT_GREY);
    }

    #[test]
    fn test_unmatched_value_uses_default() {
        let chooser = ColorChooser::conservation();
        assert_eq!(chooser.color_index_for(1.5), chooser.len());
        assert_eq!(chooser.color_for(1.5), Rgb::BLACK);
        assert_eq!(chooser.color_for(-0.5), chooser.default_color());
        assert_eq!(chooser.palette()[chooser.color_index_for(1.5)], Rgb::BLACK);
    }

    #[test]
    fn test_conservation_palette() {
        let chooser = ColorChooser::conservation();
        assert_eq!(chooser.color_for(0.1), Rgb::WHITE);
        assert_eq!(chooser.color_for(0.4), Rgb::LIGHT_GREY);
        assert_eq!(chooser.color_for(0.6), Rgb::DARK_GREY);
        assert_eq!(chooser.color_for(1.0), Rgb::BLACK);
        assert_eq!(chooser.palette().len(), 5);
    }

    #[test]
    fn test_hex_parsing() {
        assert_eq!(Rgb::from_hex("#2f2fcb").unwrap(), Rgb::REGION_BLUE);
        assert_eq!("a6a6a6".parse::<Rgb>().unwrap(), Rgb::LIGHT_GREY);
        assert!(Rgb::from_hex("#12345").is_err());
        assert!(Rgb::from_hex("#zzzzzz").is_err());
        assert_eq!(Rgb::REGION_BLUE.to_string(), "#2f2fcb");
    }
}
