//! Highlighted bands along one axis of the plot
//!
//! Matches whose coordinate on the region's axis falls in
//! `[start, start + length)` are drawn in the region's color.

use crate::color::{ColorError, Rgb};
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
}

#[derive(Debug, Error, PartialEq)]
pub enum RegionParseError {
    #[error("Expected AXIS:START:LENGTH[:#RRGGBB], got '{0}'")]
    Format(String),

    #[error("Unknown axis '{0}', expected x or y")]
    Axis(String),

    #[error("Invalid number '{0}'")]
    Number(String),

    #[error(transparent)]
    Color(#[from] ColorError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    pub axis: Axis,
    pub start: usize,
    pub length: usize,
    pub color: Rgb,
}

impl Region {
    pub fn new(axis: Axis, start: usize, length: usize, color: Rgb) -> Self {
        Self { axis, start, length, color }
    }

    /// Whether cell `(x, y)` lies inside the band
    pub fn contains(&self, x: usize, y: usize) -> bool {
        let pos = match self.axis {
            Axis::X => x,
            Axis::Y => y,
        };
        pos >= self.start && pos - self.start < self.length
    }
}

/// First region covering `(x, y)`, in registration order
pub fn region_for(regions: &[Region], x: usize, y: usize) -> Option<&Region> {
    regions.iter().find(|r| r.contains(x, y))
}

impl Region {
    /// Parses `x:100:50` or `y:0:20:#ff0000`, using `fallback` when no color is given
    pub fn parse_with_color(s: &str, fallback: Rgb) -> Result<Self, RegionParseError> {
        let parts: Vec<&str> = s.split(':').collect();
        if parts.len() != 3 && parts.len() != 4 {
            return Err(RegionParseError::Format(s.to_string()));
        }

        let axis = match parts[0].trim().to_ascii_lowercase().as_str() {
            "x" => Axis::X,
            "y" => Axis::Y,
            other => return Err(RegionParseError::Axis(other.to_string())),
        };
        let number = |text: &str| {
            text.trim()
                .parse::<usize>()
                .map_err(|_| RegionParseError::Number(text.to_string()))
        };
        let start = number(parts[1])?;
        let length = number(parts[2])?;
        let color = match parts.get(3) {
            Some(hex) => Rgb::from_hex(hex)?,
            None => fallback,
        };

        Ok(Region::new(axis, start, length, color))
    }
}

impl FromStr for Region {
    type Err = RegionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Region::parse_with_color(s, Rgb::REGION_BLUE)
    }
}
