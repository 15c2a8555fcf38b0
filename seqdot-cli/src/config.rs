//! Configuration handling for the seqdot CLI
//!
//! Supports loading configuration from seqdot.toml files with CLI argument overrides.

use anyhow::{Context, Result};
use seqdot_core::{ColorChooser, Rgb};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{CliError, CliResult};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub plot: PlotConfig,
    #[serde(default)]
    pub palette: PaletteConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlotConfig {
    /// Image width in pixels
    #[serde(default = "default_width")]
    pub width: u32,

    /// Image height in pixels
    #[serde(default = "default_height")]
    pub height: u32,

    /// Minimum diagonal run length
    #[serde(default = "default_min_length")]
    pub min_length: usize,

    /// Color for matches in unweighted plots
    #[serde(default = "default_match_color")]
    pub match_color: String,

    #[serde(default = "default_background")]
    pub background: String,

    /// Color for regions given without one
    #[serde(default = "default_region_color")]
    pub region_color: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaletteConfig {
    /// Color for weights outside every range
    #[serde(default = "default_palette_default")]
    pub default_color: String,

    /// Buckets checked in order, first match wins
    #[serde(default = "default_ranges")]
    pub ranges: Vec<RangeConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RangeConfig {
    pub start: f32,
    pub end: f32,
    pub color: String,
}

fn default_width() -> u32 { 2000 }
fn default_height() -> u32 { 2000 }
fn default_min_length() -> usize { 5 }
fn default_match_color() -> String { "#000000".to_string() }
fn default_background() -> String { "#ffffff".to_string() }
fn default_region_color() -> String { Rgb::REGION_BLUE.to_string() }
fn default_palette_default() -> String { "#000000".to_string() }

fn default_ranges() -> Vec<RangeConfig> {
    ColorChooser::conservation()
        .ranges()
        .iter()
        .map(|r| RangeConfig {
            start: r.start,
            end: r.end,
            color: r.color.to_string(),
        })
        .collect()
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            min_length: default_min_length(),
            match_color: default_match_color(),
            background: default_background(),
            region_color: default_region_color(),
        }
    }
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            default_color: default_palette_default(),
            ranges: default_ranges(),
        }
    }
}

fn parse_color(field: &str, value: &str) -> CliResult<Rgb> {
    Rgb::from_hex(value).map_err(|e| CliError::config(format!("{field}: {e}")))
}

impl Config {
    /// Load configuration from file or use defaults
    pub fn load(config_path: Option<&Path>) -> CliResult<Self> {
        let path = match config_path {
            Some(path) => path.to_path_buf(),
            None => {
                // Try to find seqdot.toml in current directory
                let default_path = PathBuf::from("seqdot.toml");
                if !default_path.exists() {
                    log::debug!("Using default configuration");
                    return Ok(Self::default());
                }
                default_path
            }
        };

        log::info!("Loading configuration from: {}", path.display());
        Self::load_from_file(&path).map_err(|e| CliError::config(format!("{e:#}")))
    }

    /// Load configuration from a specific TOML file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse configuration file: {}", path.display()))?;

        Ok(config)
    }

    pub fn match_color(&self) -> CliResult<Rgb> {
        parse_color("plot.match_color", &self.plot.match_color)
    }

    pub fn background(&self) -> CliResult<Rgb> {
        parse_color("plot.background", &self.plot.background)
    }

    pub fn region_color(&self) -> CliResult<Rgb> {
        parse_color("plot.region_color", &self.plot.region_color)
    }

    /// Build the weight palette from the configured ranges
    pub fn color_chooser(&self) -> CliResult<ColorChooser> {
        let mut chooser = ColorChooser::new(parse_color("palette.default_color", &self.palette.default_color)?);
        for (i, range) in self.palette.ranges.iter().enumerate() {
            let color = parse_color(&format!("palette.ranges[{i}].color"), &range.color)?;
            chooser
                .add_range(range.start, range.end, color)
                .map_err(|e| CliError::config(format!("palette.ranges[{i}]: {e}")))?;
        }
        Ok(chooser)
    }
}
