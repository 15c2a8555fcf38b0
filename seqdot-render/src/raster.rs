/*!
# Dotplot Rasterizer

Paints every positive grid cell as a filled rectangle. Binary mode uses one
foreground color; continuous mode resolves each cell's color bucket through a
`ColorChooser`. Matches inside a highlighted region take the region's color.
*/

use std::ops::Range;

use image::{Rgb as Pixel, RgbImage};
use seqdot_core::region::region_for;
use seqdot_core::{ColorChooser, Grid, Region, Rgb};

use crate::layout::{CellLayout, RenderResult};

/// Anything cells can be painted onto
pub trait Surface {
    fn fill_rect(&mut self, xs: Range<u32>, ys: Range<u32>, color: Rgb);
}

impl Surface for RgbImage {
    fn fill_rect(&mut self, xs: Range<u32>, ys: Range<u32>, color: Rgb) {
        let pixel = Pixel(color.to_array());
        for y in ys.start..ys.end.min(self.height()) {
            for x in xs.start..xs.end.min(self.width()) {
                self.put_pixel(x, y, pixel);
            }
        }
    }
}

/// How cell values turn into colors
#[derive(Debug, Clone, Copy)]
pub enum ColorMode<'a> {
    /// Every match in the foreground color
    Binary,
    /// Matches colored by value bucket
    Continuous(&'a ColorChooser),
}

/// Rendering configuration
#[derive(Debug, Clone)]
pub struct RenderConfig {
    pub width: u32,
    pub height: u32,
    pub background: Rgb,
    pub match_color: Rgb,
    pub regions: Vec<Region>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 2000,
            height: 2000,
            background: Rgb::WHITE,
            match_color: Rgb::BLACK,
            regions: Vec::new(),
        }
    }
}

pub struct Renderer {
    config: RenderConfig,
}

impl Renderer {
    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Highlight matches inside `region`; earlier regions take precedence
    pub fn with_region(mut self, region: Region) -> Self {
        self.config.regions.push(region);
        self
    }

    pub fn layout(&self, grid: &Grid) -> RenderResult<CellLayout> {
        CellLayout::new(grid.width(), grid.height(), self.config.width, self.config.height)
    }

    /// Paint the positive cells of `grid` onto `surface`.
    ///
    /// The surface is expected to be `layout.image_width`×`layout.image_height`
    /// and already filled with the background.
    pub fn paint<S: Surface>(&self, grid: &Grid, mode: ColorMode<'_>, layout: &CellLayout, surface: &mut S) -> usize {
        let columns = layout.column_spans();
        let rows = layout.row_spans();
        let palette = match mode {
            ColorMode::Continuous(chooser) => chooser.palette(),
            ColorMode::Binary => Vec::new(),
        };

        let mut painted = 0usize;
        for (x, y, value) in grid.iter() {
            if value <= 0.0 {
                continue;
            }
            let color = match region_for(&self.config.regions, x, y) {
                Some(region) => region.color,
                None => match mode {
                    ColorMode::Binary => self.config.match_color,
                    ColorMode::Continuous(chooser) => palette[chooser.color_index_for(value)],
                },
            };
            surface.fill_rect(columns[x].clone(), rows[y].clone(), color);
            painted += 1;
        }
        painted
    }

    pub fn render(&self, grid: &Grid, mode: ColorMode<'_>) -> RenderResult<RgbImage> {
        let layout = self.layout(grid)?;
        let mut image = RgbImage::from_pixel(
            layout.image_width,
            layout.image_height,
            Pixel(self.config.background.to_array()),
        );
        let painted = self.paint(grid, mode, &layout, &mut image);
        log::debug!(
            "Rasterized {} cells into {}x{} image",
            painted,
            layout.image_width,
            layout.image_height
        );
        Ok(image)
    }

    pub fn render_binary(&self, grid: &Grid) -> RenderResult<RgbImage> {
        self.render(grid, ColorMode::Binary)
    }

    pub fn render_continuous(&self, grid: &Grid, chooser: &ColorChooser) -> RenderResult<RgbImage> {
        self.render(grid, ColorMode::Continuous(chooser))
    }
}
