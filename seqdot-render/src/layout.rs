/*!
# Cell Layout

Maps grid cells to pixel spans. The image is never larger than the grid, so a
cell is at most one pixel wide; smaller cells share pixels. Span positions come
from running sums of the fractional cell size rather than per-cell rounding.
*/

use std::ops::Range;
use thiserror::Error;

/// Smallest painted cell extent, in pixels
pub const MIN_CELL_SIZE: f64 = 1.0;

#[derive(Debug, Error, PartialEq)]
pub enum RenderError {
    #[error("Target image size must be non-zero (got {width}x{height})")]
    ZeroTarget { width: u32, height: u32 },
}

pub type RenderResult<T> = Result<T, RenderError>;

/// Pixel geometry of a grid drawn into an image
#[derive(Debug, Clone, PartialEq)]
pub struct CellLayout {
    pub grid_width: usize,
    pub grid_height: usize,
    pub image_width: u32,
    pub image_height: u32,
    pub cell_width: f64,
    pub cell_height: f64,
}

impl CellLayout {
    /// Fit a `grid_width`×`grid_height` grid into the requested image size,
    /// clamping the request down to the grid size.
    pub fn new(grid_width: usize, grid_height: usize, target_width: u32, target_height: u32) -> RenderResult<Self> {
        if target_width == 0 || target_height == 0 {
            return Err(RenderError::ZeroTarget {
                width: target_width,
                height: target_height,
            });
        }

        let image_width = clamp_to_grid(target_width, grid_width);
        let image_height = clamp_to_grid(target_height, grid_height);
        if image_width < target_width || image_height < target_height {
            log::debug!(
                "Clamped image from {}x{} to {}x{} (no upscaling)",
                target_width,
                target_height,
                image_width,
                image_height
            );
        }

        Ok(Self {
            grid_width,
            grid_height,
            image_width,
            image_height,
            cell_width: image_width as f64 / grid_width as f64,
            cell_height: image_height as f64 / grid_height as f64,
        })
    }

    pub fn painted_width(&self) -> f64 {
        self.cell_width.max(MIN_CELL_SIZE)
    }

    pub fn painted_height(&self) -> f64 {
        self.cell_height.max(MIN_CELL_SIZE)
    }

    /// Horizontal pixel span of every grid column
    pub fn column_spans(&self) -> Vec<Range<u32>> {
        spans(self.grid_width, self.cell_width, self.painted_width(), self.image_width)
    }

    /// Vertical pixel span of every grid row
    pub fn row_spans(&self) -> Vec<Range<u32>> {
        spans(self.grid_height, self.cell_height, self.painted_height(), self.image_height)
    }
}

fn clamp_to_grid(target: u32, cells: usize) -> u32 {
    u32::try_from(cells).map_or(target, |cells| target.min(cells))
}

fn spans(count: usize, step: f64, painted: f64, limit: u32) -> Vec<Range<u32>> {
    let mut out = Vec::with_capacity(count);
    let mut offset = 0.0f64;
    for _ in 0..count {
        let start = (offset.floor() as u32).min(limit - 1);
        let end = ((offset + painted).floor() as u32).clamp(start + 1, limit);
        out.push(start..end);
        offset += step;
    }
    out
}
