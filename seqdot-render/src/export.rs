/*!
# Image Export

PNG output for raster images and an SVG builder that paints the same cell
layout as vector rectangles. `save` picks the format from the file extension.
*/

use std::fs::File;
use std::io::{BufWriter, Write};
#[cfg(feature = "vector-export")]
use std::ops::Range;
use std::path::{Path, PathBuf};

use image::{ImageFormat, RgbImage};
use seqdot_core::Grid;
use thiserror::Error;

use crate::layout::RenderError;
use crate::raster::{ColorMode, Renderer};
#[cfg(feature = "vector-export")]
use crate::{layout::CellLayout, raster::Surface};
#[cfg(feature = "vector-export")]
use seqdot_core::Rgb;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Can't create {}: {source}", .path.display())]
    OutputUnwritable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Image encoding failed: {0}")]
    Encode(#[from] image::ImageError),

    #[error(transparent)]
    Render(#[from] RenderError),
}

pub type ExportResult<T> = Result<T, ExportError>;

fn create_output(path: &Path) -> ExportResult<BufWriter<File>> {
    File::create(path)
        .map(BufWriter::new)
        .map_err(|source| ExportError::OutputUnwritable {
            path: path.to_path_buf(),
            source,
        })
}

/// Encode `image` as PNG at `path`
pub fn write_png<P: AsRef<Path>>(image: &RgbImage, path: P) -> ExportResult<()> {
    let path = path.as_ref();
    let mut out = create_output(path)?;
    image.write_to(&mut out, ImageFormat::Png)?;
    out.flush().map_err(|source| ExportError::OutputUnwritable {
        path: path.to_path_buf(),
        source,
    })?;
    log::info!("Wrote {}x{} PNG to {}", image.width(), image.height(), path.display());
    Ok(())
}

/// SVG document assembled from cell rectangles
#[cfg(feature = "vector-export")]
pub struct SvgBuilder {
    width: u32,
    height: u32,
    elements: Vec<String>,
}

#[cfg(feature = "vector-export")]
impl SvgBuilder {
    pub fn new(layout: &CellLayout) -> Self {
        Self {
            width: layout.image_width,
            height: layout.image_height,
            elements: Vec::new(),
        }
    }

    pub fn add_background(&mut self, color: Rgb) {
        self.elements.push(format!(
            r#"<rect width="{}" height="{}" fill="{}"/>"#,
            self.width, self.height, color
        ));
    }

    pub fn element_count(&self) -> usize {
        self.elements.len()
    }

    pub fn to_svg_string(&self) -> String {
        let mut svg = String::new();
        svg.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
        svg.push_str(&format!(
            "<svg width=\"{}\" height=\"{}\" viewBox=\"0 0 {} {}\" xmlns=\"http://www.w3.org/2000/svg\" shape-rendering=\"crispEdges\">\n",
            self.width, self.height, self.width, self.height
        ));
        for element in &self.elements {
            svg.push_str("  ");
            svg.push_str(element);
            svg.push('\n');
        }
        svg.push_str("</svg>\n");
        svg
    }

    pub fn write_to_file<P: AsRef<Path>>(&self, path: P) -> ExportResult<()> {
        let path = path.as_ref();
        let mut out = create_output(path)?;
        out.write_all(self.to_svg_string().as_bytes())
            .and_then(|_| out.flush())
            .map_err(|source| ExportError::OutputUnwritable {
                path: path.to_path_buf(),
                source,
            })?;
        log::info!("Wrote SVG with {} elements to {}", self.elements.len(), path.display());
        Ok(())
    }
}

#[cfg(feature = "vector-export")]
impl Surface for SvgBuilder {
    fn fill_rect(&mut self, xs: Range<u32>, ys: Range<u32>, color: Rgb) {
        self.elements.push(format!(
            r#"<rect x="{}" y="{}" width="{}" height="{}" fill="{}"/>"#,
            xs.start,
            ys.start,
            xs.end - xs.start,
            ys.end - ys.start,
            color
        ));
    }
}

/// Render `grid` and write it to `path`: SVG for a `.svg` extension, PNG otherwise.
pub fn save<P: AsRef<Path>>(renderer: &Renderer, grid: &Grid, mode: ColorMode<'_>, path: P) -> ExportResult<()> {
    let path = path.as_ref();
    let is_svg = path
        .extension()
        .map_or(false, |ext| ext.eq_ignore_ascii_case("svg"));

    #[cfg(feature = "vector-export")]
    if is_svg {
        let layout = renderer.layout(grid)?;
        let mut svg = SvgBuilder::new(&layout);
        svg.add_background(renderer.config().background);
        renderer.paint(grid, mode, &layout, &mut svg);
        return svg.write_to_file(path);
    }
    #[cfg(not(feature = "vector-export"))]
    if is_svg {
        log::warn!("SVG export disabled in this build, writing PNG data to {}", path.display());
    }

    let image = renderer.render(grid, mode)?;
    write_png(&image, path)
}
