//! Conservation filters
//!
//! A filter is a grid-shaped overlay of weights, usually built from two
//! per-position score vectors (one per sequence). Applying a filter replaces
//! the value of every matched cell with the overlay's weight; unmatched cells
//! stay zero.

use crate::grid::{Grid, GridError};
use crate::io::{read_weights, InputError};
use std::path::Path;
use thiserror::Error;

/// Errors that can occur while building or applying a filter
#[derive(Debug, Error)]
pub enum FilterError {
    #[error("Dimension mismatch: plot is {}x{}, filter is {}x{}", .base.0, .base.1, .filter.0, .filter.1)]
    DimensionMismatch {
        base: (usize, usize),
        filter: (usize, usize),
    },

    #[error("Weight vector for the {0} axis is empty")]
    EmptyWeights(&'static str),

    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Grid(#[from] GridError),
}

pub type FilterResult<T> = Result<T, FilterError>;

/// Weight overlay applied on top of a dotplot
#[derive(Debug, Clone, PartialEq)]
pub struct Filter {
    weights: Grid,
}

impl Filter {
    /// Broadcast two axis weight vectors into an overlay.
    ///
    /// `filter(x, y) = (x_weights[x] + y_weights[y]) / 2`. Values are not range
    /// checked; anything outside `[0, 1]` flows through unchanged.
    pub fn from_weights(x_weights: &[f32], y_weights: &[f32]) -> FilterResult<Self> {
        if x_weights.is_empty() {
            return Err(FilterError::EmptyWeights("x"));
        }
        if y_weights.is_empty() {
            return Err(FilterError::EmptyWeights("y"));
        }

        let mut cells = Vec::with_capacity(x_weights.len() * y_weights.len());
        for &wy in y_weights {
            cells.extend(x_weights.iter().map(|&wx| (wx + wy) / 2.0));
        }

        let weights = Grid::from_cells(x_weights.len(), y_weights.len(), cells)?;
        Ok(Self { weights })
    }

    /// Wrap precomputed weights
    pub fn from_grid(weights: Grid) -> Self {
        Self { weights }
    }

    /// Read both weight files and build the overlay
    pub fn from_files<P: AsRef<Path>, Q: AsRef<Path>>(x_path: P, y_path: Q) -> FilterResult<Self> {
        let x_weights = read_weights(x_path)?;
        let y_weights = read_weights(y_path)?;
        log::debug!(
            "Building {}x{} filter from weight files",
            x_weights.len(),
            y_weights.len()
        );
        Self::from_weights(&x_weights, &y_weights)
    }

    pub fn width(&self) -> usize {
        self.weights.width()
    }

    pub fn height(&self) -> usize {
        self.weights.height()
    }

    pub fn dimensions(&self) -> (usize, usize) {
        self.weights.dimensions()
    }

    pub fn weight(&self, x: usize, y: usize) -> Option<f32> {
        self.weights.get(x, y)
    }

    pub fn as_grid(&self) -> &Grid {
        &self.weights
    }
}

/// Re-weight the matched cells of `base`.
///
/// Only the overlapping region of the two grids is visited; cells outside it
/// keep their original value. Zero cells are never touched.
pub fn apply(base: &Grid, filter: &Filter) -> Grid {
    let mut filtered = base.clone();
    let max_x = base.width().min(filter.width());
    let max_y = base.height().min(filter.height());

    let mut updated = 0usize;
    for y in 0..max_y {
        for x in 0..max_x {
            if filtered.set_if_match(x, y, filter.weights.value(x, y)) {
                updated += 1;
            }
        }
    }

    log::debug!("Filter re-weighted {} cells over a {}x{} overlap", updated, max_x, max_y);
    filtered
}

/// Like [`apply`], but rejects a filter whose dimensions differ from the plot.
pub fn apply_checked(base: &Grid, filter: &Filter) -> FilterResult<Grid> {
    if base.dimensions() != filter.dimensions() {
        return Err(FilterError::DimensionMismatch {
            base: base.dimensions(),
            filter: filter.dimensions(),
        });
    }
    Ok(apply(base, filter))
}
