//! Dotplot grid storage
//!
//! A `Grid` is a dense width×height matrix of `f32` cells stored row-major in a
//! single vector. It backs the raw match plot, the run-filtered plot and the
//! conservation filter overlays.

use std::fmt;
use thiserror::Error;

/// Values with an absolute magnitude below this are treated as "no match".
pub const MATCH_EPSILON: f32 = 0.00001;

/// Errors that can occur while building a grid
#[derive(Debug, Error, PartialEq)]
pub enum GridError {
    #[error("Empty sequence: {0} has no symbols")]
    EmptySequence(&'static str),

    #[error("Grid dimensions must be non-zero (got {width}x{height})")]
    ZeroDimension { width: usize, height: usize },

    #[error("Expected {expected} cells for the grid, got {actual}")]
    CellCount { expected: usize, actual: usize },
}

pub type GridResult<T> = Result<T, GridError>;

/// Dense dotplot matrix indexed by `(x, y)`
///
/// `x` runs along the first sequence, `y` along the second.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<f32>,
}

impl Grid {
    /// Build the binary match plot of two sequences.
    ///
    /// Cell `(x, y)` is `1.0` when `seq1[x] == seq2[y]` and `0.0` otherwise.
    /// Comparison is exact and case-sensitive.
    pub fn from_sequences(seq1: &[u8], seq2: &[u8]) -> GridResult<Self> {
        if seq1.is_empty() {
            return Err(GridError::EmptySequence("sequence 1"));
        }
        if seq2.is_empty() {
            return Err(GridError::EmptySequence("sequence 2"));
        }

        let width = seq1.len();
        let height = seq2.len();
        let mut cells = Vec::with_capacity(width * height);
        for &b in seq2 {
            cells.extend(seq1.iter().map(|&a| if a == b { 1.0 } else { 0.0 }));
        }

        Ok(Self { width, height, cells })
    }

    /// All-zero grid of the given size
    pub fn zeros(width: usize, height: usize) -> GridResult<Self> {
        if width == 0 || height == 0 {
            return Err(GridError::ZeroDimension { width, height });
        }
        Ok(Self {
            width,
            height,
            cells: vec![0.0; width * height],
        })
    }

    /// All-zero grid with the same dimensions as `other`
    pub fn zeroed_like(other: &Grid) -> Self {
        Self {
            width: other.width,
            height: other.height,
            cells: vec![0.0; other.cells.len()],
        }
    }

    /// Build a grid from row-major cell values
    pub fn from_cells(width: usize, height: usize, cells: Vec<f32>) -> GridResult<Self> {
        if width == 0 || height == 0 {
            return Err(GridError::ZeroDimension { width, height });
        }
        let expected = width * height;
        if cells.len() != expected {
            return Err(GridError::CellCount {
                expected,
                actual: cells.len(),
            });
        }
        Ok(Self { width, height, cells })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub fn contains(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height
    }

    fn index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    /// Cell value, or `None` outside the grid
    pub fn get(&self, x: usize, y: usize) -> Option<f32> {
        if !self.contains(x, y) {
            return None;
        }
        Some(self.cells[self.index(x, y)])
    }

    /// Cell value for coordinates known to be in bounds.
    ///
    /// Panics when `(x, y)` lies outside the grid.
    pub fn value(&self, x: usize, y: usize) -> f32 {
        assert!(
            self.contains(x, y),
            "cell ({}, {}) outside {}x{} grid",
            x,
            y,
            self.width,
            self.height
        );
        self.cells[self.index(x, y)]
    }

    /// Overwrite a cell. Returns `false` when the coordinates are out of bounds.
    pub fn set(&mut self, x: usize, y: usize, value: f32) -> bool {
        if !self.contains(x, y) {
            return false;
        }
        let idx = self.index(x, y);
        self.cells[idx] = value;
        true
    }

    /// Overwrite a cell only if it currently holds a match (non-zero value).
    ///
    /// Returns `true` when the value was written.
    pub fn set_if_match(&mut self, x: usize, y: usize, value: f32) -> bool {
        match self.get(x, y) {
            Some(current) if current.abs() >= MATCH_EPSILON => self.set(x, y, value),
            _ => false,
        }
    }

    /// Number of cells with a strictly positive value
    pub fn positive_cells(&self) -> usize {
        self.cells.iter().filter(|&&v| v > 0.0).count()
    }

    /// Row-major view of the cell values
    pub fn cells(&self) -> &[f32] {
        &self.cells
    }

    /// Iterate over `(x, y, value)` in row-major order
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, f32)> + '_ {
        let width = self.width;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &v)| (i % width, i / width, v))
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.width) {
            for v in row {
                write!(f, "{}", v)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
