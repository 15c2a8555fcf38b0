//! Diagonal runs and their projection back onto a grid

use crate::grid::Grid;
use serde::{Deserialize, Serialize};

/// Grid coordinate of a matched cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: usize,
    pub y: usize,
}

impl Point {
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

/// Which diagonal family a run lies on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Diagonal {
    /// `y` grows with `x`
    Forward,
    /// `y` shrinks as `x` grows
    Anti,
}

/// A stretch of consecutive matched cells along one diagonal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Run {
    points: Vec<Point>,
}

impl Run {
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn first(&self) -> Option<Point> {
        self.points.first().copied()
    }

    pub fn last(&self) -> Option<Point> {
        self.points.last().copied()
    }

    /// Same cells, opposite point order
    pub fn reversed(&self) -> Run {
        Run {
            points: self.points.iter().rev().copied().collect(),
        }
    }

    /// Diagonal family, derived from the first two points.
    ///
    /// Single-cell runs lie on both families and report `Forward`.
    pub fn diagonal(&self) -> Diagonal {
        match (self.points.first(), self.points.get(1)) {
            (Some(a), Some(b)) if (a.x < b.x) != (a.y < b.y) => Diagonal::Anti,
            _ => Diagonal::Forward,
        }
    }
}

/// Zero-filled copy of `grid` with only the cells covered by `runs` set to `1.0`.
///
/// Coordinates outside the grid are ignored.
pub fn project(grid: &Grid, runs: &[Run]) -> Grid {
    let mut projected = Grid::zeroed_like(grid);
    let mut dropped = 0usize;
    for run in runs {
        for p in run.points() {
            if !projected.set(p.x, p.y, 1.0) {
                dropped += 1;
            }
        }
    }
    if dropped > 0 {
        log::debug!("Ignored {} out-of-bounds run coordinates", dropped);
    }
    projected
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_of(coords: &[(usize, usize)]) -> Run {
        Run::new(coords.iter().map(|&(x, y)| Point::new(x, y)).collect())
    }

    #[test]
    fn test_reversed_flips_order() {
        let run = run_of(&[(3, 0), (2, 1), (1, 2)]);
        let rev = run.reversed();
        assert_eq!(rev.first(), Some(Point::new(1, 2)));
        assert_eq!(rev.last(), Some(Point::new(3, 0)));
        assert_eq!(rev.reversed(), run);
    }

    #[test]
    fn test_diagonal_family() {
        assert_eq!(run_of(&[(0, 0), (1, 1)]).diagonal(), Diagonal::Forward);
        assert_eq!(run_of(&[(0, 2), (1, 1)]).diagonal(), Diagonal::Anti);
        assert_eq!(run_of(&[(2, 0), (1, 1)]).diagonal(), Diagonal::Anti);
        assert_eq!(run_of(&[(4, 4)]).diagonal(), Diagonal::Forward);
    }

    #[test]
    fn test_project_sets_only_run_cells() {
        let grid = Grid::from_sequences(b"AAAA", b"AAAA").unwrap();
        let runs = vec![run_of(&[(0, 0), (1, 1)]), run_of(&[(1, 1), (2, 2)])];
        let projected = project(&grid, &runs);

        assert_eq!(projected.dimensions(), grid.dimensions());
        assert_eq!(projected.positive_cells(), 3);
        assert_eq!(projected.value(1, 1), 1.0);
        assert_eq!(projected.value(3, 0), 0.0);
    }

    #[test]
    fn test_project_ignores_out_of_bounds() {
        let grid = Grid::from_sequences(b"AC", b"AC").unwrap();
        let runs = vec![run_of(&[(1, 1), (2, 2), (7, 0)])];
        let projected = project(&grid, &runs);
        assert_eq!(projected.positive_cells(), 1);
    }
}
