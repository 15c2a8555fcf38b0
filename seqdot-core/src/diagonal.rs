//! Diagonal run detection
//!
//! Scans a dotplot for stretches of consecutive matched cells along both
//! diagonal families. A single line scan parameterized by a `(dx, dy)` step
//! handles the forward diagonals (down-right) and the anti-diagonals
//! (down-left). Every emitted run is ordered by increasing `x`, i.e. in the
//! direction of the first sequence.

use crate::grid::Grid;
use crate::run::{Point, Run};

/// Per-cell movement along a scan line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub dx: isize,
    pub dy: isize,
}

impl Step {
    /// Down-right: `x` and `y` both increase
    pub const FORWARD: Step = Step { dx: 1, dy: 1 };
    /// Down-left: `x` decreases while `y` increases
    pub const ANTI: Step = Step { dx: -1, dy: 1 };

    fn advance(&self, p: Point, grid: &Grid) -> Option<Point> {
        let x = p.x.checked_add_signed(self.dx)?;
        let y = p.y.checked_add_signed(self.dy)?;
        grid.contains(x, y).then_some(Point::new(x, y))
    }
}

/// Finds diagonal runs of at least `min_length` matched cells
#[derive(Debug, Clone, Copy)]
pub struct DiagonalAligner {
    min_length: usize,
}

impl DiagonalAligner {
    pub fn new(min_length: usize) -> Self {
        Self { min_length }
    }

    pub fn min_length(&self) -> usize {
        self.min_length
    }

    /// All runs in `grid`: forward diagonals first, then anti-diagonals.
    pub fn find_runs(&self, grid: &Grid) -> Vec<Run> {
        let mut runs = Vec::new();

        for start in line_starts(grid, Step::FORWARD) {
            self.scan_line(grid, start, Step::FORWARD, &mut runs);
        }
        let forward = runs.len();

        let mut anti = Vec::new();
        for start in line_starts(grid, Step::ANTI) {
            self.scan_line(grid, start, Step::ANTI, &mut anti);
        }
        // Anti-diagonal lines are walked right to left
        runs.extend(anti.iter().map(Run::reversed));

        log::debug!(
            "Found {} forward and {} anti-diagonal runs (min length {})",
            forward,
            runs.len() - forward,
            self.min_length
        );
        runs
    }

    /// Walk one diagonal line, emitting every run that meets the threshold.
    fn scan_line(&self, grid: &Grid, start: Point, step: Step, out: &mut Vec<Run>) {
        let mut open: Vec<Point> = Vec::new();
        let mut cursor = Some(start);

        while let Some(p) = cursor {
            if grid.value(p.x, p.y) > 0.0 {
                open.push(p);
            } else {
                self.flush(&mut open, out);
            }
            cursor = step.advance(p, grid);
        }

        // Run still open at the grid edge
        self.flush(&mut open, out);
    }

    fn flush(&self, open: &mut Vec<Point>, out: &mut Vec<Run>) {
        if !open.is_empty() && open.len() >= self.min_length {
            out.push(Run::new(std::mem::take(open)));
        } else {
            open.clear();
        }
    }
}

/// Starting cell of every diagonal line for the given step.
///
/// Lines start on the top row, then on the left column (forward) or right
/// column (anti), skipping the corner already covered by the top row.
fn line_starts(grid: &Grid, step: Step) -> Vec<Point> {
    let (w, h) = grid.dimensions();
    let side_x = if step.dx > 0 { 0 } else { w - 1 };

    let mut starts: Vec<Point> = (0..w).map(|x| Point::new(x, 0)).collect();
    if step.dx < 0 {
        starts.reverse();
    }
    starts.extend((1..h).map(|y| Point::new(side_x, y)));
    starts
}

/// Convenience wrapper around [`DiagonalAligner::find_runs`]
pub fn find_runs(grid: &Grid, min_length: usize) -> Vec<Run> {
    DiagonalAligner::new(min_length).find_runs(grid)
}
