//! End-to-end dotplot computation
//!
//! sequences → match grid → diagonal runs → run-only grid → up to two
//! conservation filter rounds. Rendering is left to `seqdot-render`.

use crate::diagonal::DiagonalAligner;
use crate::filter::{self, Filter, FilterError};
use crate::grid::{Grid, GridError};
use crate::run::{self, Run};
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while running the pipeline
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Grid(#[from] GridError),

    #[error("{round} filter round: {source}")]
    Filter {
        round: &'static str,
        #[source]
        source: FilterError,
    },
}

pub type PipelineResult<T> = Result<T, PipelineError>;

/// Where a filter round gets its weights
#[derive(Debug, Clone)]
pub enum FilterSource {
    /// One weight file per axis
    Files { x: PathBuf, y: PathBuf },
    /// Prebuilt overlay
    Filter(Filter),
}

impl FilterSource {
    pub fn files<P: Into<PathBuf>, Q: Into<PathBuf>>(x: P, y: Q) -> Self {
        Self::Files { x: x.into(), y: y.into() }
    }

    fn load(&self) -> Result<Filter, FilterError> {
        match self {
            FilterSource::Files { x, y } => Filter::from_files(x, y),
            FilterSource::Filter(f) => Ok(f.clone()),
        }
    }
}

/// Parameters for one dotplot run
#[derive(Debug, Clone)]
pub struct PlotParams {
    /// Minimum diagonal run length; values ≤ 1 keep the raw match grid
    pub min_run_length: usize,
    /// First filter round, dimensions must match the plot
    pub primary: Option<FilterSource>,
    /// Second filter round, applied over the overlapping region only.
    /// Ignored without a primary round.
    pub secondary: Option<FilterSource>,
}

impl Default for PlotParams {
    fn default() -> Self {
        Self {
            min_run_length: 5,
            primary: None,
            secondary: None,
        }
    }
}

/// Result of a pipeline run
#[derive(Debug, Clone)]
pub struct PipelineOutput {
    /// Grid to render
    pub grid: Grid,
    /// Runs found (empty when run detection is disabled)
    pub runs: Vec<Run>,
    /// Whether cells carry filter weights rather than plain 1.0 matches
    pub weighted: bool,
}

pub struct DotplotPipeline {
    params: PlotParams,
}

impl DotplotPipeline {
    pub fn new(params: PlotParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &PlotParams {
        &self.params
    }

    pub fn run(&self, seq1: &[u8], seq2: &[u8]) -> PipelineResult<PipelineOutput> {
        let raw = Grid::from_sequences(seq1, seq2)?;
        log::info!(
            "Built {}x{} dotplot with {} matches",
            raw.width(),
            raw.height(),
            raw.positive_cells()
        );

        let (mut grid, runs) = if self.params.min_run_length > 1 {
            let runs = DiagonalAligner::new(self.params.min_run_length).find_runs(&raw);
            log::info!(
                "Kept {} diagonal runs of length >= {}",
                runs.len(),
                self.params.min_run_length
            );
            (run::project(&raw, &runs), runs)
        } else {
            log::info!("Run detection disabled, rendering raw matches");
            (raw, Vec::new())
        };

        let mut weighted = false;
        if let Some(primary) = &self.params.primary {
            let overlay = primary.load().map_err(|source| PipelineError::Filter {
                round: "primary",
                source,
            })?;
            grid = filter::apply_checked(&grid, &overlay).map_err(|source| {
                PipelineError::Filter {
                    round: "primary",
                    source,
                }
            })?;
            weighted = true;

            if let Some(secondary) = &self.params.secondary {
                let overlay = secondary.load().map_err(|source| PipelineError::Filter {
                    round: "secondary",
                    source,
                })?;
                grid = filter::apply(&grid, &overlay);
            }
            log::info!("Applied conservation filters");
        } else if self.params.secondary.is_some() {
            log::warn!("Secondary filter given without a primary filter, ignoring it");
        }

        Ok(PipelineOutput { grid, runs, weighted })
    }
}
