//! seqdot Core Library
//!
//! Match grids, diagonal run detection, conservation filters and color
//! buckets for pairwise sequence dotplots.

pub mod grid;
pub mod run;
pub mod diagonal;
pub mod filter;
pub mod color;
pub mod region;
pub mod report;
pub mod io;
pub mod pipeline;

// Re-export commonly used types and functions
pub use grid::{Grid, GridError};
pub use run::{project, Diagonal, Point, Run};
pub use diagonal::{find_runs, DiagonalAligner};
pub use filter::{apply, apply_checked, Filter, FilterError};
pub use color::{ColorChooser, ColorRange, Rgb};
pub use region::{Axis, Region};
pub use report::{build_report, AlignmentRecord};
pub use pipeline::{DotplotPipeline, FilterSource, PipelineOutput, PlotParams};

/// Version information for the seqdot core library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
