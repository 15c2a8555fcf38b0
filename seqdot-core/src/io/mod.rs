//! Input readers for seqdot
//!
//! Sequences come from plain-text or FASTA/FASTQ files, conservation weights
//! from newline-delimited decimal files.

pub mod weights;
#[cfg(feature = "io-fasta")] pub mod fasta;

pub use weights::{read_weights, parse_weights};
#[cfg(feature = "io-fasta")] pub use fasta::SequenceReader;

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while reading sequence or weight sources
#[derive(Debug, Error)]
pub enum InputError {
    #[error("Can't open {}: {source}", .path.display())]
    Unavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Parse error in {} line {line}: {message}", .path.display())]
    Parse {
        path: PathBuf,
        line: usize,
        message: String,
    },

    #[error("No sequence data found in {}", .0.display())]
    EmptyFile(PathBuf),
}

impl InputError {
    pub fn unavailable<P: Into<PathBuf>>(path: P, source: std::io::Error) -> Self {
        Self::Unavailable { path: path.into(), source }
    }
}

pub type InputResult<T> = Result<T, InputError>;
