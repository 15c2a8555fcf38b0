//! Conservation weight files
//!
//! One decimal value per line, expected (but not checked) to lie in `[0, 1]`.

use super::{InputError, InputResult};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Read a weight vector from a file
pub fn read_weights<P: AsRef<Path>>(path: P) -> InputResult<Vec<f32>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| InputError::unavailable(path, e))?;
    let weights = parse_weights(BufReader::new(file), path)?;
    log::debug!("Read {} weights from {}", weights.len(), path.display());
    Ok(weights)
}

/// Parse newline-delimited weights. `origin` only labels errors.
///
/// Blank lines are skipped; any other line must parse as a float.
pub fn parse_weights<R: BufRead>(reader: R, origin: &Path) -> InputResult<Vec<f32>> {
    let mut weights = Vec::new();

    for (idx, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| InputError::unavailable(origin, e))?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let value = trimmed.parse::<f32>().map_err(|e| InputError::Parse {
            path: origin.to_path_buf(),
            line: idx + 1,
            message: format!("'{}': {}", trimmed, e),
        })?;
        weights.push(value);
    }

    Ok(weights)
}
