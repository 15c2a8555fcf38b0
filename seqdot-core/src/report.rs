//! JSON alignment report
//!
//! Each detected run becomes one record holding the symbols of the first
//! sequence along the run and the run's starting cell:
//!
//! ```json
//! [{"sequence":"ACTG","position":{"x":0,"y":0}}]
//! ```

use crate::run::{Point, Run};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlignmentRecord {
    pub sequence: String,
    pub position: Point,
}

impl AlignmentRecord {
    /// Returns `None` for an empty run.
    pub fn from_run(run: &Run, seq1: &[u8]) -> Option<Self> {
        let position = run.first()?;
        let symbols: Vec<u8> = run
            .points()
            .iter()
            .filter_map(|p| seq1.get(p.x).copied())
            .collect();

        Some(Self {
            sequence: String::from_utf8_lossy(&symbols).into_owned(),
            position,
        })
    }
}

pub fn build_report(runs: &[Run], seq1: &[u8]) -> Vec<AlignmentRecord> {
    runs.iter()
        .filter_map(|run| AlignmentRecord::from_run(run, seq1))
        .collect()
}

/// Compact JSON array of the records
pub fn to_json(records: &[AlignmentRecord]) -> serde_json::Result<String> {
    serde_json::to_string(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagonal::find_runs;
    use crate::grid::Grid;

    #[test]
    fn test_report_for_identical_sequences() {
        let grid = Grid::from_sequences(b"ACTG", b"ACTG").unwrap();
        let runs = find_runs(&grid, 2);
        let report = build_report(&runs, b"ACTG");

        assert_eq!(
            report,
            vec![AlignmentRecord {
                sequence: "ACTG".to_string(),
                position: Point::new(0, 0),
            }]
        );
        assert_eq!(
            to_json(&report).unwrap(),
            r#"[{"sequence":"ACTG","position":{"x":0,"y":0}}]"#
        );
    }

    #[test]
    fn test_anti_diagonal_sequence_follows_first_sequence() {
        let grid = Grid::from_sequences(b"ACGT", b"TGCA").unwrap();
        let runs = find_runs(&grid, 2);
        let report = build_report(&runs, b"ACGT");
        assert_eq!(report[0].sequence, "ACGT");
        assert_eq!(report[0].position, Point::new(0, 3));
    }

    #[test]
    fn test_empty_report() {
        assert_eq!(to_json(&build_report(&[], b"AC")).unwrap(), "[]");
        assert!(AlignmentRecord::from_run(&Run::new(Vec::new()), b"AC").is_none());
    }
}
