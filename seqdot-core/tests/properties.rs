use proptest::prelude::*;
use seqdot_core::{apply, apply_checked, find_runs, project, Filter, Grid};

fn dna(max_len: usize) -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(prop::sample::select(b"ACGT".to_vec()), 1..max_len)
}

fn weights(len: usize) -> impl Strategy<Value = Vec<f32>> {
    prop::collection::vec(0.0f32..=1.0, len)
}

proptest! {
    #[test]
    fn grid_cells_follow_symbol_equality(a in dna(24), b in dna(24)) {
        let grid = Grid::from_sequences(&a, &b).unwrap();
        prop_assert_eq!(grid.dimensions(), (a.len(), b.len()));
        for (x, y, v) in grid.iter() {
            let expected = if a[x] == b[y] { 1.0 } else { 0.0 };
            prop_assert_eq!(v, expected);
        }
    }

    #[test]
    fn runs_meet_threshold_and_lie_on_matches(a in dna(30), b in dna(30), min in 1usize..6) {
        let grid = Grid::from_sequences(&a, &b).unwrap();
        for run in find_runs(&grid, min) {
            prop_assert!(run.len() >= min);
            for p in run.points() {
                prop_assert!(grid.contains(p.x, p.y));
                prop_assert!(grid.value(p.x, p.y) > 0.0);
            }
            // Diagonal walk ordered by increasing x
            for pair in run.points().windows(2) {
                prop_assert_eq!(pair[1].x, pair[0].x + 1);
                prop_assert_eq!(pair[1].y.abs_diff(pair[0].y), 1);
            }
        }
    }

    #[test]
    fn lowering_threshold_never_removes_runs(a in dna(30), b in dna(30), min in 2usize..6) {
        let grid = Grid::from_sequences(&a, &b).unwrap();
        let strict = find_runs(&grid, min);
        let loose = find_runs(&grid, min - 1);
        for run in &strict {
            prop_assert!(loose.contains(run));
        }
    }

    #[test]
    fn projection_is_idempotent(a in dna(30), b in dna(30), min in 2usize..5) {
        let grid = Grid::from_sequences(&a, &b).unwrap();
        let runs = find_runs(&grid, min);
        let once = project(&grid, &runs);
        let twice = project(&once, &runs);
        prop_assert_eq!(&once, &twice);
        // Only matched cells survive
        for (x, y, v) in once.iter() {
            if v > 0.0 {
                prop_assert_eq!(grid.value(x, y), 1.0);
            }
        }
    }

    #[test]
    fn filter_only_touches_matched_cells(
        (a, b, wx, wy) in (dna(20), dna(20)).prop_flat_map(|(a, b)| {
            let (w, h) = (a.len(), b.len());
            (Just(a), Just(b), weights(w), weights(h))
        })
    ) {
        let grid = Grid::from_sequences(&a, &b).unwrap();
        let filter = Filter::from_weights(&wx, &wy).unwrap();
        let out = apply(&grid, &filter);

        for (x, y, v) in grid.iter() {
            if v == 0.0 {
                prop_assert_eq!(out.value(x, y), 0.0);
            } else {
                prop_assert_eq!(Some(out.value(x, y)), filter.weight(x, y));
            }
        }
        prop_assert_eq!(apply_checked(&grid, &filter).unwrap(), out);
    }

    #[test]
    fn checked_filter_rejects_other_shapes(a in dna(20), b in dna(20), extra in 1usize..4) {
        let grid = Grid::from_sequences(&a, &b).unwrap();
        let wide = Filter::from_weights(&vec![0.5; a.len() + extra], &vec![0.5; b.len()]).unwrap();
        prop_assert!(apply_checked(&grid, &wide).is_err());
    }
}
