use battleship_solitaire::{fitness, Cells, Targets};
use proptest::prelude::*;

#[test]
fn test_matching_board_scores_zero() {
    let targets = Targets::new(vec![3, 0, 0], vec![1, 1, 1]).unwrap();
    let mut cells = Cells::new(3);
    for idx in 0..3 {
        cells.insert(idx);
    }
    assert_eq!(fitness(&cells, &targets), 0);
}

#[test]
fn test_score_sums_row_and_column_deviation() {
    let targets = Targets::new(vec![2, 0, 1, 0], vec![1, 1, 1, 0]).unwrap();
    let mut cells = Cells::new(4);
    cells.insert(0);
    cells.insert(1);
    cells.insert(3);
    // rows: |2-3| + |0-0| + |1-0| + |0-0| = 2
    // cols: |1-1| + |1-1| + |1-0| + |0-1| = 2
    assert_eq!(fitness(&cells, &targets), 4);
}

#[test]
fn test_empty_board_scores_total_targets() {
    let targets = Targets::new(vec![1, 2, 0], vec![0, 2, 1]).unwrap();
    assert_eq!(fitness(&Cells::new(3), &targets), 6);
}

#[test]
fn test_mismatched_targets_rejected() {
    assert!(Targets::new(vec![1, 2], vec![1]).is_err());
    assert!(Targets::new(vec![], vec![]).is_err());
}

fn board_and_targets() -> impl Strategy<Value = (Cells, Targets)> {
    (1usize..8).prop_flat_map(|n| {
        (
            proptest::collection::vec(any::<bool>(), n * n),
            proptest::collection::vec(0usize..=n, n),
            proptest::collection::vec(0usize..=n, n),
        )
            .prop_map(move |(bits, rows, cols)| {
                let mut cells = Cells::new(n);
                for (idx, set) in bits.into_iter().enumerate() {
                    if set {
                        cells.insert(idx);
                    }
                }
                (cells, Targets::new(rows, cols).unwrap())
            })
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn zero_iff_every_count_matches((cells, targets) in board_and_targets()) {
        let n = targets.n();
        let all_match = (0..n).all(|i| {
            cells.row_count(i) == targets.rows()[i] && cells.col_count(i) == targets.cols()[i]
        });
        prop_assert_eq!(fitness(&cells, &targets) == 0, all_match);
    }

    #[test]
    fn board_scores_zero_against_its_own_counts((cells, _targets) in board_and_targets()) {
        let n = cells.size();
        let own = Targets::new(
            (0..n).map(|r| cells.row_count(r)).collect(),
            (0..n).map(|c| cells.col_count(c)).collect(),
        ).unwrap();
        prop_assert_eq!(fitness(&cells, &own), 0);
    }
}
