use battleship_solitaire::{solve, Board, SearchConfig, Targets};
use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn six_by_six() -> Targets {
    Targets::new(vec![4, 1, 0, 3, 0, 1], vec![2, 2, 2, 0, 2, 1]).unwrap()
}

/// No two ships share a cell or touch, diagonals included.
fn ships_apart(board: &Board) -> bool {
    let n = board.n();
    let footprints: Vec<Vec<(usize, usize)>> = board
        .ships()
        .iter()
        .map(|s| s.placement().cells(n).map(|i| (i / n, i % n)).collect())
        .collect();
    for (i, a) in footprints.iter().enumerate() {
        for b in &footprints[i + 1..] {
            for &(r1, c1) in a {
                for &(r2, c2) in b {
                    if r1.abs_diff(r2) <= 1 && c1.abs_diff(c2) <= 1 {
                        return false;
                    }
                }
            }
        }
    }
    true
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn ships_never_touch_without_suspension(seed in any::<u64>(), budget in 0usize..120) {
        let config = SearchConfig::default().with_budget(budget);
        let mut rng = SmallRng::seed_from_u64(seed);
        let report = solve(&[3, 2, 2, 1, 1], six_by_six(), &mut rng, &config).unwrap();

        prop_assert_eq!(report.board.occupied(), 9);
        prop_assert!(report.fitness <= report.initial_fitness);
        if report.stats.suspensions == 0 {
            prop_assert!(ships_apart(&report.board));
        }
    }

    #[test]
    fn seeded_runs_repeat(seed in any::<u64>()) {
        let config = SearchConfig::default().with_budget(40).with_seed(seed);
        let a = solve(&[3, 2, 1], six_by_six(), &mut config.rng(), &config).unwrap();
        let b = solve(&[3, 2, 1], six_by_six(), &mut config.rng(), &config).unwrap();
        prop_assert!(a.board.same_layout(&b.board));
        prop_assert_eq!(a.stats, b.stats);
    }
}
