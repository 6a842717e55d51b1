use battleship_solitaire::{
    build_initial_solution, fitness, Orientation, Placement, SolverError, Targets,
};

#[test]
fn test_single_ship_fills_row_and_scores_zero() {
    let targets = Targets::new(vec![3, 0, 0], vec![1, 1, 1]).unwrap();
    let initial = build_initial_solution(&[3], &targets).unwrap();

    assert_eq!(initial.fitness, 0);
    assert_eq!(initial.suspensions, 0);
    let ship = initial.board.ship(0).unwrap();
    assert_eq!(ship.orientation(), Orientation::Horizontal);
    assert_eq!(ship.placement(), Placement::new(Orientation::Horizontal, 0, 3, 3));
    let cells: Vec<_> = initial.board.cells().iter_set_bits().collect();
    assert_eq!(cells, vec![(0, 0), (0, 1), (0, 2)]);
}

#[test]
fn test_two_ships_on_four_by_four() {
    let targets = Targets::new(vec![2, 0, 1, 0], vec![1, 1, 1, 0]).unwrap();
    let initial = build_initial_solution(&[2, 1], &targets).unwrap();
    let board = &initial.board;

    assert_eq!(board.ships().len(), 2);
    assert_eq!(board.ships()[0].length(), 2);
    assert_eq!(board.ships()[1].length(), 1);
    assert_eq!(board.occupied(), 3);

    // No column can hold the 2-ship, so it lies along row 0; the 1-ship
    // takes the first row-0 slot clear of it.
    let cells: Vec<_> = board.cells().iter_set_bits().collect();
    assert_eq!(cells, vec![(0, 0), (0, 1), (0, 3)]);

    let by_hand = {
        let rows = [3usize, 0, 0, 0];
        let cols = [1usize, 1, 0, 1];
        let want_rows = [2usize, 0, 1, 0];
        let want_cols = [1usize, 1, 1, 0];
        let r: usize = rows.iter().zip(want_rows).map(|(a, b)| a.abs_diff(b)).sum();
        let c: usize = cols.iter().zip(want_cols).map(|(a, b)| a.abs_diff(b)).sum();
        r + c
    };
    assert_eq!(initial.fitness, by_hand);
    assert_eq!(initial.fitness, fitness(board.cells(), &targets));
}

#[test]
fn test_registry_sorted_longest_first() {
    let targets = Targets::new(vec![4, 1, 0, 3, 0, 1], vec![2, 2, 2, 0, 2, 1]).unwrap();
    let initial = build_initial_solution(&[1, 3, 2, 1, 2], &targets).unwrap();
    let lengths: Vec<_> = initial.board.ships().iter().map(|s| s.length()).collect();
    assert_eq!(lengths, vec![3, 2, 2, 1, 1]);
    assert_eq!(initial.board.occupied(), 9);
}

#[test]
fn test_no_ships_scores_sum_of_targets() {
    let targets = Targets::new(vec![1, 1], vec![2, 0]).unwrap();
    let initial = build_initial_solution(&[], &targets).unwrap();
    assert_eq!(initial.board.occupied(), 0);
    assert_eq!(initial.fitness, 4);
}

#[test]
fn test_rejects_bad_ship_lengths() {
    let targets = Targets::new(vec![1, 1, 1], vec![1, 1, 1]).unwrap();
    assert_eq!(
        build_initial_solution(&[2, 4], &targets).unwrap_err(),
        SolverError::ShipTooLong { ship: 1, length: 4, n: 3 }
    );
    assert_eq!(
        build_initial_solution(&[0], &targets).unwrap_err(),
        SolverError::ZeroLengthShip { ship: 0 }
    );
}

#[test]
fn test_reports_infeasible_fleet() {
    // Two 1-cells cannot share on a 1x1 grid even ignoring the perimeter.
    let targets = Targets::new(vec![1], vec![1]).unwrap();
    let err = build_initial_solution(&[1, 1], &targets).unwrap_err();
    assert_eq!(err, SolverError::Infeasible { ship: 1, length: 1 });
}
