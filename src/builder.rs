//! Greedy construction of the starting layout.

use crate::board::Board;
use crate::common::SolverError;
use crate::fitness::fitness;
use crate::reseat::{find_seat, Infeasible, ScanFrom};
use crate::scanner::Scanner;
use crate::ship::Orientation;
use crate::targets::Targets;
use alloc::vec::Vec;

/// Result of the greedy construction.
#[derive(Debug, Clone)]
pub struct InitialSolution {
    /// Board with every ship placed, registry ordered longest first.
    pub board: Board,
    pub fitness: usize,
    /// Ships that needed the perimeter rule suspended.
    pub suspensions: usize,
}

/// Place every ship, longest first, alternating vertical and horizontal by
/// registry index. Each ship takes the first valid slot its scanner finds.
pub fn build_initial_solution(
    ship_lengths: &[usize],
    targets: &Targets,
) -> Result<InitialSolution, SolverError> {
    let n = targets.n();
    for (ship, &length) in ship_lengths.iter().enumerate() {
        if length == 0 {
            return Err(SolverError::ZeroLengthShip { ship });
        }
        if length > n {
            return Err(SolverError::ShipTooLong { ship, length, n });
        }
    }

    let mut lengths: Vec<usize> = ship_lengths.to_vec();
    lengths.sort_by(|a, b| b.cmp(a));

    let mut board = Board::try_new(n)?;
    let mut suspensions = 0;
    for (index, &length) in lengths.iter().enumerate() {
        let orientation = if index % 2 == 0 {
            Orientation::Vertical
        } else {
            Orientation::Horizontal
        };
        let scanner = Scanner::new(targets, length);
        let origin = scanner.first(orientation);
        let seat = find_seat(board.cells(), &scanner, origin, ScanFrom::Origin)
            .map_err(|Infeasible| SolverError::Infeasible { ship: index, length })?;
        if seat.suspended {
            log::debug!("ship {} (length {}) placed with perimeter suspended", index, length);
            suspensions += 1;
        }
        board.place(length, seat.placement)?;
    }

    let fitness = fitness(board.cells(), targets);
    log::debug!(
        "initial solution: {} ships, {} cells, fitness {}",
        board.ships().len(),
        board.occupied(),
        fitness
    );
    Ok(InitialSolution {
        board,
        fitness,
        suspensions,
    })
}
