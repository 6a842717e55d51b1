//! The scan-and-check cycle that finds a slot for one ship.
//!
//! Candidates come from a [`Scanner`] and are tested with the perimeter rule
//! enforced. Once the scan comes back to where it began (or has covered a
//! full cycle) the rule is suspended and scanning continues with only the
//! overlap test. A second full cycle without a free footprint means the ship
//! cannot be placed at all.

use crate::board::{Board, Cells};
use crate::common::{BoardError, SolverError};
use crate::scanner::Scanner;
use crate::ship::Placement;
use crate::targets::Targets;
use crate::validity::{is_valid, Perimeter};

/// Where the scan begins relative to its origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanFrom {
    /// Test the origin itself first. Used for fresh placements.
    Origin,
    /// Start with the origin's successor. Used when moving a ship that was
    /// lifted from the origin, which is only retried after a full cycle.
    Successor,
}

/// A slot found by the scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Seat {
    pub placement: Placement,
    /// The perimeter rule was suspended to find this slot.
    pub suspended: bool,
}

/// No footprint-free slot exists for the scanned ship.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Infeasible;

/// Scan from `origin` for the first slot that passes the validity check.
pub fn find_seat(
    cells: &Cells,
    scanner: &Scanner,
    origin: Placement,
    from: ScanFrom,
) -> Result<Seat, Infeasible> {
    let cycle = scanner.cycle_len();
    let mut candidate = match from {
        ScanFrom::Origin => origin,
        ScanFrom::Successor => scanner.next(&origin),
    };
    let mut perimeter = if candidate == origin && from == ScanFrom::Successor {
        Perimeter::Suspended
    } else {
        Perimeter::Enforced
    };
    let mut enforced_tested = 0usize;
    let mut suspended_tested = 0usize;

    loop {
        if is_valid(cells, &candidate, scanner.length(), perimeter) {
            return Ok(Seat {
                placement: candidate,
                suspended: perimeter == Perimeter::Suspended,
            });
        }
        match perimeter {
            Perimeter::Enforced => enforced_tested += 1,
            Perimeter::Suspended => {
                suspended_tested += 1;
                if suspended_tested >= cycle {
                    return Err(Infeasible);
                }
            }
        }
        candidate = scanner.next(&candidate);
        if perimeter == Perimeter::Enforced && (candidate == origin || enforced_tested >= cycle) {
            log::trace!(
                "perimeter suspended for length {} ship after {} candidates",
                scanner.length(),
                enforced_tested
            );
            perimeter = Perimeter::Suspended;
        }
    }
}

/// Find a new slot for the lifted ship `index`, scanning from `origin`, and
/// commit it to `board`.
pub fn reseat(
    board: &mut Board,
    index: usize,
    origin: Placement,
    targets: &Targets,
) -> Result<Seat, SolverError> {
    let length = board
        .ship(index)
        .map(|s| s.length())
        .ok_or(BoardError::InvalidIndex)?;
    let scanner = Scanner::new(targets, length);
    let seat = find_seat(board.cells(), &scanner, origin, ScanFrom::Successor)
        .map_err(|Infeasible| SolverError::Infeasible { ship: index, length })?;
    board.reseat(index, seat.placement)?;
    Ok(seat)
}
