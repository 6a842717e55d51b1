//! Common error types for the board and the solver.

use crate::bitboard::BitBoardError;
use core::fmt;

/// Errors returned by Board operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Underlying bitboard error (e.g., invalid size or index).
    BitBoardError(BitBoardError),
    /// Specified ship index is out of range.
    InvalidIndex,
    /// Ship placement overlaps another ship.
    ShipOverlaps,
    /// Ship placement leaves the grid.
    ShipOutOfBounds,
    /// Placement footprint does not match the ship's length.
    LengthMismatch { length: usize, cells: usize },
}

impl From<BitBoardError> for BoardError {
    fn from(err: BitBoardError) -> Self {
        BoardError::BitBoardError(err)
    }
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::BitBoardError(e) => write!(f, "BitBoard error: {}", e),
            BoardError::InvalidIndex => write!(f, "Ship index is out of range"),
            BoardError::ShipOverlaps => write!(f, "Ship placement overlaps with another ship"),
            BoardError::ShipOutOfBounds => write!(f, "Ship placement is out of bounds"),
            BoardError::LengthMismatch { length, cells } => write!(
                f,
                "Ship of length {} cannot cover {} cells",
                length, cells
            ),
        }
    }
}

/// Errors returned while building or searching a solution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolverError {
    /// Row and column targets describe a non-square grid.
    TargetMismatch { rows: usize, cols: usize },
    /// No targets were given.
    EmptyGrid,
    /// A ship of length zero was requested.
    ZeroLengthShip { ship: usize },
    /// A ship does not fit on the grid.
    ShipTooLong { ship: usize, length: usize, n: usize },
    /// No footprint-free slot exists for a ship, even with the perimeter
    /// rule suspended.
    Infeasible { ship: usize, length: usize },
    /// Search configuration rejected by `SearchConfig::validate`.
    InvalidConfig(&'static str),
    /// Underlying board error.
    Board(BoardError),
}

impl From<BoardError> for SolverError {
    fn from(err: BoardError) -> Self {
        SolverError::Board(err)
    }
}

impl fmt::Display for SolverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolverError::TargetMismatch { rows, cols } => write!(
                f,
                "Grid is not NxN: {} row targets but {} column targets",
                rows, cols
            ),
            SolverError::EmptyGrid => write!(f, "Grid has no rows"),
            SolverError::ZeroLengthShip { ship } => write!(f, "Ship {} has length 0", ship),
            SolverError::ShipTooLong { ship, length, n } => write!(
                f,
                "Ship {} has length {} but the grid is only {}x{}",
                ship, length, n, n
            ),
            SolverError::Infeasible { ship, length } => write!(
                f,
                "No free slot for ship {} (length {})",
                ship, length
            ),
            SolverError::InvalidConfig(msg) => write!(f, "Invalid search configuration: {}", msg),
            SolverError::Board(e) => write!(f, "Board error: {}", e),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BitBoardError {}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}

#[cfg(feature = "std")]
impl std::error::Error for SolverError {}
