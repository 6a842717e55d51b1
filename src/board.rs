//! Board state: occupied cells plus the ordered registry of placed ships.

use crate::bitboard::BitBoard;
use crate::common::BoardError;
use crate::ship::{Placement, Ship};
use alloc::vec::Vec;
use core::fmt;

/// Bitboard type used for board occupancy.
pub type Cells = BitBoard<u64>;

/// Occupied cells together with the ship registry that produced them.
///
/// The registry order is fixed once the initial solution is built; search
/// steps address ships by their index in it. Cloning deep-copies both.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    cells: Cells,
    ships: Vec<Ship>,
}

impl Board {
    /// Create an empty `n×n` board with no ships.
    pub fn new(n: usize) -> Self {
        Board {
            cells: Cells::new(n),
            ships: Vec::new(),
        }
    }

    /// Fallible constructor: rejects empty grids and sizes whose cell count
    /// overflows.
    pub fn try_new(n: usize) -> Result<Self, BoardError> {
        Ok(Board {
            cells: Cells::try_new(n)?,
            ships: Vec::new(),
        })
    }

    /// Side length N.
    #[inline]
    pub fn n(&self) -> usize {
        self.cells.size()
    }

    /// Board occupancy mask of all ships.
    #[inline]
    pub fn cells(&self) -> &Cells {
        &self.cells
    }

    /// Immutable view of the ship registry.
    #[inline]
    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    pub fn ship(&self, index: usize) -> Option<&Ship> {
        self.ships.get(index)
    }

    /// Number of occupied cells.
    pub fn occupied(&self) -> usize {
        self.cells.count_ones()
    }

    /// Bit-for-bit comparison of the occupied cells, ignoring the registry.
    pub fn same_layout(&self, other: &Board) -> bool {
        self.cells == other.cells
    }

    /// Append a new ship to the registry and mark its footprint.
    /// Returns the ship's registry index.
    pub fn place(&mut self, length: usize, placement: Placement) -> Result<usize, BoardError> {
        self.check_length(length, placement)?;
        self.mark(placement)?;
        self.ships.push(Ship::new(length, placement));
        Ok(self.ships.len() - 1)
    }

    /// Clear a ship's footprint, leaving its record in place.
    /// Returns the placement it was lifted from.
    pub fn lift(&mut self, index: usize) -> Result<Placement, BoardError> {
        let placement = self
            .ships
            .get(index)
            .map(Ship::placement)
            .ok_or(BoardError::InvalidIndex)?;
        let n = self.n();
        for idx in placement.cells(n) {
            self.cells.remove(idx);
        }
        Ok(placement)
    }

    /// Put a lifted ship down at `placement` and update its record.
    pub fn reseat(&mut self, index: usize, placement: Placement) -> Result<(), BoardError> {
        let length = self
            .ships
            .get(index)
            .map(Ship::length)
            .ok_or(BoardError::InvalidIndex)?;
        self.check_length(length, placement)?;
        self.mark(placement)?;
        self.ships[index].move_to(placement);
        Ok(())
    }

    fn check_length(&self, length: usize, placement: Placement) -> Result<(), BoardError> {
        let cells = placement.cells(self.n()).count();
        if cells != length {
            return Err(BoardError::LengthMismatch { length, cells });
        }
        Ok(())
    }

    fn mark(&mut self, placement: Placement) -> Result<(), BoardError> {
        let n = self.n();
        if placement.end() >= self.cells.len() {
            return Err(BoardError::ShipOutOfBounds);
        }
        if placement.cells(n).any(|idx| self.cells.test(idx)) {
            return Err(BoardError::ShipOverlaps);
        }
        for idx in placement.cells(n) {
            self.cells.insert(idx);
        }
        Ok(())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Board {{\n  cells: {:?},\n  ships: {:?}\n}}",
            self.cells, self.ships
        )
    }
}
