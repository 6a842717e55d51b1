//! Ship records and their placements on an N×N grid.
//!
//! A placement is stored the way the search reasons about it: a linear start
//! index, a linear (inclusive) end index and an orientation. Vertical ships
//! step by N between cells, horizontal ships by 1.

use crate::common::BoardError;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    /// The other orientation.
    #[inline]
    pub fn flipped(self) -> Self {
        match self {
            Orientation::Horizontal => Orientation::Vertical,
            Orientation::Vertical => Orientation::Horizontal,
        }
    }

    /// Linear distance between consecutive cells on an `n`-wide grid.
    #[inline]
    pub fn step(self, n: usize) -> usize {
        match self {
            Orientation::Horizontal => 1,
            Orientation::Vertical => n,
        }
    }
}

/// Where a ship sits: first cell, last cell (inclusive) and orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Placement {
    start: usize,
    end: usize,
    orientation: Orientation,
}

impl Placement {
    /// Placement of a `length`-cell ship starting at linear index `start`.
    /// Does not check bounds; see [`Placement::at`].
    pub fn new(orientation: Orientation, start: usize, length: usize, n: usize) -> Self {
        let end = start + length.saturating_sub(1) * orientation.step(n);
        Placement {
            start,
            end,
            orientation,
        }
    }

    /// Bounds-checked placement with its first cell at (`row`, `col`).
    pub fn at(
        orientation: Orientation,
        row: usize,
        col: usize,
        length: usize,
        n: usize,
    ) -> Result<Self, BoardError> {
        let fits = match orientation {
            Orientation::Horizontal => row < n && col + length <= n,
            Orientation::Vertical => col < n && row + length <= n,
        };
        if length == 0 || !fits {
            return Err(BoardError::ShipOutOfBounds);
        }
        Ok(Self::new(orientation, row * n + col, length, n))
    }

    /// Linear index of the first cell.
    #[inline]
    pub fn start(&self) -> usize {
        self.start
    }

    /// Linear index of the last cell.
    #[inline]
    pub fn end(&self) -> usize {
        self.end
    }

    #[inline]
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// First cell as (row, col).
    pub fn origin(&self, n: usize) -> (usize, usize) {
        (self.start / n, self.start % n)
    }

    /// Linear indices of every footprint cell, start to end.
    pub fn cells(&self, n: usize) -> impl Iterator<Item = usize> {
        (self.start..=self.end).step_by(self.orientation.step(n).max(1))
    }
}

/// A placed ship. Its length never changes; its placement may.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Ship {
    length: usize,
    placement: Placement,
}

impl Ship {
    pub fn new(length: usize, placement: Placement) -> Self {
        Self { length, placement }
    }

    /// Ship's length.
    #[inline]
    pub fn length(&self) -> usize {
        self.length
    }

    /// Current placement.
    #[inline]
    pub fn placement(&self) -> Placement {
        self.placement
    }

    /// Orientation of the ship.
    #[inline]
    pub fn orientation(&self) -> Orientation {
        self.placement.orientation
    }

    pub(crate) fn move_to(&mut self, placement: Placement) {
        self.placement = placement;
    }
}
