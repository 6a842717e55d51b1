//! Overlap and perimeter checks for a candidate placement.
//!
//! With the perimeter enforced, a ship may not touch another one
//! horizontally, vertically or diagonally. The check scans the footprint
//! padded by one cell on every side, in linear index space. A ship whose start
//! sits in the first column skips last-column cells of the window, and one
//! whose start sits in the last column skips first-column cells, so the
//! padding does not wrap onto the opposite edge of the grid. Both bounds are
//! derived from the start cell only.

use crate::board::Cells;
use crate::ship::{Orientation, Placement};

/// Whether the no-touch rule applies to a check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Perimeter {
    /// Footprint must be empty and no neighbouring cell may be occupied.
    Enforced,
    /// Footprint must be empty; neighbours are ignored.
    Suspended,
}

/// Returns `true` if a `length`-cell ship can sit at `placement` on `cells`.
pub fn is_valid(cells: &Cells, placement: &Placement, length: usize, perimeter: Perimeter) -> bool {
    let n = cells.size();
    if placement.cells(n).any(|idx| cells.test(idx)) {
        return false;
    }
    if perimeter == Perimeter::Suspended {
        return true;
    }

    let n = n as isize;
    let total = n * n;
    let start = placement.start() as isize;
    let end = placement.end() as isize;
    let occupied = |j: isize| j >= 0 && j < total && cells.test(j as usize);

    if occupied(start - n) || occupied(end + n) {
        return false;
    }

    let left_bound = start % n == 0;
    let right_bound = (start + 1) % n == 0;
    let width = match placement.orientation() {
        Orientation::Vertical => 3,
        Orientation::Horizontal => length as isize + 2,
    };

    let mut row_start = start - n - 1;
    while row_start < end + n {
        for j in row_start..row_start + width {
            if j < 0 || j >= total {
                continue;
            }
            let col = j % n;
            if (left_bound && col == n - 1) || (right_bound && col == 0) {
                continue;
            }
            if cells.test(j as usize) {
                return false;
            }
        }
        row_start += n;
    }
    true
}
