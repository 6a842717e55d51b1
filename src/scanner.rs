//! Deterministic enumeration of candidate placements for one ship.
//!
//! Only lines whose target is at least the ship's length are visited. The
//! successor of a vertical placement slides it down one row, then jumps to the
//! top of the next eligible column, and once the columns run out it flips to
//! the first eligible row. Horizontal placements mirror this, sliding right,
//! then down the rows, then flipping back to the columns. Repeated
//! application therefore cycles through every eligible slot and comes back to
//! where it started.

use crate::ship::{Orientation, Placement};
use crate::targets::Targets;
use alloc::vec::Vec;

/// Candidate generator for a ship of a fixed length.
#[derive(Debug, Clone)]
pub struct Scanner {
    n: usize,
    length: usize,
    cols: Vec<usize>,
    rows: Vec<usize>,
}

impl Scanner {
    /// Scanner for a `length`-cell ship. If no row or column target can hold
    /// the ship, every line is treated as eligible.
    pub fn new(targets: &Targets, length: usize) -> Self {
        let eligible = |lines: &[usize]| -> Vec<usize> {
            lines
                .iter()
                .enumerate()
                .filter(|&(_, &t)| t >= length)
                .map(|(i, _)| i)
                .collect()
        };
        let n = targets.n();
        let mut cols = eligible(targets.cols());
        let mut rows = eligible(targets.rows());
        if cols.is_empty() && rows.is_empty() {
            cols = (0..n).collect();
            rows = (0..n).collect();
        }
        Self {
            n,
            length,
            cols,
            rows,
        }
    }

    #[inline]
    pub fn length(&self) -> usize {
        self.length
    }

    /// Number of distinct placements in one full cycle.
    pub fn cycle_len(&self) -> usize {
        let per_line = (self.n + 1).saturating_sub(self.length);
        ((self.cols.len() + self.rows.len()) * per_line).max(1)
    }

    /// First candidate for `orientation`: the top of the first eligible
    /// column, or the left end of the first eligible row. Flips orientation
    /// when none of its lines are eligible.
    pub fn first(&self, orientation: Orientation) -> Placement {
        match self.lines(orientation).first() {
            Some(&line) => self.line_start(orientation, line),
            None => {
                let flipped = orientation.flipped();
                let line = self.lines(flipped).first().copied().unwrap_or(0);
                self.line_start(flipped, line)
            }
        }
    }

    /// Successor of `current` in the scan order.
    pub fn next(&self, current: &Placement) -> Placement {
        let n = self.n;
        let orientation = current.orientation();
        let (slides, line) = match orientation {
            Orientation::Vertical => (current.end() + n < n * n, current.start() % n),
            Orientation::Horizontal => ((current.end() + 1) % n != 0, current.start() / n),
        };
        if slides {
            let start = current.start() + orientation.step(n);
            return Placement::new(orientation, start, self.length, n);
        }
        match self.lines(orientation).iter().find(|&&l| l > line) {
            Some(&next) => self.line_start(orientation, next),
            None => self.first(orientation.flipped()),
        }
    }

    fn lines(&self, orientation: Orientation) -> &[usize] {
        match orientation {
            Orientation::Vertical => &self.cols,
            Orientation::Horizontal => &self.rows,
        }
    }

    fn line_start(&self, orientation: Orientation, line: usize) -> Placement {
        let start = match orientation {
            Orientation::Vertical => line,
            Orientation::Horizontal => line * self.n,
        };
        Placement::new(orientation, start, self.length, self.n)
    }
}
