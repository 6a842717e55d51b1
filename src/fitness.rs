//! Board scoring against the row and column targets.

use crate::board::Cells;
use crate::targets::Targets;

/// Sum of absolute deviations between target and actual occupied-cell counts,
/// over every row and every column. Zero means all counts match.
///
/// The perimeter rule is not scored here; placement enforces it.
pub fn fitness(cells: &Cells, targets: &Targets) -> usize {
    let rows: usize = targets
        .rows()
        .iter()
        .enumerate()
        .map(|(r, &t)| t.abs_diff(cells.row_count(r)))
        .sum();
    let cols: usize = targets
        .cols()
        .iter()
        .enumerate()
        .map(|(c, &t)| t.abs_diff(cells.col_count(c)))
        .sum();
    rows + cols
}
