//! Text rendering of a board against its targets.

use crate::board::Board;
use crate::targets::Targets;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;

/// Display adapter: column targets across the top, then one line per row
/// with the row target followed by `X` for ship cells and `~` for sea.
pub struct BoardView<'a> {
    board: &'a Board,
    targets: &'a Targets,
}

impl<'a> BoardView<'a> {
    pub fn new(board: &'a Board, targets: &'a Targets) -> Self {
        Self { board, targets }
    }
}

impl fmt::Display for BoardView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "   ")?;
        for (c, t) in self.targets.cols().iter().enumerate() {
            if c > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", t)?;
        }
        for (r, t) in self.targets.rows().iter().enumerate() {
            writeln!(f)?;
            write!(f, "{:>2} ", t)?;
            write_row(f, self.board, r)?;
        }
        Ok(())
    }
}

// Rows past the board's edge render as sea.
fn write_row<W: fmt::Write>(out: &mut W, board: &Board, row: usize) -> fmt::Result {
    let n = board.n();
    for c in 0..n {
        if c > 0 {
            out.write_char(' ')?;
        }
        let occupied = row < n && board.cells().test(row * n + c);
        out.write_char(if occupied { 'X' } else { '~' })?;
    }
    Ok(())
}

/// Render `board` as text.
pub fn render(board: &Board, targets: &Targets) -> String {
    BoardView::new(board, targets).to_string()
}

/// The cell grid alone, one string per row, without any targets.
pub fn grid_rows(board: &Board) -> Vec<String> {
    (0..board.n())
        .map(|r| {
            let mut line = String::new();
            // writing into a String cannot fail
            let _ = write_row(&mut line, board, r);
            line
        })
        .collect()
}
