//! A runtime-sized bitboard.
//!
//! Boards are an `N×N` grid packed into a vector of unsigned words `T`. Cell
//! `(row, col)` lives at the linear index `row * N + col`. Both coordinate and
//! linear accessors are provided; the search works on linear indices.

use alloc::vec;
use alloc::vec::Vec;
use core::{any, fmt, mem};
use num_traits::{PrimInt, Unsigned, Zero};

/// Errors returned by bitboard operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BitBoardError {
    /// Requested board has no cells.
    EmptyBoard,
    /// Requested board size N*N overflows `usize`.
    SizeTooLarge { n: usize },
    /// Row or column index is out of bounds [0..N).
    IndexOutOfBounds { row: usize, col: usize },
}

impl fmt::Display for BitBoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BitBoardError::EmptyBoard => write!(f, "EmptyBoard: N must be at least 1"),
            BitBoardError::SizeTooLarge { n } => {
                write!(f, "SizeTooLarge: N*N overflows for N={}", n)
            }
            BitBoardError::IndexOutOfBounds { row, col } => {
                write!(f, "IndexOutOfBounds: row={}, col={}", row, col)
            }
        }
    }
}

/// An N×N bitboard stored in words of the unsigned integer `T`.
#[derive(Clone, PartialEq, Eq)]
pub struct BitBoard<T = u64>
where
    T: PrimInt + Unsigned + Zero,
{
    n: usize,
    words: Vec<T>,
}

impl<T> BitBoard<T>
where
    T: PrimInt + Unsigned + Zero,
{
    const WORD_BITS: usize = mem::size_of::<T>() * 8;

    /// Create a new empty `n×n` bitboard without size checks.
    pub fn new(n: usize) -> Self {
        let cells = n * n;
        BitBoard {
            n,
            words: vec![T::zero(); cells.div_ceil(Self::WORD_BITS)],
        }
    }

    /// Fallible constructor: rejects empty boards and sizes whose cell count
    /// overflows.
    pub fn try_new(n: usize) -> Result<Self, BitBoardError> {
        if n == 0 {
            return Err(BitBoardError::EmptyBoard);
        }
        if n.checked_mul(n).is_none() {
            return Err(BitBoardError::SizeTooLarge { n });
        }
        Ok(Self::new(n))
    }

    /// Side length N.
    #[inline]
    pub fn size(&self) -> usize {
        self.n
    }

    /// Number of cells (N²).
    #[inline]
    pub fn len(&self) -> usize {
        self.n * self.n
    }

    /// Returns the number of set bits (occupied cells).
    pub fn count_ones(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Returns true if no bits are set.
    pub fn is_empty(&self) -> bool {
        self.words.iter().all(|w| w.is_zero())
    }

    /// Tests the bit at a linear index. Indices past the board read as empty.
    #[inline]
    pub fn test(&self, idx: usize) -> bool {
        if idx >= self.len() {
            return false;
        }
        let (word, bit) = Self::locate(idx);
        ((self.words[word] >> bit) & T::one()) != T::zero()
    }

    /// Sets the bit at a linear index. Indices past the board are ignored.
    #[inline]
    pub fn insert(&mut self, idx: usize) {
        if idx < self.len() {
            let (word, bit) = Self::locate(idx);
            self.words[word] = self.words[word] | (T::one() << bit);
        }
    }

    /// Clears the bit at a linear index. Indices past the board are ignored.
    #[inline]
    pub fn remove(&mut self, idx: usize) {
        if idx < self.len() {
            let (word, bit) = Self::locate(idx);
            self.words[word] = self.words[word] & !(T::one() << bit);
        }
    }

    /// Gets the bit at (row, col).
    pub fn get(&self, row: usize, col: usize) -> Result<bool, BitBoardError> {
        self.check_bounds(row, col)?;
        Ok(self.test(row * self.n + col))
    }

    /// Sets the bit at (row, col) to 1.
    pub fn set(&mut self, row: usize, col: usize) -> Result<(), BitBoardError> {
        self.check_bounds(row, col)?;
        self.insert(row * self.n + col);
        Ok(())
    }

    /// Clears the bit at (row, col) to 0.
    pub fn clear(&mut self, row: usize, col: usize) -> Result<(), BitBoardError> {
        self.check_bounds(row, col)?;
        self.remove(row * self.n + col);
        Ok(())
    }

    /// Number of occupied cells in `row`.
    pub fn row_count(&self, row: usize) -> usize {
        (row * self.n..(row + 1) * self.n)
            .filter(|&i| self.test(i))
            .count()
    }

    /// Number of occupied cells in `col`.
    pub fn col_count(&self, col: usize) -> usize {
        (col..self.len())
            .step_by(self.n.max(1))
            .filter(|&i| self.test(i))
            .count()
    }

    /// Iterator over the set bits of the board as `(row, col)`.
    #[inline]
    pub fn iter_set_bits(&self) -> SetBits<'_, T> {
        SetBits {
            board: self,
            idx: 0,
        }
    }

    #[inline]
    fn locate(idx: usize) -> (usize, usize) {
        (idx / Self::WORD_BITS, idx % Self::WORD_BITS)
    }

    #[inline]
    fn check_bounds(&self, row: usize, col: usize) -> Result<(), BitBoardError> {
        if row >= self.n || col >= self.n {
            Err(BitBoardError::IndexOutOfBounds { row, col })
        } else {
            Ok(())
        }
    }
}

impl<T> fmt::Debug for BitBoard<T>
where
    T: PrimInt + Unsigned + Zero,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "BitBoard<{}>({}x{}):", any::type_name::<T>(), self.n, self.n)?;
        for r in 0..self.n {
            for c in 0..self.n {
                let bit = if self.test(r * self.n + c) { '■' } else { '□' };
                write!(f, "{} ", bit)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Iterator over the set bits of a bitboard.
#[derive(Clone, Copy)]
pub struct SetBits<'a, T>
where
    T: PrimInt + Unsigned + Zero,
{
    board: &'a BitBoard<T>,
    idx: usize,
}

impl<'a, T> Iterator for SetBits<'a, T>
where
    T: PrimInt + Unsigned + Zero,
{
    type Item = (usize, usize);
    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let n = self.board.n;
        while self.idx < n * n {
            let idx = self.idx;
            self.idx += 1;
            if self.board.test(idx) {
                return Some((idx / n, idx % n));
            }
        }
        None
    }
}
