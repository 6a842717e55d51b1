#![cfg(feature = "std")]
//! Puzzle files.
//!
//! A puzzle is three non-blank lines of whitespace-separated integers: the
//! ship lengths, the column targets, then the row targets.

use crate::common::SolverError;
use crate::targets::Targets;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Errors raised while reading a puzzle.
#[derive(Debug)]
pub enum PuzzleError {
    Io(std::io::Error),
    /// A required line is absent.
    MissingLine(&'static str),
    /// A token is not a non-negative integer.
    InvalidNumber { line: &'static str, token: String },
    /// Targets do not describe an N×N grid.
    Targets(SolverError),
}

impl fmt::Display for PuzzleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PuzzleError::Io(e) => write!(f, "cannot read puzzle: {}", e),
            PuzzleError::MissingLine(line) => write!(f, "no {} in puzzle", line),
            PuzzleError::InvalidNumber { line, token } => {
                write!(f, "invalid number {:?} in {}", token, line)
            }
            PuzzleError::Targets(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for PuzzleError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PuzzleError::Io(e) => Some(e),
            PuzzleError::Targets(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for PuzzleError {
    fn from(err: std::io::Error) -> Self {
        PuzzleError::Io(err)
    }
}

/// Ship lengths and targets read from a puzzle file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    pub ships: Vec<usize>,
    pub targets: Targets,
}

impl Puzzle {
    /// Read and parse a puzzle file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, PuzzleError> {
        std::fs::read_to_string(path)?.parse()
    }
}

impl FromStr for Puzzle {
    type Err = PuzzleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut lines = s.lines().filter(|l| !l.trim().is_empty());
        let mut next_line = |name: &'static str| -> Result<Vec<usize>, PuzzleError> {
            let line = lines.next().ok_or(PuzzleError::MissingLine(name))?;
            line.split_whitespace()
                .map(|token| {
                    token.parse().map_err(|_| PuzzleError::InvalidNumber {
                        line: name,
                        token: token.to_string(),
                    })
                })
                .collect()
        };
        let ships = next_line("ship lengths")?;
        let cols = next_line("column targets")?;
        let rows = next_line("row targets")?;
        let targets = Targets::new(rows, cols).map_err(PuzzleError::Targets)?;
        Ok(Puzzle { ships, targets })
    }
}
