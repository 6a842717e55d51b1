#![cfg_attr(not(feature = "std"), no_std)]
//! Battleship Solitaire solver.
//!
//! Reconstructs a hidden fleet on an N×N grid from per-row and per-column
//! occupied-cell counts. A greedy pass places every ship, then simulated
//! annealing (several ships moved per step) cools into hill climbing (one
//! ship per step), keeping any candidate that scores no worse.

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod bitboard;
mod board;
mod builder;
mod common;
mod config;
pub mod fitness;
#[cfg(feature = "std")]
mod loader;
#[cfg(feature = "std")]
mod logging;
pub mod prelude;
pub mod render;
pub mod reseat;
mod scanner;
mod schedule;
mod search;
mod ship;
mod targets;
mod validity;

pub use bitboard::{BitBoard, BitBoardError, SetBits};
pub use board::{Board, Cells};
pub use builder::{build_initial_solution, InitialSolution};
pub use common::{BoardError, SolverError};
pub use config::{SearchConfig, DEFAULT_STALL_LIMIT};
pub use fitness::fitness;
#[cfg(feature = "std")]
pub use loader::{Puzzle, PuzzleError};
#[cfg(feature = "std")]
pub use logging::{init_logging, LOG_ENV};
pub use render::{grid_rows, render, BoardView};
pub use reseat::{find_seat, reseat, Infeasible, ScanFrom, Seat};
pub use scanner::Scanner;
pub use schedule::{Regime, Schedule};
pub use search::{solve, SearchReport, SearchStats, Solver, StepOutcome, Termination};
pub use ship::{Orientation, Placement, Ship};
pub use targets::Targets;
pub use validity::{is_valid, Perimeter};
