//! Commonly used types and utilities for ease of import.

pub use crate::{
    build_initial_solution, fitness, render, solve, Board, Orientation, Placement, Regime,
    SearchConfig, SearchReport, Solver, SolverError, Targets, Termination,
};

#[cfg(feature = "std")]
pub use crate::{init_logging, Puzzle};
