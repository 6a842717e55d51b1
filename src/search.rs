//! Local search over ship placements: simulated annealing that cools into
//! hill climbing.
//!
//! Every step works on a private clone of the best board. It lifts one or
//! more ships, reseats them in registry order, scores the result and keeps it
//! if it scores no worse than the best. A step whose candidate leaves the
//! occupied cells unchanged does not count against the budget.

use crate::board::Board;
use crate::builder::{build_initial_solution, InitialSolution};
use crate::common::SolverError;
use crate::config::SearchConfig;
use crate::fitness::fitness;
use crate::reseat::reseat;
use crate::schedule::{Regime, Schedule};
use crate::targets::Targets;
use alloc::vec;
use alloc::vec::Vec;
use rand::seq::index;
use rand::Rng;

/// What a single step did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepOutcome {
    /// Score of the candidate board (the best score if it was discarded).
    pub candidate_fitness: usize,
    /// Candidate replaced the best board.
    pub accepted: bool,
    /// Candidate had the same occupied cells as the best board.
    pub identical: bool,
    /// Ships reseated with the perimeter rule suspended.
    pub suspensions: usize,
    /// A ship found no free slot; the candidate was dropped.
    pub infeasible: bool,
}

impl StepOutcome {
    /// Whether the step counts against the iteration budget.
    pub fn counted(&self) -> bool {
        !self.identical
    }
}

/// Why a run stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Termination {
    BudgetExhausted,
    Solved,
    Stalled,
    NothingToMove,
}

/// Counters collected over a run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchStats {
    pub steps: usize,
    /// Steps that changed the board and so consumed budget.
    pub counted: usize,
    pub annealing_steps: usize,
    pub hill_climbing_steps: usize,
    pub accepted: usize,
    /// Accepted steps that strictly lowered the best score.
    pub improvements: usize,
    /// Perimeter suspensions, including those of the initial placement.
    pub suspensions: usize,
    /// Candidates dropped because a ship had nowhere to go.
    pub discarded: usize,
    pub final_temperature: usize,
}

/// Outcome of a run.
#[derive(Debug, Clone)]
pub struct SearchReport {
    pub board: Board,
    pub fitness: usize,
    pub initial_fitness: usize,
    pub termination: Termination,
    pub stats: SearchStats,
}

impl SearchReport {
    /// Every row and column count matches its target.
    pub fn is_solved(&self) -> bool {
        self.fitness == 0
    }
}

/// Holds the best-known board and drives search steps against it.
#[derive(Debug, Clone)]
pub struct Solver {
    targets: Targets,
    best: Board,
    best_fitness: usize,
    initial_suspensions: usize,
}

impl Solver {
    pub fn new(targets: Targets, initial: InitialSolution) -> Self {
        Self {
            targets,
            best: initial.board,
            best_fitness: initial.fitness,
            initial_suspensions: initial.suspensions,
        }
    }

    /// Build the initial solution for `ship_lengths` and wrap it.
    pub fn build(ship_lengths: &[usize], targets: Targets) -> Result<Self, SolverError> {
        let initial = build_initial_solution(ship_lengths, &targets)?;
        Ok(Self::new(targets, initial))
    }

    pub fn targets(&self) -> &Targets {
        &self.targets
    }

    /// Best board found so far.
    pub fn best(&self) -> &Board {
        &self.best
    }

    pub fn best_fitness(&self) -> usize {
        self.best_fitness
    }

    /// Perturb a clone of the best board and keep it if it scores no worse.
    pub fn step<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        regime: Regime,
    ) -> Result<StepOutcome, SolverError> {
        let count = self.best.ships().len();
        if count == 0 {
            return Ok(self.unchanged(0, false));
        }
        let mut picked: Vec<usize> = match regime {
            Regime::Annealing { temperature } => {
                index::sample(rng, count, temperature.min(count)).into_vec()
            }
            Regime::HillClimbing => vec![rng.random_range(0..count)],
        };
        // Registry order is longest first, so ascending indices reseat the
        // long ships before the short ones.
        picked.sort_unstable();

        let mut candidate = self.best.clone();
        let mut origins = Vec::with_capacity(picked.len());
        for &i in &picked {
            origins.push(candidate.lift(i)?);
        }

        let mut suspensions = 0;
        for (&i, &origin) in picked.iter().zip(origins.iter()) {
            match reseat(&mut candidate, i, origin, &self.targets) {
                Ok(seat) => {
                    if seat.suspended {
                        log::trace!("ship {} reseated with perimeter suspended", i);
                        suspensions += 1;
                    }
                }
                Err(SolverError::Infeasible { ship, length }) => {
                    log::warn!(
                        "no free slot for ship {} (length {}); candidate dropped",
                        ship,
                        length
                    );
                    return Ok(self.unchanged(suspensions, true));
                }
                Err(e) => return Err(e),
            }
        }

        let identical = candidate.same_layout(&self.best);
        let candidate_fitness = fitness(candidate.cells(), &self.targets);
        let accepted = candidate_fitness <= self.best_fitness;
        if accepted {
            self.best = candidate;
            self.best_fitness = candidate_fitness;
        }
        Ok(StepOutcome {
            candidate_fitness,
            accepted,
            identical,
            suspensions,
            infeasible: false,
        })
    }

    /// Run annealing then hill climbing until `config.budget` counted
    /// iterations have passed, or an early stop applies.
    pub fn run<R: Rng + ?Sized>(
        mut self,
        rng: &mut R,
        config: &SearchConfig,
    ) -> Result<SearchReport, SolverError> {
        config.validate()?;
        let ship_count = self.best.ships().len();
        let initial_fitness = self.best_fitness;
        let mut schedule = Schedule::new(config.budget, ship_count);
        let mut stats = SearchStats {
            suspensions: self.initial_suspensions,
            ..SearchStats::default()
        };
        log::info!(
            "search started: {} ships on {}x{}, budget {}, initial fitness {}",
            ship_count,
            self.targets.n(),
            self.targets.n(),
            config.budget,
            initial_fitness
        );

        let mut stalled = 0usize;
        let termination = loop {
            if config.stop_when_solved && self.best_fitness == 0 {
                break Termination::Solved;
            }
            if stats.counted >= config.budget {
                break Termination::BudgetExhausted;
            }
            if ship_count == 0 {
                break Termination::NothingToMove;
            }

            let regime = schedule.regime();
            let before = self.best_fitness;
            let outcome = self.step(rng, regime)?;
            stats.steps += 1;
            match regime {
                Regime::Annealing { .. } => {
                    stats.annealing_steps += 1;
                    schedule.record_annealing_step();
                }
                Regime::HillClimbing => stats.hill_climbing_steps += 1,
            }
            stats.suspensions += outcome.suspensions;
            if outcome.infeasible {
                stats.discarded += 1;
            }
            if outcome.accepted {
                stats.accepted += 1;
            }
            if self.best_fitness < before {
                stats.improvements += 1;
                log::debug!(
                    "fitness {} -> {} after {} counted iterations",
                    before,
                    self.best_fitness,
                    stats.counted
                );
            }

            if outcome.counted() {
                stats.counted += 1;
                stalled = 0;
            } else {
                stalled += 1;
                if config.stall_limit.is_some_and(|limit| stalled >= limit) {
                    break Termination::Stalled;
                }
            }
        };
        stats.final_temperature = schedule.temperature();

        log::info!(
            "search finished ({:?}): fitness {} after {} steps, {} counted",
            termination,
            self.best_fitness,
            stats.steps,
            stats.counted
        );
        Ok(SearchReport {
            board: self.best,
            fitness: self.best_fitness,
            initial_fitness,
            termination,
            stats,
        })
    }

    fn unchanged(&self, suspensions: usize, infeasible: bool) -> StepOutcome {
        StepOutcome {
            candidate_fitness: self.best_fitness,
            accepted: false,
            identical: true,
            suspensions,
            infeasible,
        }
    }
}

/// Build the initial solution and search from it.
pub fn solve<R: Rng + ?Sized>(
    ship_lengths: &[usize],
    targets: Targets,
    rng: &mut R,
    config: &SearchConfig,
) -> Result<SearchReport, SolverError> {
    Solver::build(ship_lengths, targets)?.run(rng, config)
}
