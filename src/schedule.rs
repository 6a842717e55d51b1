//! Annealing cadence: how many ships each step perturbs, and when the search
//! degrades into hill climbing.
//!
//! With budget `B`, annealing gets `A = B` steps when `B <= 20` and
//! `A = floor(3B/4)` otherwise. The temperature starts at the ship count and
//! drops by one every `floor(A / ships)` annealing steps, never below 1. A
//! temperature of 1 is hill climbing.

/// Which move a search step makes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Regime {
    /// Lift and reseat `temperature` distinct ships.
    Annealing { temperature: usize },
    /// Lift and reseat one ship.
    HillClimbing,
}

/// Tracks the annealing budget and temperature over a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schedule {
    annealing_left: usize,
    temperature: usize,
    interval: usize,
    since_drop: usize,
}

impl Schedule {
    pub fn new(budget: usize, ship_count: usize) -> Self {
        let annealing = if budget <= 20 {
            budget
        } else {
            budget / 4 * 3 + budget % 4 * 3 / 4
        };
        let interval = if ship_count == 0 { 0 } else { annealing / ship_count };
        Self {
            annealing_left: annealing,
            temperature: ship_count.max(1),
            interval,
            since_drop: 0,
        }
    }

    /// Annealing steps still to run.
    pub fn annealing_left(&self) -> usize {
        self.annealing_left
    }

    pub fn temperature(&self) -> usize {
        self.temperature
    }

    /// Regime for the next step.
    pub fn regime(&self) -> Regime {
        if self.annealing_left > 0 && self.temperature >= 2 {
            Regime::Annealing {
                temperature: self.temperature,
            }
        } else {
            Regime::HillClimbing
        }
    }

    /// Account for one executed annealing step, counted or not.
    pub fn record_annealing_step(&mut self) {
        self.annealing_left = self.annealing_left.saturating_sub(1);
        self.since_drop += 1;
        if self.interval > 0 && self.since_drop == self.interval {
            self.since_drop = 0;
            if self.temperature > 1 {
                self.temperature -= 1;
                log::debug!("temperature lowered to {}", self.temperature);
            }
        }
    }
}
