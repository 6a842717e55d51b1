#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use anyhow::Context;
#[cfg(feature = "std")]
use battleship_solitaire::{
    grid_rows, init_logging, render, SearchConfig, SearchReport, Solver, DEFAULT_STALL_LIMIT,
};
#[cfg(feature = "std")]
use battleship_solitaire::Puzzle;
#[cfg(feature = "std")]
use clap::Parser;
#[cfg(feature = "std")]
use serde_json::json;
#[cfg(feature = "std")]
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    /// Puzzle file: ship lengths, column targets and row targets, one line each.
    puzzle: PathBuf,
    /// Maximum number of distinct candidate boards to evaluate.
    budget: usize,
    #[arg(long, help = "Fix RNG seed for reproducible runs (e.g., --seed 12345)")]
    seed: Option<u64>,
    #[arg(long, default_value_t = DEFAULT_STALL_LIMIT, help = "Stop after this many consecutive unchanged boards")]
    stall_limit: usize,
    #[arg(long, help = "Keep searching after a zero score is reached")]
    keep_going: bool,
    #[arg(long, help = "Print the result as JSON")]
    json: bool,
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let puzzle = Puzzle::load(&cli.puzzle)
        .with_context(|| format!("failed to load puzzle {}", cli.puzzle.display()))?;
    let mut config = SearchConfig::default()
        .with_budget(cli.budget)
        .with_stall_limit(Some(cli.stall_limit))
        .with_stop_when_solved(!cli.keep_going);
    if let Some(s) = cli.seed {
        config = config.with_seed(s);
    }
    config.validate()?;

    let mut rng = config.rng();
    let targets = puzzle.targets.clone();
    let solver = Solver::build(&puzzle.ships, puzzle.targets)
        .context("failed to build the initial solution")?;
    let report = solver.run(&mut rng, &config)?;

    if cli.json {
        print_json(&report, &config)?;
    } else {
        println!("Best Solution: ");
        println!("{}", render(&report.board, &targets));
        println!("SCORE: {}", report.fitness);
    }
    Ok(())
}

#[cfg(feature = "std")]
fn print_json(report: &SearchReport, config: &SearchConfig) -> anyhow::Result<()> {
    let result = json!({
        "score": report.fitness,
        "initial_score": report.initial_fitness,
        "solved": report.is_solved(),
        "termination": report.termination,
        "ships": report.board.ships(),
        "grid": grid_rows(&report.board),
        "stats": report.stats,
        "config": config,
    });
    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
