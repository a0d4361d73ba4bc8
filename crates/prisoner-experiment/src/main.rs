//! Prisoner riddle simulation CLI.
//!
//! Estimates, over a large trial count, the probability that N agents each
//! find their own label behind one of N containers when each may open at
//! most L containers, under two strategies: independent random search and
//! cycle following.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::Result;
use chrono::Utc;
use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use prisoner_experiment::config::SimulationConfig;
use prisoner_experiment::results::RunResult;
use prisoner_experiment::simulation::simulate;

#[derive(Parser)]
#[command(name = "prisoner-experiment")]
#[command(version)]
#[command(about = "Monte Carlo simulation of the 100 prisoners riddle")]
struct Cli {
    /// Number of agents (and containers)
    #[arg(long, default_value = "100")]
    agents: usize,

    /// Maximum containers each agent may open (default: half the agents)
    #[arg(long)]
    open_limit: Option<usize>,

    /// Total number of trials
    #[arg(long, default_value = "1000000")]
    trials: u64,

    /// Number of worker threads (default: available cores minus two, at least one)
    #[arg(long)]
    workers: Option<usize>,

    /// Run on a single worker regardless of --workers
    #[arg(long)]
    sequential: bool,

    /// Write the full run record to a JSON file
    #[arg(long)]
    output: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

/// Default worker count: all cores but two, floor one. The engine itself
/// never inspects the machine; worker-count policy lives here.
fn default_workers() -> usize {
    std::thread::available_parallelism()
        .map(|cores| cores.get().saturating_sub(2))
        .unwrap_or(1)
        .max(1)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .compact()
        .init();

    let workers = if cli.sequential {
        1
    } else {
        cli.workers.unwrap_or_else(default_workers)
    };
    let config = SimulationConfig {
        agents: cli.agents,
        open_limit: cli.open_limit.unwrap_or(cli.agents / 2),
        trials: cli.trials,
        workers,
    };

    info!(
        agents = config.agents,
        open_limit = config.open_limit,
        trials = config.trials,
        workers = config.workers,
        "starting simulation"
    );

    let started_at = Utc::now();
    let start = Instant::now();
    let totals = simulate(&config)?;
    let elapsed = start.elapsed();
    let ended_at = Utc::now();

    let result = RunResult::new(config.clone(), started_at, ended_at, totals);

    println!("Trials:          {}", totals.trials);
    println!("Agents:          {}", config.agents);
    println!("Open limit:      {}", config.open_limit);
    println!("Workers:         {}", config.workers);
    println!(
        "Random search:   {} wins -> {:.4}%",
        totals.random_search_successes,
        totals.random_search_rate() * 100.0
    );
    println!(
        "Cycle following: {} wins -> {:.4}%",
        totals.cycle_following_successes,
        totals.cycle_following_rate() * 100.0
    );
    println!("Time:            {}ms", elapsed.as_millis());

    if let Some(path) = cli.output {
        result.save(&path)?;
        info!(path = %path.display(), "run record written");
    }

    Ok(())
}
