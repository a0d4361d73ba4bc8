//! Trial scheduling and result aggregation.
//!
//! The trial index range [0, T) is split into W contiguous sub-ranges, one
//! per worker. Every trial is seeded by its own index, never by worker
//! identity, so the aggregate counts are identical for any worker count.
//! Workers accumulate into private counters; the only synchronization is the
//! join barrier before the local pairs are summed.

use std::ops::Range;
use std::thread;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::{InvalidConfiguration, SimulationConfig};
use crate::trial;

/// Aggregated success counts over a full run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationTotals {
    /// Trials in which random search succeeded for every agent
    pub random_search_successes: u64,
    /// Trials in which cycle following succeeded for every agent
    pub cycle_following_successes: u64,
    /// Total trials run
    pub trials: u64,
}

impl SimulationTotals {
    /// Fraction of trials won by random search (0.0 when no trials ran).
    pub fn random_search_rate(&self) -> f64 {
        rate(self.random_search_successes, self.trials)
    }

    /// Fraction of trials won by cycle following (0.0 when no trials ran).
    pub fn cycle_following_rate(&self) -> f64 {
        rate(self.cycle_following_successes, self.trials)
    }
}

fn rate(successes: u64, trials: u64) -> f64 {
    if trials == 0 {
        0.0
    } else {
        successes as f64 / trials as f64
    }
}

/// Split [0, trials) into `workers` contiguous ranges. The first
/// `trials % workers` ranges take one extra trial, so every index is covered
/// exactly once and the split depends only on (trials, workers).
fn partition(trials: u64, workers: usize) -> Vec<Range<u64>> {
    let workers = workers as u64;
    let base = trials / workers;
    let extra = trials % workers;
    let mut ranges = Vec::with_capacity(workers as usize);
    let mut start = 0;
    for worker in 0..workers {
        let length = base + u64::from(worker < extra);
        ranges.push(start..start + length);
        start += length;
    }
    ranges
}

/// Run one worker's sub-range, counting successes into private counters.
fn run_range(agents: usize, open_limit: usize, range: Range<u64>) -> (u64, u64) {
    let mut random_search = 0u64;
    let mut cycle_following = 0u64;
    for index in range {
        let outcome = trial::run_trial(agents, open_limit, index);
        if outcome.random_search {
            random_search += 1;
        }
        if outcome.cycle_following {
            cycle_following += 1;
        }
    }
    (random_search, cycle_following)
}

/// Run the full simulation described by `config`.
///
/// Validates the configuration before any trial executes. A single worker
/// runs inline on the calling thread; more workers run on scoped threads and
/// their private counter pairs are summed after the join barrier.
pub fn simulate(config: &SimulationConfig) -> Result<SimulationTotals, InvalidConfiguration> {
    config.validate()?;

    let (random_search_successes, cycle_following_successes) = if config.workers == 1 {
        run_range(config.agents, config.open_limit, 0..config.trials)
    } else {
        let ranges = partition(config.trials, config.workers);
        debug!(
            workers = config.workers,
            trials = config.trials,
            "partitioned trial range"
        );
        thread::scope(|scope| {
            let handles: Vec<_> = ranges
                .into_iter()
                .map(|range| {
                    scope.spawn(move || run_range(config.agents, config.open_limit, range))
                })
                .collect();
            handles.into_iter().fold((0u64, 0u64), |totals, handle| {
                let (random_search, cycle_following) =
                    handle.join().expect("worker thread panicked");
                (totals.0 + random_search, totals.1 + cycle_following)
            })
        })
    };

    Ok(SimulationTotals {
        random_search_successes,
        cycle_following_successes,
        trials: config.trials,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partition_covers_range_exactly() {
        for (trials, workers) in [(100, 4), (101, 4), (7, 3), (5, 8), (0, 3)] {
            let ranges = partition(trials, workers);
            assert_eq!(ranges.len(), workers);

            let mut next = 0;
            for range in &ranges {
                assert_eq!(range.start, next, "ranges must be contiguous");
                next = range.end;
            }
            assert_eq!(next, trials, "ranges must cover [0, trials)");
        }
    }

    #[test]
    fn test_partition_spreads_remainder_over_first_ranges() {
        let ranges = partition(10, 4);
        let lengths: Vec<u64> = ranges.iter().map(|r| r.end - r.start).collect();
        assert_eq!(lengths, vec![3, 3, 2, 2]);
    }

    #[test]
    fn test_zero_trials_returns_zeroed_totals() {
        let config = SimulationConfig {
            agents: 10,
            open_limit: 5,
            trials: 0,
            workers: 3,
        };
        let totals = simulate(&config).unwrap();
        assert_eq!(totals.random_search_successes, 0);
        assert_eq!(totals.cycle_following_successes, 0);
        assert_eq!(totals.trials, 0);
    }

    #[test]
    fn test_invalid_config_rejected_before_any_trial() {
        let config = SimulationConfig {
            agents: 0,
            open_limit: 1,
            trials: 100,
            workers: 1,
        };
        assert_eq!(simulate(&config), Err(InvalidConfiguration::NoAgents));
    }

    #[test]
    fn test_full_open_limit_wins_every_trial() {
        let config = SimulationConfig {
            agents: 8,
            open_limit: 8,
            trials: 200,
            workers: 2,
        };
        let totals = simulate(&config).unwrap();
        assert_eq!(totals.random_search_successes, 200);
        assert_eq!(totals.cycle_following_successes, 200);
    }

    #[test]
    fn test_worker_count_does_not_change_totals() {
        let base = SimulationConfig {
            agents: 16,
            open_limit: 8,
            trials: 1_000,
            workers: 1,
        };
        let sequential = simulate(&base).unwrap();
        for workers in [2, 3, 7] {
            let config = SimulationConfig { workers, ..base.clone() };
            assert_eq!(simulate(&config).unwrap(), sequential);
        }
    }

    #[test]
    fn test_more_workers_than_trials() {
        let config = SimulationConfig {
            agents: 4,
            open_limit: 4,
            trials: 3,
            workers: 8,
        };
        let totals = simulate(&config).unwrap();
        assert_eq!(totals.cycle_following_successes, 3);
    }

    #[test]
    fn test_rates() {
        let totals = SimulationTotals {
            random_search_successes: 1,
            cycle_following_successes: 3,
            trials: 4,
        };
        assert_eq!(totals.random_search_rate(), 0.25);
        assert_eq!(totals.cycle_following_rate(), 0.75);

        let empty = SimulationTotals {
            random_search_successes: 0,
            cycle_following_successes: 0,
            trials: 0,
        };
        assert_eq!(empty.cycle_following_rate(), 0.0);
    }
}
