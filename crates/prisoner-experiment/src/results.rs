//! Serializable run summaries for the reporting layer.
//!
//! The engine reports raw counts; this module turns them into rates with
//! sampling uncertainty and persists full run records as JSON.

use std::path::Path;

use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::SimulationConfig;
use crate::simulation::SimulationTotals;

/// A success rate with its sampling uncertainty.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RateSummary {
    pub successes: u64,
    pub rate: f64,
    /// Standard error of the rate: sqrt(p(1-p)/n)
    pub standard_error: f64,
    /// 95% confidence interval, clamped to [0, 1]
    pub confidence_interval: (f64, f64),
}

impl RateSummary {
    fn from_counts(successes: u64, trials: u64) -> Self {
        if trials == 0 {
            return Self {
                successes,
                rate: 0.0,
                standard_error: 0.0,
                confidence_interval: (0.0, 0.0),
            };
        }
        let n = trials as f64;
        let rate = successes as f64 / n;
        let standard_error = (rate * (1.0 - rate) / n).sqrt();
        let z = 1.96;
        let confidence_interval = (
            (rate - z * standard_error).max(0.0),
            (rate + z * standard_error).min(1.0),
        );
        Self {
            successes,
            rate,
            standard_error,
            confidence_interval,
        }
    }
}

/// Full record of one simulation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunResult {
    pub config: SimulationConfig,
    pub started_at: DateTime<Utc>,
    pub ended_at: DateTime<Utc>,
    pub totals: SimulationTotals,
    pub random_search: RateSummary,
    pub cycle_following: RateSummary,
}

impl RunResult {
    /// Assemble a run record from the engine's output.
    pub fn new(
        config: SimulationConfig,
        started_at: DateTime<Utc>,
        ended_at: DateTime<Utc>,
        totals: SimulationTotals,
    ) -> Self {
        Self {
            random_search: RateSummary::from_counts(totals.random_search_successes, totals.trials),
            cycle_following: RateSummary::from_counts(
                totals.cycle_following_successes,
                totals.trials,
            ),
            config,
            started_at,
            ended_at,
            totals,
        }
    }

    /// Save the record to a JSON file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Load a record from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        let result = serde_json::from_str(&json)?;
        Ok(result)
    }
}
