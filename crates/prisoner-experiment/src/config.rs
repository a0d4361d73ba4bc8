//! Run configuration for the simulation engine.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Rejected configuration, surfaced before any trial executes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidConfiguration {
    /// Agent count of zero: there is nothing to simulate.
    #[error("agent count must be at least 1")]
    NoAgents,

    /// Open limit outside [1, N]. A limit of zero means no agent can ever
    /// succeed; rejecting it surfaces the misconfiguration instead of
    /// silently reporting zero successes.
    #[error("open limit must be between 1 and {agents}, got {open_limit}")]
    OpenLimitOutOfRange { open_limit: usize, agents: usize },

    /// Worker count of zero: no worker would ever run a trial.
    #[error("worker count must be at least 1")]
    NoWorkers,
}

/// Immutable configuration for one simulation run.
///
/// Passed by reference into every component; nothing in the engine reads
/// process-wide state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Number of agents (and containers), N
    pub agents: usize,

    /// Maximum containers one agent may open, L
    pub open_limit: usize,

    /// Total number of trials, T
    pub trials: u64,

    /// Number of parallel workers, W
    pub workers: usize,
}

impl SimulationConfig {
    /// Check the configuration invariants: N >= 1, 1 <= L <= N, W >= 1.
    ///
    /// T = 0 is valid but degenerate; the run returns zeroed totals.
    pub fn validate(&self) -> Result<(), InvalidConfiguration> {
        if self.agents == 0 {
            return Err(InvalidConfiguration::NoAgents);
        }
        if self.open_limit == 0 || self.open_limit > self.agents {
            return Err(InvalidConfiguration::OpenLimitOutOfRange {
                open_limit: self.open_limit,
                agents: self.agents,
            });
        }
        if self.workers == 0 {
            return Err(InvalidConfiguration::NoWorkers);
        }
        Ok(())
    }
}

impl Default for SimulationConfig {
    /// The classic riddle: 100 agents, each opening half the containers,
    /// over one million trials.
    fn default() -> Self {
        Self {
            agents: 100,
            open_limit: 50,
            trials: 1_000_000,
            workers: 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(SimulationConfig::default().validate().is_ok());
    }

    #[test]
    fn test_zero_agents_rejected() {
        let config = SimulationConfig {
            agents: 0,
            ..SimulationConfig::default()
        };
        assert_eq!(config.validate(), Err(InvalidConfiguration::NoAgents));
    }

    #[test]
    fn test_zero_open_limit_rejected() {
        let config = SimulationConfig {
            open_limit: 0,
            ..SimulationConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(InvalidConfiguration::OpenLimitOutOfRange {
                open_limit: 0,
                agents: 100,
            })
        );
    }

    #[test]
    fn test_open_limit_above_agents_rejected() {
        let config = SimulationConfig {
            agents: 10,
            open_limit: 11,
            ..SimulationConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(InvalidConfiguration::OpenLimitOutOfRange {
                open_limit: 11,
                agents: 10,
            })
        );
    }

    #[test]
    fn test_open_limit_equal_to_agents_accepted() {
        let config = SimulationConfig {
            agents: 10,
            open_limit: 10,
            ..SimulationConfig::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_workers_rejected() {
        let config = SimulationConfig {
            workers: 0,
            ..SimulationConfig::default()
        };
        assert_eq!(config.validate(), Err(InvalidConfiguration::NoWorkers));
    }

    #[test]
    fn test_zero_trials_is_valid() {
        let config = SimulationConfig {
            trials: 0,
            ..SimulationConfig::default()
        };
        assert!(config.validate().is_ok());
    }
}
