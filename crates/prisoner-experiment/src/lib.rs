//! Monte Carlo engine for the 100 prisoners riddle.
//!
//! N agents must each find their own label, hidden in one of N containers,
//! opening at most L containers apiece with no communication. The engine
//! estimates the group success probability of two strategies over a large
//! trial count:
//! - independent random search: each agent inspects L containers in its own
//!   random order
//! - cycle following: each agent starts at the container matching its own
//!   index and follows the chain of labels it uncovers
//!
//! Every trial is seeded by its trial index, so the aggregate counts are
//! bit-for-bit identical for any worker count.

pub mod config;
pub mod permutation;
pub mod results;
pub mod simulation;
pub mod strategy;
pub mod trial;

pub use config::{InvalidConfiguration, SimulationConfig};
pub use permutation::Permutation;
pub use results::{RateSummary, RunResult};
pub use simulation::{simulate, SimulationTotals};
pub use trial::{run_trial, TrialOutcome};
