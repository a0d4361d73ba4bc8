//! A single trial: one container assignment, both strategies.

use crate::permutation::Permutation;
use crate::strategy;

/// Stream-separation constant for the random-search generator. XORed into
/// the trial seed so the random-search draws never coincide with the
/// assignment's own stream.
const RANDOM_SEARCH_STREAM: u64 = 0x9E37_79B9_7F4A_7C15;

/// Success flags for one trial.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrialOutcome {
    /// The group found every label by independent random search.
    pub random_search: bool,
    /// The group found every label by cycle following.
    pub cycle_following: bool,
}

/// Run one trial: generate the assignment for `seed`, then evaluate both
/// strategies against it.
///
/// Pure function of its arguments; safe to call concurrently across distinct
/// seeds.
pub fn run_trial(agents: usize, open_limit: usize, seed: u64) -> TrialOutcome {
    let permutation = Permutation::generate(seed, agents);
    TrialOutcome {
        random_search: strategy::random_search(
            &permutation,
            open_limit,
            seed ^ RANDOM_SEARCH_STREAM,
        ),
        cycle_following: strategy::cycle_following(&permutation, open_limit),
    }
}
