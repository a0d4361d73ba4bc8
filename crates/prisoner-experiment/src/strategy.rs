//! Group-success evaluators for the two label-discovery strategies.
//!
//! Both evaluators short-circuit at the first failing agent: group success is
//! a conjunction over all agents, so one failure settles the outcome. The
//! short-circuit never changes the returned boolean, only the work done.

use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

use crate::permutation::Permutation;

/// Evaluate the independent-random-search strategy.
///
/// Each agent shuffles its own inspection order and opens the first
/// `open_limit` containers; the agent succeeds iff one of them holds its own
/// label. One generator is seeded per call and reused across agents, so the
/// whole evaluation is a deterministic function of `seed`. The search-order
/// buffer persists across agents; reshuffling a permuted buffer is still a
/// uniform draw.
pub fn random_search(permutation: &Permutation, open_limit: usize, seed: u64) -> bool {
    let n = permutation.len();
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut search_order: Vec<usize> = (0..n).collect();

    for agent in 0..n {
        search_order.shuffle(&mut rng);
        let found = search_order
            .iter()
            .take(open_limit)
            .any(|&container| permutation.label_at(container) == agent);
        if !found {
            return false;
        }
    }
    true
}

/// Evaluate the cycle-following strategy.
///
/// Each agent starts at the container matching its own index and repeatedly
/// follows the label it uncovers, for at most `open_limit` opens. The path
/// traces exactly the permutation cycle through the agent's index, so the
/// agent succeeds iff that cycle has length <= `open_limit`. Consumes no
/// randomness.
pub fn cycle_following(permutation: &Permutation, open_limit: usize) -> bool {
    for agent in 0..permutation.len() {
        let mut container = agent;
        let mut found = false;
        for _ in 0..open_limit {
            let label = permutation.label_at(container);
            if label == agent {
                found = true;
                break;
            }
            container = label;
        }
        if !found {
            return false;
        }
    }
    true
}
