//! Random container assignments.
//!
//! A trial's container assignment is a uniformly random bijection on [0, N):
//! container index in, hidden label out. Assignments are generated fresh per
//! trial from a seed and never mutated afterwards.

use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

/// A bijection on [0, n): the label hidden inside each container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Permutation(Vec<usize>);

impl Permutation {
    /// Generate a uniformly random assignment from a seed.
    ///
    /// The Fisher-Yates shuffle runs on a generator local to this call, so
    /// concurrent generation from distinct seeds never shares state, and
    /// identical (seed, n) always yields the identical assignment.
    pub fn generate(seed: u64, n: usize) -> Self {
        debug_assert!(n > 0, "assignment needs at least one container");
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut labels: Vec<usize> = (0..n).collect();
        labels.shuffle(&mut rng);
        Self(labels)
    }

    /// Build an assignment from explicit labels.
    ///
    /// # Panics
    ///
    /// Panics if `labels` is not a bijection on [0, len).
    pub fn from_labels(labels: Vec<usize>) -> Self {
        let mut seen = vec![false; labels.len()];
        for &label in &labels {
            assert!(
                label < labels.len() && !seen[label],
                "labels must form a bijection on [0, {})",
                labels.len()
            );
            seen[label] = true;
        }
        Self(labels)
    }

    /// Number of containers.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The label hidden inside `container`.
    pub fn label_at(&self, container: usize) -> usize {
        self.0[container]
    }

    /// All labels, indexed by container.
    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }
}
