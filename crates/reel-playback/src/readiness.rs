//! Metadata readiness gate.

use std::collections::BTreeSet;

/// Counts distinct clips whose duration metadata has loaded.
///
/// The count never decreases. Once it reaches the threshold the first play
/// command may be issued; later transitions are not gated.
#[derive(Debug, Clone)]
pub struct ReadinessTracker {
    loaded: BTreeSet<usize>,
    threshold: usize,
}

impl ReadinessTracker {
    pub fn new(threshold: usize) -> Self {
        Self {
            loaded: BTreeSet::new(),
            threshold,
        }
    }

    /// Record that `index` has loaded its metadata. Returns `false` for a
    /// repeat report of the same index.
    pub fn record_loaded(&mut self, index: usize) -> bool {
        self.loaded.insert(index)
    }

    pub fn count(&self) -> usize {
        self.loaded.len()
    }

    pub fn threshold(&self) -> usize {
        self.threshold
    }

    pub fn is_loaded(&self, index: usize) -> bool {
        self.loaded.contains(&index)
    }

    pub fn is_ready(&self) -> bool {
        self.loaded.len() >= self.threshold
    }
}
