//! Per-neighborhood run statistics.

use serde::{Deserialize, Serialize};

use crate::neighborhood::NeighborhoodKind;

/// Observational counters collected during a run.
///
/// These never influence the search; they exist so callers can see
/// which structures shaking and descent actually spent their moves in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NeighborhoodStats {
    /// Shake applications per strength `k` (index `k - 1`).
    pub shakes: [u64; NeighborhoodKind::COUNT],
    /// Accepted descent improvements per structure, canonically indexed.
    pub descent_improvements: [u64; NeighborhoodKind::COUNT],
}

impl NeighborhoodStats {
    pub(crate) fn record_shake(&mut self, k: usize) {
        self.shakes[k - 1] += 1;
    }

    pub(crate) fn absorb_descent(&mut self, improvements: &[u64; NeighborhoodKind::COUNT]) {
        for (total, count) in self.descent_improvements.iter_mut().zip(improvements) {
            *total += count;
        }
    }

    /// Total shake applications across all strengths.
    pub fn total_shakes(&self) -> u64 {
        self.shakes.iter().sum()
    }

    /// Total accepted descent improvements across all structures.
    pub fn total_improvements(&self) -> u64 {
        self.descent_improvements.iter().sum()
    }
}
