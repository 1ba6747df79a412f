//! Detection of continuous spans of adjacent release ranges.
//!
//! Two ranges are adjacent when the first one's target release is
//! literally the next one's reference release. Adjacency only looks
//! forward through the collection in discovery order; nothing is sorted
//! here, so callers wanting version-ordered chains must order the
//! collection themselves.

use crate::core::{ReleaseRange, SeverityTally};
use serde::{Deserialize, Serialize};

/// One continuous span `[start, end]` of adjacent ranges, with the
/// combined severity totals of every range it covers. Derived data,
/// recomputed per detection pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chain {
    pub start: usize,
    pub end: usize,
    pub start_release: String,
    pub end_release: String,
    pub totals: SeverityTally,
}

impl Chain {
    fn over(ranges: &[ReleaseRange], start: usize, end: usize) -> Self {
        let mut totals = SeverityTally::default();
        for range in &ranges[start..=end] {
            totals.merge(&range.totals);
        }
        Self {
            start,
            end,
            start_release: ranges[start].reference_release.clone(),
            end_release: ranges[end].target_release.clone(),
            totals,
        }
    }

    /// Release labels with underscores, as used in summary file names
    /// (e.g. `5_0_0-to-5_2_0`)
    pub fn file_stem(&self) -> String {
        format!(
            "{}-to-{}",
            self.start_release.replace('.', "_"),
            self.end_release.replace('.', "_")
        )
    }
}

/// Enumerate every continuous span of length >= 2.
///
/// Each extension step is emitted separately: adjacent ranges A-B-C
/// yield the spans A-B, A-C, and B-C, so a reader gets a summary for
/// every interval they might be upgrading across, not just the longest
/// one.
pub fn detect_chains(ranges: &[ReleaseRange]) -> Vec<Chain> {
    let mut chains = Vec::new();

    for start in 0..ranges.len() {
        for end in start + 1..ranges.len() {
            if ranges[end - 1].target_release != ranges[end].reference_release {
                break;
            }
            chains.push(Chain::over(ranges, start, end));
        }
    }

    chains
}
