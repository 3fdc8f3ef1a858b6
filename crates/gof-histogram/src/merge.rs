//! Greedy merging of adjacent histogram bins
//!
//! Chi-square tests are only trustworthy when every bin holds a minimum
//! number of observations (classically 5). [`merge_bins`] walks the bins in
//! one direction and fuses each bin with its successors until the running
//! count reaches the threshold.
//!
//! # Remainder policy
//!
//! Accumulation only ever moves forward. If the sequence runs out before the
//! last group reaches the threshold, that group is emitted with its
//! under-threshold count. It is never folded back into the previous group.
//! In [`MergeDirection::Reverse`] the short group therefore ends up first in
//! the output.

use crate::types::{BinEdges, MergedHistogram};
use gof_core::{Error, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Default minimum number of observations per merged bin
pub const DEFAULT_THRESHOLD: usize = 5;

/// Direction in which bins are scanned while merging
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MergeDirection {
    /// Scan from the first bin to the last
    #[default]
    Forward,
    /// Scan from the last bin to the first; output keeps the original orientation
    Reverse,
}

/// Merge contiguous bins until every group holds at least `threshold` counts
///
/// `counts[i]` must be the count of `bins[i]`. The returned histogram is in
/// the same left-to-right orientation as the input regardless of
/// `direction`, and its total count equals `counts.iter().sum()`.
///
/// # Errors
///
/// [`Error::InvalidInput`] when `counts` and `bins` differ in length and
/// [`Error::InvalidParameter`] when `threshold` is zero.
///
/// # Example
///
/// ```rust
/// use gof_histogram::{merge_bins, MergeDirection};
///
/// let counts = [1, 2, 2, 10];
/// let bins = [(0.0, 1.0), (1.0, 2.0), (2.0, 3.0), (3.0, 4.0)];
/// let merged = merge_bins(&counts, &bins, 5, MergeDirection::Forward).unwrap();
///
/// assert_eq!(merged.counts, vec![5, 10]);
/// assert_eq!(merged.bins, vec![(0.0, 3.0), (3.0, 4.0)]);
/// ```
pub fn merge_bins(
    counts: &[usize],
    bins: &[BinEdges],
    threshold: usize,
    direction: MergeDirection,
) -> Result<MergedHistogram> {
    if counts.len() != bins.len() {
        return Err(Error::size_mismatch(counts.len(), bins.len(), "bin merge"));
    }
    if threshold == 0 {
        return Err(Error::InvalidParameter(
            "merge threshold must be positive".to_string(),
        ));
    }

    let n = counts.len();
    // Position k of the scan maps to this index of the input
    let at = |k: usize| match direction {
        MergeDirection::Forward => k,
        MergeDirection::Reverse => n - 1 - k,
    };

    let mut new_counts = Vec::new();
    let mut new_bins = Vec::new();

    let mut k = 0;
    while k < n {
        let start = k;
        let mut sum = counts[at(k)];
        while sum < threshold && k + 1 < n {
            k += 1;
            sum += counts[at(k)];
        }

        let (a, b) = (at(start), at(k));
        let (first, last) = (a.min(b), a.max(b));
        new_counts.push(sum);
        new_bins.push((bins[first].0, bins[last].1));

        if sum < threshold {
            warn!(
                count = sum,
                threshold,
                ?direction,
                "trailing merged bin [{}, {}) stays below threshold",
                bins[first].0,
                bins[last].1
            );
        }

        k += 1;
    }

    if direction == MergeDirection::Reverse {
        new_counts.reverse();
        new_bins.reverse();
    }

    debug!(
        original = n,
        merged = new_counts.len(),
        ?direction,
        "merged histogram bins"
    );

    Ok(MergedHistogram::new(new_counts, new_bins))
}
