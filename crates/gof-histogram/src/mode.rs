//! Mode-centered bin merging
//!
//! The histogram is cut at its modal bin. Bins left of the mode are merged
//! scanning forward, so sparse left-tail bins collect into the first group.
//! Bins from the mode onwards are merged scanning in reverse, so the right
//! tail is grouped from the outside in, towards the mode. The two merged
//! halves are then concatenated.

use crate::builders::FixedWidthBuilder;
use crate::merge::{merge_bins, MergeDirection};
use crate::pairing::pair_edges;
use crate::traits::HistogramBuilder;
use crate::types::{BinEdges, Histogram, MergedHistogram};
use gof_core::{Error, Result};
use tracing::{debug, instrument};

/// Index of the first bin holding the maximum count
///
/// Ties resolve to the lowest index. Returns `None` for an empty slice.
pub fn mode_index(counts: &[usize]) -> Option<usize> {
    let max = *counts.iter().max()?;
    counts.iter().position(|&c| c == max)
}

/// Outcome of splitting a histogram at its mode and merging both halves
#[derive(Debug, Clone, PartialEq)]
pub struct ModeSplit {
    /// Index of the modal bin in the unmerged histogram
    pub mode_index: usize,
    /// Left half merged forward followed by the right half merged in reverse
    pub merged: MergedHistogram,
}

/// Split at the mode, merge each half, and concatenate the results
///
/// # Errors
///
/// [`Error::DegenerateSplit`] when there are no bins at all, plus anything
/// [`merge_bins`] rejects.
pub fn split_at_mode(counts: &[usize], bins: &[BinEdges], threshold: usize) -> Result<ModeSplit> {
    if counts.len() != bins.len() {
        return Err(Error::size_mismatch(counts.len(), bins.len(), "mode split"));
    }
    let mode = mode_index(counts).ok_or(Error::DegenerateSplit)?;

    let (left_counts, right_counts) = counts.split_at(mode);
    let (left_bins, right_bins) = bins.split_at(mode);

    let left = merge_bins(left_counts, left_bins, threshold, MergeDirection::Forward)?;
    let right = merge_bins(right_counts, right_bins, threshold, MergeDirection::Reverse)?;

    debug!(
        mode,
        left = left.len(),
        right = right.len(),
        "merged both sides of the mode"
    );

    let merged = match (left.is_empty(), right.is_empty()) {
        (true, true) => return Err(Error::DegenerateSplit),
        (true, false) => right,
        (false, true) => left,
        (false, false) => left.concat(right),
    };

    Ok(ModeSplit {
        mode_index: mode,
        merged,
    })
}

/// A sample's raw histogram together with its mode-merged counterpart
#[derive(Debug, Clone, PartialEq)]
pub struct RecomputedHistogram {
    /// Histogram before merging
    pub original: Histogram,
    /// Index of the modal bin of `original`
    pub mode_index: usize,
    /// Histogram after mode-centered merging
    pub merged: MergedHistogram,
}

/// Bin `sample` into `n_bins` equal-width bins and merge them around the mode
#[instrument(skip(sample), fields(n = sample.len()))]
pub fn recompute_histogram(
    sample: &[f64],
    n_bins: usize,
    threshold: usize,
) -> Result<RecomputedHistogram> {
    let original = FixedWidthBuilder::new(n_bins).build(sample)?;
    let bins = pair_edges(&original.edges())?;
    let split = split_at_mode(&original.counts(), &bins, threshold)?;

    debug!(
        original = ?original.counts(),
        merged = ?split.merged.counts,
        "recomputed histogram"
    );

    Ok(RecomputedHistogram {
        original,
        mode_index: split.mode_index,
        merged: split.merged,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_bins(n: usize) -> Vec<BinEdges> {
        (0..n).map(|i| (i as f64, (i + 1) as f64)).collect()
    }

    #[test]
    fn test_mode_index_first_maximum() {
        assert_eq!(mode_index(&[3, 7, 7, 2]), Some(1));
        assert_eq!(mode_index(&[9, 1, 9]), Some(0));
        assert_eq!(mode_index(&[0, 0, 0]), Some(0));
        assert_eq!(mode_index(&[]), None);
    }

    #[test]
    fn test_split_worked_example() {
        let counts = [1, 2, 2, 10, 20, 15, 3, 1];
        let split = split_at_mode(&counts, &unit_bins(8), 5).unwrap();

        assert_eq!(split.mode_index, 4);
        // Left: [1, 2, 2] -> 5, [10] -> 10
        // Right scanned from the tail: [1, 3, 15] -> 19, [20] -> 20
        assert_eq!(split.merged.counts, vec![5, 10, 20, 19]);
        assert_eq!(
            split.merged.bins,
            vec![(0.0, 3.0), (3.0, 4.0), (4.0, 5.0), (5.0, 8.0)]
        );
    }

    #[test]
    fn test_mode_at_first_bin() {
        let counts = [12, 6, 2, 1];
        let split = split_at_mode(&counts, &unit_bins(4), 5).unwrap();

        assert_eq!(split.mode_index, 0);
        // Scanned from the tail: [1, 2, 6] -> 9, then [12]
        assert_eq!(split.merged.counts, vec![12, 9]);
        assert_eq!(split.merged.bins, vec![(0.0, 1.0), (1.0, 4.0)]);
    }

    #[test]
    fn test_mode_at_last_bin() {
        let counts = [1, 4, 6, 9];
        let split = split_at_mode(&counts, &unit_bins(4), 5).unwrap();

        assert_eq!(split.mode_index, 3);
        assert_eq!(split.merged.counts, vec![5, 6, 9]);
        assert_eq!(split.merged.bins, vec![(0.0, 2.0), (2.0, 3.0), (3.0, 4.0)]);
    }

    #[test]
    fn test_single_bin() {
        let split = split_at_mode(&[4], &unit_bins(1), 5).unwrap();
        assert_eq!(split.mode_index, 0);
        assert_eq!(split.merged.counts, vec![4]);
    }

    #[test]
    fn test_empty_histogram_is_degenerate() {
        assert!(matches!(
            split_at_mode(&[], &[], 5),
            Err(Error::DegenerateSplit)
        ));
    }

    #[test]
    fn test_recompute_histogram() {
        let sample: Vec<f64> = (0..100).map(|i| i as f64 / 10.0).collect();
        let recomputed = recompute_histogram(&sample, 10, 5).unwrap();

        assert_eq!(recomputed.original.len(), 10);
        assert_eq!(recomputed.merged.total_count(), 100);
        assert_eq!(recomputed.merged.edges().first(), Some(&0.0));
        assert_eq!(recomputed.merged.edges().last(), Some(&9.9));
    }
}
