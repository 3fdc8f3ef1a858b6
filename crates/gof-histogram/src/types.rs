//! Core types for histogram representation

use serde::{Deserialize, Serialize};
use std::fmt;

/// A `(lower, upper)` pair describing the half-open interval `[lower, upper)`
pub type BinEdges = (f64, f64);

/// A single bin in a histogram
#[derive(Debug, Clone, PartialEq)]
pub struct HistogramBin {
    /// Left edge of the bin (inclusive)
    pub left: f64,
    /// Right edge of the bin (exclusive, except for the last bin)
    pub right: f64,
    /// Number of values in this bin
    pub count: usize,
}

impl HistogramBin {
    /// Create a new histogram bin
    pub fn new(left: f64, right: f64, count: usize) -> Self {
        Self { left, right, count }
    }
}

impl fmt::Display for HistogramBin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:.3}, {:.3}): count={}", self.left, self.right, self.count)
    }
}

/// A histogram representation of a sample
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    bins: Vec<HistogramBin>,
    total_count: usize,
    min: f64,
    max: f64,
}

impl Histogram {
    /// Create a new histogram
    pub fn new(bins: Vec<HistogramBin>, total_count: usize, min: f64, max: f64) -> Self {
        Self {
            bins,
            total_count,
            min,
            max,
        }
    }

    /// Get the number of bins
    pub fn len(&self) -> usize {
        self.bins.len()
    }

    /// Check if the histogram is empty
    pub fn is_empty(&self) -> bool {
        self.bins.is_empty()
    }

    /// Get the total count of data points
    pub fn total_count(&self) -> usize {
        self.total_count
    }

    /// Get the minimum value
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Get the maximum value
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Get the maximum count in any bin
    pub fn max_count(&self) -> usize {
        self.bins.iter().map(|bin| bin.count).max().unwrap_or(0)
    }

    /// Get counts as a vector
    pub fn counts(&self) -> Vec<usize> {
        self.bins.iter().map(|bin| bin.count).collect()
    }

    /// Get bin edges (including rightmost edge)
    pub fn edges(&self) -> Vec<f64> {
        let Some(last) = self.bins.last() else {
            return vec![];
        };

        let mut edges = Vec::with_capacity(self.bins.len() + 1);
        edges.extend(self.bins.iter().map(|bin| bin.left));
        edges.push(last.right);
        edges
    }
}

impl fmt::Display for Histogram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Histogram({} bins, n={}, range=[{:.3}, {:.3}])",
            self.len(),
            self.total_count,
            self.min,
            self.max
        )
    }
}

/// Histogram whose adjacent bins have been merged to reach a minimum count
///
/// `counts[i]` is the observation count of `bins[i]`. Bins are contiguous and
/// ordered from left to right.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MergedHistogram {
    pub counts: Vec<usize>,
    pub bins: Vec<BinEdges>,
}

impl MergedHistogram {
    /// Create a merged histogram from parallel count and bin vectors
    pub fn new(counts: Vec<usize>, bins: Vec<BinEdges>) -> Self {
        debug_assert_eq!(counts.len(), bins.len());
        Self { counts, bins }
    }

    /// Number of merged bins
    pub fn len(&self) -> usize {
        self.bins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bins.is_empty()
    }

    /// Sum of all counts
    pub fn total_count(&self) -> usize {
        self.counts.iter().sum()
    }

    /// Smallest count in any merged bin
    pub fn min_count(&self) -> Option<usize> {
        self.counts.iter().copied().min()
    }

    /// Flat edge sequence: the first lower edge followed by every upper edge
    pub fn edges(&self) -> Vec<f64> {
        let Some(&(first, _)) = self.bins.first() else {
            return vec![];
        };

        let mut edges = Vec::with_capacity(self.bins.len() + 1);
        edges.push(first);
        edges.extend(self.bins.iter().map(|&(_, upper)| upper));
        edges
    }

    /// Append another merged histogram to the right of this one
    pub fn concat(mut self, other: MergedHistogram) -> Self {
        self.counts.extend(other.counts);
        self.bins.extend(other.bins);
        self
    }

    /// Iterate over `(count, (lower, upper))` pairs
    pub fn iter(&self) -> impl Iterator<Item = (usize, BinEdges)> + '_ {
        self.counts.iter().copied().zip(self.bins.iter().copied())
    }
}

impl fmt::Display for MergedHistogram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "MergedHistogram({} bins, n={}, counts={:?})",
            self.len(),
            self.total_count(),
            self.counts
        )
    }
}
