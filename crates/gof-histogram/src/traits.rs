//! Core traits for histogram building

use crate::types::Histogram;
use gof_core::Result;

/// Trait for building histograms from sample data
///
/// This is the seam where the bin-merging pipeline obtains its raw
/// histogram; any strategy that produces contiguous bins can be plugged in.
pub trait HistogramBuilder {
    /// Build a histogram from the given sample
    fn build(&self, sample: &[f64]) -> Result<Histogram>;

    /// Build a histogram from pre-sorted data
    ///
    /// Default implementation just calls build().
    fn build_sorted(&self, sorted_sample: &[f64]) -> Result<Histogram> {
        self.build(sorted_sample)
    }

    /// Get the target number of bins (if known)
    fn target_bins(&self) -> Option<usize> {
        None
    }
}
