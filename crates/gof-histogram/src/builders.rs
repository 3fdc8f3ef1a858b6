//! Histogram building strategies

use crate::traits::HistogramBuilder;
use crate::types::{Histogram, HistogramBin};
use gof_core::{Error, Result};

/// Fixed-width histogram builder
///
/// Creates a histogram with a specified number of equal-width bins spanning
/// `[min, max]` of the sample. Every bin is half-open except the last one,
/// which also holds the sample maximum. A sample whose values are all equal
/// is binned over `[value - 0.5, value + 0.5]` so that every bin keeps a
/// positive width.
#[derive(Debug, Clone, Copy)]
pub struct FixedWidthBuilder {
    num_bins: usize,
}

impl FixedWidthBuilder {
    /// Create a new fixed-width histogram builder
    pub fn new(num_bins: usize) -> Self {
        Self {
            num_bins: num_bins.max(1),
        }
    }
}

impl HistogramBuilder for FixedWidthBuilder {
    fn build(&self, sample: &[f64]) -> Result<Histogram> {
        if sample.iter().any(|v| !v.is_finite()) {
            return Err(Error::non_finite("sample"));
        }
        let mut sorted = sample.to_vec();
        sorted.sort_by(|a, b| a.total_cmp(b));
        self.build_sorted(&sorted)
    }

    fn build_sorted(&self, sorted_sample: &[f64]) -> Result<Histogram> {
        let (Some(&first), Some(&last)) = (sorted_sample.first(), sorted_sample.last()) else {
            return Err(Error::InvalidInput(
                "cannot build a histogram from an empty sample".to_string(),
            ));
        };

        let (low, high) = if last > first {
            (first, last)
        } else {
            (first - 0.5, last + 0.5)
        };

        let width = (high - low) / self.num_bins as f64;
        let total = sorted_sample.len();
        let mut bins = Vec::with_capacity(self.num_bins);

        for i in 0..self.num_bins {
            let left = low + i as f64 * width;
            let right = if i == self.num_bins - 1 {
                high // Ensure last bin includes max
            } else {
                low + (i + 1) as f64 * width
            };
            bins.push(HistogramBin::new(left, right, 0));
        }

        // Single pass through sorted data
        let mut current_bin = 0;
        for &value in sorted_sample {
            while current_bin < self.num_bins - 1 && value >= bins[current_bin].right {
                current_bin += 1;
            }
            bins[current_bin].count += 1;
        }

        Ok(Histogram::new(bins, total, first, last))
    }

    fn target_bins(&self) -> Option<usize> {
        Some(self.num_bins)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_fixed_width_counts() {
        let data = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0];
        let hist = FixedWidthBuilder::new(3).build(&data).unwrap();

        assert_eq!(hist.len(), 3);
        assert_eq!(hist.counts(), vec![3, 3, 4]);
        assert_eq!(hist.total_count(), 10);
        assert_relative_eq!(hist.edges()[1], 4.0);
        assert_relative_eq!(hist.edges()[3], 10.0);
    }

    #[test]
    fn test_maximum_lands_in_last_bin() {
        let data = vec![0.0, 0.5, 1.0];
        let hist = FixedWidthBuilder::new(2).build(&data).unwrap();
        assert_eq!(hist.counts(), vec![1, 2]);
    }

    #[test]
    fn test_constant_sample() {
        let data = vec![3.0; 7];
        let hist = FixedWidthBuilder::new(2).build(&data).unwrap();

        assert_eq!(hist.edges(), vec![2.5, 3.0, 3.5]);
        assert_eq!(hist.counts(), vec![0, 7]);
    }

    #[test]
    fn test_unsorted_input() {
        let data = vec![9.0, 1.0, 5.0, 3.0, 7.0];
        let hist = FixedWidthBuilder::new(4).build(&data).unwrap();
        assert_eq!(hist.counts(), vec![1, 1, 1, 2]);
        assert_eq!(hist.min(), 1.0);
        assert_eq!(hist.max(), 9.0);
    }

    #[test]
    fn test_rejects_empty_and_non_finite() {
        let builder = FixedWidthBuilder::new(4);
        assert!(matches!(builder.build(&[]), Err(Error::InvalidInput(_))));
        assert!(matches!(
            builder.build(&[1.0, f64::NAN]),
            Err(Error::Computation(_))
        ));
    }

    #[test]
    fn test_zero_bins_clamped() {
        let builder = FixedWidthBuilder::new(0);
        assert_eq!(builder.target_bins(), Some(1));
    }
}
