//! Histogram construction and adaptive bin merging for chi-square tests
//!
//! A chi-square goodness-of-fit statistic is only meaningful when every bin
//! holds a minimum number of observations. This crate builds a fixed-width
//! histogram of a sample and then merges adjacent bins around the histogram's
//! mode until that minimum is met.
//!
//! # Pipeline
//!
//! 1. [`FixedWidthBuilder`] bins the sample (any [`HistogramBuilder`] works).
//! 2. [`pair_edges`] turns the `N + 1` edges into `N` `(lower, upper)` pairs.
//! 3. [`split_at_mode`] finds the first modal bin, merges the left side
//!    forward and the right side in reverse with [`merge_bins`], and
//!    concatenates the two halves.
//!
//! # Example
//!
//! ```rust
//! use gof_histogram::{pair_edges, split_at_mode};
//!
//! let counts = [1, 2, 2, 10, 20, 15, 3, 1];
//! let edges: Vec<f64> = (0..=8).map(|i| i as f64).collect();
//! let bins = pair_edges(&edges).unwrap();
//!
//! let split = split_at_mode(&counts, &bins, 5).unwrap();
//! assert_eq!(split.mode_index, 4);
//! assert_eq!(split.merged.counts, vec![5, 10, 20, 19]);
//! assert_eq!(split.merged.total_count(), 54);
//! ```
//!
//! The end-to-end helper [`recompute_histogram`] runs all three steps on a
//! raw sample.

pub mod builders;
pub mod merge;
pub mod mode;
pub mod pairing;
pub mod traits;
pub mod types;

// Re-export main types and functions
pub use builders::FixedWidthBuilder;
pub use merge::{merge_bins, MergeDirection, DEFAULT_THRESHOLD};
pub use mode::{mode_index, recompute_histogram, split_at_mode, ModeSplit, RecomputedHistogram};
pub use pairing::pair_edges;
pub use traits::HistogramBuilder;
pub use types::{BinEdges, Histogram, HistogramBin, MergedHistogram};

pub use gof_core::Result;
