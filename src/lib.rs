//! Chi-square goodness-of-fit testing with mode-centered histogram merging
//!
//! This crate bundles the workspace crates behind one dependency:
//!
//! - [`Error`] and [`Result`]: the error type shared by every crate
//! - [`histogram`]: equal-width histograms, bin merging and mode splitting
//! - [`distribution`]: normal and log-normal reference distributions
//! - [`chisquare`]: the chi-square evaluator and end-to-end test runner
//!
//! # Example
//!
//! ```rust
//! use gof_stats::prelude::*;
//!
//! let reference = NormalDistribution::new(10.0, 2.0).unwrap();
//! let sample = reference.sample(2000, 3);
//!
//! let test = GoodnessOfFitTest::builder()
//!     .estimated_params(false)
//!     .build()
//!     .unwrap();
//! let report = test.run(&sample, &reference).unwrap();
//! assert_eq!(report.merged().total_count(), 2000);
//! ```

pub use gof_chisquare as chisquare;
pub use gof_distribution as distribution;
pub use gof_histogram as histogram;

pub use gof_core::{Error, Result};

/// Commonly used items
pub mod prelude {
    pub use gof_chisquare::{
        chi_square_test, ChiSquareEvaluator, ChiSquareResult, GofConfig, GofReport, GofReporter,
        GoodnessOfFitTest, NullReporter, RecordingReporter, TracingReporter, Verdict,
    };
    pub use gof_core::{Error, Result};
    pub use gof_distribution::{
        build_distribution, ContinuousDistribution, DistributionParams, Family,
        LogNormalDistribution, NormalDistribution, ReferenceDistribution,
    };
    pub use gof_histogram::{
        merge_bins, pair_edges, recompute_histogram, split_at_mode, MergeDirection, MergedHistogram,
    };
}
