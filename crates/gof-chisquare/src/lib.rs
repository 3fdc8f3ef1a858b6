//! Chi-square goodness-of-fit testing with mode-centered bin merging
//!
//! This crate tests whether a sample plausibly comes from a normal or
//! log-normal reference distribution.
//!
//! # Algorithm Overview
//!
//! 1. Bin the sample into equal-width bins
//! 2. Merge adjacent bins around the histogram's mode until each holds at
//!    least `threshold` observations (left of the mode scanning forward,
//!    from the mode onwards scanning back from the right tail)
//! 3. Compare observed and expected bin counts with the chi-square statistic
//! 4. Reject the distribution when the statistic reaches the chi-square
//!    quantile for `bins - 1 - estimated parameters` degrees of freedom
//!
//! Parameter estimation is left to the caller.
//!
//! # Examples
//!
//! ## Basic Usage
//!
//! ```rust
//! use gof_chisquare::chi_square_test;
//! use gof_distribution::{ContinuousDistribution, NormalDistribution};
//!
//! let reference = NormalDistribution::new(0.0, 1.0).unwrap();
//! let sample = reference.sample(5000, 7);
//!
//! let report = chi_square_test(&sample, &reference).unwrap();
//! println!("{}", report.result);
//! assert_eq!(report.result.sample_count, 5000);
//! ```
//!
//! ## Custom Configuration
//!
//! ```rust
//! use gof_chisquare::{GoodnessOfFitTest, TracingReporter};
//! use gof_distribution::{ContinuousDistribution, DistributionParams, Family};
//!
//! let test = GoodnessOfFitTest::builder()
//!     .n_bins(15)
//!     .threshold(10)
//!     .significance(1.0)
//!     .reporter(TracingReporter)
//!     .build()
//!     .unwrap();
//!
//! let params = DistributionParams::new(0.0, 2.0).with_shape(0.4);
//! let sample = gof_distribution::build_distribution(Family::LogNormal, params)
//!     .unwrap()
//!     .sample(3000, 11);
//!
//! let report = test.run_family(&sample, Family::LogNormal, params).unwrap();
//! assert_eq!(report.result.parameter_count, 3);
//! ```

pub mod config;
pub mod evaluator;
pub mod pipeline;
pub mod reporter;
pub mod types;

// Re-exports
pub use config::{GofConfig, DEFAULT_BINS};
pub use evaluator::{critical_value, ChiSquareEvaluator, DEFAULT_SIGNIFICANCE};
pub use pipeline::{chi_square_test, default_test, GoodnessOfFitTest, GoodnessOfFitTestBuilder};
pub use reporter::{GofReporter, NullReporter, Recorded, RecordingReporter, TracingReporter};
pub use types::{ChiSquareResult, GofReport, Verdict};

pub use gof_core::{Error, Result};
