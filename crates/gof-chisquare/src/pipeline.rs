//! End-to-end goodness-of-fit runs: sample in, verdict out

use crate::config::GofConfig;
use crate::evaluator::ChiSquareEvaluator;
use crate::reporter::{GofReporter, NullReporter};
use crate::types::GofReport;
use gof_core::Result;
use gof_distribution::{build_distribution, ContinuousDistribution, DistributionParams, Family};
use gof_histogram::recompute_histogram;
use tracing::{debug, instrument};

/// A configured chi-square goodness-of-fit test
///
/// Each run bins the sample, merges bins around the mode until they hold
/// `threshold` observations, and evaluates the merged histogram against a
/// reference distribution. Runs share no state, so one test can be reused
/// across samples and threads.
#[derive(Debug, Clone)]
pub struct GoodnessOfFitTest<R = NullReporter> {
    config: GofConfig,
    evaluator: ChiSquareEvaluator,
    reporter: R,
}

impl GoodnessOfFitTest<NullReporter> {
    /// Start configuring a test with the default settings
    pub fn builder() -> GoodnessOfFitTestBuilder<NullReporter> {
        GoodnessOfFitTestBuilder::new(NullReporter)
    }
}

impl<R: GofReporter> GoodnessOfFitTest<R> {
    pub fn config(&self) -> &GofConfig {
        &self.config
    }

    pub fn evaluator(&self) -> &ChiSquareEvaluator {
        &self.evaluator
    }

    pub fn reporter(&self) -> &R {
        &self.reporter
    }

    /// Test `sample` against `dist`
    #[instrument(skip(self, sample, dist), fields(n = sample.len(), distribution = dist.name()))]
    pub fn run(&self, sample: &[f64], dist: &dyn ContinuousDistribution) -> Result<GofReport> {
        let histogram = recompute_histogram(sample, self.config.n_bins, self.config.threshold)?;
        self.reporter.record_histogram(&histogram.original)?;
        self.reporter
            .record_merged(&histogram.merged, histogram.mode_index, self.config.threshold)?;

        let result = self.evaluator.evaluate(&histogram.merged, dist)?;
        self.reporter.record_result(&result)?;

        debug!(verdict = %result.verdict, "goodness-of-fit run complete");
        Ok(GofReport { histogram, result })
    }

    /// Test `sample` against a distribution built from a family and parameters
    pub fn run_family(
        &self,
        sample: &[f64],
        family: Family,
        params: DistributionParams,
    ) -> Result<GofReport> {
        let dist = build_distribution(family, params)?;
        self.run(sample, &dist)
    }
}

/// Builder for [`GoodnessOfFitTest`]
pub struct GoodnessOfFitTestBuilder<R> {
    reporter: R,
    config: GofConfig,
}

impl<R> GoodnessOfFitTestBuilder<R>
where
    R: GofReporter,
{
    /// Creates a builder with default settings.
    ///
    /// # Arguments
    /// * `reporter` - Sink for the histograms and result of every run
    pub fn new(reporter: R) -> Self {
        Self {
            reporter,
            config: GofConfig::default(),
        }
    }

    /// Replaces every setting at once.
    pub fn config(mut self, config: GofConfig) -> Self {
        self.config = config;
        self
    }

    /// Sets the number of equal-width bins before merging (at least 1).
    pub fn n_bins(mut self, n_bins: usize) -> Self {
        self.config.n_bins = n_bins.max(1);
        self
    }

    /// Sets the minimum observation count per merged bin (at least 1).
    pub fn threshold(mut self, threshold: usize) -> Self {
        self.config.threshold = threshold.max(1);
        self
    }

    /// Sets the significance level in percent.
    ///
    /// 5 means the test is run at 95% confidence.
    pub fn significance(mut self, significance: f64) -> Self {
        self.config.significance = significance;
        self
    }

    /// Sets whether the distribution parameters came from the tested sample.
    pub fn estimated_params(mut self, estimated: bool) -> Self {
        self.config.estimated_params = estimated;
        self
    }

    /// Swaps the reporter.
    pub fn reporter<S: GofReporter>(self, reporter: S) -> GoodnessOfFitTestBuilder<S> {
        GoodnessOfFitTestBuilder {
            reporter,
            config: self.config,
        }
    }

    /// Validates the settings and builds the test.
    pub fn build(self) -> Result<GoodnessOfFitTest<R>> {
        self.config.validate()?;
        let evaluator =
            ChiSquareEvaluator::new(self.config.significance, self.config.estimated_params)?;

        Ok(GoodnessOfFitTest {
            config: self.config,
            evaluator,
            reporter: self.reporter,
        })
    }
}

/// Convenience function for a test with default settings and no reporting.
pub fn default_test() -> GoodnessOfFitTest<NullReporter> {
    GoodnessOfFitTest {
        config: GofConfig::default(),
        evaluator: ChiSquareEvaluator::default(),
        reporter: NullReporter,
    }
}

/// Convenience function for a one-off test with default settings.
pub fn chi_square_test(sample: &[f64], dist: &dyn ContinuousDistribution) -> Result<GofReport> {
    default_test().run(sample, dist)
}
