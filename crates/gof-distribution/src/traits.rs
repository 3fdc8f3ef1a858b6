//! The capability every reference distribution provides

use std::fmt;

/// A continuous distribution that observed bins can be tested against
///
/// The trait is object safe so the chi-square evaluator can work with
/// `&dyn ContinuousDistribution` and stay independent of the concrete family.
pub trait ContinuousDistribution: fmt::Debug + Send + Sync {
    /// Short family name, e.g. `"normal"`
    fn name(&self) -> &'static str;

    /// Cumulative probability `P(X <= x)`
    fn cdf(&self, x: f64) -> f64;

    /// Probability density at `x`
    fn pdf(&self, x: f64) -> f64;

    /// Draw `size` values using a generator seeded with `seed`
    ///
    /// The same seed always yields the same sample.
    fn sample(&self, size: usize, seed: u64) -> Vec<f64>;

    /// Number of named parameters the distribution was constructed with
    ///
    /// When those parameters were estimated from the tested sample, each one
    /// costs a degree of freedom.
    fn parameter_count(&self) -> usize;

    /// Probability mass assigned to `[lower, upper)`
    fn probability_between(&self, lower: f64, upper: f64) -> f64 {
        self.cdf(upper) - self.cdf(lower)
    }
}
