//! Chi-square statistic and critical value for a merged histogram

use crate::types::{ChiSquareResult, Verdict};
use gof_core::{Error, Result};
use gof_distribution::ContinuousDistribution;
use gof_histogram::MergedHistogram;
use statrs::distribution::{ChiSquared, Continuous, ContinuousCDF};
use tracing::debug;

/// Default significance level, in percent
pub const DEFAULT_SIGNIFICANCE: f64 = 5.0;

/// Newton steps applied on top of the bisection quantile
const NEWTON_STEPS: usize = 4;

/// Chi-square goodness-of-fit evaluator
///
/// Compares observed bin counts with the counts a reference distribution
/// predicts for the same bins. When the distribution's parameters were
/// estimated from the tested sample, each parameter costs one degree of
/// freedom.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChiSquareEvaluator {
    /// Significance level in percent (5 means 95% confidence)
    significance: f64,
    /// Whether the distribution parameters were estimated from the sample
    estimated_params: bool,
}

impl Default for ChiSquareEvaluator {
    fn default() -> Self {
        Self {
            significance: DEFAULT_SIGNIFICANCE,
            estimated_params: true,
        }
    }
}

impl ChiSquareEvaluator {
    /// Create an evaluator
    ///
    /// # Errors
    ///
    /// [`Error::InvalidParameter`] unless `significance` lies in `(0, 100)`.
    pub fn new(significance: f64, estimated_params: bool) -> Result<Self> {
        validate_significance(significance)?;
        Ok(Self {
            significance,
            estimated_params,
        })
    }

    pub fn significance(&self) -> f64 {
        self.significance
    }

    pub fn estimated_params(&self) -> bool {
        self.estimated_params
    }

    /// Confidence level as a fraction
    pub fn confidence(&self) -> f64 {
        (100.0 - self.significance) / 100.0
    }

    /// Expected count of every merged bin under `dist`
    pub fn expected_counts(
        merged: &MergedHistogram,
        dist: &dyn ContinuousDistribution,
    ) -> Vec<f64> {
        let total = merged.total_count() as f64;
        merged
            .bins
            .iter()
            .map(|&(lower, upper)| total * dist.probability_between(lower, upper))
            .collect()
    }

    /// Run the test on a merged histogram
    ///
    /// # Errors
    ///
    /// - [`Error::ZeroExpectedCount`] when `dist` assigns no mass to a bin
    /// - [`Error::InsufficientDegreesOfFreedom`] when bins - 1 - parameters < 1
    pub fn evaluate(
        &self,
        merged: &MergedHistogram,
        dist: &dyn ContinuousDistribution,
    ) -> Result<ChiSquareResult> {
        let expected = Self::expected_counts(merged, dist);

        let mut statistic = 0.0;
        for (bin_index, ((observed, (lower, upper)), &exp)) in
            merged.iter().zip(&expected).enumerate()
        {
            if !(exp.is_finite() && exp > 0.0) {
                return Err(Error::ZeroExpectedCount {
                    bin_index,
                    lower,
                    upper,
                });
            }
            let diff = observed as f64 - exp;
            statistic += diff * diff / exp;
        }

        let parameter_count = if self.estimated_params {
            dist.parameter_count()
        } else {
            0
        };

        let bin_count = merged.len();
        let dof = bin_count as i64 - 1 - parameter_count as i64;
        if dof < 1 {
            return Err(Error::InsufficientDegreesOfFreedom {
                bins: bin_count,
                estimated_params: parameter_count,
                dof,
            });
        }

        let critical_value = critical_value(dof as usize, self.confidence())?;
        let verdict = Verdict::from_statistic(statistic, critical_value);

        debug!(
            distribution = dist.name(),
            statistic,
            critical_value,
            dof,
            %verdict,
            "evaluated chi-square statistic"
        );

        Ok(ChiSquareResult {
            sample_count: merged.total_count(),
            bin_count,
            degrees_of_freedom: dof as usize,
            parameter_count,
            statistic,
            critical_value,
            significance: self.significance,
            verdict,
        })
    }
}

/// Quantile of the chi-square distribution with `dof` degrees of freedom
///
/// statrs only bisects the CDF to a coarse tolerance, so the bisection result
/// is polished with a few Newton steps on `cdf(x) - confidence`.
pub fn critical_value(dof: usize, confidence: f64) -> Result<f64> {
    if !(confidence > 0.0 && confidence < 1.0) {
        return Err(Error::InvalidParameter(format!(
            "confidence must be in (0, 1), got {confidence}"
        )));
    }
    let chi2 = ChiSquared::new(dof as f64).map_err(|e| {
        Error::Computation(format!("Failed to create chi-square distribution: {e}"))
    })?;

    let mut value = chi2.inverse_cdf(confidence);
    for _ in 0..NEWTON_STEPS {
        let density = chi2.pdf(value);
        if !(density.is_finite() && density > 0.0) {
            break;
        }
        let next = value - (chi2.cdf(value) - confidence) / density;
        // Stay inside the support
        value = if next > 0.0 { next } else { value / 2.0 };
    }

    if !value.is_finite() {
        return Err(Error::non_finite("chi-square critical value"));
    }
    Ok(value)
}

pub(crate) fn validate_significance(significance: f64) -> Result<()> {
    if significance > 0.0 && significance < 100.0 {
        Ok(())
    } else {
        Err(Error::InvalidParameter(format!(
            "significance must be a percentage in (0, 100), got {significance}"
        )))
    }
}
