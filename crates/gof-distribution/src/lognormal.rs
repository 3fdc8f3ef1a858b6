//! Three-parameter log-normal reference distribution

use crate::traits::ContinuousDistribution;
use gof_core::{Error, Result};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rand_distr::Distribution;
use statrs::distribution::{Continuous, ContinuousCDF, LogNormal};

/// Log-normal distribution `X = loc + scale * exp(shape * Z)` with `Z ~ N(0, 1)`
///
/// `shape` is the standard deviation of `ln((X - loc) / scale)`, `loc` shifts
/// the support to `(loc, inf)` and `scale` is the median of `X - loc`.
#[derive(Debug, Clone)]
pub struct LogNormalDistribution {
    shape: f64,
    loc: f64,
    scale: f64,
    dist: LogNormal,
    sampler: rand_distr::LogNormal<f64>,
}

impl LogNormalDistribution {
    /// Create a log-normal distribution
    ///
    /// # Errors
    ///
    /// [`Error::InvalidParameter`] unless `loc` is finite and both `shape`
    /// and `scale` are finite and positive.
    pub fn new(shape: f64, loc: f64, scale: f64) -> Result<Self> {
        if !(shape.is_finite() && shape > 0.0) {
            return Err(Error::InvalidParameter(format!(
                "log-normal shape must be positive and finite, got {shape}"
            )));
        }
        if !loc.is_finite() {
            return Err(Error::InvalidParameter(format!(
                "log-normal location must be finite, got {loc}"
            )));
        }
        if !(scale.is_finite() && scale > 0.0) {
            return Err(Error::InvalidParameter(format!(
                "log-normal scale must be positive and finite, got {scale}"
            )));
        }

        let mu = scale.ln();
        let dist = LogNormal::new(mu, shape).map_err(|e| {
            Error::Computation(format!("Failed to create log-normal distribution: {e}"))
        })?;
        let sampler = rand_distr::LogNormal::new(mu, shape).map_err(|e| {
            Error::Computation(format!("Failed to create log-normal sampler: {e}"))
        })?;

        Ok(Self {
            shape,
            loc,
            scale,
            dist,
            sampler,
        })
    }

    pub fn shape(&self) -> f64 {
        self.shape
    }

    pub fn loc(&self) -> f64 {
        self.loc
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }
}

impl ContinuousDistribution for LogNormalDistribution {
    fn name(&self) -> &'static str {
        "log-normal"
    }

    fn cdf(&self, x: f64) -> f64 {
        if x <= self.loc {
            return 0.0;
        }
        self.dist.cdf(x - self.loc)
    }

    fn pdf(&self, x: f64) -> f64 {
        if x <= self.loc {
            return 0.0;
        }
        self.dist.pdf(x - self.loc)
    }

    fn sample(&self, size: usize, seed: u64) -> Vec<f64> {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        (0..size)
            .map(|_| self.loc + self.sampler.sample(&mut rng))
            .collect()
    }

    // shape, loc and scale
    fn parameter_count(&self) -> usize {
        3
    }
}
