//! Normal reference distribution

use crate::traits::ContinuousDistribution;
use gof_core::{Error, Result};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rand_distr::Distribution;
use statrs::distribution::{Continuous, ContinuousCDF, Normal};

/// Normal distribution with location `loc` (mean) and scale `scale` (standard deviation)
#[derive(Debug, Clone)]
pub struct NormalDistribution {
    loc: f64,
    scale: f64,
    dist: Normal,
    sampler: rand_distr::Normal<f64>,
}

impl NormalDistribution {
    /// Create a normal distribution
    ///
    /// # Errors
    ///
    /// [`Error::InvalidParameter`] unless `loc` is finite and `scale` is
    /// finite and positive.
    pub fn new(loc: f64, scale: f64) -> Result<Self> {
        if !loc.is_finite() {
            return Err(Error::InvalidParameter(format!(
                "normal location must be finite, got {loc}"
            )));
        }
        if !(scale.is_finite() && scale > 0.0) {
            return Err(Error::InvalidParameter(format!(
                "normal scale must be positive and finite, got {scale}"
            )));
        }

        let dist = Normal::new(loc, scale).map_err(|e| {
            Error::Computation(format!("Failed to create normal distribution: {e}"))
        })?;
        let sampler = rand_distr::Normal::new(loc, scale).map_err(|e| {
            Error::Computation(format!("Failed to create normal sampler: {e}"))
        })?;

        Ok(Self {
            loc,
            scale,
            dist,
            sampler,
        })
    }

    pub fn loc(&self) -> f64 {
        self.loc
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }
}

impl ContinuousDistribution for NormalDistribution {
    fn name(&self) -> &'static str {
        "normal"
    }

    fn cdf(&self, x: f64) -> f64 {
        self.dist.cdf(x)
    }

    fn pdf(&self, x: f64) -> f64 {
        self.dist.pdf(x)
    }

    fn sample(&self, size: usize, seed: u64) -> Vec<f64> {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        (0..size).map(|_| self.sampler.sample(&mut rng)).collect()
    }

    fn parameter_count(&self) -> usize {
        2
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_cdf_and_pdf() {
        let normal = NormalDistribution::new(2.0, 3.0).unwrap();

        assert_relative_eq!(normal.cdf(2.0), 0.5, epsilon = 1e-12);
        assert_relative_eq!(normal.cdf(5.0), 0.841_344_746_068_542_9, epsilon = 1e-9);
        assert_relative_eq!(
            normal.pdf(2.0),
            1.0 / (3.0 * (2.0 * std::f64::consts::PI).sqrt()),
            epsilon = 1e-12
        );
        assert_relative_eq!(
            normal.probability_between(-1.0, 5.0),
            0.682_689_492_137_086,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_parameter_count() {
        let normal = NormalDistribution::new(0.0, 1.0).unwrap();
        assert_eq!((normal.loc(), normal.scale()), (0.0, 1.0));
        assert_eq!(normal.parameter_count(), 2);
        assert_eq!(normal.name(), "normal");
    }

    #[test]
    fn test_seeded_sampling_is_reproducible() {
        let normal = NormalDistribution::new(10.0, 2.0).unwrap();

        let a = normal.sample(500, 1);
        let b = normal.sample(500, 1);
        let c = normal.sample(500, 2);
        assert_eq!(a, b);
        assert_ne!(a, c);

        let mean = a.iter().sum::<f64>() / a.len() as f64;
        assert!((mean - 10.0).abs() < 0.5, "sample mean {mean} too far from 10");
    }

    #[test]
    fn test_invalid_parameters() {
        assert!(matches!(
            NormalDistribution::new(0.0, 0.0),
            Err(Error::InvalidParameter(_))
        ));
        assert!(matches!(
            NormalDistribution::new(0.0, -1.0),
            Err(Error::InvalidParameter(_))
        ));
        assert!(matches!(
            NormalDistribution::new(f64::NAN, 1.0),
            Err(Error::InvalidParameter(_))
        ));
    }
}
