//! Construction of reference distributions from a family tag and parameters

use crate::lognormal::LogNormalDistribution;
use crate::normal::NormalDistribution;
use crate::traits::ContinuousDistribution;
use gof_core::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Supported distribution families
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Family {
    Normal,
    LogNormal,
}

impl Family {
    /// Names of the parameters a distribution of this family is built from
    pub fn parameter_names(&self) -> &'static [&'static str] {
        match self {
            Family::Normal => &["loc", "scale"],
            Family::LogNormal => &["shape", "loc", "scale"],
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Family::Normal => "normal",
            Family::LogNormal => "log-normal",
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Family {
    type Err = Error;

    fn from_str(tag: &str) -> Result<Self> {
        match tag.trim().to_ascii_lowercase().as_str() {
            "normal" | "norm" => Ok(Family::Normal),
            "log-normal" | "lognormal" | "lognorm" => Ok(Family::LogNormal),
            _ => Err(Error::UnsupportedFamily(tag.to_string())),
        }
    }
}

/// Numeric parameters handed to the factory
///
/// `shape` is only read by the log-normal family.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DistributionParams {
    pub loc: f64,
    pub scale: f64,
    pub shape: f64,
}

impl Default for DistributionParams {
    fn default() -> Self {
        Self {
            loc: 0.0,
            scale: 1.0,
            shape: 1.0,
        }
    }
}

impl DistributionParams {
    pub fn new(loc: f64, scale: f64) -> Self {
        Self {
            loc,
            scale,
            ..Self::default()
        }
    }

    pub fn with_shape(mut self, shape: f64) -> Self {
        self.shape = shape;
        self
    }
}

/// Closed set of reference distributions
#[derive(Debug, Clone)]
pub enum ReferenceDistribution {
    Normal(NormalDistribution),
    LogNormal(LogNormalDistribution),
}

impl ReferenceDistribution {
    pub fn family(&self) -> Family {
        match self {
            ReferenceDistribution::Normal(_) => Family::Normal,
            ReferenceDistribution::LogNormal(_) => Family::LogNormal,
        }
    }

    fn inner(&self) -> &dyn ContinuousDistribution {
        match self {
            ReferenceDistribution::Normal(d) => d,
            ReferenceDistribution::LogNormal(d) => d,
        }
    }
}

impl ContinuousDistribution for ReferenceDistribution {
    fn name(&self) -> &'static str {
        self.inner().name()
    }

    fn cdf(&self, x: f64) -> f64 {
        self.inner().cdf(x)
    }

    fn pdf(&self, x: f64) -> f64 {
        self.inner().pdf(x)
    }

    fn sample(&self, size: usize, seed: u64) -> Vec<f64> {
        self.inner().sample(size, seed)
    }

    fn parameter_count(&self) -> usize {
        self.inner().parameter_count()
    }
}

impl From<NormalDistribution> for ReferenceDistribution {
    fn from(d: NormalDistribution) -> Self {
        ReferenceDistribution::Normal(d)
    }
}

impl From<LogNormalDistribution> for ReferenceDistribution {
    fn from(d: LogNormalDistribution) -> Self {
        ReferenceDistribution::LogNormal(d)
    }
}

/// Build a reference distribution of the given family
pub fn build_distribution(
    family: Family,
    params: DistributionParams,
) -> Result<ReferenceDistribution> {
    let dist: ReferenceDistribution = match family {
        Family::Normal => NormalDistribution::new(params.loc, params.scale)?.into(),
        Family::LogNormal => {
            LogNormalDistribution::new(params.shape, params.loc, params.scale)?.into()
        }
    };
    Ok(dist)
}

/// Build a reference distribution from a family tag such as `"normal"`
///
/// # Errors
///
/// [`Error::UnsupportedFamily`] for tags outside the supported set.
pub fn build_distribution_from_tag(
    tag: &str,
    params: DistributionParams,
) -> Result<ReferenceDistribution> {
    build_distribution(tag.parse()?, params)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_family_tags() {
        assert_eq!("normal".parse::<Family>().unwrap(), Family::Normal);
        assert_eq!("norm".parse::<Family>().unwrap(), Family::Normal);
        assert_eq!("Log-Normal".parse::<Family>().unwrap(), Family::LogNormal);
        assert_eq!("lognorm".parse::<Family>().unwrap(), Family::LogNormal);

        match "weibull".parse::<Family>() {
            Err(Error::UnsupportedFamily(tag)) => assert_eq!(tag, "weibull"),
            other => panic!("expected UnsupportedFamily, got {other:?}"),
        }
    }

    #[test]
    fn test_family_roundtrips_through_display() {
        for family in [Family::Normal, Family::LogNormal] {
            assert_eq!(family.to_string().parse::<Family>().unwrap(), family);
        }
    }

    #[test]
    fn test_parameter_names_match_counts() {
        let params = DistributionParams::new(1.0, 2.0).with_shape(0.5);
        for family in [Family::Normal, Family::LogNormal] {
            let dist = build_distribution(family, params).unwrap();
            assert_eq!(dist.family(), family);
            assert_eq!(dist.parameter_count(), family.parameter_names().len());
        }
    }

    #[test]
    fn test_build_from_tag() {
        let dist =
            build_distribution_from_tag("normal", DistributionParams::new(0.0, 1.0)).unwrap();
        assert_eq!(dist.name(), "normal");
        assert_relative_eq!(dist.cdf(0.0), 0.5, epsilon = 1e-12);

        let dist = build_distribution_from_tag("lognorm", DistributionParams::default()).unwrap();
        assert_eq!(dist.name(), "log-normal");
        assert_eq!(dist.cdf(0.0), 0.0);

        assert!(matches!(
            build_distribution_from_tag("gamma", DistributionParams::default()),
            Err(Error::UnsupportedFamily(_))
        ));
    }

    #[test]
    fn test_invalid_params_propagate() {
        let params = DistributionParams::new(0.0, -1.0);
        assert!(matches!(
            build_distribution(Family::Normal, params),
            Err(Error::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_params_deserialize_with_defaults() {
        let params: DistributionParams = serde_json::from_str(r#"{"loc": 3.0}"#).unwrap();
        assert_eq!(params, DistributionParams::new(3.0, 1.0));

        let family: Family = serde_json::from_str(r#""log-normal""#).unwrap();
        assert_eq!(family, Family::LogNormal);
    }
}
