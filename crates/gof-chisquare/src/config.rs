//! Configuration of an end-to-end goodness-of-fit run

use crate::evaluator::{validate_significance, DEFAULT_SIGNIFICANCE};
use gof_core::{Error, Result};
use gof_histogram::DEFAULT_THRESHOLD;
use serde::{Deserialize, Serialize};

/// Default number of equal-width bins in the raw histogram
pub const DEFAULT_BINS: usize = 10;

/// Settings for a chi-square goodness-of-fit run
///
/// Missing fields take their default values when deserializing, so a JSON
/// document only needs to name the settings it changes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GofConfig {
    /// Number of equal-width bins before merging
    pub n_bins: usize,
    /// Minimum observations per merged bin
    pub threshold: usize,
    /// Significance level in percent
    pub significance: f64,
    /// Whether the distribution parameters were estimated from the sample
    pub estimated_params: bool,
}

impl Default for GofConfig {
    fn default() -> Self {
        Self {
            n_bins: DEFAULT_BINS,
            threshold: DEFAULT_THRESHOLD,
            significance: DEFAULT_SIGNIFICANCE,
            estimated_params: true,
        }
    }
}

impl GofConfig {
    /// Parse a configuration from JSON and validate it
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| Error::InvalidInput(format!("invalid configuration: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize the configuration to pretty-printed JSON
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| Error::Computation(format!("failed to serialize configuration: {e}")))
    }

    /// Check that every setting is usable
    pub fn validate(&self) -> Result<()> {
        if self.n_bins == 0 {
            return Err(Error::InvalidParameter("n_bins must be positive".to_string()));
        }
        if self.threshold == 0 {
            return Err(Error::InvalidParameter("threshold must be positive".to_string()));
        }
        validate_significance(self.significance)
    }
}
