//! Result types for chi-square goodness-of-fit testing

use gof_histogram::{MergedHistogram, RecomputedHistogram};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of comparing the empirical statistic with the critical value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    /// The empirical statistic is below the critical value
    Pass,
    /// The empirical statistic reaches or exceeds the critical value
    Fail,
}

impl Verdict {
    /// Pass when `statistic` is strictly below `critical_value`
    pub fn from_statistic(statistic: f64, critical_value: f64) -> Self {
        if statistic < critical_value {
            Verdict::Pass
        } else {
            Verdict::Fail
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Pass => f.write_str("pass"),
            Verdict::Fail => f.write_str("fail"),
        }
    }
}

/// Result of a chi-square goodness-of-fit test
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChiSquareResult {
    /// Total number of observations over all merged bins
    pub sample_count: usize,
    /// Number of merged bins
    pub bin_count: usize,
    /// bins - 1 - estimated parameters
    pub degrees_of_freedom: usize,
    /// Number of distribution parameters estimated from the sample
    pub parameter_count: usize,
    /// Empirical chi-square statistic
    pub statistic: f64,
    /// Chi-square quantile at the requested confidence
    pub critical_value: f64,
    /// Significance level in percent
    pub significance: f64,
    pub verdict: Verdict,
}

impl ChiSquareResult {
    pub fn passed(&self) -> bool {
        self.verdict == Verdict::Pass
    }

    /// Confidence level as a fraction, e.g. 0.95 for a 5% significance
    pub fn confidence(&self) -> f64 {
        (100.0 - self.significance) / 100.0
    }
}

impl fmt::Display for ChiSquareResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Chi-square goodness-of-fit test")?;
        writeln!(f, "  samples:               {}", self.sample_count)?;
        writeln!(f, "  bins:                  {}", self.bin_count)?;
        writeln!(f, "  degrees of freedom:    {}", self.degrees_of_freedom)?;
        writeln!(f, "  estimated parameters:  {}", self.parameter_count)?;
        writeln!(f, "  statistic (data):      {:.2}", self.statistic)?;
        writeln!(
            f,
            "  critical value ({:.0}%): {:.2}",
            self.confidence() * 100.0,
            self.critical_value
        )?;
        match self.verdict {
            Verdict::Pass => write!(f, "  verdict: pass (statistic < critical value)"),
            Verdict::Fail => write!(f, "  verdict: fail (statistic >= critical value)"),
        }
    }
}

/// Everything produced by one end-to-end run
#[derive(Debug, Clone, PartialEq)]
pub struct GofReport {
    /// Raw and merged histograms of the sample
    pub histogram: RecomputedHistogram,
    pub result: ChiSquareResult,
}

impl GofReport {
    pub fn merged(&self) -> &MergedHistogram {
        &self.histogram.merged
    }

    pub fn passed(&self) -> bool {
        self.result.passed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(verdict: Verdict) -> ChiSquareResult {
        ChiSquareResult {
            sample_count: 1000,
            bin_count: 8,
            degrees_of_freedom: 5,
            parameter_count: 2,
            statistic: 3.214,
            critical_value: 11.0705,
            significance: 5.0,
            verdict,
        }
    }

    #[test]
    fn test_display() {
        let text = result(Verdict::Pass).to_string();
        assert!(text.contains("samples:               1000"));
        assert!(text.contains("statistic (data):      3.21"));
        assert!(text.contains("critical value (95%): 11.07"));
        assert!(text.ends_with("pass (statistic < critical value)"));

        let text = result(Verdict::Fail).to_string();
        assert!(text.ends_with("fail (statistic >= critical value)"));
    }

    #[test]
    fn test_confidence_and_verdict() {
        let r = result(Verdict::Pass);
        assert!(r.passed());
        assert!((r.confidence() - 0.95).abs() < 1e-12);
        assert!(!result(Verdict::Fail).passed());
        assert_eq!(Verdict::Fail.to_string(), "fail");
        assert_eq!(Verdict::from_statistic(11.0, 11.0), Verdict::Fail);
        assert_eq!(Verdict::from_statistic(10.9, 11.0), Verdict::Pass);
    }
}
