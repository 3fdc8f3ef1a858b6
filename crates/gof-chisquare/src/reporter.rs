//! Reporting interface for goodness-of-fit runs
//!
//! The pipeline hands its intermediate and final data to a [`GofReporter`].
//! Plotting or console output lives behind this trait so the numeric core
//! runs headless with [`NullReporter`].

use crate::types::ChiSquareResult;
use gof_core::{Error, Result};
use gof_histogram::{Histogram, MergedHistogram};
use std::sync::Mutex;
use tracing::info;

/// Sink for the stages of a goodness-of-fit run
pub trait GofReporter {
    /// Record the histogram before merging
    fn record_histogram(&self, histogram: &Histogram) -> Result<()>;

    /// Record the histogram after merging around `mode_index`
    fn record_merged(
        &self,
        merged: &MergedHistogram,
        mode_index: usize,
        threshold: usize,
    ) -> Result<()>;

    /// Record the final test result
    fn record_result(&self, result: &ChiSquareResult) -> Result<()>;

    /// Check if this reporter actually produces output
    fn is_enabled(&self) -> bool {
        true
    }
}

/// Reporter that does nothing
#[derive(Debug, Default, Clone, Copy)]
pub struct NullReporter;

impl GofReporter for NullReporter {
    fn record_histogram(&self, _histogram: &Histogram) -> Result<()> {
        Ok(())
    }

    fn record_merged(
        &self,
        _merged: &MergedHistogram,
        _mode_index: usize,
        _threshold: usize,
    ) -> Result<()> {
        Ok(())
    }

    fn record_result(&self, _result: &ChiSquareResult) -> Result<()> {
        Ok(())
    }

    fn is_enabled(&self) -> bool {
        false
    }
}

/// Reporter that logs every stage through `tracing` at info level
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingReporter;

impl GofReporter for TracingReporter {
    fn record_histogram(&self, histogram: &Histogram) -> Result<()> {
        info!(bins = histogram.len(), counts = ?histogram.counts(), "original numerosity per bin");
        Ok(())
    }

    fn record_merged(
        &self,
        merged: &MergedHistogram,
        mode_index: usize,
        threshold: usize,
    ) -> Result<()> {
        info!(
            threshold,
            mode_index,
            bins = merged.len(),
            counts = ?merged.counts,
            "merged numerosity per bin"
        );
        Ok(())
    }

    fn record_result(&self, result: &ChiSquareResult) -> Result<()> {
        info!(
            samples = result.sample_count,
            bins = result.bin_count,
            dof = result.degrees_of_freedom,
            estimated_params = result.parameter_count,
            statistic = result.statistic,
            critical_value = result.critical_value,
            verdict = %result.verdict,
            "chi-square test finished"
        );
        Ok(())
    }
}

/// Everything a [`RecordingReporter`] has seen
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Recorded {
    pub histograms: Vec<Histogram>,
    pub merged: Vec<(MergedHistogram, usize)>,
    pub results: Vec<ChiSquareResult>,
}

/// Reporter that keeps every stage in memory
///
/// Useful for headless callers that want to plot the stages themselves.
#[derive(Debug, Default)]
pub struct RecordingReporter {
    recorded: Mutex<Recorded>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of what has been recorded so far
    pub fn recorded(&self) -> Result<Recorded> {
        self.with_recorded(|r| r.clone())
    }

    fn with_recorded<F, R>(&self, f: F) -> Result<R>
    where
        F: FnOnce(&mut Recorded) -> R,
    {
        let mut guard = self
            .recorded
            .lock()
            .map_err(|_| Error::Computation("reporter lock poisoned".to_string()))?;
        Ok(f(&mut guard))
    }
}

impl GofReporter for RecordingReporter {
    fn record_histogram(&self, histogram: &Histogram) -> Result<()> {
        self.with_recorded(|r| r.histograms.push(histogram.clone()))
    }

    fn record_merged(
        &self,
        merged: &MergedHistogram,
        mode_index: usize,
        _threshold: usize,
    ) -> Result<()> {
        self.with_recorded(|r| r.merged.push((merged.clone(), mode_index)))
    }

    fn record_result(&self, result: &ChiSquareResult) -> Result<()> {
        self.with_recorded(|r| r.results.push(result.clone()))
    }
}

impl<R: GofReporter + ?Sized> GofReporter for &R {
    fn record_histogram(&self, histogram: &Histogram) -> Result<()> {
        (**self).record_histogram(histogram)
    }

    fn record_merged(
        &self,
        merged: &MergedHistogram,
        mode_index: usize,
        threshold: usize,
    ) -> Result<()> {
        (**self).record_merged(merged, mode_index, threshold)
    }

    fn record_result(&self, result: &ChiSquareResult) -> Result<()> {
        (**self).record_result(result)
    }

    fn is_enabled(&self) -> bool {
        (**self).is_enabled()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Verdict;
    use gof_histogram::HistogramBin;

    #[test]
    fn test_recording_reporter() {
        let reporter = RecordingReporter::new();
        let histogram = Histogram::new(vec![HistogramBin::new(0.0, 1.0, 3)], 3, 0.0, 1.0);
        let merged = MergedHistogram::new(vec![3], vec![(0.0, 1.0)]);
        let result = ChiSquareResult {
            sample_count: 3,
            bin_count: 1,
            degrees_of_freedom: 1,
            parameter_count: 0,
            statistic: 0.0,
            critical_value: 3.84,
            significance: 5.0,
            verdict: Verdict::Pass,
        };

        reporter.record_histogram(&histogram).unwrap();
        reporter.record_merged(&merged, 0, 5).unwrap();
        reporter.record_result(&result).unwrap();

        let recorded = reporter.recorded().unwrap();
        assert_eq!(recorded.histograms, vec![histogram]);
        assert_eq!(recorded.merged, vec![(merged, 0)]);
        assert_eq!(recorded.results, vec![result]);
        assert!(reporter.is_enabled());
    }

    #[test]
    fn test_null_reporter_is_disabled() {
        assert!(!NullReporter.is_enabled());
        assert!(TracingReporter.is_enabled());
    }
}
