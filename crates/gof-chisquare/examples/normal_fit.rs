//! Fits a normal and a log-normal distribution to a skewed sample
//!
//! Run with `RUST_LOG=info` to see every stage of the test.

use anyhow::Result;
use gof_chisquare::{GofConfig, GoodnessOfFitTest, TracingReporter};
use gof_distribution::{build_distribution, ContinuousDistribution, DistributionParams, Family};
use statrs::statistics::Statistics;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Skewed data: log-normal with shape 0.6 and scale 3
    let truth = DistributionParams::new(0.0, 3.0).with_shape(0.6);
    let sample = build_distribution(Family::LogNormal, truth)?.sample(4000, 42);

    let config = GofConfig::from_json(r#"{"n_bins": 20, "threshold": 8}"#)?;
    let test = GoodnessOfFitTest::builder()
        .config(config)
        .reporter(TracingReporter)
        .build()?;

    println!("=== Normal fit ===");
    let normal = DistributionParams::new(sample.iter().mean(), sample.iter().std_dev());
    let report = test.run_family(&sample, Family::Normal, normal)?;
    println!("{}", report.merged());
    println!("{}", report.result);

    // Log-normal fit from the moments of the log sample
    println!("\n=== Log-normal fit ===");
    let logs: Vec<f64> = sample.iter().map(|x| x.ln()).collect();
    let lognormal =
        DistributionParams::new(0.0, logs.iter().mean().exp()).with_shape(logs.iter().std_dev());
    let report = test.run_family(&sample, Family::LogNormal, lognormal)?;
    println!("{}", report.merged());
    println!("{}", report.result);

    Ok(())
}
