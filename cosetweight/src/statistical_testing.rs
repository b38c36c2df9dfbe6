//! Shared assertions for the sampling tests.
//!
//! Standard tolerance thresholds:
//! - ±5% for high sample counts (≥100K samples)
//! - ±10% for lower sample counts or correlated samples such as Markov chains

use crate::histogram::WeightHistogram;

/// Tolerance for tests with ≥100K samples.
pub const TOLERANCE_HIGH_SAMPLES: f64 = 0.05;

/// Tolerance for tests with fewer samples or higher variance.
pub const TOLERANCE_LOW_SAMPLES: f64 = 0.10;

/// Assert that the observed event rate matches the expected probability within tolerance.
///
/// # Panics
/// Panics if the observed rate deviates from expected by more than the tolerance.
#[allow(clippy::cast_precision_loss)]
pub fn assert_rate_within_tolerance(
    observed: u64,
    total: u64,
    expected_probability: f64,
    relative_tolerance: f64,
    context: &str,
) {
    let observed_rate = observed as f64 / total as f64;
    let lower = expected_probability * (1.0 - relative_tolerance);
    let upper = expected_probability * (1.0 + relative_tolerance);
    assert!(
        (lower..upper).contains(&observed_rate),
        "{context}: observed rate {observed_rate:.4} deviates from expected \
         {expected_probability:.4} by more than {:.0}%",
        relative_tolerance * 100.0
    );
}

/// Assert that counts are uniformly distributed within tolerance.
///
/// # Panics
/// Panics if any bucket's count deviates from expected by more than the tolerance.
#[allow(clippy::cast_precision_loss)]
pub fn assert_uniform_distribution(counts: &[u32], total_trials: usize, relative_tolerance: f64, context: &str) {
    let expected = total_trials as f64 / counts.len() as f64;
    for (index, &count) in counts.iter().enumerate() {
        let ratio = f64::from(count) / expected;
        assert!(
            ((1.0 - relative_tolerance)..(1.0 + relative_tolerance)).contains(&ratio),
            "{context}: outcome {index} count {count} deviates from expected {expected:.0} \
             by {:.1}% (tolerance: ±{:.0}%)",
            (ratio - 1.0).abs() * 100.0,
            relative_tolerance * 100.0
        );
    }
}

/// Assert that `sampled` follows the distribution of the exact histogram `exact`.
///
/// Weights missing from `exact` must be missing from `sampled`; every other weight is
/// checked with [`assert_rate_within_tolerance`].
///
/// # Panics
/// Panics if the histograms have different lengths or any weight is off by more than the tolerance.
#[allow(clippy::cast_precision_loss)]
pub fn assert_matches_exact(
    sampled: &WeightHistogram,
    exact: &WeightHistogram,
    relative_tolerance: f64,
    context: &str,
) {
    assert_eq!(sampled.bins(), exact.bins(), "{context}: histogram lengths differ");
    for (weight, (&observed, &expected)) in sampled.counts().iter().zip(exact.counts()).enumerate() {
        if expected == 0 {
            assert_eq!(observed, 0, "{context}: weight {weight} is impossible but was sampled");
        } else {
            let probability = expected as f64 / exact.total() as f64;
            assert_rate_within_tolerance(
                observed,
                sampled.total(),
                probability,
                relative_tolerance,
                &format!("{context}, weight {weight}"),
            );
        }
    }
}
