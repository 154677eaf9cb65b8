// Timed sorting of shuffled sequences, returned as data instead of printed.

use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use tracing::{debug, warn};

use crate::{is_sorted, sort_binary_radix, Error};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BenchmarkConfig {
    /// Length of every sorted sequence.
    pub items: usize,
    pub iterations: usize,
    /// Seed for the shuffles, the same seed yields the same inputs.
    pub seed: u64,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            items: 1_000_000,
            iterations: 10,
            seed: 42,
        }
    }
}

/// Outcome of sorting one shuffled sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IterationResult {
    /// Time spent in the sort alone, excluding generation and verification.
    pub duration: Duration,
    pub passes: u32,
    pub verified: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BenchmarkReport {
    items: usize,
    results: Vec<IterationResult>,
}

impl BenchmarkReport {
    pub fn items(&self) -> usize {
        self.items
    }

    /// Results in run order. Ends early at the first unverified iteration.
    pub fn iterations(&self) -> &[IterationResult] {
        &self.results
    }

    pub fn all_verified(&self) -> bool {
        self.results.iter().all(|r| r.verified)
    }

    pub fn total(&self) -> Duration {
        self.results.iter().map(|r| r.duration).sum()
    }

    /// Mean sort time, zero when nothing ran.
    pub fn average(&self) -> Duration {
        match self.results.len() {
            0 => Duration::ZERO,
            n => self.total().div_f64(n as f64),
        }
    }
}

/// The sequence `0..items` in an order determined by `rng`.
pub fn shuffled_sequence(items: usize, rng: &mut StdRng) -> Vec<i64> {
    let mut values = (0..items as i64).collect::<Vec<_>>();
    values.shuffle(rng);
    values
}

/// Time [`sort_binary_radix`] on `config.iterations` shuffled sequences.
pub fn run_benchmark(config: &BenchmarkConfig) -> Result<BenchmarkReport, Error> {
    run_benchmark_with(config, sort_binary_radix::<i64>)
}

/// Time an arbitrary in-place sort returning its pass count.
///
/// Sort errors are propagated. An output that is not sorted is recorded and
/// stops the run.
pub fn run_benchmark_with<F>(config: &BenchmarkConfig, mut sort: F) -> Result<BenchmarkReport, Error>
where
    F: FnMut(&mut [i64]) -> Result<u32, Error>,
{
    if config.items == 0 {
        return Err(Error::EmptyInput);
    }

    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut report = BenchmarkReport {
        items: config.items,
        results: Vec::with_capacity(config.iterations),
    };

    for iteration in 0..config.iterations {
        let mut values = shuffled_sequence(config.items, &mut rng);

        let start = Instant::now();
        let passes = sort(&mut values)?;
        let duration = start.elapsed();

        let verified = is_sorted(&values);
        debug!(
            iteration,
            items = config.items,
            elapsed_ms = duration.as_secs_f64() * 1000.0,
            passes,
            verified,
            "benchmark iteration"
        );

        report.results.push(IterationResult {
            duration,
            passes,
            verified,
        });

        if !verified {
            warn!(iteration, "sort output failed verification, stopping");
            break;
        }
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shuffled_sequence_is_permutation() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut values = shuffled_sequence(1000, &mut rng);
        assert!(!is_sorted(&values));
        values.sort_unstable();
        assert_eq!(values, (0..1000).collect::<Vec<_>>());
    }

    #[test]
    fn test_shuffled_sequence_is_seeded() {
        let a = shuffled_sequence(100, &mut StdRng::seed_from_u64(1));
        let b = shuffled_sequence(100, &mut StdRng::seed_from_u64(1));
        assert_eq!(a, b);
    }

    #[test]
    fn test_run_benchmark() {
        let config = BenchmarkConfig {
            items: 10_000,
            iterations: 3,
            seed: 42,
        };
        let report = run_benchmark(&config).unwrap();
        assert_eq!(report.items(), 10_000);
        assert_eq!(report.iterations().len(), 3);
        assert!(report.all_verified());
        // 9999 needs 14 bits
        assert!(report.iterations().iter().all(|r| r.passes == 14));
        assert!(report.average() <= report.total());
    }

    #[test]
    fn test_run_benchmark_stops_on_unsorted_output() {
        let config = BenchmarkConfig {
            items: 100,
            iterations: 5,
            seed: 3,
        };
        let report = run_benchmark_with(&config, |_| Ok(0)).unwrap();
        assert_eq!(report.iterations().len(), 1);
        assert!(!report.all_verified());
    }

    #[test]
    fn test_run_benchmark_propagates_errors() {
        let config = BenchmarkConfig {
            items: 0,
            ..BenchmarkConfig::default()
        };
        assert_eq!(run_benchmark(&config), Err(Error::EmptyInput));

        let config = BenchmarkConfig {
            items: 10,
            iterations: 2,
            seed: 0,
        };
        let failing = |_: &mut [i64]| -> Result<u32, Error> { Err(Error::NegativeValue { index: 0, value: -1 }) };
        assert_eq!(
            run_benchmark_with(&config, failing),
            Err(Error::NegativeValue { index: 0, value: -1 })
        );
    }

    #[test]
    fn test_empty_report() {
        let report = BenchmarkReport::default();
        assert_eq!(report.average(), Duration::ZERO);
        assert_eq!(report.total(), Duration::ZERO);
        assert!(report.all_verified());
    }
}
