//! Benchmark runner.

use std::time::Instant;

use tourbench_core::{Result, TourBenchError};
use tourbench_solver::{Comparator, NoTermination, Termination};
use tracing::{debug, info};

use crate::config::BenchmarkConfig;
use crate::result::{BenchmarkRecord, BenchmarkResult};
use crate::source::MatrixSource;

/// Runs both solvers over a range of city counts.
///
/// For each size the runner asks its source for one matrix and hands that
/// same matrix to both solvers. Solver limits are checked against the whole
/// range before the first matrix is requested, so a run that would exceed a
/// limit does no work at all.
///
/// # Example
///
/// ```
/// use tourbench_benchmark::{Benchmark, BenchmarkConfig, ExampleMatrixSource};
///
/// let mut benchmark = Benchmark::new(BenchmarkConfig::new(4, 6), ExampleMatrixSource::new());
/// let result = benchmark.run().unwrap();
///
/// assert_eq!(result.source, "example");
/// assert_eq!(result.record(6).unwrap().results[0].cost, 87.0);
/// ```
pub struct Benchmark<Src> {
    config: BenchmarkConfig,
    comparator: Comparator,
    source: Src,
}

impl<Src: MatrixSource> Benchmark<Src> {
    /// Creates a benchmark with default solvers.
    pub fn new(config: BenchmarkConfig, source: Src) -> Self {
        Self {
            config,
            comparator: Comparator::new(),
            source,
        }
    }

    /// Uses `comparator` instead, for example to lower solver limits.
    pub fn with_comparator(mut self, comparator: Comparator) -> Self {
        self.comparator = comparator;
        self
    }

    pub fn config(&self) -> &BenchmarkConfig {
        &self.config
    }

    /// Runs every size to completion.
    pub fn run(&mut self) -> Result<BenchmarkResult> {
        self.run_with(&NoTermination)
    }

    /// Runs every size, polling `termination` inside each solve.
    ///
    /// Any error, including cancellation, discards the records collected so
    /// far.
    pub fn run_with<T: Termination + ?Sized>(
        &mut self,
        termination: &T,
    ) -> Result<BenchmarkResult> {
        let sizes = self.config.sizes();
        let mut result = BenchmarkResult::new(self.config.name(), self.source.name());

        if sizes.is_empty() {
            debug!(event = "benchmark_empty", name = self.config.name());
            return Ok(result);
        }
        let (start_n, end_n) = (*sizes.start(), *sizes.end());
        self.comparator.check_limit(end_n)?;

        info!(
            event = "benchmark_start",
            name = self.config.name(),
            source = self.source.name(),
            start_n = start_n as u64,
            end_n = end_n as u64,
        );
        let started = Instant::now();

        for n in sizes {
            let matrix = self.source.matrix(n)?;
            if matrix.size() != n {
                return Err(TourBenchError::Config(format!(
                    "matrix source '{}' returned {} cities when {n} were requested",
                    self.source.name(),
                    matrix.size(),
                )));
            }

            let [brute_force, held_karp] = self.comparator.compare_with(&matrix, termination)?;
            debug!(
                event = "benchmark_size",
                n = n as u64,
                cost = brute_force.cost,
                brute_force_ms = brute_force.elapsed.as_millis() as u64,
                held_karp_ms = held_karp.elapsed.as_millis() as u64,
            );
            result.add_record(BenchmarkRecord::new(n, vec![brute_force, held_karp]));
        }

        info!(
            event = "benchmark_end",
            name = self.config.name(),
            sizes = result.record_count() as u64,
            duration_ms = started.elapsed().as_millis() as u64,
        );

        Ok(result)
    }
}

/// Benchmarks `start_n..=end_n` (clamped to the valid city range) with
/// default solvers and returns one record per size, ascending.
pub fn run_benchmark<Src: MatrixSource>(
    start_n: usize,
    end_n: usize,
    source: Src,
) -> Result<Vec<BenchmarkRecord>> {
    Benchmark::new(BenchmarkConfig::new(start_n, end_n), source)
        .run()
        .map(BenchmarkResult::into_records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicBool;

    use tourbench_core::{DistanceMatrix, Method};
    use tourbench_solver::{BruteForceSolver, ExternalTermination};
    use tourbench_test::seeded_matrix;

    use crate::source::{example_matrix, ExampleMatrixSource, RandomMatrixSource};

    #[test]
    fn test_records_ascend_and_agree() {
        let records = run_benchmark(3, 6, RandomMatrixSource::seeded(42)).unwrap();
        let sizes: Vec<_> = records.iter().map(|r| r.n).collect();
        assert_eq!(sizes, vec![3, 4, 5, 6]);
        for record in &records {
            assert_eq!(record.results.len(), 2);
            assert_eq!(record.results[0].method, Method::BruteForce);
            assert_eq!(record.results[1].method, Method::HeldKarp);
            assert!(record.costs_agree());
        }
    }

    #[test]
    fn test_range_is_clamped() {
        let records = run_benchmark(0, 4, ExampleMatrixSource::new()).unwrap();
        assert_eq!(records.iter().map(|r| r.n).collect::<Vec<_>>(), vec![3, 4]);
    }

    #[test]
    fn test_inverted_range_is_empty() {
        let mut calls = 0;
        let source = |n: usize| {
            calls += 1;
            Ok::<_, TourBenchError>(seeded_matrix(n, 0))
        };
        let records = run_benchmark(9, 4, source).unwrap();
        assert!(records.is_empty());
        assert_eq!(calls, 0);
    }

    #[test]
    fn test_one_matrix_per_size_shared_by_both_solvers() {
        let mut requested = Vec::new();
        let source = |n: usize| {
            requested.push(n);
            Ok::<_, TourBenchError>(seeded_matrix(n, n as u64))
        };
        let records = run_benchmark(3, 7, source).unwrap();
        assert_eq!(requested, vec![3, 4, 5, 6, 7]);

        for record in &records {
            let matrix = seeded_matrix(record.n, record.n as u64);
            for result in &record.results {
                assert_eq!(matrix.cycle_cost(&result.path), result.cost);
            }
        }
    }

    #[test]
    fn test_limit_fails_before_any_matrix_is_built() {
        let mut calls = 0;
        let source = |n: usize| {
            calls += 1;
            Ok::<_, TourBenchError>(seeded_matrix(n, 0))
        };
        let comparator =
            Comparator::new().with_brute_force(BruteForceSolver::new().with_max_cities(8));
        let err = Benchmark::new(BenchmarkConfig::new(3, 10), source)
            .with_comparator(comparator)
            .run()
            .unwrap_err();

        assert!(matches!(err, TourBenchError::ResourceLimit(ref limit) if limit.n == 10));
        assert_eq!(calls, 0);
    }

    #[test]
    fn test_wrong_size_from_source_is_rejected() {
        let source = |_: usize| Ok::<DistanceMatrix, TourBenchError>(example_matrix());
        let err = run_benchmark(4, 5, source).unwrap_err();
        assert!(matches!(err, TourBenchError::Config(_)));
    }

    #[test]
    fn test_cancellation_discards_records() {
        let flag = AtomicBool::new(true);
        let mut benchmark = Benchmark::new(BenchmarkConfig::new(3, 5), ExampleMatrixSource::new());
        let err = benchmark
            .run_with(&ExternalTermination::new(&flag))
            .unwrap_err();
        assert_eq!(err, TourBenchError::Cancelled);
    }

    #[test]
    fn test_named_result() {
        let mut benchmark = Benchmark::new(
            BenchmarkConfig::new(3, 4).with_name("Scaling"),
            RandomMatrixSource::seeded(1),
        );
        let result = benchmark.run().unwrap();
        assert_eq!(result.name, "Scaling");
        assert_eq!(result.source, "random");
        assert_eq!(result.record_count(), 2);
        assert!(result.all_costs_agree());
    }
}
