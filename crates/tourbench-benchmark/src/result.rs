//! Benchmark result types.

use std::time::Duration;

use tourbench_core::{Method, TourResult};

/// Both solvers' results for one city count.
///
/// `results` is ordered brute force first, then Held-Karp, and both were
/// computed on the same matrix.
#[derive(Debug, Clone, PartialEq)]
pub struct BenchmarkRecord {
    /// Number of cities.
    pub n: usize,
    /// One result per method.
    pub results: Vec<TourResult>,
}

impl BenchmarkRecord {
    pub fn new(n: usize, results: Vec<TourResult>) -> Self {
        Self { n, results }
    }

    /// Returns the result produced by `method`, if present.
    pub fn result(&self, method: Method) -> Option<&TourResult> {
        self.results.iter().find(|r| r.method == method)
    }

    /// Returns true when every method found the same optimal cost.
    ///
    /// # Example
    ///
    /// ```
    /// use std::time::Duration;
    /// use tourbench_benchmark::BenchmarkRecord;
    /// use tourbench_core::{Method, TourResult};
    ///
    /// let result = |method, cost| TourResult {
    ///     method,
    ///     cost,
    ///     path: vec![0, 1, 2],
    ///     elapsed: Duration::ZERO,
    ///     work_count: 2,
    /// };
    ///
    /// let record = BenchmarkRecord::new(3, vec![
    ///     result(Method::BruteForce, 6.0),
    ///     result(Method::HeldKarp, 6.0),
    /// ]);
    /// assert!(record.costs_agree());
    /// ```
    pub fn costs_agree(&self) -> bool {
        self.results.windows(2).all(|w| w[0].cost == w[1].cost)
    }

    /// Brute-force time divided by Held-Karp time.
    ///
    /// `None` when either result is missing or Held-Karp took no measurable
    /// time.
    pub fn speedup(&self) -> Option<f64> {
        let brute_force = self.result(Method::BruteForce)?;
        let held_karp = self.result(Method::HeldKarp)?;
        if held_karp.elapsed.is_zero() {
            return None;
        }
        Some(brute_force.elapsed_secs() / held_karp.elapsed_secs())
    }

    /// Combined solve time of every method in this record.
    pub fn total_time(&self) -> Duration {
        self.results.iter().map(|r| r.elapsed).sum()
    }
}

/// Outcome of a full benchmark run.
#[derive(Debug, Clone)]
pub struct BenchmarkResult {
    /// Benchmark name.
    pub name: String,
    /// Name of the matrix source.
    pub source: String,
    /// One record per city count, ascending.
    pub records: Vec<BenchmarkRecord>,
}

impl BenchmarkResult {
    pub fn new(name: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            source: source.into(),
            records: Vec::new(),
        }
    }

    pub fn add_record(&mut self, record: BenchmarkRecord) {
        self.records.push(record);
    }

    pub fn record_count(&self) -> usize {
        self.records.len()
    }

    /// Returns the record for `n` cities, if it was benchmarked.
    pub fn record(&self, n: usize) -> Option<&BenchmarkRecord> {
        self.records.iter().find(|r| r.n == n)
    }

    /// Returns true when every record's costs agree.
    pub fn all_costs_agree(&self) -> bool {
        self.records.iter().all(BenchmarkRecord::costs_agree)
    }

    /// Sum of every solve time in the run.
    pub fn total_time(&self) -> Duration {
        self.records.iter().map(BenchmarkRecord::total_time).sum()
    }

    pub fn into_records(self) -> Vec<BenchmarkRecord> {
        self.records
    }
}
