//! Scaling benchmark for the tourbench solvers.
//!
//! For every city count in a range, the benchmark obtains one matrix from a
//! [`MatrixSource`], runs both solvers on that same matrix and records the
//! pair of results. Costs within a record are therefore directly comparable,
//! and the timings across records show how each method scales.
//!
//! # Example
//!
//! ```
//! use tourbench_benchmark::{run_benchmark, RandomMatrixSource};
//!
//! let records = run_benchmark(3, 6, RandomMatrixSource::seeded(42)).unwrap();
//! assert_eq!(records.len(), 4);
//! assert_eq!(records[0].n, 3);
//! assert!(records.iter().all(|r| r.results.len() == 2 && r.costs_agree()));
//! ```

mod config;
mod report;
mod result;
mod runner;
mod source;

pub use config::BenchmarkConfig;
pub use report::{CsvExporter, MarkdownReport};
pub use result::{BenchmarkRecord, BenchmarkResult};
pub use runner::{run_benchmark, Benchmark};
pub use source::{
    canonical_matrix, example_matrix, random_matrix, ExampleMatrixSource, FixedMatrixSource,
    MatrixSource, RandomMatrixSource,
};
