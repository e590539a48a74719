//! Benchmark configuration.

use std::ops::RangeInclusive;

use tourbench_core::{MAX_CITIES, MIN_CITIES};

/// Configuration for a benchmark run.
///
/// The requested range is clamped to `[MIN_CITIES, MAX_CITIES]` when read
/// through [`sizes`](Self::sizes).
///
/// # Example
///
/// ```
/// use tourbench_benchmark::BenchmarkConfig;
///
/// let config = BenchmarkConfig::new(1, 40)
///     .with_name("Scaling")
///     .with_csv_output("results.csv");
///
/// assert_eq!(config.name(), "Scaling");
/// assert_eq!(config.sizes(), 3..=15);
/// assert_eq!(config.csv_output_path(), Some("results.csv"));
/// ```
#[derive(Debug, Clone)]
pub struct BenchmarkConfig {
    name: String,
    start_n: usize,
    end_n: usize,
    csv_output_path: Option<String>,
    markdown_output_path: Option<String>,
}

impl BenchmarkConfig {
    /// Creates a configuration covering `start_n..=end_n` cities.
    pub fn new(start_n: usize, end_n: usize) -> Self {
        Self {
            name: "Benchmark".to_string(),
            start_n,
            end_n,
            csv_output_path: None,
            markdown_output_path: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the output path for CSV export.
    pub fn with_csv_output(mut self, path: impl Into<String>) -> Self {
        self.csv_output_path = Some(path.into());
        self
    }

    /// Sets the output path for the Markdown report.
    pub fn with_markdown_output(mut self, path: impl Into<String>) -> Self {
        self.markdown_output_path = Some(path.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the range as requested, before clamping.
    pub fn requested(&self) -> (usize, usize) {
        (self.start_n, self.end_n)
    }

    /// Returns the clamped, inclusive range of city counts.
    ///
    /// Empty when the clamped start lies above the clamped end.
    ///
    /// ```
    /// use tourbench_benchmark::BenchmarkConfig;
    ///
    /// assert_eq!(BenchmarkConfig::new(3, 6).sizes().count(), 4);
    /// assert!(BenchmarkConfig::new(9, 4).sizes().is_empty());
    /// ```
    pub fn sizes(&self) -> RangeInclusive<usize> {
        let start = self.start_n.clamp(MIN_CITIES, MAX_CITIES);
        let end = self.end_n.clamp(MIN_CITIES, MAX_CITIES);
        start..=end
    }

    pub fn csv_output_path(&self) -> Option<&str> {
        self.csv_output_path.as_deref()
    }

    pub fn markdown_output_path(&self) -> Option<&str> {
        self.markdown_output_path.as_deref()
    }
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self::new(MIN_CITIES, 10)
    }
}
