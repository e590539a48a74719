//! Report generation for benchmark results.

use std::fmt::{self, Write as _};
use std::fs;
use std::io::{self, Write};
use std::path::Path;

use tourbench_core::{Method, TourResult};

use crate::result::BenchmarkResult;

/// CSV exporter for benchmark results.
///
/// One row per (size, method) pair with cost, solve time, work count and the
/// closed tour.
///
/// # Example
///
/// ```
/// use tourbench_benchmark::{BenchmarkResult, CsvExporter};
///
/// let result = BenchmarkResult::new("Test", "random");
/// let csv = CsvExporter::to_string(&result);
/// assert!(csv.starts_with("n,method,cost,time_ms,work_count,path"));
/// ```
pub struct CsvExporter;

impl CsvExporter {
    /// Exports benchmark result to CSV string.
    pub fn to_string(result: &BenchmarkResult) -> String {
        let mut output = String::new();
        // Writing into a String cannot fail.
        let _ = Self::render(result, &mut output);
        output
    }

    fn render(result: &BenchmarkResult, output: &mut String) -> fmt::Result {
        writeln!(output, "n,method,cost,time_ms,work_count,path")?;
        for record in &result.records {
            for tour in &record.results {
                writeln!(
                    output,
                    "{},{},{},{:.3},{},{}",
                    record.n,
                    tour.method,
                    tour.cost,
                    tour.elapsed_secs() * 1000.0,
                    tour.work_count,
                    format_path(tour),
                )?;
            }
        }
        Ok(())
    }

    /// Exports benchmark result to a CSV file.
    pub fn to_file(result: &BenchmarkResult, path: impl AsRef<Path>) -> io::Result<()> {
        fs::write(path, Self::to_string(result))
    }

    /// Writes benchmark result as CSV to a writer.
    pub fn write<W: Write>(result: &BenchmarkResult, mut writer: W) -> io::Result<()> {
        writer.write_all(Self::to_string(result).as_bytes())
    }
}

/// Markdown report generator.
///
/// Renders a per-size comparison table plus a short summary of the run.
///
/// # Example
///
/// ```
/// use tourbench_benchmark::{BenchmarkResult, MarkdownReport};
///
/// let result = BenchmarkResult::new("Scaling", "example");
/// let md = MarkdownReport::to_string(&result);
/// assert!(md.contains("# Benchmark: Scaling"));
/// assert!(md.contains("*No sizes benchmarked.*"));
/// ```
pub struct MarkdownReport;

impl MarkdownReport {
    /// Generates a Markdown report string.
    pub fn to_string(result: &BenchmarkResult) -> String {
        let mut output = String::new();
        let _ = Self::render(result, &mut output);
        output
    }

    fn render(result: &BenchmarkResult, output: &mut String) -> fmt::Result {
        writeln!(output, "# Benchmark: {}", result.name)?;
        writeln!(output)?;
        writeln!(output, "- **Matrix source**: {}", result.source)?;
        writeln!(output, "- **Sizes**: {}", result.record_count())?;
        writeln!(
            output,
            "- **Total time**: {:.2} ms",
            result.total_time().as_secs_f64() * 1000.0
        )?;
        writeln!(output)?;

        writeln!(output, "## Results")?;
        writeln!(output)?;

        if result.records.is_empty() {
            writeln!(output, "*No sizes benchmarked.*")?;
            return Ok(());
        }

        writeln!(
            output,
            "| n | Cost | {bf} (ms) | {hk} (ms) | Speedup | {bf_work} | {hk_work} |",
            bf = Method::BruteForce,
            hk = Method::HeldKarp,
            bf_work = capitalize(Method::BruteForce.work_unit()),
            hk_work = capitalize(Method::HeldKarp.work_unit()),
        )?;
        writeln!(output, "|---|------|------|------|---------|------|------|")?;

        for record in &result.records {
            let brute_force = record.result(Method::BruteForce);
            let held_karp = record.result(Method::HeldKarp);
            let cost = brute_force
                .or(held_karp)
                .map_or_else(|| "-".to_string(), |r| r.cost.to_string());
            let speedup = record
                .speedup()
                .map_or_else(|| "-".to_string(), |s| format!("{s:.1}x"));

            writeln!(
                output,
                "| {} | {} | {} | {} | {} | {} | {} |",
                record.n,
                cost,
                millis(brute_force),
                millis(held_karp),
                speedup,
                work(brute_force),
                work(held_karp),
            )?;
        }
        writeln!(output)?;

        writeln!(output, "## Agreement")?;
        writeln!(output)?;
        let disagreeing: Vec<_> = result
            .records
            .iter()
            .filter(|r| !r.costs_agree())
            .map(|r| r.n.to_string())
            .collect();
        if disagreeing.is_empty() {
            writeln!(output, "Both methods found the same optimal cost at every size.")?;
        } else {
            writeln!(
                output,
                "**Costs differ at n = {}.**",
                disagreeing.join(", ")
            )?;
        }

        Ok(())
    }

    /// Writes the Markdown report to a file.
    pub fn to_file(result: &BenchmarkResult, path: impl AsRef<Path>) -> io::Result<()> {
        fs::write(path, Self::to_string(result))
    }

    /// Writes the Markdown report to a writer.
    pub fn write<W: Write>(result: &BenchmarkResult, mut writer: W) -> io::Result<()> {
        writer.write_all(Self::to_string(result).as_bytes())
    }
}

fn format_path(tour: &TourResult) -> String {
    tour.closed_path()
        .iter()
        .map(usize::to_string)
        .collect::<Vec<_>>()
        .join(" -> ")
}

fn millis(tour: Option<&TourResult>) -> String {
    tour.map_or_else(
        || "-".to_string(),
        |t| format!("{:.3}", t.elapsed_secs() * 1000.0),
    )
}

fn work(tour: Option<&TourResult>) -> String {
    tour.map_or_else(|| "-".to_string(), |t| t.work_count.to_string())
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
