//! Command-line scaling benchmark.
//!
//! Run with: cargo run --release -p tourbench-server --bin tourbench-bench -- [config.toml]
//!
//! Uses the `[benchmark]` and `[limits]` sections of the configuration,
//! prints the Markdown report and writes the CSV / Markdown files when
//! `csv_output` / `markdown_output` are set.

use std::process::ExitCode;

use tourbench_benchmark::{Benchmark, BenchmarkConfig, CsvExporter, MarkdownReport};
use tourbench_server::{load_config, AppState, ConfiguredSource};

fn main() -> ExitCode {
    tourbench_console::init();

    let path = std::env::args().nth(1);
    let config = match load_config(path.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("tourbench-bench: {e}");
            return ExitCode::FAILURE;
        }
    };

    let section = &config.benchmark;
    let mut bench_config =
        BenchmarkConfig::new(section.start_n, section.end_n).with_name("tourbench scaling");
    if let Some(path) = &section.csv_output {
        bench_config = bench_config.with_csv_output(path.clone());
    }
    if let Some(path) = &section.markdown_output {
        bench_config = bench_config.with_markdown_output(path.clone());
    }

    let comparator = AppState::from_config(&config).comparator();
    let mut benchmark = Benchmark::new(bench_config, ConfiguredSource::from_section(section))
        .with_comparator(comparator);

    let result = match benchmark.run() {
        Ok(result) => result,
        Err(e) => {
            eprintln!("tourbench-bench: {e}");
            return ExitCode::FAILURE;
        }
    };

    println!();
    print!("{}", MarkdownReport::to_string(&result));

    let outputs = benchmark.config();
    if let Some(path) = outputs.csv_output_path() {
        if let Err(e) = CsvExporter::to_file(&result, path) {
            eprintln!("tourbench-bench: writing {path}: {e}");
            return ExitCode::FAILURE;
        }
    }
    if let Some(path) = outputs.markdown_output_path() {
        if let Err(e) = MarkdownReport::to_file(&result, path) {
            eprintln!("tourbench-bench: writing {path}: {e}");
            return ExitCode::FAILURE;
        }
    }

    if result.all_costs_agree() {
        ExitCode::SUCCESS
    } else {
        eprintln!("tourbench-bench: solvers disagree on the optimal cost");
        ExitCode::FAILURE
    }
}
