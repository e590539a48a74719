//! Colorful console output for solver and benchmark events.
//!
//! Provides a custom `tracing` layer that renders the structured events
//! emitted by the tourbench crates (every event carries an `event` field).
//!
//! ## Log Levels
//!
//! - **INFO**: Lifecycle events (solve start/end, benchmark start/end, server start)
//! - **DEBUG**: Per-size benchmark progress and cancellations
//! - **TRACE**: Held-Karp layer progress

use num_format::{Locale, ToFormattedString};
use owo_colors::OwoColorize;
use std::io::{self, Write};
use std::sync::OnceLock;
use std::time::Instant;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::Context;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

static INIT: OnceLock<()> = OnceLock::new();
static EPOCH: OnceLock<Instant> = OnceLock::new();

/// Filter used when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "tourbench_solver=info,tourbench_benchmark=info,tourbench_server=info";

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initializes console output.
///
/// Safe to call multiple times - only the first call has effect. Honors
/// `RUST_LOG`, falling back to [`DEFAULT_FILTER`].
pub fn init() {
    INIT.get_or_init(|| {
        EPOCH.get_or_init(Instant::now);
        print_banner();

        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(TourConsoleLayer)
            .try_init();
    });
}

fn elapsed_secs() -> f64 {
    EPOCH.get().map_or(0.0, |epoch| epoch.elapsed().as_secs_f64())
}

fn print_banner() {
    let mut stdout = io::stdout().lock();
    let _ = writeln!(
        stdout,
        "{} {}",
        "tourbench".bright_cyan().bold(),
        format!("v{VERSION} - exact TSP: brute force vs Held-Karp").bright_white()
    );
    let _ = stdout.flush();
}

/// A tracing layer that formats tourbench events with colors.
pub struct TourConsoleLayer;

impl<S: Subscriber> Layer<S> for TourConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        if !metadata.target().starts_with("tourbench") {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let output = format_event(&visitor, *metadata.level());
        if !output.is_empty() {
            let _ = writeln!(io::stdout(), "{}", output);
        }
    }
}

#[derive(Default)]
struct EventVisitor {
    event: Option<String>,
    method: Option<String>,
    name: Option<String>,
    source: Option<String>,
    addr: Option<String>,
    n: Option<u64>,
    start_n: Option<u64>,
    end_n: Option<u64>,
    sizes: Option<u64>,
    size: Option<u64>,
    states: Option<u64>,
    evaluated: Option<u64>,
    work_count: Option<u64>,
    duration_ms: Option<u64>,
    brute_force_ms: Option<u64>,
    held_karp_ms: Option<u64>,
    timeout_ms: Option<u64>,
    cost: Option<f64>,
}

impl EventVisitor {
    fn set_str(&mut self, field: &Field, value: String) {
        match field.name() {
            "event" => self.event = Some(value),
            "method" => self.method = Some(value),
            "name" => self.name = Some(value),
            "source" => self.source = Some(value),
            "addr" => self.addr = Some(value),
            _ => {}
        }
    }
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let s = format!("{:?}", value);
        self.set_str(field, s.trim_matches('"').to_string());
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        self.set_str(field, value.to_string());
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        match field.name() {
            "n" => self.n = Some(value),
            "start_n" => self.start_n = Some(value),
            "end_n" => self.end_n = Some(value),
            "sizes" => self.sizes = Some(value),
            "size" => self.size = Some(value),
            "states" => self.states = Some(value),
            "evaluated" => self.evaluated = Some(value),
            "work_count" => self.work_count = Some(value),
            "duration_ms" => self.duration_ms = Some(value),
            "brute_force_ms" => self.brute_force_ms = Some(value),
            "held_karp_ms" => self.held_karp_ms = Some(value),
            "timeout_ms" => self.timeout_ms = Some(value),
            _ => {}
        }
    }

    // Every count field is non-negative; a negative value is dropped.
    fn record_i64(&mut self, field: &Field, value: i64) {
        if let Ok(value) = u64::try_from(value) {
            self.record_u64(field, value);
        }
    }

    fn record_f64(&mut self, field: &Field, value: f64) {
        if field.name() == "cost" {
            self.cost = Some(value);
        }
    }
}

fn format_event(v: &EventVisitor, level: Level) -> String {
    let event = v.event.as_deref().unwrap_or("");

    match event {
        "solve_start" => format_solve_start(v),
        "solve_end" => format_solve_end(v),
        "solve_cancelled" => format_solve_cancelled(v),
        "dp_layer" => format_dp_layer(v, level),
        "benchmark_start" => format_benchmark_start(v),
        "benchmark_size" => format_benchmark_size(v),
        "benchmark_end" => format_benchmark_end(v),
        "server_start" => format_server_start(v),
        "solve_timeout" => format_solve_timeout(v),
        _ => String::new(),
    }
}

fn format_elapsed() -> String {
    format!("{:>7.3}s", elapsed_secs())
        .bright_black()
        .to_string()
}

fn count(value: Option<u64>) -> String {
    value.unwrap_or(0).to_formatted_string(&Locale::en)
}

fn format_cost(cost: Option<f64>) -> String {
    match cost {
        Some(c) => c.to_string().bright_green().bold().to_string(),
        None => "N/A".white().to_string(),
    }
}

fn format_solve_start(v: &EventVisitor) -> String {
    format!(
        "{} {} {} │ {} cities",
        format_elapsed(),
        "▶".bright_green().bold(),
        v.method.as_deref().unwrap_or("Solver").white().bold(),
        count(v.n).bright_yellow(),
    )
}

fn format_solve_end(v: &EventVisitor) -> String {
    format!(
        "{} {} {} │ cost {} │ {} │ {} units",
        format_elapsed(),
        "■".bright_cyan().bold(),
        v.method.as_deref().unwrap_or("Solver").white().bold(),
        format_cost(v.cost),
        format_duration_ms(v.duration_ms.unwrap_or(0)).yellow(),
        count(v.work_count).bright_magenta(),
    )
}

fn format_solve_cancelled(v: &EventVisitor) -> String {
    format!(
        "{} {} {} cancelled after {} units",
        format_elapsed(),
        "✗".bright_red().bold(),
        v.method.as_deref().unwrap_or("Solver").white().bold(),
        count(v.evaluated.or(v.states)).bright_black(),
    )
}

fn format_dp_layer(v: &EventVisitor, level: Level) -> String {
    if level != Level::TRACE {
        return String::new();
    }
    format!(
        "{} {} layer {:>2} │ {} states",
        format_elapsed(),
        "·".bright_black(),
        v.size.unwrap_or(0),
        count(v.states).bright_black(),
    )
}

fn format_benchmark_start(v: &EventVisitor) -> String {
    format!(
        "{} {} Benchmark {} │ n = {}..={} │ {} matrices",
        format_elapsed(),
        "▶".bright_blue().bold(),
        v.name.as_deref().unwrap_or("").white().bold(),
        v.start_n.unwrap_or(0).bright_yellow(),
        v.end_n.unwrap_or(0).bright_yellow(),
        v.source.as_deref().unwrap_or("custom").bright_magenta(),
    )
}

fn format_benchmark_size(v: &EventVisitor) -> String {
    format!(
        "{} {} n = {:>2} │ cost {} │ brute force {} │ held-karp {}",
        format_elapsed(),
        "⚡".bright_cyan(),
        v.n.unwrap_or(0),
        format_cost(v.cost),
        format_duration_ms(v.brute_force_ms.unwrap_or(0)).yellow(),
        format_duration_ms(v.held_karp_ms.unwrap_or(0)).yellow(),
    )
}

fn format_benchmark_end(v: &EventVisitor) -> String {
    format!(
        "{} {} Benchmark {} complete │ {} sizes │ {}",
        format_elapsed(),
        "◀".bright_blue().bold(),
        v.name.as_deref().unwrap_or("").white().bold(),
        count(v.sizes).white(),
        format_duration_ms(v.duration_ms.unwrap_or(0)).yellow(),
    )
}

fn format_server_start(v: &EventVisitor) -> String {
    format!(
        "{} {} Listening on {}",
        format_elapsed(),
        "●".bright_green().bold(),
        v.addr.as_deref().unwrap_or("?").bright_white().bold(),
    )
}

fn format_solve_timeout(v: &EventVisitor) -> String {
    format!(
        "{} {} Solve timed out after {}",
        format_elapsed(),
        "⏱".bright_red().bold(),
        format_duration_ms(v.timeout_ms.unwrap_or(0)).yellow(),
    )
}

fn format_duration_ms(ms: u64) -> String {
    if ms < 1000 {
        format!("{}ms", ms)
    } else if ms < 60_000 {
        format!("{:.2}s", ms as f64 / 1000.0)
    } else {
        let mins = ms / 60_000;
        let secs = (ms % 60_000) / 1000;
        format!("{}m {}s", mins, secs)
    }
}
