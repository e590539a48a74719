//! Configuration system for tourbench.
//!
//! Solver limits, benchmark defaults and server settings are loaded from
//! TOML or YAML. Every field has a default, so an empty document is a valid
//! configuration.
//!
//! # Examples
//!
//! Load configuration from a TOML string:
//!
//! ```
//! use std::time::Duration;
//! use tourbench_config::{AppConfig, MatrixSourceKind};
//!
//! let config = AppConfig::from_toml_str(r#"
//!     [limits]
//!     brute_force_max_cities = 11
//!
//!     [benchmark]
//!     end_n = 9
//!     source = "example"
//!
//!     [server]
//!     solve_timeout_secs = 30
//! "#).unwrap();
//!
//! assert_eq!(config.limits.brute_force_max_cities, 11);
//! assert_eq!(config.limits.held_karp_max_cities, 15);
//! assert_eq!(config.benchmark.source, MatrixSourceKind::Example);
//! assert_eq!(config.server.solve_timeout(), Some(Duration::from_secs(30)));
//! config.validate().unwrap();
//! ```
//!
//! Use the default configuration when the file is missing:
//!
//! ```
//! use tourbench_config::AppConfig;
//!
//! let config = AppConfig::load("tourbench.toml").unwrap_or_default();
//! assert_eq!(config.server.bind, "127.0.0.1:5000");
//! ```

use std::net::SocketAddr;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tourbench_core::{MAX_CITIES, MIN_CITIES};

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Top-level application configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct AppConfig {
    /// Per-method city limits.
    #[serde(default)]
    pub limits: LimitsConfig,

    /// Benchmark defaults.
    #[serde(default)]
    pub benchmark: BenchmarkSection,

    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,
}

impl AppConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if file doesn't exist or contains invalid TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml_file(path)
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(s)?)
    }

    /// Sets the brute-force city limit.
    pub fn with_brute_force_max_cities(mut self, max_cities: usize) -> Self {
        self.limits.brute_force_max_cities = max_cities;
        self
    }

    /// Sets the Held-Karp city limit.
    pub fn with_held_karp_max_cities(mut self, max_cities: usize) -> Self {
        self.limits.held_karp_max_cities = max_cities;
        self
    }

    /// Sets the default benchmark range.
    pub fn with_benchmark_range(mut self, start_n: usize, end_n: usize) -> Self {
        self.benchmark.start_n = start_n;
        self.benchmark.end_n = end_n;
        self
    }

    /// Seeds benchmark matrix generation.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.benchmark.seed = Some(seed);
        self
    }

    /// Sets the server bind address.
    pub fn with_bind(mut self, bind: impl Into<String>) -> Self {
        self.server.bind = bind.into();
        self
    }

    /// Sets the per-request solve timeout.
    pub fn with_solve_timeout_secs(mut self, secs: u64) -> Self {
        self.server.solve_timeout_secs = Some(secs);
        self
    }

    /// Checks values that parse but cannot be used.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.limits.validate()?;
        self.benchmark.validate()?;
        self.server.validate()
    }
}

/// Largest city count each method will accept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct LimitsConfig {
    #[serde(default = "default_max_cities")]
    pub brute_force_max_cities: usize,

    #[serde(default = "default_max_cities")]
    pub held_karp_max_cities: usize,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            brute_force_max_cities: MAX_CITIES,
            held_karp_max_cities: MAX_CITIES,
        }
    }
}

impl LimitsConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("brute_force_max_cities", self.brute_force_max_cities),
            ("held_karp_max_cities", self.held_karp_max_cities),
        ] {
            if !(MIN_CITIES..=MAX_CITIES).contains(&value) {
                return Err(ConfigError::Invalid(format!(
                    "limits.{name} must be between {MIN_CITIES} and {MAX_CITIES}, got {value}"
                )));
            }
        }
        Ok(())
    }
}

/// Where benchmark matrices come from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatrixSourceKind {
    /// Fresh random symmetric matrices.
    #[default]
    Random,
    /// Leading blocks of the fixed canonical matrix.
    Example,
}

/// Benchmark defaults.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct BenchmarkSection {
    #[serde(default = "default_start_n")]
    pub start_n: usize,

    #[serde(default = "default_end_n")]
    pub end_n: usize,

    #[serde(default)]
    pub source: MatrixSourceKind,

    /// Seed for random matrices; fresh entropy when absent.
    #[serde(default)]
    pub seed: Option<u64>,

    /// Smallest drawn distance (inclusive).
    #[serde(default = "default_min_distance")]
    pub min_distance: u32,

    /// Largest drawn distance (exclusive).
    #[serde(default = "default_max_distance")]
    pub max_distance: u32,

    #[serde(default)]
    pub csv_output: Option<String>,

    #[serde(default)]
    pub markdown_output: Option<String>,
}

impl Default for BenchmarkSection {
    fn default() -> Self {
        Self {
            start_n: default_start_n(),
            end_n: default_end_n(),
            source: MatrixSourceKind::default(),
            seed: None,
            min_distance: default_min_distance(),
            max_distance: default_max_distance(),
            csv_output: None,
            markdown_output: None,
        }
    }
}

impl BenchmarkSection {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.min_distance >= self.max_distance {
            return Err(ConfigError::Invalid(format!(
                "benchmark distance range [{}, {}) is empty",
                self.min_distance, self.max_distance
            )));
        }
        Ok(())
    }
}

/// HTTP server settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct ServerConfig {
    #[serde(default = "default_bind")]
    pub bind: String,

    /// Solves allowed to run at once; further requests wait.
    #[serde(default = "default_max_concurrent_solves")]
    pub max_concurrent_solves: usize,

    #[serde(default)]
    pub solve_timeout_secs: Option<u64>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            max_concurrent_solves: default_max_concurrent_solves(),
            solve_timeout_secs: None,
        }
    }
}

impl ServerConfig {
    /// Returns the per-request solve timeout.
    pub fn solve_timeout(&self) -> Option<Duration> {
        self.solve_timeout_secs.map(Duration::from_secs)
    }

    /// Parses [`bind`](Self::bind) as a socket address.
    pub fn bind_addr(&self) -> Result<SocketAddr, ConfigError> {
        self.bind
            .parse()
            .map_err(|e| ConfigError::Invalid(format!("server.bind '{}': {e}", self.bind)))
    }

    fn validate(&self) -> Result<(), ConfigError> {
        self.bind_addr()?;
        if self.max_concurrent_solves == 0 {
            return Err(ConfigError::Invalid(
                "server.max_concurrent_solves must be at least 1".to_string(),
            ));
        }
        if self.solve_timeout_secs == Some(0) {
            return Err(ConfigError::Invalid(
                "server.solve_timeout_secs must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

fn default_max_cities() -> usize {
    MAX_CITIES
}

fn default_start_n() -> usize {
    3
}

fn default_end_n() -> usize {
    10
}

fn default_min_distance() -> u32 {
    1
}

fn default_max_distance() -> u32 {
    100
}

fn default_bind() -> String {
    "127.0.0.1:5000".to_string()
}

fn default_max_concurrent_solves() -> usize {
    4
}

#[cfg(test)]
mod tests;
