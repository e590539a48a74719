//! HTTP request layer for the tourbench solvers.
//!
//! Routes:
//! - `POST /api/solve`: run both solvers on a submitted matrix
//! - `POST /api/generate`: random symmetric matrix of `n` cities
//! - `GET /api/example`: the six-city example matrix
//! - `POST /api/benchmark`: scaling run over a range of city counts
//!
//! Solves run on tokio's blocking pool behind a semaphore sized by
//! `server.max_concurrent_solves`. With `server.solve_timeout_secs` set, a
//! solve that overruns is cancelled through its termination flag and the
//! request fails with 504.

pub mod api;
pub mod dto;
pub mod error;
pub mod source;
pub mod state;

use tourbench_config::{AppConfig, ConfigError};

pub use api::{app, router};
pub use error::ApiError;
pub use source::ConfiguredSource;
pub use state::AppState;

/// Configuration file read when no path is given.
pub const DEFAULT_CONFIG_PATH: &str = "tourbench.toml";

/// Loads and validates the application configuration.
///
/// An explicit `path` must exist. Without one, [`DEFAULT_CONFIG_PATH`] is
/// read when present and defaults are used otherwise. Files ending in
/// `.yaml` or `.yml` are parsed as YAML.
pub fn load_config(path: Option<&str>) -> Result<AppConfig, ConfigError> {
    let config = match path {
        Some(path) if path.ends_with(".yaml") || path.ends_with(".yml") => {
            AppConfig::from_yaml_file(path)?
        }
        Some(path) => AppConfig::load(path)?,
        None => match AppConfig::load(DEFAULT_CONFIG_PATH) {
            Err(ConfigError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                AppConfig::default()
            }
            other => other?,
        },
    };
    config.validate()?;
    Ok(config)
}
