//! Request and response bodies.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tourbench_benchmark::BenchmarkRecord;
use tourbench_config::MatrixSourceKind;
use tourbench_core::{DistanceMatrix, TourResult};

use crate::error::ApiError;

#[derive(Debug, Clone, Deserialize)]
pub struct SolveRequest {
    pub distance_matrix: Vec<Vec<f64>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SolveResponse {
    pub success: bool,
    pub n: usize,
    /// Brute force first, then Held-Karp.
    pub results: Vec<TourResult>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GenerateRequest {
    #[serde(default = "default_generate_n")]
    pub n: usize,
}

impl Default for GenerateRequest {
    fn default() -> Self {
        Self {
            n: default_generate_n(),
        }
    }
}

fn default_generate_n() -> usize {
    6
}

/// A matrix handed back to the client.
#[derive(Debug, Clone, Serialize)]
pub struct MatrixResponse {
    pub success: bool,
    pub n: usize,
    pub distance_matrix: DistanceMatrix,
}

impl MatrixResponse {
    pub fn new(matrix: DistanceMatrix) -> Self {
        Self {
            success: true,
            n: matrix.size(),
            distance_matrix: matrix,
        }
    }
}

/// Benchmark range; missing fields fall back to the configured defaults.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BenchmarkRequest {
    pub start_n: Option<usize>,
    pub end_n: Option<usize>,
    pub source: Option<MatrixSourceKind>,
}

#[derive(Debug, Clone, Serialize)]
pub struct BenchmarkEntry {
    pub n: usize,
    pub methods: Vec<TourResult>,
}

impl From<BenchmarkRecord> for BenchmarkEntry {
    fn from(record: BenchmarkRecord) -> Self {
        Self {
            n: record.n,
            methods: record.results,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct BenchmarkResponse {
    pub success: bool,
    pub results: Vec<BenchmarkEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
}

/// Parses a JSON body.
pub fn parse_json<T: DeserializeOwned>(body: &[u8]) -> Result<T, ApiError> {
    serde_json::from_slice(body).map_err(|e| ApiError::BadRequest(format!("invalid request body: {e}")))
}

/// Parses a JSON body, treating an empty body as `T::default()`.
pub fn parse_json_or_default<T: DeserializeOwned + Default>(body: &[u8]) -> Result<T, ApiError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(T::default());
    }
    parse_json(body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_body_uses_defaults() {
        let request: GenerateRequest = parse_json_or_default(b"").unwrap();
        assert_eq!(request.n, 6);
        let request: GenerateRequest = parse_json_or_default(b"{}").unwrap();
        assert_eq!(request.n, 6);
        let request: BenchmarkRequest = parse_json_or_default(b"  ").unwrap();
        assert_eq!(request.start_n, None);
    }

    #[test]
    fn test_malformed_body_is_bad_request() {
        let err = parse_json::<SolveRequest>(b"{\"distance_matrix\": 5}").unwrap_err();
        assert!(matches!(err, ApiError::BadRequest(_)));
        assert!(parse_json_or_default::<GenerateRequest>(b"{\"n\": -1}").is_err());
    }
}
