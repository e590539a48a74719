//! Routes and handlers.

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use tourbench_benchmark::{
    example_matrix, Benchmark, BenchmarkConfig, MatrixSource, RandomMatrixSource,
};
use tourbench_core::{validate_and_load, TourBenchError, ValidationError, MAX_CITIES, MIN_CITIES};
use tower_http::cors::{Any, CorsLayer};
use tracing::debug;

use crate::dto::{
    parse_json, parse_json_or_default, BenchmarkRequest, BenchmarkResponse, GenerateRequest,
    MatrixResponse, SolveRequest, SolveResponse,
};
use crate::error::ApiError;
use crate::source::ConfiguredSource;
use crate::state::AppState;

/// Builds the API router.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/solve", post(solve))
        .route("/api/generate", post(generate))
        .route("/api/example", get(example))
        .route("/api/benchmark", post(benchmark))
        .with_state(state)
}

/// The router with permissive CORS, as served by the binary.
pub fn app(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    router(state).layer(cors)
}

async fn solve(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<SolveResponse>, ApiError> {
    let request: SolveRequest = parse_json(&body)?;
    let matrix = validate_and_load(&request.distance_matrix).map_err(TourBenchError::from)?;
    let n = matrix.size();
    debug!(event = "solve_request", n = n as u64);

    let comparator = state.comparator();
    comparator.check_limit(n)?;
    let results = state
        .run_blocking(move |termination| comparator.compare_with(&matrix, termination))
        .await?;

    Ok(Json(SolveResponse {
        success: true,
        n,
        results: results.into(),
    }))
}

async fn generate(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<MatrixResponse>, ApiError> {
    let request: GenerateRequest = parse_json_or_default(&body)?;
    if !(MIN_CITIES..=MAX_CITIES).contains(&request.n) {
        return Err(ApiError::BadRequest(
            ValidationError::SizeOutOfRange {
                n: request.n,
                min: MIN_CITIES,
                max: MAX_CITIES,
            }
            .to_string(),
        ));
    }

    let section = state.benchmark();
    let mut source = RandomMatrixSource::new()
        .with_distance_range(section.min_distance, section.max_distance);
    let matrix = source.matrix(request.n)?;
    Ok(Json(MatrixResponse::new(matrix)))
}

async fn example() -> Json<MatrixResponse> {
    Json(MatrixResponse::new(example_matrix()))
}

async fn benchmark(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<BenchmarkResponse>, ApiError> {
    let request: BenchmarkRequest = parse_json_or_default(&body)?;
    let section = state.benchmark();
    let config = BenchmarkConfig::new(
        request.start_n.unwrap_or(section.start_n),
        request.end_n.unwrap_or(section.end_n),
    );
    let source = ConfiguredSource::new(request.source.unwrap_or(section.source), section);
    let comparator = state.comparator();

    let sizes = config.sizes();
    if !sizes.is_empty() {
        comparator.check_limit(*sizes.end())?;
    }

    let result = state
        .run_blocking(move |termination| {
            Benchmark::new(config, source)
                .with_comparator(comparator)
                .run_with(termination)
        })
        .await?;

    Ok(Json(BenchmarkResponse {
        success: true,
        results: result.into_records().into_iter().map(Into::into).collect(),
    }))
}
