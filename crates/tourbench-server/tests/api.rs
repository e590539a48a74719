//! End-to-end tests of the HTTP routes.

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tourbench_config::AppConfig;
use tourbench_server::{router, AppState};
use tourbench_test::example_six;
use tower::ServiceExt;

fn app_with(config: AppConfig) -> Router {
    router(Arc::new(AppState::from_config(&config)))
}

fn app() -> Router {
    app_with(AppConfig::default())
}

async fn post(app: Router, uri: &str, body: String) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body))
        .unwrap();
    send(app, request).await
}

async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(app, request).await
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

fn example_rows() -> Value {
    json!(example_six().matrix.to_rows())
}

#[tokio::test]
async fn test_solve_example() {
    let body = json!({ "distance_matrix": example_rows() }).to_string();
    let (status, value) = post(app(), "/api/solve", body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(value["success"], true);
    assert_eq!(value["n"], 6);

    let results = value["results"].as_array().unwrap();
    assert_eq!(results.len(), 2);
    assert_eq!(results[0]["method"], "Brute Force");
    assert_eq!(results[0]["cost"], 87.0);
    assert_eq!(results[0]["path"], json!([0, 1, 3, 4, 5, 2]));
    assert_eq!(results[0]["work_count"], 120);
    assert_eq!(results[1]["method"], "Bellman-Held-Karp");
    assert_eq!(results[1]["cost"], 87.0);
    assert_eq!(results[1]["work_count"], 80);
    assert!(results[1]["elapsed_time"].as_f64().unwrap() >= 0.0);
}

#[tokio::test]
async fn test_solve_rejects_asymmetric_matrix() {
    let body = json!({
        "distance_matrix": [[0, 1, 2], [5, 0, 3], [2, 3, 0]]
    })
    .to_string();
    let (status, value) = post(app(), "/api/solve", body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(value["success"], false);
    assert!(value["error"].as_str().unwrap().contains("not symmetric at (0, 1)"));
}

#[tokio::test]
async fn test_solve_rejects_too_few_cities() {
    let body = json!({ "distance_matrix": [[0, 1], [1, 0]] }).to_string();
    let (status, value) = post(app(), "/api/solve", body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(value["error"].as_str().unwrap().contains("2 cities"));
}

#[tokio::test]
async fn test_solve_rejects_malformed_body() {
    let (status, value) = post(app(), "/api/solve", "{not json".to_string()).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(value["success"], false);

    let (status, _) = post(app(), "/api/solve", "{}".to_string()).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_solve_respects_configured_limit() {
    let app = app_with(AppConfig::default().with_brute_force_max_cities(5));
    let body = json!({ "distance_matrix": example_rows() }).to_string();
    let (status, value) = post(app, "/api/solve", body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(value["error"]
        .as_str()
        .unwrap()
        .contains("Brute Force is limited to 5 cities, got 6"));
}

#[tokio::test]
async fn test_solve_times_out() {
    let app = app_with(AppConfig::default().with_solve_timeout_secs(1));
    let rows = tourbench_test::seeded_matrix(14, 1).to_rows();
    let body = json!({ "distance_matrix": rows }).to_string();
    let (status, value) = post(app, "/api/solve", body).await;

    assert_eq!(status, StatusCode::GATEWAY_TIMEOUT);
    assert_eq!(value["success"], false);
}

#[tokio::test]
async fn test_generate() {
    let (status, value) = post(app(), "/api/generate", json!({ "n": 7 }).to_string()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(value["n"], 7);

    let rows = value["distance_matrix"].as_array().unwrap();
    assert_eq!(rows.len(), 7);
    for i in 0..7 {
        assert_eq!(rows[i][i], 0.0);
        for j in 0..7 {
            assert_eq!(rows[i][j], rows[j][i]);
            if i != j {
                let d = rows[i][j].as_f64().unwrap();
                assert!((1.0..100.0).contains(&d));
            }
        }
    }
}

#[tokio::test]
async fn test_generate_defaults_to_six() {
    let (status, value) = post(app(), "/api/generate", String::new()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(value["n"], 6);
}

#[tokio::test]
async fn test_generate_rejects_out_of_range() {
    for n in [2, 16] {
        let (status, value) = post(app(), "/api/generate", json!({ "n": n }).to_string()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "n = {n}");
        assert_eq!(value["success"], false);
    }
}

#[tokio::test]
async fn test_example() {
    let (status, value) = get(app(), "/api/example").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(value["n"], 6);
    assert_eq!(value["distance_matrix"], example_rows());
}

#[tokio::test]
async fn test_benchmark_records() {
    let app = app_with(AppConfig::default().with_seed(9));
    let body = json!({ "start_n": 3, "end_n": 6 }).to_string();
    let (status, value) = post(app, "/api/benchmark", body).await;

    assert_eq!(status, StatusCode::OK);
    let results = value["results"].as_array().unwrap();
    assert_eq!(results.len(), 4);
    for (entry, n) in results.iter().zip(3u64..) {
        assert_eq!(entry["n"], n);
        let methods = entry["methods"].as_array().unwrap();
        assert_eq!(methods[0]["method"], "Brute Force");
        assert_eq!(methods[1]["method"], "Bellman-Held-Karp");
        assert_eq!(methods[0]["cost"], methods[1]["cost"]);
    }
}

#[tokio::test]
async fn test_benchmark_example_source_and_clamping() {
    let body = json!({ "start_n": 1, "end_n": 6, "source": "example" }).to_string();
    let (status, value) = post(app(), "/api/benchmark", body).await;

    assert_eq!(status, StatusCode::OK);
    let results = value["results"].as_array().unwrap();
    assert_eq!(results.len(), 4);
    assert_eq!(results[0]["n"], 3);
    assert_eq!(results[3]["methods"][0]["cost"], 87.0);
}

#[tokio::test]
async fn test_benchmark_limit_fails_up_front() {
    let app = app_with(AppConfig::default().with_brute_force_max_cities(8));
    let body = json!({ "start_n": 3, "end_n": 12 }).to_string();
    let (status, value) = post(app, "/api/benchmark", body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(value["error"].as_str().unwrap().contains("limited to 8 cities"));
}
