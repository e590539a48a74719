//! Tests for application configuration.

use super::*;

#[test]
fn test_empty_toml_is_default() {
    let config = AppConfig::from_toml_str("").unwrap();
    assert_eq!(config, AppConfig::default());
    assert_eq!(config.limits.brute_force_max_cities, 15);
    assert_eq!(config.benchmark.start_n, 3);
    assert_eq!(config.benchmark.end_n, 10);
    assert_eq!(config.benchmark.source, MatrixSourceKind::Random);
    assert_eq!(config.benchmark.min_distance, 1);
    assert_eq!(config.benchmark.max_distance, 100);
    assert_eq!(config.server.max_concurrent_solves, 4);
    assert_eq!(config.server.solve_timeout(), None);
    config.validate().unwrap();
}

#[test]
fn test_toml_parsing() {
    let toml = r#"
        [limits]
        brute_force_max_cities = 10
        held_karp_max_cities = 14

        [benchmark]
        start_n = 4
        end_n = 12
        source = "example"
        seed = 42
        csv_output = "bench.csv"
        markdown_output = "bench.md"

        [server]
        bind = "0.0.0.0:8080"
        max_concurrent_solves = 2
        solve_timeout_secs = 5
    "#;

    let config = AppConfig::from_toml_str(toml).unwrap();
    assert_eq!(config.limits.brute_force_max_cities, 10);
    assert_eq!(config.limits.held_karp_max_cities, 14);
    assert_eq!(config.benchmark.start_n, 4);
    assert_eq!(config.benchmark.end_n, 12);
    assert_eq!(config.benchmark.source, MatrixSourceKind::Example);
    assert_eq!(config.benchmark.seed, Some(42));
    assert_eq!(config.benchmark.csv_output.as_deref(), Some("bench.csv"));
    assert_eq!(config.benchmark.markdown_output.as_deref(), Some("bench.md"));
    assert_eq!(config.server.bind_addr().unwrap().port(), 8080);
    assert_eq!(config.server.solve_timeout(), Some(Duration::from_secs(5)));
    config.validate().unwrap();
}

#[test]
fn test_yaml_parsing() {
    let yaml = r#"
        limits:
          brute_force_max_cities: 9
        benchmark:
          source: random
          seed: 7
          max_distance: 50
        server:
          max_concurrent_solves: 1
    "#;

    let config = AppConfig::from_yaml_str(yaml).unwrap();
    assert_eq!(config.limits.brute_force_max_cities, 9);
    assert_eq!(config.limits.held_karp_max_cities, 15);
    assert_eq!(config.benchmark.seed, Some(7));
    assert_eq!(config.benchmark.max_distance, 50);
    assert_eq!(config.server.max_concurrent_solves, 1);
}

#[test]
fn test_unknown_source_is_a_parse_error() {
    let err = AppConfig::from_toml_str("[benchmark]\nsource = \"file\"\n").unwrap_err();
    assert!(matches!(err, ConfigError::Toml(_)));
}

#[test]
fn test_missing_file_is_io_error() {
    let err = AppConfig::load("/nonexistent/tourbench.toml").unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
}

#[test]
fn test_builder() {
    let config = AppConfig::new()
        .with_brute_force_max_cities(11)
        .with_held_karp_max_cities(13)
        .with_benchmark_range(5, 9)
        .with_seed(3)
        .with_bind("127.0.0.1:0")
        .with_solve_timeout_secs(10);

    assert_eq!(config.limits.brute_force_max_cities, 11);
    assert_eq!(config.limits.held_karp_max_cities, 13);
    assert_eq!((config.benchmark.start_n, config.benchmark.end_n), (5, 9));
    assert_eq!(config.benchmark.seed, Some(3));
    assert_eq!(config.server.solve_timeout_secs, Some(10));
    config.validate().unwrap();
}

#[test]
fn test_limit_above_bound_is_invalid() {
    let err = AppConfig::new()
        .with_brute_force_max_cities(16)
        .validate()
        .unwrap_err();
    assert!(err.to_string().contains("brute_force_max_cities"));

    let err = AppConfig::new()
        .with_held_karp_max_cities(2)
        .validate()
        .unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));
}

#[test]
fn test_invalid_server_settings() {
    assert!(AppConfig::new().with_bind("not an address").validate().is_err());

    let mut config = AppConfig::new();
    config.server.max_concurrent_solves = 0;
    assert!(config.validate().is_err());

    assert!(AppConfig::new().with_solve_timeout_secs(0).validate().is_err());
}

#[test]
fn test_empty_distance_range_is_invalid() {
    let mut config = AppConfig::new();
    config.benchmark.min_distance = 100;
    assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
}
