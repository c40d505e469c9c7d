// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use row_reduce_core::config::Config;
use row_reduce_core::driver::Balancing;

#[test]
fn test_default_config() {
    // Arrange
    let config = Config::default();

    // Assert
    assert_eq!(config.rows, 1000);
    assert_eq!(config.cols, 100);
    assert_eq!(config.seed, 0x1234);
    assert_eq!(config.num_workers, 2);
    assert_eq!(config.balancing(), Balancing::Static);
}

#[test]
fn test_partial_json_falls_back_to_defaults() {
    // Act
    let config: Config =
        serde_json::from_str(r#"{"num_workers": 8, "dynamic_balancing": true}"#).unwrap();

    // Assert
    assert_eq!(config.num_workers, 8);
    assert_eq!(config.balancing(), Balancing::Dynamic);
    assert_eq!(config.rows, 1000);
    assert_eq!(config.cols, 100);
    assert_eq!(config.seed, 0x1234);
}

#[test]
fn test_load_from_file() {
    // Arrange
    let path = std::env::temp_dir().join("row_reduce_config_test.json");
    std::fs::write(&path, r#"{"rows": 12, "cols": 3, "seed": 7}"#).unwrap();

    // Act
    let config = Config::load(path.to_str().unwrap()).unwrap();

    // Assert
    assert_eq!(config.rows, 12);
    assert_eq!(config.cols, 3);
    assert_eq!(config.seed, 7);
    assert_eq!(config.num_workers, 2);
    assert!(!config.dynamic_balancing);

    let _ = std::fs::remove_file(&path);
}

#[test]
fn test_load_missing_file_is_an_error() {
    // Assert
    assert!(Config::load("/nonexistent/row-reduce.json").is_err());
}
