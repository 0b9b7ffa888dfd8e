use std::fs;
use tempfile::tempdir;
use trendcast::config::{AnalysisOptions, DEFAULT_MIN_POINTS};
use trendcast::{analyze_values, Error, Frequency};

const TOML_OPTIONS: &str = r#"
min_points = 6
non_negative = true
grid_step = 0.1

[trend]
snr_strong = 0.8
"#;

const YAML_OPTIONS: &str = "
min_points: 6
non_negative: true
grid_step: 0.1
trend:
  snr_strong: 0.8
";

const JSON_OPTIONS: &str =
    r#"{"min_points": 6, "non_negative": true, "grid_step": 0.1, "trend": {"snr_strong": 0.8}}"#;

fn assert_loaded(options: &AnalysisOptions) {
    assert_eq!(options.min_points, 6);
    assert!(options.non_negative);
    assert_eq!(options.grid_step, Some(0.1));
    assert_eq!(options.trend.snr_strong, 0.8);
    // unspecified thresholds keep their defaults
    assert_eq!(options.trend.snr_weak, 0.1);
    assert_eq!(options.trend.stable_epsilon, 0.0005);
}

#[test]
fn test_load_each_format_from_str() {
    assert_loaded(&AnalysisOptions::from_toml_str(TOML_OPTIONS).unwrap());
    assert_loaded(&AnalysisOptions::from_yaml_str(YAML_OPTIONS).unwrap());
    assert_loaded(&AnalysisOptions::from_json_str(JSON_OPTIONS).unwrap());
}

#[test]
fn test_empty_document_gives_defaults() {
    let options = AnalysisOptions::from_toml_str("").unwrap();
    assert_eq!(options, AnalysisOptions::default());
    assert_eq!(options.min_points, DEFAULT_MIN_POINTS);

    let options = AnalysisOptions::from_json_str("{}").unwrap();
    assert_eq!(options, AnalysisOptions::default());
}

#[test]
fn test_load_from_path() {
    let dir = tempdir().unwrap();

    let toml_path = dir.path().join("options.toml");
    fs::write(&toml_path, TOML_OPTIONS).unwrap();
    assert_loaded(&AnalysisOptions::from_path(&toml_path).unwrap());

    let yaml_path = dir.path().join("options.YML");
    fs::write(&yaml_path, YAML_OPTIONS).unwrap();
    assert_loaded(&AnalysisOptions::from_path(&yaml_path).unwrap());

    let json_path = dir.path().join("options.json");
    fs::write(&json_path, JSON_OPTIONS).unwrap();
    assert_loaded(&AnalysisOptions::from_path(&json_path).unwrap());
}

#[test]
fn test_unsupported_extension() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("options.ini");
    fs::write(&path, "min_points = 6").unwrap();

    match AnalysisOptions::from_path(&path) {
        Err(Error::Config(msg)) => assert!(msg.contains("ini")),
        other => panic!("expected config error, got {:?}", other),
    }
}

#[test]
fn test_missing_file() {
    let dir = tempdir().unwrap();
    let result = AnalysisOptions::from_path(dir.path().join("absent.toml"));
    assert!(matches!(result, Err(Error::Io(_))));
}

#[test]
fn test_malformed_documents() {
    assert!(matches!(
        AnalysisOptions::from_toml_str("min_points = "),
        Err(Error::Toml(_))
    ));
    assert!(matches!(
        AnalysisOptions::from_yaml_str("min_points: [1"),
        Err(Error::Yaml(_))
    ));
    assert!(matches!(
        AnalysisOptions::from_json_str("{\"min_points\": \"ten\"}"),
        Err(Error::Json(_))
    ));
}

#[test]
fn test_invalid_values_rejected() {
    assert!(matches!(
        AnalysisOptions::from_toml_str("min_points = 1"),
        Err(Error::Config(_))
    ));
    assert!(matches!(
        AnalysisOptions::from_toml_str("grid_step = 0.75"),
        Err(Error::Config(_))
    ));
    assert!(matches!(
        AnalysisOptions::from_json_str(r#"{"trend": {"snr_weak": 0.9, "snr_strong": 0.5}}"#),
        Err(Error::Config(_))
    ));
    assert!(matches!(
        AnalysisOptions::from_yaml_str("trend:\n  r_squared_strong: 1.5\n"),
        Err(Error::Config(_))
    ));
}

#[test]
fn test_loaded_options_drive_analysis() {
    let options = AnalysisOptions::from_toml_str("min_points = 4").unwrap();
    let values = [3.0, 5.0, 4.0, 6.0];

    assert!(analyze_values(&values, Frequency::Monthly, &options).is_some());
    assert!(analyze_values(&values, Frequency::Monthly, &AnalysisOptions::default()).is_none());
}
