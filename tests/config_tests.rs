// Config loading and validation tests

use uptime_status::config::AppConfig;
use uptime_status::view::ChartRange;

const VALID_CONFIG: &str = r#"
[charts]
sparkline_minutes = 20
default_range = "1h"
ranges = ["20m", "1h", "3h"]

[export]
retention_days = 6
page_size = 5

[input]
monitors_path = "data/monitors.json"
output_dir = "out"
"#;

const MINIMAL_CONFIG: &str = r#"
[input]
monitors_path = "monitors.json"
output_dir = "out"
"#;

#[test]
fn test_config_loads_from_str() {
    let config = AppConfig::load_from_str(VALID_CONFIG).expect("load_from_str");
    assert_eq!(config.charts.sparkline_minutes, 20);
    assert_eq!(config.export.retention_days, 6);
    assert_eq!(config.export.page_size, 5);
    assert_eq!(config.input.monitors_path, "data/monitors.json");
    assert_eq!(config.default_chart_range().unwrap(), ChartRange::LastHour);
    assert_eq!(
        config.chart_ranges().unwrap(),
        vec![
            ChartRange::Last20Minutes,
            ChartRange::LastHour,
            ChartRange::Last3Hours
        ]
    );
}

#[test]
fn test_config_defaults_when_sections_omitted() {
    let config = AppConfig::load_from_str(MINIMAL_CONFIG).expect("valid");
    assert_eq!(config.charts.sparkline_minutes, 20);
    assert_eq!(config.charts.default_range, "20m");
    assert_eq!(config.charts.ranges, vec!["20m", "1h", "3h"]);
    assert_eq!(config.export.retention_days, 6);
    assert_eq!(config.export.page_size, 5);
}

#[test]
fn test_config_accepts_multi_day_ranges() {
    let cfg = VALID_CONFIG
        .replace("ranges = [\"20m\", \"1h\", \"3h\"]", "ranges = [\"24h\", \"48h\", \"72h\"]")
        .replace("default_range = \"1h\"", "default_range = \"24h\"");
    let config = AppConfig::load_from_str(&cfg).expect("valid");
    assert_eq!(config.default_chart_range().unwrap(), ChartRange::Last24Hours);
}

#[test]
fn test_config_validation_rejects_sparkline_minutes_zero() {
    let bad = VALID_CONFIG.replace("sparkline_minutes = 20", "sparkline_minutes = 0");
    let err = AppConfig::load_from_str(&bad).unwrap_err();
    assert!(err.to_string().contains("sparkline_minutes"));
}

#[test]
fn test_config_validation_rejects_negative_sparkline_minutes() {
    let bad = VALID_CONFIG.replace("sparkline_minutes = 20", "sparkline_minutes = -20");
    let err = AppConfig::load_from_str(&bad).unwrap_err();
    assert!(err.to_string().contains("sparkline_minutes"));
}

#[test]
fn test_config_validation_rejects_unknown_range() {
    let bad = VALID_CONFIG.replace("\"3h\"]", "\"2h\"]");
    let err = AppConfig::load_from_str(&bad).unwrap_err();
    assert!(err.to_string().contains("charts.ranges"));
}

#[test]
fn test_config_validation_rejects_empty_ranges() {
    let bad = VALID_CONFIG.replace("ranges = [\"20m\", \"1h\", \"3h\"]", "ranges = []");
    let err = AppConfig::load_from_str(&bad).unwrap_err();
    assert!(err.to_string().contains("charts.ranges"));
}

#[test]
fn test_config_validation_rejects_default_range_not_offered() {
    let bad = VALID_CONFIG.replace("default_range = \"1h\"", "default_range = \"72h\"");
    let err = AppConfig::load_from_str(&bad).unwrap_err();
    assert!(err.to_string().contains("default_range"));
}

#[test]
fn test_config_validation_rejects_retention_days_zero() {
    let bad = VALID_CONFIG.replace("retention_days = 6", "retention_days = 0");
    let err = AppConfig::load_from_str(&bad).unwrap_err();
    assert!(err.to_string().contains("retention_days"));
}

#[test]
fn test_config_validation_rejects_page_size_zero() {
    let bad = VALID_CONFIG.replace("page_size = 5", "page_size = 0");
    let err = AppConfig::load_from_str(&bad).unwrap_err();
    assert!(err.to_string().contains("page_size"));
}

#[test]
fn test_config_validation_rejects_empty_monitors_path() {
    let bad = VALID_CONFIG.replace(
        "monitors_path = \"data/monitors.json\"",
        "monitors_path = \"\"",
    );
    let err = AppConfig::load_from_str(&bad).unwrap_err();
    assert!(err.to_string().contains("input.monitors_path"));
}

#[test]
fn test_config_validation_rejects_missing_input_section() {
    let err = AppConfig::load_from_str("[export]\nretention_days = 6\n").unwrap_err();
    assert!(!err.to_string().is_empty());
}

#[test]
fn test_config_validation_rejects_invalid_toml() {
    let err = AppConfig::load_from_str("not valid toml [[[").unwrap_err();
    assert!(!err.to_string().is_empty());
}

#[test]
fn test_config_load_from_file_via_env() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, VALID_CONFIG).unwrap();
    unsafe { std::env::set_var("CONFIG_FILE", path.to_str().unwrap()) };
    let result = AppConfig::load();
    unsafe { std::env::remove_var("CONFIG_FILE") };
    let config = result.expect("load from CONFIG_FILE");
    assert_eq!(config.export.retention_days, 6);
    assert_eq!(config.input.output_dir, "out");
}
