//! 설정 TOML 왕복 테스트.
use std::path::PathBuf;

use pour_cost_toolbox::config::{load_or_default, Config};
use pour_cost_toolbox::measurement::MeasurementSystem;

fn temp_config_path(name: &str) -> PathBuf {
    let mut path = std::env::temp_dir();
    path.push(format!("pour_cost_toolbox_{name}_{}.toml", std::process::id()));
    path
}

#[test]
fn missing_file_creates_default() {
    let path = temp_config_path("default");
    let _ = std::fs::remove_file(&path);
    let cfg = load_or_default(&path).expect("load");
    assert_eq!(cfg.base_currency, "USD");
    assert!((cfg.pour_cost_goal_percent - 20.0).abs() < 1e-12);
    assert_eq!(cfg.measurement_system, MeasurementSystem::Us);
    assert!(path.exists());
    let _ = std::fs::remove_file(&path);
}

#[test]
fn save_then_load_roundtrips() {
    let path = temp_config_path("roundtrip");
    let cfg = Config {
        measurement_system: MeasurementSystem::Metric,
        base_currency: "KRW".to_string(),
        pour_cost_goal_percent: 22.5,
        language: Some("ko".to_string()),
    };
    cfg.save(&path).expect("save");
    let loaded = load_or_default(&path).expect("load");
    assert_eq!(loaded.measurement_system, MeasurementSystem::Metric);
    assert_eq!(loaded.base_currency, "KRW");
    assert!((loaded.pour_cost_goal_percent - 22.5).abs() < 1e-12);
    assert_eq!(loaded.language.as_deref(), Some("ko"));
    let _ = std::fs::remove_file(&path);
}

#[test]
fn toml_string_roundtrip() {
    let cfg = Config::default();
    let text = toml::to_string_pretty(&cfg).expect("serialize");
    let back: Config = toml::from_str(&text).expect("deserialize");
    assert_eq!(back.base_currency, cfg.base_currency);
    assert_eq!(back.measurement_system, cfg.measurement_system);
}
