use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::measurement::MeasurementSystem;

/// 애플리케이션 설정을 표현한다.
///
/// 목표 원가율은 여기 저장만 하고, 엔진 호출 시 항상 파라미터로 넘긴다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub measurement_system: MeasurementSystem,
    /// 기준 통화 코드 (ISO, 예: USD)
    pub base_currency: String,
    /// 목표 원가율 [%]
    pub pour_cost_goal_percent: f64,
    /// 언어 코드. 없으면 시스템 로케일을 따른다.
    pub language: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            measurement_system: MeasurementSystem::Us,
            base_currency: "USD".to_string(),
            pour_cost_goal_percent: 20.0,
            language: None,
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum ConfigError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// TOML 역직렬화 오류
    Serde(toml::de::Error),
    /// TOML 직렬화 오류
    Serialize(toml::ser::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "파일 입출력 오류: {e}"),
            ConfigError::Serde(e) => write!(f, "설정 파싱 오류: {e}"),
            ConfigError::Serialize(e) => write!(f, "설정 직렬화 오류: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(value: std::io::Error) -> Self {
        ConfigError::Io(value)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(value: toml::de::Error) -> Self {
        ConfigError::Serde(value)
    }
}

impl From<toml::ser::Error> for ConfigError {
    fn from(value: toml::ser::Error) -> Self {
        ConfigError::Serialize(value)
    }
}

/// 설정 파일을 로드하거나 없으면 기본 설정을 생성해 저장한다.
pub fn load_or_default(path: &Path) -> Result<Config, ConfigError> {
    if path.exists() {
        let content = fs::read_to_string(path)?;
        let cfg: Config = toml::from_str(&content)?;
        Ok(cfg)
    } else {
        let cfg = Config::default();
        cfg.save(path)?;
        Ok(cfg)
    }
}

impl Config {
    /// 설정을 지정된 경로에 저장한다.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}
