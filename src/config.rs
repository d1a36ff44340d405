use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::{info, warn};

use crate::deemter::SamplingDomain;
use crate::input::{InputBounds, InputSnapshot};

/// 기본 설정 파일 경로.
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// 결과 표시 소수 자릿수 상한. 설정 화면도 이 값으로 제한한다.
pub const MAX_PRECISION: usize = 10;

/// 애플리케이션 설정을 표현한다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 언어 코드 (auto/en/de/ko)
    pub language: String,
    /// 언어팩 디렉터리. 없으면 locales/ 를 찾는다.
    pub language_pack_dir: Option<String>,
    /// 결과 표시 소수 자릿수
    pub precision: usize,
    /// 곡선 샘플링 구간
    pub domain: SamplingDomain,
    /// 입력값 허용 범위
    pub bounds: InputBounds,
    /// 시작 시 입력값
    pub defaults: InputSnapshot,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: "auto".to_string(),
            language_pack_dir: None,
            precision: 2,
            domain: SamplingDomain::default(),
            bounds: InputBounds::default(),
            defaults: InputSnapshot::default(),
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 파일 입출력 오류
    #[error("file I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML 역직렬화 오류
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    /// TOML 직렬화 오류
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
    /// 값 검증 실패
    #[error("invalid config: {0}")]
    Invalid(String),
}

impl Config {
    /// 샘플링 구간과 입력 범위가 계산 가능한지 확인한다.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.domain
            .validate()
            .map_err(|e| ConfigError::Invalid(format!("domain: {e}")))?;
        if self.precision > MAX_PRECISION {
            return Err(ConfigError::Invalid(format!(
                "precision must be at most {MAX_PRECISION} (got {})",
                self.precision
            )));
        }
        let b = &self.bounds;
        for (name, bound) in [("a", b.a), ("b", b.b), ("c", b.c), ("flow_rate", b.flow_rate)] {
            if let Some(problem) = bound.problem() {
                return Err(ConfigError::Invalid(format!("bounds.{name}: {problem}")));
            }
        }
        if b.flow_rate.min <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "bounds.flow_rate.min must be greater than 0 (got {})",
                b.flow_rate.min
            )));
        }
        Ok(())
    }

    /// 설정을 config.toml에 저장한다.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(Path::new(DEFAULT_CONFIG_PATH))
    }

    /// 설정을 지정한 경로에 저장한다.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        info!(path = %path.display(), "config saved");
        Ok(())
    }
}

/// config.toml을 로드하거나 없으면 기본 설정을 생성한다.
pub fn load_or_default() -> Result<Config, ConfigError> {
    load_or_default_at(Path::new(DEFAULT_CONFIG_PATH))
}

/// 지정한 경로의 설정을 로드한다. 파일이 없으면 기본값으로 새로 만든다.
pub fn load_or_default_at(path: &Path) -> Result<Config, ConfigError> {
    if path.exists() {
        let content = fs::read_to_string(path)?;
        let cfg: Config = toml::from_str(&content)?;
        cfg.validate()?;
        info!(path = %path.display(), "config loaded");
        Ok(cfg)
    } else {
        warn!(path = %path.display(), "config not found, writing defaults");
        let cfg = Config::default();
        cfg.save_to(path)?;
        Ok(cfg)
    }
}
