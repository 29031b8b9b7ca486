//! 설정 관리: ironscan.toml 파싱 및 런타임 설정
//!
//! [`IronscanConfig`]는 모든 모듈의 설정을 담는 최상위 구조체입니다.
//!
//! # 설정 로딩 우선순위
//! 1. 환경변수 (`IRONSCAN_GENERAL_LOG_LEVEL=debug` 형식)
//! 2. 설정 파일 (`ironscan.toml`)
//! 3. 기본값 (`Default` 구현)
//!
//! # 사용 예시
//! ```no_run
//! # async fn example() -> Result<(), ironscan_core::error::IronscanError> {
//! use ironscan_core::config::IronscanConfig;
//!
//! // 파일에서 로드 + 환경변수 오버라이드
//! let config = IronscanConfig::load("ironscan.toml").await?;
//!
//! // TOML 문자열에서 직접 파싱
//! let config = IronscanConfig::parse("[general]\nlog_level = \"debug\"")?;
//! # Ok(())
//! # }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{ConfigError, IronscanError};

/// 스캔 결과 입력 크기 기본 상한 (16 MiB)
pub const DEFAULT_MAX_INPUT_SIZE: usize = 16 * 1024 * 1024;

/// Ironscan 통합 설정
///
/// `ironscan.toml` 파일의 최상위 구조를 나타냅니다.
/// 각 모듈은 자기 섹션만 읽어 사용합니다.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IronscanConfig {
    /// 일반 설정
    #[serde(default)]
    pub general: GeneralConfig,
    /// 스캔 결과 코덱 설정
    #[serde(default)]
    pub scan_results: ScanResultsSection,
}

impl IronscanConfig {
    /// TOML 파일에서 설정을 로드하고 환경변수 오버라이드를 적용합니다.
    pub async fn load(path: impl AsRef<Path>) -> Result<Self, IronscanError> {
        let mut config = Self::from_file(path).await?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// TOML 파일에서 설정을 로드합니다 (환경변수 오버라이드 없음).
    pub async fn from_file(path: impl AsRef<Path>) -> Result<Self, IronscanError> {
        let path = path.as_ref();
        let content = tokio::fs::read_to_string(path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                IronscanError::Config(ConfigError::FileNotFound {
                    path: path.display().to_string(),
                })
            } else {
                IronscanError::Io(e)
            }
        })?;
        let config = Self::parse(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// TOML 문자열에서 설정을 파싱합니다.
    pub fn parse(toml_str: &str) -> Result<Self, IronscanError> {
        toml::from_str(toml_str).map_err(|e| {
            IronscanError::Config(ConfigError::ParseFailed {
                reason: e.to_string(),
            })
        })
    }

    /// 환경변수로 설정값을 오버라이드합니다.
    ///
    /// 환경변수 네이밍 규칙: `IRONSCAN_{SECTION}_{FIELD}`
    /// 예: `IRONSCAN_SCAN_RESULTS_MAX_INPUT_SIZE=1048576`
    pub fn apply_env_overrides(&mut self) {
        // General
        override_string(&mut self.general.log_level, "IRONSCAN_GENERAL_LOG_LEVEL");
        override_string(&mut self.general.log_format, "IRONSCAN_GENERAL_LOG_FORMAT");

        // Scan results
        override_usize(
            &mut self.scan_results.max_input_size,
            "IRONSCAN_SCAN_RESULTS_MAX_INPUT_SIZE",
        );
        override_bool(
            &mut self.scan_results.pretty_output,
            "IRONSCAN_SCAN_RESULTS_PRETTY_OUTPUT",
        );
        override_bool(
            &mut self.scan_results.accept_legacy_aliases,
            "IRONSCAN_SCAN_RESULTS_ACCEPT_LEGACY_ALIASES",
        );
    }

    /// 설정값의 유효성을 검증합니다.
    ///
    /// 섹션별 상세 범위 검증은 해당 모듈의 `from_core`에서 수행합니다.
    pub fn validate(&self) -> Result<(), IronscanError> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.general.log_level.as_str()) {
            return Err(ConfigError::InvalidValue {
                field: "general.log_level".to_owned(),
                reason: format!("must be one of: {}", valid_levels.join(", ")),
            }
            .into());
        }

        let valid_formats = ["json", "pretty"];
        if !valid_formats.contains(&self.general.log_format.as_str()) {
            return Err(ConfigError::InvalidValue {
                field: "general.log_format".to_owned(),
                reason: format!("must be one of: {}", valid_formats.join(", ")),
            }
            .into());
        }

        if self.scan_results.max_input_size == 0 {
            return Err(ConfigError::InvalidValue {
                field: "scan_results.max_input_size".to_owned(),
                reason: "must be greater than 0".to_owned(),
            }
            .into());
        }

        Ok(())
    }
}

/// 일반 설정
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// 로그 레벨 (trace, debug, info, warn, error)
    pub log_level: String,
    /// 로그 형식 (json, pretty)
    pub log_format: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_owned(),
            log_format: "json".to_owned(),
        }
    }
}

/// 스캔 결과 코덱 설정 섹션
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanResultsSection {
    /// 디코드할 입력의 최대 크기 (바이트)
    pub max_input_size: usize,
    /// 인코드 출력을 들여쓰기할지 여부
    pub pretty_output: bool,
    /// `external_coverage`, `clamav` 같은 레거시 타입 이름 허용 여부
    pub accept_legacy_aliases: bool,
}

impl Default for ScanResultsSection {
    fn default() -> Self {
        Self {
            max_input_size: DEFAULT_MAX_INPUT_SIZE,
            pretty_output: false,
            accept_legacy_aliases: true,
        }
    }
}

// --- 환경변수 오버라이드 헬퍼 ---

fn override_string(target: &mut String, env_key: &str) {
    if let Ok(val) = std::env::var(env_key) {
        *target = val;
    }
}

fn override_bool(target: &mut bool, env_key: &str) {
    if let Ok(val) = std::env::var(env_key) {
        match val.parse::<bool>() {
            Ok(parsed) => *target = parsed,
            Err(_) => warn!(
                env_key,
                value = val.as_str(),
                "failed to parse bool from env var, ignoring"
            ),
        }
    }
}

fn override_usize(target: &mut usize, env_key: &str) {
    if let Ok(val) = std::env::var(env_key) {
        match val.parse::<usize>() {
            Ok(parsed) => *target = parsed,
            Err(_) => warn!(
                env_key,
                value = val.as_str(),
                "failed to parse usize from env var, ignoring"
            ),
        }
    }
}
