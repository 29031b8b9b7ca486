//! 코덱 설정
//!
//! [`ScanResultsConfig`]는 core의
//! [`ScanResultsSection`](ironscan_core::config::ScanResultsSection)에서 파생되며
//! 범위 검증을 추가합니다.
//!
//! # 사용 예시
//!
//! ```
//! use ironscan_scan_results::{ScanResultsConfig, ScanResultsConfigBuilder};
//!
//! let config = ScanResultsConfig::default();
//! config.validate().unwrap();
//!
//! let config = ScanResultsConfigBuilder::new()
//!     .max_input_size(1024 * 1024)
//!     .accept_legacy_aliases(false)
//!     .build()
//!     .unwrap();
//! assert!(!config.accept_legacy_aliases);
//! ```

use serde::{Deserialize, Serialize};

use ironscan_core::config::{DEFAULT_MAX_INPUT_SIZE, ScanResultsSection};

use crate::error::ScanResultsError;

/// 입력 크기 상한 (256 MiB)
const MAX_INPUT_SIZE_LIMIT: usize = 256 * 1024 * 1024;

/// 스캔 결과 코덱 설정
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanResultsConfig {
    /// 디코드할 입력의 최대 크기 (바이트)
    pub max_input_size: usize,
    /// 인코드 출력 들여쓰기 여부
    pub pretty_output: bool,
    /// 레거시 타입 이름 허용 여부
    pub accept_legacy_aliases: bool,
}

impl Default for ScanResultsConfig {
    fn default() -> Self {
        Self {
            max_input_size: DEFAULT_MAX_INPUT_SIZE,
            pretty_output: false,
            accept_legacy_aliases: true,
        }
    }
}

impl ScanResultsConfig {
    /// core의 `ScanResultsSection`에서 설정을 생성합니다.
    pub fn from_core(core: &ScanResultsSection) -> Self {
        Self {
            max_input_size: core.max_input_size,
            pretty_output: core.pretty_output,
            accept_legacy_aliases: core.accept_legacy_aliases,
        }
    }

    /// 설정 값의 유효성을 검증합니다.
    ///
    /// - `max_input_size`: 1-268435456 (256 MiB)
    pub fn validate(&self) -> Result<(), ScanResultsError> {
        if self.max_input_size == 0 || self.max_input_size > MAX_INPUT_SIZE_LIMIT {
            return Err(ScanResultsError::Config {
                field: "max_input_size".to_owned(),
                reason: format!("must be 1-{MAX_INPUT_SIZE_LIMIT}"),
            });
        }
        Ok(())
    }
}

/// [`ScanResultsConfig`] 빌더
#[derive(Default)]
pub struct ScanResultsConfigBuilder {
    config: ScanResultsConfig,
}

impl ScanResultsConfigBuilder {
    /// 기본값을 가진 새 빌더를 생성합니다.
    pub fn new() -> Self {
        Self::default()
    }

    /// 최대 입력 크기(바이트)를 설정합니다.
    pub fn max_input_size(mut self, size: usize) -> Self {
        self.config.max_input_size = size;
        self
    }

    /// 인코드 출력 들여쓰기 여부를 설정합니다.
    pub fn pretty_output(mut self, pretty: bool) -> Self {
        self.config.pretty_output = pretty;
        self
    }

    /// 레거시 타입 이름 허용 여부를 설정합니다.
    pub fn accept_legacy_aliases(mut self, accept: bool) -> Self {
        self.config.accept_legacy_aliases = accept;
        self
    }

    /// 설정을 검증하고 빌드합니다.
    ///
    /// # Errors
    ///
    /// 유효성 검증 실패 시 `ScanResultsError::Config` 반환
    pub fn build(self) -> Result<ScanResultsConfig, ScanResultsError> {
        self.config.validate()?;
        Ok(self.config)
    }
}
