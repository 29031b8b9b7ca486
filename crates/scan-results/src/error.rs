//! 스캔 결과 코덱 에러 타입
//!
//! [`ScanResultsError`]는 코덱 내부에서 발생할 수 있는 모든 에러를 나타냅니다.
//! `From<ScanResultsError> for IronscanError` 구현을 통해 `?` 연산자로
//! 상위 에러 타입으로 전파됩니다.
//!
//! # 에러 카테고리
//!
//! - **구조**: `Envelope`, `Untranslated`
//! - **discriminator**: `UnsupportedType`
//! - **payload**: `Payload`, `Encode`, `KindMismatch`
//! - **입력 제한**: `TooLarge`
//! - **설정**: `Config`
//!
//! 여러 슬롯이 채워진 untranslated 입력은 에러가 아닙니다.

use ironscan_core::error::{ConfigError, IronscanError, ResultsError};

use crate::kind::ResultKind;

/// 스캔 결과 코덱 도메인 에러
#[derive(Debug, thiserror::Error)]
pub enum ScanResultsError {
    /// `{type, data}` envelope 자체를 읽지 못함
    #[error("malformed results envelope: {0}")]
    Envelope(#[source] serde_json::Error),

    /// 알 수 없는 discriminator (입력 문자열을 그대로 포함)
    #[error("unsupported results type found: {0}")]
    UnsupportedType(String),

    /// 종류별 payload 디코드 실패
    #[error("failed to unmarshal {kind} results: {source}")]
    Payload {
        /// 디코드를 시도한 결과 종류
        kind: ResultKind,
        /// 원본 serde 에러
        source: serde_json::Error,
    },

    /// 종류별 payload 인코드 실패
    #[error("failed to marshal {kind} results: {source}")]
    Encode {
        /// 인코드를 시도한 결과 종류
        kind: ResultKind,
        /// 원본 serde 에러
        source: serde_json::Error,
    },

    /// 레지스트리 항목과 payload 종류가 다름
    #[error("payload kind mismatch: expected {expected}, found {found}")]
    KindMismatch {
        expected: ResultKind,
        found: ResultKind,
    },

    /// untranslated 슬롯 묶음 디코드 실패
    #[error("failed to unmarshal untranslated results: {0}")]
    Untranslated(#[source] serde_json::Error),

    /// 입력 크기 초과
    #[error("input too large: {size} bytes (max: {max})")]
    TooLarge {
        /// 실제 입력 크기 (바이트)
        size: usize,
        /// 최대 허용 크기 (바이트)
        max: usize,
    },

    /// 설정 에러
    #[error("config error: {field}: {reason}")]
    Config {
        /// 설정 필드명
        field: String,
        /// 에러 사유
        reason: String,
    },
}

impl ScanResultsError {
    /// 메트릭 레이블로 사용하는 에러 원인 이름
    pub fn reason(&self) -> &'static str {
        match self {
            Self::Envelope(_) => "envelope",
            Self::UnsupportedType(_) => "unsupported_type",
            Self::Payload { .. } => "payload",
            Self::Encode { .. } => "encode",
            Self::KindMismatch { .. } => "kind_mismatch",
            Self::Untranslated(_) => "untranslated",
            Self::TooLarge { .. } => "too_large",
            Self::Config { .. } => "config",
        }
    }
}

impl From<ScanResultsError> for IronscanError {
    fn from(err: ScanResultsError) -> Self {
        match err {
            ScanResultsError::UnsupportedType(literal) => {
                IronscanError::Results(ResultsError::UnsupportedType(literal))
            }
            ScanResultsError::TooLarge { size, max } => {
                IronscanError::Results(ResultsError::TooLarge { size, max })
            }
            ScanResultsError::Config { field, reason } => {
                IronscanError::Config(ConfigError::InvalidValue { field, reason })
            }
            err @ (ScanResultsError::Encode { .. } | ScanResultsError::KindMismatch { .. }) => {
                IronscanError::Results(ResultsError::Encode(err.to_string()))
            }
            err @ (ScanResultsError::Envelope(_)
            | ScanResultsError::Payload { .. }
            | ScanResultsError::Untranslated(_)) => {
                IronscanError::Results(ResultsError::Decode(err.to_string()))
            }
        }
    }
}
