#![doc = include_str!("../README.md")]
//!
//! # Module Structure
//!
//! - [`error`]: 도메인 에러 타입 (`ScanResultsError`)
//! - [`config`]: 코덱 설정 (`ScanResultsConfig`, builder)
//! - [`kind`]: 결과 종류 (`ResultKind`)
//! - [`payload`]: 종류별 payload 스키마 (`ScanPayload`)
//! - [`registry`]: 종류 이름, 별칭, payload 코덱 테이블
//! - [`translated`]: 태그드 결과 (`TranslatedResult`)
//! - [`untranslated`]: 슬롯 묶음 결과 (`UntranslatedResults`)
//! - [`codec`]: 설정 기반 진입점 (`ResultCodec`)
//! - [`evaluation`]: 평가 레코드 (`Evaluation`)
//!
//! # Architecture
//!
//! ```text
//! bytes --> ResultCodec --+--> {"type","data"} --> registry lookup --> TranslatedResult
//!                         |                                                  ^
//!                         +--> {"license": ...} --> UntranslatedResults -----+
//!                                                       (translate)
//! ```

pub mod codec;
pub mod config;
pub mod error;
pub mod evaluation;
pub mod kind;
pub mod payload;
pub mod registry;
pub mod translated;
pub mod untranslated;

// --- Public API Re-exports ---

// Codec
pub use codec::{
    ResultCodec, decode_translated, decode_untranslated, encode_translated, ingest,
    is_tagged_envelope,
};

// Configuration
pub use config::{ScanResultsConfig, ScanResultsConfigBuilder};

// Error
pub use error::ScanResultsError;

// Types
pub use evaluation::Evaluation;
pub use kind::ResultKind;
pub use payload::ScanPayload;
pub use translated::TranslatedResult;
pub use untranslated::UntranslatedResults;
