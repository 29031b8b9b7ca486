//! 설정 기반 코덱 진입점
//!
//! [`ResultCodec`]은 바이트 입력을 받아 크기 제한, 레거시 별칭 정책,
//! 출력 형식을 적용하고 메트릭을 기록합니다. 모듈 수준 함수
//! ([`decode_translated`], [`decode_untranslated`], [`encode_translated`],
//! [`ingest`])는 기본 설정을 사용합니다.
//!
//! 코덱은 상태가 없으므로 여러 스레드에서 공유해도 됩니다.

use metrics::counter;
use serde_json::Value;
use tracing::trace;

use ironscan_core::metrics::{
    LABEL_KIND, LABEL_REASON, SCAN_RESULTS_DECODE_ERRORS_TOTAL, SCAN_RESULTS_DECODED_TOTAL,
    SCAN_RESULTS_ENCODED_TOTAL,
};

use crate::config::ScanResultsConfig;
use crate::error::ScanResultsError;
use crate::registry;
use crate::translated::{RawEnvelope, TranslatedResult};
use crate::untranslated::UntranslatedResults;

/// 값이 `{"type": <문자열>, "data": ...}` 형태의 태그드 envelope인지 확인합니다.
pub fn is_tagged_envelope(value: &Value) -> bool {
    value.as_object().is_some_and(|object| {
        object.get("type").is_some_and(Value::is_string) && object.contains_key("data")
    })
}

/// 설정이 적용된 스캔 결과 코덱
#[derive(Debug, Clone, Default)]
pub struct ResultCodec {
    config: ScanResultsConfig,
}

impl ResultCodec {
    /// 설정을 검증하고 코덱을 생성합니다.
    pub fn new(config: ScanResultsConfig) -> Result<Self, ScanResultsError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &ScanResultsConfig {
        &self.config
    }

    /// 태그드 결과를 디코드합니다.
    pub fn decode_translated(&self, bytes: &[u8]) -> Result<TranslatedResult, ScanResultsError> {
        record_decode(self.try_decode_translated(bytes))
    }

    /// untranslated 결과를 디코드합니다 (community envelope 규칙 포함).
    pub fn decode_untranslated(
        &self,
        bytes: &[u8],
    ) -> Result<UntranslatedResults, ScanResultsError> {
        let result = self.check_size(bytes).and_then(|()| {
            let value: Value =
                serde_json::from_slice(bytes).map_err(ScanResultsError::Untranslated)?;
            UntranslatedResults::from_value(value)
        });
        if let Err(err) = &result {
            record_error(err);
        }
        result
    }

    /// 태그드 결과를 바이트로 인코드합니다.
    ///
    /// 항상 정식 이름을 사용하고, `pretty_output`이면 들여쓰기합니다.
    pub fn encode_translated(&self, result: &TranslatedResult) -> Result<Vec<u8>, ScanResultsError> {
        let kind = result.kind();
        let value = result.to_value()?;
        let bytes = if self.config.pretty_output {
            serde_json::to_vec_pretty(&value)
        } else {
            serde_json::to_vec(&value)
        }
        .map_err(|source| ScanResultsError::Encode { kind, source })?;

        counter!(SCAN_RESULTS_ENCODED_TOTAL, LABEL_KIND => kind.as_str()).increment(1);
        Ok(bytes)
    }

    /// 어떤 형태든 받아 태그드 결과로 만듭니다.
    ///
    /// 태그드 envelope이면 그대로 디코드하고, 아니면 untranslated로 읽어
    /// 승격합니다. 채워진 슬롯이 없으면 `Ok(None)`
    pub fn ingest(&self, bytes: &[u8]) -> Result<Option<TranslatedResult>, ScanResultsError> {
        if let Err(err) = self.check_size(bytes) {
            record_error(&err);
            return Err(err);
        }
        let value: Value = match serde_json::from_slice(bytes) {
            Ok(value) => value,
            Err(source) => {
                let err = ScanResultsError::Envelope(source);
                record_error(&err);
                return Err(err);
            }
        };

        if is_tagged_envelope(&value) {
            trace!("ingesting tagged results");
            return record_decode(self.translated_from_value(value)).map(Some);
        }

        trace!("ingesting untranslated results");
        match UntranslatedResults::from_value(value) {
            Ok(untranslated) => Ok(untranslated.translate()),
            Err(err) => {
                record_error(&err);
                Err(err)
            }
        }
    }

    fn try_decode_translated(&self, bytes: &[u8]) -> Result<TranslatedResult, ScanResultsError> {
        self.check_size(bytes)?;
        let envelope: RawEnvelope =
            serde_json::from_slice(bytes).map_err(ScanResultsError::Envelope)?;
        self.translated_from_parts(&envelope.result_type, envelope.data)
    }

    fn translated_from_value(&self, value: Value) -> Result<TranslatedResult, ScanResultsError> {
        let envelope: RawEnvelope =
            serde_json::from_value(value).map_err(ScanResultsError::Envelope)?;
        self.translated_from_parts(&envelope.result_type, envelope.data)
    }

    fn translated_from_parts(
        &self,
        result_type: &str,
        data: Value,
    ) -> Result<TranslatedResult, ScanResultsError> {
        let lookup = if self.config.accept_legacy_aliases {
            registry::lookup
        } else {
            registry::lookup_canonical
        };
        TranslatedResult::from_parts_with(result_type, data, lookup)
    }

    fn check_size(&self, bytes: &[u8]) -> Result<(), ScanResultsError> {
        if bytes.len() > self.config.max_input_size {
            return Err(ScanResultsError::TooLarge {
                size: bytes.len(),
                max: self.config.max_input_size,
            });
        }
        Ok(())
    }
}

fn record_decode(
    result: Result<TranslatedResult, ScanResultsError>,
) -> Result<TranslatedResult, ScanResultsError> {
    match &result {
        Ok(translated) => {
            counter!(SCAN_RESULTS_DECODED_TOTAL, LABEL_KIND => translated.kind().as_str())
                .increment(1);
        }
        Err(err) => record_error(err),
    }
    result
}

fn record_error(err: &ScanResultsError) {
    counter!(SCAN_RESULTS_DECODE_ERRORS_TOTAL, LABEL_REASON => err.reason()).increment(1);
}

/// 기본 설정으로 태그드 결과를 디코드합니다.
pub fn decode_translated(bytes: &[u8]) -> Result<TranslatedResult, ScanResultsError> {
    ResultCodec::default().decode_translated(bytes)
}

/// 기본 설정으로 untranslated 결과를 디코드합니다.
pub fn decode_untranslated(bytes: &[u8]) -> Result<UntranslatedResults, ScanResultsError> {
    ResultCodec::default().decode_untranslated(bytes)
}

/// 기본 설정으로 태그드 결과를 인코드합니다.
pub fn encode_translated(result: &TranslatedResult) -> Result<Vec<u8>, ScanResultsError> {
    ResultCodec::default().encode_translated(result)
}

/// 기본 설정으로 입력을 태그드 결과로 만듭니다.
pub fn ingest(bytes: &[u8]) -> Result<Option<TranslatedResult>, ScanResultsError> {
    ResultCodec::default().ingest(bytes)
}
