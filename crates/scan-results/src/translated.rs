//! 태그드 결과 (`{"type": ..., "data": ...}`)
//!
//! 디코드는 2단계로 진행합니다.
//! 1. envelope만 읽습니다: `type`은 문자열, `data`는 불투명한 JSON 값
//! 2. `type`을 레지스트리에서 찾아 해당 항목의 디코드 함수로 `data`를 읽습니다
//!
//! 인코드는 항상 정식 이름을 사용합니다.

use serde::de::Error as _;
use serde::ser::{Error as _, SerializeStruct};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::error::ScanResultsError;
use crate::kind::ResultKind;
use crate::payload::ScanPayload;
use crate::registry::{self, RegistryEntry};

/// 종류가 확정된 스캔 결과
///
/// 종류는 payload variant에서 파생되므로 항상 payload와 일치합니다.
#[derive(Debug, Clone, PartialEq)]
pub struct TranslatedResult {
    payload: ScanPayload,
}

/// 디코드 전 envelope
#[derive(Debug, Deserialize)]
pub(crate) struct RawEnvelope {
    #[serde(rename = "type")]
    pub(crate) result_type: String,
    #[serde(default)]
    pub(crate) data: Value,
}

impl TranslatedResult {
    pub fn new(payload: impl Into<ScanPayload>) -> Self {
        Self {
            payload: payload.into(),
        }
    }

    /// 결과 종류
    pub fn kind(&self) -> ResultKind {
        self.payload.kind()
    }

    pub fn payload(&self) -> &ScanPayload {
        &self.payload
    }

    pub fn into_payload(self) -> ScanPayload {
        self.payload
    }

    /// `type` 문자열과 `data` 값에서 결과를 만듭니다.
    ///
    /// 레거시 별칭을 허용합니다.
    pub fn from_parts(result_type: &str, data: Value) -> Result<Self, ScanResultsError> {
        Self::from_parts_with(result_type, data, registry::lookup)
    }

    pub(crate) fn from_parts_with(
        result_type: &str,
        data: Value,
        lookup: fn(&str) -> Option<&'static RegistryEntry>,
    ) -> Result<Self, ScanResultsError> {
        let entry = lookup(result_type)
            .ok_or_else(|| ScanResultsError::UnsupportedType(result_type.to_owned()))?;
        Ok(Self {
            payload: entry.decode(data)?,
        })
    }

    /// JSON 값에서 디코드합니다.
    pub fn from_value(value: Value) -> Result<Self, ScanResultsError> {
        let envelope: RawEnvelope =
            serde_json::from_value(value).map_err(ScanResultsError::Envelope)?;
        Self::from_parts(&envelope.result_type, envelope.data)
    }

    /// `data` 값만 인코드합니다.
    pub fn data_value(&self) -> Result<Value, ScanResultsError> {
        registry::entry(self.kind()).encode(&self.payload)
    }

    /// `{"type", "data"}` JSON 값으로 인코드합니다.
    pub fn to_value(&self) -> Result<Value, ScanResultsError> {
        let mut object = serde_json::Map::with_capacity(2);
        object.insert("type".to_owned(), Value::from(self.kind().as_str()));
        object.insert("data".to_owned(), self.data_value()?);
        Ok(Value::Object(object))
    }
}

impl From<ScanPayload> for TranslatedResult {
    fn from(payload: ScanPayload) -> Self {
        Self { payload }
    }
}

impl Serialize for TranslatedResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let data = self.data_value().map_err(S::Error::custom)?;
        let mut state = serializer.serialize_struct("TranslatedResult", 2)?;
        state.serialize_field("type", self.kind().as_str())?;
        state.serialize_field("data", &data)?;
        state.end()
    }
}

impl<'de> Deserialize<'de> for TranslatedResult {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let envelope = RawEnvelope::deserialize(deserializer)?;
        Self::from_parts(&envelope.result_type, envelope.data).map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::payload::{CoverageResults, EcosystemResults, LicenseResults};

    #[test]
    fn decode_alias_and_encode_canonical() {
        let result: TranslatedResult =
            serde_json::from_str(r#"{"type":"external_coverage","data":{"value":42.0}}"#)
                .unwrap();
        assert_eq!(result.kind(), ResultKind::Coverage);
        assert_eq!(
            serde_json::to_string(&result).unwrap(),
            r#"{"type":"coverage","data":{"value":42.0}}"#
        );
    }

    #[test]
    fn type_is_case_insensitive() {
        let result = TranslatedResult::from_value(json!({"type": "Coverage", "data": {"value": 1.0}}))
            .unwrap();
        assert_eq!(result.kind(), ResultKind::Coverage);
    }

    #[test]
    fn unknown_type_echoes_literal() {
        let err = TranslatedResult::from_value(json!({"type": "not_a_real_type", "data": {}}))
            .unwrap_err();
        assert!(matches!(err, ScanResultsError::UnsupportedType(ref t) if t == "not_a_real_type"));

        let err =
            serde_json::from_str::<TranslatedResult>(r#"{"type":"fooresult","data":"x"}"#)
                .unwrap_err();
        assert!(
            err.to_string()
                .contains("unsupported results type found: fooresult")
        );
    }

    #[test]
    fn missing_type_is_envelope_error() {
        let err = TranslatedResult::from_value(json!({"data": {}})).unwrap_err();
        assert!(matches!(err, ScanResultsError::Envelope(_)));

        let err = TranslatedResult::from_value(json!({"type": 7, "data": {}})).unwrap_err();
        assert!(matches!(err, ScanResultsError::Envelope(_)));
    }

    #[test]
    fn payload_mismatch_names_variant() {
        let err = TranslatedResult::from_value(json!({"type": "ecosystems", "data": [1, 2]}))
            .unwrap_err();
        assert!(err.to_string().contains("ecosystems"));
    }

    #[test]
    fn missing_or_null_data_is_empty_payload() {
        let result = TranslatedResult::from_value(json!({"type": "license"})).unwrap();
        assert_eq!(result.kind(), ResultKind::License);
        assert_eq!(result.payload().as_license(), Some(&LicenseResults::default()));

        let result =
            TranslatedResult::from_value(json!({"type": "secrets", "data": null})).unwrap();
        assert!(result.payload().as_secrets().unwrap().secrets.is_empty());

        let result = TranslatedResult::from_value(json!({"type": "risk", "data": null})).unwrap();
        assert_eq!(result.kind(), ResultKind::Risk);
    }

    #[test]
    fn empty_payload_reencodes_as_its_shape() {
        let result =
            TranslatedResult::from_value(json!({"type": "ecosystems", "data": null})).unwrap();
        assert_eq!(result.to_value().unwrap(), json!({"type": "ecosystems", "data": {}}));
    }

    #[test]
    fn out_of_range_confidence_is_payload_error() {
        let raw = json!({"type": "license", "data": {"license": {"name": "MIT",
            "type": [{"name": "MIT", "confidence": 1e39}]}}});
        let err = TranslatedResult::from_value(raw).unwrap_err();
        assert!(matches!(
            err,
            ScanResultsError::Payload {
                kind: ResultKind::License,
                ..
            }
        ));

        let raw = json!({"type": "secrets", "data": [{"rule": "r", "match": "m",
            "confidence": 1e39, "file": "f"}]});
        let err = TranslatedResult::from_value(raw).unwrap_err();
        assert!(matches!(
            err,
            ScanResultsError::Payload {
                kind: ResultKind::Secrets,
                ..
            }
        ));
    }

    #[test]
    fn to_value_matches_serialize() {
        let mut eco = EcosystemResults::default();
        eco.ecosystems.insert("Go".to_owned(), 100);
        eco.ecosystems.insert("Ruby".to_owned(), 20);
        let result = TranslatedResult::new(eco);

        let value = result.to_value().unwrap();
        assert_eq!(value, json!({"type": "ecosystems", "data": {"Go": 100, "Ruby": 20}}));
        assert_eq!(serde_json::to_value(&result).unwrap(), value);
    }

    #[test]
    fn accessors_expose_payload() {
        let result = TranslatedResult::new(CoverageResults { value: 3.5 });
        assert_eq!(result.payload().as_coverage().map(|c| c.value), Some(3.5));
        let payload = result.into_payload();
        assert_eq!(payload.kind(), ResultKind::Coverage);
    }
}
