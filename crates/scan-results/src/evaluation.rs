//! 평가(evaluation) 레코드
//!
//! 원본 `results` JSON과 함께 파싱된 untranslated/translated 형태를 보관합니다.
//! 파싱된 형태는 직렬화하지 않으며, wire에는 항상 `results`만 나갑니다.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::codec::is_tagged_envelope;
use crate::error::ScanResultsError;
use crate::kind::ResultKind;
use crate::translated::TranslatedResult;
use crate::untranslated::UntranslatedResults;

/// 단일 스캔 평가
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Evaluation {
    pub id: String,
    pub team_id: String,
    pub project_id: String,
    pub analysis_id: String,
    #[serde(rename = "type")]
    pub scan_type: String,
    pub status: String,
    /// 원본 결과 JSON (태그드 또는 untranslated)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub results: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(skip)]
    pub untranslated_results: Option<UntranslatedResults>,
    #[serde(skip)]
    pub translated_results: Option<TranslatedResult>,
}

impl Evaluation {
    /// `results`를 파싱해 typed 형태를 채웁니다.
    ///
    /// 태그드 envelope이면 `translated_results`, 그 외에는
    /// `untranslated_results`에 저장합니다. `results`가 없으면 아무것도 하지 않습니다.
    pub fn load_results(&mut self) -> Result<(), ScanResultsError> {
        let Some(results) = &self.results else {
            return Ok(());
        };

        if is_tagged_envelope(results) {
            self.translated_results = Some(TranslatedResult::from_value(results.clone())?);
            self.untranslated_results = None;
        } else {
            self.untranslated_results = Some(UntranslatedResults::from_value(results.clone())?);
            self.translated_results = None;
        }
        Ok(())
    }

    /// untranslated 결과를 태그드 결과로 승격하고 `results`를 다시 씁니다.
    ///
    /// untranslated 결과가 없으면 아무것도 하지 않으므로 여러 번 호출해도 됩니다.
    pub fn translate(&mut self) -> Result<(), ScanResultsError> {
        let Some(untranslated) = self.untranslated_results.take() else {
            return Ok(());
        };

        let Some(translated) = untranslated.translate() else {
            debug!(evaluation = %self.id, "no results to translate");
            return Ok(());
        };

        self.results = Some(translated.to_value()?);
        self.translated_results = Some(translated);
        Ok(())
    }

    /// 현재 결과 종류 (태그드 결과 우선)
    pub fn result_kind(&self) -> Option<ResultKind> {
        self.translated_results
            .as_ref()
            .map(TranslatedResult::kind)
            .or_else(|| {
                self.untranslated_results
                    .as_ref()
                    .and_then(UntranslatedResults::active_kind)
            })
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::payload::LicenseResults;

    fn untranslated_license() -> Evaluation {
        Evaluation {
            untranslated_results: Some(UntranslatedResults {
                license: Some(LicenseResults::default()),
                ..Default::default()
            }),
            ..Default::default()
        }
    }

    #[test]
    fn translate_promotes_untranslated() {
        let mut evaluation = untranslated_license();
        assert!(evaluation.translated_results.is_none());

        evaluation.translate().unwrap();

        assert!(evaluation.untranslated_results.is_none());
        let translated = evaluation.translated_results.as_ref().unwrap();
        assert_eq!(translated.kind(), ResultKind::License);
        let results = evaluation.results.as_ref().unwrap();
        assert_eq!(results["type"], "license");
        assert!(results.get("data").is_some());
    }

    #[test]
    fn translate_twice_is_noop() {
        let mut evaluation = untranslated_license();
        evaluation.translate().unwrap();
        let first = evaluation.clone();

        evaluation.translate().unwrap();

        assert!(evaluation.untranslated_results.is_none());
        assert_eq!(evaluation, first);
        assert_eq!(evaluation.result_kind(), Some(ResultKind::License));
    }

    #[test]
    fn translate_empty_bag_leaves_results() {
        let mut evaluation = Evaluation {
            untranslated_results: Some(UntranslatedResults::default()),
            ..Default::default()
        };
        evaluation.translate().unwrap();
        assert!(evaluation.untranslated_results.is_none());
        assert!(evaluation.translated_results.is_none());
        assert!(evaluation.results.is_none());
    }

    #[test]
    fn load_tagged_results() {
        let mut evaluation: Evaluation = serde_json::from_value(json!({
            "id": "e1",
            "type": "scan",
            "results": {"type": "coverage", "data": {"value": 12.5}}
        }))
        .unwrap();
        evaluation.load_results().unwrap();

        assert_eq!(evaluation.scan_type, "scan");
        assert!(evaluation.untranslated_results.is_none());
        assert_eq!(evaluation.result_kind(), Some(ResultKind::Coverage));
    }

    #[test]
    fn load_untranslated_then_translate() {
        let mut evaluation: Evaluation = serde_json::from_value(json!({
            "id": "e2",
            "results": {"difference": {"checksum": "abc", "difference": true}}
        }))
        .unwrap();
        evaluation.load_results().unwrap();
        assert!(evaluation.translated_results.is_none());
        assert_eq!(evaluation.result_kind(), Some(ResultKind::Difference));

        evaluation.translate().unwrap();
        assert_eq!(
            evaluation.results,
            Some(json!({"type": "difference", "data": {"checksum": "abc", "difference": true}}))
        );
    }

    #[test]
    fn load_community_envelope_as_tagged() {
        // 태그드 envelope 판정이 먼저 적용됨
        let mut evaluation = Evaluation {
            results: Some(json!({"type": "community", "data": {"name": "ironscan"}})),
            ..Default::default()
        };
        evaluation.load_results().unwrap();
        assert_eq!(evaluation.result_kind(), Some(ResultKind::Community));
    }

    #[test]
    fn load_without_results_is_noop() {
        let mut evaluation = Evaluation::default();
        evaluation.load_results().unwrap();
        assert!(evaluation.result_kind().is_none());
    }

    #[test]
    fn load_unknown_tagged_type_fails() {
        let mut evaluation = Evaluation {
            results: Some(json!({"type": "fooresult", "data": {}})),
            ..Default::default()
        };
        assert!(matches!(
            evaluation.load_results(),
            Err(ScanResultsError::UnsupportedType(_))
        ));
    }

    #[test]
    fn typed_forms_are_not_serialized() {
        let mut evaluation = untranslated_license();
        evaluation.id = "e3".to_owned();
        evaluation.translate().unwrap();

        let value = serde_json::to_value(&evaluation).unwrap();
        assert!(value.get("untranslated_results").is_none());
        assert!(value.get("translated_results").is_none());
        assert_eq!(value["results"]["type"], "license");
        assert_eq!(value["id"], "e3");
    }
}
