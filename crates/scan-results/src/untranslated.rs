//! untranslated 결과 (종류별 슬롯 묶음)
//!
//! 오래된 워커는 `{"license": {...}}`처럼 종류별 키 하나에 payload를 담아
//! 보냅니다. 이 모듈은 그 형태를 읽어 [`TranslatedResult`]로 승격합니다.
//!
//! # 디코드 순서
//!
//! 1. [`decode_as_tagged_envelope`]: 최상위 `"type"`이 `"community"`이면
//!    `data`를 community payload로 읽고 끝냅니다. community payload에도
//!    `name` 같은 키가 있어 슬롯 묶음과 겹치기 때문입니다.
//! 2. [`decode_as_bag`]: 모든 슬롯을 일반 디코드합니다. 알 수 없는 키는 무시합니다.
//!
//! 슬롯이 여러 개 채워져 있어도 에러가 아니며, 레지스트리 순서상 첫 번째
//! 슬롯이 선택됩니다.

use metrics::counter;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use tracing::debug;

use ironscan_core::metrics::{
    LABEL_KIND, SCAN_RESULTS_AMBIGUOUS_TOTAL, SCAN_RESULTS_TRANSLATED_TOTAL,
};

use crate::error::ScanResultsError;
use crate::kind::ResultKind;
use crate::payload::{
    AboutYmlResults, BuildsystemResults, ClamavDetails, CommunityResults, CoverageResults,
    DependencyResults, DifferenceResults, EcosystemResults, ExternalVulnerabilitiesResults,
    LicenseResults, MetricsResults, RiskResults, ScanPayload, SecretResults, VirusResults,
    VulnerabilityResults,
};
use crate::translated::TranslatedResult;

/// 종류별 슬롯 묶음
///
/// 정상 입력은 슬롯 하나만 채워져 있습니다. `virus_details`는 독립 종류가
/// 아니라 `virus` payload의 엔진 정보를 덮어쓰는 보조 슬롯입니다.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UntranslatedResults {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub about_yml: Option<AboutYmlResults>,
    #[serde(rename = "buildsystems", skip_serializing_if = "Option::is_none")]
    pub buildsystem: Option<BuildsystemResults>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub community: Option<CommunityResults>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coverage: Option<CoverageResults>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dependency: Option<DependencyResults>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub difference: Option<DifferenceResults>,
    #[serde(rename = "ecosystems", skip_serializing_if = "Option::is_none")]
    pub ecosystem: Option<EcosystemResults>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_vulnerability: Option<ExternalVulnerabilitiesResults>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license: Option<LicenseResults>,
    #[serde(rename = "clamav", skip_serializing_if = "Option::is_none")]
    pub virus: Option<VirusResults>,
    #[serde(rename = "clam_av_details", skip_serializing_if = "Option::is_none")]
    pub virus_details: Option<ClamavDetails>,
    #[serde(rename = "vulnerabilities", skip_serializing_if = "Option::is_none")]
    pub vulnerability: Option<VulnerabilityResults>,
    #[serde(rename = "secrets", skip_serializing_if = "Option::is_none")]
    pub secret: Option<SecretResults>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub risk: Option<RiskResults>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metrics: Option<MetricsResults>,
}

/// 슬롯 묶음 디코드용 wire 구조
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ResultSlots {
    about_yml: Option<AboutYmlResults>,
    buildsystems: Option<BuildsystemResults>,
    #[serde(deserialize_with = "community_slot")]
    community: Option<CommunityResults>,
    coverage: Option<CoverageResults>,
    dependency: Option<DependencyResults>,
    difference: Option<DifferenceResults>,
    ecosystems: Option<EcosystemResults>,
    external_vulnerability: Option<ExternalVulnerabilitiesResults>,
    license: Option<LicenseResults>,
    clamav: Option<VirusResults>,
    clam_av_details: Option<ClamavDetails>,
    vulnerabilities: Option<VulnerabilityResults>,
    secrets: Option<SecretResults>,
    risk: Option<RiskResults>,
    metrics: Option<MetricsResults>,
}

fn community_slot<'de, D>(deserializer: D) -> Result<Option<CommunityResults>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        Some(value) => CommunityResults::from_value(value)
            .map(Some)
            .map_err(D::Error::custom),
        None => Ok(None),
    }
}

impl From<ResultSlots> for UntranslatedResults {
    fn from(slots: ResultSlots) -> Self {
        Self {
            about_yml: slots.about_yml,
            buildsystem: slots.buildsystems,
            community: slots.community,
            coverage: slots.coverage,
            dependency: slots.dependency,
            difference: slots.difference,
            ecosystem: slots.ecosystems,
            external_vulnerability: slots.external_vulnerability,
            license: slots.license,
            virus: slots.clamav,
            virus_details: slots.clam_av_details,
            vulnerability: slots.vulnerabilities,
            secret: slots.secrets,
            risk: slots.risk,
            metrics: slots.metrics,
        }
    }
}

/// 최상위 `"type": "community"` envelope이면 community 슬롯만 채워 반환합니다.
///
/// discriminator 비교는 대소문자를 구분합니다. envelope이 아니면 `None`
pub fn decode_as_tagged_envelope(
    value: &Value,
) -> Option<Result<UntranslatedResults, ScanResultsError>> {
    if value.get("type").and_then(Value::as_str) != Some("community") {
        return None;
    }

    let data = value.get("data").cloned().unwrap_or(Value::Null);
    let decoded = CommunityResults::from_value(data)
        .map(|community| UntranslatedResults {
            community: Some(community),
            ..UntranslatedResults::default()
        })
        .map_err(|source| ScanResultsError::Payload {
            kind: ResultKind::Community,
            source,
        });
    Some(decoded)
}

/// 모든 슬롯을 일반 디코드합니다.
pub fn decode_as_bag(value: Value) -> Result<UntranslatedResults, ScanResultsError> {
    serde_json::from_value::<ResultSlots>(value)
        .map(UntranslatedResults::from)
        .map_err(ScanResultsError::Untranslated)
}

impl UntranslatedResults {
    /// JSON 값에서 디코드합니다 (community envelope 규칙 포함).
    pub fn from_value(value: Value) -> Result<Self, ScanResultsError> {
        match decode_as_tagged_envelope(&value) {
            Some(decoded) => decoded,
            None => decode_as_bag(value),
        }
    }

    /// 종류 슬롯이 채워져 있는지 확인합니다.
    pub fn has(&self, kind: ResultKind) -> bool {
        match kind {
            ResultKind::AboutYml => self.about_yml.is_some(),
            ResultKind::Buildsystems => self.buildsystem.is_some(),
            ResultKind::Community => self.community.is_some(),
            ResultKind::Coverage => self.coverage.is_some(),
            ResultKind::Dependency => self.dependency.is_some(),
            ResultKind::Difference => self.difference.is_some(),
            ResultKind::Ecosystems => self.ecosystem.is_some(),
            ResultKind::ExternalVulnerability => self.external_vulnerability.is_some(),
            ResultKind::License => self.license.is_some(),
            ResultKind::Metrics => self.metrics.is_some(),
            ResultKind::Risk => self.risk.is_some(),
            ResultKind::Secrets => self.secret.is_some(),
            ResultKind::Virus => self.virus.is_some(),
            ResultKind::Vulnerability => self.vulnerability.is_some(),
        }
    }

    /// 채워진 모든 종류 (레지스트리 순서)
    pub fn populated_kinds(&self) -> Vec<ResultKind> {
        ResultKind::ALL
            .into_iter()
            .filter(|kind| self.has(*kind))
            .collect()
    }

    /// 번역 시 선택될 종류. 채워진 슬롯이 없으면 `None`
    pub fn active_kind(&self) -> Option<ResultKind> {
        ResultKind::ALL.into_iter().find(|kind| self.has(*kind))
    }

    /// 채워진 종류 슬롯이 없으면 `true`
    ///
    /// `virus_details`만 있는 경우도 비어 있는 것으로 봅니다.
    pub fn is_empty(&self) -> bool {
        self.active_kind().is_none()
    }

    /// 태그드 결과로 승격합니다.
    ///
    /// 채워진 슬롯이 없으면 `None`을 반환합니다. 여러 슬롯이 채워져 있으면
    /// 레지스트리 순서상 첫 번째 슬롯을 사용합니다.
    pub fn translate(mut self) -> Option<TranslatedResult> {
        let populated = self.populated_kinds();
        let kind = *populated.first()?;

        if populated.len() > 1 {
            debug!(
                selected = %kind,
                populated = ?populated,
                "untranslated results have more than one populated slot"
            );
            counter!(SCAN_RESULTS_AMBIGUOUS_TOTAL).increment(1);
        }

        let payload = self.take(kind)?;
        counter!(SCAN_RESULTS_TRANSLATED_TOTAL, LABEL_KIND => kind.as_str()).increment(1);
        Some(TranslatedResult::from(payload))
    }

    /// 슬롯을 꺼내 payload로 만듭니다.
    fn take(&mut self, kind: ResultKind) -> Option<ScanPayload> {
        let payload: ScanPayload = match kind {
            ResultKind::AboutYml => self.about_yml.take()?.into(),
            ResultKind::Buildsystems => self.buildsystem.take()?.into(),
            ResultKind::Community => self.community.take()?.into(),
            ResultKind::Coverage => self.coverage.take()?.into(),
            ResultKind::Dependency => self.dependency.take()?.into(),
            ResultKind::Difference => self.difference.take()?.into(),
            ResultKind::Ecosystems => self.ecosystem.take()?.into(),
            ResultKind::ExternalVulnerability => self.external_vulnerability.take()?.into(),
            ResultKind::License => self.license.take()?.into(),
            ResultKind::Metrics => self.metrics.take()?.into(),
            ResultKind::Risk => self.risk.take()?.into(),
            ResultKind::Secrets => self.secret.take()?.into(),
            ResultKind::Virus => {
                let mut virus = self.virus.take()?;
                // 보조 슬롯이 있으면 payload 자체의 엔진 정보를 덮어씀
                if let Some(details) = self.virus_details.take() {
                    virus.clam_av_details = details;
                }
                virus.into()
            }
            ResultKind::Vulnerability => self.vulnerability.take()?.into(),
        };
        Some(payload)
    }
}

impl<'de> Deserialize<'de> for UntranslatedResults {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Self::from_value(value).map_err(D::Error::custom)
    }
}
