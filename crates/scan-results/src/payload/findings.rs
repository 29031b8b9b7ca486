//! 보안 탐지 계열 payload
//!
//! vulnerability, external_vulnerability, virus, secrets

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use ironscan_core::serde_util::null_as_default;
use ironscan_core::types::{Secret, Vulnerability};

use super::dependency::ScanDependency;

// --- vulnerability ---

/// 취약점 스캔 결과
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VulnerabilityResults {
    #[serde(deserialize_with = "null_as_default")]
    pub vulnerabilities: Vec<VulnerableProduct>,
    pub meta: VulnerabilityMeta,
}

impl VulnerabilityResults {
    /// 모든 제품에 걸친 고유 외부 ID 목록 (정렬됨)
    pub fn external_ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self
            .vulnerabilities
            .iter()
            .flat_map(|product| product.vulnerabilities.iter())
            .map(|v| v.vulnerability.external_id.as_str())
            .collect();
        ids.sort_unstable();
        ids.dedup();
        ids
    }
}

/// 취약점 집계 정보
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VulnerabilityMeta {
    pub vulnerability_count: i64,
    pub resolved_to: String,
}

/// 취약점이 연결된 제품
///
/// `up`, `edition`, `references`, `part`, `language`는 데이터 소스마다
/// 형식이 달라 JSON 값 그대로 보존합니다.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VulnerableProduct {
    pub id: i64,
    pub external_id: String,
    pub source_id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    pub name: String,
    pub org: String,
    pub version: String,
    pub up: Value,
    pub edition: Value,
    #[serde(deserialize_with = "null_as_default")]
    pub aliases: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    pub references: Value,
    pub part: Value,
    pub language: Value,
    #[serde(deserialize_with = "null_as_default")]
    pub vulnerabilities: Vec<ProductVulnerability>,
    /// 이 제품을 찾는 데 사용된 의존성 질의
    pub query: ScanDependency,
}

/// 제품에 연결된 취약점과 그 취약점의 영향을 받는 하위 제품
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductVulnerability {
    #[serde(flatten)]
    pub vulnerability: Vulnerability,
    #[serde(default, deserialize_with = "null_as_default")]
    pub dependencies: Vec<VulnerableProduct>,
}

// --- external_vulnerability ---

/// 외부 취약점 스캐너가 보고한 심각도별 개수
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExternalVulnerabilitiesResults {
    pub critical: i64,
    pub high: i64,
    pub medium: i64,
    pub low: i64,
}

impl ExternalVulnerabilitiesResults {
    pub fn total(&self) -> i64 {
        self.critical + self.high + self.medium + self.low
    }
}

// --- virus ---

/// 파일 경로별 메모 (감염 파일 목록 등)
pub type FileNotes = BTreeMap<String, Vec<String>>;

/// 바이러스 스캔 엔진 정보
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClamavDetails {
    pub clamav_version: String,
    pub clamav_db_version: String,
}

/// 바이러스 스캔 결과
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VirusResults {
    pub known_viruses: i64,
    pub engine_version: String,
    pub scanned_directories: i64,
    pub scanned_files: i64,
    pub infected_files: i64,
    pub data_scanned: String,
    pub data_read: String,
    pub time: String,
    #[serde(deserialize_with = "null_as_default")]
    pub file_notes: FileNotes,
    pub clam_av_details: ClamavDetails,
}

impl VirusResults {
    pub fn is_clean(&self) -> bool {
        self.infected_files == 0
    }
}

// --- secrets ---

/// 파일 단위 시크릿 탐지 결과
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SecretFinding {
    #[serde(flatten)]
    pub secret: Secret,
    #[serde(default)]
    pub file: String,
}

/// 시크릿 스캔 결과
///
/// wire 상에서는 감싸는 객체 없이 탐지 결과 배열 그대로 표현됩니다.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SecretResults {
    pub secrets: Vec<SecretFinding>,
}
