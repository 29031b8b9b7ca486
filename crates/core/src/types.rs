//! 도메인 타입: 스캔 결과 payload가 공유하는 공통 데이터 구조
//!
//! 의존성, 취약점, 시크릿, 리스크 점수 트리처럼 여러 스캔 종류에서
//! 함께 참조하는 타입을 정의합니다. 모든 구조체는 스캔 워커가 필드를
//! 생략하거나 `null`을 보내는 경우를 허용하도록 `#[serde(default)]`를 사용합니다.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::serde_util::{finite_f32, null_as_default};

/// 생태계(ecosystem) 스코프 이름
pub const ECOSYSTEM_SCOPE: &str = "ecosystem";
/// 공급망(supply chain) 스코프 이름
pub const SUPPLY_CHAIN_SCOPE: &str = "supply chain";
/// 기술(technology) 스코프 이름
pub const TECHNOLOGY_SCOPE: &str = "technology";

// --- 의존성 ---

/// 의존성 해석 API가 반환하는 패키지 의존성
///
/// 빌드 시스템 스캔의 Dockerfile 의존성 목록 등에서 사용됩니다.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Dependency {
    /// 패키지 이름
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,
    /// 해석된 버전
    pub version: String,
    /// 최신 버전
    pub latest_version: String,
    /// 조직 / 그룹 ID
    pub org: String,
    /// 패키지 타입 (maven, gem, npm 등)
    #[serde(rename = "type")]
    pub dependency_type: String,
    /// 패키징 형식 (jar 등)
    pub package: String,
    /// 의존성 스코프 (compile, test 등)
    pub scope: String,
    /// 요구 버전 표현식
    pub requirement: String,
    /// 하위 의존성
    #[serde(deserialize_with = "null_as_default")]
    pub dependencies: Vec<Dependency>,
    /// 해석 신뢰도 (0.0 - 1.0)
    #[serde(deserialize_with = "finite_f32")]
    pub confidence: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    /// 최신 버전 대비 뒤처진 정도
    pub outdated_version: OutdatedMeta,
    /// 검색 매칭 문자열
    #[serde(
        skip_serializing_if = "Vec::is_empty",
        deserialize_with = "null_as_default"
    )]
    pub matches: Vec<String>,
}

impl fmt::Display for Dependency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.version.is_empty() {
            write!(f, "{}", self.name)
        } else {
            write!(f, "{}@{}", self.name, self.version)
        }
    }
}

/// 의존성이 최신 버전보다 몇 버전 뒤처졌는지 나타냅니다.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutdatedMeta {
    pub major_behind: i64,
    pub minor_behind: i64,
    pub patch_behind: i64,
}

impl OutdatedMeta {
    /// 하나라도 뒤처진 버전이 있으면 `true`를 반환합니다.
    pub fn is_outdated(&self) -> bool {
        self.major_behind > 0 || self.minor_behind > 0 || self.patch_behind > 0
    }
}

// --- 취약점 ---

/// 취약점 데이터베이스의 단일 취약점 레코드
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Vulnerability {
    pub id: i64,
    /// 외부 식별자 (예: CVE-2017-7669)
    pub external_id: String,
    pub source_id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub summary: String,
    /// 점수 (문자열 그대로 보존, 예: "8.5")
    #[serde(deserialize_with = "null_as_default")]
    pub score: String,
    #[serde(deserialize_with = "null_as_default")]
    pub score_version: String,
    #[serde(deserialize_with = "null_as_default")]
    pub score_system: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score_details: Option<ScoreDetails>,
    #[serde(deserialize_with = "null_as_default")]
    pub vector: String,
    #[serde(deserialize_with = "null_as_default")]
    pub access_complexity: String,
    #[serde(deserialize_with = "null_as_default")]
    pub vulnerability_authentication: String,
    #[serde(deserialize_with = "null_as_default")]
    pub confidentiality_impact: String,
    #[serde(deserialize_with = "null_as_default")]
    pub integrity_impact: String,
    #[serde(deserialize_with = "null_as_default")]
    pub availability_impact: String,
    /// 워커별로 형식이 다른 필드는 JSON 값 그대로 보존합니다.
    pub vulnerability_source: serde_json::Value,
    pub assessment_check: serde_json::Value,
    pub scanner: serde_json::Value,
    #[serde(deserialize_with = "null_as_default")]
    pub recommendation: String,
    #[serde(deserialize_with = "null_as_default")]
    pub references: Vec<Reference>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl fmt::Display for Vulnerability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.score.is_empty() {
            write!(f, "{}", self.external_id)
        } else {
            write!(f, "{} (score: {})", self.external_id, self.score)
        }
    }
}

/// 취약점 참조 링크
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Reference {
    #[serde(rename = "type")]
    pub reference_type: String,
    pub source: String,
    pub url: String,
    pub text: String,
}

/// CVSS 점수 상세
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cvssv2: Option<CvssV2>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cvssv3: Option<CvssV3>,
}

/// CVSS v2 벡터
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CvssV2 {
    pub vector_string: String,
    pub access_vector: String,
    pub access_complexity: String,
    pub authentication: String,
    pub confidentiality_impact: String,
    pub integrity_impact: String,
    pub availability_impact: String,
    pub base_score: f64,
}

/// CVSS v3 벡터
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CvssV3 {
    pub vector_string: String,
    pub attack_vector: String,
    pub attack_complexity: String,
    pub privileges_required: String,
    pub user_interaction: String,
    pub scope: String,
    pub confidentiality_impact: String,
    pub integrity_impact: String,
    pub availability_impact: String,
    pub base_score: f64,
    pub base_severity: String,
}

// --- 시크릿 ---

/// 시크릿 탐지 규칙에 매칭된 문자열
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Secret {
    /// 매칭된 규칙 이름 (예: "Slack Webhook")
    pub rule: String,
    /// 마스킹된 매칭 문자열
    #[serde(rename = "match")]
    pub matched: String,
    /// 탐지 신뢰도
    #[serde(deserialize_with = "finite_f32")]
    pub confidence: f32,
}

// --- 리스크 메트릭 / 점수 트리 ---

/// 프로젝트의 리스크 메트릭 묶음
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Metrics {
    /// 대상 식별자 (예: `pkg:github/yuchi/java-npm-semver`)
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub metrics: Vec<Metric>,
}

impl Metrics {
    /// 이름으로 메트릭을 검색합니다.
    pub fn find(&self, name: &str) -> Option<&Metric> {
        self.metrics.iter().find(|m| m.name == name)
    }
}

/// 단일 메트릭
///
/// `value`는 숫자, 타임스탬프 문자열, 월별 카운트 배열 등 메트릭마다 형식이
/// 다르므로 JSON 값 그대로 보존합니다.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Metric {
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub bindings: Vec<ScoreBinding>,
    #[serde(deserialize_with = "null_as_default")]
    pub severity: String,
    pub severity_rank: i64,
    pub value: serde_json::Value,
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    pub metric_type: String,
    #[serde(deserialize_with = "null_as_default")]
    pub sources: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub related_metrics: Vec<String>,
}

/// 메트릭이 어느 스코프/카테고리/속성에 속하는지 나타내는 매핑
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreBinding {
    pub metric: String,
    pub scope: String,
    pub category: String,
    pub attribute: String,
    pub source: String,
}

/// 점수 트리 최상위 노드
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Scores {
    pub name: String,
    pub value: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub scopes: Vec<Scope>,
}

impl Scores {
    /// 이름으로 스코프를 찾습니다.
    ///
    /// 없으면 값이 0인 같은 이름의 스코프를 반환합니다.
    pub fn scope(&self, name: &str) -> Scope {
        self.scopes
            .iter()
            .find(|s| s.name == name)
            .cloned()
            .unwrap_or_else(|| Scope {
                name: name.to_owned(),
                ..Scope::default()
            })
    }
}

/// 점수 트리 두 번째 단계
///
/// 하위 카테고리는 계산 시에만 사용하며 직렬화하지 않습니다.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Scope {
    pub name: String,
    pub value: f64,
    #[serde(skip)]
    pub categories: Vec<Category>,
}

/// 점수 트리 세 번째 단계
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Category {
    pub name: String,
    pub value: f64,
    #[serde(skip)]
    pub attributes: Vec<Attribute>,
}

/// 점수 트리 말단 노드
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Attribute {
    pub name: String,
    pub value: f64,
}
