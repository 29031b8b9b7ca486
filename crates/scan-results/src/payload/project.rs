//! 프로젝트 메타데이터 계열 payload
//!
//! about_yml, buildsystems, community, coverage, difference, ecosystems, license

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use ironscan_core::serde_util::{finite_f32, null_as_default};
use ironscan_core::types::Dependency;

/// `.about.yml` 검사 결과
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AboutYmlResults {
    pub message: String,
    pub valid: bool,
    pub content: String,
}

/// 빌드 시스템 탐지 결과
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildsystemResults {
    #[serde(deserialize_with = "null_as_default")]
    pub compilers: Vec<Compiler>,
    #[serde(rename = "docker_file")]
    pub dockerfile: Dockerfile,
}

/// 탐지된 컴파일러
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Compiler {
    pub name: String,
    pub version: String,
}

/// Dockerfile에서 참조하는 이미지
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Image {
    pub name: String,
    pub version: String,
}

/// Dockerfile 분석 결과
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Dockerfile {
    #[serde(deserialize_with = "null_as_default")]
    pub images: Vec<Image>,
    #[serde(deserialize_with = "null_as_default")]
    pub dependencies: Vec<Dependency>,
}

/// 저장소 커뮤니티 지표
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommunityResults {
    pub committers_total_count: i64,
    pub name: String,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commits_last_at: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "null_as_default")]
    pub old_names: Vec<String>,
    pub stars_total_count: i64,
    pub name_changed: bool,
}

impl CommunityResults {
    /// JSON 값에서 커뮤니티 결과를 읽습니다.
    ///
    /// 오래된 워커는 객체 배열을 보내므로, 배열이면 첫 번째 원소를 사용합니다.
    /// 빈 배열은 에러이고 `null`은 기본값입니다.
    pub fn from_value(value: Value) -> Result<Self, serde_json::Error> {
        match value {
            Value::Null => Ok(Self::default()),
            Value::Array(items) => match items.into_iter().next() {
                Some(first) => serde_json::from_value(first),
                None => Err(serde::de::Error::custom("empty community results array")),
            },
            other => serde_json::from_value(other),
        }
    }
}

/// 외부 커버리지 도구가 보고한 테스트 커버리지
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoverageResults {
    pub value: f64,
}

/// 이전 스캔 대비 변경 여부
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DifferenceResults {
    pub checksum: String,
    pub difference: bool,
}

/// 언어별 코드 라인 수
///
/// wire 상에서는 감싸는 객체 없이 `{"Go": 100, "Ruby": 20}` 맵 그대로 표현됩니다.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EcosystemResults {
    pub ecosystems: BTreeMap<String, i64>,
}

impl EcosystemResults {
    /// 라인 수가 가장 많은 언어를 반환합니다.
    pub fn dominant(&self) -> Option<(&str, i64)> {
        self.ecosystems
            .iter()
            .max_by_key(|(_, lines)| **lines)
            .map(|(name, lines)| (name.as_str(), *lines))
    }
}

/// 라이선스 탐지 결과
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LicenseResults {
    pub license: License,
}

/// 탐지된 라이선스
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct License {
    pub name: String,
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    pub types: Vec<LicenseType>,
}

/// 라이선스 종류와 신뢰도
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LicenseType {
    pub name: String,
    #[serde(deserialize_with = "finite_f32")]
    pub confidence: f32,
}
