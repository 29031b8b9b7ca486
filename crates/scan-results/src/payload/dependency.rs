//! 의존성 스캔 payload

use serde::{Deserialize, Serialize};

use ironscan_core::serde_util::null_as_default;
use ironscan_core::types::OutdatedMeta;

/// 의존성 스캔 결과
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DependencyResults {
    #[serde(deserialize_with = "null_as_default")]
    pub dependencies: Vec<ScanDependency>,
    pub meta: DependencyMeta,
}

impl DependencyResults {
    /// 트리 전체를 깊이 우선으로 순회합니다.
    pub fn walk(&self) -> Vec<&ScanDependency> {
        let mut out = Vec::new();
        let mut stack: Vec<&ScanDependency> = self.dependencies.iter().rev().collect();
        while let Some(dep) = stack.pop() {
            out.push(dep);
            stack.extend(dep.dependencies.iter().rev());
        }
        out
    }

    /// 최신 버전보다 뒤처진 의존성 수 (트리 전체)
    pub fn outdated_count(&self) -> usize {
        self.walk()
            .into_iter()
            .filter(|dep| dep.outdated_version.is_some_and(|meta| meta.is_outdated()))
            .count()
    }
}

/// 스캔에서 발견된 의존성 (재귀 구조)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanDependency {
    pub latest_version: String,
    pub org: String,
    pub name: String,
    #[serde(rename = "type")]
    pub dependency_type: String,
    pub package: String,
    pub version: String,
    pub scope: String,
    pub requirement: String,
    /// 의존성이 선언된 파일
    pub file: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dependency_counts: Option<DependencyMeta>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outdated_version: Option<OutdatedMeta>,
    #[serde(deserialize_with = "null_as_default")]
    pub dependencies: Vec<ScanDependency>,
}

/// 의존성 집계 정보
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DependencyMeta {
    pub first_degree_count: i64,
    pub no_version_count: i64,
    pub total_unique_count: i64,
    pub update_available_count: i64,
    pub vulnerable_count: i64,
}
