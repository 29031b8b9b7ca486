//! 결과 종류 (discriminator)
//!
//! [`ResultKind`]는 닫힌 집합입니다. 새 종류를 추가할 때는 이 열거형과
//! [`registry`](crate::registry)의 정적 테이블만 수정하면 됩니다.

use std::fmt;

use serde::{Deserialize, Serialize};

/// 스캔 결과 종류
///
/// wire 상의 `type` 문자열과 1:1로 대응합니다. 직렬화는 항상 정식 이름을
/// 사용하고, 역직렬화는 레거시 별칭(`external_coverage`, `clamav`)도 허용합니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResultKind {
    AboutYml,
    Buildsystems,
    Community,
    #[serde(alias = "external_coverage")]
    Coverage,
    Dependency,
    Difference,
    Ecosystems,
    ExternalVulnerability,
    License,
    Metrics,
    Risk,
    Secrets,
    #[serde(alias = "clamav")]
    Virus,
    Vulnerability,
}

impl ResultKind {
    /// 모든 종류 (레지스트리 순서)
    pub const ALL: [ResultKind; 14] = [
        Self::AboutYml,
        Self::Buildsystems,
        Self::Community,
        Self::Coverage,
        Self::Dependency,
        Self::Difference,
        Self::Ecosystems,
        Self::ExternalVulnerability,
        Self::License,
        Self::Metrics,
        Self::Risk,
        Self::Secrets,
        Self::Virus,
        Self::Vulnerability,
    ];

    /// 정식 discriminator 문자열을 반환합니다.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AboutYml => "about_yml",
            Self::Buildsystems => "buildsystems",
            Self::Community => "community",
            Self::Coverage => "coverage",
            Self::Dependency => "dependency",
            Self::Difference => "difference",
            Self::Ecosystems => "ecosystems",
            Self::ExternalVulnerability => "external_vulnerability",
            Self::License => "license",
            Self::Metrics => "metrics",
            Self::Risk => "risk",
            Self::Secrets => "secrets",
            Self::Virus => "virus",
            Self::Vulnerability => "vulnerability",
        }
    }

    /// 대소문자를 구분하지 않고 정식 이름 또는 레거시 별칭에서 종류를 찾습니다.
    ///
    /// 알 수 없는 문자열이면 `None`을 반환합니다.
    pub fn from_str_loose(s: &str) -> Option<Self> {
        crate::registry::lookup(s).map(|entry| entry.kind)
    }
}

impl fmt::Display for ResultKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
