//! 결과 종류별 payload 스키마
//!
//! [`ScanPayload`]는 14가지 payload 중 하나를 담는 닫힌 합 타입입니다.
//! 종류는 variant에서 파생되므로 `kind`와 payload가 어긋날 수 없습니다.
//!
//! - [`project`]: about_yml, buildsystems, community, coverage, difference, ecosystems, license
//! - [`dependency`]: dependency
//! - [`findings`]: vulnerability, external_vulnerability, virus, secrets
//! - [`scoring`]: risk, metrics

pub mod dependency;
pub mod findings;
pub mod project;
pub mod scoring;

pub use dependency::{DependencyMeta, DependencyResults, ScanDependency};
pub use findings::{
    ClamavDetails, ExternalVulnerabilitiesResults, FileNotes, ProductVulnerability,
    SecretFinding, SecretResults, VirusResults, VulnerabilityMeta, VulnerabilityResults,
    VulnerableProduct,
};
pub use project::{
    AboutYmlResults, BuildsystemResults, CommunityResults, Compiler, CoverageResults,
    DifferenceResults, Dockerfile, EcosystemResults, Image, License, LicenseResults, LicenseType,
};
pub use scoring::{MetricsResults, RiskResults};

use crate::kind::ResultKind;

/// 종류별 payload
#[derive(Debug, Clone, PartialEq)]
pub enum ScanPayload {
    AboutYml(AboutYmlResults),
    Buildsystems(BuildsystemResults),
    Community(CommunityResults),
    Coverage(CoverageResults),
    Dependency(DependencyResults),
    Difference(DifferenceResults),
    Ecosystems(EcosystemResults),
    ExternalVulnerability(ExternalVulnerabilitiesResults),
    License(LicenseResults),
    Metrics(MetricsResults),
    Risk(RiskResults),
    Secrets(SecretResults),
    Virus(VirusResults),
    Vulnerability(VulnerabilityResults),
}

impl ScanPayload {
    /// payload의 결과 종류
    pub fn kind(&self) -> ResultKind {
        match self {
            Self::AboutYml(_) => ResultKind::AboutYml,
            Self::Buildsystems(_) => ResultKind::Buildsystems,
            Self::Community(_) => ResultKind::Community,
            Self::Coverage(_) => ResultKind::Coverage,
            Self::Dependency(_) => ResultKind::Dependency,
            Self::Difference(_) => ResultKind::Difference,
            Self::Ecosystems(_) => ResultKind::Ecosystems,
            Self::ExternalVulnerability(_) => ResultKind::ExternalVulnerability,
            Self::License(_) => ResultKind::License,
            Self::Metrics(_) => ResultKind::Metrics,
            Self::Risk(_) => ResultKind::Risk,
            Self::Secrets(_) => ResultKind::Secrets,
            Self::Virus(_) => ResultKind::Virus,
            Self::Vulnerability(_) => ResultKind::Vulnerability,
        }
    }
}

// variant별 `From` 변환과 `as_*` 접근자
macro_rules! payload_variants {
    ($($variant:ident($ty:ty) => $accessor:ident),+ $(,)?) => {
        $(
            impl From<$ty> for ScanPayload {
                fn from(payload: $ty) -> Self {
                    Self::$variant(payload)
                }
            }
        )+

        impl ScanPayload {
            $(
                pub fn $accessor(&self) -> Option<&$ty> {
                    match self {
                        Self::$variant(payload) => Some(payload),
                        _ => None,
                    }
                }
            )+
        }
    };
}

payload_variants! {
    AboutYml(AboutYmlResults) => as_about_yml,
    Buildsystems(BuildsystemResults) => as_buildsystems,
    Community(CommunityResults) => as_community,
    Coverage(CoverageResults) => as_coverage,
    Dependency(DependencyResults) => as_dependency,
    Difference(DifferenceResults) => as_difference,
    Ecosystems(EcosystemResults) => as_ecosystems,
    ExternalVulnerability(ExternalVulnerabilitiesResults) => as_external_vulnerability,
    License(LicenseResults) => as_license,
    Metrics(MetricsResults) => as_metrics,
    Risk(RiskResults) => as_risk,
    Secrets(SecretResults) => as_secrets,
    Virus(VirusResults) => as_virus,
    Vulnerability(VulnerabilityResults) => as_vulnerability,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_follows_variant() {
        let payload = ScanPayload::from(CoverageResults { value: 42.0 });
        assert_eq!(payload.kind(), ResultKind::Coverage);
        assert_eq!(payload.as_coverage().map(|c| c.value), Some(42.0));
        assert!(payload.as_license().is_none());
    }

    #[test]
    fn from_impls_cover_every_kind() {
        let payloads: Vec<ScanPayload> = vec![
            AboutYmlResults::default().into(),
            BuildsystemResults::default().into(),
            CommunityResults::default().into(),
            CoverageResults::default().into(),
            DependencyResults::default().into(),
            DifferenceResults::default().into(),
            EcosystemResults::default().into(),
            ExternalVulnerabilitiesResults::default().into(),
            LicenseResults::default().into(),
            MetricsResults::default().into(),
            RiskResults::default().into(),
            SecretResults::default().into(),
            VirusResults::default().into(),
            VulnerabilityResults::default().into(),
        ];
        let kinds: Vec<ResultKind> = payloads.iter().map(ScanPayload::kind).collect();
        assert_eq!(kinds, ResultKind::ALL.to_vec());
    }
}
