//! 리스크 점수 / 메트릭 payload
//!
//! 두 종류 모두 wire 상에서 감싸는 객체가 생략됩니다.

use serde::{Deserialize, Serialize};

use ironscan_core::types::{Metrics, Scores};

/// 리스크 점수 트리 목록
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RiskResults {
    pub risk: Vec<Scores>,
}

impl RiskResults {
    /// 이름으로 점수 트리를 찾습니다 (대소문자 무시).
    pub fn find(&self, name: &str) -> Option<&Scores> {
        self.risk.iter().find(|s| s.name.eq_ignore_ascii_case(name))
    }
}

/// 리스크 메트릭 묶음
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MetricsResults {
    pub metrics: Metrics,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn risk_is_a_bare_array() {
        let risk: RiskResults = serde_json::from_value(json!([
            {"name": "software", "value": 35.45175730754987, "scopes": null}
        ]))
        .unwrap();
        let software = risk.find("Software").unwrap();
        assert_eq!(software.value, 35.45175730754987);
        assert!(software.scopes.is_empty());

        let value = serde_json::to_value(&risk).unwrap();
        assert!(value.is_array());
        assert_eq!(value[0]["name"], "software");
    }

    #[test]
    fn risk_rejects_object() {
        let result = serde_json::from_value::<RiskResults>(json!({"risk": []}));
        assert!(result.is_err());
    }

    #[test]
    fn metrics_wrapper_is_elided() {
        let raw = json!({
            "id": "pkg:github/yuchi/java-npm-semver",
            "metrics": [{"name": "has_readme", "value": true, "bindings": null}]
        });
        let metrics: MetricsResults = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(metrics.metrics.id, "pkg:github/yuchi/java-npm-semver");
        assert!(metrics.metrics.metrics[0].bindings.is_empty());

        let value = serde_json::to_value(&metrics).unwrap();
        assert_eq!(value["id"], raw["id"]);
        assert!(value.get("metrics").is_some_and(|m| m.is_array()));
    }
}
