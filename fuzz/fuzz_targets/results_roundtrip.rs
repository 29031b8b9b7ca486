#![no_main]

use std::collections::BTreeMap;

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

use ironscan_scan_results::payload::{
    CoverageResults, DifferenceResults, EcosystemResults, ExternalVulnerabilitiesResults,
};
use ironscan_scan_results::{ScanPayload, TranslatedResult, decode_translated, encode_translated};

/// 퍼저용 구조적 payload 입력
#[derive(Arbitrary, Debug)]
enum FuzzPayload {
    /// 정수 백분율 (부동소수점 파싱 오차 제외)
    Coverage(i32),
    Difference { checksum: String, difference: bool },
    Ecosystems(Vec<(String, i64)>),
    ExternalVulnerability { critical: i64, high: i64, medium: i64, low: i64 },
}

impl FuzzPayload {
    fn to_payload(&self) -> ScanPayload {
        match self {
            FuzzPayload::Coverage(value) => CoverageResults {
                value: f64::from(*value),
            }
            .into(),
            FuzzPayload::Difference {
                checksum,
                difference,
            } => DifferenceResults {
                checksum: checksum.clone(),
                difference: *difference,
            }
            .into(),
            FuzzPayload::Ecosystems(pairs) => EcosystemResults {
                ecosystems: pairs.iter().take(64).cloned().collect::<BTreeMap<_, _>>(),
            }
            .into(),
            FuzzPayload::ExternalVulnerability {
                critical,
                high,
                medium,
                low,
            } => ExternalVulnerabilitiesResults {
                critical: *critical,
                high: *high,
                medium: *medium,
                low: *low,
            }
            .into(),
        }
    }
}

fuzz_target!(|input: FuzzPayload| {
    let original = TranslatedResult::new(input.to_payload());

    let bytes = encode_translated(&original).expect("payload must encode");
    let decoded = decode_translated(&bytes).expect("encoded payload must decode");
    assert_eq!(decoded, original);
});
