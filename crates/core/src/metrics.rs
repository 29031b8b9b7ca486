//! 메트릭 상수 및 설명 등록
//!
//! 모든 메트릭의 이름과 설명을 중앙에서 정의합니다.
//! 각 모듈은 이 상수를 사용하여 `metrics::counter!()` 매크로를 호출합니다.
//! 레코더가 설치되지 않은 경우 모든 호출은 no-op입니다.
//!
//! # 네이밍 컨벤션
//!
//! - 접두어: `ironscan_`
//! - 모듈명: `scan_results_`
//! - 접미어: `_total` (counter)
//!
//! # 사용 예시
//!
//! ```ignore
//! use metrics::counter;
//!
//! counter!(
//!     ironscan_core::metrics::SCAN_RESULTS_DECODED_TOTAL,
//!     ironscan_core::metrics::LABEL_KIND => "license"
//! )
//! .increment(1);
//! ```

// ─── 레이블 키 상수 ────────────────────────────────────────────────

/// 결과 종류 레이블 키 (license, vulnerability, ...)
pub const LABEL_KIND: &str = "kind";

/// 에러 원인 레이블 키 (envelope, unsupported_type, payload, ...)
pub const LABEL_REASON: &str = "reason";

// ─── Scan Results 메트릭 ────────────────────────────────────────────

/// Scan Results: 디코드에 성공한 결과 수 (counter, label: kind)
pub const SCAN_RESULTS_DECODED_TOTAL: &str = "ironscan_scan_results_decoded_total";

/// Scan Results: 디코드 실패 수 (counter, label: reason)
pub const SCAN_RESULTS_DECODE_ERRORS_TOTAL: &str = "ironscan_scan_results_decode_errors_total";

/// Scan Results: 인코드된 결과 수 (counter, label: kind)
pub const SCAN_RESULTS_ENCODED_TOTAL: &str = "ironscan_scan_results_encoded_total";

/// Scan Results: untranslated → translated 변환 수 (counter, label: kind)
pub const SCAN_RESULTS_TRANSLATED_TOTAL: &str = "ironscan_scan_results_translated_total";

/// Scan Results: 두 개 이상의 슬롯이 채워진 입력 수 (counter)
pub const SCAN_RESULTS_AMBIGUOUS_TOTAL: &str = "ironscan_scan_results_ambiguous_total";

// ─── 설명 등록 함수 ─────────────────────────────────────────────────

/// 모든 메트릭의 설명(description)을 등록합니다.
///
/// 전역 레코더 설치 후 한 번 호출합니다.
pub fn describe_all() {
    use metrics::describe_counter;

    describe_counter!(
        SCAN_RESULTS_DECODED_TOTAL,
        "Total number of scan results decoded, by result kind"
    );
    describe_counter!(
        SCAN_RESULTS_DECODE_ERRORS_TOTAL,
        "Total number of scan result decode failures, by reason"
    );
    describe_counter!(
        SCAN_RESULTS_ENCODED_TOTAL,
        "Total number of scan results encoded to the tagged wire shape"
    );
    describe_counter!(
        SCAN_RESULTS_TRANSLATED_TOTAL,
        "Total number of untranslated results promoted to the tagged form"
    );
    describe_counter!(
        SCAN_RESULTS_AMBIGUOUS_TOTAL,
        "Total number of untranslated results with more than one populated slot"
    );
}
