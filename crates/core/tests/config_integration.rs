//! ironscan.toml 통합 설정 테스트
//!
//! - ironscan.toml.example 파싱 테스트
//! - 부분 설정 로딩 테스트
//! - 환경변수 우선순위 테스트
//! - 파일 로딩 / 잘못된 형식 에러 테스트

use std::io::Write;

use ironscan_core::config::{DEFAULT_MAX_INPUT_SIZE, IronscanConfig};
use ironscan_core::error::{ConfigError, IronscanError};

// =============================================================================
// ironscan.toml.example 파싱 테스트
// =============================================================================

#[test]
fn example_config_parses_successfully() {
    let content = include_str!("../../../ironscan.toml.example");
    let config = IronscanConfig::parse(content).expect("example config should parse");

    assert_eq!(config.general.log_level, "info");
    assert_eq!(config.general.log_format, "json");
    assert_eq!(config.scan_results.max_input_size, DEFAULT_MAX_INPUT_SIZE);
    assert!(!config.scan_results.pretty_output);
    assert!(config.scan_results.accept_legacy_aliases);
}

#[test]
fn example_config_passes_validation() {
    let content = include_str!("../../../ironscan.toml.example");
    let config = IronscanConfig::parse(content).expect("should parse");
    config
        .validate()
        .expect("example config should pass validation");
}

// =============================================================================
// 부분 설정 테스트
// =============================================================================

#[test]
fn only_scan_results_section() {
    let toml = r#"
[scan_results]
max_input_size = 4096
"#;
    let config = IronscanConfig::parse(toml).expect("should parse");
    assert_eq!(config.scan_results.max_input_size, 4096);
    // general은 기본값
    assert_eq!(config.general.log_level, "info");
}

#[test]
fn unknown_section_is_ignored() {
    let toml = r#"
[general]
log_level = "debug"

[not_a_section]
key = "value"
"#;
    let config = IronscanConfig::parse(toml).expect("should parse");
    assert_eq!(config.general.log_level, "debug");
}

#[test]
fn wrong_value_type_is_parse_error() {
    let toml = r#"
[scan_results]
max_input_size = "large"
"#;
    let err = IronscanConfig::parse(toml).unwrap_err();
    assert!(matches!(
        err,
        IronscanError::Config(ConfigError::ParseFailed { .. })
    ));
}

// =============================================================================
// 환경변수 우선순위 테스트
// =============================================================================

#[test]
#[serial_test::serial]
fn env_override_takes_precedence_over_toml() {
    let toml = r#"
[general]
log_level = "info"
"#;

    let original = std::env::var("IRONSCAN_GENERAL_LOG_LEVEL").ok();
    // SAFETY: #[serial]로 직렬화되어 환경변수 조작이 안전합니다.
    unsafe {
        std::env::set_var("IRONSCAN_GENERAL_LOG_LEVEL", "error");
    }

    let mut config = IronscanConfig::parse(toml).expect("should parse");
    config.apply_env_overrides();
    let result = config.general.log_level.clone();

    // SAFETY: 테스트 정리
    unsafe {
        match original {
            Some(val) => std::env::set_var("IRONSCAN_GENERAL_LOG_LEVEL", val),
            None => std::env::remove_var("IRONSCAN_GENERAL_LOG_LEVEL"),
        }
    }

    assert_eq!(result, "error");
}

#[test]
#[serial_test::serial]
fn invalid_env_override_keeps_toml_value() {
    let toml = r#"
[scan_results]
pretty_output = true
"#;

    let original = std::env::var("IRONSCAN_SCAN_RESULTS_PRETTY_OUTPUT").ok();
    // SAFETY: #[serial]로 직렬화되어 환경변수 조작이 안전합니다.
    unsafe {
        std::env::set_var("IRONSCAN_SCAN_RESULTS_PRETTY_OUTPUT", "sometimes");
    }

    let mut config = IronscanConfig::parse(toml).expect("should parse");
    config.apply_env_overrides();
    let result = config.scan_results.pretty_output;

    // SAFETY: 테스트 정리
    unsafe {
        match original {
            Some(val) => std::env::set_var("IRONSCAN_SCAN_RESULTS_PRETTY_OUTPUT", val),
            None => std::env::remove_var("IRONSCAN_SCAN_RESULTS_PRETTY_OUTPUT"),
        }
    }

    assert!(result);
}

// =============================================================================
// 파일 로딩 테스트
// =============================================================================

#[tokio::test]
#[serial_test::serial]
async fn load_applies_env_and_validates() {
    let mut file = tempfile::NamedTempFile::new().expect("tempfile");
    writeln!(file, "[scan_results]\nmax_input_size = 1024").expect("write");

    let original = std::env::var("IRONSCAN_SCAN_RESULTS_MAX_INPUT_SIZE").ok();
    // SAFETY: #[serial]로 직렬화되어 환경변수 조작이 안전합니다.
    unsafe {
        std::env::set_var("IRONSCAN_SCAN_RESULTS_MAX_INPUT_SIZE", "0");
    }

    let result = IronscanConfig::load(file.path()).await;

    // SAFETY: 테스트 정리
    unsafe {
        match original {
            Some(val) => std::env::set_var("IRONSCAN_SCAN_RESULTS_MAX_INPUT_SIZE", val),
            None => std::env::remove_var("IRONSCAN_SCAN_RESULTS_MAX_INPUT_SIZE"),
        }
    }

    // 환경변수로 0이 주입되면 검증에서 실패해야 함
    let err = result.unwrap_err();
    assert!(err.to_string().contains("max_input_size"));
}

#[tokio::test]
async fn from_file_rejects_invalid_values() {
    let mut file = tempfile::NamedTempFile::new().expect("tempfile");
    writeln!(file, "[general]\nlog_format = \"xml\"").expect("write");

    let err = IronscanConfig::from_file(file.path()).await.unwrap_err();
    assert!(matches!(
        err,
        IronscanError::Config(ConfigError::InvalidValue { .. })
    ));
}
