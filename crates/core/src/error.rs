//! 에러 타입: 도메인별 에러 정의

/// Ironscan 최상위 에러 타입
#[derive(Debug, thiserror::Error)]
pub enum IronscanError {
    /// 설정 관련 에러
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    /// 스캔 결과 코덱 에러
    #[error("results error: {0}")]
    Results(#[from] ResultsError),

    /// 로깅 초기화 에러
    #[error("logging error: {0}")]
    Logging(String),

    /// I/O 에러
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// 설정 관련 에러
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// 설정 파일을 찾을 수 없음
    #[error("config file not found: {path}")]
    FileNotFound { path: String },

    /// 설정 파싱 실패
    #[error("failed to parse config: {reason}")]
    ParseFailed { reason: String },

    /// 유효하지 않은 설정 값
    #[error("invalid config value for '{field}': {reason}")]
    InvalidValue { field: String, reason: String },
}

/// 스캔 결과 디코드/인코드 에러
///
/// 코덱 크레이트의 상세 에러는 이 형태로 변환되어 상위 계층에 전달됩니다.
#[derive(Debug, thiserror::Error)]
pub enum ResultsError {
    /// 구조적 디코드 실패 또는 payload 디코드 실패
    #[error("decode failed: {0}")]
    Decode(String),

    /// 알 수 없는 결과 타입
    #[error("unsupported results type found: {0}")]
    UnsupportedType(String),

    /// 인코드 실패
    #[error("encode failed: {0}")]
    Encode(String),

    /// 입력 데이터 초과
    #[error("input too large: {size} bytes (max: {max})")]
    TooLarge { size: usize, max: usize },
}
