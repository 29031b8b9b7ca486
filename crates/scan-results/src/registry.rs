//! 결과 종류 레지스트리
//!
//! 종류마다 정식 이름, 레거시 별칭, payload 디코드/인코드 함수를 묶은
//! [`RegistryEntry`]를 정적 테이블로 보관합니다. 테이블 순서는
//! [`ResultKind::ALL`]과 같으며, untranslated 슬롯 우선순위로도 사용됩니다.
//!
//! 디스패처는 payload 형태(객체/배열/맵)를 가정하지 않고 항목의 디코드
//! 함수에 `data` 값을 그대로 넘깁니다. `data`가 `null`이면 해당 종류의
//! 기본값 payload가 됩니다.

use serde_json::Value;
use tracing::trace;

use crate::error::ScanResultsError;
use crate::kind::ResultKind;
use crate::payload::{CommunityResults, ScanPayload};

type DecodeFn = fn(Value) -> Result<ScanPayload, serde_json::Error>;
type EmptyFn = fn() -> ScanPayload;
/// variant가 다르면 `None`
type EncodeFn = fn(&ScanPayload) -> Option<Result<Value, serde_json::Error>>;

/// 레지스트리 항목
#[derive(Debug)]
pub struct RegistryEntry {
    /// 결과 종류
    pub kind: ResultKind,
    /// 디코드 시에만 허용하는 레거시 이름
    pub aliases: &'static [&'static str],
    decode: DecodeFn,
    encode: EncodeFn,
    empty: EmptyFn,
}

impl RegistryEntry {
    /// 인코드 시 사용하는 정식 이름
    pub fn name(&self) -> &'static str {
        self.kind.as_str()
    }

    /// 정식 이름 또는 별칭과 대소문자 무시로 일치하는지 확인합니다.
    pub fn matches(&self, name: &str) -> bool {
        self.name().eq_ignore_ascii_case(name)
            || self.aliases.iter().any(|alias| alias.eq_ignore_ascii_case(name))
    }

    /// `data` 값을 이 종류의 payload로 디코드합니다.
    ///
    /// `null`은 빈 payload입니다.
    pub fn decode(&self, data: Value) -> Result<ScanPayload, ScanResultsError> {
        trace!(kind = %self.kind, "decoding results payload");
        if data.is_null() {
            return Ok((self.empty)());
        }
        (self.decode)(data).map_err(|source| ScanResultsError::Payload {
            kind: self.kind,
            source,
        })
    }

    /// payload를 wire 상의 `data` 값으로 인코드합니다.
    pub fn encode(&self, payload: &ScanPayload) -> Result<Value, ScanResultsError> {
        trace!(kind = %self.kind, "encoding results payload");
        match (self.encode)(payload) {
            Some(Ok(value)) => Ok(value),
            Some(Err(source)) => Err(ScanResultsError::Encode {
                kind: self.kind,
                source,
            }),
            None => Err(ScanResultsError::KindMismatch {
                expected: self.kind,
                found: payload.kind(),
            }),
        }
    }
}

// payload 타입의 serde 구현을 그대로 사용하는 항목
macro_rules! entry {
    ($kind:ident, $aliases:expr) => {
        entry!($kind, $aliases, |data| serde_json::from_value(data)
            .map(ScanPayload::$kind))
    };
    ($kind:ident, $aliases:expr, $decode:expr) => {
        RegistryEntry {
            kind: ResultKind::$kind,
            aliases: $aliases,
            decode: $decode,
            encode: |payload| match payload {
                ScanPayload::$kind(inner) => Some(serde_json::to_value(inner)),
                _ => None,
            },
            empty: || ScanPayload::$kind(Default::default()),
        }
    };
}

const ENTRIES: [RegistryEntry; ResultKind::ALL.len()] = [
    entry!(AboutYml, &[]),
    entry!(Buildsystems, &[]),
    entry!(Community, &[], |data| CommunityResults::from_value(data)
        .map(ScanPayload::Community)),
    entry!(Coverage, &["external_coverage"]),
    entry!(Dependency, &[]),
    entry!(Difference, &[]),
    entry!(Ecosystems, &[]),
    entry!(ExternalVulnerability, &[]),
    entry!(License, &[]),
    entry!(Metrics, &[]),
    entry!(Risk, &[]),
    entry!(Secrets, &[]),
    entry!(Virus, &["clamav"]),
    entry!(Vulnerability, &[]),
];

// entry()의 인덱스 조회가 성립하도록 컴파일 시점에 순서를 검사
const _: () = {
    let mut index = 0;
    while index < ENTRIES.len() {
        assert!(
            ENTRIES[index].kind as usize == index
                && ResultKind::ALL[index] as usize == index,
            "registry entries must follow ResultKind declaration order"
        );
        index += 1;
    }
};

static REGISTRY: [RegistryEntry; ResultKind::ALL.len()] = ENTRIES;

/// 레지스트리 전체 (우선순위 순서)
pub fn entries() -> &'static [RegistryEntry] {
    &REGISTRY
}

/// 종류에 해당하는 항목을 반환합니다.
pub fn entry(kind: ResultKind) -> &'static RegistryEntry {
    &REGISTRY[kind as usize]
}

/// 정식 이름 또는 레거시 별칭으로 항목을 찾습니다 (대소문자 무시).
///
/// `None`은 알 수 없는 discriminator를 뜻합니다.
pub fn lookup(name: &str) -> Option<&'static RegistryEntry> {
    REGISTRY.iter().find(|entry| entry.matches(name))
}

/// 정식 이름으로만 항목을 찾습니다 (대소문자 무시).
pub fn lookup_canonical(name: &str) -> Option<&'static RegistryEntry> {
    REGISTRY
        .iter()
        .find(|entry| entry.name().eq_ignore_ascii_case(name))
}
