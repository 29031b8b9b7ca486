//! serde 헬퍼
//!
//! 스캔 워커는 비어 있는 배열/맵을 `null`로 직렬화하는 경우가 많습니다.
//! `#[serde(default)]`만으로는 명시적인 `null`을 처리할 수 없으므로
//! [`null_as_default`]를 `deserialize_with`로 지정하여 기본값으로 읽습니다.
//!
//! `f32` 필드는 [`finite_f32`]로 읽어 범위를 벗어난 숫자를 디코드 시점에 거부합니다.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer};

/// 필드가 `null`이면 `T::default()`로 역직렬화합니다.
///
/// 필드 누락은 `#[serde(default)]`가 처리하므로 함께 지정해야 합니다.
///
/// ```
/// use serde::Deserialize;
///
/// #[derive(Deserialize)]
/// struct Sample {
///     #[serde(default, deserialize_with = "ironscan_core::serde_util::null_as_default")]
///     names: Vec<String>,
/// }
///
/// let sample: Sample = serde_json::from_str(r#"{"names": null}"#).unwrap();
/// assert!(sample.names.is_empty());
/// ```
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// JSON 숫자를 유한한 `f32`로 역직렬화합니다. `null`은 `0.0`
///
/// `f32` 범위를 넘는 값(예: `1e39`)은 무한대가 되어 다시 인코드할 수 없으므로 거부합니다.
pub fn finite_f32<'de, D>(deserializer: D) -> Result<f32, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(value) = Option::<f64>::deserialize(deserializer)? else {
        return Ok(0.0);
    };
    let narrowed = value as f32;
    if !narrowed.is_finite() {
        return Err(D::Error::custom(format!("number {value} out of range for f32")));
    }
    Ok(narrowed)
}
